// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Measurements captured while exporting an element as an extrusion

use serde::{Deserialize, Serialize};

/// Scaled measurements of an extruded body
///
/// Produced upstream by geometry analysis when an element's body is a single
/// profile swept along a direction. All values are already in export units;
/// calculators only read them. A zero field means "not measured".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtrusionData {
    /// Area of the extruded profile
    pub scaled_area: f64,
    /// Extrusion depth
    pub scaled_length: f64,
    /// Profile width (local X extent)
    pub scaled_width: f64,
    /// Profile height (local Y extent)
    pub scaled_height: f64,
    /// Perimeter of the outer profile boundary
    pub scaled_outer_perimeter: f64,
    /// Summed perimeter of profile holes
    pub scaled_inner_perimeter: f64,
}

impl ExtrusionData {
    /// Create extrusion data with only the profile area set
    pub fn with_area(scaled_area: f64) -> Self {
        Self {
            scaled_area,
            ..Self::default()
        }
    }

    /// Set the extrusion depth
    pub fn length(mut self, scaled_length: f64) -> Self {
        self.scaled_length = scaled_length;
        self
    }
}
