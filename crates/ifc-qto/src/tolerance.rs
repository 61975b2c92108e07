// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Numeric tolerances

/// Length tolerance used by the exporter
pub const EPS: f64 = 1.0e-9;

/// Smallest area accepted as a real measurement
pub const AREA_EPS: f64 = EPS * EPS;

/// Check if an area is large enough to export
#[inline]
pub fn is_exportable_area(area: f64) -> bool {
    area > AREA_EPS
}
