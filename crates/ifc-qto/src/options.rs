// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Calculator options

use ifc_qto_model::{QtoError, Result};
use serde::{Deserialize, Serialize};

/// What to do when an override parameter exists but is too small to export
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateOverride {
    /// Stop and report the element as having no value
    #[default]
    Fail,
    /// Ignore the override and try geometry and built-in sources
    Continue,
}

/// Options shared by the quantity calculators
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverOptions {
    /// Handling of present-but-degenerate override parameters
    pub degenerate_override: DegenerateOverride,
}

impl ResolverOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set handling of degenerate override values
    pub fn with_degenerate_override(mut self, policy: DegenerateOverride) -> Self {
        self.degenerate_override = policy;
        self
    }

    /// Load options from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| QtoError::config(e.to_string()))
    }
}
