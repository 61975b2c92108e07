// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-entry parameter name configuration

use serde::{Deserialize, Serialize};

/// Which host parameters a property-set entry reads for an override value
///
/// `compatible_parameter_name` is a legacy spelling kept so older projects
/// still export their overrides. An empty name is never looked up.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryMap {
    /// Preferred override parameter name
    pub primary_parameter_name: String,
    /// Legacy-compatible override parameter name
    #[serde(default)]
    pub compatible_parameter_name: String,
}

impl EntryMap {
    /// Create an entry with only a primary parameter name
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary_parameter_name: primary.into(),
            compatible_parameter_name: String::new(),
        }
    }

    /// Set the legacy-compatible parameter name
    pub fn with_compatible(mut self, compatible: impl Into<String>) -> Self {
        self.compatible_parameter_name = compatible.into();
        self
    }

    /// Override names in lookup order: primary, then compatible
    pub fn override_names(&self) -> [&str; 2] {
        [
            self.primary_parameter_name.as_str(),
            self.compatible_parameter_name.as_str(),
        ]
    }
}
