// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core identifier types shared by lookups and calculators

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe element identifier
///
/// Wraps the host's raw element id. Element types use the same id space, so an
/// element's type is also addressed by an `ElementId`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ElementId(pub u32);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for ElementId {
    fn from(id: u32) -> Self {
        ElementId(id)
    }
}

impl From<ElementId> for u32 {
    fn from(id: ElementId) -> Self {
        id.0
    }
}

/// Host-defined parameters that are not addressed by a user-visible name
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuiltInParameter {
    /// Total computed area of a host element (all faces, not a section)
    HostAreaComputed,
}

impl BuiltInParameter {
    /// Host name of the parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            BuiltInParameter::HostAreaComputed => "HOST_AREA_COMPUTED",
        }
    }

    /// Parse a host parameter name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "HOST_AREA_COMPUTED" => Some(BuiltInParameter::HostAreaComputed),
            _ => None,
        }
    }
}

impl fmt::Display for BuiltInParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuiltInParameter {
    type Err = crate::QtoError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| crate::QtoError::config(format!("unknown built-in parameter {s}")))
    }
}
