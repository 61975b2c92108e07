// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host-to-export unit conversion

use ifc_qto_model::{QtoError, Result, UnitScaler};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// SI prefixes as used by IFCSIUNIT
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SiPrefix {
    Exa,
    Peta,
    Tera,
    Giga,
    Mega,
    Kilo,
    Hecto,
    Deca,
    Deci,
    Centi,
    Milli,
    Micro,
    Nano,
    Pico,
    Femto,
    Atto,
}

impl SiPrefix {
    /// Multiplier applied to the base unit
    pub fn scale(&self) -> f64 {
        match self {
            SiPrefix::Exa => 1e18,
            SiPrefix::Peta => 1e15,
            SiPrefix::Tera => 1e12,
            SiPrefix::Giga => 1e9,
            SiPrefix::Mega => 1e6,
            SiPrefix::Kilo => 1e3,
            SiPrefix::Hecto => 1e2,
            SiPrefix::Deca => 1e1,
            SiPrefix::Deci => 1e-1,
            SiPrefix::Centi => 1e-2,
            SiPrefix::Milli => 1e-3,
            SiPrefix::Micro => 1e-6,
            SiPrefix::Nano => 1e-9,
            SiPrefix::Pico => 1e-12,
            SiPrefix::Femto => 1e-15,
            SiPrefix::Atto => 1e-18,
        }
    }

    /// IFC enumeration name (without dots)
    pub fn as_str(&self) -> &'static str {
        match self {
            SiPrefix::Exa => "EXA",
            SiPrefix::Peta => "PETA",
            SiPrefix::Tera => "TERA",
            SiPrefix::Giga => "GIGA",
            SiPrefix::Mega => "MEGA",
            SiPrefix::Kilo => "KILO",
            SiPrefix::Hecto => "HECTO",
            SiPrefix::Deca => "DECA",
            SiPrefix::Deci => "DECI",
            SiPrefix::Centi => "CENTI",
            SiPrefix::Milli => "MILLI",
            SiPrefix::Micro => "MICRO",
            SiPrefix::Nano => "NANO",
            SiPrefix::Pico => "PICO",
            SiPrefix::Femto => "FEMTO",
            SiPrefix::Atto => "ATTO",
        }
    }

    /// Parse an IFC prefix name (case-insensitive, dots optional)
    pub fn parse(s: &str) -> Option<Self> {
        let prefix = match s.trim_matches('.').to_uppercase().as_str() {
            "EXA" => SiPrefix::Exa,
            "PETA" => SiPrefix::Peta,
            "TERA" => SiPrefix::Tera,
            "GIGA" => SiPrefix::Giga,
            "MEGA" => SiPrefix::Mega,
            "KILO" => SiPrefix::Kilo,
            "HECTO" => SiPrefix::Hecto,
            "DECA" => SiPrefix::Deca,
            "DECI" => SiPrefix::Deci,
            "CENTI" => SiPrefix::Centi,
            "MILLI" => SiPrefix::Milli,
            "MICRO" => SiPrefix::Micro,
            "NANO" => SiPrefix::Nano,
            "PICO" => SiPrefix::Pico,
            "FEMTO" => SiPrefix::Femto,
            "ATTO" => SiPrefix::Atto,
            _ => return None,
        };
        Some(prefix)
    }
}

/// A length unit, either SI metres or a conversion-based unit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LengthUnit {
    /// Metre with optional SI prefix
    Metre(Option<SiPrefix>),
    Inch,
    Foot,
    Yard,
    Mile,
}

impl LengthUnit {
    /// Size of one unit in metres
    pub fn metres(&self) -> f64 {
        match self {
            LengthUnit::Metre(prefix) => prefix.map(|p| p.scale()).unwrap_or(scales::METRE),
            LengthUnit::Inch => scales::INCH,
            LengthUnit::Foot => scales::FOOT,
            LengthUnit::Yard => scales::YARD,
            LengthUnit::Mile => scales::MILE,
        }
    }

    /// Parse a unit name
    ///
    /// Accepts `METRE`, prefixed metres (`MILLIMETRE`, `MILLI METRE`,
    /// `.MILLI..METRE.`) and the conversion-based names `INCH`, `FOOT`, `YARD`,
    /// `MILE`. Matching is case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .to_uppercase()
            .chars()
            .filter(|c| !matches!(c, '.' | ' ' | '_'))
            .collect();

        match normalized.as_str() {
            "INCH" => return Some(LengthUnit::Inch),
            "FOOT" | "FEET" => return Some(LengthUnit::Foot),
            "YARD" => return Some(LengthUnit::Yard),
            "MILE" => return Some(LengthUnit::Mile),
            _ => {}
        }

        let prefix = normalized.strip_suffix("METRE")?;
        if prefix.is_empty() {
            return Some(LengthUnit::Metre(None));
        }
        SiPrefix::parse(prefix).map(|p| LengthUnit::Metre(Some(p)))
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthUnit::Metre(None) => f.write_str("METRE"),
            LengthUnit::Metre(Some(prefix)) => write!(f, "{}METRE", prefix.as_str()),
            LengthUnit::Inch => f.write_str("INCH"),
            LengthUnit::Foot => f.write_str("FOOT"),
            LengthUnit::Yard => f.write_str("YARD"),
            LengthUnit::Mile => f.write_str("MILE"),
        }
    }
}

impl FromStr for LengthUnit {
    type Err = QtoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| QtoError::unknown_unit(s))
    }
}

impl TryFrom<String> for LengthUnit {
    type Error = QtoError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<LengthUnit> for String {
    fn from(unit: LengthUnit) -> Self {
        unit.to_string()
    }
}

/// Unit settings as written in configuration files
///
/// Either a pair of units or an explicit length factor:
///
/// ```json
/// { "internal": "FOOT", "export": "MILLIMETRE" }
/// { "length_factor": 0.3048 }
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct UnitsConfig {
    internal: Option<LengthUnit>,
    export: Option<LengthUnit>,
    length_factor: Option<f64>,
}

/// Scales host measurements into export units
///
/// Built from a single length factor; areas scale by its square and volumes by
/// its cube.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectUnits {
    length_factor: f64,
}

impl Default for ProjectUnits {
    fn default() -> Self {
        Self { length_factor: 1.0 }
    }
}

impl ProjectUnits {
    /// Conversion from `internal` (host) units to `export` units
    pub fn new(internal: LengthUnit, export: LengthUnit) -> Result<Self> {
        Self::from_factor(internal.metres() / export.metres())
    }

    /// Host stores feet, export writes metres
    pub fn feet_to_metres() -> Self {
        Self {
            length_factor: scales::FOOT,
        }
    }

    /// Use an explicit length factor
    pub fn from_factor(length_factor: f64) -> Result<Self> {
        if !length_factor.is_finite() || length_factor <= 0.0 {
            return Err(QtoError::InvalidScale(length_factor));
        }
        Ok(Self { length_factor })
    }

    /// Load unit settings from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: UnitsConfig =
            serde_json::from_str(json).map_err(|e| QtoError::config(e.to_string()))?;

        match (config.internal, config.export, config.length_factor) {
            (None, None, Some(factor)) => Self::from_factor(factor),
            (internal, export, None) => Self::new(
                internal.unwrap_or(LengthUnit::Metre(None)),
                export.unwrap_or(LengthUnit::Metre(None)),
            ),
            _ => Err(QtoError::config(
                "units take either internal/export or length_factor, not both",
            )),
        }
    }

    /// Multiplier applied to lengths
    pub fn length_factor(&self) -> f64 {
        self.length_factor
    }
}

impl UnitScaler for ProjectUnits {
    fn scale_length(&self, raw: f64) -> f64 {
        raw * self.length_factor
    }

    fn scale_area(&self, raw: f64) -> f64 {
        raw * self.length_factor * self.length_factor
    }

    fn scale_volume(&self, raw: f64) -> f64 {
        raw * self.length_factor * self.length_factor * self.length_factor
    }
}

/// Common unit scales for reference
pub mod scales {
    /// Meters to meters (identity)
    pub const METRE: f64 = 1.0;
    /// Millimeters to meters
    pub const MILLIMETRE: f64 = 0.001;
    /// Centimeters to meters
    pub const CENTIMETRE: f64 = 0.01;
    /// Inches to meters
    pub const INCH: f64 = 0.0254;
    /// Feet to meters
    pub const FOOT: f64 = 0.3048;
    /// Yards to meters
    pub const YARD: f64 = 0.9144;
    /// Miles to meters
    pub const MILE: f64 = 1609.344;
}
