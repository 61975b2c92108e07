// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Unit scaling from host units to export units

/// Converts raw host measurements into the units written to the IFC file
///
/// Implementations must be pure: the same input always yields the same output.
pub trait UnitScaler: Send + Sync {
    /// Scale a raw length
    fn scale_length(&self, raw: f64) -> f64;

    /// Scale a raw area
    fn scale_area(&self, raw: f64) -> f64;

    /// Scale a raw volume
    fn scale_volume(&self, raw: f64) -> f64;
}

/// Scaler that passes every value through unchanged
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IdentityScaler;

impl UnitScaler for IdentityScaler {
    fn scale_length(&self, raw: f64) -> f64 {
        raw
    }

    fn scale_area(&self, raw: f64) -> f64 {
        raw
    }

    fn scale_volume(&self, raw: f64) -> f64 {
        raw
    }
}
