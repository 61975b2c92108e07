// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC-QTO Model - Trait definitions and shared types for quantity calculators
//!
//! This crate provides the abstractions that sit between an IFC exporter and the
//! authoring model it reads from. Host data is reached only through traits, so a
//! calculator can run against any backend that implements them.
//!
//! # Architecture
//!
//! The crate is organized around three traits:
//!
//! - [`ParameterLookup`] - Named and built-in numeric parameters of elements
//! - [`UnitScaler`] - Conversion of raw host measurements into export units
//! - [`PropertyCalculator`] - A single quantity calculation (area, length, ...)
//!
//! # Example
//!
//! ```ignore
//! use ifc_qto_model::{CalculationContext, EntryMap, ElementId, PropertyCalculator};
//!
//! let entry = EntryMap::new("IfcQtyCrossSectionArea_Override");
//! let ctx = CalculationContext::new(ElementId(42), &entry);
//!
//! let result = calculator.calculate(&lookup, &scaler, &ctx);
//! if let Some(area) = result.valid_value() {
//!     println!("Cross section area: {}", area);
//! }
//! ```

pub mod calculator;
pub mod entry;
pub mod error;
pub mod extrusion;
pub mod parameters;
pub mod quantities;
pub mod types;
pub mod units;

// Re-export all public types
pub use calculator::*;
pub use entry::*;
pub use error::*;
pub use extrusion::*;
pub use parameters::*;
pub use quantities::*;
pub use types::*;
pub use units::*;
