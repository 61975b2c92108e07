// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC-QTO - Base quantity calculators for IFC export
//!
//! This crate implements the calculators and reference host services for the
//! traits defined in `ifc-qto-model`.
//!
//! # Features
//!
//! - **Cross section area** resolved from overrides, extrusion data or the
//!   host's computed area, in that order
//! - **In-memory element store** implementing `ParameterLookup`, loadable from JSON
//! - **Project units** implementing `UnitScaler` for SI and imperial lengths
//! - **Quantity entries** turning valid results into output quantities
//!
//! # Example
//!
//! ```ignore
//! use ifc_qto::{CrossSectionAreaCalculator, ElementStore, ProjectUnits};
//! use ifc_qto_model::{CalculationContext, ElementId, EntryMap, PropertyCalculator};
//!
//! let store = ElementStore::from_json(&std::fs::read_to_string("elements.json")?)?;
//! let units = ProjectUnits::feet_to_metres();
//! let entry = EntryMap::new("IfcQtyCrossSectionArea_Override");
//!
//! let ctx = CalculationContext::new(ElementId(42), &entry);
//! let area = CrossSectionAreaCalculator::new().calculate(&store, &units, &ctx);
//! println!("valid: {}, value: {}", area.valid, area.value);
//! ```

mod cross_section;
mod entry;
mod options;
mod store;
mod tolerance;
mod units;

pub use cross_section::{CrossSectionAreaCalculator, IMPLICIT_PARAMETER_NAME};
pub use entry::QuantityEntry;
pub use options::{DegenerateOverride, ResolverOptions};
pub use store::{ElementRecord, ElementStore};
pub use tolerance::{is_exportable_area, AREA_EPS, EPS};
pub use units::{scales, LengthUnit, ProjectUnits, SiPrefix};

use ifc_qto_model::{CalculatedValue, CalculationContext, ParameterLookup, PropertyCalculator, UnitScaler};

/// Quick cross section area calculation with default options
pub fn cross_section_area(
    lookup: &dyn ParameterLookup,
    scaler: &dyn UnitScaler,
    ctx: &CalculationContext<'_>,
) -> CalculatedValue {
    CrossSectionAreaCalculator::new().calculate(lookup, scaler, ctx)
}
