// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The calculator capability and its inputs and outputs

use crate::{ElementId, EntryMap, ExtrusionData, ParameterLookup, QuantityType, UnitScaler};

/// Outcome of a single calculation
///
/// `value` is always populated with the last value the calculator considered,
/// even when `valid` is false. Only valid values may be written to the output.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CalculatedValue {
    /// Last value the calculator assigned, in export units
    pub value: f64,
    /// Whether `value` may be exported
    pub valid: bool,
}

impl CalculatedValue {
    /// A usable value
    pub fn valid(value: f64) -> Self {
        Self { value, valid: true }
    }

    /// A rejected value (kept for diagnostics)
    pub fn invalid(value: f64) -> Self {
        Self {
            value,
            valid: false,
        }
    }

    /// Check if the value may be exported
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Get the value only if it is valid
    pub fn valid_value(&self) -> Option<f64> {
        self.valid.then_some(self.value)
    }
}

/// Everything a calculator needs to know about the element being exported
#[derive(Clone, Copy, Debug)]
pub struct CalculationContext<'a> {
    /// Element being exported
    pub element: ElementId,
    /// Type of the element, if it has one
    ///
    /// Type parameters are read from here. When `None`, calculators fall back
    /// to [`ParameterLookup::element_type`](crate::ParameterLookup::element_type).
    pub element_type: Option<ElementId>,
    /// Extrusion measurements, when the body was exported as an extrusion
    pub extrusion: Option<&'a ExtrusionData>,
    /// Parameter names configured for this property-set entry
    pub entry: &'a EntryMap,
}

impl<'a> CalculationContext<'a> {
    /// Create a context for an element with no type and no extrusion data
    pub fn new(element: ElementId, entry: &'a EntryMap) -> Self {
        Self {
            element,
            element_type: None,
            extrusion: None,
            entry,
        }
    }

    /// Set the element type
    pub fn with_type(mut self, element_type: ElementId) -> Self {
        self.element_type = Some(element_type);
        self
    }

    /// Attach extrusion measurements
    pub fn with_extrusion(mut self, extrusion: &'a ExtrusionData) -> Self {
        self.extrusion = Some(extrusion);
        self
    }
}

/// A single property value calculation
///
/// Calculators hold no per-element state, so one instance can serve every
/// element and be shared between threads.
pub trait PropertyCalculator: Send + Sync {
    /// Name used to reference the calculator from configuration
    fn name(&self) -> &'static str;

    /// Kind of quantity produced
    fn quantity_type(&self) -> QuantityType;

    /// Calculate the value for one element
    fn calculate(
        &self,
        lookup: &dyn ParameterLookup,
        scaler: &dyn UnitScaler,
        ctx: &CalculationContext<'_>,
    ) -> CalculatedValue;
}
