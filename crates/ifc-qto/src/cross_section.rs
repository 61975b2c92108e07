// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cross section area calculator
//!
//! Sources are tried in a fixed order and the first usable one wins:
//!
//! 1. Override parameters on the element or its type (the context's type when
//!    given, else the lookup's): the entry's primary
//!    name, then its compatible name, then `IfcQtyCrossSectionArea`
//! 2. The profile area of the extrusion the body was exported as
//! 3. The element's `HOST_AREA_COMPUTED` built-in parameter
//!
//! The built-in parameter holds the element's total area rather than a
//! section, so it comes last.

use crate::options::{DegenerateOverride, ResolverOptions};
use crate::tolerance::is_exportable_area;
use ifc_qto_model::{
    BuiltInParameter, CalculatedValue, CalculationContext, ParameterLookup, ParameterLookupExt,
    PropertyCalculator, QuantityType, UnitScaler,
};

/// Override parameter tried after the entry's own names
pub const IMPLICIT_PARAMETER_NAME: &str = "IfcQtyCrossSectionArea";

/// Result of looking up the override parameters
#[derive(Clone, Copy, Debug, PartialEq)]
enum OverrideOutcome {
    /// Found and large enough to export
    Usable(f64),
    /// Found, but scales to zero or below the area tolerance
    Degenerate(f64),
    /// None of the names exist on the element or its type
    NotFound,
}

/// Calculates the cross section area of an element
#[derive(Clone, Copy, Debug, Default)]
pub struct CrossSectionAreaCalculator {
    options: ResolverOptions,
}

impl CrossSectionAreaCalculator {
    /// Create a calculator with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with custom options
    pub fn with_options(options: ResolverOptions) -> Self {
        Self { options }
    }

    /// Options in use
    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Look up override names in order
    ///
    /// Only a missing parameter moves on to the next name; the first name that
    /// exists decides the outcome.
    fn resolve_overrides(
        &self,
        lookup: &dyn ParameterLookup,
        scaler: &dyn UnitScaler,
        ctx: &CalculationContext<'_>,
    ) -> OverrideOutcome {
        let [primary, compatible] = ctx.entry.override_names();
        let names = [primary, compatible, IMPLICIT_PARAMETER_NAME];

        match lookup.first_double(ctx.element, ctx.element_type, &names) {
            Some((name, raw)) => {
                let area = scaler.scale_area(raw);
                log::trace!("{}: override {} = {} (scaled {})", ctx.element, name, raw, area);
                if is_exportable_area(area) {
                    OverrideOutcome::Usable(area)
                } else {
                    OverrideOutcome::Degenerate(area)
                }
            }
            None => OverrideOutcome::NotFound,
        }
    }
}

impl PropertyCalculator for CrossSectionAreaCalculator {
    fn name(&self) -> &'static str {
        "CrossSectionArea"
    }

    fn quantity_type(&self) -> QuantityType {
        QuantityType::Area
    }

    fn calculate(
        &self,
        lookup: &dyn ParameterLookup,
        scaler: &dyn UnitScaler,
        ctx: &CalculationContext<'_>,
    ) -> CalculatedValue {
        let mut area = 0.0;

        match self.resolve_overrides(lookup, scaler, ctx) {
            OverrideOutcome::Usable(value) => {
                log::debug!("{}: cross section area {} from override", ctx.element, value);
                return CalculatedValue::valid(value);
            }
            OverrideOutcome::Degenerate(value) => {
                area = value;
                if self.options.degenerate_override == DegenerateOverride::Fail {
                    log::debug!("{}: override cross section area {} is degenerate", ctx.element, value);
                    return CalculatedValue::invalid(area);
                }
            }
            OverrideOutcome::NotFound => {}
        }

        if let Some(extrusion) = ctx.extrusion {
            area = extrusion.scaled_area;
            if is_exportable_area(area) {
                log::debug!("{}: cross section area {} from extrusion", ctx.element, area);
                return CalculatedValue::valid(area);
            }
            log::trace!("{}: extrusion area {} rejected", ctx.element, area);
        }

        if let Some(raw) = lookup.builtin_double(ctx.element, BuiltInParameter::HostAreaComputed) {
            area = scaler.scale_area(raw);
            if is_exportable_area(area) {
                log::debug!("{}: cross section area {} from computed area", ctx.element, area);
                return CalculatedValue::valid(area);
            }
        }

        log::debug!("{}: no cross section area", ctx.element);
        CalculatedValue::invalid(area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ElementRecord, ElementStore};
    use crate::units::ProjectUnits;
    use approx::assert_relative_eq;
    use ifc_qto_model::{ElementId, EntryMap, ExtrusionData, IdentityScaler};
    use std::sync::{Arc, Mutex};

    const PRIMARY: &str = "IfcQtyCrossSectionArea_Override";
    const COMPATIBLE: &str = "CrossSectionArea_Legacy";
    const ELEMENT: ElementId = ElementId(1);
    const TYPE: ElementId = ElementId(100);

    /// Records every lookup made against the wrapped store
    struct Recording {
        store: ElementStore,
        calls: Mutex<Vec<String>>,
    }

    impl Recording {
        fn new(store: ElementStore) -> Self {
            Self {
                store,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl ParameterLookup for Recording {
        fn double(&self, element: ElementId, name: &str) -> Option<f64> {
            self.calls.lock().unwrap().push(format!("{element}:{name}"));
            self.store.double(element, name)
        }

        fn builtin_double(&self, element: ElementId, parameter: BuiltInParameter) -> Option<f64> {
            self.calls.lock().unwrap().push(format!("{element}:{parameter}"));
            self.store.builtin_double(element, parameter)
        }

        fn element_type(&self, element: ElementId) -> Option<ElementId> {
            self.store.element_type(element)
        }
    }

    fn entry() -> EntryMap {
        EntryMap::new(PRIMARY).with_compatible(COMPATIBLE)
    }

    fn store(element: ElementRecord) -> ElementStore {
        ElementStore::from_records([element, ElementRecord::new(TYPE)]).unwrap()
    }

    fn calculate(lookup: &dyn ParameterLookup, extrusion: Option<&ExtrusionData>) -> CalculatedValue {
        let entry = entry();
        let mut ctx = CalculationContext::new(ELEMENT, &entry).with_type(TYPE);
        ctx.extrusion = extrusion;
        CrossSectionAreaCalculator::new().calculate(lookup, &IdentityScaler, &ctx)
    }

    #[test]
    fn test_primary_override_short_circuits() {
        let lookup = Recording::new(store(
            ElementRecord::new(ELEMENT)
                .with_type(TYPE)
                .with_parameter(PRIMARY, 0.75)
                .with_parameter(COMPATIBLE, 9.0)
                .with_builtin(BuiltInParameter::HostAreaComputed, 40.0),
        ));
        let extrusion = ExtrusionData::with_area(3.0);

        let result = calculate(&lookup, Some(&extrusion));

        assert_eq!(result, CalculatedValue::valid(0.75));
        assert_eq!(lookup.calls(), vec![format!("#1:{PRIMARY}")]);
    }

    #[test]
    fn test_compatible_name_when_primary_missing() {
        let lookup = Recording::new(store(
            ElementRecord::new(ELEMENT)
                .with_type(TYPE)
                .with_parameter(COMPATIBLE, 1.25)
                .with_parameter(IMPLICIT_PARAMETER_NAME, 7.0),
        ));

        let result = calculate(&lookup, None);

        assert_eq!(result, CalculatedValue::valid(1.25));
        assert_eq!(
            lookup.calls(),
            vec![
                format!("#1:{PRIMARY}"),
                format!("#100:{PRIMARY}"),
                format!("#1:{COMPATIBLE}"),
            ]
        );
    }

    #[test]
    fn test_implicit_name() {
        let lookup = store(
            ElementRecord::new(ELEMENT)
                .with_type(TYPE)
                .with_parameter(IMPLICIT_PARAMETER_NAME, 2.0),
        );

        let result = calculate(&lookup, None);

        assert!(result.is_valid());
        assert_relative_eq!(result.value, 2.0);
    }

    #[test]
    fn test_override_on_type() {
        let lookup = ElementStore::from_records([
            ElementRecord::new(ELEMENT).with_type(TYPE),
            ElementRecord::new(TYPE).with_parameter(PRIMARY, 0.5),
        ])
        .unwrap();

        assert_eq!(calculate(&lookup, None), CalculatedValue::valid(0.5));
    }

    #[test]
    fn test_degenerate_primary_fails_without_fallbacks() {
        let lookup = Recording::new(store(
            ElementRecord::new(ELEMENT)
                .with_type(TYPE)
                .with_parameter(PRIMARY, 0.0)
                .with_parameter(COMPATIBLE, 5.0)
                .with_builtin(BuiltInParameter::HostAreaComputed, 40.0),
        ));
        let extrusion = ExtrusionData::with_area(3.0);

        let result = calculate(&lookup, Some(&extrusion));

        assert!(!result.is_valid());
        assert_eq!(result.value, 0.0);
        assert_eq!(lookup.calls(), vec![format!("#1:{PRIMARY}")]);
    }

    #[test]
    fn test_degenerate_compatible_fails_without_fallbacks() {
        let lookup = Recording::new(store(
            ElementRecord::new(ELEMENT)
                .with_type(TYPE)
                .with_parameter(COMPATIBLE, 1.0e-20)
                .with_parameter(IMPLICIT_PARAMETER_NAME, 5.0)
                .with_builtin(BuiltInParameter::HostAreaComputed, 40.0),
        ));
        let extrusion = ExtrusionData::with_area(3.0);

        let result = calculate(&lookup, Some(&extrusion));

        assert_eq!(result, CalculatedValue::invalid(1.0e-20));
        assert!(!lookup
            .calls()
            .iter()
            .any(|call| call.ends_with("HOST_AREA_COMPUTED")));
    }

    #[test]
    fn test_degenerate_implicit_fails_without_fallbacks() {
        let lookup = Recording::new(store(
            ElementRecord::new(ELEMENT)
                .with_type(TYPE)
                .with_parameter(IMPLICIT_PARAMETER_NAME, 0.0)
                .with_builtin(BuiltInParameter::HostAreaComputed, 40.0),
        ));
        let extrusion = ExtrusionData::with_area(3.0);

        let result = calculate(&lookup, Some(&extrusion));

        assert_eq!(result, CalculatedValue::invalid(0.0));
        assert_eq!(
            lookup.calls().last().map(String::as_str),
            Some(format!("#1:{IMPLICIT_PARAMETER_NAME}").as_str())
        );
        assert!(!lookup
            .calls()
            .iter()
            .any(|call| call.ends_with("HOST_AREA_COMPUTED")));
    }

    #[test]
    fn test_context_type_used_without_store_link() {
        // #1 is not linked to #100 in the store; the caller supplies the type
        let lookup = ElementStore::from_records([
            ElementRecord::new(ELEMENT),
            ElementRecord::new(TYPE).with_parameter(IMPLICIT_PARAMETER_NAME, 2.0),
        ])
        .unwrap();
        let entry = EntryMap::new("X");

        let ctx = CalculationContext::new(ELEMENT, &entry).with_type(TYPE);
        let result = CrossSectionAreaCalculator::new().calculate(&lookup, &IdentityScaler, &ctx);
        assert_eq!(result, CalculatedValue::valid(2.0));

        let ctx = CalculationContext::new(ELEMENT, &entry);
        let result = CrossSectionAreaCalculator::new().calculate(&lookup, &IdentityScaler, &ctx);
        assert_eq!(result, CalculatedValue::invalid(0.0));
    }

    #[test]
    fn test_context_type_overrides_store_link() {
        let lookup = ElementStore::from_records([
            ElementRecord::new(ELEMENT).with_type(ElementId(200)),
            ElementRecord::new(ElementId(200)).with_parameter(PRIMARY, 9.0),
            ElementRecord::new(TYPE).with_parameter(PRIMARY, 0.4),
        ])
        .unwrap();

        // calculate() passes TYPE as the context type
        assert_eq!(calculate(&lookup, None), CalculatedValue::valid(0.4));
    }

    #[test]
    fn test_degenerate_override_continue_policy() {
        let lookup = store(
            ElementRecord::new(ELEMENT)
                .with_type(TYPE)
                .with_parameter(PRIMARY, -1.0)
                .with_builtin(BuiltInParameter::HostAreaComputed, 40.0),
        );
        let entry = entry();
        let extrusion = ExtrusionData::with_area(3.0);
        let calculator = CrossSectionAreaCalculator::with_options(
            ResolverOptions::new().with_degenerate_override(DegenerateOverride::Continue),
        );

        let ctx = CalculationContext::new(ELEMENT, &entry).with_extrusion(&extrusion);
        assert_eq!(
            calculator.calculate(&lookup, &IdentityScaler, &ctx),
            CalculatedValue::valid(3.0)
        );

        let ctx = CalculationContext::new(ELEMENT, &entry);
        assert_eq!(
            calculator.calculate(&lookup, &IdentityScaler, &ctx),
            CalculatedValue::valid(40.0)
        );
    }

    #[test]
    fn test_extrusion_fallback() {
        let lookup = Recording::new(store(
            ElementRecord::new(ELEMENT)
                .with_type(TYPE)
                .with_builtin(BuiltInParameter::HostAreaComputed, 40.0),
        ));
        let extrusion = ExtrusionData::with_area(0.06).length(3.0);

        let result = calculate(&lookup, Some(&extrusion));

        assert_eq!(result, CalculatedValue::valid(0.06));
        assert!(!lookup
            .calls()
            .iter()
            .any(|call| call.ends_with("HOST_AREA_COMPUTED")));
    }

    #[test]
    fn test_builtin_fallback_after_degenerate_extrusion() {
        let lookup = store(
            ElementRecord::new(ELEMENT)
                .with_type(TYPE)
                .with_builtin(BuiltInParameter::HostAreaComputed, 10.0),
        );
        let entry = entry();
        let extrusion = ExtrusionData::with_area(0.0);
        let ctx = CalculationContext::new(ELEMENT, &entry).with_extrusion(&extrusion);

        let result = CrossSectionAreaCalculator::new().calculate(
            &lookup,
            &ProjectUnits::feet_to_metres(),
            &ctx,
        );

        assert!(result.is_valid());
        assert_relative_eq!(result.value, 0.9290304, epsilon = 1e-12);
    }

    #[test]
    fn test_builtin_read_from_element_only() {
        let lookup = ElementStore::from_records([
            ElementRecord::new(ELEMENT).with_type(TYPE),
            ElementRecord::new(TYPE).with_builtin(BuiltInParameter::HostAreaComputed, 10.0),
        ])
        .unwrap();

        assert_eq!(calculate(&lookup, None), CalculatedValue::invalid(0.0));
    }

    #[test]
    fn test_nothing_found() {
        let lookup = store(ElementRecord::new(ELEMENT).with_type(TYPE));

        let result = calculate(&lookup, None);

        assert!(!result.is_valid());
        assert_eq!(result.valid_value(), None);
        assert_eq!(result.value, 0.0);
    }

    #[test]
    fn test_last_value_kept_when_all_sources_degenerate() {
        let lookup = store(
            ElementRecord::new(ELEMENT)
                .with_type(TYPE)
                .with_builtin(BuiltInParameter::HostAreaComputed, 1.0e-19),
        );
        let extrusion = ExtrusionData::with_area(1.0e-20);

        assert_eq!(
            calculate(&lookup, Some(&extrusion)),
            CalculatedValue::invalid(1.0e-19)
        );
        // Extrusion value survives when there is no built-in parameter
        let lookup = store(ElementRecord::new(ELEMENT).with_type(TYPE));
        assert_eq!(
            calculate(&lookup, Some(&extrusion)),
            CalculatedValue::invalid(1.0e-20)
        );
    }

    #[test]
    fn test_override_is_scaled_as_area() {
        let lookup = store(
            ElementRecord::new(ELEMENT)
                .with_type(TYPE)
                .with_parameter(PRIMARY, 10.0),
        );
        let entry = entry();
        let ctx = CalculationContext::new(ELEMENT, &entry);

        let result = CrossSectionAreaCalculator::new().calculate(
            &lookup,
            &ProjectUnits::feet_to_metres(),
            &ctx,
        );

        assert_relative_eq!(result.value, 0.9290304, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_compatible_name_is_skipped() {
        let lookup = Recording::new(store(ElementRecord::new(ELEMENT)));
        let entry = EntryMap::new(PRIMARY);
        let ctx = CalculationContext::new(ELEMENT, &entry);

        CrossSectionAreaCalculator::new().calculate(&lookup, &IdentityScaler, &ctx);

        assert_eq!(
            lookup.calls(),
            vec![
                format!("#1:{PRIMARY}"),
                format!("#1:{IMPLICIT_PARAMETER_NAME}"),
                "#1:HOST_AREA_COMPUTED".to_string(),
            ]
        );
    }

    #[test]
    fn test_shared_between_threads() {
        let calculator = Arc::new(CrossSectionAreaCalculator::new());
        let lookup = Arc::new(
            ElementStore::from_records(
                (1..=8u32).map(|id| ElementRecord::new(ElementId(id)).with_parameter(PRIMARY, id as f64)),
            )
            .unwrap(),
        );

        let handles: Vec<_> = (1..=8u32)
            .map(|id| {
                let calculator = Arc::clone(&calculator);
                let lookup = Arc::clone(&lookup);
                std::thread::spawn(move || {
                    let entry = EntryMap::new(PRIMARY);
                    let ctx = CalculationContext::new(ElementId(id), &entry);
                    calculator.calculate(lookup.as_ref(), &IdentityScaler, &ctx)
                })
            })
            .collect();

        for (id, handle) in (1..=8u32).zip(handles) {
            assert_eq!(handle.join().unwrap(), CalculatedValue::valid(id as f64));
        }
    }

    #[test]
    fn test_calculator_identity() {
        let calculator = CrossSectionAreaCalculator::new();
        assert_eq!(calculator.name(), "CrossSectionArea");
        assert_eq!(calculator.quantity_type(), QuantityType::Area);
        assert_eq!(calculator.options().degenerate_override, DegenerateOverride::Fail);
    }
}
