// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Quantity entries: output property name plus the parameters it reads

use ifc_qto_model::{
    CalculationContext, ElementId, EntryMap, ExtrusionData, ParameterLookup, PropertyCalculator,
    QtoError, Quantity, Result, UnitScaler,
};
use serde::{Deserialize, Serialize};

/// One quantity of an element quantity set
///
/// ```json
/// {
///     "property_name": "CrossSectionArea",
///     "primary_parameter_name": "IfcQtyCrossSectionArea_Override",
///     "compatible_parameter_name": "CrossSectionArea",
///     "unit": "mm²"
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuantityEntry {
    /// Name written to the output set
    pub property_name: String,
    /// Override parameter names
    #[serde(flatten)]
    pub entry_map: EntryMap,
    /// Unit label; defaults to the calculator's quantity type unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl QuantityEntry {
    /// Create an entry
    pub fn new(property_name: impl Into<String>, entry_map: EntryMap) -> Self {
        Self {
            property_name: property_name.into(),
            entry_map,
            unit: None,
        }
    }

    /// Set the unit label
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Load a list of entries from a JSON array
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        let entries: Vec<Self> =
            serde_json::from_str(json).map_err(|e| QtoError::config(e.to_string()))?;

        if let Some(entry) = entries.iter().find(|e| e.property_name.is_empty()) {
            return Err(QtoError::config(format!(
                "entry for parameter '{}' has no property name",
                entry.entry_map.primary_parameter_name
            )));
        }
        Ok(entries)
    }

    /// Calculate this entry for one element
    ///
    /// Returns `None` when the calculator produces no valid value, in which
    /// case the property is left out of the output set.
    pub fn evaluate(
        &self,
        calculator: &dyn PropertyCalculator,
        lookup: &dyn ParameterLookup,
        scaler: &dyn UnitScaler,
        element: ElementId,
        element_type: Option<ElementId>,
        extrusion: Option<&ExtrusionData>,
    ) -> Option<Quantity> {
        let ctx = CalculationContext {
            element,
            element_type,
            extrusion,
            entry: &self.entry_map,
        };

        let value = calculator.calculate(lookup, scaler, &ctx).valid_value()?;
        let quantity_type = calculator.quantity_type();
        let unit = self
            .unit
            .clone()
            .unwrap_or_else(|| quantity_type.default_unit().to_string());

        Some(Quantity::with_unit(
            self.property_name.clone(),
            value,
            unit,
            quantity_type,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cross_section::CrossSectionAreaCalculator;
    use crate::store::{ElementRecord, ElementStore};
    use ifc_qto_model::{IdentityScaler, QuantityType};

    const ENTRIES_JSON: &str = r#"[
        {
            "property_name": "CrossSectionArea",
            "primary_parameter_name": "IfcQtyCrossSectionArea_Override",
            "compatible_parameter_name": "CrossSectionArea_Legacy"
        },
        {
            "property_name": "GrossCrossSectionArea",
            "primary_parameter_name": "GrossArea",
            "unit": "mm²"
        }
    ]"#;

    #[test]
    fn test_list_from_json() {
        let entries = QuantityEntry::list_from_json(ENTRIES_JSON).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[0].entry_map,
            EntryMap::new("IfcQtyCrossSectionArea_Override").with_compatible("CrossSectionArea_Legacy")
        );
        assert_eq!(entries[1].entry_map.compatible_parameter_name, "");
        assert_eq!(entries[1].unit.as_deref(), Some("mm²"));
    }

    #[test]
    fn test_list_from_json_rejects_bad_entries() {
        assert!(QuantityEntry::list_from_json(r#"[{ "property_name": "A" }]"#).is_err());
        assert!(QuantityEntry::list_from_json(
            r#"[{ "property_name": "", "primary_parameter_name": "A" }]"#
        )
        .is_err());
    }

    #[test]
    fn test_evaluate() {
        let store = ElementStore::from_records([
            ElementRecord::new(ElementId(1)).with_parameter("GrossArea", 0.25),
            ElementRecord::new(ElementId(2)),
        ])
        .unwrap();
        let calculator = CrossSectionAreaCalculator::new();
        let entries = QuantityEntry::list_from_json(ENTRIES_JSON).unwrap();

        let gross = entries[1]
            .evaluate(&calculator, &store, &IdentityScaler, ElementId(1), None, None)
            .unwrap();
        assert_eq!(
            gross,
            Quantity::with_unit("GrossCrossSectionArea", 0.25, "mm²", QuantityType::Area)
        );

        let extrusion = ExtrusionData::with_area(0.5);
        let area = entries[0]
            .evaluate(&calculator, &store, &IdentityScaler, ElementId(2), None, Some(&extrusion))
            .unwrap();
        assert_eq!(area.value, 0.5);
        assert_eq!(area.unit, "m²");

        assert_eq!(
            entries[0].evaluate(&calculator, &store, &IdentityScaler, ElementId(2), None, None),
            None
        );
    }
}
