// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory element store implementing `ParameterLookup`

use ifc_qto_model::{BuiltInParameter, ElementId, ParameterLookup, QtoError, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Parameters of a single element or element type
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementRecord {
    /// Element id
    pub id: ElementId,
    /// Type the element belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<ElementId>,
    /// Named numeric parameters (raw host units)
    #[serde(default)]
    pub parameters: FxHashMap<String, f64>,
    /// Built-in numeric parameters (raw host units)
    #[serde(default)]
    pub builtins: FxHashMap<BuiltInParameter, f64>,
}

impl ElementRecord {
    /// Create an element with no parameters
    pub fn new(id: ElementId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Set the element type
    pub fn with_type(mut self, type_id: ElementId) -> Self {
        self.type_id = Some(type_id);
        self
    }

    /// Add a named parameter
    pub fn with_parameter(mut self, name: impl Into<String>, value: f64) -> Self {
        self.parameters.insert(name.into(), value);
        self
    }

    /// Add a built-in parameter
    pub fn with_builtin(mut self, parameter: BuiltInParameter, value: f64) -> Self {
        self.builtins.insert(parameter, value);
        self
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct StoreFile {
    elements: Vec<ElementRecord>,
}

/// Element parameters held in memory
///
/// Stands in for the authoring application's model: elements and element
/// types live in one id space, and an element reaches its type's parameters
/// through `type_id`.
///
/// # Example
///
/// ```ignore
/// let store = ElementStore::from_json(r#"{
///     "elements": [
///         { "id": 1, "type_id": 100, "builtins": { "HOST_AREA_COMPUTED": 12.5 } },
///         { "id": 100, "parameters": { "IfcQtyCrossSectionArea": 0.5 } }
///     ]
/// }"#)?;
/// ```
#[derive(Clone, Debug, Default)]
pub struct ElementStore {
    elements: FxHashMap<ElementId, ElementRecord>,
}

impl ElementStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from records, rejecting duplicate ids
    pub fn from_records(records: impl IntoIterator<Item = ElementRecord>) -> Result<Self> {
        let mut store = Self::new();
        for record in records {
            let id = record.id;
            if store.insert(record).is_some() {
                return Err(QtoError::config(format!("duplicate element {id}")));
            }
        }
        log::debug!("element store holds {} elements", store.len());
        Ok(store)
    }

    /// Load a store from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let file: StoreFile =
            serde_json::from_str(json).map_err(|e| QtoError::config(e.to_string()))?;
        Self::from_records(file.elements)
    }

    /// Load a store from a JSON reader
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let file: StoreFile = serde_json::from_reader(reader).map_err(|e| {
            if e.is_io() {
                QtoError::Io(e.into())
            } else {
                QtoError::config(e.to_string())
            }
        })?;
        Self::from_records(file.elements)
    }

    /// Insert or replace an element, returning the previous record
    pub fn insert(&mut self, record: ElementRecord) -> Option<ElementRecord> {
        self.elements.insert(record.id, record)
    }

    /// Set a named parameter on an existing element
    pub fn set_parameter(&mut self, id: ElementId, name: impl Into<String>, value: f64) -> Result<()> {
        let record = self
            .elements
            .get_mut(&id)
            .ok_or(QtoError::ElementNotFound(id))?;
        record.parameters.insert(name.into(), value);
        Ok(())
    }

    /// Set a built-in parameter on an existing element
    pub fn set_builtin(&mut self, id: ElementId, parameter: BuiltInParameter, value: f64) -> Result<()> {
        let record = self
            .elements
            .get_mut(&id)
            .ok_or(QtoError::ElementNotFound(id))?;
        record.builtins.insert(parameter, value);
        Ok(())
    }

    /// Get an element record
    pub fn get(&self, id: ElementId) -> Option<&ElementRecord> {
        self.elements.get(&id)
    }

    /// All element ids, in no particular order
    pub fn ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.elements.keys().copied()
    }

    /// Number of elements (types included)
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl ParameterLookup for ElementStore {
    fn double(&self, element: ElementId, name: &str) -> Option<f64> {
        self.elements.get(&element)?.parameters.get(name).copied()
    }

    fn builtin_double(&self, element: ElementId, parameter: BuiltInParameter) -> Option<f64> {
        self.elements.get(&element)?.builtins.get(&parameter).copied()
    }

    fn element_type(&self, element: ElementId) -> Option<ElementId> {
        self.elements.get(&element)?.type_id
    }
}
