// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parameter access for host elements

use crate::{BuiltInParameter, ElementId};

/// Numeric parameter lookup keyed by element and parameter name
///
/// This is the calculators' only window into the authoring model. All values
/// are returned in raw host units; callers scale them with a [`UnitScaler`].
///
/// `None` means the parameter does not exist or is not numeric. A present
/// parameter may legitimately hold `0.0`.
///
/// # Example
///
/// ```ignore
/// use ifc_qto_model::{ParameterLookup, ElementId};
///
/// fn print_override(lookup: &dyn ParameterLookup, beam: ElementId) {
///     match lookup.double_from_element_or_type(beam, "IfcQtyCrossSectionArea") {
///         Some(area) => println!("Override: {}", area),
///         None => println!("No override on {} or its type", beam),
///     }
/// }
/// ```
///
/// [`UnitScaler`]: crate::UnitScaler
pub trait ParameterLookup: Send + Sync {
    /// Get a named numeric parameter of the element itself
    fn double(&self, element: ElementId, name: &str) -> Option<f64>;

    /// Get a built-in numeric parameter of the element itself
    fn builtin_double(&self, element: ElementId, parameter: BuiltInParameter) -> Option<f64>;

    /// Get the type the element belongs to, if any
    fn element_type(&self, element: ElementId) -> Option<ElementId>;

    /// Get a named numeric parameter from the element, falling back to its type
    ///
    /// The type is only consulted when the element itself lacks the parameter.
    fn double_from_element_or_type(&self, element: ElementId, name: &str) -> Option<f64> {
        self.double(element, name).or_else(|| {
            self.element_type(element)
                .and_then(|type_id| self.double(type_id, name))
        })
    }
}

/// Extension methods for ParameterLookup
pub trait ParameterLookupExt: ParameterLookup {
    /// Get a named parameter from the element, falling back to a given type
    ///
    /// `element_type` is the caller's view of the element's type. When it is
    /// `None` the type is taken from [`ParameterLookup::element_type`].
    fn double_from_element_or(
        &self,
        element: ElementId,
        element_type: Option<ElementId>,
        name: &str,
    ) -> Option<f64> {
        self.double(element, name).or_else(|| {
            element_type
                .or_else(|| self.element_type(element))
                .and_then(|type_id| self.double(type_id, name))
        })
    }

    /// Return the first of `names` found on the element or its type
    ///
    /// Empty names are skipped. The name that matched is returned with the value.
    fn first_double<'n>(
        &self,
        element: ElementId,
        element_type: Option<ElementId>,
        names: &[&'n str],
    ) -> Option<(&'n str, f64)> {
        names
            .iter()
            .filter(|name| !name.is_empty())
            .find_map(|name| {
                self.double_from_element_or(element, element_type, name)
                    .map(|value| (*name, value))
            })
    }
}

// Blanket implementation for all ParameterLookup types
impl<T: ParameterLookup + ?Sized> ParameterLookupExt for T {}
