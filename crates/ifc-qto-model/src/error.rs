// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for calculator setup
//!
//! Calculations themselves never fail; these errors come from building the
//! inputs (stores, unit settings, entry configuration).

use crate::ElementId;
use thiserror::Error;

/// Result type alias for setup operations
pub type Result<T> = std::result::Result<T, QtoError>;

/// Errors that can occur while configuring calculators and their inputs
#[derive(Error, Debug)]
pub enum QtoError {
    /// Malformed configuration (JSON, missing fields, ...)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Unit name that could not be recognized
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    /// Conversion factor that is zero, negative or not finite
    #[error("Invalid unit scale: {0}")]
    InvalidScale(f64),

    /// Element not found
    #[error("Element {0} not found")]
    ElementNotFound(ElementId),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl QtoError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        QtoError::InvalidConfig(msg.into())
    }

    /// Create a new unknown unit error
    pub fn unknown_unit(name: impl Into<String>) -> Self {
        QtoError::UnknownUnit(name.into())
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        QtoError::Other(msg.into())
    }
}
