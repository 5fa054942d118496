// ABOUTME: Unified error type and error codes shared by every fitcoach module
// ABOUTME: Provides AppError, ErrorCode, AppResult and a serializable ErrorResponse
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the engine returns [`AppResult`]. The error
//! carries a stable [`ErrorCode`] so that callers (the CLI, or any
//! presentation layer embedding the library) can distinguish rejected input
//! from configuration problems and from catalogs that cannot satisfy a
//! request.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Malformed, unrecognized or out-of-range profile field
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,

    // Catalog (4000-4999)
    /// No catalog row can satisfy a section of the request
    #[serde(rename = "EMPTY_CATALOG")]
    EmptyCatalog = 4000,
    /// Catalog source could not be read or parsed
    #[serde(rename = "CATALOG_LOAD")]
    CatalogLoad = 4001,

    // Configuration (6000-6999)
    /// Value not covered by a configuration mapping table
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,
    /// Configuration failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::EmptyCatalog => "The catalog has no entries that can satisfy the request",
            Self::CatalogLoad => "The catalog could not be loaded",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
        }
    }

    /// Whether the error was caused by the request rather than the system
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput)
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional structured details
    pub details: serde_json::Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: serde_json::Value::Null,
            source: None,
        }
    }

    /// Add details to the error
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Field outside its accepted range; the range travels in `details`
    pub fn out_of_range(field: &str, value: impl fmt::Display, range: &str) -> Self {
        let value = value.to_string();
        Self::new(
            ErrorCode::InvalidInput,
            format!("{field} must be in {range}, got {value}"),
        )
        .with_details(serde_json::json!({ "field": field, "value": value, "range": range }))
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Configuration failed validation
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// No catalog rows available for a section
    pub fn empty_catalog(section: impl Into<String>) -> Self {
        let section = section.into();
        Self::new(
            ErrorCode::EmptyCatalog,
            format!("no {section} entries available in the catalog"),
        )
        .with_details(serde_json::json!({ "section": section }))
    }

    /// Catalog could not be read or parsed
    pub fn catalog_load(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::CatalogLoad, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Serializable error body returned to callers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorResponseDetails,
}

/// Error code and message pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponseDetails {
    /// Machine-readable code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional structured details
    #[serde(skip_serializing_if = "serde_json::Value::is_null", default)]
    pub details: serde_json::Value,
}

impl From<&AppError> for ErrorResponseDetails {
    fn from(error: &AppError) -> Self {
        Self {
            code: error.code,
            message: error.message.clone(),
            details: error.details.clone(),
        }
    }
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            error: ErrorResponseDetails::from(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_classification() {
        assert!(ErrorCode::InvalidInput.is_client_error());
        assert!(!ErrorCode::ConfigInvalid.is_client_error());
        assert!(!ErrorCode::EmptyCatalog.is_client_error());
        assert!(!ErrorCode::ConfigError.is_client_error());
    }

    #[test]
    fn test_out_of_range_message() {
        let error = AppError::out_of_range("age", 9, "[12, 90]");
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert_eq!(error.message, "age must be in [12, 90], got 9");
        assert_eq!(error.details["field"], "age");
        assert_eq!(error.details["value"], "9");
        assert_eq!(error.details["range"], "[12, 90]");

        let json = serde_json::to_value(ErrorResponse::from(&error)).unwrap();
        assert_eq!(json["error"]["code"], "INVALID_INPUT");
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::empty_catalog("workout");
        let response = ErrorResponse::from(&error);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("EMPTY_CATALOG"));
        assert!(json.contains("workout"));
    }

    #[test]
    fn test_error_response_omits_null_details() {
        let error = AppError::config("unknown activity level 'extreme'");
        let json = serde_json::to_string(&ErrorResponse::from(&error)).unwrap();
        assert!(!json.contains("details"));
    }
}
