//! Error types for the Event Registry client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Validation errors are raised while a query or result request is being
//! built, never deferred to a network round-trip. Errors reported by the
//! remote service are surfaced by the iterator as an empty page instead.

use thiserror::Error;

/// The main error type for the client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Validation Errors
    // ============================================================================
    #[error("Parameter '{name}' has an unsupported type: {message}")]
    InvalidParameterType { name: String, message: String },

    #[error("Invalid value for parameter '{name}': {message}")]
    InvalidParameter { name: String, message: String },

    #[error("Cannot build a {operator} combination from an empty list")]
    EmptyCombination { operator: String },

    #[error("Parameter '{name}' = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        name: String,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Parameters '{first}' and '{second}' cannot be used together")]
    MutuallyExclusive { first: String, second: String },

    // ============================================================================
    // Remote Errors
    // ============================================================================
    #[error("Service returned an error: {message}")]
    Remote { message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Rate limited by the service (HTTP 429)")]
    RateLimited,

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Output Errors
    // ============================================================================
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an invalid parameter type error
    pub fn invalid_type(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameterType {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an invalid parameter value error
    pub fn invalid(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an empty combination error
    pub fn empty_combination(operator: impl Into<String>) -> Self {
        Self::EmptyCombination {
            operator: operator.into(),
        }
    }

    /// Create an out-of-range error
    pub fn out_of_range(name: impl Into<String>, value: i64, min: i64, max: i64) -> Self {
        Self::ParameterOutOfRange {
            name: name.into(),
            value,
            min,
            max,
        }
    }

    /// Create a mutually exclusive parameters error
    pub fn mutually_exclusive(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::MutuallyExclusive {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Create a remote error
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Check if this error was raised while building a request
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidParameterType { .. }
                | Error::InvalidParameter { .. }
                | Error::EmptyCombination { .. }
                | Error::ParameterOutOfRange { .. }
                | Error::MutuallyExclusive { .. }
        )
    }

    /// Check if this error originated on the remote side of the transport
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Error::Remote { .. } | Error::Http(_) | Error::HttpStatus { .. } | Error::RateLimited
        )
    }
}

/// Check a value against an inclusive range
pub(crate) fn check_range(name: &str, value: i64, min: i64, max: i64) -> Result<()> {
    if value < min || value > max {
        return Err(Error::out_of_range(name, value, min, max));
    }
    Ok(())
}

/// Result type alias for the client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
