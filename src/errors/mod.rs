//! # Error Handling
//!
//! Crate-wide error types for the Portico backend using `thiserror`.

/// Custom result type for Portico operations
pub type Result<T> = std::result::Result<T, PorticoError>;

/// Main error type for the Portico backend
#[derive(thiserror::Error, Debug)]
pub enum PorticoError {
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Database and storage errors
    #[error("Database error: {context}")]
    Database {
        #[source]
        source: sqlx::Error,
        context: String,
    },

    /// Schema validation errors; `fields` carries the aggregated
    /// field-level messages surfaced to the caller.
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        fields: Vec<String>,
    },

    /// Resource not found errors
    #[error("Resource not found: {resource_type} with ID '{id}'")]
    NotFound { resource_type: String, id: String },

    /// Serialization/deserialization errors
    #[error("Serialization error: {context}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        context: String,
    },

    /// I/O errors with additional context
    #[error("I/O error: {context}")]
    Io {
        #[source]
        source: std::io::Error,
        context: String,
    },

    /// Internal server errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl PorticoError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into() }
    }

    /// Create a validation error without field details
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation { message: message.into(), fields: Vec::new() }
    }

    /// Create a not found error
    pub fn not_found<R: Into<String>, I: ToString>(resource_type: R, id: I) -> Self {
        Self::NotFound { resource_type: resource_type.into(), id: id.to_string() }
    }

    /// Create an internal server error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal { message: message.into() }
    }

    /// Get the HTTP status code that should be returned for this error
    pub fn status_code(&self) -> u16 {
        match self {
            PorticoError::Config { .. } => 500,
            PorticoError::Database { .. } => 500,
            PorticoError::Validation { .. } => 400,
            PorticoError::NotFound { .. } => 404,
            // Serialization errors originate from encoding or decoding
            // stored rows, not from caller input.
            PorticoError::Serialization { .. } => 500,
            PorticoError::Io { .. } => 500,
            PorticoError::Internal { .. } => 500,
        }
    }
}

impl From<sqlx::Error> for PorticoError {
    fn from(error: sqlx::Error) -> Self {
        Self::Database { source: error, context: "Database operation failed".to_string() }
    }
}

impl From<std::io::Error> for PorticoError {
    fn from(error: std::io::Error) -> Self {
        Self::Io { source: error, context: "I/O operation failed".to_string() }
    }
}

impl From<serde_json::Error> for PorticoError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization { source: error, context: "JSON serialization failed".to_string() }
    }
}

impl From<validator::ValidationErrors> for PorticoError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .iter()
            .map(|(field, field_errors)| {
                let messages: Vec<String> = field_errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map_or("Invalid value".to_string(), |m| m.to_string())
                    })
                    .collect();
                format!("{}: {}", field, messages.join(", "))
            })
            .collect();
        fields.sort();

        Self::Validation {
            message: format!("Validation failed: {}", fields.join("; ")),
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "path must not be empty"))]
        path: String,
    }

    #[test]
    fn test_error_creation() {
        let error = PorticoError::config("missing database URL");
        assert!(matches!(error, PorticoError::Config { .. }));
        assert_eq!(error.to_string(), "Configuration error: missing database URL");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(PorticoError::validation("test").status_code(), 400);
        assert_eq!(PorticoError::not_found("Route", 7).status_code(), 404);
        assert_eq!(PorticoError::internal("test").status_code(), 500);
    }

    #[test]
    fn test_validation_errors_aggregate_fields() {
        let sample = Sample { path: String::new() };
        let err: PorticoError = sample.validate().unwrap_err().into();
        match err {
            PorticoError::Validation { fields, message } => {
                assert_eq!(fields, vec!["path: path must not be empty".to_string()]);
                assert!(message.contains("path must not be empty"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_conversions() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PorticoError = io_error.into();
        assert!(matches!(err, PorticoError::Io { .. }));

        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: PorticoError = json_error.into();
        assert!(matches!(err, PorticoError::Serialization { .. }));
    }
}
