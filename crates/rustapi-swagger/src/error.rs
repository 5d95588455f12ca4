//! Error types for Swagger UI configuration

use thiserror::Error;

/// Result type alias for Swagger UI operations
pub type Result<T, E = SwaggerError> = std::result::Result<T, E>;

/// Errors raised outside of plain config construction
///
/// Building a [`SwaggerConfig`](crate::SwaggerConfig) never fails. These
/// errors come from opt-in validation, page rendering and settings loading.
#[derive(Debug, Error)]
pub enum SwaggerError {
    /// An enum-like string option holds a value Swagger UI does not know
    #[error("invalid value {value:?} for {field}, expected one of: {}", .expected.join(", "))]
    InvalidEnumValue {
        /// Option name
        field: &'static str,
        /// Value that was supplied
        value: String,
        /// Accepted values
        expected: &'static [&'static str],
    },

    /// A submit method is not an HTTP method Swagger UI can send
    #[error("unsupported submit method: {0:?}")]
    InvalidSubmitMethod(String),

    /// Index page template failed to render
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    /// Settings could not be read from the environment
    #[cfg(feature = "config")]
    #[error("settings error: {0}")]
    Settings(#[from] envy::Error),
}

impl SwaggerError {
    /// Create an invalid enum value error
    pub fn invalid_enum(
        field: &'static str,
        value: impl Into<String>,
        expected: &'static [&'static str],
    ) -> Self {
        Self::InvalidEnumValue {
            field,
            value: value.into(),
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_enum_message() {
        let err = SwaggerError::invalid_enum("doc_expansion", "open", &["list", "full", "none"]);
        assert_eq!(
            err.to_string(),
            "invalid value \"open\" for doc_expansion, expected one of: list, full, none"
        );
    }

    #[test]
    fn test_invalid_submit_method_message() {
        let err = SwaggerError::InvalidSubmitMethod("GET".to_string());
        assert_eq!(err.to_string(), "unsupported submit method: \"GET\"");
    }
}
