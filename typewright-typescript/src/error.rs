//! Error types for name and type derivation.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for typewright-typescript operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("invalid model property naming '{value}'")]
    #[diagnostic(
        code(typewright::invalid_model_property_naming),
        help("valid values are: original, camelCase, PascalCase, snake_case")
    )]
    InvalidNamingConvention { value: String },

    #[error("empty method name (operation id) not allowed")]
    #[diagnostic(
        code(typewright::empty_operation_id),
        help("every operation must declare a non-empty operation id")
    )]
    EmptyOperationId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidNamingConvention {
            value: "UPPERCASE".to_string(),
        };
        assert_eq!(err.to_string(), "invalid model property naming 'UPPERCASE'");

        assert_eq!(
            Error::EmptyOperationId.to_string(),
            "empty method name (operation id) not allowed"
        );
    }
}
