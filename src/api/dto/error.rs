//! Error response DTOs.

use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response format.
///
/// `error` carries the human-readable message; `code` is the stable error
/// kind clients can branch on instead of matching message text.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Product not found")]
    pub error: String,
    #[schema(example = "NOT_FOUND")]
    pub code: String,
}

impl ErrorResponse {
    /// Creates a new error response with code and message.
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            error: message.to_string(),
            code: code.to_string(),
        }
    }

    /// Error response for a missing resource.
    pub fn not_found_error(entity: &str, field: &str, value: &str) -> Self {
        Self::new(
            "NOT_FOUND",
            &format!("{} with {} '{}' not found", entity, field, value),
        )
    }

    /// Error response for a unique constraint conflict.
    pub fn duplicate_error(entity: &str, field: &str) -> Self {
        Self::new(
            "DUPLICATE_ENTRY",
            &format!("{} with this {} already exists", entity, field),
        )
    }

    /// Error response for a field validation failure.
    pub fn validation_error(field: &str, reason: &str) -> Self {
        Self::new("VALIDATION_ERROR", &format!("{}: {}", field, reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_error_and_code_fields() {
        let json = serde_json::to_value(ErrorResponse::new("FORBIDDEN", "nope")).unwrap();
        assert_eq!(json["error"], "nope");
        assert_eq!(json["code"], "FORBIDDEN");
    }

    #[test]
    fn test_duplicate_error_message() {
        let response = ErrorResponse::duplicate_error("user", "email");
        assert_eq!(response.error, "user with this email already exists");
        assert_eq!(response.code, "DUPLICATE_ENTRY");
    }
}
