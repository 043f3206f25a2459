//! Type-safe error codes for API responses.
//!
//! Single source of truth for the error codes used across the application.
//! Each code carries a string identifier for clients, an integer code for
//! logging and monitoring, and a default human-readable message.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request validation failed
    ValidationError,

    /// JSON extraction from request body failed
    JsonExtraction,

    /// Requested resource was not found
    NotFound,

    /// Request conflicts with current resource state
    Conflict,

    /// A required precondition header is missing or malformed
    PreconditionError,

    // Server errors (2000-2999)
    /// An unexpected internal server error occurred
    InternalError,

    /// A database operation failed
    DatabaseError,

    /// The database connection pool is exhausted or closed
    DatabaseUnavailable,
}

impl ErrorCode {
    /// String identifier returned to clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::JsonExtraction => "JSON_EXTRACTION",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::PreconditionError => "PRECONDITION_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::DatabaseUnavailable => "DATABASE_UNAVAILABLE",
        }
    }

    /// Integer code for logging and monitoring.
    pub fn code(&self) -> i32 {
        match self {
            ErrorCode::ValidationError => 1001,
            ErrorCode::JsonExtraction => 1002,
            ErrorCode::NotFound => 1004,
            ErrorCode::Conflict => 1008,
            ErrorCode::PreconditionError => 1012,
            ErrorCode::InternalError => 2000,
            ErrorCode::DatabaseError => 2001,
            ErrorCode::DatabaseUnavailable => 2002,
        }
    }

    /// Default human-readable message.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "Request validation failed",
            ErrorCode::JsonExtraction => "Invalid JSON in request body",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::Conflict => "Request conflicts with current resource state",
            ErrorCode::PreconditionError => "Required precondition header missing or malformed",
            ErrorCode::InternalError => "An internal server error occurred",
            ErrorCode::DatabaseError => "A database operation failed",
            ErrorCode::DatabaseUnavailable => "The database is temporarily unavailable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let all = [
            ErrorCode::ValidationError,
            ErrorCode::JsonExtraction,
            ErrorCode::NotFound,
            ErrorCode::Conflict,
            ErrorCode::PreconditionError,
            ErrorCode::InternalError,
            ErrorCode::DatabaseError,
            ErrorCode::DatabaseUnavailable,
        ];
        let mut codes: Vec<i32> = all.iter().map(|c| c.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }

    #[test]
    fn test_client_codes_are_1xxx() {
        assert!(ErrorCode::ValidationError.code() < 2000);
        assert!(ErrorCode::Conflict.code() < 2000);
        assert!(ErrorCode::InternalError.code() >= 2000);
    }
}
