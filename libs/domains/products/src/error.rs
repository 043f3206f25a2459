use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(i64),

    #[error("Version conflict for product {id}: expected version {expected}")]
    VersionConflict { id: i64, expected: i64 },

    #[error("Missing or malformed If-Match header")]
    InvalidPrecondition,

    #[error("Database error: {0}")]
    Storage(#[from] sqlx::Error),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        match self {
            // 404 and 409 carry empty bodies; existing clients assert on
            // the bare response.
            ProductError::NotFound(id) => {
                tracing::info!(product_id = id, "Product not found");
                StatusCode::NOT_FOUND.into_response()
            }
            ProductError::VersionConflict { id, expected } => {
                tracing::info!(
                    product_id = id,
                    expected_version = expected,
                    "If-Match precondition failed"
                );
                StatusCode::CONFLICT.into_response()
            }
            ProductError::InvalidPrecondition => AppError::BadRequest(
                "The If-Match header must carry the expected product version".to_string(),
            )
            .into_response(),
            ProductError::Storage(e) => AppError::Database(e).into_response(),
        }
    }
}
