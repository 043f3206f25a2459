//! # Axum Helpers
//!
//! Shared utilities for building Axum web applications:
//!
//! - **[`errors`]**: structured error responses with error codes
//! - **[`extractors`]**: custom extractors (validated JSON)
//! - **[`shutdown`]**: graceful shutdown signal handling

pub mod errors;
pub mod extractors;
pub mod shutdown;

pub use errors::{AppError, ErrorCode, ErrorResponse};
pub use extractors::ValidatedJson;
pub use shutdown::shutdown_signal;
