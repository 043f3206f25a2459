//! Products Domain
//!
//! CRUD over a single Product resource with optimistic concurrency control:
//! every product carries a version counter that starts at 1 and is bumped by
//! exactly 1 on each successful update. Updates are guarded by an `If-Match`
//! precondition compared against that version; responses echo an `ETag` and
//! `Location` for the resource.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP verbs, status codes, ETag/If-Match headers
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← existence checks, version precondition
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │ Repository  │  ← data access (trait + SQLite implementation)
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │   Models    │  ← entity, DTOs
//! └─────────────┘
//! ```
//!
//! The repository's conditional write (`UPDATE .. WHERE id = ? AND
//! version = ?`) makes the compare-and-swap a single atomic statement, so
//! concurrent updates cannot both pass the version check.

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod sqlite;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{CreateProduct, NewProduct, Product, UpdateProduct};
pub use repository::ProductRepository;
pub use service::ProductService;
pub use sqlite::SqliteProductRepository;
