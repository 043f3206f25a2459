use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{NewProduct, Product, UpdateProduct};

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for products.
/// Implementations can use different storage backends (SQLite, PostgreSQL, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Upsert a product row by id; assigns a fresh unique id when unset.
    /// Returns the persisted row.
    async fn save(&self, product: NewProduct) -> ProductResult<Product>;

    /// Get a product by id; absence is not an error at this layer
    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    /// List all products in deterministic id order
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    /// Conditional write: apply the patch and bump the version by 1 in a
    /// single statement, only where the stored version still equals
    /// `expected_version`. Returns `None` when no row matched, leaving the
    /// stored row untouched.
    async fn update_if_version(
        &self,
        id: i64,
        expected_version: i64,
        patch: UpdateProduct,
    ) -> ProductResult<Option<Product>>;

    /// Remove the row if present; a no-op when absent. Existence checks are
    /// the caller's responsibility.
    async fn delete_by_id(&self, id: i64) -> ProductResult<()>;

    /// Count all product rows
    async fn count(&self) -> ProductResult<u64>;
}
