//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, NewProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service enforcing the optimistic-concurrency update protocol
///
/// The service layer owns existence checks and the version precondition;
/// the repository below it performs the actual conditional write.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product.
    ///
    /// Any version supplied by the caller is discarded: persisted products
    /// always start at version 1. A caller-supplied id is honored; the store
    /// assigns one when absent.
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        self.repository
            .save(NewProduct {
                id: input.id,
                name: input.name,
                description: input.description,
                quantity: input.quantity,
                version: 1,
            })
            .await
    }

    /// Get a product by id
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i64) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// List all products
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all().await
    }

    /// Update an existing product, guarded by its version.
    ///
    /// Fails with `NotFound` when the id is unknown and with
    /// `VersionConflict` when `expected_version` no longer matches the
    /// stored row; a failed update leaves the row untouched. On success the
    /// returned product carries the patch fields and a version bumped by
    /// exactly 1; the id never changes.
    #[instrument(skip(self, patch))]
    pub async fn update_product(
        &self,
        id: i64,
        expected_version: i64,
        patch: UpdateProduct,
    ) -> ProductResult<Product> {
        // Existence first, so an unknown id maps to NotFound rather than
        // being folded into the version conflict.
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(ProductError::NotFound(id));
        }

        match self
            .repository
            .update_if_version(id, expected_version, patch)
            .await?
        {
            Some(product) => Ok(product),
            // The row existed a moment ago; zero affected rows means the
            // version moved underneath us.
            None => Err(ProductError::VersionConflict {
                id,
                expected: expected_version,
            }),
        }
    }

    /// Delete a product by id
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> ProductResult<()> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(ProductError::NotFound(id));
        }

        self.repository.delete_by_id(id).await
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
