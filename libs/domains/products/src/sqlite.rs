//! SQLite implementation of ProductRepository

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::{NewProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

const SELECT_COLUMNS: &str = "SELECT id, name, description, quantity, version FROM products";

/// SQLite implementation of the ProductRepository
///
/// The compare-and-swap of the update protocol is pushed down into a single
/// conditional UPDATE keyed by `(id, version)`, so racing writers cannot both
/// pass the version check: exactly one statement affects a row.
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    /// Create a new SqliteProductRepository over an existing pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the products table when it does not exist yet
    pub async fn init_schema(&self) -> ProductResult<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS products (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                name        TEXT    NOT NULL,
                description TEXT,
                quantity    INTEGER NOT NULL,
                version     INTEGER NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        tracing::info!("Product schema initialized");
        Ok(())
    }

    /// Get the underlying pool for advanced operations
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn fetch_row(&self, id: i64) -> ProductResult<Product> {
        let product = sqlx::query_as::<_, Product>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(product)
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    #[instrument(skip(self, product), fields(product_name = %product.name))]
    async fn save(&self, product: NewProduct) -> ProductResult<Product> {
        let id = match product.id {
            Some(id) => {
                sqlx::query(
                    "INSERT INTO products (id, name, description, quantity, version)
                     VALUES (?, ?, ?, ?, ?)
                     ON CONFLICT(id) DO UPDATE SET
                        name = excluded.name,
                        description = excluded.description,
                        quantity = excluded.quantity,
                        version = excluded.version",
                )
                .bind(id)
                .bind(&product.name)
                .bind(&product.description)
                .bind(product.quantity)
                .bind(product.version)
                .execute(&self.pool)
                .await?;
                id
            }
            None => {
                let result = sqlx::query(
                    "INSERT INTO products (name, description, quantity, version)
                     VALUES (?, ?, ?, ?)",
                )
                .bind(&product.name)
                .bind(&product.description)
                .bind(product.quantity)
                .bind(product.version)
                .execute(&self.pool)
                .await?;
                result.last_insert_rowid()
            }
        };

        tracing::info!(product_id = id, "Product saved");
        self.fetch_row(id).await
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(&format!("{SELECT_COLUMNS} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;
        Ok(products)
    }

    #[instrument(skip(self, patch))]
    async fn update_if_version(
        &self,
        id: i64,
        expected_version: i64,
        patch: UpdateProduct,
    ) -> ProductResult<Option<Product>> {
        let result = sqlx::query(
            "UPDATE products
             SET name = ?, description = ?, quantity = ?, version = version + 1
             WHERE id = ? AND version = ?",
        )
        .bind(&patch.name)
        .bind(&patch.description)
        .bind(patch.quantity)
        .bind(id)
        .bind(expected_version)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        tracing::info!(product_id = id, "Product updated");
        self.fetch_row(id).await.map(Some)
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: i64) -> ProductResult<()> {
        sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        tracing::info!(product_id = id, "Product deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> ProductResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;
        Ok(count as u64)
    }
}
