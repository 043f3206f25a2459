use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Product entity - one inventory item stored as a single table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Product {
    /// Unique identifier, assigned at creation
    pub id: i64,
    /// Product name
    pub name: String,
    /// Product description
    pub description: Option<String>,
    /// Quantity on hand; the contract enforces no lower bound
    pub quantity: i64,
    /// Optimistic concurrency token: starts at 1, bumped by exactly 1 on
    /// every successful update, never set by the client
    pub version: i64,
}

/// DTO for creating a new product.
///
/// A client-supplied `version` field is not part of this DTO and is silently
/// dropped during deserialization; new products always start at version 1.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    /// Caller-supplied id; the store assigns a fresh one when absent
    #[serde(default)]
    pub id: Option<i64>,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub quantity: i64,
}

/// DTO for updating an existing product.
///
/// The update protocol overwrites name, description, and quantity wholesale;
/// `id` is immutable and `version` is managed by the store.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub quantity: i64,
}

/// A product row ready to be persisted, with the version already decided by
/// the service layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub quantity: i64,
    pub version: i64,
}
