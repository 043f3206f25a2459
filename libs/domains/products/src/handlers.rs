//! HTTP handlers for the Products API

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderName, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::ValidatedJson;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(schemas(Product, CreateProduct, UpdateProduct)),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared_service)
}

/// ETag and Location headers for a product resource.
///
/// The ETag quotes the resource id, not its version, while the If-Match
/// precondition on update is compared against the version. Existing clients
/// depend on exactly this shape, so the asymmetry stays.
fn resource_headers(id: i64) -> [(HeaderName, String); 2] {
    [
        (header::ETAG, format!("\"{id}\"")),
        (header::LOCATION, format!("/products/{id}")),
    ]
}

/// Expected version carried by the If-Match header.
///
/// The header value is a bare integer; a surrounding quote pair in the ETag
/// style is tolerated. Missing or unparseable values map to 400.
fn expected_version(headers: &HeaderMap) -> ProductResult<i64> {
    let value = headers
        .get(header::IF_MATCH)
        .ok_or(ProductError::InvalidPrecondition)?;

    value
        .to_str()
        .map_err(|_| ProductError::InvalidPrecondition)?
        .trim()
        .trim_matches('"')
        .parse()
        .map_err(|_| ProductError::InvalidPrecondition)
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "List of all products", body = Vec<Product>),
        (status = 500, description = "Storage failure")
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_products().await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created at version 1, ETag and Location set", body = Product),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Storage failure")
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((
        StatusCode::CREATED,
        resource_headers(product.id),
        Json(product),
    ))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found, ETag and Location set", body = Product),
        (status = 404, description = "No product with this id"),
        (status = 500, description = "Storage failure")
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i64>,
) -> ProductResult<impl IntoResponse> {
    let product = service.get_product(id).await?;
    Ok((resource_headers(id), Json(product)))
}

/// Update a product, guarded by the If-Match version precondition
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product id"),
        ("If-Match" = i64, Header, description = "Expected current version of the product")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated, version bumped by one", body = Product),
        (status = 400, description = "Missing or malformed If-Match header or body"),
        (status = 404, description = "No product with this id"),
        (status = 409, description = "If-Match does not equal the stored version"),
        (status = 500, description = "Storage failure")
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    ValidatedJson(patch): ValidatedJson<UpdateProduct>,
) -> ProductResult<impl IntoResponse> {
    let expected = expected_version(&headers)?;
    let product = service.update_product(id, expected, patch).await?;
    Ok((resource_headers(product.id), Json(product)))
}

/// Delete a product by id
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 404, description = "No product with this id"),
        (status = 500, description = "Storage failure")
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i64>,
) -> ProductResult<impl IntoResponse> {
    service.delete_product(id).await?;
    // Deletes answer 200 with an empty body, not 204
    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_headers_quote_the_id() {
        let [(etag_name, etag), (location_name, location)] = resource_headers(7);
        assert_eq!(etag_name, header::ETAG);
        assert_eq!(etag, "\"7\"");
        assert_eq!(location_name, header::LOCATION);
        assert_eq!(location, "/products/7");
    }

    #[test]
    fn test_expected_version_parses_bare_integer() {
        let mut headers = HeaderMap::new();
        headers.insert(header::IF_MATCH, "3".parse().unwrap());
        assert_eq!(expected_version(&headers).unwrap(), 3);
    }

    #[test]
    fn test_expected_version_tolerates_quoted_form() {
        let mut headers = HeaderMap::new();
        headers.insert(header::IF_MATCH, "\"3\"".parse().unwrap());
        assert_eq!(expected_version(&headers).unwrap(), 3);
    }

    #[test]
    fn test_expected_version_rejects_missing_or_garbage() {
        let headers = HeaderMap::new();
        assert!(matches!(
            expected_version(&headers),
            Err(ProductError::InvalidPrecondition)
        ));

        let mut headers = HeaderMap::new();
        headers.insert(header::IF_MATCH, "not-a-version".parse().unwrap());
        assert!(matches!(
            expected_version(&headers),
            Err(ProductError::InvalidPrecondition)
        ));
    }
}
