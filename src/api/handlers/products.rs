//! Product catalog request handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::PRODUCT_TAG;
use crate::api::dto::{
    ErrorResponse, PagedResponse, PaginationParams, ProductRequest, ProductResponse,
};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates the product catalog routes
///
/// # Routes
/// - `GET /` - Paged product list (public)
/// - `POST /` - Create a product (authenticated)
/// - `GET /my-products` - Paged list of the caller's products (authenticated)
/// - `GET /{id}` - Single product (public)
/// - `PUT /{id}` - Update a product (authenticated, owner only)
/// - `DELETE /{id}` - Delete a product (authenticated, owner only)
pub fn product_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_products, create_product))
        .routes(routes!(my_products))
        .routes(routes!(get_product, update_product, delete_product))
}

/// GET /api/products - List products
///
/// Returns a page of products with pagination metadata, in insertion order.
#[utoipa::path(
    get,
    path = "/",
    tag = PRODUCT_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Paged product list", body = PagedResponse<ProductResponse>)
    )
)]
async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<PagedResponse<ProductResponse>>> {
    let params = params.normalize();
    let (rows, total) = state
        .services
        .products
        .list_products(params.offset() as i64, params.limit() as i64)
        .await?;

    let data: Vec<ProductResponse> = rows.into_iter().map(ProductResponse::from).collect();
    Ok(Json(PagedResponse::new(data, &params, total as u64)))
}

/// GET /api/products/my-products - List the caller's products
///
/// Returns a page of the authenticated user's products, newest first.
#[utoipa::path(
    get,
    path = "/my-products",
    tag = PRODUCT_TAG,
    params(PaginationParams),
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Paged product list", body = PagedResponse<ProductResponse>),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
async fn my_products(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<PagedResponse<ProductResponse>>> {
    let params = params.normalize();
    let (rows, total) = state
        .services
        .products
        .list_products_by_owner(user.user_id, params.offset() as i64, params.limit() as i64)
        .await?;

    let data: Vec<ProductResponse> = rows.into_iter().map(ProductResponse::from).collect();
    Ok(Json(PagedResponse::new(data, &params, total as u64)))
}

/// GET /api/products/{id} - Get product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "The product", body = ProductResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ProductResponse>> {
    let row = state.services.products.get_product(id).await?;
    Ok(Json(ProductResponse::from(row)))
}

/// POST /api/products - Create product
///
/// Creates a product owned by the authenticated user.
/// Returns 201 Created with the created resource.
#[utoipa::path(
    post,
    path = "/",
    tag = PRODUCT_TAG,
    request_body = ProductRequest,
    security(("bearerAuth" = [])),
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Invalid product data", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
async fn create_product(
    State(state): State<AppState>,
    user: AuthUser,
    ValidatedJson(payload): ValidatedJson<ProductRequest>,
) -> AppResult<(StatusCode, Json<ProductResponse>)> {
    let row = state
        .services
        .products
        .create_product(payload.into_input(), user.user_id)
        .await?;
    Ok((StatusCode::CREATED, Json(ProductResponse::from(row))))
}

/// PUT /api/products/{id} - Update product
///
/// Overwrites the product's mutable fields. Only the recorded creator may
/// update; anyone else receives 403.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i64, Path, description = "Product ID")),
    request_body = ProductRequest,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 400, description = "Invalid product data", body = ErrorResponse),
        (status = 403, description = "Not the product owner", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn update_product(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<ProductRequest>,
) -> AppResult<Json<ProductResponse>> {
    let row = state
        .services
        .products
        .update_product(id, payload.into_input(), user.user_id)
        .await?;
    Ok(Json(ProductResponse::from(row)))
}

/// DELETE /api/products/{id} - Delete product
///
/// Returns 204 No Content on success. Only the recorded creator may
/// delete; anyone else receives 403.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i64, Path, description = "Product ID")),
    security(("bearerAuth" = [])),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 403, description = "Not the product owner", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn delete_product(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state
        .services
        .products
        .delete_product(id, user.user_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
