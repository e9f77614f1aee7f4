//! Shopping cart request handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::CART_TAG;
use crate::api::dto::{
    AddToCartRequest, CartCountResponse, CartItemResponse, CartTotalResponse, ErrorResponse,
    UpdateQuantityRequest,
};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates the cart routes
///
/// # Routes
/// - `GET /{user_id}` - List cart items
/// - `POST /{user_id}/items` - Add a product (merge-on-duplicate)
/// - `PUT /{user_id}/items/{cart_item_id}` - Overwrite a quantity
/// - `DELETE /{user_id}/items/{cart_item_id}` - Remove an item
/// - `DELETE /{user_id}/clear` - Empty the cart
/// - `GET /{user_id}/total` - Price aggregate
/// - `GET /{user_id}/count` - Quantity aggregate
pub fn cart_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_cart_items))
        .routes(routes!(add_to_cart))
        .routes(routes!(update_cart_item_quantity, remove_from_cart))
        .routes(routes!(clear_cart))
        .routes(routes!(cart_total))
        .routes(routes!(cart_count))
}

/// GET /api/cart/{user_id} - List cart items
///
/// Returns all of the user's cart rows joined with product data.
#[utoipa::path(
    get,
    path = "/{user_id}",
    tag = CART_TAG,
    params(("user_id" = i64, Path, description = "Cart owner's user ID")),
    responses(
        (status = 200, description = "Cart items", body = Vec<CartItemResponse>)
    )
)]
async fn list_cart_items(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<Vec<CartItemResponse>>> {
    let rows = state.services.cart.list_items(user_id).await?;
    let responses: Vec<CartItemResponse> = rows.into_iter().map(CartItemResponse::from).collect();
    Ok(Json(responses))
}

/// POST /api/cart/{user_id}/items - Add product to cart
///
/// Adds the requested quantity of a product. If the product is already in
/// the cart, the stored quantity is incremented rather than replaced.
#[utoipa::path(
    post,
    path = "/{user_id}/items",
    tag = CART_TAG,
    params(("user_id" = i64, Path, description = "Cart owner's user ID")),
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "The resulting cart row", body = CartItemResponse),
        (status = 400, description = "Quantity out of range", body = ErrorResponse),
        (status = 404, description = "Product or user not found", body = ErrorResponse)
    )
)]
async fn add_to_cart(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<AddToCartRequest>,
) -> AppResult<Json<CartItemResponse>> {
    let row = state
        .services
        .cart
        .add_item(user_id, payload.product_id, payload.quantity)
        .await?;
    Ok(Json(CartItemResponse::from(row)))
}

/// PUT /api/cart/{user_id}/items/{cart_item_id} - Update quantity
///
/// Overwrites the row's quantity (absolute set, not increment).
#[utoipa::path(
    put,
    path = "/{user_id}/items/{cart_item_id}",
    tag = CART_TAG,
    params(
        ("user_id" = i64, Path, description = "Cart owner's user ID"),
        ("cart_item_id" = i64, Path, description = "Cart item ID"),
    ),
    request_body = UpdateQuantityRequest,
    responses(
        (status = 200, description = "The updated cart row", body = CartItemResponse),
        (status = 400, description = "Quantity out of range", body = ErrorResponse),
        (status = 403, description = "Cart row holds the caller's own product", body = ErrorResponse),
        (status = 404, description = "Cart item not found", body = ErrorResponse)
    )
)]
async fn update_cart_item_quantity(
    State(state): State<AppState>,
    Path((user_id, cart_item_id)): Path<(i64, i64)>,
    ValidatedJson(payload): ValidatedJson<UpdateQuantityRequest>,
) -> AppResult<Json<CartItemResponse>> {
    let row = state
        .services
        .cart
        .update_quantity(user_id, cart_item_id, payload.quantity)
        .await?;
    Ok(Json(CartItemResponse::from(row)))
}

/// DELETE /api/cart/{user_id}/items/{cart_item_id} - Remove item
///
/// Returns 204 No Content on success; a row owned by another user is
/// indistinguishable from a missing one.
#[utoipa::path(
    delete,
    path = "/{user_id}/items/{cart_item_id}",
    tag = CART_TAG,
    params(
        ("user_id" = i64, Path, description = "Cart owner's user ID"),
        ("cart_item_id" = i64, Path, description = "Cart item ID"),
    ),
    responses(
        (status = 204, description = "Item removed"),
        (status = 404, description = "Cart item not found", body = ErrorResponse)
    )
)]
async fn remove_from_cart(
    State(state): State<AppState>,
    Path((user_id, cart_item_id)): Path<(i64, i64)>,
) -> AppResult<StatusCode> {
    state.services.cart.remove_item(user_id, cart_item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/cart/{user_id}/clear - Empty the cart
///
/// Idempotent: clearing an empty cart also returns 204.
#[utoipa::path(
    delete,
    path = "/{user_id}/clear",
    tag = CART_TAG,
    params(("user_id" = i64, Path, description = "Cart owner's user ID")),
    responses(
        (status = 204, description = "Cart cleared")
    )
)]
async fn clear_cart(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.cart.clear(user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/cart/{user_id}/total - Cart price total
///
/// Sum of price × quantity across the cart; 0 for an empty cart.
#[utoipa::path(
    get,
    path = "/{user_id}/total",
    tag = CART_TAG,
    params(("user_id" = i64, Path, description = "Cart owner's user ID")),
    responses(
        (status = 200, description = "Cart total", body = CartTotalResponse)
    )
)]
async fn cart_total(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<CartTotalResponse>> {
    let total = state.services.cart.total(user_id).await?;
    Ok(Json(CartTotalResponse { total }))
}

/// GET /api/cart/{user_id}/count - Cart item count
///
/// Sum of quantities across the cart; 0 for an empty cart.
#[utoipa::path(
    get,
    path = "/{user_id}/count",
    tag = CART_TAG,
    params(("user_id" = i64, Path, description = "Cart owner's user ID")),
    responses(
        (status = 200, description = "Cart count", body = CartCountResponse)
    )
)]
async fn cart_count(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<CartCountResponse>> {
    let count = state.services.cart.count(user_id).await?;
    Ok(Json(CartCountResponse { count }))
}
