//! Request and response DTOs for the REST API.
//!
//! DTOs are the externally-shaped projections of the stored entities;
//! credential fields never appear in any response type.

mod auth;
mod cart;
mod error;
mod pagination;
mod product;
mod user;

pub use auth::{
    LoginRequest, LoginResponse, RefreshTokenRequest, RefreshTokenResponse, RegisterRequest,
    RegisterResponse,
};
pub use cart::{
    AddToCartRequest, CartCountResponse, CartItemResponse, CartTotalResponse,
    UpdateQuantityRequest,
};
pub use error::ErrorResponse;
pub use pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PagedResponse, PaginationMeta, PaginationParams};
pub use product::{OwnerResponse, ProductRequest, ProductResponse};
pub use user::UserResponse;

use chrono::NaiveDateTime;

/// Formats a stored timestamp for API responses.
pub(crate) fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}
