//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use axum::{Router, http::HeaderValue, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs first):
/// 1. Request ID middleware (runs first) - generates/propagates request IDs
/// 2. Logging middleware (runs second) - logs requests with request IDs
/// 3. CORS and compression layers
///
/// # Routes
/// - `/api/products` - Product catalog
/// - `/api/cart` - Shopping cart
/// - `/api/auth` - Authentication
/// - `/health` - Liveness check
/// - `/swagger-ui` - Generated API documentation
pub fn create_router(state: AppState, allowed_origins: &[String]) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api/products", handlers::products::product_routes())
        .nest("/api/cart", handlers::cart::cart_routes())
        .nest("/api/auth", handlers::auth::auth_routes())
        .merge(handlers::health::health_routes())
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(CompressionLayer::new())
        .layer(build_cors_layer(allowed_origins))
        // Middleware is applied in reverse order - last added runs first
        // So logging runs after request_id has set the ID
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// Builds the CORS layer for the SPA client.
///
/// With no configured origins every origin is allowed, which suits local
/// development; production deployments list the SPA origin explicitly.
fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_cors_layer_accepts_origin_lists() {
        // Both branches must produce a layer without panicking
        let _ = build_cors_layer(&[]);
        let _ = build_cors_layer(&["http://localhost:5173".to_string()]);
        let _ = build_cors_layer(&["not a header value\n".to_string()]);
    }
}
