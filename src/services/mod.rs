//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! repositories and handlers.

mod auth_service;
mod cart_service;
pub mod notifications;
mod product_service;

pub use auth_service::{AuthService, INVALID_CREDENTIALS};
pub use cart_service::CartService;
pub use notifications::NotificationService;
pub use product_service::{ProductInput, ProductService};

use crate::config::NotificationsConfig;
use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Cloning is cheap since underlying pools use `Arc` internally.
#[derive(Clone)]
pub struct Services {
    pub auth: AuthService,
    pub products: ProductService,
    pub cart: CartService,
    pub notifications: NotificationService,
}

impl Services {
    /// Creates a new Services instance from Repositories.
    pub fn new(repos: Repositories, notifications_config: &NotificationsConfig) -> Self {
        let notifications = NotificationService::from_config(notifications_config);
        Self {
            auth: AuthService::new(repos.users.clone(), notifications.clone()),
            products: ProductService::new(repos.products.clone()),
            cart: CartService::new(repos.cart_items, repos.products, repos.users),
            notifications,
        }
    }
}
