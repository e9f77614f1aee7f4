//! Repository layer for data access operations.
//!
//! Provides async CRUD operations for all domain entities.

mod cart_item_repo;
mod product_repo;
mod user_repo;

pub use cart_item_repo::{CartItemRepository, CartRow};
pub use product_repo::{ProductRepository, ProductWithOwner};
pub use user_repo::UserRepository;

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Since `AsyncDbPool` uses `Arc` internally, cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pub users: UserRepository,
    pub products: ProductRepository,
    pub cart_items: CartItemRepository,
}

impl Repositories {
    /// Creates a new Repositories instance with all repositories initialized.
    ///
    /// # Arguments
    /// * `pool` - The async database connection pool
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            products: ProductRepository::new(pool.clone()),
            cart_items: CartItemRepository::new(pool),
        }
    }
}
