//! Cart item models for database operations.

use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Smallest quantity a cart row may hold.
pub const MIN_QUANTITY: i32 = 1;

/// Largest quantity a cart row may hold.
pub const MAX_QUANTITY: i32 = 100;

/// CartItem model for reading from database
///
/// At most one row exists per (user_id, product_id); the unique constraint
/// backs the upsert in the repository layer.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::cart_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CartItem {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub created_at: NaiveDateTime,
}

/// NewCartItem model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::cart_items)]
pub struct NewCartItem {
    pub user_id: i64,
    pub product_id: i64,
    pub quantity: i32,
}
