//! Cart item repository for async database operations.
//!
//! Provides the cart's read and mutation paths using diesel_async. The add
//! path is a single atomic upsert against the unique (user_id, product_id)
//! index, so concurrent adds for the same product converge on one row.

use bigdecimal::BigDecimal;
use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{CartItem, NewCartItem, Product, User};

/// A cart row joined with its product and the product's owner.
pub type CartRow = (CartItem, (Product, User));

/// Cart item repository holding an async connection pool.
#[derive(Clone)]
pub struct CartItemRepository {
    pool: AsyncDbPool,
}

impl CartItemRepository {
    /// Creates a new CartItemRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Lists all cart rows for a user, each joined with product and owner.
    pub async fn list_for_user(&self, uid: i64) -> Result<Vec<CartRow>, AppError> {
        use crate::schema::{cart_items, products, users};
        let mut conn = self.pool.get().await?;

        cart_items::table
            .inner_join(products::table.inner_join(users::table))
            .filter(cart_items::user_id.eq(uid))
            .select((
                CartItem::as_select(),
                (Product::as_select(), User::as_select()),
            ))
            .order(cart_items::id.asc())
            .load::<CartRow>(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds one cart row owned by `uid`, joined with product and owner.
    ///
    /// Rows belonging to other users are not visible through this method,
    /// so a foreign id behaves exactly like a missing one.
    pub async fn find_for_user(
        &self,
        cart_item_id: i64,
        uid: i64,
    ) -> Result<Option<CartRow>, AppError> {
        use crate::schema::{cart_items, products, users};
        let mut conn = self.pool.get().await?;

        cart_items::table
            .inner_join(products::table.inner_join(users::table))
            .filter(cart_items::id.eq(cart_item_id))
            .filter(cart_items::user_id.eq(uid))
            .select((
                CartItem::as_select(),
                (Product::as_select(), User::as_select()),
            ))
            .first::<CartRow>(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Inserts a cart row, or increments the quantity of the existing row
    /// for the same (user, product) pair.
    ///
    /// Runs as one INSERT .. ON CONFLICT .. DO UPDATE statement; there is
    /// no separate existence check to race against.
    pub async fn upsert_add(&self, item: NewCartItem) -> Result<CartItem, AppError> {
        use crate::schema::cart_items::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(cart_items)
            .values(&item)
            .on_conflict((user_id, product_id))
            .do_update()
            .set(quantity.eq(quantity + excluded(quantity)))
            .returning(CartItem::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Overwrites the quantity of a cart row.
    pub async fn update_quantity(
        &self,
        cart_item_id: i64,
        new_quantity: i32,
    ) -> Result<CartItem, AppError> {
        use crate::schema::cart_items::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(cart_items.filter(id.eq(cart_item_id)))
            .set(quantity.eq(new_quantity))
            .returning(CartItem::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes a cart row owned by `uid`.
    ///
    /// # Returns
    /// The number of affected rows (0 or 1)
    pub async fn delete_for_user(&self, cart_item_id: i64, uid: i64) -> Result<usize, AppError> {
        use crate::schema::cart_items::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(
            cart_items
                .filter(id.eq(cart_item_id))
                .filter(user_id.eq(uid)),
        )
        .execute(&mut conn)
        .await
        .map_err(AppError::from)
    }

    /// Deletes all cart rows for a user.
    ///
    /// # Returns
    /// The number of affected rows (0 when the cart was already empty)
    pub async fn clear_for_user(&self, uid: i64) -> Result<usize, AppError> {
        use crate::schema::cart_items::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(cart_items.filter(user_id.eq(uid)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Sums the quantities of all cart rows for a user.
    pub async fn sum_quantities(&self, uid: i64) -> Result<i64, AppError> {
        use crate::schema::cart_items::dsl::*;
        let mut conn = self.pool.get().await?;

        let total: Option<i64> = cart_items
            .filter(user_id.eq(uid))
            .select(diesel::dsl::sum(quantity))
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)?;

        Ok(total.unwrap_or(0))
    }

    /// Loads (price, quantity) pairs for a user's cart rows.
    ///
    /// The money arithmetic happens in the service layer on BigDecimal.
    pub async fn load_price_quantity(
        &self,
        uid: i64,
    ) -> Result<Vec<(BigDecimal, i32)>, AppError> {
        use crate::schema::{cart_items, products};
        let mut conn = self.pool.get().await?;

        cart_items::table
            .inner_join(products::table)
            .filter(cart_items::user_id.eq(uid))
            .select((products::price, cart_items::quantity))
            .load::<(BigDecimal, i32)>(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
