//! Product repository for async database operations.
//!
//! Provides CRUD operations for the products table using diesel_async.
//! Read paths join the owning user so handlers can project owner display
//! fields without a second round trip.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewProduct, Product, UpdateProduct, User};

/// A product row joined with its owning user.
pub type ProductWithOwner = (Product, User);

/// Product repository holding an async connection pool.
#[derive(Clone)]
pub struct ProductRepository {
    pool: AsyncDbPool,
}

impl ProductRepository {
    /// Creates a new ProductRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Lists a page of products joined with their owners, in insertion order.
    ///
    /// # Returns
    /// A tuple of (rows, total_count)
    pub async fn list_paginated(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<ProductWithOwner>, i64), AppError> {
        use crate::schema::{products, users};
        let mut conn = self.pool.get().await?;

        let total = products::table
            .count()
            .get_result::<i64>(&mut conn)
            .await
            .map_err(AppError::from)?;

        let rows = products::table
            .inner_join(users::table)
            .select((Product::as_select(), User::as_select()))
            .order(products::id.asc())
            .offset(offset)
            .limit(limit)
            .load::<ProductWithOwner>(&mut conn)
            .await
            .map_err(AppError::from)?;

        Ok((rows, total))
    }

    /// Lists a page of one owner's products, newest first.
    ///
    /// # Returns
    /// A tuple of (rows, total_count)
    pub async fn list_by_owner_paginated(
        &self,
        owner_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<ProductWithOwner>, i64), AppError> {
        use crate::schema::{products, users};
        let mut conn = self.pool.get().await?;

        let total = products::table
            .filter(products::created_by_user_id.eq(owner_id))
            .count()
            .get_result::<i64>(&mut conn)
            .await
            .map_err(AppError::from)?;

        let rows = products::table
            .inner_join(users::table)
            .filter(products::created_by_user_id.eq(owner_id))
            .select((Product::as_select(), User::as_select()))
            .order(products::created_at.desc())
            .offset(offset)
            .limit(limit)
            .load::<ProductWithOwner>(&mut conn)
            .await
            .map_err(AppError::from)?;

        Ok((rows, total))
    }

    /// Finds a product by its ID.
    pub async fn find_by_id(&self, product_id: i64) -> Result<Option<Product>, AppError> {
        use crate::schema::products::dsl::*;
        let mut conn = self.pool.get().await?;

        products
            .filter(id.eq(product_id))
            .select(Product::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Finds a product joined with its owner.
    pub async fn find_with_owner(
        &self,
        product_id: i64,
    ) -> Result<Option<ProductWithOwner>, AppError> {
        use crate::schema::{products, users};
        let mut conn = self.pool.get().await?;

        products::table
            .inner_join(users::table)
            .filter(products::id.eq(product_id))
            .select((Product::as_select(), User::as_select()))
            .first::<ProductWithOwner>(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Creates a new product in the database.
    pub async fn create(&self, new_product: NewProduct) -> Result<Product, AppError> {
        use crate::schema::products::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(products)
            .values(&new_product)
            .returning(Product::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Overwrites a product's mutable attributes.
    pub async fn update(
        &self,
        product_id: i64,
        changes: UpdateProduct,
    ) -> Result<Product, AppError> {
        use crate::schema::products::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(products.filter(id.eq(product_id)))
            .set(&changes)
            .returning(Product::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes a product from the database.
    ///
    /// Fails with a `Validation` error (via the FK converter) while cart
    /// rows still reference the product.
    ///
    /// # Returns
    /// The number of affected rows (0 or 1)
    pub async fn delete(&self, product_id: i64) -> Result<usize, AppError> {
        use crate::schema::products::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(products.filter(id.eq(product_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
