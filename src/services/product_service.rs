//! Product service for business logic operations.
//!
//! Encapsulates catalog business rules (field validation, owner-only
//! mutation) and coordinates with the repository layer.

use bigdecimal::BigDecimal;
use chrono::Utc;

use crate::error::{AppError, AppResult};
use crate::models::{NewProduct, Product, ProductType, UpdateProduct};
use crate::repositories::{ProductRepository, ProductWithOwner};

/// Mutable product fields accepted by create and update.
#[derive(Debug, Clone)]
pub struct ProductInput {
    pub name: String,
    pub short_description: String,
    pub price: BigDecimal,
    pub image_url: Option<String>,
    pub product_type: ProductType,
}

/// Validates the business rules on product fields.
///
/// Name must be non-empty after trimming; price is strictly positive.
fn validate_input(input: &ProductInput) -> AppResult<()> {
    if input.name.trim().is_empty() {
        return Err(AppError::Validation {
            field: "name".to_string(),
            reason: "Product name cannot be empty".to_string(),
        });
    }

    if input.price <= BigDecimal::from(0) {
        return Err(AppError::Validation {
            field: "price".to_string(),
            reason: "Product price must be greater than zero".to_string(),
        });
    }

    Ok(())
}

fn product_not_found(id: i64) -> AppError {
    AppError::NotFound {
        entity: "product".to_string(),
        field: "id".to_string(),
        value: id.to_string(),
    }
}

/// Product service for handling catalog business logic.
///
/// Since `ProductRepository` uses `Arc` internally via the connection pool,
/// cloning is cheap.
#[derive(Clone)]
pub struct ProductService {
    repo: ProductRepository,
}

impl ProductService {
    /// Creates a new ProductService with the given repository.
    pub fn new(repo: ProductRepository) -> Self {
        Self { repo }
    }

    /// Lists a page of products joined with owner display fields.
    ///
    /// # Returns
    /// A tuple of (rows, total_count)
    pub async fn list_products(
        &self,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<ProductWithOwner>, i64)> {
        self.repo.list_paginated(offset, limit).await
    }

    /// Lists a page of one user's products, newest first.
    pub async fn list_products_by_owner(
        &self,
        owner_id: i64,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<ProductWithOwner>, i64)> {
        self.repo
            .list_by_owner_paginated(owner_id, offset, limit)
            .await
    }

    /// Gets a product joined with its owner, or `NotFound`.
    pub async fn get_product(&self, id: i64) -> AppResult<ProductWithOwner> {
        self.repo
            .find_with_owner(id)
            .await?
            .ok_or_else(|| product_not_found(id))
    }

    /// Creates a product owned by `creator_id`.
    ///
    /// Re-reads the joined projection after insert so the response carries
    /// the owner display fields.
    pub async fn create_product(
        &self,
        input: ProductInput,
        creator_id: i64,
    ) -> AppResult<ProductWithOwner> {
        validate_input(&input)?;

        let created: Product = self
            .repo
            .create(NewProduct {
                name: input.name,
                short_description: input.short_description,
                price: input.price,
                image_url: input.image_url,
                product_type: input.product_type,
                created_by_user_id: creator_id,
            })
            .await?;

        self.get_product(created.id).await
    }

    /// Updates a product's mutable fields, stamping `modified_at`.
    ///
    /// Fails `NotFound` for a missing id and `Forbidden` when the caller is
    /// not the recorded creator.
    pub async fn update_product(
        &self,
        id: i64,
        input: ProductInput,
        user_id: i64,
    ) -> AppResult<ProductWithOwner> {
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| product_not_found(id))?;

        if existing.created_by_user_id != user_id {
            return Err(AppError::Forbidden {
                message: "You can only modify your own products".to_string(),
            });
        }

        validate_input(&input)?;

        self.repo
            .update(
                id,
                UpdateProduct {
                    name: input.name,
                    short_description: input.short_description,
                    price: input.price,
                    image_url: input.image_url,
                    product_type: input.product_type,
                    modified_at: Some(Utc::now().naive_utc()),
                },
            )
            .await?;

        self.get_product(id).await
    }

    /// Deletes a product after the same NotFound/Forbidden checks as update.
    pub async fn delete_product(&self, id: i64, user_id: i64) -> AppResult<()> {
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| product_not_found(id))?;

        if existing.created_by_user_id != user_id {
            return Err(AppError::Forbidden {
                message: "You can only delete your own products".to_string(),
            });
        }

        self.repo.delete(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, price: &str) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            short_description: "A product".to_string(),
            price: price.parse().unwrap(),
            image_url: None,
            product_type: ProductType::Electronics,
        }
    }

    #[test]
    fn test_validate_accepts_positive_price_and_name() {
        assert!(validate_input(&input("Chair", "49.99")).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let result = validate_input(&input("   ", "49.99"));
        match result {
            Err(AppError::Validation { field, .. }) => assert_eq!(field, "name"),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_zero_price() {
        let result = validate_input(&input("Chair", "0"));
        match result {
            Err(AppError::Validation { field, .. }) => assert_eq!(field, "price"),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let result = validate_input(&input("Chair", "-5.00"));
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }
}
