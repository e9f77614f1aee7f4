//! Cart service for business logic operations.
//!
//! Holds the merge-on-duplicate add rule, the quantity bounds, and the
//! derived aggregates (total price, item count).

use bigdecimal::BigDecimal;

use crate::error::{AppError, AppResult};
use crate::models::{MAX_QUANTITY, MIN_QUANTITY, NewCartItem};
use crate::repositories::{CartItemRepository, CartRow, ProductRepository, UserRepository};

/// Validates the [1, 100] quantity bound shared by add and update.
fn validate_quantity(quantity: i32) -> AppResult<()> {
    if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&quantity) {
        return Err(AppError::Validation {
            field: "quantity".to_string(),
            reason: format!(
                "Quantity must be between {} and {}",
                MIN_QUANTITY, MAX_QUANTITY
            ),
        });
    }
    Ok(())
}

/// Sums price × quantity over joined cart rows.
fn sum_line_totals(rows: &[(BigDecimal, i32)]) -> BigDecimal {
    rows.iter().fold(BigDecimal::from(0), |acc, (price, qty)| {
        acc + price * BigDecimal::from(*qty)
    })
}

fn cart_item_not_found(id: i64) -> AppError {
    AppError::NotFound {
        entity: "cart_item".to_string(),
        field: "id".to_string(),
        value: id.to_string(),
    }
}

/// Cart service for handling per-user cart business logic.
#[derive(Clone)]
pub struct CartService {
    repo: CartItemRepository,
    products: ProductRepository,
    users: UserRepository,
}

impl CartService {
    /// Creates a new CartService with the repositories it coordinates.
    pub fn new(
        repo: CartItemRepository,
        products: ProductRepository,
        users: UserRepository,
    ) -> Self {
        Self {
            repo,
            products,
            users,
        }
    }

    /// Lists all cart rows for a user, joined with product and owner.
    pub async fn list_items(&self, user_id: i64) -> AppResult<Vec<CartRow>> {
        self.repo.list_for_user(user_id).await
    }

    /// Adds `quantity` of a product to the user's cart.
    ///
    /// If a row for (user, product) already exists its quantity is
    /// incremented by the requested amount; the insert-or-increment runs as
    /// one atomic upsert. The joined projection is re-read after the write.
    pub async fn add_item(
        &self,
        user_id: i64,
        product_id: i64,
        quantity: i32,
    ) -> AppResult<CartRow> {
        validate_quantity(quantity)?;

        if self.products.find_by_id(product_id).await?.is_none() {
            return Err(AppError::NotFound {
                entity: "product".to_string(),
                field: "id".to_string(),
                value: product_id.to_string(),
            });
        }

        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound {
                entity: "user".to_string(),
                field: "id".to_string(),
                value: user_id.to_string(),
            });
        }

        let item = self
            .repo
            .upsert_add(NewCartItem {
                user_id,
                product_id,
                quantity,
            })
            .await?;

        self.repo
            .find_for_user(item.id, user_id)
            .await?
            .ok_or_else(|| cart_item_not_found(item.id))
    }

    /// Overwrites the quantity of one of the user's cart rows.
    ///
    /// The new quantity replaces the stored value (absolute set, not
    /// increment). A row holding the caller's own product is rejected.
    pub async fn update_quantity(
        &self,
        user_id: i64,
        cart_item_id: i64,
        quantity: i32,
    ) -> AppResult<CartRow> {
        validate_quantity(quantity)?;

        let (_, (product, _)) = self
            .repo
            .find_for_user(cart_item_id, user_id)
            .await?
            .ok_or_else(|| cart_item_not_found(cart_item_id))?;

        if product.created_by_user_id == user_id {
            return Err(AppError::Forbidden {
                message: "You cannot modify cart items containing your own products".to_string(),
            });
        }

        self.repo.update_quantity(cart_item_id, quantity).await?;

        self.repo
            .find_for_user(cart_item_id, user_id)
            .await?
            .ok_or_else(|| cart_item_not_found(cart_item_id))
    }

    /// Removes one of the user's cart rows.
    ///
    /// A row that does not exist or belongs to another user is `NotFound`.
    pub async fn remove_item(&self, user_id: i64, cart_item_id: i64) -> AppResult<()> {
        let affected = self.repo.delete_for_user(cart_item_id, user_id).await?;
        if affected == 0 {
            return Err(cart_item_not_found(cart_item_id));
        }
        Ok(())
    }

    /// Empties the user's cart.
    ///
    /// Idempotent: clearing an already-empty cart succeeds with zero rows
    /// affected.
    pub async fn clear(&self, user_id: i64) -> AppResult<usize> {
        self.repo.clear_for_user(user_id).await
    }

    /// Sums price × quantity across the user's cart; 0 for an empty cart.
    pub async fn total(&self, user_id: i64) -> AppResult<BigDecimal> {
        let rows = self.repo.load_price_quantity(user_id).await?;
        Ok(sum_line_totals(&rows))
    }

    /// Sums the quantities across the user's cart; 0 for an empty cart.
    pub async fn count(&self, user_id: i64) -> AppResult<i64> {
        self.repo.sum_quantities(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_validate_quantity_bounds() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(50).is_ok());
        assert!(validate_quantity(100).is_ok());

        for out_of_range in [0, -3, 101, 1000] {
            match validate_quantity(out_of_range) {
                Err(AppError::Validation { field, .. }) => assert_eq!(field, "quantity"),
                other => panic!("Expected Validation error for {out_of_range}, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_sum_line_totals() {
        let rows = vec![(dec("10.00"), 2), (dec("5.00"), 3)];
        assert_eq!(sum_line_totals(&rows), dec("35.00"));
    }

    #[test]
    fn test_sum_line_totals_empty_cart_is_zero() {
        assert_eq!(sum_line_totals(&[]), BigDecimal::from(0));
    }

    #[test]
    fn test_sum_line_totals_keeps_decimal_precision() {
        let rows = vec![(dec("0.10"), 3), (dec("19.99"), 1)];
        assert_eq!(sum_line_totals(&rows), dec("20.29"));
    }
}
