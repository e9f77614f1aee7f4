//! Cart-related DTOs for API requests and responses.

use crate::api::dto::ProductResponse;
use crate::repositories::CartRow;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for adding a product to the cart.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct AddToCartRequest {
    pub product_id: i64,

    #[validate(range(min = 1, max = 100, message = "Quantity must be between 1 and 100"))]
    #[schema(minimum = 1, maximum = 100, example = 1)]
    pub quantity: i32,
}

/// Request body for overwriting a cart item's quantity.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateQuantityRequest {
    #[validate(range(min = 1, max = 100, message = "Quantity must be between 1 and 100"))]
    #[schema(minimum = 1, maximum = 100, example = 2)]
    pub quantity: i32,
}

/// Response body for one cart row, joined with its product.
#[derive(Debug, Serialize, ToSchema)]
pub struct CartItemResponse {
    pub id: i64,
    pub product: ProductResponse,
    pub quantity: i32,
    /// price × quantity for this row
    #[schema(value_type = String, example = "1999.98")]
    pub line_total: BigDecimal,
}

impl From<CartRow> for CartItemResponse {
    fn from((item, (product, owner)): CartRow) -> Self {
        let line_total = &product.price * BigDecimal::from(item.quantity);
        Self {
            id: item.id,
            product: ProductResponse::from((product, owner)),
            quantity: item.quantity,
            line_total,
        }
    }
}

/// Response body for the cart total aggregate.
#[derive(Debug, Serialize, ToSchema)]
pub struct CartTotalResponse {
    #[schema(value_type = String, example = "35.00")]
    pub total: BigDecimal,
}

/// Response body for the cart count aggregate.
#[derive(Debug, Serialize, ToSchema)]
pub struct CartCountResponse {
    #[schema(example = 5)]
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CartItem, Product, ProductType, User, UserRole};
    use chrono::NaiveDate;

    fn ts() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 9, 27)
            .unwrap()
            .and_hms_opt(16, 8, 4)
            .unwrap()
    }

    fn sample_row(price: &str, quantity: i32) -> CartRow {
        let owner = User {
            id: 3,
            username: "jane_smith".to_string(),
            email: "jane.smith@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::Customer,
            created_at: ts(),
            updated_at: ts(),
        };
        let product = Product {
            id: 5,
            name: "Samsung 4K TV".to_string(),
            short_description: "55-inch 4K Smart TV.".to_string(),
            price: price.parse().unwrap(),
            image_url: None,
            product_type: ProductType::Electronics,
            created_by_user_id: 3,
            created_at: ts(),
            modified_at: None,
        };
        let item = CartItem {
            id: 9,
            user_id: 2,
            product_id: 5,
            quantity,
            created_at: ts(),
        };
        (item, (product, owner))
    }

    #[test]
    fn test_cart_item_response_computes_line_total() {
        let response = CartItemResponse::from(sample_row("599.99", 2));
        assert_eq!(response.line_total, "1199.98".parse::<BigDecimal>().unwrap());
        assert_eq!(response.quantity, 2);
        assert_eq!(response.product.id, 5);
    }

    #[test]
    fn test_add_to_cart_request_validation() {
        use validator::Validate;

        let ok = AddToCartRequest {
            product_id: 1,
            quantity: 1,
        };
        assert!(ok.validate().is_ok());

        let too_many = AddToCartRequest {
            product_id: 1,
            quantity: 101,
        };
        assert!(too_many.validate().is_err());
    }
}
