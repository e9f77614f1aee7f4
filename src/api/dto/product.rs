//! Product-related DTOs for API requests and responses.

use crate::api::dto::format_timestamp;
use crate::models::{Product, ProductType, User};
use crate::services::ProductInput;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating or updating a product.
///
/// Updates carry the full field set and overwrite the stored values;
/// omitting `image_url` clears it.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct ProductRequest {
    #[validate(length(min = 1, max = 255, message = "Product name cannot be empty"))]
    #[schema(min_length = 1, max_length = 255)]
    pub name: String,

    #[serde(default)]
    pub short_description: String,

    /// Price in major units, strictly positive
    #[schema(value_type = String, example = "999.99")]
    pub price: BigDecimal,

    #[serde(default)]
    pub image_url: Option<String>,

    pub product_type: ProductType,
}

impl ProductRequest {
    /// Converts the request DTO into the service-layer input.
    pub fn into_input(self) -> ProductInput {
        ProductInput {
            name: self.name,
            short_description: self.short_description,
            price: self.price,
            image_url: self.image_url,
            product_type: self.product_type,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Owner display fields embedded in product responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct OwnerResponse {
    pub id: i64,
    pub username: String,
}

impl From<User> for OwnerResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// Response body for product data, joined with owner display fields.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub short_description: String,
    #[schema(value_type = String, example = "999.99")]
    pub price: BigDecimal,
    pub image_url: Option<String>,
    pub product_type: ProductType,
    pub created_by: OwnerResponse,
    pub created_at: String,
    pub modified_at: Option<String>,
}

impl From<(Product, User)> for ProductResponse {
    fn from((product, owner): (Product, User)) -> Self {
        Self {
            id: product.id,
            name: product.name,
            short_description: product.short_description,
            price: product.price,
            image_url: product.image_url,
            product_type: product.product_type,
            created_by: OwnerResponse::from(owner),
            created_at: format_timestamp(product.created_at),
            modified_at: product.modified_at.map(format_timestamp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;
    use chrono::NaiveDate;

    fn sample_owner() -> User {
        User {
            id: 2,
            username: "john_doe".to_string(),
            email: "john.doe@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::Customer,
            created_at: NaiveDate::from_ymd_opt(2025, 9, 27)
                .unwrap()
                .and_hms_opt(16, 8, 4)
                .unwrap(),
            updated_at: NaiveDate::from_ymd_opt(2025, 9, 27)
                .unwrap()
                .and_hms_opt(16, 8, 4)
                .unwrap(),
        }
    }

    #[test]
    fn test_product_response_projects_owner_fields() {
        let product = Product {
            id: 1,
            name: "iPhone 15 Pro".to_string(),
            short_description: "Latest iPhone with Pro features.".to_string(),
            price: "999.99".parse().unwrap(),
            image_url: Some("https://example.com/iphone15pro.jpg".to_string()),
            product_type: ProductType::Electronics,
            created_by_user_id: 2,
            created_at: NaiveDate::from_ymd_opt(2025, 9, 28)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            modified_at: None,
        };

        let json = serde_json::to_value(ProductResponse::from((product, sample_owner()))).unwrap();
        assert_eq!(json["name"], "iPhone 15 Pro");
        assert_eq!(json["product_type"], "electronics");
        assert_eq!(json["created_by"]["username"], "john_doe");
        assert!(json["created_by"].get("email").is_none());
        assert_eq!(json["modified_at"], serde_json::Value::Null);
    }

    #[test]
    fn test_product_request_deserializes_without_optional_fields() {
        let request: ProductRequest = serde_json::from_str(
            r#"{"name": "Chair", "price": "49.99", "product_type": "home"}"#,
        )
        .unwrap();

        assert_eq!(request.short_description, "");
        assert!(request.image_url.is_none());
        assert_eq!(request.into_input().price, "49.99".parse::<BigDecimal>().unwrap());
    }
}
