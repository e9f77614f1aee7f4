//! User-related DTOs for API responses.

use crate::api::dto::format_timestamp;
use crate::models::{User, UserRole};
use serde::Serialize;
use utoipa::ToSchema;

/// Response body for user data (excludes the credential hash).
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
            created_at: format_timestamp(user.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_user_response_excludes_credential() {
        let user = User {
            id: 1,
            username: "john_doe".to_string(),
            email: "john.doe@example.com".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$abc$def".to_string(),
            role: UserRole::Customer,
            created_at: NaiveDate::from_ymd_opt(2025, 9, 27)
                .unwrap()
                .and_hms_opt(16, 8, 4)
                .unwrap(),
            updated_at: NaiveDate::from_ymd_opt(2025, 9, 27)
                .unwrap()
                .and_hms_opt(16, 8, 4)
                .unwrap(),
        };

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(json["username"], "john_doe");
        assert_eq!(json["role"], "customer");
        assert!(json.get("password_hash").is_none());
        assert!(json.get("password").is_none());
    }
}
