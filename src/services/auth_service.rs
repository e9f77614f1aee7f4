//! Authentication service for login and registration.

use crate::error::{AppError, AppResult};
use crate::models::{NewUser, User, UserRole};
use crate::repositories::UserRepository;
use crate::services::notifications::NotificationService;
use crate::utils::password::{hash_password, verify_password};

/// The one message returned for both unknown-email and wrong-password
/// logins, so responses never reveal which field was wrong.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Rejects empty (or whitespace-only) credential fields.
fn validate_non_empty(value: &str, field: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation {
            field: field.to_string(),
            reason: format!("{} cannot be empty", field),
        });
    }
    Ok(())
}

/// Authentication service handling credential checks and registration.
#[derive(Clone)]
pub struct AuthService {
    users: UserRepository,
    notifier: NotificationService,
}

impl AuthService {
    /// Creates a new AuthService.
    pub fn new(users: UserRepository, notifier: NotificationService) -> Self {
        Self { users, notifier }
    }

    /// Authenticates a user by email and password.
    ///
    /// Unknown email and wrong password both produce the same generic
    /// `Unauthorized` message. On success a login notification is
    /// dispatched fire-and-forget; the notifier can never fail the login.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<User> {
        validate_non_empty(email, "email")?;
        validate_non_empty(password, "password")?;

        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::Unauthorized {
                message: INVALID_CREDENTIALS.to_string(),
            })?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AppError::Unauthorized {
                message: INVALID_CREDENTIALS.to_string(),
            });
        }

        self.notifier.notify_login(&user.username);

        Ok(user)
    }

    /// Loads a user row by id, rejecting tokens whose subject no longer
    /// exists. Used by the token refresh path.
    pub async fn require_user(&self, user_id: i64) -> AppResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized {
                message: "User no longer exists".to_string(),
            })
    }

    /// Registers a new customer account.
    ///
    /// Fails with `Duplicate` when the email is already registered or the
    /// username is taken. The password is hashed before it reaches the
    /// repository.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> AppResult<User> {
        validate_non_empty(username, "username")?;
        validate_non_empty(email, "email")?;
        validate_non_empty(password, "password")?;

        if self.users.find_by_email(email).await?.is_some() {
            return Err(AppError::Duplicate {
                entity: "user".to_string(),
                field: "email".to_string(),
                value: email.to_string(),
            });
        }

        if self.users.find_by_username(username).await?.is_some() {
            return Err(AppError::Duplicate {
                entity: "user".to_string(),
                field: "username".to_string(),
                value: username.to_string(),
            });
        }

        let password_hash = hash_password(password)?;

        self.users
            .create(NewUser {
                username: username.to_string(),
                email: email.to_string(),
                password_hash,
                role: UserRole::Customer,
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_rejects_blank_fields() {
        for blank in ["", "   ", "\t"] {
            match validate_non_empty(blank, "email") {
                Err(AppError::Validation { field, reason }) => {
                    assert_eq!(field, "email");
                    assert!(reason.contains("cannot be empty"));
                }
                other => panic!("Expected Validation error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_validate_non_empty_accepts_values() {
        assert!(validate_non_empty("john@example.com", "email").is_ok());
    }

    #[test]
    fn test_invalid_credentials_message_is_single_constant() {
        // Both failure paths in login reference this constant, so the
        // unknown-email and wrong-password messages cannot drift apart.
        assert_eq!(INVALID_CREDENTIALS, "Invalid email or password");
    }
}
