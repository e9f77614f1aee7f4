//! Application state for Axum web framework.
//!
//! Contains shared services and resources that are accessible
//! across all request handlers.

use crate::config::{JwtConfig, NotificationsConfig};
use crate::db::AsyncDbPool;
use crate::repositories::Repositories;
use crate::services::Services;

/// Application state containing all shared services and resources.
///
/// This struct is designed to be used with Axum's State extractor.
/// Cloning is cheap since both Services and AsyncDbPool use Arc internally.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Direct access to the database connection pool
    pub db_pool: AsyncDbPool,
    /// JWT configuration for token generation and validation
    pub jwt_config: JwtConfig,
}

impl AppState {
    /// Creates a new AppState from a database connection pool and config.
    ///
    /// Initializes all repositories and services from the provided pool.
    pub fn new(
        pool: AsyncDbPool,
        jwt_config: JwtConfig,
        notifications_config: &NotificationsConfig,
    ) -> Self {
        let repos = Repositories::new(pool.clone());
        let services = Services::new(repos, notifications_config);
        Self {
            services,
            db_pool: pool,
            jwt_config,
        }
    }
}
