//! Notification dispatch: provider abstraction and implementations.

mod log_provider;
mod notification_service;
mod provider;
mod webhook_provider;

pub use log_provider::LogProvider;
pub use notification_service::NotificationService;
pub use provider::{NotificationMessage, NotificationProvider, NotificationResult};
pub use webhook_provider::WebhookProvider;
