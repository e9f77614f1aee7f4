//! Notification service for fire-and-forget dispatch.

use super::log_provider::LogProvider;
use super::provider::{NotificationMessage, NotificationProvider};
use super::webhook_provider::WebhookProvider;
use crate::config::NotificationsConfig;
use std::sync::Arc;

/// Dispatches notifications through the configured provider.
///
/// All dispatch is fire-and-forget: `notify` spawns a task and returns
/// immediately, and a failing provider only produces a log line. Callers
/// (the login path) can never be failed by the notifier.
#[derive(Clone)]
pub struct NotificationService {
    provider: Arc<dyn NotificationProvider>,
}

impl NotificationService {
    /// Creates a NotificationService from the notifications settings.
    ///
    /// A configured webhook URL selects the webhook provider; otherwise
    /// messages go to the log.
    pub fn from_config(config: &NotificationsConfig) -> Self {
        let provider: Arc<dyn NotificationProvider> = match &config.webhook_url {
            Some(url) => Arc::new(WebhookProvider::new(url.clone())),
            None => Arc::new(LogProvider),
        };
        Self { provider }
    }

    /// Creates a NotificationService with an explicit provider.
    pub fn new(provider: Arc<dyn NotificationProvider>) -> Self {
        Self { provider }
    }

    /// Dispatches a message without waiting for the outcome.
    pub fn notify(&self, message: NotificationMessage) {
        let provider = Arc::clone(&self.provider);
        tokio::spawn(async move {
            match provider.send(&message).await {
                Ok(result) if !result.success => {
                    tracing::warn!(
                        provider = provider.name(),
                        status = ?result.status_code,
                        "Notification delivery failed"
                    );
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(
                        provider = provider.name(),
                        error = %e,
                        "Notification delivery errored"
                    );
                }
            }
        });
    }

    /// Dispatches the login notification for a user.
    pub fn notify_login(&self, username: &str) {
        self.notify(NotificationMessage::text(format!(
            "User {} logged in successfully",
            username
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppResult;
    use crate::services::notifications::NotificationResult;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingProvider {
        sent: Arc<AtomicUsize>,
        fail: bool,
    }

    #[async_trait]
    impl NotificationProvider for CountingProvider {
        async fn send(
            &self,
            _message: &NotificationMessage,
        ) -> AppResult<NotificationResult> {
            self.sent.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(crate::error::AppError::BadRequest {
                    message: "provider down".to_string(),
                })
            } else {
                Ok(NotificationResult {
                    success: true,
                    status_code: None,
                    response: None,
                    duration_ms: 0,
                })
            }
        }

        fn name(&self) -> &'static str {
            "counting"
        }
    }

    #[tokio::test]
    async fn test_notify_login_dispatches_to_provider() {
        let sent = Arc::new(AtomicUsize::new(0));
        let service = NotificationService::new(Arc::new(CountingProvider {
            sent: Arc::clone(&sent),
            fail: false,
        }));

        service.notify_login("john_doe");
        tokio::task::yield_now().await;
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;

        assert_eq!(sent.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_notify_survives_provider_failure() {
        let sent = Arc::new(AtomicUsize::new(0));
        let service = NotificationService::new(Arc::new(CountingProvider {
            sent: Arc::clone(&sent),
            fail: true,
        }));

        // Must not panic or propagate the provider error
        service.notify(NotificationMessage::text("hello"));
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;

        assert_eq!(sent.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_from_config_selects_webhook_when_url_present() {
        let config = NotificationsConfig {
            webhook_url: Some("https://example.com/hook".to_string()),
        };
        let service = NotificationService::from_config(&config);
        assert_eq!(service.provider.name(), "webhook");

        let service = NotificationService::from_config(&NotificationsConfig::default());
        assert_eq!(service.provider.name(), "log");
    }
}
