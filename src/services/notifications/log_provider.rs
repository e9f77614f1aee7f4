//! Log-backed notification provider.
//!
//! The default provider when no webhook is configured; emits the message as
//! a structured log line.

use super::provider::{NotificationMessage, NotificationProvider, NotificationResult};
use crate::error::AppResult;
use async_trait::async_trait;
use std::time::Instant;

/// Notification provider that writes messages to the application log.
#[derive(Debug, Default)]
pub struct LogProvider;

#[async_trait]
impl NotificationProvider for LogProvider {
    async fn send(&self, message: &NotificationMessage) -> AppResult<NotificationResult> {
        let start = Instant::now();

        tracing::info!(
            title = message.title.as_deref().unwrap_or(""),
            body = %message.body,
            "Notification dispatched"
        );

        Ok(NotificationResult {
            success: true,
            status_code: None,
            response: None,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    fn name(&self) -> &'static str {
        "log"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_provider_always_succeeds() {
        let provider = LogProvider;
        let result = provider
            .send(&NotificationMessage::text("user logged in"))
            .await
            .unwrap();

        assert!(result.success);
        assert_eq!(provider.name(), "log");
    }
}
