//! Webhook notification provider implementation.
//!
//! POSTs notification messages as JSON to a configured webhook URL.

use super::provider::{NotificationMessage, NotificationProvider, NotificationResult};
use crate::error::AppResult;
use async_trait::async_trait;
use serde_json::json;
use std::time::{Duration, Instant};

const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);

/// Webhook notification provider
///
/// Holds one reqwest client for connection reuse across sends.
pub struct WebhookProvider {
    url: String,
    client: reqwest::Client,
}

impl WebhookProvider {
    /// Creates a new webhook provider for the given URL
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl NotificationProvider for WebhookProvider {
    /// Sends a notification via webhook
    ///
    /// Transport failures are reported through `NotificationResult` rather
    /// than an error so the caller's operation is never failed by a dead
    /// webhook endpoint.
    async fn send(&self, message: &NotificationMessage) -> AppResult<NotificationResult> {
        let start = Instant::now();

        let response = self
            .client
            .post(&self.url)
            .timeout(WEBHOOK_TIMEOUT)
            .json(&json!({
                "title": message.title,
                "body": message.body,
                "metadata": message.metadata,
            }))
            .send()
            .await;
        let duration_ms = start.elapsed().as_millis() as u64;

        match response {
            Ok(resp) => {
                let status_code = resp.status().as_u16();
                let success = resp.status().is_success();
                let response_text = resp.text().await.ok();

                Ok(NotificationResult {
                    success,
                    status_code: Some(status_code),
                    response: response_text,
                    duration_ms,
                })
            }
            Err(e) => Ok(NotificationResult {
                success: false,
                status_code: None,
                response: Some(e.to_string()),
                duration_ms,
            }),
        }
    }

    fn name(&self) -> &'static str {
        "webhook"
    }
}
