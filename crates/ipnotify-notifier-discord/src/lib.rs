// # Discord Webhook Notifier
//
// This crate provides a Discord webhook `Notifier` for ipnotify.
//
// ## Behavior
//
// - ✅ One HTTP POST per `notify()` call
// - ✅ JSON body `{"content": "<message>"}`
// - ✅ HTTP 204 is success; every other status is a failure carrying the body
// - ✅ Transport errors become `DeliveryFailed` with no status code
// - ✅ Dry-run mode for safe testing
// - ❌ NO retry or backoff (a failed attempt is reported, not repeated)
// - ❌ NO request timeout beyond the reqwest client default
//
// ## Security Requirements
//
// - The webhook URL is the credential; it NEVER appears in logs or errors
//
// ## API Reference
//
// - Execute Webhook: POST `/api/webhooks/:id/:token`
//   https://discord.com/developers/docs/resources/webhook#execute-webhook

use async_trait::async_trait;
use ipnotify_core::config::{NotifierConfig, RunMode};
use ipnotify_core::{render_message, NotificationOutcome, Notifier};
use reqwest::StatusCode;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Webhook request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookPayload {
    /// Message text shown in the channel
    pub content: String,
}

/// Discord webhook notifier
///
/// # Dry-Run Mode
///
/// When `dry_run` is true, the notifier logs the payload it would POST and
/// reports `Delivered` without touching the network.
pub struct DiscordNotifier {
    /// Webhook URL
    /// ⚠️ NEVER log this value
    webhook_url: String,

    /// Host label embedded in the message
    host_label: String,

    /// HTTP client for the webhook POST
    client: reqwest::Client,

    /// Dry-run mode: if true, skip the POST
    dry_run: bool,
}

// Custom Debug implementation that hides the webhook URL
impl std::fmt::Debug for DiscordNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordNotifier")
            .field("webhook_url", &"<REDACTED>")
            .field("host_label", &self.host_label)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

impl DiscordNotifier {
    /// Create a notifier from configuration
    pub fn new(config: &NotifierConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Create a notifier with a caller-supplied HTTP client
    pub fn with_client(config: &NotifierConfig, client: reqwest::Client) -> Self {
        Self {
            webhook_url: config.webhook_url.clone(),
            host_label: config.host_label.clone(),
            client,
            dry_run: config.mode == RunMode::DryRun,
        }
    }

    /// Build the request body for `address`
    pub fn payload(&self, address: Ipv4Addr) -> WebhookPayload {
        WebhookPayload {
            content: render_message(&self.host_label, address),
        }
    }
}

#[async_trait]
impl Notifier for DiscordNotifier {
    async fn notify(&self, address: Ipv4Addr) -> NotificationOutcome {
        let payload = self.payload(address);

        if self.dry_run {
            tracing::info!(
                "[DRY-RUN] Would POST webhook payload: {}",
                serde_json::to_string(&payload).unwrap_or_else(|_| payload.content.clone())
            );
            return NotificationOutcome::Delivered;
        }

        tracing::debug!("Posting address {} to Discord webhook", address);

        let response = match self.client.post(&self.webhook_url).json(&payload).send().await {
            Ok(response) => response,
            Err(e) => {
                // Strip the URL: it carries the webhook token
                let detail = e.without_url().to_string();
                tracing::error!("Error sending message to Discord: {}", detail);
                return NotificationOutcome::failed(None, detail);
            }
        };

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            tracing::info!("IP address sent to Discord successfully.");
            return NotificationOutcome::Delivered;
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error response".to_string());

        tracing::error!("Failed to send IP address: {}, {}", status.as_u16(), body);
        NotificationOutcome::failed(Some(status.as_u16()), body)
    }

    fn notifier_name(&self) -> &'static str {
        "discord"
    }
}
