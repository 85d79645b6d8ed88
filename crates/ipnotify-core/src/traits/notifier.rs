// # Notifier Trait
//
// Defines the interface for delivering a resolved address to a remote endpoint.
//
// ## Implementations
//
// - Discord webhook: `ipnotify-notifier-discord` crate
//
// ## Usage
//
// ```rust,ignore
// use ipnotify_core::{Notifier, NotificationOutcome};
//
// #[tokio::main]
// async fn main() {
//     let notifier = /* Notifier implementation */;
//
//     match notifier.notify("10.0.0.5".parse().unwrap()).await {
//         NotificationOutcome::Delivered => println!("sent"),
//         NotificationOutcome::DeliveryFailed { status_code, detail } => {
//             println!("failed: {:?} {}", status_code, detail)
//         }
//     }
// }
// ```

use async_trait::async_trait;
use std::net::Ipv4Addr;

/// Result of a single delivery attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationOutcome {
    /// Endpoint accepted the message
    Delivered,
    /// Endpoint rejected the message, or could not be reached
    DeliveryFailed {
        /// HTTP status, `None` when no response was received
        status_code: Option<u16>,
        /// Response body or transport error text
        detail: String,
    },
}

impl NotificationOutcome {
    /// Build a failure outcome
    pub fn failed(status_code: Option<u16>, detail: impl Into<String>) -> Self {
        Self::DeliveryFailed {
            status_code,
            detail: detail.into(),
        }
    }

    /// Whether the message was delivered
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered)
    }

    /// Convert a failure into the crate error type
    ///
    /// Returns `None` for `Delivered`.
    pub fn into_error(self) -> Option<crate::Error> {
        match self {
            Self::Delivered => None,
            Self::DeliveryFailed {
                status_code,
                detail,
            } => Some(crate::Error::delivery(status_code, detail)),
        }
    }
}

/// Trait for notifier implementations
///
/// # Contract
///
/// - **Single-shot**: exactly one delivery attempt per call
/// - **No retry, no backoff**: a failed attempt is reported, not repeated
/// - **Infallible signature**: transport errors are folded into
///   [`NotificationOutcome::DeliveryFailed`], never returned or panicked
/// - **Stateless**: no local state is mutated between calls
///
/// Implementations must never log the endpoint URL if it carries a secret.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver `address` to the remote endpoint
    async fn notify(&self, address: Ipv4Addr) -> NotificationOutcome;

    /// Get the notifier name (for logging/debugging)
    fn notifier_name(&self) -> &'static str;
}
