//! Error types for ipnotify
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for ipnotify operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for ipnotify
///
/// `InterfaceNotFound` and `NoIpv4Bound` deliberately render the same text:
/// from the operator's point of view both mean "nothing to report".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Requested interface is absent from the OS-reported set
    #[error("no valid IP address found for interface: {interface}")]
    InterfaceNotFound {
        /// Interface name that was looked up
        interface: String,
    },

    /// Interface exists but has no IPv4 address bound
    #[error("no valid IP address found for interface: {interface}")]
    NoIpv4Bound {
        /// Interface name that was looked up
        interface: String,
    },

    /// OS or driver-level error during lookup
    #[error("error retrieving IP address for {interface}: {message}")]
    ResolutionFault {
        /// Interface name that was looked up
        interface: String,
        /// Underlying OS error text
        message: String,
    },

    /// Non-204 response or transport-level failure during notification
    #[error("failed to deliver notification ({}): {detail}", status_label(.status_code))]
    DeliveryFailure {
        /// HTTP status, if a response was received at all
        status_code: Option<u16>,
        /// Response body or transport error text
        detail: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

fn status_label(status_code: &Option<u16>) -> String {
    match status_code {
        Some(code) => format!("status {}", code),
        None => "no response".to_string(),
    }
}

impl Error {
    /// Create an interface-not-found error
    pub fn interface_not_found(interface: impl Into<String>) -> Self {
        Self::InterfaceNotFound {
            interface: interface.into(),
        }
    }

    /// Create a no-IPv4-bound error
    pub fn no_ipv4(interface: impl Into<String>) -> Self {
        Self::NoIpv4Bound {
            interface: interface.into(),
        }
    }

    /// Create a resolution fault from an underlying OS error
    pub fn resolution_fault(interface: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ResolutionFault {
            interface: interface.into(),
            message: message.into(),
        }
    }

    /// Create a delivery failure
    pub fn delivery(status_code: Option<u16>, detail: impl Into<String>) -> Self {
        Self::DeliveryFailure {
            status_code,
            detail: detail.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error happened while resolving the interface address
    ///
    /// Resolution errors suppress the notification attempt.
    pub fn is_resolution(&self) -> bool {
        matches!(
            self,
            Self::InterfaceNotFound { .. } | Self::NoIpv4Bound { .. } | Self::ResolutionFault { .. }
        )
    }
}

/// Helper for converting anyhow::Error to our Error type
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}
