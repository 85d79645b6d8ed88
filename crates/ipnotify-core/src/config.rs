//! Configuration types for ipnotify
//!
//! This module defines all configuration structures used throughout the crate.
//! A [`NotifyConfig`] is built once at startup and handed to the
//! [`Reporter`](crate::Reporter); nothing reads configuration from globals.

use crate::message::DEFAULT_HOST_LABEL;
use serde::{Deserialize, Serialize};

/// Default interface to report
pub const DEFAULT_INTERFACE: &str = "wlan0";

/// Maximum accepted startup delay (in seconds)
pub const MAX_STARTUP_DELAY_SECS: u64 = 3600;

/// Main ipnotify configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// Network interface whose address is reported (e.g., "wlan0", "eth0")
    #[serde(default = "default_interface")]
    pub interface: String,

    /// Notifier configuration
    pub notifier: NotifierConfig,

    /// Delay before resolving the address (in seconds)
    ///
    /// Useful when launched at boot, before the interface has an address.
    #[serde(default)]
    pub startup_delay_secs: u64,
}

impl NotifyConfig {
    /// Create a new configuration for `webhook_url` with defaults
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            interface: default_interface(),
            notifier: NotifierConfig::new(webhook_url),
            startup_delay_secs: 0,
        }
    }

    /// Set the interface to report
    pub fn with_interface(mut self, interface: impl Into<String>) -> Self {
        self.interface = interface.into();
        self
    }

    /// Set the startup delay
    pub fn with_startup_delay_secs(mut self, secs: u64) -> Self {
        self.startup_delay_secs = secs;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.interface.trim().is_empty() {
            return Err(crate::Error::config("Interface name cannot be empty"));
        }

        if self.startup_delay_secs > MAX_STARTUP_DELAY_SECS {
            return Err(crate::Error::config(format!(
                "Startup delay must be at most {} seconds, got {}",
                MAX_STARTUP_DELAY_SECS, self.startup_delay_secs
            )));
        }

        self.notifier.validate()?;

        Ok(())
    }
}

/// Webhook notifier configuration
///
/// The Debug implementation does NOT expose the webhook URL: the URL itself
/// is the credential.
#[derive(Clone, Serialize, Deserialize)]
pub struct NotifierConfig {
    /// Webhook endpoint URL (secret-bearing)
    pub webhook_url: String,

    /// Host label embedded in the message
    #[serde(default = "default_host_label")]
    pub host_label: String,

    /// Live or dry-run delivery
    #[serde(default)]
    pub mode: RunMode,
}

impl std::fmt::Debug for NotifierConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotifierConfig")
            .field("webhook_url", &"<REDACTED>")
            .field("host_label", &self.host_label)
            .field("mode", &self.mode)
            .finish()
    }
}

impl NotifierConfig {
    /// Create a live notifier configuration with the default host label
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            host_label: default_host_label(),
            mode: RunMode::Live,
        }
    }

    /// Set the host label
    pub fn with_host_label(mut self, host_label: impl Into<String>) -> Self {
        self.host_label = host_label.into();
        self
    }

    /// Set the run mode
    pub fn with_mode(mut self, mode: RunMode) -> Self {
        self.mode = mode;
        self
    }

    /// Validate the notifier configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        let url = self.webhook_url.trim();

        if url.is_empty() {
            return Err(crate::Error::config("Webhook URL cannot be empty"));
        }

        // Never echo the URL back: it is the secret
        if !url.starts_with("https://") && !url.starts_with("http://") {
            return Err(crate::Error::config(
                "Webhook URL must use HTTP or HTTPS scheme",
            ));
        }

        let lower = url.to_lowercase();
        if lower.contains("your_webhook")
            || lower.contains("replace_me")
            || lower.contains("<webhook")
        {
            return Err(crate::Error::config(
                "Webhook URL appears to be a placeholder. Use the URL copied from your channel settings.",
            ));
        }

        if self.host_label.trim().is_empty() {
            return Err(crate::Error::config("Host label cannot be empty"));
        }

        Ok(())
    }
}

/// Delivery mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunMode {
    /// Perform the POST
    #[default]
    Live,
    /// Log the intended payload, skip the POST
    DryRun,
}

impl std::str::FromStr for RunMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "live" => Ok(RunMode::Live),
            "dry-run" | "dry_run" | "dryrun" => Ok(RunMode::DryRun),
            other => Err(crate::Error::config(format!(
                "Unknown mode '{}'. Valid modes: live, dry-run",
                other
            ))),
        }
    }
}

fn default_interface() -> String {
    DEFAULT_INTERFACE.to_string()
}

fn default_host_label() -> String {
    DEFAULT_HOST_LABEL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://discord.com/api/webhooks/123/abcdef";

    #[test]
    fn test_defaults() {
        let config = NotifyConfig::new(URL);
        assert_eq!(config.interface, "wlan0");
        assert_eq!(config.notifier.host_label, "Raspberry Pi");
        assert_eq!(config.notifier.mode, RunMode::Live);
        assert_eq!(config.startup_delay_secs, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: NotifyConfig = serde_json::from_value(serde_json::json!({
            "notifier": { "webhook_url": URL, "mode": "dry-run" }
        }))
        .unwrap();

        assert_eq!(config.interface, "wlan0");
        assert_eq!(config.notifier.mode, RunMode::DryRun);
        assert_eq!(config.notifier.host_label, "Raspberry Pi");
    }

    #[test]
    fn test_rejects_empty_interface() {
        let config = NotifyConfig::new(URL).with_interface("  ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_urls() {
        assert!(NotifierConfig::new("").validate().is_err());
        assert!(NotifierConfig::new("ftp://example.com/hook").validate().is_err());
        assert!(NotifierConfig::new("https://discord.com/api/webhooks/YOUR_WEBHOOK")
            .validate()
            .is_err());
        assert!(NotifierConfig::new("http://localhost:8080/hook").validate().is_ok());
    }

    #[test]
    fn test_rejects_long_startup_delay() {
        let config = NotifyConfig::new(URL).with_startup_delay_secs(MAX_STARTUP_DELAY_SECS + 1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_webhook_url_not_exposed_in_debug() {
        let config = NotifyConfig::new("https://discord.com/api/webhooks/1/secret_token_12345");
        let debug_str = format!("{:?}", config);
        assert!(!debug_str.contains("secret_token_12345"));
        assert!(debug_str.contains("<REDACTED>"));
    }

    #[test]
    fn test_run_mode_parse() {
        assert_eq!("live".parse::<RunMode>().unwrap(), RunMode::Live);
        assert_eq!("DRY-RUN".parse::<RunMode>().unwrap(), RunMode::DryRun);
        assert!("loud".parse::<RunMode>().is_err());
    }
}
