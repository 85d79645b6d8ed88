// # ipnotifyd - interface address reporter
//
// CRITICAL RULES:
// - This is a THIN integration layer ONLY
// - DO NOT add resolution or delivery logic here; it lives in ipnotify-core
//   and the notifier crates
// - Configuration is via environment variables ONLY
// - One pass per process: no loop, no retry. Schedule it externally.
//
// The ipnotifyd binary is responsible for:
// 1. Reading configuration from environment variables
// 2. Initializing tracing and a current-thread runtime
// 3. Wiring the system interface table and Discord notifier into a Reporter
// 4. Mapping the run report to an exit code
//
// ## Configuration
//
// - `IPNOTIFY_WEBHOOK_URL`: Webhook URL (required, secret)
// - `IPNOTIFY_INTERFACE`: Interface to report (default: wlan0)
// - `IPNOTIFY_HOST_LABEL`: Host label in the message (default: Raspberry Pi)
// - `IPNOTIFY_STARTUP_DELAY_SECS`: Delay before resolving (default: 0)
// - `IPNOTIFY_MODE`: `live` or `dry-run` (default: live)
// - `IPNOTIFY_LOG_LEVEL`: trace, debug, info, warn, error (default: info)
//
// ## Example
//
// ```bash
// export IPNOTIFY_WEBHOOK_URL=https://discord.com/api/webhooks/<id>/<token>
// export IPNOTIFY_INTERFACE=eth0
//
// # crontab -e
// @reboot IPNOTIFY_STARTUP_DELAY_SECS=60 /usr/local/bin/ipnotifyd
// ```

use anyhow::{Context, Result};
use ipnotify_core::config::{NotifierConfig, NotifyConfig, RunMode, DEFAULT_INTERFACE};
use ipnotify_core::message::DEFAULT_HOST_LABEL;
use ipnotify_core::{Reporter, RunReport};
use ipnotify_ifaddrs::SystemInterfaces;
use ipnotify_notifier_discord::DiscordNotifier;
use std::env;
use std::process::ExitCode;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

/// Exit codes for different termination scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NotifyExitCode {
    /// Address delivered
    Delivered = 0,
    /// Configuration error or startup failure
    ConfigError = 1,
    /// Address could not be resolved; nothing was sent
    ResolutionFailed = 2,
    /// Address resolved but the endpoint did not accept it
    DeliveryFailed = 3,
}

impl From<NotifyExitCode> for ExitCode {
    fn from(code: NotifyExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

impl From<&RunReport> for NotifyExitCode {
    fn from(report: &RunReport) -> Self {
        match report {
            RunReport::Delivered(_) => NotifyExitCode::Delivered,
            RunReport::NotResolved(_) => NotifyExitCode::ResolutionFailed,
            RunReport::DeliveryFailed { .. } => NotifyExitCode::DeliveryFailed,
        }
    }
}

/// Application configuration
struct Config {
    webhook_url: String,
    interface: String,
    host_label: String,
    startup_delay_secs: u64,
    mode: RunMode,
    log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let webhook_url = lookup("IPNOTIFY_WEBHOOK_URL").ok_or_else(|| {
            anyhow::anyhow!(
                "IPNOTIFY_WEBHOOK_URL is required. \
                Set it via: export IPNOTIFY_WEBHOOK_URL=https://discord.com/api/webhooks/<id>/<token>"
            )
        })?;

        let startup_delay_secs = match lookup("IPNOTIFY_STARTUP_DELAY_SECS") {
            Some(raw) => raw.trim().parse().with_context(|| {
                format!("IPNOTIFY_STARTUP_DELAY_SECS must be a number of seconds. Got: {}", raw)
            })?,
            None => 0,
        };

        let mode = match lookup("IPNOTIFY_MODE") {
            Some(raw) => raw.parse::<RunMode>()?,
            None => RunMode::Live,
        };

        Ok(Self {
            webhook_url,
            interface: lookup("IPNOTIFY_INTERFACE")
                .unwrap_or_else(|| DEFAULT_INTERFACE.to_string()),
            host_label: lookup("IPNOTIFY_HOST_LABEL")
                .unwrap_or_else(|| DEFAULT_HOST_LABEL.to_string()),
            startup_delay_secs,
            mode,
            log_level: lookup("IPNOTIFY_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        self.log_level()?;
        self.notify_config().validate()?;

        if self.webhook_url.starts_with("http://") {
            eprintln!(
                "WARNING: IPNOTIFY_WEBHOOK_URL uses HTTP (not HTTPS). \
                      The webhook token will travel in clear text."
            );
        }

        Ok(())
    }

    fn log_level(&self) -> Result<Level> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            _ => anyhow::bail!(
                "IPNOTIFY_LOG_LEVEL '{}' is not valid. \
                Valid levels: trace, debug, info, warn, error",
                self.log_level
            ),
        }
    }

    /// Build the core configuration handed to the reporter
    fn notify_config(&self) -> NotifyConfig {
        NotifyConfig {
            interface: self.interface.clone(),
            notifier: NotifierConfig::new(self.webhook_url.clone())
                .with_host_label(self.host_label.clone())
                .with_mode(self.mode),
            startup_delay_secs: self.startup_delay_secs,
        }
    }
}

fn main() -> ExitCode {
    // Load configuration from environment
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return NotifyExitCode::ConfigError.into();
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Configuration validation error: {}", e);
        return NotifyExitCode::ConfigError.into();
    }

    let log_level = config.log_level().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return NotifyExitCode::ConfigError.into();
    }

    info!("Starting ipnotifyd (interface: {})", config.interface);

    // One pass, no concurrency: a current-thread runtime is enough
    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return NotifyExitCode::ConfigError.into();
        }
    };

    match rt.block_on(run(config)) {
        Ok(report) => NotifyExitCode::from(&report).into(),
        Err(e) => {
            error!("Startup error: {}", e);
            NotifyExitCode::ConfigError.into()
        }
    }
}

/// Wire the components and run a single pass
async fn run(config: Config) -> Result<RunReport> {
    let notify_config = config.notify_config();

    if notify_config.notifier.mode == RunMode::DryRun {
        info!("Running in DRY-RUN mode - no message will be sent");
    }

    let notifier = DiscordNotifier::new(&notify_config.notifier);
    let reporter = Reporter::new(
        Box::new(SystemInterfaces::new()),
        Box::new(notifier),
        &notify_config,
    )?;

    let report = reporter.run_once().await;

    match &report {
        RunReport::Delivered(address) => info!("Done: reported {}", address),
        RunReport::NotResolved(_) => info!("Done: nothing to report"),
        RunReport::DeliveryFailed { .. } => info!("Done: delivery failed"),
    }

    Ok(report)
}
