//! One-shot reporter
//!
//! The Reporter runs a single resolve → notify pass:
//!
//! ```text
//! ┌────────────────┐   Address(ip)   ┌────────────┐
//! │ InterfaceTable │ ──────────────▶ │  Notifier  │
//! │   (resolve)    │                 │  (notify)  │
//! └────────────────┘                 └────────────┘
//!         │ Failure                         │
//!         ▼                                 ▼
//!   RunReport::NotResolved      RunReport::Delivered / DeliveryFailed
//! ```
//!
//! There is no loop: invocation cadence belongs to whatever launches the
//! process (cron, a systemd timer, ...).

use crate::config::NotifyConfig;
use crate::error::{Error, Result};
use crate::resolver::{resolve, ResolutionResult};
use crate::traits::{InterfaceTable, NotificationOutcome, Notifier};
use std::net::Ipv4Addr;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Summary of one reporter run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunReport {
    /// Address could not be resolved; nothing was sent
    NotResolved(Error),

    /// Address was resolved and delivered
    Delivered(Ipv4Addr),

    /// Address was resolved but delivery failed
    DeliveryFailed {
        address: Ipv4Addr,
        status_code: Option<u16>,
        detail: String,
    },
}

impl RunReport {
    /// Whether the address reached the endpoint
    pub fn is_delivered(&self) -> bool {
        matches!(self, RunReport::Delivered(_))
    }

    /// The resolved address, if resolution succeeded
    pub fn address(&self) -> Option<Ipv4Addr> {
        match self {
            RunReport::NotResolved(_) => None,
            RunReport::Delivered(address) | RunReport::DeliveryFailed { address, .. } => {
                Some(*address)
            }
        }
    }

    /// The failure, if any, as a crate error
    pub fn error(&self) -> Option<Error> {
        match self {
            RunReport::NotResolved(err) => Some(err.clone()),
            RunReport::Delivered(_) => None,
            RunReport::DeliveryFailed {
                status_code,
                detail,
                ..
            } => Some(Error::delivery(*status_code, detail.clone())),
        }
    }
}

/// Orchestrates one resolve → notify pass
pub struct Reporter {
    /// OS interface enumeration
    table: Box<dyn InterfaceTable>,

    /// Delivery endpoint
    notifier: Box<dyn Notifier>,

    /// Interface to report
    interface: String,

    /// Delay before resolving
    startup_delay: Duration,
}

impl Reporter {
    /// Create a new reporter
    ///
    /// # Parameters
    ///
    /// - `table`: Interface enumeration implementation
    /// - `notifier`: Notifier implementation
    /// - `config`: Validated before use
    pub fn new(
        table: Box<dyn InterfaceTable>,
        notifier: Box<dyn Notifier>,
        config: &NotifyConfig,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            table,
            notifier,
            interface: config.interface.clone(),
            startup_delay: Duration::from_secs(config.startup_delay_secs),
        })
    }

    /// Interface this reporter resolves
    pub fn interface(&self) -> &str {
        &self.interface
    }

    /// Run a single pass
    ///
    /// Never fails: every outcome, including errors, is a [`RunReport`].
    pub async fn run_once(&self) -> RunReport {
        if !self.startup_delay.is_zero() {
            info!("Waiting {:?} before resolving {}", self.startup_delay, self.interface);
            tokio::time::sleep(self.startup_delay).await;
        }

        let address = match resolve(self.table.as_ref(), &self.interface) {
            ResolutionResult::Address(address) => address,
            ResolutionResult::Failure(err) => {
                error!("{}", err);
                return RunReport::NotResolved(err);
            }
        };

        info!("Resolved {} to {}", self.interface, address);
        debug!("Notifying via {}", self.notifier.notifier_name());

        match self.notifier.notify(address).await {
            NotificationOutcome::Delivered => {
                info!("Reported {} via {}", address, self.notifier.notifier_name());
                RunReport::Delivered(address)
            }
            NotificationOutcome::DeliveryFailed {
                status_code,
                detail,
            } => {
                warn!(
                    "Delivery via {} failed for {} (status: {:?})",
                    self.notifier.notifier_name(),
                    address,
                    status_code
                );
                RunReport::DeliveryFailed {
                    address,
                    status_code,
                    detail,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::net::IpAddr;

    struct EmptyTable;

    impl InterfaceTable for EmptyTable {
        fn interface_names(&self) -> io::Result<Vec<String>> {
            Ok(Vec::new())
        }

        fn addresses(&self, _interface: &str) -> io::Result<Vec<IpAddr>> {
            Ok(Vec::new())
        }
    }

    struct NeverNotifier;

    #[async_trait::async_trait]
    impl Notifier for NeverNotifier {
        async fn notify(&self, _address: Ipv4Addr) -> NotificationOutcome {
            panic!("notify must not be called");
        }

        fn notifier_name(&self) -> &'static str {
            "never"
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = NotifyConfig::new("");
        let reporter = Reporter::new(Box::new(EmptyTable), Box::new(NeverNotifier), &config);
        assert!(matches!(reporter, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_missing_interface_skips_notifier() {
        let config = NotifyConfig::new("https://example.invalid/hook").with_interface("eth9");
        let reporter =
            Reporter::new(Box::new(EmptyTable), Box::new(NeverNotifier), &config).unwrap();

        let report = reporter.run_once().await;
        assert_eq!(report, RunReport::NotResolved(Error::interface_not_found("eth9")));
        assert_eq!(report.address(), None);
        assert!(!report.is_delivered());
    }

    #[test]
    fn test_report_error_mapping() {
        let addr = Ipv4Addr::new(10, 0, 0, 5);

        assert_eq!(RunReport::Delivered(addr).error(), None);
        assert_eq!(
            RunReport::DeliveryFailed {
                address: addr,
                status_code: Some(404),
                detail: "Unknown Webhook".to_string(),
            }
            .error(),
            Some(Error::delivery(Some(404), "Unknown Webhook"))
        );
    }
}
