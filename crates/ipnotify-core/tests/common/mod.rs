//! Test doubles and common utilities for contract tests
//!
//! These doubles stand in for the OS interface table and the webhook
//! notifier, and count every call so tests can assert what was (not) done.

#![allow(dead_code)]

use ipnotify_core::config::NotifyConfig;
use ipnotify_core::traits::{InterfaceTable, NotificationOutcome, Notifier};
use std::io;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// An interface table with a fixed, ordered set of interfaces
pub struct ScriptedInterfaceTable {
    entries: Vec<(String, Vec<IpAddr>)>,
    /// When set, `interface_names()` fails with this error kind
    names_error: Option<io::ErrorKind>,
    /// When set, `addresses()` fails with this error kind
    addresses_error: Option<io::ErrorKind>,
    names_call_count: Arc<AtomicUsize>,
    addresses_call_count: Arc<AtomicUsize>,
}

impl ScriptedInterfaceTable {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            names_error: None,
            addresses_error: None,
            names_call_count: Arc::new(AtomicUsize::new(0)),
            addresses_call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Add an interface with the given addresses (OS order preserved)
    pub fn with_interface(mut self, name: &str, addrs: &[&str]) -> Self {
        let addrs = addrs
            .iter()
            .map(|a| a.parse().expect("valid test address"))
            .collect();
        self.entries.push((name.to_string(), addrs));
        self
    }

    /// Make `interface_names()` fail
    pub fn failing_names(mut self, kind: io::ErrorKind) -> Self {
        self.names_error = Some(kind);
        self
    }

    /// Make `addresses()` fail
    pub fn failing_addresses(mut self, kind: io::ErrorKind) -> Self {
        self.addresses_error = Some(kind);
        self
    }

    pub fn names_call_count(&self) -> usize {
        self.names_call_count.load(Ordering::SeqCst)
    }

    pub fn addresses_call_count(&self) -> usize {
        self.addresses_call_count.load(Ordering::SeqCst)
    }

    /// Create a table that shares counters and entries with an existing one
    pub fn sharing_counters_with(other: &Self) -> Self {
        Self {
            entries: other.entries.clone(),
            names_error: other.names_error,
            addresses_error: other.addresses_error,
            names_call_count: Arc::clone(&other.names_call_count),
            addresses_call_count: Arc::clone(&other.addresses_call_count),
        }
    }
}

impl InterfaceTable for ScriptedInterfaceTable {
    fn interface_names(&self) -> io::Result<Vec<String>> {
        self.names_call_count.fetch_add(1, Ordering::SeqCst);
        if let Some(kind) = self.names_error {
            return Err(io::Error::new(kind, "scripted enumeration failure"));
        }
        Ok(self.entries.iter().map(|(n, _)| n.clone()).collect())
    }

    fn addresses(&self, interface: &str) -> io::Result<Vec<IpAddr>> {
        self.addresses_call_count.fetch_add(1, Ordering::SeqCst);
        if let Some(kind) = self.addresses_error {
            return Err(io::Error::new(kind, "scripted address failure"));
        }
        Ok(self
            .entries
            .iter()
            .find(|(n, _)| n == interface)
            .map(|(_, a)| a.clone())
            .unwrap_or_default())
    }
}

/// A mock notifier that records calls and returns a fixed outcome
pub struct MockNotifier {
    outcome: NotificationOutcome,
    notify_call_count: Arc<AtomicUsize>,
    notified: Arc<std::sync::Mutex<Vec<Ipv4Addr>>>,
}

impl MockNotifier {
    pub fn delivering() -> Self {
        Self::with_outcome(NotificationOutcome::Delivered)
    }

    pub fn with_outcome(outcome: NotificationOutcome) -> Self {
        Self {
            outcome,
            notify_call_count: Arc::new(AtomicUsize::new(0)),
            notified: Arc::new(std::sync::Mutex::new(Vec::new())),
        }
    }

    /// Get the number of times notify() was called
    pub fn notify_call_count(&self) -> usize {
        self.notify_call_count.load(Ordering::SeqCst)
    }

    /// Get the addresses passed to notify()
    pub fn notified(&self) -> Vec<Ipv4Addr> {
        self.notified.lock().unwrap().clone()
    }

    /// Create a new MockNotifier that shares counters with an existing one
    pub fn sharing_counters_with(other: &Self) -> Self {
        Self {
            outcome: other.outcome.clone(),
            notify_call_count: Arc::clone(&other.notify_call_count),
            notified: Arc::clone(&other.notified),
        }
    }
}

#[async_trait::async_trait]
impl Notifier for MockNotifier {
    async fn notify(&self, address: Ipv4Addr) -> NotificationOutcome {
        self.notify_call_count.fetch_add(1, Ordering::SeqCst);
        self.notified.lock().unwrap().push(address);
        self.outcome.clone()
    }

    fn notifier_name(&self) -> &'static str {
        "mock"
    }
}

/// Helper to create a minimal NotifyConfig for testing
pub fn minimal_config(interface: &str) -> NotifyConfig {
    NotifyConfig::new("https://hooks.test.invalid/api/webhooks/1/token").with_interface(interface)
}
