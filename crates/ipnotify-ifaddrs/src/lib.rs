// # System Interface Table
//
// This crate provides the OS-backed `InterfaceTable` for ipnotify.
//
// ## Implementation
//
// Uses `get_if_addrs`, which wraps getifaddrs(3) on Unix and
// GetAdaptersAddresses on Windows. The OS reports one entry per
// (interface, address) pair; this crate regroups them by interface name
// while keeping the OS order both for names and for addresses.
//
// ## Caveat
//
// getifaddrs only reports interfaces that have at least one address.
// An interface that is up but has nothing bound therefore looks absent,
// which the resolver reports with the same "no valid IP address" text.

use ipnotify_core::InterfaceTable;
use std::io;
use std::net::IpAddr;

/// Interface table backed by the live OS enumeration
///
/// Each call takes a fresh snapshot; nothing is cached.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemInterfaces;

impl SystemInterfaces {
    pub fn new() -> Self {
        Self
    }

    /// Take a snapshot of all (interface, address) pairs
    pub fn snapshot(&self) -> io::Result<InterfaceSnapshot> {
        let entries = get_if_addrs::get_if_addrs()?
            .into_iter()
            .map(|iface| {
                let ip = iface.ip();
                (iface.name, ip)
            })
            .collect::<Vec<_>>();

        tracing::trace!("getifaddrs reported {} entries", entries.len());
        Ok(InterfaceSnapshot::from_entries(entries))
    }
}

impl InterfaceTable for SystemInterfaces {
    fn interface_names(&self) -> io::Result<Vec<String>> {
        Ok(self.snapshot()?.names())
    }

    fn addresses(&self, interface: &str) -> io::Result<Vec<IpAddr>> {
        Ok(self.snapshot()?.addresses(interface))
    }
}

/// Ordered view of (interface, address) pairs from one enumeration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceSnapshot {
    entries: Vec<(String, IpAddr)>,
}

impl InterfaceSnapshot {
    /// Build a snapshot from raw OS entries, order preserved
    pub fn from_entries(entries: Vec<(String, IpAddr)>) -> Self {
        Self { entries }
    }

    /// Distinct interface names, in order of first appearance
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for (name, _) in &self.entries {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
        names
    }

    /// Addresses bound to `interface`, in enumeration order
    pub fn addresses(&self, interface: &str) -> Vec<IpAddr> {
        self.entries
            .iter()
            .filter(|(name, _)| name == interface)
            .map(|(_, ip)| *ip)
            .collect()
    }
}
