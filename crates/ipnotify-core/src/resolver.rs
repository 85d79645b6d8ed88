//! Interface address resolution
//!
//! Resolves the IPv4 address bound to a named interface:
//!
//! 1. Enumerate interface names; unknown name → `InterfaceNotFound`
//! 2. Fetch the interface's addresses and keep the IPv4 ones
//! 3. First IPv4 in OS enumeration order wins; none → `NoIpv4Bound`
//!
//! Any OS error along the way becomes `ResolutionFault`.

use crate::error::Error;
use crate::traits::InterfaceTable;
use std::net::{IpAddr, Ipv4Addr};
use tracing::debug;

/// Outcome of resolving an interface address
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionResult {
    /// First IPv4 address bound to the interface
    Address(Ipv4Addr),
    /// Resolution failed; never a delivery error
    Failure(Error),
}

impl ResolutionResult {
    /// The resolved address, if any
    pub fn address(&self) -> Option<Ipv4Addr> {
        match self {
            Self::Address(addr) => Some(*addr),
            Self::Failure(_) => None,
        }
    }

    /// Convert into a standard `Result`
    pub fn into_result(self) -> crate::Result<Ipv4Addr> {
        match self {
            Self::Address(addr) => Ok(addr),
            Self::Failure(err) => Err(err),
        }
    }
}

/// Resolve the IPv4 address bound to `interface`
pub fn resolve(table: &dyn InterfaceTable, interface: &str) -> ResolutionResult {
    match lookup(table, interface) {
        Ok(addr) => ResolutionResult::Address(addr),
        Err(err) => ResolutionResult::Failure(err),
    }
}

fn lookup(table: &dyn InterfaceTable, interface: &str) -> crate::Result<Ipv4Addr> {
    let names = table
        .interface_names()
        .map_err(|e| Error::resolution_fault(interface, e.to_string()))?;

    if !names.iter().any(|name| name == interface) {
        debug!("Interface {} not among {} known interface(s)", interface, names.len());
        return Err(Error::interface_not_found(interface));
    }

    let addrs = table
        .addresses(interface)
        .map_err(|e| Error::resolution_fault(interface, e.to_string()))?;

    let mut v4 = addrs.into_iter().filter_map(|addr| match addr {
        IpAddr::V4(v4) => Some(v4),
        IpAddr::V6(_) => None,
    });

    let first = v4.next().ok_or_else(|| Error::no_ipv4(interface))?;

    let ignored: Vec<Ipv4Addr> = v4.collect();
    if !ignored.is_empty() {
        debug!(
            "Interface {} has {} additional IPv4 address(es), using {} and ignoring {:?}",
            interface,
            ignored.len(),
            first,
            ignored
        );
    }

    Ok(first)
}
