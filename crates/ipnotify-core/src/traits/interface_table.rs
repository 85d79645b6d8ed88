// # Interface Table Trait
//
// Defines the interface for enumerating network interfaces and their addresses.
//
// ## Implementations
//
// - getifaddrs-based: `ipnotify-ifaddrs` crate
// - Test doubles: `tests/common/mod.rs`
//
// ## Usage
//
// ```rust,ignore
// use ipnotify_core::InterfaceTable;
//
// let table = /* InterfaceTable implementation */;
//
// for name in table.interface_names()? {
//     println!("{}: {:?}", name, table.addresses(&name)?);
// }
// ```

use std::io;
use std::net::IpAddr;

/// Trait over the OS interface/address enumeration service
///
/// The two calls mirror what the OS exposes: a list of known interface names,
/// and the addresses bound to one of them. Both must preserve the order the
/// OS reports, since the resolver picks the first IPv4 entry.
///
/// Errors are plain `io::Error`s; the resolver is responsible for turning
/// them into [`crate::Error::ResolutionFault`].
pub trait InterfaceTable: Send + Sync {
    /// List the names of all interfaces currently known to the OS
    fn interface_names(&self) -> io::Result<Vec<String>>;

    /// List every address bound to `interface`, in OS enumeration order
    ///
    /// Returns an empty list for an interface with nothing bound.
    fn addresses(&self, interface: &str) -> io::Result<Vec<IpAddr>>;
}
