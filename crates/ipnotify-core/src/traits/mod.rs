//! Core traits for ipnotify
//!
//! This module defines the abstract interfaces that all implementations must follow.
//!
//! - [`InterfaceTable`]: Enumerate interfaces and their bound addresses
//! - [`Notifier`]: Deliver a resolved address to a remote endpoint

pub mod interface_table;
pub mod notifier;

pub use interface_table::InterfaceTable;
pub use notifier::{Notifier, NotificationOutcome};
