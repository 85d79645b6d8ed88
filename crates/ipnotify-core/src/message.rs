//! Notification message template

use std::net::Ipv4Addr;

/// Default host label shown in the message
pub const DEFAULT_HOST_LABEL: &str = "Raspberry Pi";

/// Render the human-readable notification text for `address`
pub fn render_message(host_label: &str, address: Ipv4Addr) -> String {
    format!("📡 {} is online!\nIP Address: `{}`", host_label, address)
}
