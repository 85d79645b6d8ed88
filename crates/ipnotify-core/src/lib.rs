// # ipnotify-core
//
// Core library for reporting a host's interface address to a webhook.
//
// ## Architecture Overview
//
// One invocation is one linear pass:
// - **InterfaceTable**: Trait over the OS interface/address enumeration
// - **resolve**: Picks the first IPv4 address bound to a named interface
// - **Notifier**: Trait for delivering the address to a remote endpoint
// - **Reporter**: Runs resolve → notify exactly once and reports the outcome
//
// ## Design Principles
//
// 1. **Separation of Concerns**: Core logic is separate from OS and HTTP implementations
// 2. **Values, not panics**: Every failure path ends in an enumerable result type
// 3. **Single-shot**: No loops, no retries, no persisted state
// 4. **Library-First**: The daemon is a thin wrapper around `Reporter`

pub mod traits;
pub mod resolver;
pub mod message;
pub mod engine;
pub mod config;
pub mod error;

// Re-export core types for convenience
pub use traits::{InterfaceTable, Notifier, NotificationOutcome};
pub use resolver::{resolve, ResolutionResult};
pub use message::render_message;
pub use engine::{Reporter, RunReport};
pub use config::{NotifyConfig, NotifierConfig, RunMode};
pub use error::{Error, Result};
