//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - Console output for the Notifier port

pub mod console;

pub use console::ConsoleNotifier;
