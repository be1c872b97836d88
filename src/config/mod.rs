//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, retry parameters, input columns, sentinels)
//! - Library configuration types
//! - CLI option types and parsing

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::{BatchCommand, CheckCommand, Cli, Command, GlobalOptions};
pub use constants::*;
pub use types::{Config, ExportFormat, LogFormat, LogLevel};
