//! Main application modules.
//!
//! This module provides progress logging, interrupt/shutdown handling and
//! statistics printing used by the run functions.

pub mod logging;
pub mod shutdown;
pub mod statistics;

// Re-export public API
pub use logging::{log_progress, spawn_progress_logger};
pub use shutdown::{shutdown_gracefully, spawn_interrupt_handler};
pub use statistics::{print_batch_summary, print_error_statistics};
