//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - init command and shared helpers (open/save store, config, parsing)
//! - `budget` - budget tracker commands (summary, list, add, edit, remove)
//! - `attendance` - punctuality log commands (summary, list, log, edit, remove, weekly, subjects)
//! - `dashboard` - combined overview command
//! - `insights` - advisory insights command

pub mod attendance;
pub mod budget;
pub mod core;
pub mod dashboard;
pub mod insights;

// Re-export command functions for main.rs
pub use attendance::*;
pub use budget::*;
pub use core::*;
pub use dashboard::*;
pub use insights::*;

/// Truncate a string to a maximum character count, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
