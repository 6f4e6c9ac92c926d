//! Data models for unbored
//!
//! This module contains the core data structures:
//! - Activity records and categories as the Bored API returns them
//! - The saved selection set and its pure transitions

pub mod activity;
pub mod entry;

// Re-exports for convenient access
pub use activity::{Activity, ActivityType};
pub use entry::Entry;
