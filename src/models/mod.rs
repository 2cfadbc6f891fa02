//! Data models module
//!
//! This module contains the data structures shared by the group layer

pub mod admin;

// Re-export commonly used models
pub use admin::{AdminRecord, AdminStatus};
