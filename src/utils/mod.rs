//! Utility modules
//!
//! Error types and result types shared across the crate.

pub mod error;

// Re-export commonly used items
pub use error::{TableError, TableResult};
