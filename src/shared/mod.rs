//! Shared error types and result alias used across all layers.
pub mod error;
mod result;

pub use result::Result;
