//! Public API traits and types for the ecsign library
//!
//! This crate provides the public API surface for the ecsign workspace: the
//! error type shared by every layer and the trait implemented by signature
//! schemes.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use traits::Signature;

// Re-export trait modules for direct access
pub use traits::signature;
