//! Traits implemented by ecsign schemes

pub mod signature;

pub use signature::Signature;
