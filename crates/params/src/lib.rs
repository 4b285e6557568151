//! Constant values for ecsign operations
//!
//! Named curve parameter sets and the sizes derived from them.

#![forbid(unsafe_code)]

pub mod traditional;

pub use traditional::ecdsa::{CurveConstants, NIST_P256, SECP256K1};
