//! Traditional signature schemes

pub mod ecdsa;

// Re-export ECDSA types
pub use ecdsa::{Ecdsa, KeyPair, PublicKey, SecretKey, Signature};
