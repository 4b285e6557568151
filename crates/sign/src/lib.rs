//! Digital Signature Schemes
//!
//! ECDSA over short Weierstrass curves whose parameters are supplied at
//! runtime. Arithmetic comes from `ecsign-algorithms`; errors and the
//! [`Signature`](ecsign_api::Signature) trait from `ecsign-api`.

#![forbid(unsafe_code)]

pub mod traditional;

// Re-exports from traditional schemes
pub use traditional::ecdsa::{
    Ecdsa, KeyPair, NonceSource, PublicKey, RandomNonce, Rfc6979Nonce, SecretKey, Signature,
};
