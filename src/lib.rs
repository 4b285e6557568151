//! # ecsign
//!
//! ECDSA over short Weierstrass curves `y² = x³ + a·x + b (mod p)` with
//! runtime-supplied parameters. secp256k1 and NIST P-256 are built in.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ecsign = "0.3"
//! ```
//!
//! ```no_run
//! use ecsign::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let ecdsa = Ecdsa::secp256k1()?;
//! let keypair = ecdsa.keygen(&mut OsRng)?;
//! let sig = ecdsa.sign(b"Hello, ECDSA!", keypair.secret_key(), &mut OsRng)?;
//! assert!(ecdsa.verify(b"Hello, ECDSA!", &sig, keypair.public_key())?);
//! # Ok::<(), ecsign::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `sign` (default): ECDSA, pulls in `algorithms`
//! - `algorithms`: field and curve arithmetic only
//! - `serde`: serialization of signatures and curve constants
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`ecsign-api`]: Error type and the `Signature` trait
//! - [`ecsign-params`]: Named curve constants
//! - [`ecsign-algorithms`]: Prime field and elliptic curve arithmetic
//! - [`ecsign-sign`]: ECDSA
//!
//! ## Security
//!
//! The arithmetic is not constant time. See `ecsign-algorithms`.

// Core re-exports (always available)
pub use ecsign_api as api;
pub use ecsign_internal as internal;
pub use ecsign_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use ecsign_algorithms as algorithms;

#[cfg(feature = "sign")]
pub use ecsign_sign as sign;

#[cfg(feature = "sign")]
pub use rand;

pub use num_bigint::BigUint;
pub use zeroize;

/// Common imports for ecsign users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::Signature as SignatureScheme;

    // Curve constants
    pub use crate::params::{CurveConstants, NIST_P256, SECP256K1};

    pub use num_bigint::BigUint;

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{CurveParams, EllipticCurve, FieldElement, Point, PrimeField};

    #[cfg(feature = "sign")]
    pub use crate::sign::{
        Ecdsa, KeyPair, NonceSource, PublicKey, RandomNonce, Rfc6979Nonce, SecretKey, Signature,
    };
}
