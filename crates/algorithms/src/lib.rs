//! Finite-field and elliptic-curve arithmetic
//!
//! This crate provides the arithmetic layer of ecsign: modular arithmetic over
//! a prime modulus ([`PrimeField`]) and the group law of a short Weierstrass
//! curve `y² = x³ + a·x + b` ([`EllipticCurve`], [`Point`]). Curve parameters
//! are runtime values, so the same code serves secp256k1, P-256 or a toy curve
//! used in tests.
//!
//! All values are immutable; every operation returns a new value.
//!
//! # Security
//!
//! Arithmetic is built on `num-bigint` and is **not** constant time. Scalar
//! multiplication is a plain double-and-add whose running time depends on the
//! scalar. Do not use it where an attacker can time signing operations.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Modular arithmetic
pub mod field;
pub use field::{FieldElement, PrimeField};

// Elliptic curve group law
pub mod ec;
pub use ec::{CurveParams, EllipticCurve, Point, MAX_SAMPLING_ATTEMPTS};

pub use num_bigint::BigUint;
