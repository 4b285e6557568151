//! Elliptic Curve Primitives
//!
//! Group law on short Weierstrass curves `y² = x³ + a·x + b` over a prime
//! field, with the curve parameters supplied at runtime. Named parameter sets
//! (secp256k1, P-256) come from `ecsign-params`.

mod curve;
mod point;

pub use curve::{CurveParams, EllipticCurve, MAX_SAMPLING_ATTEMPTS};
pub use point::Point;
