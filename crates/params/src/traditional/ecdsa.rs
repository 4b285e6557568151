//! Constants for ECDSA over short Weierstrass curves
//!
//! Each parameter set describes `y² = x³ + a·x + b` over `F_p` with base point
//! `G = (gx, gy)` of prime order `n` and cofactor `h`. Values are big-endian
//! hexadecimal without a `0x` prefix.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hex-encoded parameters of a short Weierstrass curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurveConstants<'a> {
    /// Human-readable curve name
    pub name: &'a str,
    /// Field prime p
    pub p: &'a str,
    /// Coefficient a
    pub a: &'a str,
    /// Coefficient b
    pub b: &'a str,
    /// Generator x-coordinate
    pub gx: &'a str,
    /// Generator y-coordinate
    pub gy: &'a str,
    /// Order n of the generator
    pub n: &'a str,
    /// Cofactor h
    pub h: u32,
}

/// secp256k1 (SEC 2, section 2.4.1)
pub const SECP256K1: CurveConstants<'static> = CurveConstants {
    name: "secp256k1",
    p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F",
    a: "0",
    b: "7",
    gx: "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
    gy: "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8",
    n: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
    h: 1,
};

/// NIST P-256 / secp256r1 (FIPS 186-4, appendix D.1.2.3)
pub const NIST_P256: CurveConstants<'static> = CurveConstants {
    name: "P-256",
    p: "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF",
    a: "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFC",
    b: "5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B",
    gx: "6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296",
    gy: "4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5",
    n: "FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551",
    h: 1,
};

/// Size of a secp256k1 scalar in bytes
pub const SECP256K1_SCALAR_SIZE: usize = 32;

/// Size of an uncompressed secp256k1 point: 0x04 || x || y
pub const SECP256K1_POINT_UNCOMPRESSED_SIZE: usize = 1 + 2 * SECP256K1_SCALAR_SIZE;

/// Size of a fixed-width secp256k1 signature: r || s
pub const SECP256K1_SIGNATURE_SIZE: usize = 2 * SECP256K1_SCALAR_SIZE;

/// Size of a P-256 scalar in bytes
pub const P256_SCALAR_SIZE: usize = 32;
