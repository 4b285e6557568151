//! Modular arithmetic over a prime modulus
//!
//! [`PrimeField`] owns the modulus and performs every operation; a
//! [`FieldElement`] is just a reduced integer and can only be produced by a
//! field, which keeps the `[0, p-1]` invariant in one place. The same type is
//! used for curve coordinates (mod `p`) and for scalars (mod `n`).

use core::fmt;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::{validate, Error, Result};

/// An integer in `[0, p-1]` for the modulus of the field that produced it
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldElement(BigUint);

impl FieldElement {
    /// The canonical integer value
    pub fn value(&self) -> &BigUint {
        &self.0
    }

    /// Consume the element, returning its integer value
    pub fn into_value(self) -> BigUint {
        self.0
    }

    /// Check if this element is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Prime field `F_p`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeField {
    modulus: BigUint,
    byte_len: usize,
}

impl PrimeField {
    /// Create a field for the given modulus.
    ///
    /// Primality is not checked; inverses of values sharing a factor with a
    /// composite modulus fail with [`Error::NoInverse`].
    pub fn new(modulus: BigUint) -> Result<Self> {
        validate::parameter(
            modulus > BigUint::one(),
            "modulus",
            "field modulus must be greater than one",
        )?;
        let byte_len = ((modulus.bits() + 7) / 8) as usize;
        Ok(PrimeField { modulus, byte_len })
    }

    /// The modulus `p`
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Bit length of the modulus
    pub fn bits(&self) -> u64 {
        self.modulus.bits()
    }

    /// Number of bytes needed to encode any element
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// The additive identity
    pub fn zero(&self) -> FieldElement {
        FieldElement(BigUint::zero())
    }

    /// The multiplicative identity
    pub fn one(&self) -> FieldElement {
        FieldElement(BigUint::one())
    }

    /// Reduce an arbitrary integer into the field
    pub fn element(&self, value: BigUint) -> FieldElement {
        FieldElement(value % &self.modulus)
    }

    /// Reduce a small integer into the field
    pub fn from_u64(&self, value: u64) -> FieldElement {
        self.element(BigUint::from(value))
    }

    /// Accept an integer only if it is already a canonical representative
    pub fn try_element(&self, value: BigUint) -> Result<FieldElement> {
        if !self.contains(&value) {
            return Err(Error::param(
                "field element",
                "value is not smaller than the modulus",
            ));
        }
        Ok(FieldElement(value))
    }

    /// Check if `value` lies in `[0, p-1]`
    pub fn contains(&self, value: &BigUint) -> bool {
        value < &self.modulus
    }

    /// Decode a big-endian integer, rejecting non-canonical values
    pub fn from_bytes_be(&self, bytes: &[u8]) -> Result<FieldElement> {
        validate::max_length("field element bytes", bytes.len(), self.byte_len)?;
        self.try_element(BigUint::from_bytes_be(bytes))
    }

    /// Parse a hexadecimal integer (optional `0x` prefix), rejecting values `≥ p`
    pub fn from_hex(&self, s: &str) -> Result<FieldElement> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let value = BigUint::parse_bytes(digits.as_bytes(), 16)
            .ok_or_else(|| Error::param("field element", "not a hexadecimal integer"))?;
        self.try_element(value)
    }

    /// Encode an element as fixed-width big-endian bytes
    pub fn to_bytes_be(&self, x: &FieldElement) -> Vec<u8> {
        to_fixed_be(&x.0, self.byte_len)
    }

    /// `(x + y) mod p`
    pub fn add(&self, x: &FieldElement, y: &FieldElement) -> FieldElement {
        self.element(&x.0 + &y.0)
    }

    /// `(x - y) mod p`, always in `[0, p-1]`
    pub fn sub(&self, x: &FieldElement, y: &FieldElement) -> FieldElement {
        let x = &x.0 % &self.modulus;
        let y = &y.0 % &self.modulus;
        if x >= y {
            FieldElement(x - y)
        } else {
            FieldElement(&self.modulus - (y - x))
        }
    }

    /// `-x mod p`
    pub fn neg(&self, x: &FieldElement) -> FieldElement {
        let x = &x.0 % &self.modulus;
        if x.is_zero() {
            return self.zero();
        }
        FieldElement(&self.modulus - x)
    }

    /// `(x * y) mod p`
    pub fn mul(&self, x: &FieldElement, y: &FieldElement) -> FieldElement {
        self.element(&x.0 * &y.0)
    }

    /// `x² mod p`
    pub fn square(&self, x: &FieldElement) -> FieldElement {
        self.mul(x, x)
    }

    /// `x^e mod p`
    pub fn pow(&self, x: &FieldElement, e: &BigUint) -> FieldElement {
        FieldElement(x.0.modpow(e, &self.modulus))
    }

    /// `x⁻¹ mod p` via the extended Euclidean algorithm.
    ///
    /// Fails when `x ≡ 0` or `gcd(x, p) ≠ 1`.
    pub fn inverse(&self, x: &FieldElement) -> Result<FieldElement> {
        if x.is_zero() {
            return Err(Error::NoInverse {
                context: "field inverse of zero",
            });
        }

        // Invariant: s_i · x ≡ r_i (mod p). Coefficients are kept reduced so
        // the whole computation stays unsigned.
        let p = &self.modulus;
        let (mut r0, mut r1) = (p.clone(), x.0.clone());
        let (mut s0, mut s1) = (BigUint::zero(), BigUint::one());

        while !r1.is_zero() {
            let q = &r0 / &r1;
            let r2 = &r0 - &q * &r1;
            let s2 = (&s0 + p - (&q * &s1) % p) % p;
            r0 = core::mem::replace(&mut r1, r2);
            s0 = core::mem::replace(&mut s1, s2);
        }

        if !r0.is_one() {
            return Err(Error::NoInverse {
                context: "field inverse (value shares a factor with the modulus)",
            });
        }
        Ok(FieldElement(s0))
    }
}

/// Big-endian encoding left-padded with zeros to `len` bytes.
///
/// Values wider than `len` are returned unpadded.
pub fn to_fixed_be(value: &BigUint, len: usize) -> Vec<u8> {
    let bytes = value.to_bytes_be();
    if bytes.len() >= len {
        return bytes;
    }
    let mut out = vec![0u8; len - bytes.len()];
    out.extend_from_slice(&bytes);
    out
}
