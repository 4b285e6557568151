//! ECDSA signature value

use core::fmt;

use ecsign_algorithms::BigUint;

/// An ECDSA signature `(r, s)`
///
/// Produced signatures always have `r, s ∈ [1, n-1]`. Signatures parsed from
/// bytes are not range checked until verification.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Build a signature from its components
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Signature { r, s }
    }

    /// The `r` component
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// The `s` component
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Split into `(r, s)`
    pub fn into_parts(self) -> (BigUint, BigUint) {
        (self.r, self.s)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature(r={:#x}, s={:#x})", self.r, self.s)
    }
}
