//! ECDSA key types

use core::fmt;

use ecsign_algorithms::{BigUint, Point};
use zeroize::{Zeroize, Zeroizing};

/// ECDSA secret key
///
/// The scalar `d ∈ [1, n-1]` is held as fixed-width big-endian bytes that are
/// wiped on drop. Keys are created by [`Ecdsa::keygen`](super::Ecdsa::keygen)
/// or the range-checked importers on [`Ecdsa`](super::Ecdsa).
#[derive(Clone)]
pub struct SecretKey {
    bytes: Zeroizing<Vec<u8>>,
}

impl SecretKey {
    pub(crate) fn from_scalar(d: &BigUint, len: usize) -> Self {
        SecretKey {
            bytes: Zeroizing::new(ecsign_algorithms::field::to_fixed_be(d, len)),
        }
    }

    pub(crate) fn scalar(&self) -> BigUint {
        BigUint::from_bytes_be(&self.bytes)
    }

    /// Length of the encoded scalar in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the encoding is empty (never true for a constructed key)
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for SecretKey {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl Zeroize for SecretKey {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey").finish_non_exhaustive()
    }
}

/// ECDSA public key `Q = d·G`
///
/// Always a finite point that passed validation against the curve it was
/// created for.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey {
    point: Point,
}

impl PublicKey {
    pub(crate) fn from_point(point: Point) -> Self {
        PublicKey { point }
    }

    /// The underlying curve point
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// Affine x-coordinate
    pub fn x(&self) -> Option<&BigUint> {
        self.point.x().map(|x| x.value())
    }

    /// Affine y-coordinate
    pub fn y(&self) -> Option<&BigUint> {
        self.point.y().map(|y| y.value())
    }
}

/// A secret key and its public key
#[derive(Clone, Debug)]
pub struct KeyPair {
    public: PublicKey,
    secret: SecretKey,
}

impl KeyPair {
    pub(crate) fn new(public: PublicKey, secret: SecretKey) -> Self {
        KeyPair { public, secret }
    }

    /// The public half
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// The secret half
    pub fn secret_key(&self) -> &SecretKey {
        &self.secret
    }

    /// Split into `(public, secret)`
    pub fn into_parts(self) -> (PublicKey, SecretKey) {
        (self.public, self.secret)
    }
}
