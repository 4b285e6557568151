//! Digital signature traits for ecsign
//!
//! Unlike fixed-curve schemes, an ecsign scheme value carries its curve
//! parameters at runtime, so every operation takes `&self`.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Core trait for digital signature schemes
///
/// Secret keys are opaque: the trait never requires byte access to them, and
/// they must be zeroizable.
///
/// Randomness is always an explicit argument. Implementations must not reach
/// for a process-wide generator, so that callers (and tests) control every
/// source of nonces and keys.
pub trait Signature {
    /// Public key type for this scheme
    type PublicKey: Clone;

    /// Secret key type - must be zeroizable but not byte-accessible
    type SecretKey: Zeroize + Clone;

    /// Signature data type
    type SignatureData: Clone;

    /// Key pair type
    type KeyPair;

    /// Returns the name of this signature scheme
    fn name(&self) -> &'static str;

    /// Generate a new key pair using the provided RNG
    fn keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract the public key from a key pair
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract the secret key from a key pair
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Sign a message with the given secret key, drawing per-signature
    /// randomness from `rng`
    fn sign<R: CryptoRng + RngCore>(
        &self,
        message: &[u8],
        secret_key: &Self::SecretKey,
        rng: &mut R,
    ) -> Result<Self::SignatureData>;

    /// Verify a signature against a message and public key
    ///
    /// Malformed or forged signatures yield `Ok(false)`. An `Err` is reserved
    /// for internal faults that indicate a broken invariant.
    fn verify(
        &self,
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<bool>;
}
