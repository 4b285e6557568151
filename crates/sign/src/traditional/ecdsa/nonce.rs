//! Per-signature nonce generation
//!
//! Signing never reaches for a global generator. A [`NonceSource`] is handed
//! to [`Ecdsa::sign_with_nonce_source`](super::Ecdsa::sign_with_nonce_source)
//! and asked for a fresh `k` every time the signing loop has to retry.

use core::marker::PhantomData;

use ecsign_algorithms::error::to_api_result;
use ecsign_algorithms::field::to_fixed_be;
use ecsign_algorithms::{BigUint, EllipticCurve, MAX_SAMPLING_ATTEMPTS};
use ecsign_api::{Error as ApiError, Result as ApiResult};
use hmac::{Mac, SimpleHmac};
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use sha2::digest::core_api::BlockSizeUser;
use sha2::Digest;
use zeroize::Zeroizing;

use super::bits2int;

/// Supplier of ECDSA nonces
///
/// Every returned value must lie in `[1, n-1]` for the curve passed in, and
/// must never be reused with the same key for a different message.
pub trait NonceSource {
    /// Produce the next candidate nonce
    fn next_nonce(&mut self, curve: &EllipticCurve) -> ApiResult<BigUint>;
}

/// Uniformly random nonces drawn from a cryptographic RNG
pub struct RandomNonce<'a, R: CryptoRng + RngCore> {
    rng: &'a mut R,
}

impl<'a, R: CryptoRng + RngCore> RandomNonce<'a, R> {
    /// Borrow `rng` as a nonce source
    pub fn new(rng: &'a mut R) -> Self {
        RandomNonce { rng }
    }
}

impl<R: CryptoRng + RngCore> NonceSource for RandomNonce<'_, R> {
    fn next_nonce(&mut self, curve: &EllipticCurve) -> ApiResult<BigUint> {
        to_api_result(curve.random_scalar(&mut *self.rng), "ECDSA nonce")
    }
}

/// Deterministic nonces per RFC 6979 §3.2, using HMAC over `D`
///
/// The generator is seeded from the secret scalar and the message digest; the
/// same pair always yields the same sequence of candidates.
pub struct Rfc6979Nonce<D: Digest + BlockSizeUser> {
    k: Zeroizing<Vec<u8>>,
    v: Zeroizing<Vec<u8>>,
    started: bool,
    _digest: PhantomData<fn() -> D>,
}

impl<D: Digest + BlockSizeUser> Rfc6979Nonce<D> {
    /// Seed the generator (steps a through g).
    ///
    /// `x` is the secret scalar and `h1` the raw digest of the message.
    pub fn new(curve: &EllipticCurve, x: &BigUint, h1: &[u8]) -> ApiResult<Self> {
        let n = curve.order();
        let rolen = curve.scalar_len();
        let hlen = <D as Digest>::output_size();

        let x_octets = Zeroizing::new(to_fixed_be(x, rolen));

        // bits2octets: reduce once, not a full modular reduction
        let mut z = bits2int(h1, n.bits());
        if &z >= n {
            z -= n;
        }
        let h_octets = to_fixed_be(&z, rolen);

        let mut state = Rfc6979Nonce {
            k: Zeroizing::new(vec![0x00; hlen]),
            v: Zeroizing::new(vec![0x01; hlen]),
            started: false,
            _digest: PhantomData,
        };

        for tag in [0x00u8, 0x01] {
            let k = state.mac(&[&state.v[..], &[tag], &x_octets[..], &h_octets[..]])?;
            state.k = k;
            state.v = state.mac(&[&state.v[..]])?;
        }

        Ok(state)
    }

    fn mac(&self, parts: &[&[u8]]) -> ApiResult<Zeroizing<Vec<u8>>> {
        let mut mac = <SimpleHmac<D> as Mac>::new_from_slice(&self.k).map_err(|_| {
            ApiError::InvalidParameter {
                context: "RFC 6979 HMAC",
                message: "HMAC key rejected".to_string(),
            }
        })?;
        for part in parts {
            mac.update(part);
        }
        Ok(Zeroizing::new(mac.finalize().into_bytes().to_vec()))
    }
}

impl<D: Digest + BlockSizeUser> NonceSource for Rfc6979Nonce<D> {
    fn next_nonce(&mut self, curve: &EllipticCurve) -> ApiResult<BigUint> {
        let n = curve.order();
        let rolen = curve.scalar_len();

        for _ in 0..MAX_SAMPLING_ATTEMPTS {
            // Step h.3, also applied when the caller rejected the previous k
            if self.started {
                self.k = self.mac(&[&self.v[..], &[0x00]])?;
                self.v = self.mac(&[&self.v[..]])?;
            }
            self.started = true;

            let mut t = Zeroizing::new(Vec::with_capacity(rolen));
            while t.len() < rolen {
                self.v = self.mac(&[&self.v[..]])?;
                t.extend_from_slice(&self.v);
            }

            let k = bits2int(&t, n.bits());
            if !k.is_zero() && &k < n {
                return Ok(k);
            }
        }

        Err(ApiError::InsufficientRandomness {
            context: "RFC 6979 nonce",
            message: format!("no nonce in [1, n-1] after {} candidates", MAX_SAMPLING_ATTEMPTS),
        })
    }
}
