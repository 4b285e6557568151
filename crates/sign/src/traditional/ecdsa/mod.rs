//! ECDSA over a runtime-configured short Weierstrass curve
//!
//! The scheme follows SEC 1 §4.1 / FIPS 186-4 §6:
//!
//! Signing:
//! 1. e = bits2int(H(m)) mod n
//! 2. pick k ∈ [1, n-1]
//! 3. (x₁, y₁) = k·G, r = x₁ mod n; if r = 0 pick a new k
//! 4. s = k⁻¹(e + r·d) mod n; if s = 0 pick a new k
//!
//! Verification:
//! 1. reject unless r, s ∈ [1, n-1]
//! 2. w = s⁻¹, u₁ = e·w, u₂ = r·w (mod n)
//! 3. P = u₁·G + u₂·Q; reject if P = O
//! 4. accept iff P.x mod n = r
//!
//! Arithmetic is variable time (see `ecsign-algorithms`).

mod keys;
mod nonce;
mod signature;

pub use keys::{KeyPair, PublicKey, SecretKey};
pub use nonce::{NonceSource, RandomNonce, Rfc6979Nonce};
pub use signature::Signature;

use core::fmt;
use core::marker::PhantomData;

use ecsign_algorithms::error::to_api_result;
use ecsign_algorithms::field::to_fixed_be;
use ecsign_algorithms::{BigUint, EllipticCurve, Point};
use ecsign_api::{Error as ApiError, Result as ApiResult, Signature as SignatureTrait};
use ecsign_internal::constant_time::ct_eq;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use sha2::digest::core_api::BlockSizeUser;
use sha2::{Digest, Sha256};

/// Upper bound on nonces tried by a single signing call.
///
/// `r = 0` or `s = 0` happen with probability about 2/n per attempt, so the
/// bound is only reached on tiny test curves or with a broken nonce source.
pub const MAX_SIGN_ATTEMPTS: usize = 64;

/// Leftmost `qlen` bits of `bytes` as an integer (RFC 6979 §2.3.2)
pub(crate) fn bits2int(bytes: &[u8], qlen: u64) -> BigUint {
    let x = BigUint::from_bytes_be(bytes);
    let blen = bytes.len() as u64 * 8;
    if blen > qlen {
        x >> (blen - qlen)
    } else {
        x
    }
}

/// ECDSA signature scheme over `curve`, hashing messages with `D`
pub struct Ecdsa<D = Sha256> {
    curve: EllipticCurve,
    _digest: PhantomData<fn() -> D>,
}

impl<D> Clone for Ecdsa<D> {
    fn clone(&self) -> Self {
        Ecdsa {
            curve: self.curve.clone(),
            _digest: PhantomData,
        }
    }
}

impl<D> fmt::Debug for Ecdsa<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ecdsa")
            .field("curve", &self.curve.name())
            .finish()
    }
}

impl Ecdsa<Sha256> {
    /// ECDSA over secp256k1 with SHA-256
    pub fn secp256k1() -> ApiResult<Self> {
        Ok(Self::new(to_api_result(
            EllipticCurve::secp256k1(),
            "secp256k1 parameters",
        )?))
    }

    /// ECDSA over NIST P-256 with SHA-256
    pub fn p256() -> ApiResult<Self> {
        Ok(Self::new(to_api_result(
            EllipticCurve::p256(),
            "P-256 parameters",
        )?))
    }
}

impl<D: Digest> Ecdsa<D> {
    /// Bind the scheme to a curve
    pub fn new(curve: EllipticCurve) -> Self {
        Ecdsa {
            curve,
            _digest: PhantomData,
        }
    }

    /// The curve this scheme signs over
    pub fn curve(&self) -> &EllipticCurve {
        &self.curve
    }

    /// `bits2int(H(message)) mod n`
    pub fn hash_message(&self, message: &[u8]) -> BigUint {
        let digest = D::digest(message);
        let n = self.curve.order();
        bits2int(&digest, n.bits()) % n
    }

    /// Generate a key pair with `d` uniform in `[1, n-1]`
    pub fn keygen<R: CryptoRng + RngCore>(&self, rng: &mut R) -> ApiResult<KeyPair> {
        let d = to_api_result(self.curve.random_scalar(rng), "ECDSA keygen")?;
        let q = to_api_result(self.curve.mul_generator(&d), "ECDSA keygen")?;
        let secret = SecretKey::from_scalar(&d, self.curve.scalar_len());
        Ok(KeyPair::new(PublicKey::from_point(q), secret))
    }

    /// Sign with a fresh random nonce drawn from `rng`
    pub fn sign<R: CryptoRng + RngCore>(
        &self,
        message: &[u8],
        secret_key: &SecretKey,
        rng: &mut R,
    ) -> ApiResult<Signature> {
        self.sign_with_nonce_source(message, secret_key, &mut RandomNonce::new(rng))
    }

    /// Sign, asking `nonces` for a new `k` whenever `r` or `s` comes out zero.
    pub fn sign_with_nonce_source<N: NonceSource + ?Sized>(
        &self,
        message: &[u8],
        secret_key: &SecretKey,
        nonces: &mut N,
    ) -> ApiResult<Signature> {
        const CTX: &str = "ECDSA sign";

        let d = self.checked_secret_scalar(secret_key)?;
        let e = self.hash_message(message);
        let n = self.curve.order();
        let zn = self.curve.scalar_field();

        for _ in 0..MAX_SIGN_ATTEMPTS {
            let k = nonces.next_nonce(&self.curve)?;
            if k.is_zero() || &k >= n {
                return Err(ApiError::InvalidParameter {
                    context: CTX,
                    message: "nonce source returned a value outside [1, n-1]".to_string(),
                });
            }

            let r = match to_api_result(self.curve.mul_generator(&k), CTX)? {
                Point::Affine { x, .. } => x.into_value() % n,
                Point::Identity => continue,
            };
            if r.is_zero() {
                continue;
            }

            // s = k⁻¹(e + r·d) mod n
            let k_inv = to_api_result(zn.inverse(&zn.element(k)), CTX)?;
            let rd = zn.mul(&zn.element(r.clone()), &zn.element(d.clone()));
            let s = zn.mul(&k_inv, &zn.add(&zn.element(e.clone()), &rd));
            if s.is_zero() {
                continue;
            }

            return Ok(Signature::new(r, s.into_value()));
        }

        Err(ApiError::InsufficientRandomness {
            context: CTX,
            message: format!("no usable nonce after {} attempts", MAX_SIGN_ATTEMPTS),
        })
    }

    /// Verify a signature.
    ///
    /// Out-of-range components, invalid public keys and mismatches all give
    /// `Ok(false)`. `Err` means an arithmetic fault, such as a scalar with no
    /// inverse because the configured `n` is not prime.
    pub fn verify(
        &self,
        message: &[u8],
        signature: &Signature,
        public_key: &PublicKey,
    ) -> ApiResult<bool> {
        match self.try_verify(message, signature, public_key) {
            Ok(()) => Ok(true),
            Err(e) if e.is_fatal() => Err(e),
            Err(_) => Ok(false),
        }
    }

    /// Verify a signature, reporting why it was rejected
    pub fn try_verify(
        &self,
        message: &[u8],
        signature: &Signature,
        public_key: &PublicKey,
    ) -> ApiResult<()> {
        const CTX: &str = "ECDSA verify";

        let n = self.curve.order();
        let zn = self.curve.scalar_field();
        let (r, s) = (signature.r(), signature.s());

        for (name, v) in [("r", r), ("s", s)] {
            if v.is_zero() || v >= n {
                return Err(ApiError::InvalidSignatureRange {
                    context: CTX,
                    message: format!("{} is not in [1, n-1]", name),
                });
            }
        }

        let q = public_key.point();
        to_api_result(self.curve.validate_public_point(q), CTX)?;

        let e = zn.element(self.hash_message(message));
        let w = to_api_result(zn.inverse(&zn.element(s.clone())), CTX)?;
        let u1 = zn.mul(&e, &w);
        let u2 = zn.mul(&zn.element(r.clone()), &w);

        let u1g = to_api_result(self.curve.mul_generator(u1.value()), CTX)?;
        let u2q = to_api_result(self.curve.scalar_multiply(u2.value(), q), CTX)?;
        let x1 = match to_api_result(self.curve.add(&u1g, &u2q), CTX)? {
            Point::Affine { x, .. } => x.into_value(),
            Point::Identity => {
                return Err(ApiError::InvalidSignature {
                    context: CTX,
                    message: "verification point is the identity".to_string(),
                })
            }
        };

        let len = self.curve.scalar_len();
        let v = x1 % n;
        if !ct_eq(to_fixed_be(&v, len), to_fixed_be(r, len)) {
            return Err(ApiError::InvalidSignature {
                context: CTX,
                message: "signature does not match".to_string(),
            });
        }

        Ok(())
    }

    /// Import a secret scalar, rejecting values outside `[1, n-1]`
    pub fn secret_key_from_scalar(&self, d: &BigUint) -> ApiResult<SecretKey> {
        if d.is_zero() || d >= self.curve.order() {
            return Err(ApiError::InvalidKey {
                context: "ECDSA secret key",
                message: "scalar is not in [1, n-1]".to_string(),
            });
        }
        Ok(SecretKey::from_scalar(d, self.curve.scalar_len()))
    }

    /// Import a fixed-width big-endian secret scalar
    pub fn secret_key_from_bytes(&self, bytes: &[u8]) -> ApiResult<SecretKey> {
        let len = self.curve.scalar_len();
        if bytes.len() != len {
            return Err(ApiError::InvalidLength {
                context: "ECDSA secret key",
                expected: len,
                actual: bytes.len(),
            });
        }
        self.secret_key_from_scalar(&BigUint::from_bytes_be(bytes))
    }

    /// `Q = d·G`
    pub fn derive_public_key(&self, secret_key: &SecretKey) -> ApiResult<PublicKey> {
        let d = self.checked_secret_scalar(secret_key)?;
        let q = to_api_result(self.curve.mul_generator(&d), "ECDSA public key")?;
        Ok(PublicKey::from_point(q))
    }

    /// Import a public key from affine coordinates
    pub fn public_key_from_affine(&self, x: BigUint, y: BigUint) -> ApiResult<PublicKey> {
        const CTX: &str = "ECDSA public key";
        let q = to_api_result(self.curve.point(x, y), CTX)?;
        to_api_result(self.curve.validate_public_point(&q), CTX)?;
        Ok(PublicKey::from_point(q))
    }

    /// Import a public key from uncompressed SEC1 bytes `0x04 || x || y`
    pub fn public_key_from_sec1_bytes(&self, bytes: &[u8]) -> ApiResult<PublicKey> {
        const CTX: &str = "ECDSA public key";
        let q = to_api_result(self.curve.decode_point(bytes), CTX)?;
        to_api_result(self.curve.validate_public_point(&q), CTX)?;
        Ok(PublicKey::from_point(q))
    }

    /// Uncompressed SEC1 encoding of a public key
    pub fn public_key_to_sec1_bytes(&self, public_key: &PublicKey) -> Vec<u8> {
        self.curve.encode_point(public_key.point())
    }

    /// Fixed-width `r || s`, each component padded to the byte length of `n`
    pub fn signature_to_bytes(&self, signature: &Signature) -> Vec<u8> {
        let len = self.curve.scalar_len();
        let mut out = to_fixed_be(signature.r(), len);
        out.extend_from_slice(&to_fixed_be(signature.s(), len));
        out
    }

    /// Parse fixed-width `r || s`. Range checks happen at verification.
    pub fn signature_from_bytes(&self, bytes: &[u8]) -> ApiResult<Signature> {
        let len = self.curve.scalar_len();
        if bytes.len() != 2 * len {
            return Err(ApiError::InvalidLength {
                context: "ECDSA signature",
                expected: 2 * len,
                actual: bytes.len(),
            });
        }
        let (r, s) = bytes.split_at(len);
        Ok(Signature::new(
            BigUint::from_bytes_be(r),
            BigUint::from_bytes_be(s),
        ))
    }

    fn checked_secret_scalar(&self, secret_key: &SecretKey) -> ApiResult<BigUint> {
        let d = secret_key.scalar();
        if d.is_zero() || &d >= self.curve.order() {
            return Err(ApiError::InvalidKey {
                context: "ECDSA secret key",
                message: "scalar is not in [1, n-1] for this curve".to_string(),
            });
        }
        Ok(d)
    }
}

impl<D: Digest + BlockSizeUser> Ecdsa<D> {
    /// Sign with an RFC 6979 deterministic nonce derived from the key and
    /// message using HMAC-`D`.
    pub fn sign_deterministic(
        &self,
        message: &[u8],
        secret_key: &SecretKey,
    ) -> ApiResult<Signature> {
        let d = self.checked_secret_scalar(secret_key)?;
        let h1 = D::digest(message);
        let mut nonces = Rfc6979Nonce::<D>::new(&self.curve, &d, &h1)?;
        self.sign_with_nonce_source(message, secret_key, &mut nonces)
    }
}

impl<D: Digest> SignatureTrait for Ecdsa<D> {
    type PublicKey = PublicKey;
    type SecretKey = SecretKey;
    type SignatureData = Signature;
    type KeyPair = KeyPair;

    fn name(&self) -> &'static str {
        "ECDSA"
    }

    fn keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> ApiResult<Self::KeyPair> {
        self.keygen(rng)
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.public_key().clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.secret_key().clone()
    }

    fn sign<R: CryptoRng + RngCore>(
        &self,
        message: &[u8],
        secret_key: &Self::SecretKey,
        rng: &mut R,
    ) -> ApiResult<Self::SignatureData> {
        Ecdsa::sign(self, message, secret_key, rng)
    }

    fn verify(
        &self,
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<bool> {
        Ecdsa::verify(self, message, signature, public_key)
    }
}
