//! End-to-end ECDSA scenarios

use ecsign_algorithms::{BigUint, EllipticCurve, Point};
use ecsign_api::{Error, Signature as SignatureTrait};
use ecsign_params::traditional::ecdsa::{
    SECP256K1_POINT_UNCOMPRESSED_SIZE, SECP256K1_SCALAR_SIZE, SECP256K1_SIGNATURE_SIZE,
};
use ecsign_params::{CurveConstants, SECP256K1};
use ecsign_sign::{Ecdsa, Signature};
use ecsign_tests::{big, seeded_rng, toy_ecdsa, FailingRng, FixedRng};
use rand::rngs::OsRng;

#[test]
fn test_hello_ecdsa_secp256k1() {
    let ecdsa = Ecdsa::secp256k1().unwrap();
    let mut rng = OsRng;

    let keypair = ecdsa.keygen(&mut rng).unwrap();
    let message = b"Hello, ECDSA!";

    let signature = ecdsa.sign(message, keypair.secret_key(), &mut rng).unwrap();
    let n = ecdsa.curve().order();
    assert!(signature.r() < n && signature.s() < n);

    assert!(ecdsa.verify(message, &signature, keypair.public_key()).unwrap());

    // Modified message
    assert!(!ecdsa
        .verify(b"Hello, ECDSA?", &signature, keypair.public_key())
        .unwrap());

    // Different key
    let other = ecdsa.keygen(&mut rng).unwrap();
    assert!(!ecdsa.verify(message, &signature, other.public_key()).unwrap());
}

#[test]
fn test_sign_verify_through_wire_encodings() {
    let ecdsa = Ecdsa::secp256k1().unwrap();
    let mut rng = seeded_rng(2024);
    let keypair = ecdsa.keygen(&mut rng).unwrap();
    let message = b"transfer 10 units to alice";

    let sig = ecdsa.sign(message, keypair.secret_key(), &mut rng).unwrap();

    // Everything crosses the boundary as bytes
    let pk_bytes = ecdsa.public_key_to_sec1_bytes(keypair.public_key());
    let sig_bytes = ecdsa.signature_to_bytes(&sig);
    let sk_bytes = keypair.secret_key().as_ref().to_vec();
    assert_eq!(pk_bytes.len(), SECP256K1_POINT_UNCOMPRESSED_SIZE);
    assert_eq!(sig_bytes.len(), SECP256K1_SIGNATURE_SIZE);
    assert_eq!(sk_bytes.len(), SECP256K1_SCALAR_SIZE);

    let pk = ecdsa.public_key_from_sec1_bytes(&pk_bytes).unwrap();
    let sig2 = ecdsa.signature_from_bytes(&sig_bytes).unwrap();
    assert!(ecdsa.verify(message, &sig2, &pk).unwrap());

    // Secret key survives export and import
    let sk = ecdsa.secret_key_from_bytes(&sk_bytes).unwrap();
    assert_eq!(&ecdsa.derive_public_key(&sk).unwrap(), keypair.public_key());

    // Flip one bit of s on the wire
    let mut tampered = sig_bytes.clone();
    tampered[63] ^= 0x01;
    let sig3 = ecdsa.signature_from_bytes(&tampered).unwrap();
    assert!(!ecdsa.verify(message, &sig3, &pk).unwrap());
}

#[test]
fn test_secp256k1_public_key_vector() {
    // d = 1, 2, 3 give G, 2G, 3G
    let ecdsa = Ecdsa::secp256k1().unwrap();
    let expected = [
        (
            "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
            "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8",
        ),
        (
            "C6047F9441ED7D6D3045406E95C07CD85C778E4B8CEF3CA7ABAC09B95C709EE5",
            "1AE168FEA63DC339A3C58419466CEAEEF7F632653266D0E1236431A950CFE52A",
        ),
        (
            "F9308A019258C31049344F85F89D5229B531C845836F99B08601F113BCE036F9",
            "388F7B0F632DE8140FE337E62A37F3566500A99934C2231B6CB9FD7584B8E672",
        ),
    ];

    for (d, (x, y)) in (1u32..).zip(expected.iter()) {
        let sk = ecdsa.secret_key_from_scalar(&BigUint::from(d)).unwrap();
        let pk = ecdsa.derive_public_key(&sk).unwrap();
        assert_eq!(pk.x().unwrap(), &big(x), "x of {d}G");
        assert_eq!(pk.y().unwrap(), &big(y), "y of {d}G");

        let sec1 = ecdsa.public_key_to_sec1_bytes(&pk);
        assert_eq!(hex::encode_upper(&sec1[1..33]), *x);
    }
}

#[test]
fn test_deterministic_signing_is_stable() {
    let ecdsa = Ecdsa::secp256k1().unwrap();
    let sk = ecdsa
        .secret_key_from_scalar(&big(
            "4C0883A69102937D6231471B5DBB6204FE5129617082792AE468D01A3F362318",
        ))
        .unwrap();
    let pk = ecdsa.derive_public_key(&sk).unwrap();

    let a = ecdsa.sign_deterministic(b"message one", &sk).unwrap();
    let b = ecdsa.sign_deterministic(b"message one", &sk).unwrap();
    let c = ecdsa.sign_deterministic(b"message two", &sk).unwrap();
    assert_eq!(a, b);
    assert_ne!(a.r(), c.r());
    assert!(ecdsa.verify(b"message one", &a, &pk).unwrap());
    assert!(ecdsa.verify(b"message two", &c, &pk).unwrap());
}

#[test]
fn test_p256_roundtrip() {
    let ecdsa = Ecdsa::p256().unwrap();
    let mut rng = seeded_rng(256);
    let kp = ecdsa.keygen(&mut rng).unwrap();
    let sig = ecdsa.sign(b"p-256", kp.secret_key(), &mut rng).unwrap();
    assert!(ecdsa.verify(b"p-256", &sig, kp.public_key()).unwrap());
}

#[test]
fn test_signature_from_other_curve_rejected() {
    let k1 = Ecdsa::secp256k1().unwrap();
    let p256 = Ecdsa::p256().unwrap();
    let mut rng = seeded_rng(9);

    let kp = k1.keygen(&mut rng).unwrap();
    let sig = k1.sign(b"msg", kp.secret_key(), &mut rng).unwrap();

    // secp256k1 point is not on P-256
    assert!(!p256.verify(b"msg", &sig, kp.public_key()).unwrap());
    assert!(matches!(
        p256.try_verify(b"msg", &sig, kp.public_key()),
        Err(Error::PointNotOnCurve { .. })
    ));
}

#[test]
fn test_custom_curve_from_constants() {
    let constants = CurveConstants {
        name: "toy-97",
        p: "61",
        a: "2",
        b: "3",
        gx: "3",
        gy: "6",
        n: "5",
        h: 20,
    };
    let curve = EllipticCurve::from_constants(&constants).unwrap();
    assert_eq!(curve.name(), "toy-97");
    assert_eq!(curve.order(), &BigUint::from(5u32));

    // H("hello") ≡ 1, so d = 1 signs with either usable nonce
    let ecdsa: Ecdsa = Ecdsa::new(curve);
    let sk = ecdsa.secret_key_from_scalar(&BigUint::from(1u32)).unwrap();
    let pk = ecdsa.derive_public_key(&sk).unwrap();
    let sig = ecdsa.sign(b"hello", &sk, &mut seeded_rng(5)).unwrap();
    assert!(ecdsa.verify(b"hello", &sig, &pk).unwrap());
}

#[test]
fn test_bad_constants_rejected() {
    let mut broken = SECP256K1;
    broken.gy = "0";
    assert!(EllipticCurve::from_constants(&broken).is_err());

    let mut garbage = SECP256K1;
    garbage.p = "not hex";
    assert!(EllipticCurve::from_constants(&garbage).is_err());
}

#[test]
fn test_toy_curve_retry_with_fixed_rng() {
    let ecdsa = toy_ecdsa();
    let sk = ecdsa.secret_key_from_scalar(&BigUint::from(1u32)).unwrap();
    let pk = ecdsa.derive_public_key(&sk).unwrap();

    // First draw k = 2 gives r = 0, second draw k = 1 succeeds
    let mut rng = FixedRng::new(&[2, 1]);
    let sig = ecdsa.sign(b"hello", &sk, &mut rng).unwrap();
    assert_eq!(rng.consumed(), 2);
    assert_eq!(sig, Signature::new(BigUint::from(3u32), BigUint::from(4u32)));
    assert!(ecdsa.verify(b"hello", &sig, &pk).unwrap());
}

#[test]
fn test_randomness_failures_are_fatal() {
    let ecdsa = Ecdsa::secp256k1().unwrap();

    let err = ecdsa.keygen(&mut FailingRng).unwrap_err();
    assert!(matches!(err, Error::InsufficientRandomness { .. }));
    assert!(err.is_fatal());

    // Zeros are never a valid scalar
    let mut zeros = FixedRng::new(&[0]);
    let err = ecdsa.keygen(&mut zeros).unwrap_err();
    assert!(matches!(err, Error::InsufficientRandomness { .. }));

    let kp = ecdsa.keygen(&mut OsRng).unwrap();
    assert!(matches!(
        ecdsa.sign(b"m", kp.secret_key(), &mut FailingRng),
        Err(Error::InsufficientRandomness { .. })
    ));
}

#[test]
fn test_verify_rejects_identity_result() {
    // Q = -G with r = s makes u₁·G + u₂·Q = (e - r)·w·G; choosing a message
    // where e ≡ r gives the identity.
    let ecdsa = toy_ecdsa();
    let curve = ecdsa.curve();
    let neg_g = curve.negate(curve.generator());
    let Point::Affine { x, y } = neg_g else {
        panic!("negated generator is finite");
    };
    let pk = ecdsa
        .public_key_from_affine(x.into_value(), y.into_value())
        .unwrap();

    // H("hello") ≡ 1 on the toy curve
    let sig = Signature::new(BigUint::from(1u32), BigUint::from(1u32));
    assert!(!ecdsa.verify(b"hello", &sig, &pk).unwrap());
    assert!(matches!(
        ecdsa.try_verify(b"hello", &sig, &pk),
        Err(Error::InvalidSignature { .. })
    ));
}

#[test]
fn test_generic_scheme_usage() {
    fn sign_and_check<S: SignatureTrait>(scheme: &S, seed: u64) -> bool {
        let mut rng = seeded_rng(seed);
        let kp = scheme.keypair(&mut rng).unwrap();
        let sig = scheme.sign(b"generic", &S::secret_key(&kp), &mut rng).unwrap();
        scheme.verify(b"generic", &sig, &S::public_key(&kp)).unwrap()
    }

    assert!(sign_and_check(&Ecdsa::secp256k1().unwrap(), 1));
    assert!(sign_and_check(&Ecdsa::p256().unwrap(), 2));
}
