//! Property-based tests for curve arithmetic and ECDSA

use ecsign_algorithms::{BigUint, EllipticCurve, Point};
use ecsign_sign::{Ecdsa, Signature};
use ecsign_tests::{seeded_rng, toy_curve, toy_ecdsa};
use proptest::prelude::*;
use std::sync::OnceLock;

fn secp256k1() -> &'static Ecdsa {
    static SCHEME: OnceLock<Ecdsa> = OnceLock::new();
    SCHEME.get_or_init(|| Ecdsa::secp256k1().expect("secp256k1 parameters are valid"))
}

/// Every point of the toy curve's prime-order subgroup
fn toy_subgroup(curve: &EllipticCurve) -> Vec<Point> {
    (0u32..5)
        .map(|k| curve.mul_generator(&BigUint::from(k)).unwrap())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn sign_verify_roundtrip(seed in any::<u64>(), message in prop::collection::vec(any::<u8>(), 0..256)) {
        let ecdsa = secp256k1();
        let mut rng = seeded_rng(seed);
        let kp = ecdsa.keygen(&mut rng).unwrap();
        let sig = ecdsa.sign(&message, kp.secret_key(), &mut rng).unwrap();

        let n = ecdsa.curve().order();
        prop_assert!(sig.r() < n && sig.s() < n);
        prop_assert!(ecdsa.verify(&message, &sig, kp.public_key()).unwrap());
    }

    #[test]
    fn modified_message_fails(
        seed in any::<u64>(),
        message in prop::collection::vec(any::<u8>(), 1..128),
        index in any::<prop::sample::Index>(),
        flip in 1u8..=255,
    ) {
        let ecdsa = secp256k1();
        let mut rng = seeded_rng(seed);
        let kp = ecdsa.keygen(&mut rng).unwrap();
        let sig = ecdsa.sign(&message, kp.secret_key(), &mut rng).unwrap();

        let mut tampered = message.clone();
        tampered[index.index(message.len())] ^= flip;
        prop_assert!(!ecdsa.verify(&tampered, &sig, kp.public_key()).unwrap());
    }

    #[test]
    fn tampered_components_fail(seed in any::<u64>(), delta in 1u32..1000) {
        let ecdsa = secp256k1();
        let mut rng = seeded_rng(seed);
        let kp = ecdsa.keygen(&mut rng).unwrap();
        let sig = ecdsa.sign(b"fixed message", kp.secret_key(), &mut rng).unwrap();

        let n = ecdsa.curve().order();
        let bump = |v: &BigUint| (v + delta) % n;
        let bad_r = Signature::new(bump(sig.r()), sig.s().clone());
        let bad_s = Signature::new(sig.r().clone(), bump(sig.s()));
        prop_assert!(!ecdsa.verify(b"fixed message", &bad_r, kp.public_key()).unwrap());
        prop_assert!(!ecdsa.verify(b"fixed message", &bad_s, kp.public_key()).unwrap());
    }

    #[test]
    fn scalar_multiplication_distributes(a in 0u64..1_000_000, b in 0u64..1_000_000) {
        let curve = secp256k1().curve();
        let (a, b) = (BigUint::from(a), BigUint::from(b));
        let lhs = curve.mul_generator(&(&a + &b)).unwrap();
        let rhs = curve
            .add(&curve.mul_generator(&a).unwrap(), &curve.mul_generator(&b).unwrap())
            .unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn order_annihilates_random_points(seed in any::<u64>()) {
        let curve = secp256k1().curve();
        let k = curve.random_scalar(&mut seeded_rng(seed)).unwrap();
        let p = curve.mul_generator(&k).unwrap();
        prop_assert!(curve.scalar_multiply(curve.order(), &p).unwrap().is_identity());
        prop_assert!(curve.add(&p, &curve.negate(&p)).unwrap().is_identity());
    }
}

proptest! {
    #[test]
    fn toy_group_law(i in 0usize..5, j in 0usize..5, k in 0usize..5) {
        let curve = toy_curve();
        let pts = toy_subgroup(&curve);
        let (p, q, r) = (&pts[i], &pts[j], &pts[k]);

        // Commutative, associative, identity, inverses
        prop_assert_eq!(curve.add(p, q).unwrap(), curve.add(q, p).unwrap());
        let left = curve.add(&curve.add(p, q).unwrap(), r).unwrap();
        let right = curve.add(p, &curve.add(q, r).unwrap()).unwrap();
        prop_assert_eq!(left, right);
        prop_assert_eq!(&curve.add(p, &Point::Identity).unwrap(), p);
        prop_assert!(curve.add(p, &curve.negate(p)).unwrap().is_identity());
        prop_assert_eq!(curve.double(p).unwrap(), curve.add(p, p).unwrap());

        // Indices add modulo the order
        prop_assert_eq!(&curve.add(p, q).unwrap(), &pts[(i + j) % 5]);
    }

    #[test]
    fn toy_sign_verify(seed in any::<u64>(), message in prop::collection::vec(any::<u8>(), 0..64)) {
        let ecdsa = toy_ecdsa();
        let mut rng = seeded_rng(seed);
        let kp = ecdsa.keygen(&mut rng).unwrap();

        // Some (key, message) pairs have no valid nonce on a 5-element group
        if let Ok(sig) = ecdsa.sign(&message, kp.secret_key(), &mut rng) {
            prop_assert!(ecdsa.verify(&message, &sig, kp.public_key()).unwrap());
        }
    }
}
