//! Curve parameters and the group law

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use ecsign_params::CurveConstants;

use super::point::Point;
use crate::error::{validate, Error, Result};
use crate::field::{FieldElement, PrimeField};

/// Upper bound on rejection-sampling draws in [`EllipticCurve::random_scalar`].
///
/// Each draw succeeds with probability at least 1/4, so hitting the bound
/// means the random source is broken.
pub const MAX_SAMPLING_ATTEMPTS: usize = 128;

/// SEC1 tag for an uncompressed point
const SEC1_UNCOMPRESSED: u8 = 0x04;

/// SEC1 encoding of the point at infinity
const SEC1_IDENTITY: u8 = 0x00;

/// Raw parameters of `y² = x³ + a·x + b` over `F_p`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParams {
    /// Field prime
    pub p: BigUint,
    /// Coefficient a
    pub a: BigUint,
    /// Coefficient b
    pub b: BigUint,
    /// Generator x-coordinate
    pub gx: BigUint,
    /// Generator y-coordinate
    pub gy: BigUint,
    /// Order of the generator
    pub n: BigUint,
    /// Cofactor
    pub h: u32,
}

impl CurveParams {
    /// Parse hex-encoded constants
    pub fn from_constants(c: &CurveConstants<'_>) -> Result<Self> {
        Ok(CurveParams {
            p: parse_hex("p", c.p)?,
            a: parse_hex("a", c.a)?,
            b: parse_hex("b", c.b)?,
            gx: parse_hex("gx", c.gx)?,
            gy: parse_hex("gy", c.gy)?,
            n: parse_hex("n", c.n)?,
            h: c.h,
        })
    }
}

fn parse_hex(name: &'static str, s: &str) -> Result<BigUint> {
    let digits = s.trim_start_matches("0x");
    BigUint::parse_bytes(digits.as_bytes(), 16)
        .ok_or_else(|| Error::param(name, format!("not a hexadecimal integer: {s:?}")))
}

/// A short Weierstrass curve with a distinguished generator
///
/// Immutable after construction and safe to share between threads.
#[derive(Clone, Debug)]
pub struct EllipticCurve {
    name: String,
    field: PrimeField,
    scalars: PrimeField,
    a: FieldElement,
    b: FieldElement,
    generator: Point,
    cofactor: u32,
}

impl EllipticCurve {
    /// Build a curve from raw parameters.
    ///
    /// Checks that `p` is odd and greater than 3, that `a`, `b` and the
    /// generator coordinates are canonical, that the curve is non-singular and
    /// that the generator lies on it. `n` is trusted to be the order of `G`.
    pub fn new(name: impl Into<String>, params: CurveParams) -> Result<Self> {
        let CurveParams {
            p,
            a,
            b,
            gx,
            gy,
            n,
            h,
        } = params;

        validate::parameter(
            p > BigUint::from(3u32) && p.bit(0),
            "p",
            "field prime must be odd and greater than 3",
        )?;
        validate::parameter(n > BigUint::one(), "n", "group order must exceed one")?;
        validate::parameter(h >= 1, "h", "cofactor must be at least one")?;

        let field = PrimeField::new(p)?;
        let scalars = PrimeField::new(n)?;
        let a = field
            .try_element(a)
            .map_err(|_| Error::param("a", "coefficient must be smaller than p"))?;
        let b = field
            .try_element(b)
            .map_err(|_| Error::param("b", "coefficient must be smaller than p"))?;

        // 4a³ + 27b² ≢ 0
        let a3 = field.mul(&field.square(&a), &a);
        let disc = field.add(
            &field.mul(&field.from_u64(4), &a3),
            &field.mul(&field.from_u64(27), &field.square(&b)),
        );
        validate::parameter(!disc.is_zero(), "a, b", "curve is singular")?;

        let gx = field
            .try_element(gx)
            .map_err(|_| Error::param("gx", "coordinate must be smaller than p"))?;
        let gy = field
            .try_element(gy)
            .map_err(|_| Error::param("gy", "coordinate must be smaller than p"))?;

        let mut curve = EllipticCurve {
            name: name.into(),
            field,
            scalars,
            a,
            b,
            generator: Point::Identity,
            cofactor: h,
        };
        validate::on_curve(curve.satisfies(&gx, &gy), "generator")?;
        curve.generator = Point::Affine { x: gx, y: gy };
        Ok(curve)
    }

    /// Build a curve from a named parameter set
    pub fn from_constants(c: &CurveConstants<'_>) -> Result<Self> {
        Self::new(c.name, CurveParams::from_constants(c)?)
    }

    /// secp256k1
    pub fn secp256k1() -> Result<Self> {
        Self::from_constants(&ecsign_params::SECP256K1)
    }

    /// NIST P-256
    pub fn p256() -> Result<Self> {
        Self::from_constants(&ecsign_params::NIST_P256)
    }

    /// Curve name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Coordinate field `F_p`
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// Scalar field `Z_n`
    pub fn scalar_field(&self) -> &PrimeField {
        &self.scalars
    }

    /// Coefficient a
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    /// Coefficient b
    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// Order `n` of the generator
    pub fn order(&self) -> &BigUint {
        self.scalars.modulus()
    }

    /// Cofactor `h`
    pub fn cofactor(&self) -> u32 {
        self.cofactor
    }

    /// The generator `G`
    pub fn generator(&self) -> &Point {
        &self.generator
    }

    /// Bytes per encoded coordinate
    pub fn coordinate_len(&self) -> usize {
        self.field.byte_len()
    }

    /// Bytes per encoded scalar
    pub fn scalar_len(&self) -> usize {
        self.scalars.byte_len()
    }

    /// Validated constructor for an affine point
    pub fn point(&self, x: BigUint, y: BigUint) -> Result<Point> {
        let x = self
            .field
            .try_element(x)
            .map_err(|_| Error::NotOnCurve {
                context: "x-coordinate out of field range",
            })?;
        let y = self
            .field
            .try_element(y)
            .map_err(|_| Error::NotOnCurve {
                context: "y-coordinate out of field range",
            })?;
        validate::on_curve(self.satisfies(&x, &y), "affine point")?;
        Ok(Point::Affine { x, y })
    }

    /// True for the identity; otherwise checks `y² ≡ x³ + a·x + b (mod p)`
    pub fn is_on_curve(&self, point: &Point) -> bool {
        match point {
            Point::Identity => true,
            Point::Affine { x, y } => self.satisfies(x, y),
        }
    }

    fn satisfies(&self, x: &FieldElement, y: &FieldElement) -> bool {
        let f = &self.field;
        if !f.contains(x.value()) || !f.contains(y.value()) {
            return false;
        }
        let lhs = f.square(y);
        let x3 = f.mul(&f.square(x), x);
        let rhs = f.add(&f.add(&x3, &f.mul(&self.a, x)), &self.b);
        lhs == rhs
    }

    /// `-P`
    pub fn negate(&self, point: &Point) -> Point {
        match point {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::Affine {
                x: x.clone(),
                y: self.field.neg(y),
            },
        }
    }

    /// `P + Q` under the chord-and-tangent group law.
    ///
    /// Fails with [`Error::NotOnCurve`] when either operand is not a point of
    /// this curve.
    pub fn add(&self, p: &Point, q: &Point) -> Result<Point> {
        validate::on_curve(self.is_on_curve(p), "point addition")?;
        validate::on_curve(self.is_on_curve(q), "point addition")?;
        self.add_points(p, q)
    }

    /// `2P`, failing with [`Error::NotOnCurve`] for a foreign point
    pub fn double(&self, p: &Point) -> Result<Point> {
        validate::on_curve(self.is_on_curve(p), "point doubling")?;
        self.double_point(p)
    }

    // Operands must already be on the curve.
    fn add_points(&self, p: &Point, q: &Point) -> Result<Point> {
        match (p, q) {
            (Point::Identity, _) => Ok(q.clone()),
            (_, Point::Identity) => Ok(p.clone()),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => {
                if x1 == x2 {
                    // Q = -P, including the vertical tangent at y = 0
                    if y1 != y2 || y1.is_zero() {
                        return Ok(Point::Identity);
                    }
                    return self.double_point(p);
                }

                let f = &self.field;
                // λ = (y₂ − y₁) / (x₂ − x₁)
                let dx_inv = f.inverse(&f.sub(x2, x1))?;
                let lambda = f.mul(&f.sub(y2, y1), &dx_inv);
                Ok(self.third_point(&lambda, x1, y1, x2))
            }
        }
    }

    fn double_point(&self, p: &Point) -> Result<Point> {
        match p {
            Point::Identity => Ok(Point::Identity),
            Point::Affine { x, y } => {
                if y.is_zero() {
                    return Ok(Point::Identity);
                }

                let f = &self.field;
                // λ = (3·x² + a) / (2·y)
                let x_sq = f.square(x);
                let num = f.add(&f.add(&f.add(&x_sq, &x_sq), &x_sq), &self.a);
                let den_inv = f.inverse(&f.add(y, y))?;
                let lambda = f.mul(&num, &den_inv);
                Ok(self.third_point(&lambda, x, y, x))
            }
        }
    }

    /// Reflected third intersection of the line with slope `λ` through
    /// `(x₁, y₁)` and a point with x-coordinate `x₂`.
    fn third_point(
        &self,
        lambda: &FieldElement,
        x1: &FieldElement,
        y1: &FieldElement,
        x2: &FieldElement,
    ) -> Point {
        let f = &self.field;
        // x₃ = λ² − x₁ − x₂
        let x3 = f.sub(&f.sub(&f.square(lambda), x1), x2);
        // y₃ = λ·(x₁ − x₃) − y₁
        let y3 = f.sub(&f.mul(lambda, &f.sub(x1, &x3)), y1);
        let r = Point::Affine { x: x3, y: y3 };
        debug_assert!(self.is_on_curve(&r));
        r
    }

    /// `k·P` by double-and-add over the bits of `k`, most significant first.
    ///
    /// `k` is used as given, not reduced modulo `n`; callers that work with
    /// scalars reduce them first. Not constant time.
    pub fn scalar_multiply(&self, k: &BigUint, p: &Point) -> Result<Point> {
        validate::on_curve(self.is_on_curve(p), "scalar multiplication")?;
        if k.is_zero() || p.is_identity() {
            return Ok(Point::Identity);
        }

        let mut acc = Point::Identity;
        for i in (0..k.bits()).rev() {
            acc = self.double_point(&acc)?;
            if k.bit(i) {
                acc = self.add_points(&acc, p)?;
            }
        }
        Ok(acc)
    }

    /// `k·G`
    pub fn mul_generator(&self, k: &BigUint) -> Result<Point> {
        self.scalar_multiply(k, &self.generator)
    }

    /// Draw a scalar uniformly from `[1, n-1]` by rejection sampling.
    pub fn random_scalar<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<BigUint> {
        let n = self.order();
        let len = self.scalar_len();
        let excess_bits = (len as u64) * 8 - n.bits();
        let top_mask = 0xFFu8 >> excess_bits;

        let mut buf = Zeroizing::new(vec![0u8; len]);
        for _ in 0..MAX_SAMPLING_ATTEMPTS {
            rng.try_fill_bytes(&mut buf[..]).map_err(|e| Error::Randomness {
                context: "scalar sampling",
                details: e.to_string(),
            })?;
            buf[0] &= top_mask;

            let k = BigUint::from_bytes_be(&buf);
            if !k.is_zero() && &k < n {
                return Ok(k);
            }
        }

        Err(Error::Randomness {
            context: "scalar sampling",
            details: format!(
                "no scalar in [1, n-1] after {} draws",
                MAX_SAMPLING_ATTEMPTS
            ),
        })
    }

    /// Check that `q` is usable as a public key on this curve: finite, on the
    /// curve and, when the cofactor is not one, in the subgroup generated by `G`.
    pub fn validate_public_point(&self, q: &Point) -> Result<()> {
        if q.is_identity() {
            return Err(Error::param("public point", "point at infinity"));
        }
        validate::on_curve(self.is_on_curve(q), "public point")?;
        if self.cofactor != 1 && !self.scalar_multiply(self.order(), q)?.is_identity() {
            return Err(Error::param(
                "public point",
                "point is not in the prime-order subgroup",
            ));
        }
        Ok(())
    }

    /// SEC1 encoding: `0x04 || x || y`, or a single `0x00` for the identity
    pub fn encode_point(&self, point: &Point) -> Vec<u8> {
        match point {
            Point::Identity => vec![SEC1_IDENTITY],
            Point::Affine { x, y } => {
                let mut out = Vec::with_capacity(1 + 2 * self.coordinate_len());
                out.push(SEC1_UNCOMPRESSED);
                out.extend_from_slice(&self.field.to_bytes_be(x));
                out.extend_from_slice(&self.field.to_bytes_be(y));
                out
            }
        }
    }

    /// Decode an uncompressed SEC1 point, checking it lies on the curve
    pub fn decode_point(&self, bytes: &[u8]) -> Result<Point> {
        if let [SEC1_IDENTITY] = bytes {
            return Ok(Point::Identity);
        }

        let len = self.coordinate_len();
        validate::length("SEC1 uncompressed point", bytes.len(), 1 + 2 * len)?;
        if bytes[0] != SEC1_UNCOMPRESSED {
            return Err(Error::param(
                "SEC1 point",
                "invalid uncompressed point prefix (expected 0x04)",
            ));
        }

        let x = BigUint::from_bytes_be(&bytes[1..1 + len]);
        let y = BigUint::from_bytes_be(&bytes[1 + len..]);
        self.point(x, y)
    }
}
