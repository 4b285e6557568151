//! Curve points in affine coordinates

use core::fmt;

use crate::field::FieldElement;

/// A point on a short Weierstrass curve
///
/// Points do not carry their curve; every group operation lives on
/// [`EllipticCurve`](super::EllipticCurve). Build affine points through
/// [`EllipticCurve::point`](super::EllipticCurve::point) to have them
/// validated against the curve equation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Point {
    /// The point at infinity, neutral element of the group
    Identity,
    /// A finite point `(x, y)`
    Affine {
        /// x-coordinate
        x: FieldElement,
        /// y-coordinate
        y: FieldElement,
    },
}

impl Point {
    /// The point at infinity
    pub fn identity() -> Self {
        Point::Identity
    }

    /// Check if this point is the identity element
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// The x-coordinate, or `None` for the identity
    pub fn x(&self) -> Option<&FieldElement> {
        match self {
            Point::Identity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    /// The y-coordinate, or `None` for the identity
    pub fn y(&self) -> Option<&FieldElement> {
        match self {
            Point::Identity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Identity => write!(f, "Point(infinity)"),
            Point::Affine { x, y } => write!(f, "Point({}, {})", x, y),
        }
    }
}
