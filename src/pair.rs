use std::fmt::{Debug, Display};

use crate::point::PointN;

/// Two points in order.
///
/// A `PointPair` can represent a ray, where `a` is the start and `b` is the direction the ray
/// points in. It can also represent a collision, where `a` is the collision point and `b` is
/// the normal vector. The pair itself does not care which.
///
/// `P` may be any point type, of any rank, backed by floats or ints. Setting a pair copies into
/// the existing `a` and `b` slots through [`PointN::set`], so for point types that are edited
/// in place the slots keep their identity while their coordinates change.
///
/// Equality and hashing are structural and order-sensitive: `(p, q)` and `(q, p)` are different
/// pairs whenever `p != q`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PointPair<P> {
    /// The starting point of a ray or the collision point of a collision.
    pub a: P,

    /// The direction of a ray or the normal vector of a collision.
    pub b: P,
}

impl<P> PointPair<P> {
    /// Creates a `PointPair` from `a` (start or collision point) and `b` (direction or normal).
    pub fn new(a: P, b: P) -> Self {
        Self { a, b }
    }

    /// Consume this pair, returning `(a, b)`.
    pub fn into_inner(self) -> (P, P) {
        (self.a, self.b)
    }
}

impl<P: PointN> PointPair<P> {
    /// Sets this pair from another pair, copying `other.a` into `a` and `other.b` into `b`.
    pub fn set(&mut self, other: &PointPair<P>) -> &mut Self {
        self.a.set(&other.a);
        self.b.set(&other.b);
        self
    }

    /// Sets this pair from the given start (or collision) and direction (or normal) points.
    pub fn set_points(&mut self, a: &P, b: &P) -> &mut Self {
        self.a.set(a);
        self.b.set(b);
        self
    }
}

impl<P> From<(P, P)> for PointPair<P> {
    fn from(value: (P, P)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl<P: Debug> Display for PointPair<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{a {:?} to b {:?}}}", self.a, self.b)
    }
}
