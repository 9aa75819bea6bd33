//! Point contracts, from the rank-polymorphic [`PointN`] to the per-dimension [`Point2`]
//! through [`Point6`], plus implementations for common foreign point types.
//!
//! The per-dimension traits are siblings: each extends [`PointN`] directly and none extends
//! another. A type that is useful as both a 2D and a 3D point implements both contracts
//! independently. Because [`PointN`] carries a single [`RANK`](PointN::RANK), such a type
//! reports the rank of whichever contract it was built around; callers that need the other
//! view go through that trait's accessors.
//!
//! ## Setting coordinates
//!
//! Every setter takes `&mut self` and returns `&mut Self` so calls can be chained. What
//! happens to other handles on the same data depends on the implementing type, never on the
//! call:
//!
//! - plain values (`[f32; 2]`, [`geo_types::Coord`], ...) are edited in place;
//! - shared values ([`Rc`](std::rc::Rc), [`Arc`](std::sync::Arc)) are copied on write, so
//!   the slot being set receives a new value and every other holder keeps the old one.
//!
//! Nothing here synchronizes. Mutating a value that another thread can reach is only safe if
//! the implementing type arranges it.

mod array;
#[cfg(feature = "geo-types")]
mod geo;
mod point2;
mod point3;
mod point4;
mod point5;
mod point6;
mod scalar;
mod shared;

pub use point2::Point2;
pub use point3::Point3;
pub use point4::Point4;
pub use point5::Point5;
pub use point6::Point6;
pub use scalar::Scalar;

/// The capability set every point supports, regardless of its dimension.
///
/// Dimension-agnostic code, like [`PointPair`](crate::PointPair), is written against this
/// trait alone.
pub trait PointN {
    /// Whether the canonical storage of this type is floating-point (`true`) or integer
    /// (`false`).
    ///
    /// This is a property of the type, not of any one value.
    const FLOATING_POINT: bool;

    /// How many coordinates this type of point has; also called its dimensionality.
    ///
    /// Must match the per-dimension contract the type implements: 2 for [`Point2`], 3 for
    /// [`Point3`], and so on up to 6 for [`Point6`].
    const RANK: usize;

    /// Returns [`Self::FLOATING_POINT`].
    ///
    /// When this is `false`, the integer accessors (`xi()`, `set_xi()`, ...) are overridden to
    /// read and write the stored integers directly.
    fn floating_point(&self) -> bool {
        Self::FLOATING_POINT
    }

    /// Returns [`Self::RANK`].
    fn rank(&self) -> usize {
        Self::RANK
    }

    /// Copies every coordinate of `other` into this point.
    ///
    /// Mutable types overwrite their own storage; shared immutable types replace the value held
    /// in `self` and leave every other holder untouched.
    fn set(&mut self, other: &Self) -> &mut Self;
}
