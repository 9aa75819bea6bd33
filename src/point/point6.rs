use crate::error::Result;
use crate::point::PointN;
use crate::rank::Rank;

/// A minimal contract for 6D points. The coordinates are, in order, x, y, z, w, u and v.
///
/// Six-dimensional points can describe a position plus an orientation, or a position plus a
/// velocity, among other pairings of two 3D quantities.
pub trait Point6: PointN {
    /// The first (x) coordinate.
    fn x(&self) -> f32;

    fn xi(&self) -> i32 {
        self.x() as i32
    }

    fn set_x(&mut self, next: f32) -> &mut Self;

    fn set_xi(&mut self, next: i32) -> &mut Self {
        self.set_x(next as f32)
    }

    /// The second (y) coordinate.
    fn y(&self) -> f32;

    fn yi(&self) -> i32 {
        self.y() as i32
    }

    fn set_y(&mut self, next: f32) -> &mut Self;

    fn set_yi(&mut self, next: i32) -> &mut Self {
        self.set_y(next as f32)
    }

    /// The third (z) coordinate.
    fn z(&self) -> f32;

    fn zi(&self) -> i32 {
        self.z() as i32
    }

    fn set_z(&mut self, next: f32) -> &mut Self;

    fn set_zi(&mut self, next: i32) -> &mut Self {
        self.set_z(next as f32)
    }

    /// The fourth (w) coordinate.
    fn w(&self) -> f32;

    fn wi(&self) -> i32 {
        self.w() as i32
    }

    fn set_w(&mut self, next: f32) -> &mut Self;

    fn set_wi(&mut self, next: i32) -> &mut Self {
        self.set_w(next as f32)
    }

    /// The fifth (u) coordinate.
    fn u(&self) -> f32;

    fn ui(&self) -> i32 {
        self.u() as i32
    }

    fn set_u(&mut self, next: f32) -> &mut Self;

    fn set_ui(&mut self, next: i32) -> &mut Self {
        self.set_u(next as f32)
    }

    /// The sixth (v) coordinate.
    fn v(&self) -> f32;

    fn vi(&self) -> i32 {
        self.v() as i32
    }

    fn set_v(&mut self, next: f32) -> &mut Self;

    fn set_vi(&mut self, next: i32) -> &mut Self {
        self.set_v(next as f32)
    }

    /// Sets all 6 coordinates at once.
    fn set_xyzwuv(&mut self, x: f32, y: f32, z: f32, w: f32, u: f32, v: f32) -> &mut Self;

    /// Sets all 6 coordinates from ints; defaults to converting each to `f32` and calling
    /// [`set_xyzwuv`](Self::set_xyzwuv).
    fn set_xyzwuvi(&mut self, x: i32, y: i32, z: i32, w: i32, u: i32, v: i32) -> &mut Self {
        self.set_xyzwuv(x as f32, y as f32, z as f32, w as f32, u as f32, v as f32)
    }

    /// All coordinates, in order.
    fn xyzwuv(&self) -> [f32; 6] {
        [self.x(), self.y(), self.z(), self.w(), self.u(), self.v()]
    }

    /// All coordinates as ints, read through the int accessors.
    fn xyzwuvi(&self) -> [i32; 6] {
        [self.xi(), self.yi(), self.zi(), self.wi(), self.ui(), self.vi()]
    }

    /// Sets every coordinate from a slice of exactly 6 values, or returns
    /// [`CruxError::RankMismatch`](crate::CruxError::RankMismatch) without touching the point.
    fn try_set_xyzwuv(&mut self, coords: &[f32]) -> Result<&mut Self> {
        Rank::Six.check(coords.len())?;
        Ok(self.set_xyzwuv(coords[0], coords[1], coords[2], coords[3], coords[4], coords[5]))
    }

    /// Copies the coordinates of any other 6D point into this one, through the int accessors
    /// when neither type stores floats.
    fn assign<Q: Point6>(&mut self, other: &Q) -> &mut Self
    where
        Self: Sized,
    {
        if Self::FLOATING_POINT || Q::FLOATING_POINT {
            self.set_xyzwuv(other.x(), other.y(), other.z(), other.w(), other.u(), other.v())
        } else {
            self.set_xyzwuvi(other.xi(), other.yi(), other.zi(), other.wi(), other.ui(), other.vi())
        }
    }
}
