use crate::error::Result;
use crate::point::PointN;
use crate::rank::Rank;

/// A minimal contract for 3D points.
///
/// Only the float accessors, the float setters and [`set_xyz`](Self::set_xyz) are required;
/// the int accessors are derived from them unless overridden for integer-backed storage.
pub trait Point3: PointN {
    /// Gets the first (x) coordinate. Always a float, even if
    /// [`floating_point()`](PointN::floating_point) is false.
    fn x(&self) -> f32;

    /// Gets the first (x) coordinate as an int. Defaults to truncating [`x()`](Self::x);
    /// int-backed implementations should return their stored value instead.
    fn xi(&self) -> i32 {
        self.x() as i32
    }

    /// Sets the first (x) coordinate to `next`.
    fn set_x(&mut self, next: f32) -> &mut Self;

    /// Sets the first (x) coordinate from an int. Defaults to
    /// [`set_x(next as f32)`](Self::set_x); override to keep int, long or double storage
    /// exact.
    fn set_xi(&mut self, next: i32) -> &mut Self {
        self.set_x(next as f32)
    }

    /// Gets the second (y) coordinate. Always a float, even if
    /// [`floating_point()`](PointN::floating_point) is false.
    fn y(&self) -> f32;

    /// Gets the second (y) coordinate as an int. Defaults to truncating [`y()`](Self::y);
    /// int-backed implementations should return their stored value instead.
    fn yi(&self) -> i32 {
        self.y() as i32
    }

    /// Sets the second (y) coordinate to `next`.
    fn set_y(&mut self, next: f32) -> &mut Self;

    /// Sets the second (y) coordinate from an int. Defaults to
    /// [`set_y(next as f32)`](Self::set_y); override to keep int, long or double storage
    /// exact.
    fn set_yi(&mut self, next: i32) -> &mut Self {
        self.set_y(next as f32)
    }

    /// Gets the third (z) coordinate. Always a float, even if
    /// [`floating_point()`](PointN::floating_point) is false.
    fn z(&self) -> f32;

    /// Gets the third (z) coordinate as an int. Defaults to truncating [`z()`](Self::z);
    /// int-backed implementations should return their stored value instead.
    fn zi(&self) -> i32 {
        self.z() as i32
    }

    /// Sets the third (z) coordinate to `next`.
    fn set_z(&mut self, next: f32) -> &mut Self;

    /// Sets the third (z) coordinate from an int. Defaults to
    /// [`set_z(next as f32)`](Self::set_z); override to keep int, long or double storage
    /// exact.
    fn set_zi(&mut self, next: i32) -> &mut Self {
        self.set_z(next as f32)
    }

    /// Sets all 3 coordinates at once.
    fn set_xyz(&mut self, x: f32, y: f32, z: f32) -> &mut Self;

    /// Sets all 3 coordinates from ints; defaults to converting each to `f32` and calling
    /// [`set_xyz`](Self::set_xyz).
    fn set_xyzi(&mut self, x: i32, y: i32, z: i32) -> &mut Self {
        self.set_xyz(x as f32, y as f32, z as f32)
    }

    /// All coordinates, in order.
    fn xyz(&self) -> [f32; 3] {
        [self.x(), self.y(), self.z()]
    }

    /// All coordinates as ints, read through the int accessors.
    fn xyzi(&self) -> [i32; 3] {
        [self.xi(), self.yi(), self.zi()]
    }

    /// Sets every coordinate from a slice of exactly 3 values, or returns
    /// [`CruxError::RankMismatch`](crate::CruxError::RankMismatch) without touching the point.
    fn try_set_xyz(&mut self, coords: &[f32]) -> Result<&mut Self> {
        Rank::Three.check(coords.len())?;
        Ok(self.set_xyz(coords[0], coords[1], coords[2]))
    }

    /// Copies the coordinates of any other 3D point into this one, through the int accessors
    /// when neither type stores floats.
    fn assign<Q: Point3>(&mut self, other: &Q) -> &mut Self
    where
        Self: Sized,
    {
        if Self::FLOATING_POINT || Q::FLOATING_POINT {
            self.set_xyz(other.x(), other.y(), other.z())
        } else {
            self.set_xyzi(other.xi(), other.yi(), other.zi())
        }
    }
}
