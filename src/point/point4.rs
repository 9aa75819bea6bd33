use crate::error::Result;
use crate::point::PointN;
use crate::rank::Rank;

/// A minimal contract for 4D points, such as homogeneous coordinates or quaternion-like
/// tuples. The fourth coordinate is `w`.
pub trait Point4: PointN {
    /// Gets the first (x) coordinate as a float.
    fn x(&self) -> f32;

    /// Gets the first (x) coordinate as an int, by truncation unless overridden.
    fn xi(&self) -> i32 {
        self.x() as i32
    }

    /// Sets the first (x) coordinate.
    fn set_x(&mut self, next: f32) -> &mut Self;

    /// Sets the first (x) coordinate from an int, through the float setter unless overridden.
    fn set_xi(&mut self, next: i32) -> &mut Self {
        self.set_x(next as f32)
    }

    /// Gets the second (y) coordinate as a float.
    fn y(&self) -> f32;

    /// Gets the second (y) coordinate as an int, by truncation unless overridden.
    fn yi(&self) -> i32 {
        self.y() as i32
    }

    /// Sets the second (y) coordinate.
    fn set_y(&mut self, next: f32) -> &mut Self;

    /// Sets the second (y) coordinate from an int, through the float setter unless overridden.
    fn set_yi(&mut self, next: i32) -> &mut Self {
        self.set_y(next as f32)
    }

    /// Gets the third (z) coordinate as a float.
    fn z(&self) -> f32;

    /// Gets the third (z) coordinate as an int, by truncation unless overridden.
    fn zi(&self) -> i32 {
        self.z() as i32
    }

    /// Sets the third (z) coordinate.
    fn set_z(&mut self, next: f32) -> &mut Self;

    /// Sets the third (z) coordinate from an int, through the float setter unless overridden.
    fn set_zi(&mut self, next: i32) -> &mut Self {
        self.set_z(next as f32)
    }

    /// Gets the fourth (w) coordinate as a float.
    fn w(&self) -> f32;

    /// Gets the fourth (w) coordinate as an int, by truncation unless overridden.
    fn wi(&self) -> i32 {
        self.w() as i32
    }

    /// Sets the fourth (w) coordinate.
    fn set_w(&mut self, next: f32) -> &mut Self;

    /// Sets the fourth (w) coordinate from an int, through the float setter unless overridden.
    fn set_wi(&mut self, next: i32) -> &mut Self {
        self.set_w(next as f32)
    }

    /// Sets all 4 coordinates at once.
    fn set_xyzw(&mut self, x: f32, y: f32, z: f32, w: f32) -> &mut Self;

    /// Sets all 4 coordinates from ints; defaults to converting each to `f32` and calling
    /// [`set_xyzw`](Self::set_xyzw).
    fn set_xyzwi(&mut self, x: i32, y: i32, z: i32, w: i32) -> &mut Self {
        self.set_xyzw(x as f32, y as f32, z as f32, w as f32)
    }

    /// All coordinates, in order.
    fn xyzw(&self) -> [f32; 4] {
        [self.x(), self.y(), self.z(), self.w()]
    }

    /// All coordinates as ints, read through the int accessors.
    fn xyzwi(&self) -> [i32; 4] {
        [self.xi(), self.yi(), self.zi(), self.wi()]
    }

    /// Sets every coordinate from a slice of exactly 4 values, or returns
    /// [`CruxError::RankMismatch`](crate::CruxError::RankMismatch) without touching the point.
    fn try_set_xyzw(&mut self, coords: &[f32]) -> Result<&mut Self> {
        Rank::Four.check(coords.len())?;
        Ok(self.set_xyzw(coords[0], coords[1], coords[2], coords[3]))
    }

    /// Copies the coordinates of any other 4D point into this one, through the int accessors
    /// when neither type stores floats.
    fn assign<Q: Point4>(&mut self, other: &Q) -> &mut Self
    where
        Self: Sized,
    {
        if Self::FLOATING_POINT || Q::FLOATING_POINT {
            self.set_xyzw(other.x(), other.y(), other.z(), other.w())
        } else {
            self.set_xyzwi(other.xi(), other.yi(), other.zi(), other.wi())
        }
    }
}
