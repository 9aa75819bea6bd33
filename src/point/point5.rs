use crate::error::Result;
use crate::point::PointN;
use crate::rank::Rank;

/// A minimal contract for 5D points. The coordinates are, in order, x, y, z, w and u.
///
/// Few libraries ship 5D point types; this exists so that ones built from scratch can
/// still share the support in [`PointN`].
pub trait Point5: PointN {
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

    /// Sets all 5 coordinates at once.
    fn set_xyzwu(&mut self, x: f32, y: f32, z: f32, w: f32, u: f32) -> &mut Self;

    /// Sets all 5 coordinates from ints; defaults to converting each to `f32` and calling
    /// [`set_xyzwu`](Self::set_xyzwu).
    fn set_xyzwui(&mut self, x: i32, y: i32, z: i32, w: i32, u: i32) -> &mut Self {
        self.set_xyzwu(x as f32, y as f32, z as f32, w as f32, u as f32)
    }

    /// All coordinates, in order.
    fn xyzwu(&self) -> [f32; 5] {
        [self.x(), self.y(), self.z(), self.w(), self.u()]
    }

    /// All coordinates as ints, read through the int accessors.
    fn xyzwui(&self) -> [i32; 5] {
        [self.xi(), self.yi(), self.zi(), self.wi(), self.ui()]
    }

    /// Sets every coordinate from a slice of exactly 5 values, or returns
    /// [`CruxError::RankMismatch`](crate::CruxError::RankMismatch) without touching the point.
    fn try_set_xyzwu(&mut self, coords: &[f32]) -> Result<&mut Self> {
        Rank::Five.check(coords.len())?;
        Ok(self.set_xyzwu(coords[0], coords[1], coords[2], coords[3], coords[4]))
    }

    /// Copies the coordinates of any other 5D point into this one, through the int accessors
    /// when neither type stores floats.
    fn assign<Q: Point5>(&mut self, other: &Q) -> &mut Self
    where
        Self: Sized,
    {
        if Self::FLOATING_POINT || Q::FLOATING_POINT {
            self.set_xyzwu(other.x(), other.y(), other.z(), other.w(), other.u())
        } else {
            self.set_xyzwui(other.xi(), other.yi(), other.zi(), other.wi(), other.ui())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::point::test::FloatPoint;
    use crate::CruxError;

    impl Point5 for FloatPoint<5> {
        fn x(&self) -> f32 {
            self.coords[0]
        }

        fn set_x(&mut self, next: f32) -> &mut Self {
            self.coords[0] = next;
            self
        }

        fn y(&self) -> f32 {
            self.coords[1]
        }

        fn set_y(&mut self, next: f32) -> &mut Self {
            self.coords[1] = next;
            self
        }

        fn z(&self) -> f32 {
            self.coords[2]
        }

        fn set_z(&mut self, next: f32) -> &mut Self {
            self.coords[2] = next;
            self
        }

        fn w(&self) -> f32 {
            self.coords[3]
        }

        fn set_w(&mut self, next: f32) -> &mut Self {
            self.coords[3] = next;
            self
        }

        fn u(&self) -> f32 {
            self.coords[4]
        }

        fn set_u(&mut self, next: f32) -> &mut Self {
            self.coords[4] = next;
            self
        }

        fn set_xyzwu(&mut self, x: f32, y: f32, z: f32, w: f32, u: f32) -> &mut Self {
            self.coords = [x, y, z, w, u];
            self
        }
    }

    #[test]
    fn rank_matches_coordinate_count() {
        let p = FloatPoint::<5>::default();
        assert_eq!(p.rank(), 5);
        assert_eq!(p.xyzwu().len(), p.rank());
        assert_eq!(Rank::Five.names().concat(), "xyzwu");
    }

    #[test]
    fn bulk_matches_single() {
        let mut bulk = FloatPoint::<5>::default();
        let mut single = FloatPoint::<5>::default();
        bulk.set_xyzwu(1.5, -2.25, 3.75, -4.5, 5.125);
        single.set_x(1.5).set_y(-2.25).set_z(3.75).set_w(-4.5).set_u(5.125);
        assert_eq!(bulk, single);
        assert_eq!(bulk.xyzwu(), [1.5, -2.25, 3.75, -4.5, 5.125]);

        bulk.set_xyzwui(1, 2, 3, 4, 5);
        single.set_xi(1).set_yi(2).set_zi(3).set_wi(4).set_ui(5);
        assert_eq!(bulk, single);
        assert_eq!(bulk.xyzwu(), [1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn derived_int_truncates() {
        let p = FloatPoint::new([2.7, -2.7, 3.7, -4.7, 5.7]);
        assert_eq!(p.xyzwui(), [2, -2, 3, -4, 5]);
    }

    #[test]
    fn try_set_rejects_wrong_length() {
        let mut p = FloatPoint::new([0.0; 5]);
        assert_eq!(
            p.try_set_xyzwu(&[0.0, 1.0, 2.0, 3.0]).unwrap_err(),
            CruxError::RankMismatch {
                expected: Rank::Five,
                found: 4
            }
        );
        assert_eq!(p.xyzwu(), [0.0; 5]);
        p.try_set_xyzwu(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(p.xyzwu(), [1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn assign_keeps_integers_exact() {
        let mut wide = [0i64; 5];
        wide.assign(&[16_777_217i32, 1, 2, 3, 4]);
        assert_eq!(wide, [16_777_217, 1, 2, 3, 4]);

        let mut narrow = FloatPoint::<5>::default();
        narrow.assign(&wide);
        assert_eq!(narrow.xyzwu(), [16_777_216.0, 1.0, 2.0, 3.0, 4.0]);
    }
}
