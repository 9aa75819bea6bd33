use crate::error::Result;
use crate::point::PointN;
use crate::rank::Rank;

/// A minimal contract for 2D points, such as screen or grid positions and planar vectors.
///
/// Only the float accessors, the float setters and [`set_xy`](Self::set_xy) are required.
/// The integer accessors default to going through the float ones; types whose storage is
/// integer (or `i64`/`f64`) override them so that values outside the range `f32` represents
/// exactly are not rounded.
pub trait Point2: PointN {
    /// Gets the first (x) coordinate. Always a float, even if
    /// [`floating_point()`](PointN::floating_point) is false.
    fn x(&self) -> f32;

    /// Gets the first (x) coordinate as an int.
    ///
    /// Defaults to truncating [`x()`](Self::x) toward zero. Implementations where
    /// [`floating_point()`](PointN::floating_point) is false should override this and return
    /// their actual int data.
    fn xi(&self) -> i32 {
        self.x() as i32
    }

    /// Sets the first (x) coordinate to `next`. Always takes a float, even if
    /// [`floating_point()`](PointN::floating_point) is false.
    fn set_x(&mut self, next: f32) -> &mut Self;

    /// Sets the first (x) coordinate from an int.
    ///
    /// Defaults to [`set_x(next as f32)`](Self::set_x), which rounds above 2^24. Override to
    /// assign int, long or double storage without that loss.
    fn set_xi(&mut self, next: i32) -> &mut Self {
        self.set_x(next as f32)
    }

    /// Gets the second (y) coordinate. Always a float, even if
    /// [`floating_point()`](PointN::floating_point) is false.
    fn y(&self) -> f32;

    /// Gets the second (y) coordinate as an int; defaults to truncating [`y()`](Self::y).
    fn yi(&self) -> i32 {
        self.y() as i32
    }

    /// Sets the second (y) coordinate to `next`.
    fn set_y(&mut self, next: f32) -> &mut Self;

    /// Sets the second (y) coordinate from an int; defaults to
    /// [`set_y(next as f32)`](Self::set_y).
    fn set_yi(&mut self, next: i32) -> &mut Self {
        self.set_y(next as f32)
    }

    /// Sets both coordinates at once.
    ///
    /// Observably the same as [`set_x`](Self::set_x) followed by [`set_y`](Self::set_y).
    fn set_xy(&mut self, x: f32, y: f32) -> &mut Self;

    /// Sets both coordinates from ints; defaults to converting each to `f32` and calling
    /// [`set_xy`](Self::set_xy).
    fn set_xyi(&mut self, x: i32, y: i32) -> &mut Self {
        self.set_xy(x as f32, y as f32)
    }

    /// Returns an array with the x/horizontal & y/vertical component of the point.
    fn xy(&self) -> [f32; 2] {
        [self.x(), self.y()]
    }

    /// Both coordinates as ints, read through [`xi()`](Self::xi) and [`yi()`](Self::yi).
    fn xyi(&self) -> [i32; 2] {
        [self.xi(), self.yi()]
    }

    /// Sets both coordinates from a slice, which must hold exactly two values.
    ///
    /// Returns [`CruxError::RankMismatch`](crate::CruxError::RankMismatch) and leaves the
    /// point unchanged otherwise.
    fn try_set_xy(&mut self, coords: &[f32]) -> Result<&mut Self> {
        Rank::Two.check(coords.len())?;
        Ok(self.set_xy(coords[0], coords[1]))
    }

    /// Copies the coordinates of any other 2D point into this one.
    ///
    /// When neither type stores floats the copy goes through the int accessors, so integers
    /// survive unrounded.
    fn assign<Q: Point2>(&mut self, other: &Q) -> &mut Self
    where
        Self: Sized,
    {
        if Self::FLOATING_POINT || Q::FLOATING_POINT {
            self.set_xy(other.x(), other.y())
        } else {
            self.set_xyi(other.xi(), other.yi())
        }
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;
    use crate::point::test::FloatPoint;
    use crate::CruxError;

    impl Point2 for FloatPoint<2> {
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

        fn set_xy(&mut self, x: f32, y: f32) -> &mut Self {
            self.coords = [x, y];
            self
        }
    }

    #[test]
    fn float_round_trip() {
        let mut p = FloatPoint::<2>::default();
        for f in [0.0, -0.0, 1.5, -3.25, f32::MIN_POSITIVE, f32::MAX, f32::INFINITY] {
            p.set_x(f).set_y(-f);
            assert_eq!(p.x(), f);
            assert_eq!(p.y(), -f);
        }
    }

    #[test]
    fn derived_int_truncates() {
        let p = FloatPoint::new([2.7, -2.7]);
        assert_eq!(p.xi(), 2);
        assert_eq!(p.yi(), -2);
        assert_eq!(p.xyi(), [2, -2]);
    }

    #[test]
    fn derived_int_setters_go_through_float() {
        let mut p = FloatPoint::<2>::default();
        p.set_xi(7).set_yi(-3);
        assert_eq!(p.xy(), [7.0, -3.0]);

        // 2^24 + 1 is the first int an f32 cannot hold
        p.set_xyi(16_777_217, 1);
        assert_eq!(p.xi(), 16_777_216);
    }

    #[test]
    fn bulk_matches_single() {
        let mut bulk = FloatPoint::<2>::default();
        let mut single = FloatPoint::<2>::default();
        bulk.set_xy(1.25, -8.5);
        single.set_x(1.25).set_y(-8.5);
        assert_eq!(bulk, single);

        bulk.set_xyi(4, 5);
        single.set_xi(4).set_yi(5);
        assert_eq!(bulk, single);
    }

    #[test]
    fn rank_and_storage_mode() {
        let p = FloatPoint::<2>::default();
        assert_eq!(p.rank(), 2);
        assert_eq!(p.rank(), Rank::Two.size());
        assert!(p.floating_point());
    }

    #[test]
    fn try_set_rejects_wrong_length() {
        let mut p = FloatPoint::new([1.0, 2.0]);
        let err = p.try_set_xy(&[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            CruxError::RankMismatch {
                expected: Rank::Two,
                found: 3
            }
        );
        assert_eq!(p.xy(), [1.0, 2.0]);

        p.try_set_xy(&[0.5, 0.25]).unwrap();
        assert_eq!(p.xy(), [0.5, 0.25]);
    }

    #[test]
    fn integer_backed_example() {
        let mut p = [3i32, 4];
        assert!(!p.floating_point());
        p.set_xi(7);
        assert_relative_eq!(p.x(), 7.0);
        p.set_xy(1.5, 2.5);
        assert_eq!(p.xi(), 1);
        assert_eq!(p.yi(), 2);
    }

    #[test]
    fn assign_between_representations() {
        let mut ints = [0i64; 2];
        ints.assign(&[16_777_217i32, -16_777_217]);
        assert_eq!(ints, [16_777_217, -16_777_217]);

        let mut floats = FloatPoint::<2>::default();
        floats.assign(&ints);
        assert_eq!(floats.xy(), [16_777_216.0, -16_777_216.0]);

        ints.assign(&FloatPoint::new([-1.9, 1.9]));
        assert_eq!(ints, [-1, 1]);
    }
}
