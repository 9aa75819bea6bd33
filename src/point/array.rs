//! Point contracts for fixed-size arrays of a [`Scalar`].
//!
//! `[T; 2]` is a [`Point2`], `[T; 3]` a [`Point3`], and so on through `[T; 6]`. Arrays are
//! edited in place. Integer-backed and `f64` arrays read and write the int views directly
//! instead of going through `f32`.

use crate::point::scalar::Scalar;
use crate::point::{Point2, Point3, Point4, Point5, Point6, PointN};

macro_rules! impl_point_n {
    ($($rank:literal),+) => {
        $(
            impl<T: Scalar> PointN for [T; $rank] {
                const FLOATING_POINT: bool = T::FLOATING_POINT;
                const RANK: usize = $rank;

                fn set(&mut self, other: &Self) -> &mut Self {
                    *self = *other;
                    self
                }
            }
        )+
    };
}

impl_point_n!(2, 3, 4, 5, 6);

impl<T: Scalar> Point2 for [T; 2] {
    fn x(&self) -> f32 {
        self[0].to_f32()
    }

    fn xi(&self) -> i32 {
        self[0].to_i32()
    }

    fn set_x(&mut self, next: f32) -> &mut Self {
        self[0] = T::from_f32(next);
        self
    }

    fn set_xi(&mut self, next: i32) -> &mut Self {
        self[0] = T::from_i32(next);
        self
    }

    fn y(&self) -> f32 {
        self[1].to_f32()
    }

    fn yi(&self) -> i32 {
        self[1].to_i32()
    }

    fn set_y(&mut self, next: f32) -> &mut Self {
        self[1] = T::from_f32(next);
        self
    }

    fn set_yi(&mut self, next: i32) -> &mut Self {
        self[1] = T::from_i32(next);
        self
    }

    fn set_xy(&mut self, x: f32, y: f32) -> &mut Self {
        *self = [x, y].map(T::from_f32);
        self
    }

    fn set_xyi(&mut self, x: i32, y: i32) -> &mut Self {
        *self = [x, y].map(T::from_i32);
        self
    }
}

impl<T: Scalar> Point3 for [T; 3] {
    fn x(&self) -> f32 {
        self[0].to_f32()
    }

    fn xi(&self) -> i32 {
        self[0].to_i32()
    }

    fn set_x(&mut self, next: f32) -> &mut Self {
        self[0] = T::from_f32(next);
        self
    }

    fn set_xi(&mut self, next: i32) -> &mut Self {
        self[0] = T::from_i32(next);
        self
    }

    fn y(&self) -> f32 {
        self[1].to_f32()
    }

    fn yi(&self) -> i32 {
        self[1].to_i32()
    }

    fn set_y(&mut self, next: f32) -> &mut Self {
        self[1] = T::from_f32(next);
        self
    }

    fn set_yi(&mut self, next: i32) -> &mut Self {
        self[1] = T::from_i32(next);
        self
    }

    fn z(&self) -> f32 {
        self[2].to_f32()
    }

    fn zi(&self) -> i32 {
        self[2].to_i32()
    }

    fn set_z(&mut self, next: f32) -> &mut Self {
        self[2] = T::from_f32(next);
        self
    }

    fn set_zi(&mut self, next: i32) -> &mut Self {
        self[2] = T::from_i32(next);
        self
    }

    fn set_xyz(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        *self = [x, y, z].map(T::from_f32);
        self
    }

    fn set_xyzi(&mut self, x: i32, y: i32, z: i32) -> &mut Self {
        *self = [x, y, z].map(T::from_i32);
        self
    }
}

impl<T: Scalar> Point4 for [T; 4] {
    fn x(&self) -> f32 {
        self[0].to_f32()
    }

    fn xi(&self) -> i32 {
        self[0].to_i32()
    }

    fn set_x(&mut self, next: f32) -> &mut Self {
        self[0] = T::from_f32(next);
        self
    }

    fn set_xi(&mut self, next: i32) -> &mut Self {
        self[0] = T::from_i32(next);
        self
    }

    fn y(&self) -> f32 {
        self[1].to_f32()
    }

    fn yi(&self) -> i32 {
        self[1].to_i32()
    }

    fn set_y(&mut self, next: f32) -> &mut Self {
        self[1] = T::from_f32(next);
        self
    }

    fn set_yi(&mut self, next: i32) -> &mut Self {
        self[1] = T::from_i32(next);
        self
    }

    fn z(&self) -> f32 {
        self[2].to_f32()
    }

    fn zi(&self) -> i32 {
        self[2].to_i32()
    }

    fn set_z(&mut self, next: f32) -> &mut Self {
        self[2] = T::from_f32(next);
        self
    }

    fn set_zi(&mut self, next: i32) -> &mut Self {
        self[2] = T::from_i32(next);
        self
    }

    fn w(&self) -> f32 {
        self[3].to_f32()
    }

    fn wi(&self) -> i32 {
        self[3].to_i32()
    }

    fn set_w(&mut self, next: f32) -> &mut Self {
        self[3] = T::from_f32(next);
        self
    }

    fn set_wi(&mut self, next: i32) -> &mut Self {
        self[3] = T::from_i32(next);
        self
    }

    fn set_xyzw(&mut self, x: f32, y: f32, z: f32, w: f32) -> &mut Self {
        *self = [x, y, z, w].map(T::from_f32);
        self
    }

    fn set_xyzwi(&mut self, x: i32, y: i32, z: i32, w: i32) -> &mut Self {
        *self = [x, y, z, w].map(T::from_i32);
        self
    }
}

impl<T: Scalar> Point5 for [T; 5] {
    fn x(&self) -> f32 {
        self[0].to_f32()
    }

    fn xi(&self) -> i32 {
        self[0].to_i32()
    }

    fn set_x(&mut self, next: f32) -> &mut Self {
        self[0] = T::from_f32(next);
        self
    }

    fn set_xi(&mut self, next: i32) -> &mut Self {
        self[0] = T::from_i32(next);
        self
    }

    fn y(&self) -> f32 {
        self[1].to_f32()
    }

    fn yi(&self) -> i32 {
        self[1].to_i32()
    }

    fn set_y(&mut self, next: f32) -> &mut Self {
        self[1] = T::from_f32(next);
        self
    }

    fn set_yi(&mut self, next: i32) -> &mut Self {
        self[1] = T::from_i32(next);
        self
    }

    fn z(&self) -> f32 {
        self[2].to_f32()
    }

    fn zi(&self) -> i32 {
        self[2].to_i32()
    }

    fn set_z(&mut self, next: f32) -> &mut Self {
        self[2] = T::from_f32(next);
        self
    }

    fn set_zi(&mut self, next: i32) -> &mut Self {
        self[2] = T::from_i32(next);
        self
    }

    fn w(&self) -> f32 {
        self[3].to_f32()
    }

    fn wi(&self) -> i32 {
        self[3].to_i32()
    }

    fn set_w(&mut self, next: f32) -> &mut Self {
        self[3] = T::from_f32(next);
        self
    }

    fn set_wi(&mut self, next: i32) -> &mut Self {
        self[3] = T::from_i32(next);
        self
    }

    fn u(&self) -> f32 {
        self[4].to_f32()
    }

    fn ui(&self) -> i32 {
        self[4].to_i32()
    }

    fn set_u(&mut self, next: f32) -> &mut Self {
        self[4] = T::from_f32(next);
        self
    }

    fn set_ui(&mut self, next: i32) -> &mut Self {
        self[4] = T::from_i32(next);
        self
    }

    fn set_xyzwu(&mut self, x: f32, y: f32, z: f32, w: f32, u: f32) -> &mut Self {
        *self = [x, y, z, w, u].map(T::from_f32);
        self
    }

    fn set_xyzwui(&mut self, x: i32, y: i32, z: i32, w: i32, u: i32) -> &mut Self {
        *self = [x, y, z, w, u].map(T::from_i32);
        self
    }
}

impl<T: Scalar> Point6 for [T; 6] {
    fn x(&self) -> f32 {
        self[0].to_f32()
    }

    fn xi(&self) -> i32 {
        self[0].to_i32()
    }

    fn set_x(&mut self, next: f32) -> &mut Self {
        self[0] = T::from_f32(next);
        self
    }

    fn set_xi(&mut self, next: i32) -> &mut Self {
        self[0] = T::from_i32(next);
        self
    }

    fn y(&self) -> f32 {
        self[1].to_f32()
    }

    fn yi(&self) -> i32 {
        self[1].to_i32()
    }

    fn set_y(&mut self, next: f32) -> &mut Self {
        self[1] = T::from_f32(next);
        self
    }

    fn set_yi(&mut self, next: i32) -> &mut Self {
        self[1] = T::from_i32(next);
        self
    }

    fn z(&self) -> f32 {
        self[2].to_f32()
    }

    fn zi(&self) -> i32 {
        self[2].to_i32()
    }

    fn set_z(&mut self, next: f32) -> &mut Self {
        self[2] = T::from_f32(next);
        self
    }

    fn set_zi(&mut self, next: i32) -> &mut Self {
        self[2] = T::from_i32(next);
        self
    }

    fn w(&self) -> f32 {
        self[3].to_f32()
    }

    fn wi(&self) -> i32 {
        self[3].to_i32()
    }

    fn set_w(&mut self, next: f32) -> &mut Self {
        self[3] = T::from_f32(next);
        self
    }

    fn set_wi(&mut self, next: i32) -> &mut Self {
        self[3] = T::from_i32(next);
        self
    }

    fn u(&self) -> f32 {
        self[4].to_f32()
    }

    fn ui(&self) -> i32 {
        self[4].to_i32()
    }

    fn set_u(&mut self, next: f32) -> &mut Self {
        self[4] = T::from_f32(next);
        self
    }

    fn set_ui(&mut self, next: i32) -> &mut Self {
        self[4] = T::from_i32(next);
        self
    }

    fn v(&self) -> f32 {
        self[5].to_f32()
    }

    fn vi(&self) -> i32 {
        self[5].to_i32()
    }

    fn set_v(&mut self, next: f32) -> &mut Self {
        self[5] = T::from_f32(next);
        self
    }

    fn set_vi(&mut self, next: i32) -> &mut Self {
        self[5] = T::from_i32(next);
        self
    }

    fn set_xyzwuv(&mut self, x: f32, y: f32, z: f32, w: f32, u: f32, v: f32) -> &mut Self {
        *self = [x, y, z, w, u, v].map(T::from_f32);
        self
    }

    fn set_xyzwuvi(&mut self, x: i32, y: i32, z: i32, w: i32, u: i32, v: i32) -> &mut Self {
        *self = [x, y, z, w, u, v].map(T::from_i32);
        self
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn storage_mode_follows_scalar() {
        assert!([0f32; 2].floating_point());
        assert!([0f64; 3].floating_point());
        assert!(![0i32; 4].floating_point());
        assert!(![0i64; 5].floating_point());
    }

    #[test]
    fn rank_follows_length() {
        assert_eq!([0f32; 2].rank(), 2);
        assert_eq!([0f32; 3].rank(), 3);
        assert_eq!([0i32; 4].rank(), 4);
        assert_eq!([0f64; 5].rank(), 5);
        assert_eq!([0i64; 6].rank(), 6);
    }

    #[test]
    fn set_copies_in_place() {
        let mut p = [1i32, 2, 3];
        let before: *const [i32; 3] = &p;
        p.set(&[4, 5, 6]);
        assert_eq!(p, [4, 5, 6]);
        assert!(std::ptr::eq(before, &p));
    }

    #[test]
    fn double_keeps_ints_exact() {
        let mut p = [0f64; 4];
        p.set_xi(16_777_217).set_wi(-16_777_217);
        assert_eq!(p.xi(), 16_777_217);
        assert_eq!(p.wi(), -16_777_217);
        assert_relative_eq!(p[0], 16_777_217.0);
    }

    #[test]
    fn long_saturates_int_view() {
        let p: [i64; 2] = [i64::MAX, -5];
        assert_eq!(p.xi(), i32::MAX);
        assert_eq!(p.yi(), -5);
        assert_relative_eq!(p.x(), i64::MAX as f32);
    }

    #[test]
    fn int_array_truncates_floats() {
        let mut p = [0i32; 6];
        p.set_xyzwuv(1.9, -1.9, 2.5, -2.5, 0.1, 1e10);
        assert_eq!(p, [1, -1, 2, -2, 0, i32::MAX]);
        assert_eq!(p.v(), i32::MAX as f32);
    }
}
