//! Copy-on-write point contracts for [`Rc`] and [`Arc`].
//!
//! A shared pointer to a point is the immutable flavor of the set contract: setting a
//! coordinate goes through `make_mut`, so a uniquely owned value is edited in place while a
//! shared one is cloned first. Every other holder of the old allocation keeps seeing the old
//! coordinates.

use std::rc::Rc;
use std::sync::Arc;

use crate::point::{Point2, Point3, Point4, Point5, Point6, PointN};

macro_rules! impl_shared {
    ($ptr:ident) => {
        impl<T: PointN + Clone> PointN for $ptr<T> {
            const FLOATING_POINT: bool = T::FLOATING_POINT;
            const RANK: usize = T::RANK;

            fn set(&mut self, other: &Self) -> &mut Self {
                if !$ptr::ptr_eq(self, other) {
                    $ptr::make_mut(self).set(&**other);
                }
                self
            }
        }

        impl<T: Point2 + Clone> Point2 for $ptr<T> {
            fn x(&self) -> f32 {
                (**self).x()
            }

            fn xi(&self) -> i32 {
                (**self).xi()
            }

            fn set_x(&mut self, next: f32) -> &mut Self {
                $ptr::make_mut(self).set_x(next);
                self
            }

            fn set_xi(&mut self, next: i32) -> &mut Self {
                $ptr::make_mut(self).set_xi(next);
                self
            }

            fn y(&self) -> f32 {
                (**self).y()
            }

            fn yi(&self) -> i32 {
                (**self).yi()
            }

            fn set_y(&mut self, next: f32) -> &mut Self {
                $ptr::make_mut(self).set_y(next);
                self
            }

            fn set_yi(&mut self, next: i32) -> &mut Self {
                $ptr::make_mut(self).set_yi(next);
                self
            }

            fn set_xy(&mut self, x: f32, y: f32) -> &mut Self {
                $ptr::make_mut(self).set_xy(x, y);
                self
            }

            fn set_xyi(&mut self, x: i32, y: i32) -> &mut Self {
                $ptr::make_mut(self).set_xyi(x, y);
                self
            }
        }

        impl<T: Point3 + Clone> Point3 for $ptr<T> {
            fn x(&self) -> f32 {
                (**self).x()
            }

            fn xi(&self) -> i32 {
                (**self).xi()
            }

            fn set_x(&mut self, next: f32) -> &mut Self {
                $ptr::make_mut(self).set_x(next);
                self
            }

            fn set_xi(&mut self, next: i32) -> &mut Self {
                $ptr::make_mut(self).set_xi(next);
                self
            }

            fn y(&self) -> f32 {
                (**self).y()
            }

            fn yi(&self) -> i32 {
                (**self).yi()
            }

            fn set_y(&mut self, next: f32) -> &mut Self {
                $ptr::make_mut(self).set_y(next);
                self
            }

            fn set_yi(&mut self, next: i32) -> &mut Self {
                $ptr::make_mut(self).set_yi(next);
                self
            }

            fn z(&self) -> f32 {
                (**self).z()
            }

            fn zi(&self) -> i32 {
                (**self).zi()
            }

            fn set_z(&mut self, next: f32) -> &mut Self {
                $ptr::make_mut(self).set_z(next);
                self
            }

            fn set_zi(&mut self, next: i32) -> &mut Self {
                $ptr::make_mut(self).set_zi(next);
                self
            }

            fn set_xyz(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
                $ptr::make_mut(self).set_xyz(x, y, z);
                self
            }

            fn set_xyzi(&mut self, x: i32, y: i32, z: i32) -> &mut Self {
                $ptr::make_mut(self).set_xyzi(x, y, z);
                self
            }
        }

        impl<T: Point4 + Clone> Point4 for $ptr<T> {
            fn x(&self) -> f32 {
                (**self).x()
            }

            fn xi(&self) -> i32 {
                (**self).xi()
            }

            fn set_x(&mut self, next: f32) -> &mut Self {
                $ptr::make_mut(self).set_x(next);
                self
            }

            fn set_xi(&mut self, next: i32) -> &mut Self {
                $ptr::make_mut(self).set_xi(next);
                self
            }

            fn y(&self) -> f32 {
                (**self).y()
            }

            fn yi(&self) -> i32 {
                (**self).yi()
            }

            fn set_y(&mut self, next: f32) -> &mut Self {
                $ptr::make_mut(self).set_y(next);
                self
            }

            fn set_yi(&mut self, next: i32) -> &mut Self {
                $ptr::make_mut(self).set_yi(next);
                self
            }

            fn z(&self) -> f32 {
                (**self).z()
            }

            fn zi(&self) -> i32 {
                (**self).zi()
            }

            fn set_z(&mut self, next: f32) -> &mut Self {
                $ptr::make_mut(self).set_z(next);
                self
            }

            fn set_zi(&mut self, next: i32) -> &mut Self {
                $ptr::make_mut(self).set_zi(next);
                self
            }

            fn w(&self) -> f32 {
                (**self).w()
            }

            fn wi(&self) -> i32 {
                (**self).wi()
            }

            fn set_w(&mut self, next: f32) -> &mut Self {
                $ptr::make_mut(self).set_w(next);
                self
            }

            fn set_wi(&mut self, next: i32) -> &mut Self {
                $ptr::make_mut(self).set_wi(next);
                self
            }

            fn set_xyzw(&mut self, x: f32, y: f32, z: f32, w: f32) -> &mut Self {
                $ptr::make_mut(self).set_xyzw(x, y, z, w);
                self
            }

            fn set_xyzwi(&mut self, x: i32, y: i32, z: i32, w: i32) -> &mut Self {
                $ptr::make_mut(self).set_xyzwi(x, y, z, w);
                self
            }
        }

        impl<T: Point5 + Clone> Point5 for $ptr<T> {
            fn x(&self) -> f32 {
                (**self).x()
            }

            fn xi(&self) -> i32 {
                (**self).xi()
            }

            fn set_x(&mut self, next: f32) -> &mut Self {
                $ptr::make_mut(self).set_x(next);
                self
            }

            fn set_xi(&mut self, next: i32) -> &mut Self {
                $ptr::make_mut(self).set_xi(next);
                self
            }

            fn y(&self) -> f32 {
                (**self).y()
            }

            fn yi(&self) -> i32 {
                (**self).yi()
            }

            fn set_y(&mut self, next: f32) -> &mut Self {
                $ptr::make_mut(self).set_y(next);
                self
            }

            fn set_yi(&mut self, next: i32) -> &mut Self {
                $ptr::make_mut(self).set_yi(next);
                self
            }

            fn z(&self) -> f32 {
                (**self).z()
            }

            fn zi(&self) -> i32 {
                (**self).zi()
            }

            fn set_z(&mut self, next: f32) -> &mut Self {
                $ptr::make_mut(self).set_z(next);
                self
            }

            fn set_zi(&mut self, next: i32) -> &mut Self {
                $ptr::make_mut(self).set_zi(next);
                self
            }

            fn w(&self) -> f32 {
                (**self).w()
            }

            fn wi(&self) -> i32 {
                (**self).wi()
            }

            fn set_w(&mut self, next: f32) -> &mut Self {
                $ptr::make_mut(self).set_w(next);
                self
            }

            fn set_wi(&mut self, next: i32) -> &mut Self {
                $ptr::make_mut(self).set_wi(next);
                self
            }

            fn u(&self) -> f32 {
                (**self).u()
            }

            fn ui(&self) -> i32 {
                (**self).ui()
            }

            fn set_u(&mut self, next: f32) -> &mut Self {
                $ptr::make_mut(self).set_u(next);
                self
            }

            fn set_ui(&mut self, next: i32) -> &mut Self {
                $ptr::make_mut(self).set_ui(next);
                self
            }

            fn set_xyzwu(&mut self, x: f32, y: f32, z: f32, w: f32, u: f32) -> &mut Self {
                $ptr::make_mut(self).set_xyzwu(x, y, z, w, u);
                self
            }

            fn set_xyzwui(&mut self, x: i32, y: i32, z: i32, w: i32, u: i32) -> &mut Self {
                $ptr::make_mut(self).set_xyzwui(x, y, z, w, u);
                self
            }
        }

        impl<T: Point6 + Clone> Point6 for $ptr<T> {
            fn x(&self) -> f32 {
                (**self).x()
            }

            fn xi(&self) -> i32 {
                (**self).xi()
            }

            fn set_x(&mut self, next: f32) -> &mut Self {
                $ptr::make_mut(self).set_x(next);
                self
            }

            fn set_xi(&mut self, next: i32) -> &mut Self {
                $ptr::make_mut(self).set_xi(next);
                self
            }

            fn y(&self) -> f32 {
                (**self).y()
            }

            fn yi(&self) -> i32 {
                (**self).yi()
            }

            fn set_y(&mut self, next: f32) -> &mut Self {
                $ptr::make_mut(self).set_y(next);
                self
            }

            fn set_yi(&mut self, next: i32) -> &mut Self {
                $ptr::make_mut(self).set_yi(next);
                self
            }

            fn z(&self) -> f32 {
                (**self).z()
            }

            fn zi(&self) -> i32 {
                (**self).zi()
            }

            fn set_z(&mut self, next: f32) -> &mut Self {
                $ptr::make_mut(self).set_z(next);
                self
            }

            fn set_zi(&mut self, next: i32) -> &mut Self {
                $ptr::make_mut(self).set_zi(next);
                self
            }

            fn w(&self) -> f32 {
                (**self).w()
            }

            fn wi(&self) -> i32 {
                (**self).wi()
            }

            fn set_w(&mut self, next: f32) -> &mut Self {
                $ptr::make_mut(self).set_w(next);
                self
            }

            fn set_wi(&mut self, next: i32) -> &mut Self {
                $ptr::make_mut(self).set_wi(next);
                self
            }

            fn u(&self) -> f32 {
                (**self).u()
            }

            fn ui(&self) -> i32 {
                (**self).ui()
            }

            fn set_u(&mut self, next: f32) -> &mut Self {
                $ptr::make_mut(self).set_u(next);
                self
            }

            fn set_ui(&mut self, next: i32) -> &mut Self {
                $ptr::make_mut(self).set_ui(next);
                self
            }

            fn v(&self) -> f32 {
                (**self).v()
            }

            fn vi(&self) -> i32 {
                (**self).vi()
            }

            fn set_v(&mut self, next: f32) -> &mut Self {
                $ptr::make_mut(self).set_v(next);
                self
            }

            fn set_vi(&mut self, next: i32) -> &mut Self {
                $ptr::make_mut(self).set_vi(next);
                self
            }

            fn set_xyzwuv(&mut self, x: f32, y: f32, z: f32, w: f32, u: f32, v: f32) -> &mut Self {
                $ptr::make_mut(self).set_xyzwuv(x, y, z, w, u, v);
                self
            }

            fn set_xyzwuvi(&mut self, x: i32, y: i32, z: i32, w: i32, u: i32, v: i32) -> &mut Self {
                $ptr::make_mut(self).set_xyzwuvi(x, y, z, w, u, v);
                self
            }
        }
    };
}

impl_shared!(Rc);
impl_shared!(Arc);
