//! [`Point2`] for the [`geo_types`] coordinate and point types.
//!
//! [`geo_types::Point`] has inherent `x()`, `y()`, `set_x()` and `set_y()` methods that take
//! precedence over the trait methods in method-call syntax. Call through the trait
//! (`Point2::x(&p)`) when the float view is wanted.

use geo_types::{Coord, CoordNum, Point};

use crate::point::scalar::Scalar;
use crate::point::{Point2, PointN};

impl<T: Scalar + CoordNum> PointN for Coord<T> {
    const FLOATING_POINT: bool = T::FLOATING_POINT;
    const RANK: usize = 2;

    fn set(&mut self, other: &Self) -> &mut Self {
        *self = *other;
        self
    }
}

impl<T: Scalar + CoordNum> Point2 for Coord<T> {
    fn x(&self) -> f32 {
        self.x.to_f32()
    }

    fn xi(&self) -> i32 {
        self.x.to_i32()
    }

    fn set_x(&mut self, next: f32) -> &mut Self {
        self.x = T::from_f32(next);
        self
    }

    fn set_xi(&mut self, next: i32) -> &mut Self {
        self.x = T::from_i32(next);
        self
    }

    fn y(&self) -> f32 {
        self.y.to_f32()
    }

    fn yi(&self) -> i32 {
        self.y.to_i32()
    }

    fn set_y(&mut self, next: f32) -> &mut Self {
        self.y = T::from_f32(next);
        self
    }

    fn set_yi(&mut self, next: i32) -> &mut Self {
        self.y = T::from_i32(next);
        self
    }

    fn set_xy(&mut self, x: f32, y: f32) -> &mut Self {
        self.x = T::from_f32(x);
        self.y = T::from_f32(y);
        self
    }

    fn set_xyi(&mut self, x: i32, y: i32) -> &mut Self {
        self.x = T::from_i32(x);
        self.y = T::from_i32(y);
        self
    }
}

impl<T: Scalar + CoordNum> PointN for Point<T> {
    const FLOATING_POINT: bool = T::FLOATING_POINT;
    const RANK: usize = 2;

    fn set(&mut self, other: &Self) -> &mut Self {
        self.0 = other.0;
        self
    }
}

impl<T: Scalar + CoordNum> Point2 for Point<T> {
    fn x(&self) -> f32 {
        Point2::x(&self.0)
    }

    fn xi(&self) -> i32 {
        self.0.xi()
    }

    fn set_x(&mut self, next: f32) -> &mut Self {
        Point2::set_x(&mut self.0, next);
        self
    }

    fn set_xi(&mut self, next: i32) -> &mut Self {
        self.0.set_xi(next);
        self
    }

    fn y(&self) -> f32 {
        Point2::y(&self.0)
    }

    fn yi(&self) -> i32 {
        self.0.yi()
    }

    fn set_y(&mut self, next: f32) -> &mut Self {
        Point2::set_y(&mut self.0, next);
        self
    }

    fn set_yi(&mut self, next: i32) -> &mut Self {
        self.0.set_yi(next);
        self
    }

    fn set_xy(&mut self, x: f32, y: f32) -> &mut Self {
        self.0.set_xy(x, y);
        self
    }

    fn set_xyi(&mut self, x: i32, y: i32) -> &mut Self {
        self.0.set_xyi(x, y);
        self
    }
}
