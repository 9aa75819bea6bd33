//! Minimal point traits, from 2D through 6D, that unrelated point types can implement so that
//! algorithms written once work across all of them.
//!
//! [`PointN`] is the rank-polymorphic base: it reports whether a type stores floats or ints,
//! how many coordinates it has, and copies state from another value of the same type.
//! [`Point2`] through [`Point6`] each extend it with named coordinate accessors. The float
//! accessors are the required primitives; the int accessors are derived from them and
//! overridden by integer-backed types that need to stay exact. [`PointPair`] bundles two
//! points of the same type, as a ray or a collision.
//!
//! ```
//! use crux::{Point2, PointN, PointPair};
//!
//! // An int-backed point: the int views are exact, float writes truncate.
//! let mut grid = [3i32, 4];
//! grid.set_xi(7);
//! assert_eq!(grid.x(), 7.0);
//! grid.set_xy(1.5, 2.5);
//! assert_eq!(grid.xi(), 1);
//!
//! // A ray, re-aimed in place.
//! let mut ray = PointPair::new([0f32, 0.0], [1.0, 0.0]);
//! ray.set_points(&[2.0, 2.0], &[0.0, 1.0]);
//! assert_eq!(ray.a.x(), 2.0);
//! assert_eq!(ray.a.rank(), 2);
//! ```
//!
//! Implementations are provided for arrays of `f32`, `f64`, `i32` and `i64`, for
//! [`Rc`](std::rc::Rc) and [`Arc`](std::sync::Arc) around any point, and, with the default
//! `geo-types` feature, for `geo_types::Coord` and `geo_types::Point`.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use error::{CruxError, Result};
pub use pair::PointPair;
pub use point::{Point2, Point3, Point4, Point5, Point6, PointN, Scalar};
pub use rank::Rank;

pub mod error;
pub mod pair;
pub mod point;
pub mod rank;
