use std::rc::Rc;
use std::sync::Arc;

use approx::assert_relative_eq;
use crux::{Point2, Point3, Point6, PointN, PointPair, Rank};

/// Written once against the contract, run against every representation below.
fn nudge<P: Point2>(p: &mut P, dx: i32, dy: i32) {
    let (x, y) = (p.xi(), p.yi());
    p.set_xyi(x + dx, y + dy);
}

fn centroid<P: Point3>(points: &[P]) -> [f32; 3] {
    let n = points.len() as f32;
    let mut sum = [0.0f32; 3];
    for p in points {
        for (acc, c) in sum.iter_mut().zip(p.xyz()) {
            *acc += c;
        }
    }
    sum.map(|c| c / n)
}

fn check_rank<P: PointN>(p: &P, expected: Rank) {
    assert_eq!(p.rank(), expected.size());
    assert_eq!(P::RANK, usize::from(expected));
}

fn reaim<P: PointN>(pair: &mut PointPair<P>, origin: &P, direction: &P) {
    pair.set_points(origin, direction);
}

#[test]
fn generic_code_runs_on_every_2d_representation() {
    let mut floats = [1.0f32, 1.0];
    let mut doubles = [1.0f64, 1.0];
    let mut ints = [1i32, 1];
    let mut longs = [1i64, 1];
    let mut shared = Rc::new([1i32, 1]);

    nudge(&mut floats, 2, 3);
    nudge(&mut doubles, 2, 3);
    nudge(&mut ints, 2, 3);
    nudge(&mut longs, 2, 3);
    nudge(&mut shared, 2, 3);

    assert_eq!(floats.xy(), [3.0, 4.0]);
    assert_eq!(doubles.xy(), [3.0, 4.0]);
    assert_eq!(ints.xy(), [3.0, 4.0]);
    assert_eq!(longs.xy(), [3.0, 4.0]);
    assert_eq!(shared.xy(), [3.0, 4.0]);
}

#[cfg(feature = "geo-types")]
#[test]
fn generic_code_runs_on_geo_types() {
    let mut coord = geo_types::coord! { x: 1.0f64, y: 1.0 };
    let mut point = geo_types::Point::new(1i64, 1);

    nudge(&mut coord, 2, 3);
    nudge(&mut point, 2, 3);

    assert_eq!(coord, geo_types::coord! { x: 3.0, y: 4.0 });
    assert_eq!(point, geo_types::Point::new(3, 4));
}

#[test]
fn mixed_representations_feed_one_algorithm() {
    let floats = [[0.0f32, 0.0, 0.0], [3.0, 3.0, 3.0]];
    let ints = [[0i32, 0, 0], [3, 3, 3]];
    let c = centroid(&floats);
    assert_eq!(c, centroid(&ints));
    assert_relative_eq!(c[0], 1.5);
}

#[test]
fn rank_fidelity_across_adapters() {
    check_rank(&[0f32; 2], Rank::Two);
    check_rank(&[0i64; 3], Rank::Three);
    check_rank(&Rc::new([0f64; 4]), Rank::Four);
    check_rank(&Arc::new([0i32; 5]), Rank::Five);
    check_rank(&[0f32; 6], Rank::Six);
}

#[test]
fn wide_integers_survive_int_to_int_copies() {
    let source = [i32::MAX, i32::MIN, 16_777_217, -1, 0, 1];
    let mut wide = [0i64; 6];
    let mut shared = Arc::new([0i32; 6]);

    wide.assign(&source);
    shared.assign(&wide);

    assert_eq!(shared.xyzwuvi(), source);
}

#[test]
fn float_to_int_copies_truncate() {
    let mut ints = [0i32; 6];
    ints.assign(&[0.9f32, -0.9, 1.5, -1.5, 2.99, -2.99]);
    assert_eq!(ints, [0, 0, 1, -1, 2, -2]);
}

#[test]
fn pair_of_any_rank() {
    let mut ray = PointPair::new([0f32; 6], [0f32; 6]);
    reaim(&mut ray, &[1.0; 6], &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
    assert_eq!(ray.a.xyzwuv(), [1.0; 6]);
    assert_eq!(ray.b.v(), 1.0);

    let mut grid_ray = PointPair::new([0i32, 0], [1, 0]);
    reaim(&mut grid_ray, &[2, 2], &[0, 1]);
    assert_eq!(grid_ray, PointPair::new([2, 2], [0, 1]));
}

#[test]
fn try_set_rejects_other_ranks() {
    let mut p = [0f32; 3];
    let err = p.try_set_xyz(&[1.0, 2.0]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Rank mismatch: expected XYZ coordinates, found 2"
    );
    assert_eq!(p, [0.0; 3]);
}
