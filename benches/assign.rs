use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crux::{Point3, PointPair};

fn create_data() -> Vec<[i32; 3]> {
    (0..1000).map(|i| [i, -i, i * 2]).collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let data = create_data();

    c.bench_function("assign [i32; 3] into [i64; 3]", |b| {
        let mut target = [0i64; 3];
        b.iter(|| {
            for p in &data {
                black_box(target.assign(p));
            }
        })
    });

    c.bench_function("assign [i32; 3] into [f32; 3]", |b| {
        let mut target = [0f32; 3];
        b.iter(|| {
            for p in &data {
                black_box(target.assign(p));
            }
        })
    });

    c.bench_function("set PointPair<[f32; 3]>", |b| {
        let mut pair = PointPair::new([0f32; 3], [0f32; 3]);
        let other = PointPair::new([1f32, 2.0, 3.0], [0f32, 0.0, 1.0]);
        b.iter(|| {
            black_box(pair.set(black_box(&other)));
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
