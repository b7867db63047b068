use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tweening::{Easing, EasingParams};

fn bench_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("easing");
    for easing in Easing::ALL {
        group.bench_function(easing.name(), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for i in 0..=100 {
                    let t = i as f64 / 50.0;
                    acc += easing.evaluate(black_box(t), 10.0, 90.0, 2.0);
                }
                acc
            })
        });
    }
    group.finish();
}

fn bench_elastic_with_params(c: &mut Criterion) {
    let params = EasingParams {
        amplitude: Some(120.0),
        period: Some(0.4),
        ..Default::default()
    };
    c.bench_function("elastic_ease_out_with_params", |b| {
        b.iter(|| Easing::ElasticEaseOut.evaluate_with(black_box(0.7), 10.0, 90.0, 2.0, &params))
    });
}

criterion_group!(benches, bench_catalog, bench_elastic_with_params);
criterion_main!(benches);
