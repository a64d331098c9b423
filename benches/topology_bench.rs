use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use alpha_topos::algs::lattice::{granularity, intersected_points, unique_points};
use alpha_topos::topology::label::Label;
use alpha_topos::topology::topos::Topology;

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_topology");

    for &radius in &[1i64, 2, 4] {
        group.bench_with_input(BenchmarkId::new("20x20", radius), &radius, |b, &r| {
            b.iter(|| Topology::build(black_box(20), black_box(20), r))
        });
    }
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let topo = Topology::build(20, 20, 2).expect("valid grid");
    let label = Label::from_coords(3, 3);

    let mut group = c.benchmark_group("lattice_queries");
    group.bench_function("unique_points", |b| b.iter(|| unique_points(black_box(&topo))));
    group.bench_function("intersected_points", |b| {
        b.iter(|| intersected_points(black_box(&topo)))
    });
    group.bench_function("granularity", |b| {
        b.iter(|| granularity(black_box(&topo), black_box(label)))
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_queries);
criterion_main!(benches);
