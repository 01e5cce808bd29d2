//! Benchmarks for partial volume disk builds

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pvm_rust::config::{DiskConfig, ProcessingMode};
use pvm_rust::morphology::{build_partial_volume_disk, meshgrid, Circle, CoordinateGrid};

fn bench_disk(c: &mut Criterion) {
    let mut group = c.benchmark_group("morphology/partial_volume_disk");
    group.sample_size(10);

    for size in [9usize, 17, 33] {
        let axis: Vec<f64> = (0..size).map(|i| i as f64).collect();
        let (rr, cc) = meshgrid(&axis, &axis);
        let grid = CoordinateGrid::new(rr.view(), cc.view()).unwrap();
        let mid = (size / 2) as f64;
        let circle = Circle::new([mid, mid], mid - 0.5).unwrap();

        for (name, mode) in [
            ("sequential", ProcessingMode::Sequential),
            ("parallel", ProcessingMode::Parallel),
        ] {
            let config = DiskConfig::default()
                .with_precision(0.001)
                .with_seed(1)
                .with_mode(mode);
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| build_partial_volume_disk(black_box(&grid), &circle, &config).unwrap())
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_disk);
criterion_main!(benches);
