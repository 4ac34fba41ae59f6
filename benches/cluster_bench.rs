use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use poi_map::{ClusterOptions, Clusterer, Coordinate, HostId, MarkerHandle, MarkerPoint, Viewport};
use std::hint::black_box;

/// Synthetisches Marker-Raster um Sydney mit leichtem Versatz je Zeile.
fn build_synthetic_markers(count: usize) -> Vec<MarkerPoint> {
    (0..count)
        .map(|index| {
            let column = (index % 100) as f64;
            let row = (index / 100) as f64;
            MarkerPoint {
                id: format!("poi-{index:05}"),
                handle: MarkerHandle::from_raw(index as u64 + 1),
                position: Coordinate::new(
                    -34.0 + row * 0.003 + column * 0.0001,
                    151.0 + column * 0.003 + row * 0.0001,
                ),
            }
        })
        .collect()
}

fn bench_cluster_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("cluster_recompute");

    for &count in &[100usize, 1_000, 10_000] {
        let markers = build_synthetic_markers(count);

        for &zoom in &[10.0, 14.0] {
            let viewport = Viewport::new(Coordinate::new(-33.86, 151.21), zoom, [1280.0, 720.0]);
            let mut clusterer = Clusterer::new(HostId(1), ClusterOptions::default(), viewport);

            group.bench_with_input(
                BenchmarkId::new(format!("zoom_{zoom}"), count),
                &markers,
                |b, markers| {
                    b.iter(|| {
                        clusterer.recompute(black_box(markers));
                        black_box(clusterer.groups().len())
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_cluster_recompute);
criterion_main!(benches);
