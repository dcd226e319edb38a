use circle_pack::collision_detection::SpatialIndex;
use circle_pack::entities::{Canvas, CircleSpec};
use circle_pack::placement::{PlacementEngine, rng_from_seed};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::Rng;

criterion_main!(benches);
criterion_group!(benches, placement_bench, overlap_query_bench);

const CANVAS_SIZES: [u32; 3] = [1000, 2000, 4000];
const N_QUERIES_PER_ITER: usize = 1000;

fn specs_for(canvas_size: u32) -> Vec<CircleSpec> {
    //scale the counts with the canvas area to keep the density comparable
    let scale = (canvas_size as usize / 1000).pow(2);
    vec![
        CircleSpec::new("red", 20, 30 * scale, "red"),
        CircleSpec::new("blue", 10, 200 * scale, "blue"),
        CircleSpec::new("green", 5, 1000 * scale, "green"),
    ]
}

/// Complete placement runs for increasingly large canvases at constant density.
fn placement_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement");
    group.sample_size(10);
    for size in CANVAS_SIZES {
        let canvas = Canvas::new(size, size).unwrap();
        let specs = specs_for(size);
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| {
                let mut rng = rng_from_seed(Some(0));
                PlacementEngine::place(&canvas, &specs, 5.0, 1000, &mut rng).unwrap()
            })
        });
    }
    group.finish();
}

/// Overlap queries against an index filled by a dense placement.
fn overlap_query_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlap_query_1k");
    for size in CANVAS_SIZES {
        let canvas = Canvas::new(size, size).unwrap();
        let specs = specs_for(size);
        let mut rng = rng_from_seed(Some(0));
        let result = PlacementEngine::place(&canvas, &specs, 5.0, 1000, &mut rng).unwrap();
        let mut index = SpatialIndex::with_default_span(25.0);
        for circle in &result.placed {
            index.add(circle.x as f64, circle.y as f64, circle.radius as f64);
        }

        let mut rng = rng_from_seed(Some(1));
        group.throughput(criterion::Throughput::Elements(N_QUERIES_PER_ITER as u64));
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| {
                let mut n_overlapping = 0;
                for _ in 0..N_QUERIES_PER_ITER {
                    let x = rng.random_range(10.0..size as f64 - 10.0);
                    let y = rng.random_range(10.0..size as f64 - 10.0);
                    if index.overlaps(x, y, 10.0, 5.0) {
                        n_overlapping += 1;
                    }
                }
                n_overlapping
            })
        });
    }
    group.finish();
}
