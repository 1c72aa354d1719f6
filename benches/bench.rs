// Criterion benchmarks for Office Locator

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use office_locator::catalog::bolivian_offices;
use office_locator::core::{
    distance::haversine_distance,
    filters::filter_offices,
    ranking::rank_offices,
    OfficeLocator,
};
use office_locator::models::{Criteria, Location, Office};

/// Catalog of `count` offices spread over the built-in ones
fn create_catalog(count: usize) -> Vec<Office> {
    let base = bolivian_offices();
    (0..count)
        .map(|i| {
            let mut office = base[i % base.len()].clone();
            office.id = i.to_string();
            office.name = format!("{} {}", office.name, i);
            office.latitude += (i as f64 * 0.001) % 0.5;
            office.longitude += (i as f64 * 0.001) % 0.5;
            office
        })
        .collect()
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(-16.5000),
                black_box(-68.1193),
                black_box(-16.5069),
                black_box(-68.1310),
            )
        });
    });
}

fn bench_search(c: &mut Criterion) {
    let location = Location::new(-16.5, -68.13);
    let criteria = Criteria::new("a", "all", "all");

    let mut group = c.benchmark_group("search");

    for office_count in [13, 100, 1000].iter() {
        let locator = OfficeLocator::new(create_catalog(*office_count));

        group.bench_with_input(
            BenchmarkId::new("with_location", office_count),
            office_count,
            |b, _| b.iter(|| locator.search(black_box(&criteria), black_box(Some(&location)))),
        );

        group.bench_with_input(
            BenchmarkId::new("by_name", office_count),
            office_count,
            |b, _| b.iter(|| locator.search(black_box(&criteria), None)),
        );
    }

    group.finish();
}

fn bench_pipeline_stages(c: &mut Criterion) {
    let catalog = create_catalog(100);
    let criteria = Criteria::new("sucursal", "all", "all");
    let location = Location::new(-17.0, -65.0);

    c.bench_function("filter_100_offices", |b| {
        b.iter(|| filter_offices(black_box(&catalog), black_box(&criteria)));
    });

    c.bench_function("rank_100_offices", |b| {
        b.iter(|| rank_offices(black_box(catalog.clone()), black_box(Some(&location))));
    });
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_search,
    bench_pipeline_stages
);

criterion_main!(benches);
