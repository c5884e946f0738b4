use criterion::{black_box, criterion_group, criterion_main, Criterion};
use paceline::map::WorkoutMap;
use paceline::models::{Coordinates, MarkerHandle, Sport, WorkoutDraft};
use paceline::services::{SortKey, WorkoutCollection};

/// Map port that does nothing beyond issuing handles.
struct NullMap {
    next_handle: u64,
}

impl WorkoutMap for NullMap {
    fn create_marker(&mut self, _coords: Coordinates, _popup: &str) -> MarkerHandle {
        let handle = MarkerHandle::new(self.next_handle);
        self.next_handle += 1;
        handle
    }

    fn update_marker_popup(&mut self, _handle: MarkerHandle, _popup: &str) {}

    fn remove_marker(&mut self, _handle: MarkerHandle) {}

    fn focus(&mut self, _coords: Coordinates) {}

    fn fit_bounds(&mut self, _bounds: geo::Rect<f64>) {}
}

fn build_collection(n: usize) -> WorkoutCollection {
    let mut collection = WorkoutCollection::new(Box::new(NullMap { next_handle: 0 }));
    for i in 0..n {
        // Deterministic spread of distances/durations across both sports.
        let distance_km = 1.0 + (i % 40) as f64;
        let duration_min = 10.0 + ((i * 7) % 120) as f64;
        let draft = if i % 2 == 0 {
            WorkoutDraft::new(
                Sport::Running {
                    cadence_spm: 140.0 + (i % 40) as f64,
                },
                distance_km,
                duration_min,
            )
        } else {
            WorkoutDraft::new(
                Sport::Cycling {
                    elevation_gain_m: 50.0 + (i % 900) as f64,
                },
                distance_km,
                duration_min,
            )
        };
        let lat = 54.0 + (i % 100) as f64 / 100.0;
        let lng = -1.6 + (i % 100) as f64 / 100.0;
        collection
            .create(Coordinates::new(lat, lng), draft)
            .expect("valid draft");
    }
    collection
}

fn benchmark_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_10k");

    for (name, key) in [
        ("date", SortKey::Date),
        ("distance", SortKey::Distance),
        ("duration", SortKey::Duration),
        ("speed", SortKey::Speed),
        ("type", SortKey::Type),
    ] {
        group.bench_function(name, |b| {
            let mut collection = build_collection(10_000);
            b.iter(|| collection.sort(black_box(key)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_sort);
criterion_main!(benches);
