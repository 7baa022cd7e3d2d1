//! Performance benchmarks for tower-to-jet-input construction
//!
//! Run with: cargo bench
//!
//! Covers the single-tower projection and full per-event passes at
//! realistic tower multiplicities.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tower_jet_input::{
    EventVertex, InMemoryEventStore, InputSelector, TowerContainer, TowerGeometry,
    TowerGeometryContainer, TowerJetInput, VertexCollection, GLOBAL_VERTEX_MAP,
};

// ═══════════════════════════════════════════════════════════════════════════
// KINEMATICS BENCHMARKS
// ═══════════════════════════════════════════════════════════════════════════

fn bench_project_tower(c: &mut Criterion) {
    let geometry = TowerGeometry::new(97.0, 24.0, 55.0, 100.0);

    c.bench_function("project_tower", |b| {
        b.iter(|| {
            tower_jet_input::project_tower(black_box(10.0), black_box(&geometry), black_box(3.5))
        })
    });
}

// ═══════════════════════════════════════════════════════════════════════════
// PIPELINE BENCHMARKS
// ═══════════════════════════════════════════════════════════════════════════

fn event_store(n_towers: u32) -> InMemoryEventStore {
    let mut towers = TowerContainer::new();
    let mut geometry = TowerGeometryContainer::new();
    for id in 0..n_towers {
        let phi = id as f64 * 0.025;
        towers.insert(id, 0.1 + (id % 37) as f64 * 0.3);
        geometry.insert(
            id,
            TowerGeometry::new(
                100.0 * phi.cos(),
                100.0 * phi.sin(),
                -120.0 + (id % 24) as f64 * 10.0,
                100.0,
            ),
        );
    }

    let mut vertices = VertexCollection::new();
    vertices.push(EventVertex::at_z(2.5));

    InMemoryEventStore::new()
        .with_towers("TOWER_CALIB_CEMC", towers)
        .with_geometry("TOWERGEOM_CEMC", geometry)
        .with_vertex_map(GLOBAL_VERTEX_MAP, vertices)
}

fn bench_process_event(c: &mut Criterion) {
    let mut group = c.benchmark_group("process_event");
    for n_towers in [64u32, 256, 1024, 24576].iter() {
        let store = event_store(*n_towers);
        let mut pipeline = TowerJetInput::new(InputSelector::CemcTower);

        group.throughput(Throughput::Elements(*n_towers as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n_towers), n_towers, |b, _| {
            b.iter(|| pipeline.process_event(black_box(&store)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_project_tower, bench_process_event);
criterion_main!(benches);
