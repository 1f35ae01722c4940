//! Benchmarks for the dashboard controller
//!
//! Run with: cargo bench

use biopharm::dashboard::{is_visible, DashboardController, SampleData, NAV_ITEMS};
use biopharm::session::{FileStore, MemoryStore, Role, SessionRecord, SessionStore};
use biopharm::view::RecordingView;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tempfile::tempdir;

fn bench_visibility(c: &mut Criterion) {
    let mut group = c.benchmark_group("visibility");
    group.throughput(Throughput::Elements(NAV_ITEMS.len() as u64));

    for role in [
        Role::Admin,
        Role::Staff,
        Role::Cashier,
        Role::Other("pharmacist".into()),
    ] {
        group.bench_function(format!("policy_{}", role), |b| {
            b.iter(|| {
                NAV_ITEMS
                    .iter()
                    .filter(|item| is_visible(black_box(&role), item.key))
                    .count()
            })
        });
    }

    group.finish();
}

fn bench_dashboard_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard");

    group.bench_function("open_memory", |b| {
        let mut store = MemoryStore::new();
        store.set(&SessionRecord::new("staff", "sam")).unwrap();
        let mut controller = DashboardController::new(store, RecordingView::new());

        b.iter(|| black_box(controller.open_dashboard()))
    });

    group.bench_function("open_file", |b| {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("session.json"));
        store.set(&SessionRecord::new("cashier", "carol")).unwrap();
        let mut controller = DashboardController::new(store, RecordingView::new());

        b.iter(|| black_box(controller.load_dashboard()))
    });

    group.bench_function("chart_specs", |b| {
        let sample = SampleData::DEFAULT;
        b.iter(|| {
            black_box(sample.sales_chart());
            black_box(sample.inventory_chart());
        })
    });

    group.finish();
}

criterion_group!(benches, bench_visibility, bench_dashboard_load);
criterion_main!(benches);
