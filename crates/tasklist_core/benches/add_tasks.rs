//! Benchmark for the add-then-refresh write path.
//!
//! Measures `TaskManager::add` against an in-memory store, including the
//! full cache reload that follows every mutation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tasklist_core::{SqliteTaskStore, TaskManager};

fn bench_add_task(c: &mut Criterion) {
    let store = SqliteTaskStore::open_in_memory().expect("in-memory store should open");
    let mut manager = TaskManager::new(store).expect("manager should initialize");

    c.bench_function("manager/add_task", |b| {
        b.iter(|| {
            manager
                .add(black_box("Sample task description"))
                .expect("add should succeed");
        });
    });
}

criterion_group!(benches, bench_add_task);
criterion_main!(benches);
