//! Benchmarks for the in-memory store.
//!
//! Measures query insertion and full-history listing, the two operations
//! every page load and submission hits.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use insight_core::types::NewQuery;
use insight_storage::{MemStorage, Storage};

fn make_query(index: usize) -> NewQuery {
    NewQuery {
        session_id: Some((index % 4) as u64 + 1),
        query: format!("What changed in release {} of the billing service?", index),
        response: Some("simulated".to_string()),
        is_voice_input: Some(index % 3 == 0),
        data_sources: vec!["jira".to_string(), "confluence".to_string()],
    }
}

fn seeded_store(count: usize) -> MemStorage {
    let store = MemStorage::new();
    for i in 0..count {
        store.create_query(make_query(i)).expect("seed query");
    }
    store
}

fn bench_create_query(c: &mut Criterion) {
    let store = MemStorage::new();
    let mut i = 0usize;
    c.bench_function("create_query", |b| {
        b.iter(|| {
            i += 1;
            black_box(store.create_query(make_query(i)).expect("create"));
        })
    });
}

fn bench_list_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_all_queries");
    for size in [100usize, 1_000, 10_000] {
        let store = seeded_store(size);
        group.bench_function(format!("{}", size), |b| {
            b.iter(|| black_box(store.get_all_queries().expect("list")))
        });
    }
    group.finish();
}

fn bench_delete_session_cascade(c: &mut Criterion) {
    c.bench_function("delete_chat_session_1000", |b| {
        b.iter_batched(
            || seeded_store(1_000),
            |store| store.delete_chat_session(2).expect("delete"),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_create_query,
    bench_list_queries,
    bench_delete_session_cascade
);
criterion_main!(benches);
