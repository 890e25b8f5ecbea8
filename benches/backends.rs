//! Runtime comparison of the scheduling backends on demo workloads.

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

use task_anneal::anneal::{AnnealConfig, AnnealingScheduler};
use task_anneal::availability::WindowConfig;
use task_anneal::demo::generate_tasks;
use task_anneal::{GreedyScheduler, Scheduler, SequentialScheduler};

fn window() -> WindowConfig {
    WindowConfig::default().with_first_day(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
}

fn bench_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("schedule");
    group.sample_size(10);

    for n in [10usize, 20, 40, 80] {
        let tasks = generate_tasks(n, 0.5, window().first_day, &mut StdRng::seed_from_u64(42));

        group.bench_with_input(BenchmarkId::new("annealing", n), &tasks, |b, tasks| {
            b.iter(|| {
                let config = AnnealConfig::default().with_seed(42);
                let mut s = AnnealingScheduler::with_config(tasks.clone(), window(), config).unwrap();
                black_box(s.schedule().unwrap())
            })
        });
        group.bench_with_input(BenchmarkId::new("greedy", n), &tasks, |b, tasks| {
            b.iter(|| {
                let mut s = GreedyScheduler::with_config(tasks.clone(), window()).unwrap();
                black_box(s.schedule().unwrap())
            })
        });
        group.bench_with_input(BenchmarkId::new("sequential", n), &tasks, |b, tasks| {
            b.iter(|| {
                let mut s = SequentialScheduler::with_config(tasks.clone(), window()).unwrap();
                black_box(s.schedule().unwrap())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_backends);
criterion_main!(benches);
