use criterion::{Criterion, criterion_group, criterion_main};
use jokes::{JokeSelector, RandomSource};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_select_named(c: &mut Criterion) {
    let selector = JokeSelector::default();
    let mut rng = StdRng::seed_from_u64(1);

    c.bench_function("selector/named_category", |b| {
        b.iter(|| selector.select(Some("冷笑话"), &mut rng).unwrap());
    });
}

fn bench_select_any(c: &mut Criterion) {
    let selector = JokeSelector::default();
    let mut rng = StdRng::seed_from_u64(1);

    c.bench_function("selector/any_category", |b| {
        b.iter(|| selector.select(None, &mut rng).unwrap());
    });
}

fn bench_select_rejected(c: &mut Criterion) {
    let selector = JokeSelector::default();
    let mut rng = StdRng::seed_from_u64(1);

    c.bench_function("selector/rejected_category", |b| {
        b.iter(|| selector.select(Some("美食"), &mut rng).unwrap_err());
    });
}

fn bench_thread_source(c: &mut Criterion) {
    let selector = JokeSelector::default();
    let source = RandomSource::Thread;

    c.bench_function("selector/thread_source", |b| {
        b.iter(|| source.with_rng(|rng| selector.select(None, rng).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_select_named,
    bench_select_any,
    bench_select_rejected,
    bench_thread_source
);
criterion_main!(benches);
