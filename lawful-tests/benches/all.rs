use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lawful::{sequence, Monad, PartiallyApplied};
use pprof::criterion::{Output, PProfProfiler};

type OptionM = Option<PartiallyApplied>;

fn bench_all(criterion: &mut Criterion) {
    let test_cases: Vec<Vec<Option<u64>>> = [16, 256, 1024]
        .into_iter()
        .map(|n| (0..n).map(Some).collect())
        .collect();

    let mut group = criterion.benchmark_group("option_all");

    for input in test_cases.into_iter() {
        group.bench_with_input(
            BenchmarkId::new("collect", input.len()),
            &input,
            |b, input| b.iter(|| input.iter().copied().collect::<Option<Vec<u64>>>()),
        );

        group.bench_with_input(
            BenchmarkId::new("Monad::all", input.len()),
            &input,
            |b, input| b.iter(|| <OptionM as Monad>::all(input.iter().copied())),
        );

        group.bench_with_input(
            BenchmarkId::new("sequence", input.len()),
            &input,
            |b, input| b.iter(|| sequence::<OptionM, _>(input.iter().copied())),
        );
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_profiler(
            PProfProfiler::new(100, Output::Flamegraph(None))
        );
    targets = bench_all
}
criterion_main!(benches);
