// std imports
use std::{hint::black_box, time::Duration};

// third-party imports
use const_str::concat as strcat;
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group};

// local imports
use super::{ND, hash};
use shglob::{CompiledMatcher, Glob, SHORTEST_SUFFIX};

criterion_group!(benches, bench);

const GROUP: &str = strcat!("shglob", ND, "compile");

fn bench(c: &mut Criterion) {
    let mut c = c.benchmark_group(GROUP);
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));

    for pattern in ["0*5", r"*[0-9]?\*.log", "????-??-??T*"] {
        let param = format!("{}:{}", pattern.len(), hash(pattern));

        c.bench_function(BenchmarkId::new("compile", &param), |b| {
            b.iter(|| CompiledMatcher::compile(black_box(pattern), SHORTEST_SUFFIX).unwrap());
        });

        c.bench_function(BenchmarkId::new("cached", &param), |b| {
            b.iter_batched(
                || {
                    let glob = Glob::new(pattern);
                    glob.compiled(SHORTEST_SUFFIX).unwrap();
                    glob
                },
                |glob| black_box(glob.compiled(SHORTEST_SUFFIX).unwrap()),
                BatchSize::SmallInput,
            );
        });
    }
}
