// std imports
use std::{hint::black_box, time::Duration};

// third-party imports
use const_str::concat as strcat;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group};

// local imports
use super::{ND, hash};
use shglob::{Glob, LONGEST_PREFIX, LONGEST_SUFFIX, MATCH_WHOLE_STRING, MatchMode, SHORTEST_PREFIX, SHORTEST_SUFFIX};

criterion_group!(benches, bench);

const GROUP: &str = strcat!("shglob", ND, "match");

fn bench(c: &mut Criterion) {
    let mut c = c.benchmark_group(GROUP);
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));

    const MODES: [(&str, MatchMode); 5] = [
        ("whole", MATCH_WHOLE_STRING),
        ("shortest-prefix", SHORTEST_PREFIX),
        ("longest-prefix", LONGEST_PREFIX),
        ("shortest-suffix", SHORTEST_SUFFIX),
        ("longest-suffix", LONGEST_SUFFIX),
    ];

    let long = "0".repeat(256) + "5";
    let variants = [
        ("short", "0*5", "011115012225"),
        ("class", "[0-9]*?5", "011115012225"),
        ("long", "0*5", long.as_str()),
    ];

    for (name, pattern, input) in &variants {
        let glob = Glob::new(*pattern);
        for (mname, mode) in &MODES {
            let param = format!("{}:{}:{}:{}", name, mname, input.len(), hash((pattern, input)));
            let matcher = glob.compiled(*mode).unwrap();

            c.throughput(Throughput::Bytes(input.len() as u64));
            c.bench_function(BenchmarkId::new("match_with_position", param), |b| {
                b.iter(|| black_box(&matcher).match_with_position(black_box(input)));
            });
        }
    }
}
