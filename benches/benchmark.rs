use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use refixture::generate;

pub fn benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixture generation");
    group.measurement_time(Duration::from_secs(1));

    let inputs = (1..=8).map(|n| (n, vec!["12-34 and 56-78 or 90-12 ".repeat(n)]));

    for (n, input) in inputs {
        group.bench_with_input(
            BenchmarkId::new(format!("n={n}"), 0),
            &input,
            |b, inputs| {
                b.iter(|| generate(r"(\d+)-(\d+)", inputs).unwrap());
            },
        );
    }
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
