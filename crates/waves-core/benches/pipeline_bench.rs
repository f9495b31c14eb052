// File: crates/waves-core/benches/pipeline_bench.rs
// Summary: Snapshot ingestion cost (map + classify + tooltip) for typical watchlist sizes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::{json, Value};
use waves_core::build_snapshot;

fn records(n: usize) -> Vec<Value> {
    let zones = ["overbought", "oversold", "neutral", "unknown"];
    (0..n)
        .map(|i| {
            let rsi = (i as f64 * 0.37).sin() * 60.0 + 50.0;
            json!({
                "rank": i,
                "rsi": rsi,
                "zone": zones[i % zones.len()],
                "symbol": format!("SYM{i}"),
                "name": if i % 3 == 0 { format!("Instrument {i}") } else { String::new() },
                "price": 100.0 + i as f64 * 0.25,
                "priceChangePct": (i as f64 * 0.11).cos() * 4.0,
            })
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_snapshot");
    for &n in &[30usize, 500usize, 5_000usize] {
        let data = records(n);
        group.bench_function(format!("records_{n}"), |b| {
            b.iter(|| black_box(build_snapshot(black_box(&data), "2024-05-01 12:00")));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
