//! Throughput of the UTF-8 and Latin-1 passes.

use std::hint::black_box;
use std::io;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use dv_core::charset::Charset;
use dv_core::config::DevolveOptions;
use dv_devolve::context::{FileContext, FilePosition};
use dv_devolve::devolver::Devolver;

const PROSE: &str = "Le cœur déçu mais l'âme plutôt naïve, Louÿs rêva d'un crapaüt \
                     — « 12 € » … 中文 ½\n";

fn corpus(line: &[u8], size: usize) -> Vec<u8> {
    line.iter().copied().cycle().take(size).collect()
}

fn run(options: &DevolveOptions, input: &[u8]) -> u64 {
    let mut ctx = FileContext::new("bench", FilePosition::single(), 0);
    let mut out = io::sink();
    Devolver::new(options)
        .devolve_stream(input, &mut ctx, &mut out, &mut io::sink())
        .map_or(0, |_| ctx.counts().lines)
}

fn bench_devolve(c: &mut Criterion) {
    let ascii = corpus(b"The quick brown fox jumps over the lazy dog.\n", 1 << 20);
    let utf8 = corpus(PROSE.as_bytes(), 1 << 20);
    let latin1: Vec<u8> = (0x20..=0xFFu8).filter(|b| *b != 0x7F).chain([b'\n']).collect();
    let latin1 = corpus(&latin1, 1 << 20);

    let utf8_options = DevolveOptions::default();
    let latin1_options = DevolveOptions {
        charset: Charset::Latin1,
        ..Default::default()
    };

    let mut group = c.benchmark_group("devolve");
    for (name, options, data) in [
        ("ascii", &utf8_options, &ascii),
        ("utf8", &utf8_options, &utf8),
        ("latin1", &latin1_options, &latin1),
    ] {
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), data, |b, data| {
            b.iter(|| run(options, black_box(data)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_devolve);
criterion_main!(benches);
