//! Benchmarks for SSML payload rendering
//!
//! This benchmark measures:
//! - Rendering a short request
//! - Rendering with growing text length
//! - The cost of escaping text before rendering

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use azure_tts::ssml;
use azure_tts::{Gender, Locale, VoiceRequest};

fn request(text: String) -> VoiceRequest {
    VoiceRequest::new(text, "en-US-AvaMultilingualNeural", Locale::EnUs, Gender::Female)
}

fn bench_render_short(c: &mut Criterion) {
    let req = request("64 BASIC BYTES FREE. READY.".to_string());
    c.bench_function("render_short", |b| {
        b.iter(|| ssml::render(black_box(&req)))
    });
}

fn bench_render_by_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_by_length");
    for len in [64usize, 1024, 16 * 1024] {
        let req = request("a".repeat(len));
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &req, |b, req| {
            b.iter(|| ssml::render(black_box(req)))
        });
    }
    group.finish();
}

fn bench_escape_then_render(c: &mut Criterion) {
    let raw = "Fish & chips <extra> 'salt' \"vinegar\" ".repeat(32);
    c.bench_function("escape_then_render", |b| {
        b.iter(|| {
            let escaped = ssml::escape_xml(black_box(&raw));
            ssml::render(&request(escaped.into_owned()))
        })
    });
}

criterion_group!(
    benches,
    bench_render_short,
    bench_render_by_length,
    bench_escape_then_render
);
criterion_main!(benches);
