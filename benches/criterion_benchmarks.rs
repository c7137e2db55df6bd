use criterion::{Criterion, black_box, criterion_group, criterion_main};

use glyphveil::decode::{DecodeContext, UniversalDecoder};
use glyphveil::stego::{EmojiIndex, StegFormat, decode_hidden, encode_hidden};
use glyphveil::transforms::builtin;

const SAMPLE: &str = "The quick brown fox jumps over the lazy dog. 0123456789 🌞";

fn bench_transforms(c: &mut Criterion) {
    let reg = builtin();
    let mut group = c.benchmark_group("transforms");

    for key in ["base64", "base58", "morse_code", "caesar_cipher", "bubble"] {
        group.bench_function(format!("encode/{key}"), |b| {
            b.iter(|| reg.encode(black_box(key), black_box(SAMPLE)).unwrap());
        });
        let encoded = reg.encode(key, SAMPLE).unwrap();
        group.bench_function(format!("decode/{key}"), |b| {
            b.iter(|| reg.decode(black_box(key), black_box(&encoded)).unwrap());
        });
    }
    group.finish();
}

fn bench_steganography(c: &mut Criterion) {
    let format = StegFormat::default();
    let catalog = EmojiIndex::builtin();
    let encoded = encode_hidden("🐍", SAMPLE, &format);

    let mut group = c.benchmark_group("steganography");
    group.bench_function("encode", |b| {
        b.iter(|| encode_hidden(black_box("🐍"), black_box(SAMPLE), &format));
    });
    group.bench_function("decode", |b| {
        b.iter(|| decode_hidden(black_box(&encoded), &format, catalog));
    });
    group.finish();
}

fn bench_universal_decode(c: &mut Criterion) {
    let reg = builtin();
    let decoder = UniversalDecoder::new(&reg);
    let base64 = reg.encode("base64", SAMPLE).unwrap();
    let binary = reg.encode("binary", "short msg").unwrap();

    let mut group = c.benchmark_group("universal_decode");
    group.bench_function("base64_input", |b| {
        b.iter(|| decoder.decode(black_box(&base64), &DecodeContext::default()));
    });
    group.bench_function("binary_exclusive", |b| {
        b.iter(|| decoder.decode(black_box(&binary), &DecodeContext::default()));
    });
    group.bench_function("plain_prose", |b| {
        b.iter(|| decoder.decode(black_box(SAMPLE), &DecodeContext::default()));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_transforms,
    bench_steganography,
    bench_universal_decode
);
criterion_main!(benches);
