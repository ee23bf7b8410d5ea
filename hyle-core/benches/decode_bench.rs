use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hyle_core::tokens::tokenize;
use hyle_core::HyleOutput;

fn sample_output(state_len: usize) -> HyleOutput {
    HyleOutput {
        version: 1,
        initial_state: vec![0xab; state_len],
        next_state: vec![0xcd; state_len],
        origin: "origin.hyle".to_string(),
        caller: "caller.hyle".to_string(),
        block_number: u64::MAX,
        block_time: 1_700_000_000,
        tx_hash: vec![0x11; 32],
    }
}

fn bench_decode_small(c: &mut Criterion) {
    let tokens = sample_output(4).encode().unwrap();
    c.bench_function("decode_small", |b| {
        b.iter(|| HyleOutput::from_tokens(black_box(&tokens)))
    });
}

fn bench_decode_large_state(c: &mut Criterion) {
    let tokens = sample_output(4096).encode().unwrap();
    c.bench_function("decode_large_state", |b| {
        b.iter(|| HyleOutput::from_tokens(black_box(&tokens)))
    });
}

fn bench_parse_text(c: &mut Criterion) {
    let text = sample_output(256).to_token_string().unwrap();
    c.bench_function("tokenize_and_decode", |b| {
        b.iter(|| HyleOutput::from_tokens(&tokenize(black_box(&text))))
    });
}

fn bench_oversized_length_rejected(c: &mut Criterion) {
    // Length prefix far beyond the stream; capacity is bounded by what is left.
    let tokens = ["1", "18446744073709551615", "00"];
    c.bench_function("oversized_length_rejected", |b| {
        b.iter(|| HyleOutput::from_tokens(black_box(&tokens)))
    });
}

criterion_group!(
    benches,
    bench_decode_small,
    bench_decode_large_state,
    bench_parse_text,
    bench_oversized_length_rejected
);
criterion_main!(benches);
