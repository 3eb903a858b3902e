use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ddna_oligos::{nrepeats, palindrome_span, reverse_complement, stretch};
use std::time::Duration;

fn random_dna(len: usize) -> Vec<u8> {
    let bases = [b'A', b'C', b'G', b'T'];
    let mut seq = Vec::with_capacity(len);
    let mut state: u64 = 42;
    for _ in 0..len {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        seq.push(bases[((state >> 33) % 4) as usize]);
    }
    seq
}

fn benchmark_reverse_complement(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse_complement");

    for len in [20, 200, 10_000] {
        let seq = random_dna(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &seq, |b, seq| {
            b.iter(|| reverse_complement(black_box(seq), true))
        });
    }
    group.finish();
}

fn benchmark_palindrome(c: &mut Criterion) {
    let mut group = c.benchmark_group("palindrome");
    group.measurement_time(Duration::from_secs(10));

    for len in [20, 200, 2_000] {
        let seq = random_dna(len);
        group.bench_with_input(BenchmarkId::new("random", len), &seq, |b, seq| {
            b.iter(|| palindrome_span(black_box(seq), true))
        });

        // worst case: every center expands to the sequence ends
        let seq = b"AT".repeat(len / 2);
        group.bench_with_input(BenchmarkId::new("alternating", len), &seq, |b, seq| {
            b.iter(|| palindrome_span(black_box(seq), true))
        });
    }
    group.finish();
}

fn benchmark_repeats(c: &mut Criterion) {
    let mut group = c.benchmark_group("repeats");
    let seq = random_dna(10_000);

    group.bench_function("stretch", |b| b.iter(|| stretch(black_box(&seq))));
    for n in [1, 3, 8] {
        group.bench_with_input(BenchmarkId::new("nrepeats", n), &n, |b, &n| {
            b.iter(|| nrepeats(black_box(&seq), n))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_reverse_complement,
    benchmark_palindrome,
    benchmark_repeats
);
criterion_main!(benches);
