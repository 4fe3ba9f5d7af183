use criterion::{black_box, criterion_group, criterion_main, Criterion};
use freq_analysis::{chi_squared_score, count_frequencies, index_of_coincidence, QUADGRAMS, TRIGRAMS};

fn bench_scoring(c: &mut Criterion) {
    let text = "It was late in the afternoon when the old ship finally came into the harbor. ".repeat(14);
    // Build the tables outside the timed loops.
    let _ = QUADGRAMS.n() + TRIGRAMS.n();

    c.bench_function("quadgram score 1KiB", |b| b.iter(|| QUADGRAMS.score(black_box(&text))));
    c.bench_function("trigram score 1KiB", |b| b.iter(|| TRIGRAMS.score(black_box(&text))));
    c.bench_function("chi-squared + IC 1KiB", |b| {
        b.iter(|| {
            let counts = count_frequencies(black_box(&text));
            (chi_squared_score(&counts), index_of_coincidence(&counts))
        })
    });
}

criterion_group!(benches, bench_scoring);
criterion_main!(benches);
