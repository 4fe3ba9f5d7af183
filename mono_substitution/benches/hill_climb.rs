use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mono_substitution::{crack, encrypt, CrackConfig, Key, Prepared};

fn bench_mono(c: &mut Criterion) {
    let plaintext = "It was late in the afternoon when the old ship finally came into the harbor. ".repeat(12);
    let key: Key = "PHQGIUMEAYLNOFDXJKRCVSTZWB".parse().unwrap();
    let ciphertext = encrypt(&plaintext, &key);

    let mut prepared = Prepared::new(&ciphertext);
    c.bench_function("mono score candidate key", |b| b.iter(|| prepared.score(black_box(&key))));

    let config = CrackConfig {
        restarts: 2,
        seed: Some(1),
        ..CrackConfig::default()
    };
    c.bench_function("mono crack two restarts", |b| {
        b.iter(|| crack(black_box(&ciphertext), &config, |_| {}))
    });
}

criterion_group!(benches, bench_mono);
criterion_main!(benches);
