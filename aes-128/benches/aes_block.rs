use aes_128::Aes128;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_aes(c: &mut Criterion) {
    let cipher = Aes128::new(b"YELLOW SUBMARINE");
    let block = [0x42u8; 16];

    c.bench_function("aes128 encrypt block", |b| {
        b.iter(|| cipher.encrypt_block_array(black_box(&block)))
    });
    c.bench_function("aes128 decrypt block", |b| {
        b.iter(|| cipher.decrypt_block_array(black_box(&block)))
    });

    let text = "The quick brown fox jumps over the lazy dog. ".repeat(64);
    c.bench_function("aes128 cbc encrypt 2.8KiB", |b| {
        b.iter(|| aes_128::encrypt(black_box(&text), "YELLOW SUBMARINE", "cbc", Some("0123456789abcdef")))
    });
}

criterion_group!(benches, bench_aes);
criterion_main!(benches);
