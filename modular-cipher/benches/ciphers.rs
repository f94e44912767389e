use criterion::{black_box, criterion_group, criterion_main, Criterion};
use modular_cipher::{
    AffineCipher, AffineKeyPair, ByteShiftCipher, Modulus, ShiftCipher, SubstitutionCipher,
};

fn bench_cipher<C: SubstitutionCipher>(c: &mut Criterion, cipher: &C, data: &[u8]) {
    c.bench_function(&format!("{} encrypt 64 KiB", cipher.name()), |b| {
        b.iter(|| cipher.encrypt(black_box(data)))
    });
}

fn bench_ciphers(c: &mut Criterion) {
    let data: Vec<u8> = (0..64 * 1024).map(|i| (i % 256) as u8).collect();

    bench_cipher(c, &ShiftCipher::new(3), &data);
    bench_cipher(c, &ByteShiftCipher::new(3, Modulus::BYTE), &data);

    if let Ok(keys) = AffineKeyPair::generate(Modulus::BYTE) {
        bench_cipher(c, &AffineCipher::new(keys), &data);
    }
}

fn bench_key_search(c: &mut Criterion) {
    c.bench_function("key pair search mod 256", |b| {
        b.iter(|| AffineKeyPair::generate(black_box(Modulus::BYTE)))
    });
    c.bench_function("all key pairs mod 256", |b| {
        b.iter(|| AffineKeyPair::candidates(black_box(Modulus::BYTE)).count())
    });
}

criterion_group!(benches, bench_ciphers, bench_key_search);
criterion_main!(benches);
