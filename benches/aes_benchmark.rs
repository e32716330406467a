use criterion::{criterion_group, criterion_main, Criterion};
use gfkit::aes;
use gfkit::{Fq, Zp, ZpPoly};
use std::hint::black_box;

fn bench_encrypt_block(c: &mut Criterion) {
    let key = *b"\x2b\x7e\x15\x16\x28\xae\xd2\xa6\xab\xf7\x15\x88\x09\xcf\x4f\x3c";
    let msg = *b"\x6b\xc1\xbe\xe2\x2e\x40\x9f\x96\xe9\x3d\x7e\x11\x73\x93\x17\x2a";

    c.bench_function("aes128_encrypt_block", |b| {
        b.iter(|| aes::encrypt_block(black_box(&key), black_box(&msg)))
    });
}

fn bench_scalar_mul(c: &mut Criterion) {
    let p = 18_446_744_073_709_551_557u64;
    let x = Zp::new(0x0123_4567_89ab_cdef);
    let y = Zp::new(0xfedc_ba98_7654_3210 % p);

    c.bench_function("zp_mul_64bit_prime", |b| {
        b.iter(|| black_box(x).mul(black_box(y), p))
    });
}

fn bench_field_inverse(c: &mut Criterion) {
    let r = ZpPoly::from_ints(&[1, 1, 0, 1, 1, 0, 0, 0, 1]);
    let x = Fq::from_int(0x53, 2);

    c.bench_function("gf256_inverse", |b| b.iter(|| black_box(&x).inv(&r, 2)));
}

criterion_group!(
    benches,
    bench_encrypt_block,
    bench_scalar_mul,
    bench_field_inverse
);
criterion_main!(benches);
