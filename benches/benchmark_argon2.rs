use argonite::derivation::{argon2, Argon2Params, Variant};

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

pub fn bench_argon2(c: &mut Criterion) {
    let single = Argon2Params {
        mem_kib: 1024,
        time: 1,
        lanes: 1,
        ..Argon2Params::default()
    };
    c.bench_function("argon2id 1 MiB, 1 lane", |b| {
        b.iter(|| argon2(black_box(b"password"), black_box(b"benchsaltbench16"), &single))
    });

    let parallel = Argon2Params {
        lanes: 4,
        ..single.clone()
    };
    c.bench_function("argon2id 1 MiB, 4 lanes", |b| {
        b.iter(|| argon2(black_box(b"password"), black_box(b"benchsaltbench16"), &parallel))
    });

    let argon2d = Argon2Params {
        variant: Variant::D,
        ..single.clone()
    };
    c.bench_function("argon2d 1 MiB, 1 lane", |b| {
        b.iter(|| argon2(black_box(b"password"), black_box(b"benchsaltbench16"), &argon2d))
    });
}

criterion_group!(benches, bench_argon2);
criterion_main!(benches);
