//! Salsa20 benchmark
use benches::{criterion_group_bench, Benchmarker};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use salsa20::{
    cipher::{KeyIvInit, StreamCipher},
    Salsa20,
};

const KB: usize = 1024;

const KEY: [u8; 32] = [0x42; 32];

const NONCE: [u8; 8] = [0x24; 8];

fn bench_salsa20(c: &mut Benchmarker) {
    let mut group = c.benchmark_group("salsa20-stream-cipher");

    for size in &[KB, 2 * KB, 4 * KB, 8 * KB, 16 * KB] {
        let mut buf = vec![0u8; *size];

        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_function(BenchmarkId::new("apply_keystream", size), |b| {
            let mut cipher = Salsa20::new(&KEY.into(), &NONCE.into());
            b.iter(|| cipher.apply_keystream(&mut buf));
        });

        group.bench_function(BenchmarkId::new("xor_ic", size), |b| {
            let mut counter = 0u64;
            b.iter(|| {
                salsa20::xor_ic(buf.as_mut_slice().into(), &NONCE, counter, &KEY);
                counter = counter.wrapping_add((buf.len() / salsa20::BLOCK_SIZE) as u64);
            });
        });
    }

    group.finish();
}

criterion_group_bench!(benches_salsa20, bench_salsa20);

criterion_main!(benches_salsa20);
