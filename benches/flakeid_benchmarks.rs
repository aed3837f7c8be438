use criterion::{criterion_group, criterion_main, Criterion};
use flakeid::{codec, FlakeId, IdPayload};
use std::hint::black_box;

pub fn generation_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Generation");

    group.bench_function("next_id", |b| {
        let generator = FlakeId::new().unwrap();
        b.iter(|| {
            black_box(generator.next_id().unwrap());
        });
    });

    group.finish();
}

pub fn codec_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Codec");

    let payload = IdPayload {
        timestamp: 1_678_160_200_841,
        machine_id: 12,
        sequence: 5,
    };
    let id = codec::encode(&payload).unwrap();

    group.bench_function("encode", |b| {
        b.iter(|| {
            black_box(codec::encode(black_box(&payload)).unwrap());
        });
    });

    group.bench_function("decode", |b| {
        b.iter(|| {
            black_box(codec::decode(black_box(id)));
        });
    });

    group.finish();
}

pub fn contention_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Contention");

    for &thread_count in &[2, 4, 8] {
        group.bench_function(format!("threads/{}", thread_count), |b| {
            b.iter(|| {
                let generator = std::sync::Arc::new(FlakeId::new().unwrap());
                let mut handles = Vec::with_capacity(thread_count);

                for _ in 0..thread_count {
                    let gen = std::sync::Arc::clone(&generator);
                    handles.push(std::thread::spawn(move || {
                        black_box(gen.next_id().unwrap());
                    }));
                }

                for handle in handles {
                    handle.join().unwrap();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    generation_benchmarks,
    codec_benchmarks,
    contention_benchmarks
);
criterion_main!(benches);
