use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use popcount_shootout::kernels::BUFFER_KERNELS;

mod common;

fn bench_shootout(b: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let mut group = b.benchmark_group("Shoot-out");
    group.plot_config(common::plot_config());

    for len in common::SIZES {
        // odd length, so every kernel takes its tail path
        let bytes = common::fill_random_bytes(&mut rng, len + 13);
        group.throughput(Throughput::Bytes(bytes.len() as u64));

        for (name, kernel) in BUFFER_KERNELS {
            group.bench_with_input(BenchmarkId::new(name, len), &bytes, |b, bytes| {
                b.iter(|| black_box(kernel(black_box(bytes.as_slice()))))
            });
        }
        drop(bytes);
    }
    group.finish();
}

criterion_group!(benches, bench_shootout);
criterion_main!(benches);
