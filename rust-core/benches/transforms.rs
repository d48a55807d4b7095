use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spectral_transform::{ExactTransform, FastTransform, Transform};

fn test_signal(n: usize) -> Vec<f64> {
    (0..n).map(|i| (i as f64 * 0.05).sin() + 0.3 * (i as f64 * 0.71).cos()).collect()
}

fn bench_fast(c: &mut Criterion) {
    let mut group = c.benchmark_group("fast_transform");

    for size in [512, 1024, 2048, 4096] {
        let signal = test_signal(size);
        let mut fft = FastTransform::new(size, 44100.0);

        group.bench_with_input(BenchmarkId::new("forward", size), &signal, |b, signal| {
            b.iter(|| {
                fft.forward(black_box(signal)).unwrap();
            })
        });

        fft.forward(&signal).unwrap();
        let (real, imag) = (fft.real().to_vec(), fft.imag().to_vec());

        group.bench_with_input(BenchmarkId::new("inverse", size), &size, |b, _| {
            b.iter(|| black_box(fft.inverse(black_box(&real), black_box(&imag)).unwrap()))
        });
    }

    group.finish();
}

fn bench_exact(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact_transform");

    for size in [256, 512, 1024] {
        let signal = test_signal(size);
        let mut dft = ExactTransform::new(size, 44100.0);

        group.bench_with_input(BenchmarkId::new("forward", size), &signal, |b, signal| {
            b.iter(|| {
                dft.forward(black_box(signal)).unwrap();
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fast, bench_exact);
criterion_main!(benches);
