
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use emg_analysis_core::analysis::engine::analyze;
use emg_analysis_core::baseline::{BaselineStrategy, MovingAverageBaseline, StaticBaseline};
use emg_analysis_core::features::{generate_signal, window_features};

const SIGNAL_LENGTHS: &[usize] = &[1000, 5000, 20000];

fn benchmark_static_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("static_analysis");

    for &len in SIGNAL_LENGTHS {
        let reference = generate_signal(len, 42);
        let patient = generate_signal(len, 43);
        let strategy = StaticBaseline::new(reference).unwrap();

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| analyze(black_box(&patient), &strategy, None).unwrap());
        });
    }

    group.finish();
}

fn benchmark_moving_average_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("moving_average_baseline");

    for &len in SIGNAL_LENGTHS {
        let patient = generate_signal(len, 42);
        let strategy = MovingAverageBaseline::new(50).unwrap();

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| strategy.resolve_baseline(black_box(&patient)).unwrap());
        });
    }

    group.finish();
}

fn benchmark_window_features(c: &mut Criterion) {
    let signal = generate_signal(5000, 42);

    c.bench_function("window_features_5000x200", |b| {
        b.iter(|| window_features(black_box(&signal), 200, 200).unwrap());
    });
}

criterion_group!(
    benches,
    benchmark_static_analysis,
    benchmark_moving_average_resolution,
    benchmark_window_features
);
criterion_main!(benches);
