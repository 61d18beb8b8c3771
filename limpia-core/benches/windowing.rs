use criterion::{black_box, criterion_group, criterion_main, Criterion};

use limpia_core::{EvalWindows, TrainBatcher};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Sample array resembling a decoded speech set: D blocks of L
/// pre-emphasized int16-range amplitudes.
fn make_sample_array(blocks: usize, block_len: usize) -> Array2<f32> {
    Array2::from_shape_fn((blocks, block_len), |(i, j)| {
        let t = (i * block_len + j) as f32;
        (t * 0.01).sin() * 12000.0
    })
}

fn bench_batcher_construction(c: &mut Criterion) {
    // Roughly 30 minutes of 16kHz speech at the default block length.
    let clean = make_sample_array(3600, 8192);
    let noisy = make_sample_array(3600, 8192);

    c.bench_function("train_batcher_new_3600_blocks", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(0);
            let batcher = TrainBatcher::new(
                black_box(clean.clone()),
                black_box(noisy.clone()),
                150,
                &mut rng,
            )
            .unwrap();
            black_box(batcher);
        });
    });
}

fn bench_batch_extraction(c: &mut Criterion) {
    let clean = make_sample_array(3600, 8192);
    let noisy = make_sample_array(3600, 8192);
    let mut rng = StdRng::seed_from_u64(0);
    let batcher = TrainBatcher::new(clean, noisy, 150, &mut rng).unwrap();

    c.bench_function("train_batch_150x16384", |b| {
        b.iter(|| {
            let (clean, noisy) = batcher.batch(black_box(0)).unwrap();
            black_box((clean, noisy));
        });
    });
}

fn bench_eval_windowing(c: &mut Criterion) {
    let clean = make_sample_array(3600, 8192);
    let noisy = make_sample_array(3600, 8192);

    c.bench_function("eval_windows_3600_blocks", |b| {
        b.iter(|| {
            let windows = EvalWindows::new(black_box(&clean), black_box(&noisy)).unwrap();
            black_box(windows);
        });
    });
}

criterion_group!(
    benches,
    bench_batcher_construction,
    bench_batch_extraction,
    bench_eval_windowing,
);

criterion_main!(benches);
