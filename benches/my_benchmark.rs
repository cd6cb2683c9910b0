use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::time::Duration;
use xyztraj::transform::{self, DecimateOptions};
use xyztraj::{Frame, Trajectory};

/// A trajectory of `nframes` frames with `natoms` atoms each
fn synthetic(nframes: usize, natoms: usize) -> Trajectory {
    (0..nframes)
        .map(|i| {
            let mut frame = Frame::with_capacity(format!("step {i}"), natoms);
            for j in 0..natoms {
                let t = (i * natoms + j) as f64;
                frame.add_atom("Ar", [t * 0.001, t * 0.002, t * 0.003]);
            }
            frame
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let trajectory = synthetic(400, 125);
    let mut text = Vec::new();
    trajectory.write_to(&mut text).unwrap();

    let mut group = c.benchmark_group("my_group");
    group.measurement_time(Duration::from_secs(6));
    group.bench_function("read large xyz", |b| {
        b.iter(|| Trajectory::read_from(black_box(text.as_slice())).unwrap())
    });
    group.bench_function("write large xyz", |b| {
        b.iter(|| {
            let mut buffer = Vec::with_capacity(text.len());
            trajectory.write_to(&mut buffer).unwrap();
            black_box(buffer)
        })
    });
    group.bench_function("thin large xyz", |b| {
        let options = DecimateOptions::with_stride(7);
        b.iter(|| transform::decimate(black_box(&trajectory), &options).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
