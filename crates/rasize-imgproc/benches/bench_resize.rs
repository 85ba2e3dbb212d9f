use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use rasize_image::{Image, ImageSize};
use rasize_imgproc::{
    interpolation::InterpolationMode,
    parallel::ExecutionStrategy,
    resize::{resize_with, ResizeSpec},
};

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("Resize");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        // input image
        let image_size = ImageSize {
            width: *width,
            height: *height,
        };
        let data = (0..width * height * 4).map(|i| (i % 251) as u8).collect();
        let image = Image::<u8, 4>::new(image_size, data).unwrap();

        for mode in [
            InterpolationMode::Nearest,
            InterpolationMode::Bilinear,
            InterpolationMode::Bicubic,
        ] {
            // downscale by half and let the height follow
            let spec = ResizeSpec::with_mode(*width / 2, 0, mode).unwrap();

            group.bench_with_input(
                BenchmarkId::new(mode.name(), &parameter_string),
                &image,
                |b, i| {
                    b.iter(|| {
                        black_box(resize_with(i, &spec, ExecutionStrategy::ParallelChunks))
                    })
                },
            );
        }

        group.bench_with_input(
            BenchmarkId::new("bicubic_serial", &parameter_string),
            &image,
            |b, i| {
                let spec = ResizeSpec::with_mode(*width / 2, 0, InterpolationMode::Bicubic).unwrap();
                b.iter(|| black_box(resize_with(i, &spec, ExecutionStrategy::Serial)))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_resize);
criterion_main!(benches);
