use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use fovea_image::{Image, ImageSize};
use fovea_resample::resize::resize;
use fovea_resample::sampler::{Adaptive, Bilinear, CatmullRom, Nearest};
use rand::Rng;

fn random_image(size: ImageSize) -> Image<f32, 3> {
    let mut rng = rand::rng();
    let data = (0..size.width * size.height * 3)
        .map(|_| rng.random_range(0.0..1.0))
        .collect();
    Image::new(size, data).unwrap()
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("Resize");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image = random_image([*width, *height].into());
        let new_size = ImageSize {
            width: width / 4,
            height: height / 4,
        };
        let out = Image::<f32, 3>::from_size_val(new_size, 0.0).unwrap();

        group.bench_with_input(
            BenchmarkId::new("nearest", &parameter_string),
            &(&image, &out),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| resize(black_box(src), black_box(&mut dst), black_box(&Nearest)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("bilinear", &parameter_string),
            &(&image, &out),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| resize(black_box(src), black_box(&mut dst), black_box(&Bilinear)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("catmull_rom", &parameter_string),
            &(&image, &out),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| resize(black_box(src), black_box(&mut dst), black_box(&CatmullRom)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("adaptive", &parameter_string),
            &(&image, &out),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                let sampler = Adaptive::new();
                b.iter(|| resize(black_box(src), black_box(&mut dst), black_box(&sampler)))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_resize);
criterion_main!(benches);
