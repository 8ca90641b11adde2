use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use asciipix_image::{ArgbImage, ImageSize};
use asciipix_render::glyph::{render_text, GlyphRamp};
use asciipix_render::gray::gray_from_argb_u8;
use asciipix_render::tile::{tile_average, DEFAULT_TILE_FACTOR};

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for (width, height) in [(256usize, 256usize), (1920, 1080)].iter() {
        let id = format!("{width}x{height}");
        let data: Vec<u8> = (0..width * height)
            .flat_map(|i| [255, (i % 256) as u8, (i % 256) as u8, (i % 256) as u8])
            .collect();
        let image = ArgbImage::new(
            ImageSize {
                width: *width,
                height: *height,
            },
            data,
        )
        .unwrap();

        group.bench_with_input(BenchmarkId::new("gray", &id), &image, |b, i| {
            let mut gray = ArgbImage::from_size_val(i.size(), 0).unwrap();
            b.iter(|| {
                gray_from_argb_u8(black_box(i), black_box(&mut gray)).unwrap();
            })
        });

        let mut gray = ArgbImage::from_size_val(image.size(), 0).unwrap();
        gray_from_argb_u8(&image, &mut gray).unwrap();

        group.bench_with_input(BenchmarkId::new("tile", &id), &gray, |b, i| {
            b.iter(|| {
                tile_average(black_box(i), DEFAULT_TILE_FACTOR).unwrap();
            })
        });

        let grid = tile_average(&gray, DEFAULT_TILE_FACTOR).unwrap();
        let ramp = GlyphRamp::default();

        group.bench_with_input(BenchmarkId::new("glyphs", &id), &grid, |b, i| {
            b.iter(|| {
                render_text(black_box(i), &ramp, "\n");
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
