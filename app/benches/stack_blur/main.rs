use criterion::{criterion_group, criterion_main, Criterion};
use quickblur::{stack_blur, BlurSurfaceMut, ThreadingPolicy};

fn synthetic_rgba(width: u32, height: u32) -> Vec<u8> {
    let mut data = vec![0u8; width as usize * height as usize * 4];
    for y in 0..height {
        for x in 0..width {
            let offset = (y as usize * width as usize + x as usize) * 4;
            data[offset] = (x * 255 / width) as u8;
            data[offset + 1] = (y * 255 / height) as u8;
            data[offset + 2] = ((x ^ y) & 0xff) as u8;
            data[offset + 3] = 255;
        }
    }
    data
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let width = 1920u32;
    let height = 1080u32;
    let src_bytes = synthetic_rgba(width, height);

    c.bench_function("quickblur: RGBA stack blur r=38", |b| {
        let mut dst_bytes = src_bytes.clone();
        b.iter(|| {
            let mut surface = BlurSurfaceMut::borrow(&mut dst_bytes, width, height);
            stack_blur(&mut surface, 38, ThreadingPolicy::Adaptive).unwrap();
        })
    });

    c.bench_function("quickblur: RGBA stack blur r=38 Single Thread", |b| {
        let mut dst_bytes = src_bytes.clone();
        b.iter(|| {
            let mut surface = BlurSurfaceMut::borrow(&mut dst_bytes, width, height);
            stack_blur(&mut surface, 38, ThreadingPolicy::Single).unwrap();
        })
    });

    c.bench_function("quickblur: RGBA stack blur r=151", |b| {
        let mut dst_bytes = src_bytes.clone();
        b.iter(|| {
            let mut surface = BlurSurfaceMut::borrow(&mut dst_bytes, width, height);
            stack_blur(&mut surface, 151, ThreadingPolicy::Adaptive).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
