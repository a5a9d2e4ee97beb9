use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use texel_decode_common::PixelFormatDescriptor;
use texel_decode_rgb::{decode_uncompressed, decode_uncompressed_from_slice};

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

const IMAGE_SIZE: u32 = 1024;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Decode Uncompressed (bitmask -> RGBA8888)");

    let formats = [
        ("R5G6B5", PixelFormatDescriptor::rgb(16, 0xF800, 0x07E0, 0x001F)),
        ("R8G8B8", PixelFormatDescriptor::rgb(24, 0xFF_0000, 0x00_FF00, 0x00_00FF)),
        (
            "A8R8G8B8",
            PixelFormatDescriptor::rgba(32, 0x00FF_0000, 0x0000_FF00, 0x0000_00FF, 0xFF00_0000),
        ),
    ];

    for (name, format) in formats {
        let len = (IMAGE_SIZE * IMAGE_SIZE) as usize * format.bytes_per_pixel();
        let input: Vec<u8> = (0..len).map(|i| (i * 31 % 251) as u8).collect();
        group.throughput(Throughput::Bytes(len as u64));

        group.bench_with_input(BenchmarkId::new("from_slice", name), &input, |b, input| {
            b.iter(|| decode_uncompressed_from_slice(&format, IMAGE_SIZE, IMAGE_SIZE, input))
        });

        group.bench_with_input(BenchmarkId::new("from_reader", name), &input, |b, input| {
            b.iter(|| decode_uncompressed(&format, IMAGE_SIZE, IMAGE_SIZE, &mut &input[..]))
        });
    }

    group.finish();
}

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(not(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
