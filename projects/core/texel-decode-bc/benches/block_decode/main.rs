use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use texel_decode_bc::{decode_blocks, decode_blocks_from_slice, BlockFormat};
use texel_decode_common::decoded_4x4_block::Decoded4x4Block;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

/// Side length of the benchmarked image; 1024x1024 is 512KiB of BC1 or 1MiB of BC2.
const IMAGE_SIZE: u32 = 1024;

fn generate_blocks(format: BlockFormat) -> Vec<u8> {
    let blocks = (IMAGE_SIZE / 4 * IMAGE_SIZE / 4) as usize;
    let block_size = format.block_size();
    let mut data = vec![0u8; blocks * block_size];

    for (block_idx, block) in data.chunks_exact_mut(block_size).enumerate() {
        let color = &mut block[block_size - 8..];
        // Alternate endpoint order so BC1 exercises both palette modes.
        if block_idx % 2 == 0 {
            color[..4].copy_from_slice(&[0x40, 0xF8, 0x00, 0x18]);
        } else {
            color[..4].copy_from_slice(&[0x00, 0x18, 0x40, 0xF8]);
        }
        for i in 4..8 {
            color[i] = ((block_idx * i) % 255) as u8;
        }
        for i in 0..block_size - 8 {
            block[i] = ((block_idx * (i + 1)) % 255) as u8;
        }
    }

    data
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Decode Blocks (BCn -> RGBA8888)");

    for format in [BlockFormat::Bc1, BlockFormat::Bc2] {
        let input = generate_blocks(format);
        group.throughput(Throughput::Bytes(input.len() as u64));

        group.bench_with_input(BenchmarkId::new("decode_block", format!("{format:?}")), &input, |b, input| {
            let mut output = vec![Decoded4x4Block::default(); input.len() / format.block_size()];
            b.iter(|| {
                for (block, out) in input.chunks_exact(format.block_size()).zip(output.iter_mut()) {
                    if let Some(tile) = format.decode_block(block) {
                        *out = tile.to_decoded_4x4();
                    }
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("decode_blocks_from_slice", format!("{format:?}")), &input, |b, input| {
            b.iter(|| decode_blocks_from_slice(format, IMAGE_SIZE, IMAGE_SIZE, input))
        });

        group.bench_with_input(BenchmarkId::new("decode_blocks", format!("{format:?}")), &input, |b, input| {
            b.iter(|| decode_blocks(format, IMAGE_SIZE, IMAGE_SIZE, &mut &input[..]))
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
