//! Common test imports and utilities for DDS tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

extern crate alloc;

// Re-export commonly used alloc types for tests
pub use alloc::{vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

// DDS constants, for building and patching headers
pub(crate) use crate::dds::constants::*;

use crate::dds::parse_dds::*;
use endian_writer::{EndianWriter, LittleEndianWriter};
use texel_decode_common::PixelFormatDescriptor;

/// Total size of DDS header + DX10 header (used in tests)
pub const DDS_DX10_TOTAL_HEADER_SIZE: usize = DDS_HEADER_SIZE + DX10_HEADER_SIZE;

/// Helper function to create a basic DDS header with common fields
fn create_dds_header_base(data: &mut [u8], width: u32, height: u32, mipmap_count: u32) {
    assert!(data.len() >= DDS_HEADER_SIZE);
    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };

    unsafe {
        // DDS magic
        writer.write_u32_at(DDS_MAGIC, 0);
        // Set header size (dwSize field at offset 4)
        writer.write_u32_at(124, 4);

        // DDSD_CAPS | DDSD_HEIGHT | DDSD_WIDTH | DDSD_PIXELFORMAT
        let mut flags = 0x1 | 0x2 | 0x4 | 0x1000;
        if mipmap_count > 1 {
            flags |= DDSD_MIPMAPCOUNT;
        }
        writer.write_u32_at(flags, DDS_FLAGS_OFFSET as isize);

        writer.write_u32_at(height, DDS_HEIGHT_OFFSET as isize);
        writer.write_u32_at(width, DDS_WIDTH_OFFSET as isize);

        if mipmap_count > 1 {
            writer.write_u32_at(mipmap_count, DDS_MIPMAP_COUNT_OFFSET as isize);
        }
    }
}

/// Size of a full mip chain of block compressed data.
fn block_chain_size(block_size: usize, width: u32, height: u32, mipmap_count: u32) -> usize {
    let (mut w, mut h) = (width, height);
    let mut total = 0;
    for _ in 0..mipmap_count.max(1) {
        total += (w.div_ceil(4) * h.div_ceil(4)) as usize * block_size;
        w = (w / 2).max(1);
        h = (h / 2).max(1);
    }
    total
}

/// Fills everything after `header_size` with a repeating byte pattern.
fn fill_test_pattern(data: &mut [u8], header_size: usize) {
    for (x, byte) in data[header_size..].iter_mut().enumerate() {
        *byte = (x % 256) as u8;
    }
}

fn create_fourcc_dds(
    fourcc: &[u8; 4],
    block_size: usize,
    width: u32,
    height: u32,
    mipmap_count: u32,
) -> Vec<u8> {
    let size = DDS_HEADER_SIZE + block_chain_size(block_size, width, height, mipmap_count);
    let mut data = vec![0u8; size];
    create_dds_header_base(&mut data, width, height, mipmap_count);

    data[FOURCC_OFFSET..FOURCC_OFFSET + 4].copy_from_slice(fourcc);
    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
    unsafe { writer.write_u32_at(DDPF_FOURCC, DDS_PIXELFORMAT_FLAGS_OFFSET as isize) };

    fill_test_pattern(&mut data, DDS_HEADER_SIZE);
    data
}

/// Helper function to create a valid BC1 (DXT1) DDS with its full mip chain
pub fn create_valid_bc1_dds_with_dimensions(width: u32, height: u32, mipmap_count: u32) -> Vec<u8> {
    create_fourcc_dds(b"DXT1", 8, width, height, mipmap_count)
}

/// Helper function to create a valid BC2 (DXT3) DDS with its full mip chain
pub fn create_valid_bc2_dds_with_dimensions(width: u32, height: u32, mipmap_count: u32) -> Vec<u8> {
    create_fourcc_dds(b"DXT3", 16, width, height, mipmap_count)
}

/// Creates a minimal valid BC1 DDS file (4x4, single mipmap)
pub fn create_valid_bc1_dds() -> Vec<u8> {
    create_valid_bc1_dds_with_dimensions(4, 4, 1)
}

/// Creates a DDS with a DX10 header and the given `DXGI_FORMAT`; header only, no pixel data.
pub fn create_dx10_dds(dxgi_format: u32, width: u32, height: u32) -> Vec<u8> {
    let mut data = vec![0u8; DDS_DX10_TOTAL_HEADER_SIZE];
    create_dds_header_base(&mut data, width, height, 1);

    data[FOURCC_OFFSET..FOURCC_OFFSET + 4].copy_from_slice(b"DX10");
    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
    unsafe {
        writer.write_u32_at(DDPF_FOURCC, DDS_PIXELFORMAT_FLAGS_OFFSET as isize);
        writer.write_u32_at(dxgi_format, DX10_FORMAT_OFFSET as isize);
    }

    data
}

/// Creates a legacy `DDPF_RGB` DDS described by `format`, with a single surface of pixel data.
pub fn create_uncompressed_dds(format: PixelFormatDescriptor, width: u32, height: u32) -> Vec<u8> {
    let size = DDS_HEADER_SIZE + (width * height) as usize * format.bytes_per_pixel();
    let mut data = vec![0u8; size];
    create_dds_header_base(&mut data, width, height, 1);

    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
    unsafe {
        writer.write_u32_at(format.flags.bits(), DDS_PIXELFORMAT_FLAGS_OFFSET as isize);
        writer.write_u32_at(format.bits_per_pixel, DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET as isize);
        writer.write_u32_at(format.r_mask, DDS_PIXELFORMAT_RBITMASK_OFFSET as isize);
        writer.write_u32_at(format.g_mask, DDS_PIXELFORMAT_GBITMASK_OFFSET as isize);
        writer.write_u32_at(format.b_mask, DDS_PIXELFORMAT_BBITMASK_OFFSET as isize);
        writer.write_u32_at(format.a_mask, DDS_PIXELFORMAT_ABITMASK_OFFSET as isize);
    }

    fill_test_pattern(&mut data, DDS_HEADER_SIZE);
    data
}

/// Creates a DDS file that's too small to contain a complete header
pub fn create_truncated_dds(size: usize) -> Vec<u8> {
    let mut data = vec![0u8; size];

    // Only set magic if there's room
    if size >= 4 {
        let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
        unsafe { writer.write_u32_at(DDS_MAGIC, 0) };
    }

    data
}

#[test]
fn builders_produce_parseable_headers() {
    let info = parse_dds(&create_valid_bc1_dds_with_dimensions(16, 8, 3)).unwrap();
    assert_eq!((info.width, info.height, info.mipmap_count), (16, 8, 3));
    assert_eq!(info.format, DdsFormat::Bc1);

    // 16x8 + 8x4 + 4x2 BC1 mips
    assert_eq!(block_chain_size(8, 16, 8, 3), 64 + 16 + 8);
}
