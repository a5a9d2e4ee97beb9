//! Common test imports and utilities for block decoding tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Common types from texel_decode_common
pub use texel_decode_common::color_8888::Color8888;
pub use texel_decode_common::decoded_4x4_block::Decoded4x4Block;
pub use texel_decode_common::error::DecodeError;
pub use texel_decode_common::RgbaImage;

pub use alloc::vec;
pub use alloc::vec::Vec;

// Re-export super for convenience in test modules
pub use super::*;

/// Helper to generate test data of specified size (in 16 byte blocks).
///
/// Bytes follow a simple xorshift sequence from `seed`, so both endpoint
/// orderings show up and BC1 blocks exercise punch-through and four-color mode.
pub(crate) fn generate_block_data(num_blocks: usize, seed: u8) -> Vec<u8> {
    let mut state = 0x9E37_79B9_u32 ^ seed as u32;
    (0..num_blocks * 16)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect()
}

/// A reader that fails the test if it is ever read from.
#[cfg(feature = "std")]
pub(crate) struct PanickingReader;

#[cfg(feature = "std")]
impl std::io::Read for PanickingReader {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        panic!("reader should not have been read from");
    }
}

#[test]
fn generated_data_is_deterministic_and_sized() {
    assert_eq!(generate_block_data(3, 7).len(), 48);
    assert_eq!(generate_block_data(3, 7), generate_block_data(3, 7));
    assert_ne!(generate_block_data(1, 0), generate_block_data(1, 1));
}
