//! Selection between the supported block formats.
//!
//! The format is chosen once per image from the container header; each tile is
//! then decoded into a [`DecodedTile`], the only value its pixels can be read from.

use crate::bc1::{Bc1Block, BC1_BLOCK_SIZE};
use crate::bc2::{Bc2Block, BC2_BLOCK_SIZE};
use derive_enum_all_values::AllValues;
use texel_decode_common::{color_8888::Color8888, decoded_4x4_block::Decoded4x4Block};

/// Size of the largest supported block, in bytes.
pub const MAX_BLOCK_SIZE: usize = BC2_BLOCK_SIZE;

/// A block compressed pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum BlockFormat {
    /// a.k.a. DXT1; opaque with optional punch-through alpha.
    Bc1,
    /// a.k.a. DXT2/3; explicit 4-bit alpha.
    Bc2,
}

impl BlockFormat {
    /// Returns the block size in bytes for this format.
    #[inline]
    pub const fn block_size(self) -> usize {
        match self {
            BlockFormat::Bc1 => BC1_BLOCK_SIZE,
            BlockFormat::Bc2 => BC2_BLOCK_SIZE,
        }
    }

    /// Decodes one block from the start of `src`.
    ///
    /// # Returns
    ///
    /// The decoded tile, else [`None`] if `src` is shorter than [`BlockFormat::block_size`].
    #[inline]
    pub fn decode_block(self, src: &[u8]) -> Option<DecodedTile> {
        match self {
            BlockFormat::Bc1 => Bc1Block::decode_from_slice(src).map(DecodedTile::Bc1),
            BlockFormat::Bc2 => Bc2Block::decode_from_slice(src).map(DecodedTile::Bc2),
        }
    }

    /// Decodes a block held in a buffer sized for any format; only the first
    /// [`BlockFormat::block_size`] bytes are used.
    #[inline]
    pub(crate) fn decode_buffer(self, src: &[u8; MAX_BLOCK_SIZE]) -> DecodedTile {
        match self {
            BlockFormat::Bc1 => {
                let mut block = [0u8; BC1_BLOCK_SIZE];
                block.copy_from_slice(&src[..BC1_BLOCK_SIZE]);
                DecodedTile::Bc1(Bc1Block::decode(&block))
            }
            BlockFormat::Bc2 => DecodedTile::Bc2(Bc2Block::decode(src)),
        }
    }

    /// Number of bytes of block data needed for an image of the given size.
    ///
    /// Returns [`None`] on overflow.
    pub fn compressed_size(self, width: u32, height: u32) -> Option<usize> {
        (width.div_ceil(4) as usize)
            .checked_mul(height.div_ceil(4) as usize)?
            .checked_mul(self.block_size())
    }
}

/// A decoded tile of either format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodedTile {
    /// A decoded BC1 block.
    Bc1(Bc1Block),
    /// A decoded BC2 block.
    Bc2(Bc2Block),
}

impl DecodedTile {
    /// Color of pixel `index` (0-15, row-major).
    ///
    /// # Panics
    ///
    /// If `index` is 16 or larger.
    #[inline]
    pub fn pixel(&self, index: usize) -> Color8888 {
        match self {
            DecodedTile::Bc1(block) => block.pixel(index),
            DecodedTile::Bc2(block) => block.pixel(index),
        }
    }

    /// Expands all 16 pixels.
    #[inline]
    pub fn to_decoded_4x4(&self) -> Decoded4x4Block {
        match self {
            DecodedTile::Bc1(block) => block.to_decoded_4x4(),
            DecodedTile::Bc2(block) => block.to_decoded_4x4(),
        }
    }
}
