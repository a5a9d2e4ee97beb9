//! BC1 (DXT1) decoding: 8 byte blocks, opaque or 1-bit punch-through alpha.
//!
//! The whole block is a color section; transparency comes from the palette
//! itself when `c0 <= c1`.

use crate::palette::{DecodedColorBlock, InterpolationMode, COLOR_BLOCK_SIZE};
use texel_decode_common::{color_8888::Color8888, decoded_4x4_block::Decoded4x4Block};

/// Size of a BC1 block in bytes.
pub const BC1_BLOCK_SIZE: usize = COLOR_BLOCK_SIZE;

/// A decoded BC1 block. Obtained from [`Bc1Block::decode`]; pixels can only be
/// read once the block has been decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bc1Block {
    colors: DecodedColorBlock,
}

impl Bc1Block {
    /// Decodes a BC1 block.
    ///
    /// # Example
    ///
    /// ```
    /// use texel_decode_bc::bc1::Bc1Block;
    ///
    /// let block = [
    ///     0x00, 0xF8, // c0 = R:31 G:0 B:0
    ///     0x00, 0xF8, // c1 = R:31 G:0 B:0
    ///     0x00, 0x00, 0x00, 0x00, // All pixels use index 0
    /// ];
    /// let decoded = Bc1Block::decode(&block);
    /// assert_eq!(decoded.pixel(0).to_array(), [255, 0, 0, 255]);
    /// ```
    #[inline]
    pub fn decode(src: &[u8; BC1_BLOCK_SIZE]) -> Self {
        Self {
            colors: DecodedColorBlock::from_bytes(src, InterpolationMode::PunchThrough),
        }
    }

    /// Decodes a BC1 block from the start of a slice.
    ///
    /// # Returns
    ///
    /// A decoded block, else [`None`] if the slice is too short.
    #[inline]
    pub fn decode_from_slice(src: &[u8]) -> Option<Self> {
        let bytes: &[u8; BC1_BLOCK_SIZE] = src.get(..BC1_BLOCK_SIZE)?.try_into().ok()?;
        Some(Self::decode(bytes))
    }

    /// Color of pixel `index` (0-15, row-major), with the palette entry's alpha.
    ///
    /// # Panics
    ///
    /// If `index` is 16 or larger.
    #[inline]
    pub fn pixel(&self, index: usize) -> Color8888 {
        assert!(index < 16, "pixel index {index} is outside of a 4x4 block");
        self.colors.color(index)
    }

    /// The decoded palette and indices.
    #[inline]
    pub fn colors(&self) -> &DecodedColorBlock {
        &self.colors
    }

    /// Expands all 16 pixels.
    #[inline]
    pub fn to_decoded_4x4(&self) -> Decoded4x4Block {
        Decoded4x4Block::from_fn(|index| self.colors.color(index))
    }
}
