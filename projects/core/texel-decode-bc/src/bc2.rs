//! BC2 (DXT2/DXT3) decoding; based on MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d10/d3d10-graphics-programming-guide-resources-block-compression#bc2>
//!
//! A block is 16 bytes: 8 bytes of explicit 4-bit alpha followed by an 8 byte
//! color section. The color section always decodes in four-color mode.

use crate::palette::{DecodedColorBlock, InterpolationMode, COLOR_BLOCK_SIZE};
use texel_decode_common::{color_8888::Color8888, decoded_4x4_block::Decoded4x4Block};

/// Size of a BC2 block in bytes.
pub const BC2_BLOCK_SIZE: usize = 16;

/// Size of the explicit alpha section of a BC2 block in bytes.
pub const ALPHA_STORE_SIZE: usize = 8;

/// 16 packed 4-bit alpha values, one per pixel, low nibble first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AlphaStore([u8; ALPHA_STORE_SIZE]);

impl AlphaStore {
    /// Wraps the 8 alpha bytes of a block.
    #[inline]
    pub fn from_bytes(bytes: [u8; ALPHA_STORE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Raw 4-bit alpha (0-15) of pixel `index` (0-15, row-major).
    #[inline]
    pub fn nibble(&self, index: usize) -> u8 {
        let shift = (index & 0x1) * 4;
        (self.0[index >> 1] >> shift) & 0x0F
    }

    /// Alpha of pixel `index` scaled to 8 bits. 0 maps to 0 and 15 maps to 255.
    #[inline]
    pub fn alpha(&self, index: usize) -> u8 {
        self.nibble(index) * 17
    }
}

/// A decoded BC2 block. Obtained from [`Bc2Block::decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bc2Block {
    alpha: AlphaStore,
    colors: DecodedColorBlock,
}

impl Bc2Block {
    /// Decodes a BC2 block.
    ///
    /// # Example
    ///
    /// ```
    /// use texel_decode_bc::bc2::Bc2Block;
    ///
    /// let block = [0u8; 16]; // Compressed BC2 block
    /// let decoded = Bc2Block::decode(&block);
    /// assert_eq!(decoded.pixel(0).to_array(), [0, 0, 0, 0]);
    /// ```
    #[inline]
    pub fn decode(src: &[u8; BC2_BLOCK_SIZE]) -> Self {
        let mut alpha = [0u8; ALPHA_STORE_SIZE];
        alpha.copy_from_slice(&src[..ALPHA_STORE_SIZE]);
        let mut color = [0u8; COLOR_BLOCK_SIZE];
        color.copy_from_slice(&src[ALPHA_STORE_SIZE..]);

        Self {
            alpha: AlphaStore::from_bytes(alpha),
            colors: DecodedColorBlock::from_bytes(&color, InterpolationMode::FourColor),
        }
    }

    /// Decodes a BC2 block from the start of a slice.
    ///
    /// # Returns
    ///
    /// A decoded block, else [`None`] if the slice is too short.
    #[inline]
    pub fn decode_from_slice(src: &[u8]) -> Option<Self> {
        let bytes: &[u8; BC2_BLOCK_SIZE] = src.get(..BC2_BLOCK_SIZE)?.try_into().ok()?;
        Some(Self::decode(bytes))
    }

    /// Color of pixel `index` (0-15, row-major): palette RGB with the explicit alpha.
    ///
    /// # Panics
    ///
    /// If `index` is 16 or larger.
    #[inline]
    pub fn pixel(&self, index: usize) -> Color8888 {
        assert!(index < 16, "pixel index {index} is outside of a 4x4 block");
        self.colors.color(index).with_alpha(self.alpha.alpha(index))
    }

    /// The explicit alpha values.
    #[inline]
    pub fn alpha(&self) -> &AlphaStore {
        &self.alpha
    }

    /// The decoded palette and indices.
    #[inline]
    pub fn colors(&self) -> &DecodedColorBlock {
        &self.colors
    }

    /// Expands all 16 pixels.
    #[inline]
    pub fn to_decoded_4x4(&self) -> Decoded4x4Block {
        Decoded4x4Block::from_fn(|index| self.pixel(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bc1::Bc1Block;
    use crate::test_prelude::*;

    #[test]
    fn can_decode_bc2_block() {
        // Test case: Simple red color with varying alpha
        let bc2_block = [
            // Alpha data (4 bits per pixel): 0x0 to 0xF across the 16 pixels
            0x10, 0x32, 0x54, 0x76, 0x98, 0xBA, 0xDC, 0xFE,
            // Color data (identical to BC1)
            0x00, 0xF8, // c0 = R:31 G:0 B:0
            0x00, 0xF8, // c1 = R:31 G:0 B:0 (identical for solid color)
            0x00, 0x00, 0x00, 0x00, // All pixels use index 0
        ];

        let decoded = Bc2Block::decode(&bc2_block).to_decoded_4x4();

        let expected_alphas = [
            0, 17, 34, 51, 68, 85, 102, 119, 136, 153, 170, 187, 204, 221, 238, 255,
        ];

        for (index, pixel) in decoded.pixels.iter().enumerate() {
            assert_eq!(pixel.r, 255, "Red component should be 255");
            assert_eq!(pixel.g, 0, "Green component should be 0");
            assert_eq!(pixel.b, 0, "Blue component should be 0");
            assert_eq!(
                pixel.a, expected_alphas[index],
                "Alpha value incorrect at pixel {index}",
            );
        }
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 17)]
    #[case(7, 119)]
    #[case(14, 238)]
    #[case(15, 255)]
    fn nibble_scales_by_17(#[case] nibble: u8, #[case] expected: u8) {
        let store = AlphaStore::from_bytes([nibble | (nibble << 4); 8]);
        for index in 0..16 {
            assert_eq!(store.alpha(index), expected);
        }
    }

    #[test]
    fn alpha_covers_exact_range() {
        let alphas: Vec<u8> = (0..16u8).map(|n| AlphaStore::from_bytes([n; 8]).alpha(0)).collect();
        let expected: Vec<u8> = (0..=255u8).step_by(17).collect();
        assert_eq!(alphas, expected);
    }

    #[test]
    fn color_section_never_uses_punch_through() {
        // c0 < c1 would make index 3 transparent in BC1
        let bc2_block = [
            0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // fully opaque
            0x00, 0x00, // c0 = black
            0xFF, 0xFF, // c1 = white
            0xFF, 0xFF, 0xFF, 0xFF, // All pixels use index 3
        ];

        let decoded = Bc2Block::decode(&bc2_block).to_decoded_4x4();
        assert!(decoded.has_identical_pixels());
        assert_eq!(decoded.pixels[0], Color8888::new(170, 170, 170, 255));
    }

    #[rstest]
    #[case::zero_indices(0x0000_0000)]
    #[case::all_threes(0xFFFF_FFFF)]
    #[case::mixed(0x1B1B_E4E4)]
    fn identical_endpoints_decode_to_single_color(#[case] indices: u32) {
        let mut bc2_block = [0xFF; 16];
        bc2_block[8..12].copy_from_slice(&[0x34, 0x12, 0x34, 0x12]);
        bc2_block[12..].copy_from_slice(&indices.to_le_bytes());

        let decoded = Bc2Block::decode(&bc2_block).to_decoded_4x4();
        assert!(decoded.has_identical_pixels());
    }

    #[test]
    fn colors_match_bc1_when_c0_greater() {
        let bc2_block = [
            0x10, 0x32, 0x54, 0x76, 0x98, 0xBA, 0xDC, 0xFE, // alpha
            0x12, 0x84, 0x56, 0x03, 0x9A, 0xBC, 0xDE, 0xF0, // c0 = 0x8412 > c1 = 0x0356
        ];
        let bc1_block: [u8; 8] = bc2_block[8..].try_into().unwrap();

        let bc1 = Bc1Block::decode(&bc1_block).to_decoded_4x4();
        let bc2 = Bc2Block::decode(&bc2_block).to_decoded_4x4();
        for index in 0..16 {
            assert_eq!(bc1.pixels[index].without_alpha(), bc2.pixels[index].without_alpha());
        }
    }

    #[test]
    fn slice_too_small() {
        let bc2_block = [0u8; 15]; // BC2 requires 16 bytes
        assert!(Bc2Block::decode_from_slice(&bc2_block).is_none());
    }
}
