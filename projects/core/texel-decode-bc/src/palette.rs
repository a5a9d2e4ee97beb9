//! Decoding of the 8 byte color section shared by BC1 and BC2 blocks.
//!
//! Based on MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d9/opaque-and-1-bit-alpha-textures>
//!
//! Interpolated entries use the 'ideal' integer rounding described in the DX9 docs
//! (truncating division), as opposed to the DX10, AMD or Nvidia hardware variants.
//!
//! Layout of the color section:
//!
//! ```text
//! bytes 0..2  c0       (RGB565, little endian)
//! bytes 2..4  c1       (RGB565, little endian)
//! bytes 4..8  indices  (u32 little endian, 2 bits per pixel, pixel 0 in the lowest bits)
//! ```

use texel_decode_common::{color_565::Color565, color_8888::Color8888};

/// Size of the color section of a block, in bytes.
pub const COLOR_BLOCK_SIZE: usize = 8;

/// How palette entries 2 and 3 are derived from the endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterpolationMode {
    /// Always four opaque colors: entry 2 at 1/3, entry 3 at 2/3 between the endpoints.
    /// Used by BC2, whose alpha lives outside the color section.
    FourColor,
    /// BC1 behaviour. If `c0 > c1` (packed compare) this is [`InterpolationMode::FourColor`];
    /// otherwise entry 2 is the midpoint and entry 3 is transparent black.
    PunchThrough,
}

/// The 16 two-bit palette indices of a block, pixel 0 in the lowest bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IndexGrid(u32);

impl IndexGrid {
    /// Wraps the raw 32-bit index field.
    #[inline]
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw 32-bit index field.
    #[inline]
    pub fn raw_value(&self) -> u32 {
        self.0
    }

    /// Palette index (0-3) of the pixel at `index` (0-15, row-major).
    #[inline]
    pub fn get(&self, index: usize) -> usize {
        debug_assert!(index < 16);
        ((self.0 >> (index * 2)) & 0b11) as usize
    }
}

/// The undecoded color section of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorBlock {
    /// First endpoint.
    pub c0: Color565,
    /// Second endpoint.
    pub c1: Color565,
    /// Per-pixel palette indices.
    pub indices: IndexGrid,
}

impl ColorBlock {
    /// Reads the color section from its 8 byte little endian representation.
    #[inline]
    pub fn from_bytes(bytes: &[u8; COLOR_BLOCK_SIZE]) -> Self {
        Self {
            c0: Color565::from_le_bytes([bytes[0], bytes[1]]),
            c1: Color565::from_le_bytes([bytes[2], bytes[3]]),
            indices: IndexGrid::from_raw(u32::from_le_bytes([
                bytes[4], bytes[5], bytes[6], bytes[7],
            ])),
        }
    }

    /// Builds the 4 entry palette for this block.
    pub fn palette(&self, mode: InterpolationMode) -> Palette {
        let (r0, g0, b0) = (self.c0.red() as u32, self.c0.green() as u32, self.c0.blue() as u32);
        let (r1, g1, b1) = (self.c1.red() as u32, self.c1.green() as u32, self.c1.blue() as u32);

        let mut colors = [Color8888::TRANSPARENT; 4];
        colors[0] = self.c0.to_color_8888();
        colors[1] = self.c1.to_color_8888();

        let four_color = match mode {
            InterpolationMode::FourColor => true,
            InterpolationMode::PunchThrough => self.c0.greater_than(&self.c1),
        };

        if four_color {
            let r = (2 * r0 + r1) / 3;
            let g = (2 * g0 + g1) / 3;
            let b = (2 * b0 + b1) / 3;
            colors[2] = Color8888::new(r as u8, g as u8, b as u8, 255);

            let r = (r0 + 2 * r1) / 3;
            let g = (g0 + 2 * g1) / 3;
            let b = (b0 + 2 * b1) / 3;
            colors[3] = Color8888::new(r as u8, g as u8, b as u8, 255);
        } else {
            let r = (r0 + r1) / 2;
            let g = (g0 + g1) / 2;
            let b = (b0 + b1) / 2;
            colors[2] = Color8888::new(r as u8, g as u8, b as u8, 255);
            colors[3] = Color8888::TRANSPARENT;
        }

        Palette { colors }
    }

    /// Decodes the block into its palette and index grid.
    #[inline]
    pub fn decode(&self, mode: InterpolationMode) -> DecodedColorBlock {
        DecodedColorBlock {
            palette: self.palette(mode),
            indices: self.indices,
        }
    }
}

/// The 4 colors a block's pixels select from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Palette {
    /// Entries 0 and 1 are the expanded endpoints, 2 and 3 are interpolated.
    pub colors: [Color8888; 4],
}

/// A decoded color section: palette plus the per-pixel indices into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodedColorBlock {
    palette: Palette,
    indices: IndexGrid,
}

impl DecodedColorBlock {
    /// Decodes 8 bytes of color data in the given mode.
    #[inline]
    pub fn from_bytes(bytes: &[u8; COLOR_BLOCK_SIZE], mode: InterpolationMode) -> Self {
        ColorBlock::from_bytes(bytes).decode(mode)
    }

    /// The block's palette.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The block's index grid.
    #[inline]
    pub fn indices(&self) -> IndexGrid {
        self.indices
    }

    /// Color of the pixel at `index` (0-15, row-major), including the palette entry's alpha.
    #[inline]
    pub fn color(&self, index: usize) -> Color8888 {
        self.palette.colors[self.indices.get(index)]
    }
}
