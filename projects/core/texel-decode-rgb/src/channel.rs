//! Extraction of a single color channel from a packed pixel by bitmask.
//!
//! The masked bits are shifted down to an integer in `[0, 2^n - 1]` (where `n` is
//! the number of set bits in the mask) and then scaled to `[0, 255]`, truncating.
//! Masks need not be contiguous; only their width and lowest bit matter.

/// A channel mask with its shift and scale precomputed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelMask {
    mask: u32,
    shift: u32,
    max: f64,
}

impl ChannelMask {
    /// Precomputes the shift and maximum value for `mask`.
    ///
    /// The maximum is computed in 64 bits so a mask of all 32 bits does not overflow.
    #[inline]
    pub fn new(mask: u32) -> Self {
        let max = if mask == 0 {
            0.0
        } else {
            ((1u64 << mask.count_ones()) - 1) as f64
        };

        Self {
            mask,
            shift: mask.trailing_zeros(),
            max,
        }
    }

    /// The raw mask.
    #[inline]
    pub fn mask(&self) -> u32 {
        self.mask
    }

    /// Whether the mask selects no bits, i.e. the channel is absent.
    #[inline]
    pub fn is_absent(&self) -> bool {
        self.mask == 0
    }

    /// Extracts this channel from `raw`, scaled to 8 bits. An absent channel yields 0.
    #[inline]
    pub fn extract(&self, raw: u32) -> u8 {
        if self.mask == 0 {
            return 0;
        }

        let value = (raw & self.mask) >> self.shift;
        (value as f64 / self.max * 255.0) as u8
    }
}

/// Extracts the channel selected by `mask` from the packed pixel `raw`, scaled to 8 bits.
///
/// # Examples
///
/// ```
/// use texel_decode_rgb::channel::extract_channel;
///
/// // 5-bit red of an R5G6B5 pixel
/// assert_eq!(extract_channel(0xF800, 0xF800), 255);
/// assert_eq!(extract_channel(0x8000, 0xF800), 131);
/// ```
#[inline]
pub fn extract_channel(raw: u32, mask: u32) -> u8 {
    ChannelMask::new(mask).extract(raw)
}
