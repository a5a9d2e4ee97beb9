//! Description of an uncompressed pixel layout, as read from a texture container header.

/// Pixel format flags, using the bit values of the DDS `DDPF_*` constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelFormatFlags(u32);

impl PixelFormatFlags {
    /// No flags set.
    pub const NONE: Self = Self(0);
    /// The alpha bitmask holds meaningful data (`DDPF_ALPHAPIXELS`).
    pub const ALPHA_PIXELS: Self = Self(0x1);
    /// The pixel data is block compressed and identified by a FourCC (`DDPF_FOURCC`).
    pub const FOURCC: Self = Self(0x4);
    /// The pixel data is uncompressed RGB described by bitmasks (`DDPF_RGB`).
    pub const RGB: Self = Self(0x40);

    /// Creates flags from their raw header value.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw header value.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if every bit of `other` is set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl core::ops::BitOr for PixelFormatFlags {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Layout of an uncompressed pixel: which bits of the packed little endian
/// pixel hold each channel, and how wide the pixel is.
///
/// Masks must not overlap. A zero mask means the channel is absent; an absent
/// alpha channel decodes as fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelFormatDescriptor {
    /// Header flags; only [`PixelFormatFlags::ALPHA_PIXELS`] affects decoding.
    pub flags: PixelFormatFlags,
    /// Bits of the packed pixel holding red.
    pub r_mask: u32,
    /// Bits of the packed pixel holding green.
    pub g_mask: u32,
    /// Bits of the packed pixel holding blue.
    pub b_mask: u32,
    /// Bits of the packed pixel holding alpha.
    pub a_mask: u32,
    /// Size of one pixel in bits. Pixels occupy `bits_per_pixel / 8` whole bytes.
    pub bits_per_pixel: u32,
}

impl PixelFormatDescriptor {
    /// Describes an opaque RGB format.
    ///
    /// # Examples
    ///
    /// ```
    /// use texel_decode_common::pixel_format::PixelFormatDescriptor;
    ///
    /// // 16-bit R5G6B5
    /// let format = PixelFormatDescriptor::rgb(16, 0xF800, 0x07E0, 0x001F);
    /// assert!(!format.has_alpha());
    /// assert_eq!(format.bytes_per_pixel(), 2);
    /// ```
    pub const fn rgb(bits_per_pixel: u32, r_mask: u32, g_mask: u32, b_mask: u32) -> Self {
        Self {
            flags: PixelFormatFlags::RGB,
            r_mask,
            g_mask,
            b_mask,
            a_mask: 0,
            bits_per_pixel,
        }
    }

    /// Describes an RGB format carrying an alpha channel.
    pub const fn rgba(
        bits_per_pixel: u32,
        r_mask: u32,
        g_mask: u32,
        b_mask: u32,
        a_mask: u32,
    ) -> Self {
        Self {
            flags: PixelFormatFlags::from_bits(
                PixelFormatFlags::RGB.bits() | PixelFormatFlags::ALPHA_PIXELS.bits(),
            ),
            r_mask,
            g_mask,
            b_mask,
            a_mask,
            bits_per_pixel,
        }
    }

    /// Whether the alpha mask should be read, rather than assuming full opacity.
    #[inline]
    pub const fn has_alpha(&self) -> bool {
        self.flags.contains(PixelFormatFlags::ALPHA_PIXELS)
    }

    /// Whether the header declares this as a raw RGB format.
    #[inline]
    pub const fn is_rgb(&self) -> bool {
        self.flags.contains(PixelFormatFlags::RGB)
    }

    /// Number of bytes one pixel occupies in the stream.
    #[inline]
    pub const fn bytes_per_pixel(&self) -> usize {
        (self.bits_per_pixel / 8) as usize
    }
}
