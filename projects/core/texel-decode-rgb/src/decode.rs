//! Decoding of uncompressed, bitmask described pixel data into RGBA8.
//!
//! Pixels are `bits_per_pixel / 8` bytes each, stored row-major with no row
//! padding, and read as a little endian integer zero-extended to 32 bits.

use crate::channel::ChannelMask;
use texel_decode_common::{
    color_8888::Color8888,
    error::{rgba_buffer_len, DecodeError},
    PixelFormatDescriptor, RgbaImage,
};

#[cfg(feature = "std")]
use std::io::Read;

/// The channel masks of a [`PixelFormatDescriptor`], precomputed once per image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelUnpacker {
    r: ChannelMask,
    g: ChannelMask,
    b: ChannelMask,
    a: Option<ChannelMask>,
    bytes_per_pixel: usize,
}

impl PixelUnpacker {
    /// Precomputes the descriptor's channels.
    ///
    /// Pixels are `bits_per_pixel / 8` bytes, rounded down; a bit count below 8
    /// reads no bytes and every pixel unpacks from a raw value of 0.
    /// Alpha is read only when the descriptor has [`PixelFormatFlags::ALPHA_PIXELS`]
    /// set and a non-zero alpha mask; otherwise pixels are fully opaque.
    ///
    /// # Errors
    ///
    /// [`DecodeError::UnsupportedBitCount`] if `bits_per_pixel` exceeds 32.
    ///
    /// [`PixelFormatFlags::ALPHA_PIXELS`]: texel_decode_common::PixelFormatFlags::ALPHA_PIXELS
    pub fn new(descriptor: &PixelFormatDescriptor) -> Result<Self, DecodeError> {
        if descriptor.bits_per_pixel > 32 {
            return Err(DecodeError::UnsupportedBitCount(descriptor.bits_per_pixel));
        }

        let a = (descriptor.has_alpha() && descriptor.a_mask != 0)
            .then(|| ChannelMask::new(descriptor.a_mask));

        Ok(Self {
            r: ChannelMask::new(descriptor.r_mask),
            g: ChannelMask::new(descriptor.g_mask),
            b: ChannelMask::new(descriptor.b_mask),
            a,
            bytes_per_pixel: descriptor.bytes_per_pixel(),
        })
    }

    /// Size of one packed pixel in bytes (0-4).
    #[inline]
    pub fn bytes_per_pixel(&self) -> usize {
        self.bytes_per_pixel
    }

    /// Unpacks a pixel from its little endian bytes; only the first
    /// [`PixelUnpacker::bytes_per_pixel`] bytes are read.
    ///
    /// # Panics
    ///
    /// If `bytes` is shorter than [`PixelUnpacker::bytes_per_pixel`].
    #[inline]
    pub fn unpack_bytes(&self, bytes: &[u8]) -> Color8888 {
        let mut raw = [0u8; 4];
        raw[..self.bytes_per_pixel].copy_from_slice(&bytes[..self.bytes_per_pixel]);
        self.unpack(u32::from_le_bytes(raw))
    }

    /// Unpacks a pixel already widened to 32 bits.
    #[inline]
    pub fn unpack(&self, raw: u32) -> Color8888 {
        Color8888::new(
            self.r.extract(raw),
            self.g.extract(raw),
            self.b.extract(raw),
            self.a.map_or(255, |a| a.extract(raw)),
        )
    }
}

/// Decodes `width * height` uncompressed pixels read from `reader`.
///
/// # Errors
///
/// - [`DecodeError::UnsupportedBitCount`] for more than 32 bits per pixel, before
///   anything is read.
/// - [`DecodeError::ShortRead`] with the offset of the first pixel that could not be read.
/// - [`DecodeError::Io`] when the reader fails for any other reason.
///
/// # Examples
///
/// ```
/// use texel_decode_common::PixelFormatDescriptor;
/// use texel_decode_rgb::decode_uncompressed;
///
/// let format = PixelFormatDescriptor::rgb(16, 0xF800, 0x07E0, 0x001F);
/// let data = [0xFF, 0xFF];
/// let image = decode_uncompressed(&format, 1, 1, &mut &data[..]).unwrap();
/// assert_eq!(image.as_raw(), &[255, 255, 255, 255]);
/// ```
#[cfg(feature = "std")]
pub fn decode_uncompressed<R: Read + ?Sized>(
    descriptor: &PixelFormatDescriptor,
    width: u32,
    height: u32,
    reader: &mut R,
) -> Result<RgbaImage, DecodeError> {
    let mut image = RgbaImage::new(width, height)?;
    decode_uncompressed_into(descriptor, width, height, reader, image.as_raw_mut())?;
    Ok(image)
}

/// Decodes uncompressed pixels read from `reader` into a caller provided RGBA
/// buffer of exactly `width * height * 4` bytes.
///
/// On error the buffer holds whatever was decoded before the failure.
#[cfg(feature = "std")]
pub fn decode_uncompressed_into<R: Read + ?Sized>(
    descriptor: &PixelFormatDescriptor,
    width: u32,
    height: u32,
    reader: &mut R,
    output: &mut [u8],
) -> Result<(), DecodeError> {
    decode_pixels(descriptor, width, height, output, |pixel, offset| {
        reader
            .read_exact(pixel)
            .map_err(|e| DecodeError::from_read_error(e, offset, pixel.len()))
    })
}

/// Decodes `width * height` uncompressed pixels from a slice.
///
/// Trailing bytes after the last pixel are ignored.
pub fn decode_uncompressed_from_slice(
    descriptor: &PixelFormatDescriptor,
    width: u32,
    height: u32,
    data: &[u8],
) -> Result<RgbaImage, DecodeError> {
    let mut image = RgbaImage::new(width, height)?;
    decode_pixels(descriptor, width, height, image.as_raw_mut(), |pixel, offset| {
        let src = data
            .get(offset..offset + pixel.len())
            .ok_or(DecodeError::ShortRead {
                offset,
                needed: pixel.len(),
            })?;
        pixel.copy_from_slice(src);
        Ok(())
    })?;
    Ok(image)
}

/// Calls `next_pixel` once per pixel in row-major order and writes the unpacked
/// color into `output`.
fn decode_pixels(
    descriptor: &PixelFormatDescriptor,
    width: u32,
    height: u32,
    output: &mut [u8],
    mut next_pixel: impl FnMut(&mut [u8], usize) -> Result<(), DecodeError>,
) -> Result<(), DecodeError> {
    let expected = rgba_buffer_len(width, height)?;
    if output.len() != expected {
        return Err(DecodeError::OutputSizeMismatch {
            expected,
            actual: output.len(),
        });
    }
    if expected == 0 {
        return Ok(());
    }

    let unpacker = PixelUnpacker::new(descriptor)?;

    log::trace!(
        "Decoding {width}x{height} uncompressed image, {} bits per pixel",
        descriptor.bits_per_pixel
    );

    let bytes_per_pixel = unpacker.bytes_per_pixel();
    let mut buffer = [0u8; 4];
    for (index, pixel) in output.chunks_exact_mut(4).enumerate() {
        next_pixel(&mut buffer[..bytes_per_pixel], index * bytes_per_pixel)?;
        pixel.copy_from_slice(&unpacker.unpack(u32::from_le_bytes(buffer)).to_array());
    }

    Ok(())
}
