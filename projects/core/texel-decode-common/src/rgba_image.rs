//! Owned RGBA8 output image.

use crate::color_8888::Color8888;
use crate::error::{rgba_buffer_len, DecodeError};
use alloc::vec;
use alloc::vec::Vec;

/// A decoded image: `width * height` pixels of 4 bytes each (R, G, B, A),
/// row-major with the origin at the top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RgbaImage {
    /// Allocates a zero filled (transparent black) image.
    pub fn new(width: u32, height: u32) -> Result<Self, DecodeError> {
        let len = rgba_buffer_len(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![0; len],
        })
    }

    /// Wraps an existing buffer, returning [`None`] if its length does not match the dimensions.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        let len = rgba_buffer_len(width, height).ok()?;
        (pixels.len() == len).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the image has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Raw RGBA bytes.
    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutable raw RGBA bytes.
    #[inline]
    pub fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Consumes the image, returning the raw RGBA bytes.
    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    /// Byte offset of pixel `(x, y)`.
    #[inline]
    pub fn pixel_offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Reads the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// If the coordinates lie outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Color8888 {
        assert!(x < self.width && y < self.height);
        let offset = self.pixel_offset(x, y);
        let p = &self.pixels[offset..offset + 4];
        Color8888::new(p[0], p[1], p[2], p[3])
    }

    /// Writes the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// If the coordinates lie outside the image.
    pub fn put_pixel(&mut self, x: u32, y: u32, color: Color8888) {
        assert!(x < self.width && y < self.height);
        let offset = self.pixel_offset(x, y);
        self.pixels[offset..offset + 4].copy_from_slice(&color.to_array());
    }
}
