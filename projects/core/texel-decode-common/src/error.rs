//! Errors surfaced by the decoders.
//!
//! Decoding itself is total over its fixed-size inputs; these errors come from
//! the byte stream running out (or failing), or from a request the decoder
//! rejects before reading anything.

use thiserror::Error;

/// Errors produced while decoding pixel data.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The byte stream ended before all pixel data was read.
    #[error("Pixel data ended early; could not read {needed} bytes at offset {offset}")]
    ShortRead {
        /// Offset (from the start of the pixel data) of the read that failed.
        offset: usize,
        /// Number of bytes that were requested.
        needed: usize,
    },

    /// The underlying reader failed for a reason other than running out of data.
    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(std::io::Error),

    /// The pixel format is wider than the 32 bits the bitmask decoder reads.
    #[error("Unsupported bits per pixel: {0}. Expected at most 32.")]
    UnsupportedBitCount(u32),

    /// A caller provided output buffer does not match the image size.
    #[error("Output buffer is {actual} bytes, but the image needs {expected} bytes")]
    OutputSizeMismatch {
        /// Size the image requires, in bytes.
        expected: usize,
        /// Size of the buffer that was provided.
        actual: usize,
    },

    /// The image dimensions overflow the addressable size of an RGBA buffer.
    #[error("Image of {width}x{height} pixels is too large to decode")]
    DimensionsTooLarge {
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
    },
}

impl DecodeError {
    /// Maps an error from `read_exact` at `offset` into a [`DecodeError`].
    ///
    /// End of stream becomes [`DecodeError::ShortRead`]; anything else is kept as I/O.
    #[cfg(feature = "std")]
    pub fn from_read_error(error: std::io::Error, offset: usize, needed: usize) -> Self {
        if error.kind() == std::io::ErrorKind::UnexpectedEof {
            DecodeError::ShortRead { offset, needed }
        } else {
            DecodeError::Io(error)
        }
    }
}

/// Computes the size of an RGBA8 buffer for the given dimensions.
pub fn rgba_buffer_len(width: u32, height: u32) -> Result<usize, DecodeError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(4))
        .ok_or(DecodeError::DimensionsTooLarge { width, height })
}
