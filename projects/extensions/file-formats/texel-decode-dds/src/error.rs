//! Errors returned when decoding a DDS file.

use crate::dds::DdsFormat;
use texel_decode_common::DecodeError;
use thiserror::Error;

/// Errors produced by [`decode_dds`](crate::decode::decode_dds).
#[derive(Debug, Error)]
pub enum DdsDecodeError {
    /// The data does not start with a complete DDS header.
    #[error("Input is not a DDS file, or its header is truncated")]
    NotDds,

    /// The file is a DDS, but its pixel format cannot be decoded.
    #[error("Unsupported DDS pixel format: {0:?}")]
    UnsupportedFormat(DdsFormat),

    /// Decoding the pixel data failed.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
