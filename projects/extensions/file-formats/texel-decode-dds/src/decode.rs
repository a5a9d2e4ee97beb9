//! Decoding of the top-level surface of a DDS file.

use crate::dds::{parse_dds, DdsFormat, DdsInfo};
use crate::error::DdsDecodeError;
use texel_decode_bc::BlockFormat;
use texel_decode_common::{DecodeError, RgbaImage};
use texel_decode_rgb::{decode_uncompressed_from_slice, PixelUnpacker};

/// Decodes the top-level surface of an in-memory DDS file into RGBA8.
///
/// Mipmaps and any further surfaces after the first are ignored.
///
/// # Errors
///
/// - [`DdsDecodeError::NotDds`] if the header cannot be parsed.
/// - [`DdsDecodeError::UnsupportedFormat`] for [`DdsFormat::Unknown`].
/// - [`DdsDecodeError::Decode`] if the pixel data is truncated or its
///   bit count is unsupported.
pub fn decode_dds(data: &[u8]) -> Result<RgbaImage, DdsDecodeError> {
    let info = parse_dds(data).ok_or(DdsDecodeError::NotDds)?;
    decode_surface(&info, &data[info.data_offset..])
}

/// Decodes a surface whose header was already parsed; `pixels` starts at
/// [`DdsInfo::data_offset`].
pub fn decode_surface(info: &DdsInfo, pixels: &[u8]) -> Result<RgbaImage, DdsDecodeError> {
    check_surface_len(info, pixels)?;

    match info.format {
        DdsFormat::Bc1 => decode_blocks(BlockFormat::Bc1, info, pixels),
        DdsFormat::Bc2 => decode_blocks(BlockFormat::Bc2, info, pixels),
        DdsFormat::Uncompressed(descriptor) => Ok(decode_uncompressed_from_slice(
            &descriptor,
            info.width,
            info.height,
            pixels,
        )?),
        DdsFormat::Unknown => {
            log::warn!("Cannot decode DDS surface of unknown format");
            Err(DdsDecodeError::UnsupportedFormat(info.format))
        }
    }
}

/// Rejects truncated pixel data before the output image is allocated.
///
/// The reported offset is that of the first block or pixel that is incomplete,
/// matching what decoding would have stopped at.
fn check_surface_len(info: &DdsInfo, pixels: &[u8]) -> Result<(), DecodeError> {
    if info.width == 0 || info.height == 0 {
        return Ok(());
    }

    let unit = match info.format {
        DdsFormat::Bc1 => BlockFormat::Bc1.block_size(),
        DdsFormat::Bc2 => BlockFormat::Bc2.block_size(),
        DdsFormat::Uncompressed(descriptor) => PixelUnpacker::new(&descriptor)?.bytes_per_pixel(),
        DdsFormat::Unknown => return Ok(()),
    };

    let required = info.surface_size().ok_or(DecodeError::DimensionsTooLarge {
        width: info.width,
        height: info.height,
    })?;
    if pixels.len() < required {
        return Err(DecodeError::ShortRead {
            offset: pixels.len() / unit * unit,
            needed: unit,
        });
    }

    Ok(())
}

#[cfg(feature = "rayon")]
fn decode_blocks(
    format: BlockFormat,
    info: &DdsInfo,
    pixels: &[u8],
) -> Result<RgbaImage, DdsDecodeError> {
    Ok(texel_decode_bc::decode_blocks_par(
        format,
        info.width,
        info.height,
        pixels,
    )?)
}

#[cfg(not(feature = "rayon"))]
fn decode_blocks(
    format: BlockFormat,
    info: &DdsInfo,
    pixels: &[u8],
) -> Result<RgbaImage, DdsDecodeError> {
    Ok(texel_decode_bc::decode_blocks_from_slice(
        format,
        info.width,
        info.height,
        pixels,
    )?)
}
