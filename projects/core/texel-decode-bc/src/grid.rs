//! Assembly of decoded 4x4 tiles into a full RGBA image.
//!
//! Blocks are stored row by row, left to right. An image whose dimensions are
//! not multiples of 4 still stores whole blocks at its right and bottom edges;
//! the pixels of those blocks that fall outside the image are discarded.

use crate::block_format::{BlockFormat, MAX_BLOCK_SIZE};
use texel_decode_common::{
    decoded_4x4_block::Decoded4x4Block,
    error::{rgba_buffer_len, DecodeError},
    RgbaImage,
};

#[cfg(feature = "std")]
use std::io::Read;

/// Decodes `width * height` pixels of block data read from `reader`.
///
/// Stops at the first block that cannot be read in full, returning
/// [`DecodeError::ShortRead`]. Zero area images perform no reads.
#[cfg(feature = "std")]
pub fn decode_blocks<R: Read + ?Sized>(
    format: BlockFormat,
    width: u32,
    height: u32,
    reader: &mut R,
) -> Result<RgbaImage, DecodeError> {
    let mut image = RgbaImage::new(width, height)?;
    decode_blocks_into(format, width, height, reader, image.as_raw_mut())?;
    Ok(image)
}

/// Decodes block data read from `reader` into a caller provided RGBA buffer of
/// exactly `width * height * 4` bytes.
///
/// On error the buffer holds whatever was decoded before the failure.
#[cfg(feature = "std")]
pub fn decode_blocks_into<R: Read + ?Sized>(
    format: BlockFormat,
    width: u32,
    height: u32,
    reader: &mut R,
    output: &mut [u8],
) -> Result<(), DecodeError> {
    decode_bands(format, width, height, output, |block, offset| {
        reader
            .read_exact(block)
            .map_err(|e| DecodeError::from_read_error(e, offset, block.len()))
    })
}

/// Decodes `width * height` pixels of block data from a slice.
///
/// Trailing bytes after the last block are ignored.
pub fn decode_blocks_from_slice(
    format: BlockFormat,
    width: u32,
    height: u32,
    data: &[u8],
) -> Result<RgbaImage, DecodeError> {
    let mut image = RgbaImage::new(width, height)?;
    decode_bands(format, width, height, image.as_raw_mut(), |block, offset| {
        let src = data
            .get(offset..offset + block.len())
            .ok_or(DecodeError::ShortRead {
                offset,
                needed: block.len(),
            })?;
        block.copy_from_slice(src);
        Ok(())
    })?;
    Ok(image)
}

/// Decodes block data from a slice, one row of blocks per rayon task.
///
/// The output is identical to [`decode_blocks_from_slice`]; the data length is
/// validated before any decoding starts.
#[cfg(feature = "rayon")]
pub fn decode_blocks_par(
    format: BlockFormat,
    width: u32,
    height: u32,
    data: &[u8],
) -> Result<RgbaImage, DecodeError> {
    use rayon::prelude::*;

    let mut image = RgbaImage::new(width, height)?;
    if image.is_empty() {
        return Ok(image);
    }

    let block_size = format.block_size();
    let required = format
        .compressed_size(width, height)
        .ok_or(DecodeError::DimensionsTooLarge { width, height })?;
    if data.len() < required {
        return Err(DecodeError::ShortRead {
            offset: data.len() / block_size * block_size,
            needed: block_size,
        });
    }

    let width = width as usize;
    let row_stride = width.div_ceil(4) * block_size;
    log::trace!("Decoding {width}x{height} {format:?} image in parallel");

    image
        .as_raw_mut()
        .par_chunks_mut(width * 4 * 4)
        .zip(data[..required].par_chunks(row_stride))
        .for_each(|(band, row)| {
            for (block_x, block) in row.chunks_exact(block_size).enumerate() {
                if let Some(tile) = format.decode_block(block) {
                    write_tile(&tile.to_decoded_4x4(), band, width, block_x);
                }
            }
        });

    Ok(image)
}

/// Drives `next_block` once per block in storage order and writes each decoded
/// tile into `output`, one band of 4 image rows at a time.
///
/// `next_block` fills the given buffer with the block stored at the given byte offset.
fn decode_bands(
    format: BlockFormat,
    width: u32,
    height: u32,
    output: &mut [u8],
    mut next_block: impl FnMut(&mut [u8], usize) -> Result<(), DecodeError>,
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

    log::trace!("Decoding {width}x{height} {format:?} image");
    let block_size = format.block_size();
    let width = width as usize;
    let blocks_wide = width.div_ceil(4);

    let mut buffer = [0u8; MAX_BLOCK_SIZE];
    let mut offset = 0;
    for band in output.chunks_mut(width * 4 * 4) {
        for block_x in 0..blocks_wide {
            next_block(&mut buffer[..block_size], offset)?;
            offset += block_size;

            let tile = format.decode_buffer(&buffer);
            write_tile(&tile.to_decoded_4x4(), band, width, block_x);
        }
    }

    Ok(())
}

/// Copies the visible part of a tile into a band of up to 4 image rows.
#[inline]
fn write_tile(tile: &Decoded4x4Block, band: &mut [u8], width: usize, block_x: usize) {
    let x0 = block_x * 4;
    let columns = (width - x0).min(4);
    let rows = band.len() / (width * 4);

    for y in 0..rows {
        let row_start = (y * width + x0) * 4;
        let dst = &mut band[row_start..row_start + columns * 4];
        for (x, pixel) in dst.chunks_exact_mut(4).enumerate() {
            pixel.copy_from_slice(&tile.pixels[y * 4 + x].to_array());
        }
    }
}
