use super::{constants::*, likely_dds};
use endian_writer::{EndianReader, LittleEndianReader};
use texel_decode_bc::BlockFormat;
use texel_decode_common::{PixelFormatDescriptor, PixelFormatFlags};

/// The pixel format of the top-level surface of a DDS file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DdsFormat {
    /// a.k.a. DXT1
    Bc1,
    /// a.k.a. DXT2/3
    Bc2,
    /// Uncompressed pixels described by channel bitmasks.
    Uncompressed(PixelFormatDescriptor),
    /// This is a DDS file, but not in a format we can decode.
    Unknown,
}

impl DdsFormat {
    /// The block format to decode with, if this is a block compressed format.
    #[inline]
    pub fn block_format(&self) -> Option<BlockFormat> {
        match self {
            DdsFormat::Bc1 => Some(BlockFormat::Bc1),
            DdsFormat::Bc2 => Some(BlockFormat::Bc2),
            DdsFormat::Uncompressed(_) | DdsFormat::Unknown => None,
        }
    }
}

/// The information of the DDS file supplied to the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DdsInfo {
    /// Width of the top-level surface in pixels.
    pub width: u32,
    /// Height of the top-level surface in pixels.
    pub height: u32,
    /// Number of mipmap levels, at least 1.
    pub mipmap_count: u32,
    /// Format of the pixel data.
    pub format: DdsFormat,
    /// Offset of the pixel data from the start of the file.
    pub data_offset: usize,
}

impl DdsInfo {
    /// Size in bytes of the top-level surface's pixel data.
    ///
    /// [`None`] for [`DdsFormat::Unknown`], or if the size overflows.
    pub fn surface_size(&self) -> Option<usize> {
        match self.format {
            DdsFormat::Bc1 | DdsFormat::Bc2 => self
                .format
                .block_format()?
                .compressed_size(self.width, self.height),
            DdsFormat::Uncompressed(descriptor) => (self.width as usize)
                .checked_mul(self.height as usize)?
                .checked_mul(descriptor.bytes_per_pixel()),
            DdsFormat::Unknown => None,
        }
    }
}

/// Attempts to parse the header of a DDS file from the given slice.
///
/// # Return
///
/// `None` if the data does not start with the DDS magic, or if the length is
/// insufficient to read the headers.
///
/// Otherwise, a [`DdsInfo`] with the dimensions, format and data offset.
/// Formats that cannot be decoded are reported as [`DdsFormat::Unknown`].
///
/// # Notes
///
/// For DX10 headers, the `DXGI_FORMAT` field determines the format.
pub fn parse_dds(data: &[u8]) -> Option<DdsInfo> {
    if !likely_dds(data) {
        return None;
    }

    // SAFETY: We checked data.len() >= DDS_HEADER_SIZE (128), so every legacy header field is in bounds
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    let fourcc = unsafe { reader.read_u32_at(FOURCC_OFFSET as isize) };

    let (format, data_offset) = if fourcc == FOURCC_DX10 {
        // DX10 header present, ensure the data is long enough.
        if data.len() < DDS_HEADER_SIZE + DX10_HEADER_SIZE {
            return None;
        }

        // SAFETY: We checked data.len() >= DDS_HEADER_SIZE + DX10_HEADER_SIZE (148),
        // so DX10_FORMAT_OFFSET (0x80) + 4 is safe
        let dxgi_format = unsafe { reader.read_u32_at(DX10_FORMAT_OFFSET as isize) };

        // 148 bytes: 128 byte header + 20 byte DX10 header
        (
            format_from_dxgi(dxgi_format),
            DDS_HEADER_SIZE + DX10_HEADER_SIZE,
        )
    } else {
        (format_from_legacy_header(data, fourcc), DDS_HEADER_SIZE)
    };

    // SAFETY: All offsets are within the first DDS_HEADER_SIZE bytes, checked above
    let (flags, height, width, raw_mipmap_count) = unsafe {
        (
            reader.read_u32_at(DDS_FLAGS_OFFSET as isize),
            reader.read_u32_at(DDS_HEIGHT_OFFSET as isize),
            reader.read_u32_at(DDS_WIDTH_OFFSET as isize),
            reader.read_u32_at(DDS_MIPMAP_COUNT_OFFSET as isize),
        )
    };

    let mipmap_count = if (flags & DDSD_MIPMAPCOUNT) != 0 {
        raw_mipmap_count.max(1)
    } else {
        1
    };

    log::debug!("Detected {width}x{height} DDS, format {format:?}, {mipmap_count} mipmap(s)");

    Some(DdsInfo {
        width,
        height,
        mipmap_count,
        format,
        data_offset,
    })
}

/// Maps the `DXGI_FORMAT` of a DX10 header to the formats we decode.
fn format_from_dxgi(dxgi_format: u32) -> DdsFormat {
    match dxgi_format {
        DXGI_FORMAT_BC1_TYPELESS | DXGI_FORMAT_BC1_UNORM | DXGI_FORMAT_BC1_UNORM_SRGB => {
            DdsFormat::Bc1
        }
        DXGI_FORMAT_BC2_TYPELESS | DXGI_FORMAT_BC2_UNORM | DXGI_FORMAT_BC2_UNORM_SRGB => {
            DdsFormat::Bc2
        }
        DXGI_FORMAT_R8G8B8A8_TYPELESS
        | DXGI_FORMAT_R8G8B8A8_UNORM
        | DXGI_FORMAT_R8G8B8A8_UNORM_SRGB
        | DXGI_FORMAT_R8G8B8A8_UINT => DdsFormat::Uncompressed(PixelFormatDescriptor::rgba(
            32,
            RGBA8888_RED_MASK,
            RGBA8888_GREEN_MASK,
            RGBA8888_BLUE_MASK,
            RGBA8888_ALPHA_MASK,
        )),
        DXGI_FORMAT_B8G8R8A8_UNORM
        | DXGI_FORMAT_B8G8R8A8_TYPELESS
        | DXGI_FORMAT_B8G8R8A8_UNORM_SRGB => DdsFormat::Uncompressed(PixelFormatDescriptor::rgba(
            32,
            BGRA8888_RED_MASK,
            BGRA8888_GREEN_MASK,
            BGRA8888_BLUE_MASK,
            BGRA8888_ALPHA_MASK,
        )),
        _ => DdsFormat::Unknown,
    }
}

/// Determines the format from the DX9 pixel format structure.
///
/// # Preconditions
///
/// `data` holds at least [`DDS_HEADER_SIZE`] bytes.
fn format_from_legacy_header(data: &[u8], fourcc: u32) -> DdsFormat {
    // SAFETY: The caller guarantees data.len() >= DDS_HEADER_SIZE, and the pixel
    // format structure ends at 0x6C
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    let pixel_flags = unsafe { reader.read_u32_at(DDS_PIXELFORMAT_FLAGS_OFFSET as isize) };

    if (pixel_flags & DDPF_FOURCC) != 0 {
        // Block-compressed format with FOURCC
        return match fourcc {
            FOURCC_DXT1 => DdsFormat::Bc1,
            FOURCC_DXT2 | FOURCC_DXT3 => DdsFormat::Bc2,
            _ => DdsFormat::Unknown,
        };
    }

    if (pixel_flags & DDPF_RGB) == 0 {
        // YUV, luminance and alpha-only surfaces are not decoded
        return DdsFormat::Unknown;
    }

    // SAFETY: See above
    let descriptor = unsafe {
        PixelFormatDescriptor {
            flags: PixelFormatFlags::from_bits(pixel_flags & (DDPF_RGB | DDPF_ALPHAPIXELS)),
            bits_per_pixel: reader.read_u32_at(DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET as isize),
            r_mask: reader.read_u32_at(DDS_PIXELFORMAT_RBITMASK_OFFSET as isize),
            g_mask: reader.read_u32_at(DDS_PIXELFORMAT_GBITMASK_OFFSET as isize),
            b_mask: reader.read_u32_at(DDS_PIXELFORMAT_BBITMASK_OFFSET as isize),
            a_mask: reader.read_u32_at(DDS_PIXELFORMAT_ABITMASK_OFFSET as isize),
        }
    };

    DdsFormat::Uncompressed(descriptor)
}
