//! In-memory DDS files for integration tests.
#![allow(dead_code)]

use endian_writer::{EndianWriter, LittleEndianWriter};

pub const DDS_HEADER_SIZE: usize = 128;
pub const DX10_HEADER_SIZE: usize = 20;

const DDSD_MIPMAPCOUNT: u32 = 0x20000;
const DDPF_ALPHAPIXELS: u32 = 0x1;
const DDPF_FOURCC: u32 = 0x4;
const DDPF_RGB: u32 = 0x40;

/// The pixel format written into a [`DdsBuilder`] header.
pub enum Format {
    FourCc([u8; 4]),
    Dx10(u32),
    Rgb {
        bits: u32,
        masks: [u32; 4],
        alpha: bool,
    },
}

pub struct DdsBuilder {
    width: u32,
    height: u32,
    mipmap_count: u32,
    format: Format,
}

impl DdsBuilder {
    pub fn new(format: Format, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            mipmap_count: 1,
            format,
        }
    }

    pub fn mipmaps(mut self, mipmap_count: u32) -> Self {
        self.mipmap_count = mipmap_count;
        self
    }

    /// Writes the header followed by `pixels`.
    pub fn build(&self, pixels: &[u8]) -> Vec<u8> {
        let header_size = match self.format {
            Format::Dx10(_) => DDS_HEADER_SIZE + DX10_HEADER_SIZE,
            _ => DDS_HEADER_SIZE,
        };
        let mut data = vec![0u8; header_size];
        let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };

        unsafe {
            writer.write_u32_at(u32::from_le_bytes(*b"DDS "), 0);
            writer.write_u32_at(124, 4);
            let flags = if self.mipmap_count > 1 {
                0x1007 | DDSD_MIPMAPCOUNT
            } else {
                0x1007
            };
            writer.write_u32_at(flags, 0x08);
            writer.write_u32_at(self.height, 0x0C);
            writer.write_u32_at(self.width, 0x10);
            writer.write_u32_at(self.mipmap_count, 0x1C);
            writer.write_u32_at(32, 0x4C);

            match self.format {
                Format::FourCc(fourcc) => {
                    writer.write_u32_at(DDPF_FOURCC, 0x50);
                    writer.write_u32_at(u32::from_le_bytes(fourcc), 0x54);
                }
                Format::Dx10(dxgi_format) => {
                    writer.write_u32_at(DDPF_FOURCC, 0x50);
                    writer.write_u32_at(u32::from_le_bytes(*b"DX10"), 0x54);
                    writer.write_u32_at(dxgi_format, 0x80);
                    writer.write_u32_at(3, 0x84); // D3D10_RESOURCE_DIMENSION_TEXTURE2D
                    writer.write_u32_at(1, 0x8C); // array size
                }
                Format::Rgb { bits, masks, alpha } => {
                    let flags = if alpha { DDPF_RGB | DDPF_ALPHAPIXELS } else { DDPF_RGB };
                    writer.write_u32_at(flags, 0x50);
                    writer.write_u32_at(bits, 0x58);
                    for (index, mask) in masks.iter().enumerate() {
                        writer.write_u32_at(*mask, 0x5C + index as isize * 4);
                    }
                }
            }
        }

        data.extend_from_slice(pixels);
        data
    }
}
