#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod color_565;
pub mod color_8888;
pub mod decoded_4x4_block;
pub mod error;
pub mod pixel_format;
pub mod rgba_image;

pub use error::DecodeError;
pub use pixel_format::{PixelFormatDescriptor, PixelFormatFlags};
pub use rgba_image::RgbaImage;
