#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod channel;
pub mod decode;

pub use channel::{extract_channel, ChannelMask};
pub use decode::{decode_uncompressed_from_slice, PixelUnpacker};

#[cfg(feature = "std")]
pub use decode::{decode_uncompressed, decode_uncompressed_into};
