#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

/// Parsing of DDS headers.
pub mod dds;

pub mod decode;
pub mod error;

#[cfg(test)]
pub mod test_prelude;

pub use dds::{likely_dds, parse_dds, DdsFormat, DdsInfo};
pub use decode::{decode_dds, decode_surface};
pub use error::DdsDecodeError;
