#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

extern crate alloc;

pub mod bc1;
pub mod bc2;
pub mod block_format;
pub mod grid;
pub mod palette;

#[cfg(test)]
pub mod test_prelude;

pub use block_format::{BlockFormat, DecodedTile};
pub use grid::decode_blocks_from_slice;

#[cfg(feature = "std")]
pub use grid::{decode_blocks, decode_blocks_into};

#[cfg(feature = "rayon")]
pub use grid::decode_blocks_par;
