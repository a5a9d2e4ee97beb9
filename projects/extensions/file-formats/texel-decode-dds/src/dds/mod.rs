/// Shared constants between modules.
pub(crate) mod constants;

/// Determine if a file is a DDS file.
pub mod likely_dds;

/// Read the dimensions and pixel format of a DDS file.
pub mod parse_dds;

pub use likely_dds::*;
pub use parse_dds::*;
