use std::{io, path::PathBuf};
use texel_decode_dds::DdsDecodeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Memory mapping failed: {0}")]
    Mmap(String),
    #[error(transparent)]
    Decode(#[from] DdsDecodeError),
    #[error("Path is not valid UTF-8: {0}")]
    InvalidPath(PathBuf),
}
