use crate::error::CliError;
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Recursively visits directories and collects the files within.
///
/// Directories or entries that cannot be read are skipped.
pub fn find_all_files(dir: &Path, entries: &mut Vec<PathBuf>) -> std::io::Result<()> {
    // Gracefully handle cases where the directory cannot be read
    let dir_entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Ok(()),
    };

    for entry in dir_entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue, // Skip problematic entries, e.g. those without access.
        };

        let path = entry.path();
        if path.is_dir() {
            find_all_files(&path, entries)?;
        } else {
            entries.push(path);
        }
    }
    Ok(())
}

/// Parses an input path from the command line; it must exist.
pub fn canonicalize_input_path(value: &str) -> Result<PathBuf, String> {
    fs::canonicalize(value).map_err(|e| format!("Invalid input path '{value}': {e}"))
}

/// Opens a file in read-only mode and returns a handle.
#[inline(always)]
pub fn open_read_handle(path: &Path) -> Result<ReadOnlyFileHandle, CliError> {
    let path_str = path
        .to_str()
        .ok_or_else(|| CliError::InvalidPath(path.to_path_buf()))?;
    ReadOnlyFileHandle::open(path_str).map_err(|e| CliError::Mmap(e.to_string()))
}

/// Retrieves the size of the file for a given handle.
#[inline(always)]
pub fn get_file_size(handle: &ReadOnlyFileHandle) -> Result<usize, CliError> {
    let size = handle.size().map_err(|e| CliError::Mmap(e.to_string()))?;
    usize::try_from(size).map_err(|e| CliError::Mmap(e.to_string()))
}

/// Memory maps the file at `path` and passes its contents to `f`.
///
/// Empty files are passed as an empty slice without being mapped.
pub fn with_mapped_file<T>(
    path: &Path,
    f: impl FnOnce(&[u8]) -> Result<T, CliError>,
) -> Result<T, CliError> {
    let handle = open_read_handle(path)?;
    let len = get_file_size(&handle)?;
    if len == 0 {
        return f(&[]);
    }

    let mapping = ReadOnlyMmap::new(&handle, 0, len).map_err(|e| CliError::Mmap(e.to_string()))?;
    f(mapping.as_slice())
}

/// Prints the error of a failed file, unless there was none.
pub fn handle_process_entry_error(path: &Path, result: Result<(), CliError>) {
    if let Err(e) = result {
        eprintln!("{}: {e}", path.display());
    }
}
