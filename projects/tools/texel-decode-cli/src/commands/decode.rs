use crate::error::CliError;
use crate::pam::write_pam;
use crate::util::*;
use argh::FromArgs;
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    time::Instant,
};
use texel_decode_dds::{decode_surface, parse_dds, DdsDecodeError};

#[derive(FromArgs, Debug)]
/// Decode a DDS file, or a directory of them, to PAM images
#[argh(subcommand, name = "decode")]
pub struct DecodeCmd {
    /// input DDS file or directory
    #[argh(option, from_str_fn(crate::util::canonicalize_input_path))]
    pub input: PathBuf,

    /// output PAM file, or directory when the input is a directory
    #[argh(option)]
    pub output: PathBuf,
}

pub fn handle_decode_command(cmd: DecodeCmd) -> Result<(), CliError> {
    let start = Instant::now();

    if !cmd.input.is_dir() {
        decode_file(&cmd.input, &cmd.output)?;
        println!("Decoded {} in {:.2?}", cmd.input.display(), start.elapsed());
        return Ok(());
    }

    let mut entries = Vec::new();
    find_all_files(&cmd.input, &mut entries)?;
    println!("Found {} files to decode", entries.len());

    let process = |path: &PathBuf| {
        let result = output_path_for(path, &cmd.input, &cmd.output)
            .and_then(|output| decode_file(path, &output));
        handle_process_entry_error(path, result);
    };

    #[cfg(feature = "multithreaded")]
    {
        use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
        entries.par_iter().for_each(process);
    }
    #[cfg(not(feature = "multithreaded"))]
    entries.iter().for_each(process);

    println!("Decode completed in {:.2?}", start.elapsed());
    Ok(())
}

/// Decodes the DDS file at `input` and writes it as PAM to `output`.
pub fn decode_file(input: &Path, output: &Path) -> Result<(), CliError> {
    let image = with_mapped_file(input, |data| {
        let info = parse_dds(data).ok_or(DdsDecodeError::NotDds)?;
        log::info!(
            "{}: {}x{} {:?}",
            input.display(),
            info.width,
            info.height,
            info.format
        );
        Ok(decode_surface(&info, &data[info.data_offset..])?)
    })?;

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(output)?);
    write_pam(&mut writer, &image)?;
    writer.flush()?;
    Ok(())
}

/// Maps a file under `input_root` to the same relative location under
/// `output_root`, with a `.pam` extension.
fn output_path_for(path: &Path, input_root: &Path, output_root: &Path) -> Result<PathBuf, CliError> {
    let relative = path
        .strip_prefix(input_root)
        .map_err(|_| CliError::InvalidPath(path.to_path_buf()))?;
    Ok(output_root.join(relative).with_extension("pam"))
}
