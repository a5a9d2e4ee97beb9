use crate::error::CliError;
use crate::util::with_mapped_file;
use argh::FromArgs;
use std::path::PathBuf;
use texel_decode_dds::{parse_dds, DdsDecodeError, DdsFormat, DdsInfo};

#[derive(FromArgs, Debug)]
/// Print the dimensions and pixel format of a DDS file
#[argh(subcommand, name = "info")]
pub struct InfoCmd {
    /// input DDS file
    #[argh(option, from_str_fn(crate::util::canonicalize_input_path))]
    pub input: PathBuf,
}

pub fn handle_info_command(cmd: InfoCmd) -> Result<(), CliError> {
    let info = with_mapped_file(&cmd.input, |data| {
        Ok(parse_dds(data).ok_or(DdsDecodeError::NotDds)?)
    })?;

    println!("{}", describe(&info));
    Ok(())
}

/// Formats the header fields of a DDS file for display.
fn describe(info: &DdsInfo) -> String {
    let format = match info.format {
        DdsFormat::Bc1 => "BC1 (DXT1)".to_string(),
        DdsFormat::Bc2 => "BC2 (DXT2/DXT3)".to_string(),
        DdsFormat::Uncompressed(d) => format!(
            "Uncompressed {}bpp (R {:#010X}, G {:#010X}, B {:#010X}, A {:#010X}{})",
            d.bits_per_pixel,
            d.r_mask,
            d.g_mask,
            d.b_mask,
            d.a_mask,
            if d.has_alpha() { "" } else { ", ignored" }
        ),
        DdsFormat::Unknown => "Unknown".to_string(),
    };

    let surface_size = info
        .surface_size()
        .map_or_else(|| "unknown".to_string(), |size| format!("{size} bytes"));

    format!(
        "Dimensions: {}x{}\nFormat: {format}\nMipmaps: {}\nData offset: {}\nTop surface: {surface_size}",
        info.width, info.height, info.mipmap_count, info.data_offset
    )
}
