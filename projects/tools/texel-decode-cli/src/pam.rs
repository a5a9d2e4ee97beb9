//! Writer for PAM (portable arbitrary map) images, the RGBA member of the netpbm family.

use std::io::{self, Write};
use texel_decode_common::RgbaImage;

/// Writes `image` as a PAM file with tuple type `RGB_ALPHA`.
pub fn write_pam<W: Write>(writer: &mut W, image: &RgbaImage) -> io::Result<()> {
    write!(
        writer,
        "P7\nWIDTH {}\nHEIGHT {}\nDEPTH 4\nMAXVAL 255\nTUPLTYPE RGB_ALPHA\nENDHDR\n",
        image.width(),
        image.height()
    )?;
    writer.write_all(image.as_raw())
}
