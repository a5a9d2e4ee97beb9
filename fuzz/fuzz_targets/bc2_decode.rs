#![no_main]

// Compares our BC2 decoder against rgbcx-sys for colors and bcdec_rs for alpha.

use libfuzzer_sys::{arbitrary, fuzz_target};
use rgbcx_sys::root::rgbcx;
use texel_decode_bc::bc1::Bc1Block;
use texel_decode_bc::bc2::Bc2Block;
use texel_decode_common::color_565::Color565;
use texel_decode_common::color_8888::Color8888;
use texel_decode_common::decoded_4x4_block::Decoded4x4Block;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Bc2Bytes {
    pub bytes: [u8; 16],
}

fuzz_target!(|block: Bc2Bytes| {
    let ours = Bc2Block::decode(&block.bytes).to_decoded_4x4();

    // Alpha never depends on the color section.
    let alpha = bcdec_alpha(&block.bytes);
    for (pixel, expected) in ours.pixels.iter().zip(alpha) {
        assert_eq!(pixel.a, expected, "Alpha doesn't match");
    }

    // BC2 always uses the four color palette, so it only agrees with a BC1
    // decoder when the endpoints already select that mode.
    let c0 = Color565::from_le_bytes([block.bytes[8], block.bytes[9]]);
    let c1 = Color565::from_le_bytes([block.bytes[10], block.bytes[11]]);
    if !c0.greater_than(&c1) {
        return;
    }

    let mut color = [0u8; 8];
    color.copy_from_slice(&block.bytes[8..]);
    let reference = rgbcx_decode_colors(&color);
    for (pixel, expected) in ours.pixels.iter().zip(reference.pixels) {
        assert_eq!(pixel.without_alpha(), expected.without_alpha(), "Colors don't match");
    }

    let bc1 = Bc1Block::decode(&color).to_decoded_4x4();
    for (pixel, expected) in ours.pixels.iter().zip(bc1.pixels) {
        assert_eq!(pixel.without_alpha(), expected.without_alpha());
    }
});

fn rgbcx_decode_colors(block: &[u8; 8]) -> Decoded4x4Block {
    let mut rgba = [0u8; 4 * 16];
    unsafe {
        rgbcx::unpack_bc1(
            block.as_ptr() as *const core::ffi::c_void,
            rgba.as_mut_ptr() as *mut core::ffi::c_void,
            true, // set_alpha
            rgbcx::bc1_approx_mode::cBC1Ideal,
        );
    }

    Decoded4x4Block::from_fn(|i| {
        let p = &rgba[i * 4..i * 4 + 4];
        Color8888::new(p[0], p[1], p[2], p[3])
    })
}

fn bcdec_alpha(block: &[u8; 16]) -> [u8; 16] {
    let mut rgba = [0u8; 4 * 16];
    bcdec_rs::bc2(block, &mut rgba, 4 * 4);

    let mut alpha = [0u8; 16];
    for (i, a) in alpha.iter_mut().enumerate() {
        *a = rgba[i * 4 + 3];
    }
    alpha
}
