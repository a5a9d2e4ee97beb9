#![no_main]

// Compares our BC1 decoder against rgbcx-sys using the Ideal method, which is the
// exact-integer palette this crate implements (including the punch-through mode).
// Extra reading: https://fgiesen.wordpress.com/2021/10/04/gpu-bcn-decoding/

use libfuzzer_sys::{arbitrary, fuzz_target};
use rgbcx_sys::root::rgbcx;
use texel_decode_bc::bc1::Bc1Block;
use texel_decode_common::color_8888::Color8888;
use texel_decode_common::decoded_4x4_block::Decoded4x4Block;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Bc1Bytes {
    pub bytes: [u8; 8],
}

fuzz_target!(|block: Bc1Bytes| {
    let ours = Bc1Block::decode(&block.bytes).to_decoded_4x4();
    let reference = rgbcx_decode_bc1(&block.bytes);
    assert_eq!(ours, reference, "Decoded blocks don't match");
});

fn rgbcx_decode_bc1(block: &[u8; 8]) -> Decoded4x4Block {
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
