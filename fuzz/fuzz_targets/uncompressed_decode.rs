#![no_main]

// Decodes arbitrary pixel data under an arbitrary pixel format descriptor. Must never
// panic, and the reader and slice paths must agree.

use libfuzzer_sys::{arbitrary, fuzz_target};
use texel_decode_common::{PixelFormatDescriptor, PixelFormatFlags};
use texel_decode_rgb::{decode_uncompressed, decode_uncompressed_from_slice};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub flags: u32,
    pub bits_per_pixel: u8,
    pub masks: [u32; 4],
    pub width: u8,
    pub height: u8,
    pub data: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let descriptor = PixelFormatDescriptor {
        flags: PixelFormatFlags::from_bits(input.flags),
        r_mask: input.masks[0],
        g_mask: input.masks[1],
        b_mask: input.masks[2],
        a_mask: input.masks[3],
        bits_per_pixel: input.bits_per_pixel as u32,
    };
    let (width, height) = (input.width as u32, input.height as u32);

    let from_slice = decode_uncompressed_from_slice(&descriptor, width, height, &input.data);
    let from_reader = decode_uncompressed(&descriptor, width, height, &mut &input.data[..]);

    match (from_slice, from_reader) {
        (Ok(a), Ok(b)) => {
            assert_eq!(a, b);
            if !descriptor.has_alpha() || descriptor.a_mask == 0 {
                assert!(a.as_raw().chunks_exact(4).all(|p| p[3] == 255));
            }
        }
        (Err(a), Err(b)) => assert_eq!(a.to_string(), b.to_string()),
        (a, b) => panic!("Slice and reader disagree: {a:?} vs {b:?}"),
    }
});
