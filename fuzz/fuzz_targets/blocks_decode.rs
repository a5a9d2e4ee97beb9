#![no_main]

// Decodes arbitrary block data as an image of arbitrary (small) dimensions and checks
// that the reader and slice paths agree, and that every visible pixel comes from the
// tile covering it.

use libfuzzer_sys::{arbitrary, fuzz_target};
use texel_decode_bc::{decode_blocks, decode_blocks_from_slice, BlockFormat};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub bc2: bool,
    pub width: u8,
    pub height: u8,
    pub data: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let format = if input.bc2 {
        BlockFormat::Bc2
    } else {
        BlockFormat::Bc1
    };
    let (width, height) = (input.width as u32, input.height as u32);

    let from_slice = decode_blocks_from_slice(format, width, height, &input.data);
    let from_reader = decode_blocks(format, width, height, &mut &input.data[..]);

    let image = match (from_slice, from_reader) {
        (Ok(a), Ok(b)) => {
            assert_eq!(a, b);
            a
        }
        (Err(a), Err(b)) => {
            assert_eq!(a.to_string(), b.to_string());
            return;
        }
        (a, b) => panic!("Slice and reader disagree: {a:?} vs {b:?}"),
    };

    let blocks_wide = width.div_ceil(4) as usize;
    for y in 0..height {
        for x in 0..width {
            let block_idx = (y / 4) as usize * blocks_wide + (x / 4) as usize;
            let src = &input.data[block_idx * format.block_size()..];
            let tile = format.decode_block(src).expect("block present");
            let expected = tile.pixel(((y % 4) * 4 + (x % 4)) as usize);
            assert_eq!(image.pixel(x, y), expected);
        }
    }
});
