#![no_main]

// Feeds arbitrary bytes to the DDS decoder. Must never panic, and a decoded image must
// have the dimensions its header declares.

use libfuzzer_sys::fuzz_target;
use texel_decode_dds::{decode_dds, parse_dds};

fuzz_target!(|data: &[u8]| {
    let Ok(image) = decode_dds(data) else {
        return;
    };

    let info = parse_dds(data).expect("decoded data has a valid header");
    assert_eq!((image.width(), image.height()), (info.width, info.height));
    assert_eq!(image.as_raw().len(), info.width as usize * info.height as usize * 4);
});
