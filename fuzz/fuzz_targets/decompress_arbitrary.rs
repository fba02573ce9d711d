#![no_main]

use libfuzzer_sys::fuzz_target;
use oneshot_deflate::{DecompressOptions, Decompressor, Framing};

fuzz_target!(|input: (bool, u16, Vec<u8>)| {
    let (raw, original_size, data) = input;
    let framing = if raw { Framing::Raw } else { Framing::Zlib };
    let mut decompressor =
        Decompressor::with_options(DecompressOptions::default().with_framing(framing)).unwrap();

    // Any outcome is fine as long as a success has the declared size and the
    // session stays usable.
    if let Ok(output) = decompressor.decompress(&data, usize::from(original_size)) {
        assert_eq!(output.len(), usize::from(original_size));
    }
    assert!(!decompressor.is_poisoned());
    assert!(decompressor.decompress(&[], 0).is_err());
});
