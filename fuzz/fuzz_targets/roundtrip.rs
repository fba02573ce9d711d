#![no_main]

use libfuzzer_sys::fuzz_target;
use oneshot_deflate::{deflate_bound, Compressor, DecompressOptions, Decompressor};
mod common;
use common::*;

fuzz_target!(|input: FuzzInput| {
    let options = input.options();
    let mut compressor = Compressor::with_options(options).expect("levels are always valid");
    let mut decompressor = Decompressor::with_options(DecompressOptions::from(options)).unwrap();

    let compressed = compressor
        .compress(&input.data)
        .expect("The bound always fits the stream");
    assert!(compressed.len() <= deflate_bound(input.data.len(), options.framing));

    let decompressed = decompressor
        .decompress(&compressed, input.data.len())
        .expect("If we can compress it, we can decompress it");
    assert_eq!(decompressed, input.data, "Decompressed output mismatches");

    if !input.data.is_empty() {
        assert!(
            decompressor
                .decompress(&compressed, input.data.len() - 1)
                .is_err(),
            "One byte short must be detected"
        );
    }
});
