//! Round-trip tests across levels, framings and input shapes.

use oneshot_deflate::{
    deflate_bound, Codec, CodecToSlice as _, CompressOptions, CompressionLevel, Compressor,
    DecompressOptions, Decompressor, Framing,
};

mod common;
use common::{get_test_cases, levels, test_input_sizes};

#[test]
fn test_roundtrip_every_level() {
    let mut decompressor = Decompressor::new().unwrap();

    for level in levels() {
        let mut compressor = Compressor::new(level).unwrap();
        for n in test_input_sizes() {
            for input in get_test_cases(n) {
                let compressed = compressor.compress(&input).unwrap();
                assert!(
                    compressed.len() <= deflate_bound(input.len(), Framing::Zlib),
                    "{level:?}: {} bytes exceed the bound for {}",
                    compressed.len(),
                    input.len()
                );

                let decompressed = decompressor.decompress(&compressed, input.len()).unwrap();
                assert_eq!(decompressed, input, "{level:?}, n = {n}");
            }
        }
    }
}

#[test]
fn test_roundtrip_raw_framing() {
    let options = CompressOptions::default().with_framing(Framing::Raw);
    let mut compressor = Compressor::with_options(options).unwrap();
    let mut decompressor = Decompressor::with_options(DecompressOptions::from(options)).unwrap();

    for n in test_input_sizes() {
        for input in get_test_cases(n) {
            let compressed = compressor.compress(&input).unwrap();
            assert!(compressed.len() <= compressor.compress_bound(input.len()));
            assert_eq!(
                decompressor.decompress(&compressed, input.len()).unwrap(),
                input
            );
        }
    }
}

#[test]
fn test_sequential_calls_are_independent() {
    let mut compressor = Compressor::new(CompressionLevel::Default).unwrap();
    let first = compressor.compress(b"first input, first input").unwrap();
    let second = compressor.compress(b"second").unwrap();
    let first_again = compressor.compress(b"first input, first input").unwrap();
    assert_eq!(first, first_again, "state leaked between calls");

    let mut fresh = Compressor::new(CompressionLevel::Default).unwrap();
    assert_eq!(second, fresh.compress(b"second").unwrap());

    let mut decompressor = Decompressor::new().unwrap();
    assert_eq!(decompressor.decompress(&second, 6).unwrap(), b"second");
    assert_eq!(
        decompressor.decompress(&first, 24).unwrap(),
        b"first input, first input"
    );
}

#[test]
fn test_ten_as() {
    let input = b"AAAAAAAAAA";
    let mut compressor = Compressor::new(CompressionLevel::Default).unwrap();
    let compressed = compressor.compress(input).unwrap();
    assert!(!compressed.is_empty());
    assert!(compressed.len() <= compressor.compress_bound(10));

    let mut decompressor = Decompressor::new().unwrap();
    assert_eq!(decompressor.decompress(&compressed, 10).unwrap(), input);
}

#[test]
fn test_empty_input() {
    for level in levels() {
        let mut compressor = Compressor::new(level).unwrap();
        let compressed = compressor.compress(&[]).unwrap();
        assert!(!compressed.is_empty(), "zlib framing is never empty");

        let mut decompressor = Decompressor::new().unwrap();
        assert!(decompressor.decompress(&compressed, 0).unwrap().is_empty());
    }
}

#[test]
fn test_slice_roundtrip_reuses_buffers() {
    let mut codec = Codec::new(CompressionLevel::Best).unwrap();
    let mut compressed = vec![0u8; deflate_bound(4096, Framing::Zlib)];
    let mut decompressed = vec![0u8; 4096];

    for input in get_test_cases(4096).into_iter().filter(|c| c.len() == 4096) {
        let len = codec.compress_to_slice(&input, &mut compressed).unwrap().len();
        let result = codec
            .decompress_to_slice(&compressed[..len], &mut decompressed)
            .unwrap();
        assert_eq!(result, &input[..]);
    }
}

#[test]
fn test_text_roundtrip() {
    let text = "Lorem ipsum dolor sit amet, ".repeat(50);
    let mut compressor = Compressor::new(CompressionLevel::Default).unwrap();
    let compressed = compressor.compress_str(&text).unwrap();
    assert!(compressed.len() < text.len());

    let mut decompressor = Decompressor::new().unwrap();
    assert_eq!(
        decompressor
            .decompress_to_string(&compressed, text.len())
            .unwrap(),
        text
    );
}

#[test]
fn test_independent_instances_on_threads() {
    let handles: Vec<_> = (0..4u8)
        .map(|seed| {
            std::thread::spawn(move || {
                let mut codec = Codec::new(CompressionLevel::Precise(u32::from(seed) + 1)).unwrap();
                let input: Vec<u8> = (0..50_000u32).map(|i| (i % 97) as u8 ^ seed).collect();
                for _ in 0..8 {
                    let compressed = codec.compress(&input).unwrap();
                    assert_eq!(codec.decompress(&compressed, input.len()).unwrap(), input);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

fn assert_send<T: Send>() {}

#[test]
fn test_roles_are_send() {
    assert_send::<Compressor>();
    assert_send::<Decompressor>();
    assert_send::<Codec>();
}
