#![allow(dead_code)]

use oneshot_deflate::CompressionLevel;
use rand::rngs::StdRng;
use rand::{Rng as _, RngCore as _, SeedableRng as _};

pub fn levels() -> Vec<CompressionLevel> {
    let mut levels = vec![
        CompressionLevel::None,
        CompressionLevel::Fastest,
        CompressionLevel::Best,
        CompressionLevel::Default,
    ];
    levels.extend((0..=CompressionLevel::MAX).map(CompressionLevel::Precise));
    levels
}

pub fn test_input_sizes() -> Vec<usize> {
    (0..=8).map(|exp| (1usize << (exp * 2)) + exp).collect()
}

pub fn get_test_cases(n: usize) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(14);

    let mut random = vec![0u8; n];
    rng.fill_bytes(&mut random);

    vec![
        // Zeroes
        vec![0u8; n],
        // Same non-zero
        vec![14u8; n],
        // Ascending values
        (0..n).map(|i| i as u8).collect(),
        // Short repeating text
        b"the quick brown fox ".iter().copied().cycle().take(n).collect(),
        // Alternating large and small values
        (0..n).map(|i| if i % 2 == 0 { 0xFF } else { 3 }).collect(),
        // Random bytes, incompressible
        random,
        // Random runs
        (0..n)
            .scan(0u8, |run, _| {
                if rng.random_bool(0.05) {
                    *run = rng.random();
                }
                Some(*run)
            })
            .collect(),
        // Spike in the middle
        (0..n).map(|i| if i == n / 2 { u8::MAX } else { 1 }).collect(),
        // An empty vector
        Vec::new(),
    ]
}
