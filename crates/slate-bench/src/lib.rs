//! Deterministic inputs for the Slate benchmarks.
//!
//! Every generator takes a seed and feeds it to a [`ChaCha8Rng`], so a
//! benchmark run sees the same keys on every machine:
//!
//! - [`shuffled_keys`]: distinct keys in random order, for unique inserts
//! - [`skewed_keys`]: keys drawn from a small range, for multimap runs
//! - [`byte_buffer`]: pseudo-random payload for view streaming

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The keys `0..n` in a seeded random order.
pub fn shuffled_keys(n: u32, seed: u64) -> Vec<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut keys: Vec<u32> = (0..n).collect();
    // Fisher-Yates.
    for i in (1..keys.len()).rev() {
        let j = (rng.next_u64() % (i as u64 + 1)) as usize;
        keys.swap(i, j);
    }
    keys
}

/// `n` keys drawn uniformly from `0..distinct`, repeats expected.
pub fn skewed_keys(n: usize, distinct: u32, seed: u64) -> Vec<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| (rng.next_u64() % u64::from(distinct.max(1))) as u32)
        .collect()
}

/// `len` pseudo-random bytes.
pub fn byte_buffer(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut buf = vec![0u8; len];
    rng.fill_bytes(&mut buf);
    buf
}
