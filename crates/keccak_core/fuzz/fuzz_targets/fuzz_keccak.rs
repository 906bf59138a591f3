//! Fuzz target for the Keccak-256 sponge.
//!
//! Tests that:
//! 1. Hashing arbitrary inputs doesn't panic
//! 2. Streaming == one-shot hashing for any split
//! 3. Reset discards all prior absorption

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use keccak_core::keccak::{keccak256, Keccak256};

#[derive(Debug, Arbitrary)]
struct KeccakInput {
    data: Vec<u8>,
    split_point: usize,
    garbage: Vec<u8>,
}

fuzz_target!(|input: KeccakInput| {
    // Limit sizes to avoid OOM
    if input.data.len() > 4096 || input.garbage.len() > 4096 {
        return;
    }

    // Property 1: one-shot == whole-slice streaming
    let oneshot = keccak256(&input.data);

    let mut hasher = Keccak256::new();
    hasher.update(&input.data);
    let streaming = hasher.finalize();

    assert_eq!(oneshot, streaming, "one-shot != streaming");

    // Property 2: split streaming == one-shot
    if !input.data.is_empty() {
        let split = input.split_point % input.data.len();
        let mut hasher = Keccak256::new();
        hasher.update(&input.data[..split]);
        hasher.update(&input.data[split..]);
        let split_result = hasher.finalize();

        assert_eq!(oneshot, split_result, "split streaming != one-shot");
    }

    // Property 3: reset after arbitrary absorption behaves like new
    let mut hasher = Keccak256::new();
    hasher.update(&input.garbage);
    hasher.reset();
    hasher.update(&input.data);
    let after_reset = hasher.finalize();

    assert_eq!(oneshot, after_reset, "reset did not clear prior state");
});
