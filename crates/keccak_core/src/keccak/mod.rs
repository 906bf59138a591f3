//! Keccak-256 hashing (original Keccak, `0x01` padding — Ethereum-compatible).
//!
//! Two layers, the sponge depending on the permutation and nothing else:
//!
//! - [`permutation`]: Keccak-f\[1600\] over 25 64-bit lanes, in place.
//! - [`sponge`]: the sponge construction — rate-block absorption, padding,
//!   and digest extraction — plus the one-shot [`keccak256`] wrapper.
//!
//! This is NOT SHA3-256: FIPS 202 pads with `0x06` and produces a
//! different digest for every input.

pub mod permutation;
pub mod sponge;

// Re-export the main entry points at module level for convenience
pub use sponge::{keccak256, Keccak256, DIGEST_SIZE, RATE, STATE_SIZE};

/// Rate for Keccak-256 in bytes (1088 bits / 8).
pub const KECCAK256_RATE: usize = RATE;
