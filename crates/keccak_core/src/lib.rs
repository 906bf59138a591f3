//! # keccak_core
//!
//! Keccak-256 as specified in the original Keccak SHA-3 submission: the
//! sponge construction over the Keccak-f[1600] permutation with `0x01`
//! domain-separation padding. This is the hash function used by Ethereum.
//!
//! It is deliberately NOT FIPS-202 SHA3-256, which pads with `0x06`;
//! the two produce unrelated digests for every input and must never be
//! treated as interchangeable.
//!
//! ## Parameters
//!
//! | Parameter | Value |
//! |-----------|-------|
//! | State | 1600 bits (200 bytes, 25 little-endian u64 lanes) |
//! | Rate | 1088 bits (136 bytes) |
//! | Capacity | 512 bits (64 bytes) |
//! | Digest | 256 bits (32 bytes) |
//! | Rounds | 24 |
//! | Padding | `0x01` domain bit + `0x80` multi-rate end marker |
//!
//! ## Usage
//!
//! One-shot:
//!
//! ```
//! use keccak_core::keccak::keccak256;
//!
//! let digest = keccak256(b"hello world");
//! assert_eq!(digest.len(), 32);
//! ```
//!
//! Incremental, with arbitrary chunking:
//!
//! ```
//! use keccak_core::keccak::{keccak256, Keccak256};
//!
//! let mut hasher = Keccak256::new();
//! hasher.update(b"hello ");
//! hasher.update(b"world");
//! assert_eq!(hasher.finalize(), keccak256(b"hello world"));
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::all)]

pub use zeroize;

/// Byte manipulation utilities (LE lane load/store, rotation, XOR)
pub mod bytes;

/// Keccak-f\[1600\] permutation and the Keccak-256 sponge
pub mod keccak;

/// Streaming interfaces for hashing readers and large inputs
pub mod streaming;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::keccak::{keccak256, Keccak256, DIGEST_SIZE};
    pub use crate::streaming::{StreamingConfig, StreamingError, StreamingHasher};
}
