//! The Keccak-256 sponge: absorption, padding, and digest extraction.
//!
//! The state lives as a 200-byte buffer (the view absorption and padding
//! operate on) and is converted to 25 little-endian u64 lanes only around
//! the permutation call. The explicit conversion avoids aliased views of
//! the same memory and is portable.

use crate::bytes::{load_le64_at, store_le64_at, xor_bytes, zeroize_array};
use crate::keccak::permutation::keccak_f;

/// Digest size in bytes.
pub const DIGEST_SIZE: usize = 32;

/// Sponge state size in bytes (25 64-bit lanes).
pub const STATE_SIZE: usize = 200;

/// Rate in bytes: the portion of the state that input is XORed into.
/// The remaining `STATE_SIZE - RATE` bytes are the capacity.
pub const RATE: usize = STATE_SIZE - 2 * DIGEST_SIZE;

/// Domain-separation byte of the original Keccak padding. FIPS-202 SHA3
/// puts `0x06` here, which is why the two functions never agree.
const PAD_DOMAIN: u8 = 0x01;

/// End marker of the multi-rate padding, XORed into the last rate byte.
const PAD_END: u8 = 0x80;

/// Incremental Keccak-256 hasher.
///
/// Input may be split across [`update`](Self::update) calls in any way;
/// the digest depends only on the concatenation. [`finalize`](Self::finalize)
/// consumes the hasher, so absorbing into a finalized state cannot be
/// expressed; use [`reset`](Self::reset) to discard absorbed input and
/// reuse an instance.
///
/// # Example
///
/// ```
/// use keccak_core::keccak::{keccak256, Keccak256};
///
/// let mut hasher = Keccak256::new();
/// hasher.update(b"stream");
/// hasher.update(b"ed");
/// assert_eq!(hasher.finalize(), keccak256(b"streamed"));
/// ```
#[derive(Clone)]
pub struct Keccak256 {
    /// The 1600-bit sponge state, byte view.
    state: [u8; STATE_SIZE],
    /// Next free byte offset within the rate portion. Always `< RATE`.
    cursor: usize,
}

impl Keccak256 {
    /// Create a new hasher with a zeroed state.
    #[inline]
    pub fn new() -> Self {
        Self {
            state: [0u8; STATE_SIZE],
            cursor: 0,
        }
    }

    /// Absorb input into the sponge.
    ///
    /// Accepts any number of calls with any chunking, including empty
    /// slices. Whenever a full rate block has accumulated, the state is
    /// permuted and the cursor returns to the start of the block.
    pub fn update(&mut self, data: &[u8]) {
        let mut input = data;
        while !input.is_empty() {
            let take = (RATE - self.cursor).min(input.len());
            xor_bytes(
                &input[..take],
                &mut self.state[self.cursor..self.cursor + take],
            );
            self.cursor += take;
            input = &input[take..];

            if self.cursor == RATE {
                self.permute();
                self.cursor = 0;
            }
        }
    }

    /// Apply padding, run the final permutation, and return the digest.
    ///
    /// Padding XORs `0x01` at the cursor and `0x80` at the last rate byte;
    /// when the cursor sits exactly at `RATE - 1` both land on the same
    /// byte, which then holds `0x81`.
    pub fn finalize(mut self) -> [u8; DIGEST_SIZE] {
        self.state[self.cursor] ^= PAD_DOMAIN;
        self.state[RATE - 1] ^= PAD_END;
        self.permute();

        let mut digest = [0u8; DIGEST_SIZE];
        digest.copy_from_slice(&self.state[..DIGEST_SIZE]);
        digest
    }

    /// Clear the state and cursor, making the instance equivalent to a
    /// freshly constructed one.
    pub fn reset(&mut self) {
        zeroize_array(&mut self.state);
        self.cursor = 0;
    }

    /// Run Keccak-f\[1600\] over the state, bridging the byte view to the
    /// lane view and back.
    fn permute(&mut self) {
        let mut lanes = [0u64; 25];
        for (i, lane) in lanes.iter_mut().enumerate() {
            *lane = load_le64_at(&self.state, i * 8);
        }
        keccak_f(&mut lanes);
        for (i, lane) in lanes.iter().enumerate() {
            store_le64_at(*lane, &mut self.state, i * 8);
        }
    }
}

impl Default for Keccak256 {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the Keccak-256 digest of `data` in one call.
///
/// Equivalent to constructing a [`Keccak256`], absorbing `data`, and
/// finalizing.
///
/// # Example
///
/// ```
/// use keccak_core::keccak::keccak256;
///
/// let digest = keccak256(b"hello world");
/// assert_eq!(digest.len(), 32);
/// ```
#[inline]
pub fn keccak256(data: &[u8]) -> [u8; DIGEST_SIZE] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize()
}
