//! The Keccak-f\[1600\] permutation.
//!
//! 24 rounds of the five step mappings (θ, ρ, π, χ, ι) over a 5×5 matrix
//! of 64-bit lanes, lane (x, y) at index `x + 5 * y`. The tables below are
//! fixed constants of the algorithm (Keccak reference 3.0, §1.2); any
//! deviation produces a function that is not Keccak and interoperates with
//! nothing.

use crate::bytes::rotl64;

/// Number of rounds in Keccak-f\[1600\].
pub const ROUNDS: usize = 24;

/// Round constants XORed into lane 0 by the ι step, one per round.
const RC: [u64; ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Rotation amounts for the combined ρ/π pass, matched to [`PI`].
const RHO: [u32; ROUNDS] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// Lane index sequence for the combined ρ/π pass; the walk starts at lane 1.
const PI: [usize; ROUNDS] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// Apply the full 24-round Keccak-f\[1600\] permutation to `state` in place.
///
/// Pure and total: no allocation, no failure modes, deterministic. Called
/// once per absorbed rate block and once at finalize, so it dominates
/// hashing throughput.
pub fn keccak_f(state: &mut [u64; 25]) {
    let mut bc = [0u64; 5];

    for round in 0..ROUNDS {
        // θ: fold each column parity into the two neighboring columns
        for i in 0..5 {
            bc[i] = state[i] ^ state[i + 5] ^ state[i + 10] ^ state[i + 15] ^ state[i + 20];
        }
        for i in 0..5 {
            let t = bc[(i + 4) % 5] ^ rotl64(bc[(i + 1) % 5], 1);
            for j in (0..25).step_by(5) {
                state[j + i] ^= t;
            }
        }

        // ρ and π: carry one lane through the fixed index cycle, rotating
        // each displaced lane by its position's amount
        let mut t = state[1];
        for i in 0..ROUNDS {
            let j = PI[i];
            let displaced = state[j];
            state[j] = rotl64(t, RHO[i]);
            t = displaced;
        }

        // χ: nonlinear mix within each row of five lanes
        for j in (0..25).step_by(5) {
            bc.copy_from_slice(&state[j..j + 5]);
            for i in 0..5 {
                state[j + i] ^= !bc[(i + 1) % 5] & bc[(i + 2) % 5];
            }
        }

        // ι
        state[0] ^= RC[round];
    }
}
