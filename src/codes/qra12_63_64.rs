//! Irregular (12, 63) Q-ary RA code over GF(64).
//!
//! This code maps 12 information symbols of 6 bits into a codeword of 63
//! symbols, which matches one symbol per tone of a 64-FSK transmission. The
//! information symbols are repeated with factors 3, 3, 3, 3, 4, 4, 4, 5, 5, 5,
//! 6 and 7, interleaved and accumulated with nonzero weights to produce 51
//! check symbols.
//!
//! The interleaver keeps the repetitions of each information symbol at least
//! three accumulator steps apart, so the factor graph has no cycles of length
//! four or six through the accumulator chain.

use crate::code::{Error, QraCode};

/// Number of information symbols.
pub const K: usize = 12;
/// Number of codeword symbols.
pub const N: usize = 63;
/// Number of check symbols.
pub const NC: usize = N - K;

/// Repetition factor of each information symbol.
pub const REPETITIONS: [usize; K] = [3, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 7];

/// Information symbol feeding each accumulator step.
pub const ACC_INPUT_IDX: [usize; NC + 1] = [
    10, 9, 11, 7, 5, 11, 1, 10, 0, 1, 6, 3, 11, 7, 10, 2, 11, 10, 7, 8, 11, 4, 8, 6, 11, 10, 3,
    6, 7, 4, 5, 9, 3, 0, 9, 8, 4, 1, 2, 0, 8, 6, 5, 4, 9, 8, 2, 7, 10, 11, 5, 9,
];

/// Weight logarithm of each accumulator step.
pub const ACC_INPUT_WLOG: [u8; NC + 1] = [
    20, 60, 9, 25, 41, 3, 4, 52, 34, 6, 23, 37, 3, 58, 32, 13, 2, 5, 27, 26, 4, 15, 5, 35, 27, 3,
    52, 36, 7, 60, 14, 40, 40, 37, 60, 3, 36, 37, 25, 3, 62, 14, 2, 35, 54, 8, 18, 26, 9, 34, 7,
    36,
];

/// Eb/N0 (in dB) at which the channel metric is optimized for this code.
pub const METRIC_EBN0_DB: f64 = 2.8;

/// Builds the description of the code.
///
/// # Errors
///
/// This function only fails if the code tables above are inconsistent.
pub fn code() -> Result<QraCode, Error> {
    QraCode::from_accumulator(K, N, &ACC_INPUT_IDX, &ACC_INPUT_WLOG)
}
