//! Q-ary RA belief propagation decoders.
//!
//! This module provides a message passing decoder for Q-ary RA codes over
//! GF(64) and the symbol decision stage that follows it. The decoder works
//! with probability distributions over the field (see [`crate::pd`]) and
//! computes the parity check updates in the Walsh-Hadamard domain.
//!
//! Decoding is split in two steps. [`Decoder::extrinsic`] runs belief
//! propagation and returns the extrinsic distributions of the symbols, and
//! [`map_decode`] combines them with the intrinsic distributions to decide the
//! information symbols. [`Decoder::decode`] performs both steps.

use crate::{
    gf64::{Gf64, M},
    pd::{self, Pd},
};
use ndarray::{Array1, Array2, ArrayBase, ArrayView1, Data, Ix2};

pub mod batch;
pub mod flooding;

pub use flooding::Decoder;

/// Default maximum number of decoder iterations.
pub const DEFAULT_MAX_ITERATIONS: usize = 50;

/// Default convergence tolerance.
///
/// Decoding stops when the sum over all the symbols of the probability of
/// their most likely value exceeds the number of symbols minus this tolerance.
pub const DEFAULT_CONVERGENCE_TOLERANCE: f64 = 0.01;

/// Extrinsic information computed by the decoder.
#[derive(Debug, Clone, PartialEq)]
pub struct Extrinsic {
    /// Extrinsic probability distributions.
    ///
    /// Contains one row per codeword symbol. Each row is the distribution of
    /// the symbol given by all the parity checks of the code, excluding the
    /// channel observation of the symbol itself.
    pub probabilities: Array2<f64>,
    /// Number of iterations.
    ///
    /// Number of iterations used in decoding.
    pub iterations: usize,
    /// Number of degenerate message updates.
    ///
    /// Counts the messages that could not be normalized and were replaced by
    /// the uniform distribution.
    pub degenerate_updates: usize,
}

/// Q-ary RA decoder output.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct DecoderOutput {
    /// Decoded message.
    ///
    /// Contains the decided information symbols.
    pub message: Array1<Gf64>,
    /// Number of iterations.
    ///
    /// Number of iterations used in decoding.
    pub iterations: usize,
    /// Number of degenerate message updates.
    pub degenerate_updates: usize,
}

pub(crate) fn row_pd(row: ArrayView1<f64>) -> Pd {
    let mut d = [0.0; M];
    for (x, &y) in d.iter_mut().zip(row.iter()) {
        *x = y;
    }
    d
}

/// Decides the information symbols.
///
/// For each of the first `k` symbols, this returns the most likely value
/// according to the product of the extrinsic and intrinsic distributions. If
/// that product has no probability mass, the extrinsic distribution is used
/// alone.
///
/// # Panics
///
/// This function panics if `extrinsic` and `intrinsic` have different shapes,
/// do not have 64 columns, or have less than `k` rows.
pub fn map_decode<S, T>(
    extrinsic: &ArrayBase<S, Ix2>,
    intrinsic: &ArrayBase<T, Ix2>,
    k: usize,
) -> Array1<Gf64>
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
{
    assert_eq!(extrinsic.dim(), intrinsic.dim());
    assert_eq!(extrinsic.ncols(), M);
    assert!(extrinsic.nrows() >= k);
    extrinsic
        .rows()
        .into_iter()
        .zip(intrinsic.rows())
        .take(k)
        .map(|(ext, int)| {
            let ext = row_pd(ext);
            match pd::multiply_normalize(&ext, &row_pd(int)) {
                Ok(posterior) => pd::argmax(&posterior),
                Err(pd::Degenerate) => pd::argmax(&ext),
            }
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use num_traits::Zero;

    fn delta_rows(symbols: &[u8]) -> Array2<f64> {
        Array2::from_shape_fn((symbols.len(), M), |(j, k)| {
            if usize::from(symbols[j]) == k {
                1.0
            } else {
                0.0
            }
        })
    }

    #[test]
    fn map_decision() {
        let extrinsic = delta_rows(&[3, 4, 5]);
        let intrinsic = Array2::from_elem((3, M), 1.0 / M as f64);
        let decided = map_decode(&extrinsic, &intrinsic, 2);
        assert_eq!(decided.len(), 2);
        assert_eq!(u8::from(decided[0]), 3);
        assert_eq!(u8::from(decided[1]), 4);
    }

    #[test]
    fn map_combines_evidence() {
        // the extrinsic is undecided between 10 and 20; the channel prefers 20
        let mut extrinsic = Array2::zeros((1, M));
        extrinsic[[0, 10]] = 0.5;
        extrinsic[[0, 20]] = 0.5;
        let mut intrinsic = Array2::from_elem((1, M), 0.01);
        intrinsic[[0, 20]] = 0.1;
        assert_eq!(u8::from(map_decode(&extrinsic, &intrinsic, 1)[0]), 20);
    }

    #[test]
    fn map_degenerate_product() {
        let extrinsic = delta_rows(&[7]);
        let intrinsic = delta_rows(&[8]);
        assert_eq!(u8::from(map_decode(&extrinsic, &intrinsic, 1)[0]), 7);
        // all zeros resolves to the lowest element
        let zeros = Array2::zeros((1, M));
        assert!(map_decode(&zeros, &zeros, 1)[0].is_zero());
    }
}
