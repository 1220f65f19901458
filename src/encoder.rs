//! Q-ary RA systematic encoder.
//!
//! This module implements the encoder for Q-ary Repeat-Accumulate codes. The
//! first k symbols of the codeword are the information symbols. The remaining
//! n - k check symbols are the successive states of a weighted accumulator
//! over GF(64) whose inputs are the (repeated and interleaved) information
//! symbols, as given by the accumulator tables of the [`QraCode`].

use crate::{code::QraCode, gf64::Gf64};
use ndarray::{Array1, ArrayBase, Data, Ix1};
use num_traits::Zero;
use std::sync::Arc;

/// Q-ary RA systematic encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoder {
    code: Arc<QraCode>,
}

impl Encoder {
    /// Creates the systematic encoder for a code.
    pub fn new(code: Arc<QraCode>) -> Encoder {
        Encoder { code }
    }

    /// Returns the code used by the encoder.
    pub fn code(&self) -> &QraCode {
        &self.code
    }

    /// Encodes a message into a codeword.
    ///
    /// # Panics
    ///
    /// This function panics if the length of `message` is not the number of
    /// information symbols of the code.
    pub fn encode<S>(&self, message: &ArrayBase<S, Ix1>) -> Array1<Gf64>
    where
        S: Data<Elem = Gf64>,
    {
        assert_eq!(message.len(), self.code.k());
        let mut inputs = self
            .code
            .acc_input_idx()
            .iter()
            .zip(self.code.acc_input_wlog().iter())
            .map(|(&j, &wlog)| message[j].mul_log(wlog));
        // The first input only seeds the accumulator
        let mut acc = inputs.next().unwrap_or_else(Gf64::zero);
        let checks = inputs.map(|x| {
            acc += x;
            acc
        });
        message.iter().copied().chain(checks).collect()
    }
}
