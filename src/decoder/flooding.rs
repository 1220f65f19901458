//! Q-ary RA decoder with flooding schedule.
//!
//! This module implements a belief propagation decoder for Q-ary RA codes with
//! a flooding message passing schedule: in each iteration all the parity
//! checks are updated, and then all the variables.

use super::{DecoderOutput, Extrinsic, DEFAULT_CONVERGENCE_TOLERANCE};
use crate::{
    code::QraCode,
    gf64::M,
    pd::{self, wht, Degenerate, Pd},
};
use ndarray::{Array2, ArrayBase, Data, Ix2};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Q-ary RA belief propagation flooding decoder.
///
/// The decoder keeps one message per edge and direction of the factor graph
/// of the code. The messages are reused by successive calls to
/// [`Decoder::extrinsic`] and [`Decoder::decode`], so a decoder can decode
/// many frames without allocating.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoder {
    code: Arc<QraCode>,
    convergence_tolerance: f64,
    // variable to factor messages, indexed by edge
    var_messages: Box<[Pd]>,
    // factor to variable messages, indexed by edge
    check_messages: Box<[Pd]>,
    transforms: Box<[Pd]>,
    degenerate_updates: usize,
}

impl Decoder {
    /// Creates a new flooding decoder for a code.
    pub fn new(code: Arc<QraCode>) -> Decoder {
        let var_messages = vec![pd::uniform(); code.num_edges()].into_boxed_slice();
        let check_messages = var_messages.clone();
        let transforms = vec![pd::uniform(); code.max_check_degree()];
        Decoder {
            code,
            convergence_tolerance: DEFAULT_CONVERGENCE_TOLERANCE,
            var_messages,
            check_messages,
            transforms: transforms.into_boxed_slice(),
            degenerate_updates: 0,
        }
    }

    /// Sets the convergence tolerance.
    ///
    /// See [`DEFAULT_CONVERGENCE_TOLERANCE`].
    pub fn with_convergence_tolerance(mut self, tolerance: f64) -> Decoder {
        self.convergence_tolerance = tolerance;
        self
    }

    /// Returns the code used by the decoder.
    pub fn code(&self) -> &QraCode {
        &self.code
    }

    /// Computes the extrinsic distributions of the codeword symbols.
    ///
    /// The parameters are the intrinsic distributions of the codeword symbols
    /// (one row per symbol, as returned by
    /// [`intrinsic_probabilities`](crate::metric::intrinsic_probabilities))
    /// and the maximum number of iterations to perform. If the decoder
    /// converges, the function returns an `Ok` containing the extrinsic
    /// distributions and the number of iterations used. Otherwise the function
    /// returns an `Err` containing the extrinsic distributions after the last
    /// iteration, and the number of iterations is equal to `max_iterations`.
    ///
    /// # Panics
    ///
    /// This function panics if `intrinsic` does not have one row per codeword
    /// symbol and 64 columns.
    pub fn extrinsic<S>(
        &mut self,
        intrinsic: &ArrayBase<S, Ix2>,
        max_iterations: usize,
    ) -> Result<Extrinsic, Extrinsic>
    where
        S: Data<Elem = f64>,
    {
        assert_eq!(intrinsic.dim(), (self.code.n(), M));
        self.initialize(intrinsic);
        for iteration in 1..=max_iterations {
            self.process_check_nodes();
            self.process_variable_nodes();
            let confidence = self.confidence();
            trace!(iteration, confidence, "decoder iteration");
            if confidence > self.code.num_variables() as f64 - self.convergence_tolerance {
                debug!(
                    iterations = iteration,
                    degenerate_updates = self.degenerate_updates,
                    "decoder converged"
                );
                return Ok(self.output(iteration));
            }
        }
        debug!(
            iterations = max_iterations,
            degenerate_updates = self.degenerate_updates,
            "decoder did not converge"
        );
        Err(self.output(max_iterations))
    }

    /// Decodes a message.
    ///
    /// This runs [`Decoder::extrinsic`] and then decides the information
    /// symbols with [`map_decode`](super::map_decode). The `Ok` and `Err`
    /// variants have the same meaning as in [`Decoder::extrinsic`]. The message
    /// in an `Err` is the best guess of the decoder and should not be trusted.
    ///
    /// # Panics
    ///
    /// This function panics if `intrinsic` does not have one row per codeword
    /// symbol and 64 columns.
    pub fn decode<S>(
        &mut self,
        intrinsic: &ArrayBase<S, Ix2>,
        max_iterations: usize,
    ) -> Result<DecoderOutput, DecoderOutput>
    where
        S: Data<Elem = f64>,
    {
        let k = self.code.k();
        let decide = |extrinsic: Extrinsic| DecoderOutput {
            message: super::map_decode(&extrinsic.probabilities, intrinsic, k),
            iterations: extrinsic.iterations,
            degenerate_updates: extrinsic.degenerate_updates,
        };
        self.extrinsic(intrinsic, max_iterations)
            .map(decide)
            .map_err(decide)
    }

    fn initialize<S>(&mut self, intrinsic: &ArrayBase<S, Ix2>)
    where
        S: Data<Elem = f64>,
    {
        self.degenerate_updates = 0;
        for m in self.check_messages.iter_mut() {
            *m = pd::uniform();
        }
        for (v, row) in intrinsic.rows().into_iter().enumerate() {
            let mut d = super::row_pd(row);
            if pd::normalize(&mut d).is_err() {
                d = pd::uniform();
                self.degenerate_updates += 1;
            }
            // the intrinsic factor sends the channel distribution
            let intrinsic_edge = self.code.intrinsic_edge(v);
            self.check_messages[intrinsic_edge] = d;
            self.var_messages[intrinsic_edge] = pd::uniform();
            // first variable messages use only the channel distribution
            for &e in &self.code.var_edges(v)[1..] {
                self.var_messages[e] = d;
            }
        }
    }

    fn process_check_nodes(&mut self) {
        let Decoder {
            code,
            var_messages,
            check_messages,
            transforms,
            degenerate_updates,
            ..
        } = self;
        for c in code.parity_checks() {
            let edges = code.check_edges(c);
            let transforms = &mut transforms[..edges.len()];
            // distributions of the weighted symbols, in the transform domain
            for (t, &e) in transforms.iter_mut().zip(edges.iter()) {
                *t = pd::permute_log(&var_messages[e], code.edge_weight(e));
                wht::fwht(t);
            }
            for (j, &e) in edges.iter().enumerate() {
                let mut message = [1.0; M];
                for (_, t) in transforms.iter().enumerate().filter(|&(l, _)| l != j) {
                    for (x, &y) in message.iter_mut().zip(t.iter()) {
                        *x *= y;
                    }
                }
                wht::ifwht(&mut message);
                pd::clamp_negative(&mut message);
                let mut message = pd::unpermute_log(&message, code.edge_weight(e));
                if pd::normalize(&mut message).is_err() {
                    message = pd::uniform();
                    *degenerate_updates += 1;
                }
                check_messages[e] = message;
            }
        }
    }

    fn process_variable_nodes(&mut self) {
        let Decoder {
            code,
            var_messages,
            check_messages,
            degenerate_updates,
            ..
        } = self;
        let check_messages: &[Pd] = check_messages;
        for v in 0..code.num_variables() {
            let edges = code.var_edges(v);
            for (j, &e) in edges.iter().enumerate() {
                let others = edges
                    .iter()
                    .enumerate()
                    .filter(|&(l, _)| l != j)
                    .map(|(_, &f)| &check_messages[f]);
                var_messages[e] = product(others).unwrap_or_else(|Degenerate| {
                    *degenerate_updates += 1;
                    pd::uniform()
                });
            }
        }
    }

    // Sum over all the variables of the probability of the most likely value
    // in their extrinsic distribution.
    fn confidence(&self) -> f64 {
        (0..self.code.num_variables())
            .map(|v| pd::max(&self.var_messages[self.code.intrinsic_edge(v)]))
            .sum()
    }

    fn output(&self, iterations: usize) -> Extrinsic {
        let probabilities = Array2::from_shape_fn((self.code.num_variables(), M), |(v, k)| {
            self.var_messages[self.code.intrinsic_edge(v)][k]
        });
        if self.degenerate_updates > 0 {
            warn!(
                degenerate_updates = self.degenerate_updates,
                "degenerate messages replaced by uniform distributions"
            );
        }
        Extrinsic {
            probabilities,
            iterations,
            degenerate_updates: self.degenerate_updates,
        }
    }
}

// Normalized product of distributions. Normalizing after each factor keeps
// the weights away from underflow for high degree variables.
fn product<'a>(distributions: impl Iterator<Item = &'a Pd>) -> Result<Pd, Degenerate> {
    distributions.fold(Ok(pd::uniform()), |acc, d| pd::multiply_normalize(&acc?, d))
}
