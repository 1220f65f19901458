//! Probability distributions over GF(64).
//!
//! A probability distribution is represented as an array [`Pd`] of 64
//! weights, where the weight at index `i` is the probability that the
//! associated symbol is equal to the field element `i`. This module contains
//! the elementary operations with distributions needed by the message passing
//! decoder.
//!
//! Functions returning a distribution always return a normalized one. When a
//! combination of distributions leaves no probability mass (contradictory
//! evidence, or an underflow), the function returns [`Degenerate`] instead, so
//! that the caller can decide how to recover.

use crate::gf64::{permutation, Gf64, M};
use num_traits::Zero;
use thiserror::Error;

pub mod wht;

/// Probability distribution of a GF(64) symbol.
pub type Pd = [f64; M];

/// Degenerate distribution error.
///
/// Returned when a distribution cannot be normalized because all its weights
/// are zero or the total weight is not finite.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Error)]
#[error("probability distribution has no probability mass")]
pub struct Degenerate;

/// Returns the uniform distribution.
pub fn uniform() -> Pd {
    [1.0 / M as f64; M]
}

/// Returns the distribution concentrated on a single field element.
pub fn delta(x: Gf64) -> Pd {
    let mut d = [0.0; M];
    d[usize::from(x)] = 1.0;
    d
}

/// Normalizes a distribution in place so that its weights sum to one.
///
/// # Errors
///
/// Returns [`Degenerate`] if the total weight is zero or not finite. The
/// distribution is left unmodified in that case.
pub fn normalize(d: &mut Pd) -> Result<(), Degenerate> {
    let sum: f64 = d.iter().sum();
    if !(sum > 0.0 && sum.is_finite()) {
        return Err(Degenerate);
    }
    let scale = 1.0 / sum;
    for x in d.iter_mut() {
        *x *= scale;
    }
    Ok(())
}

/// Multiplies two distributions pointwise and normalizes the result.
///
/// This combines independent evidence about the same symbol.
///
/// # Errors
///
/// Returns [`Degenerate`] if the product has no probability mass.
pub fn multiply_normalize(a: &Pd, b: &Pd) -> Result<Pd, Degenerate> {
    let mut c = *a;
    for (x, &y) in c.iter_mut().zip(b.iter()) {
        *x *= y;
    }
    normalize(&mut c)?;
    Ok(c)
}

/// Permutes a distribution by the multiplication by a field element.
///
/// If `d` is the distribution of a symbol `x`, this returns the distribution
/// of `w * x`, that is, `d'[w * i] = d[i]`.
///
/// # Panics
///
/// This function panics if `w` is zero.
pub fn permute(d: &Pd, w: Gf64) -> Pd {
    match w.log() {
        Some(wlog) => permute_log(d, wlog),
        None => panic!("cannot permute by the zero element"),
    }
}

/// Permutes a distribution by the multiplication by `alpha^wlog`.
///
/// This is the same as [`permute`], but the weight is given by its discrete
/// logarithm.
pub fn permute_log(d: &Pd, wlog: u8) -> Pd {
    let p = permutation(wlog);
    let mut out = [0.0; M];
    for (&j, &x) in p.iter().zip(d.iter()) {
        out[usize::from(j)] = x;
    }
    out
}

/// Undoes the permutation [`permute_log`].
///
/// If `d` is the distribution of `alpha^wlog * x`, this returns the
/// distribution of `x`.
pub fn unpermute_log(d: &Pd, wlog: u8) -> Pd {
    let p = permutation(wlog);
    let mut out = [0.0; M];
    for (x, &j) in out.iter_mut().zip(p.iter()) {
        *x = d[usize::from(j)];
    }
    out
}

/// Computes the distribution of the sum of two independent symbols.
///
/// The convolution over GF(64) is computed in the Walsh-Hadamard domain.
/// Negative weights caused by rounding in the transforms are clamped to zero.
///
/// # Errors
///
/// Returns [`Degenerate`] if any of the inputs has no probability mass.
pub fn convolve(a: &Pd, b: &Pd) -> Result<Pd, Degenerate> {
    let mut ta = *a;
    let mut tb = *b;
    wht::fwht(&mut ta);
    wht::fwht(&mut tb);
    for (x, &y) in ta.iter_mut().zip(tb.iter()) {
        *x *= y;
    }
    wht::ifwht(&mut ta);
    clamp_negative(&mut ta);
    normalize(&mut ta)?;
    Ok(ta)
}

pub(crate) fn clamp_negative(d: &mut Pd) {
    for x in d.iter_mut() {
        *x = x.max(0.0);
    }
}

/// Returns the most probable field element.
///
/// Ties are broken in favour of the lowest element.
pub fn argmax(d: &Pd) -> Gf64 {
    let mut best = (Gf64::zero(), d[0]);
    for (x, &p) in Gf64::elements().zip(d.iter()).skip(1) {
        if p > best.1 {
            best = (x, p);
        }
    }
    best.0
}

/// Returns the largest weight of a distribution.
pub fn max(d: &Pd) -> f64 {
    d.iter().copied().fold(0.0, f64::max)
}
