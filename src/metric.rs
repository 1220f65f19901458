//! Channel likelihood estimator.
//!
//! This module computes the intrinsic probability distributions of the
//! codeword symbols from the output of a noncoherent 64-FSK detector. The
//! detector gives, for each codeword position, the squared amplitude (energy)
//! of each of the 64 tones. Since the phase of the received signal is unknown,
//! the likelihood of the tone `i` being the transmitted one is proportional to
//! `I0(c * sqrt(r_i))`, where `I0` is the modified Bessel function of the first
//! kind of order zero, `r_i` is the energy of the tone and `c` depends on the
//! signal to noise ratio.
//!
//! The noise level is estimated from the average energy of all the tones, so
//! the energies can be given in any scale.

use crate::{code::QraCode, gf64::BITS, gf64::M};
use ndarray::{Array2, ArrayBase, Data, Ix2};
use num_complex::Complex;

/// Converts an Eb/N0 in dB into the Es/N0 (in linear units) of a code.
pub fn es_no_from_eb_no_db(eb_no_db: f64, code: &QraCode) -> f64 {
    BITS as f64 * code.rate() * 10.0_f64.powf(0.1 * eb_no_db)
}

/// Computes the squared amplitudes of complex tone correlator outputs.
pub fn squared_amplitudes<S>(samples: &ArrayBase<S, Ix2>) -> Array2<f64>
where
    S: Data<Elem = Complex<f64>>,
{
    samples.mapv(|z| z.norm_sqr())
}

/// Estimates the noise standard deviation per real dimension.
///
/// The estimate assumes that in each row of `energies` exactly one tone
/// carries a signal with an Es/N0 of `es_no`, and all the tones carry noise.
/// The returned value is NaN if `energies` is empty.
pub fn noise_sigma<S>(energies: &ArrayBase<S, Ix2>, es_no: f64) -> f64
where
    S: Data<Elem = f64>,
{
    let mean = energies.sum() / energies.len() as f64;
    (mean / (1.0 + es_no / M as f64) / 2.0).sqrt()
}

fn poly(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Computes the natural logarithm of the modified Bessel function `I0(x)`.
///
/// The polynomial approximations 9.8.1 and 9.8.2 from Abramowitz and Stegun
/// are used. Their relative error is below 2e-7. For large arguments the
/// exponential factor is kept in the log domain, so the function does not
/// overflow. The result is only meaningful for `x >= 0`.
pub fn ln_bessel_i0(x: f64) -> f64 {
    const SMALL: [f64; 7] = [
        1.0, 3.5156229, 3.0899424, 1.2067492, 0.2659732, 0.0360768, 0.0045813,
    ];
    const LARGE: [f64; 9] = [
        0.39894228,
        0.01328592,
        0.00225319,
        -0.00157565,
        0.00916281,
        -0.02057706,
        0.02635537,
        -0.01647633,
        0.00392377,
    ];
    const THRESHOLD: f64 = 3.75;
    if x < THRESHOLD {
        let t = x / THRESHOLD;
        poly(&SMALL, t * t).ln()
    } else {
        x - 0.5 * x.ln() + poly(&LARGE, THRESHOLD / x).ln()
    }
}

/// Computes the intrinsic probability distributions of the codeword symbols.
///
/// The `energies` matrix has one row per codeword symbol and one column per
/// tone (field element). The metric parameter `es_no` is the Es/N0 (in linear
/// units) for which the metric is optimized. It does not need to match the
/// actual Es/N0 of the channel.
///
/// Each row of the returned matrix is a probability distribution. If the noise
/// level cannot be estimated (all energies are zero, or some are not finite),
/// all the distributions are uniform.
///
/// # Panics
///
/// This function panics if `energies` does not have 64 columns.
pub fn intrinsic_probabilities<S>(energies: &ArrayBase<S, Ix2>, es_no: f64) -> Array2<f64>
where
    S: Data<Elem = f64>,
{
    assert_eq!(energies.ncols(), M);
    let sigma = noise_sigma(energies, es_no);
    let c = (2.0 * es_no).sqrt() / sigma;
    if !(sigma > 0.0 && sigma.is_finite() && c.is_finite()) {
        return Array2::from_elem(energies.raw_dim(), 1.0 / M as f64);
    }
    let mut probabilities = energies.mapv(|r| ln_bessel_i0(c * r.max(0.0).sqrt()));
    for mut row in probabilities.rows_mut() {
        // shift by the maximum so that exp() does not overflow
        let max = row.fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        row.mapv_inplace(|x| (x - max).exp());
        let sum = row.sum();
        row /= sum;
    }
    probabilities
}
