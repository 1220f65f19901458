//! Fast Walsh-Hadamard transform.
//!
//! The Walsh-Hadamard transform diagonalizes the convolution over the
//! additive group of GF(64), which is a vector space over GF(2) where the
//! group operation is the XOR of the symbols. The transform of the
//! distribution of `x + y` is the pointwise product of the transforms of the
//! distributions of `x` and `y`.
//!
//! The unnormalized transform `H` computed here satisfies `H H = M I`.

use super::Pd;
use crate::gf64::M;

/// Computes the unnormalized Walsh-Hadamard transform in place.
pub fn fwht(d: &mut Pd) {
    let mut h = 1;
    while h < M {
        for block in d.chunks_exact_mut(2 * h) {
            let (lo, hi) = block.split_at_mut(h);
            for (a, b) in lo.iter_mut().zip(hi.iter_mut()) {
                let (x, y) = (*a, *b);
                *a = x + y;
                *b = x - y;
            }
        }
        h *= 2;
    }
}

/// Computes the inverse Walsh-Hadamard transform in place.
///
/// This is [`fwht`] followed by a scaling by `1/M`.
pub fn ifwht(d: &mut Pd) {
    fwht(d);
    let scale = 1.0 / M as f64;
    for x in d.iter_mut() {
        *x *= scale;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn test_vector() -> Pd {
        let mut d = [0.0; M];
        for (j, x) in d.iter_mut().enumerate() {
            *x = ((j * 37 + 11) % 64) as f64 / 17.0 - 1.5;
        }
        d
    }

    #[test]
    fn involution() {
        let d = test_vector();
        let mut t = d;
        fwht(&mut t);
        fwht(&mut t);
        for (&x, &y) in d.iter().zip(t.iter()) {
            assert!((y - M as f64 * x).abs() < 1e-9);
        }
        let mut t = d;
        fwht(&mut t);
        ifwht(&mut t);
        for (&x, &y) in d.iter().zip(t.iter()) {
            assert!((x - y).abs() < 1e-12);
        }
    }

    #[test]
    fn delta_at_zero() {
        let mut d = [0.0; M];
        d[0] = 1.0;
        fwht(&mut d);
        assert!(d.iter().all(|&x| x == 1.0));
    }

    #[test]
    fn hadamard_entries() {
        // H[i][j] = (-1)^popcount(i & j)
        for j in [1, 5, 42, 63] {
            let mut d = [0.0; M];
            d[j] = 1.0;
            fwht(&mut d);
            for (i, &x) in d.iter().enumerate() {
                let expected = if (i & j).count_ones() % 2 == 0 {
                    1.0
                } else {
                    -1.0
                };
                assert_eq!(x, expected);
            }
        }
    }

    #[test]
    fn probability_mass() {
        // The first coefficient of the transform is the total mass
        let mut d = test_vector();
        let sum: f64 = d.iter().sum();
        fwht(&mut d);
        assert!((d[0] - sum).abs() < 1e-12);
    }
}
