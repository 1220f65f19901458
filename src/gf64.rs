//! Finite field GF(64) arithmetic.
//!
//! This module contains the struct [Gf64], which implements the finite field
//! arithmetic in GF(2^6), together with the discrete log and exponential
//! tables it is built on and the symbol permutation tables used by the
//! message passing decoder.
//!
//! The field is constructed as the polynomial ring GF(2)\[x\] modulo the
//! primitive polynomial x^6 + x + 1. The element `alpha = x` (the integer 2)
//! is a generator of the multiplicative group, so that every nonzero element
//! can be written as `alpha^j` with `0 <= j < 63`. Addition is the XOR of the
//! integer representations. Multiplication is performed as
//! `exp[(log[a] + log[b]) mod 63]`, where zero is handled apart because it
//! has no discrete logarithm.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};
use ndarray::ScalarOperand;
use num_traits::{One, Zero};
use thiserror::Error;

/// Number of bits per symbol.
pub const BITS: usize = 6;
/// Field cardinality.
pub const M: usize = 1 << BITS;
/// Order of the multiplicative group of the field.
pub const ORDER: usize = M - 1;

// x^6 + x + 1
const PRIMITIVE_POLY: u8 = 0x43;

const fn exp_table() -> [u8; ORDER] {
    let mut exp = [0; ORDER];
    let mut x: u8 = 1;
    let mut j = 0;
    while j < ORDER {
        exp[j] = x;
        x <<= 1;
        if x & (M as u8) != 0 {
            x ^= PRIMITIVE_POLY;
        }
        j += 1;
    }
    exp
}

const fn log_table(exp: &[u8; ORDER]) -> [u8; M] {
    // log[0] is a placeholder. It is never read.
    let mut log = [0; M];
    let mut j = 0;
    while j < ORDER {
        log[exp[j] as usize] = j as u8;
        j += 1;
    }
    log
}

const fn permutation_table(exp: &[u8; ORDER], log: &[u8; M]) -> [[u8; M]; ORDER] {
    let mut table = [[0; M]; ORDER];
    let mut w = 0;
    while w < ORDER {
        let mut i = 1;
        while i < M {
            table[w][i] = exp[(log[i] as usize + w) % ORDER];
            i += 1;
        }
        w += 1;
    }
    table
}

/// Exponential table: `EXP[j] = alpha^j`.
pub const EXP: [u8; ORDER] = exp_table();
/// Discrete logarithm table: `LOG[EXP[j]] = j`.
///
/// The entry for zero is meaningless and must not be used.
pub const LOG: [u8; M] = log_table(&EXP);
static PERMUTATIONS: [[u8; M]; ORDER] = permutation_table(&EXP, &LOG);

/// Returns the symbol permutation induced by the multiplication by `alpha^wlog`.
///
/// Entry `i` of the returned table is `i * alpha^wlog`. Zero is always mapped
/// to zero.
///
/// # Panics
///
/// This function panics if `wlog` is not smaller than 63.
pub fn permutation(wlog: u8) -> &'static [u8; M] {
    &PERMUTATIONS[usize::from(wlog)]
}

/// GF(64) error.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// The integer does not represent an element of the field.
    #[error("value {0} is not an element of GF(64)")]
    OutOfRange(u8),
}

/// Finite field GF(64) element.
///
/// This struct represents an element of the finite field GF(64).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Gf64(u8);

impl Gf64 {
    /// Returns the integer in `[0, 64)` that represents the element.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns `alpha^j`.
    pub fn exp(j: usize) -> Gf64 {
        Gf64(EXP[j % ORDER])
    }

    /// Returns the discrete logarithm of the element, or `None` for zero.
    pub fn log(self) -> Option<u8> {
        if self.is_zero() {
            None
        } else {
            Some(LOG[usize::from(self.0)])
        }
    }

    /// Multiplies the element by `alpha^wlog`.
    pub fn mul_log(self, wlog: u8) -> Gf64 {
        match self.log() {
            Some(log) => Gf64::exp(usize::from(log) + usize::from(wlog)),
            None => Gf64::zero(),
        }
    }

    /// Returns the multiplicative inverse of the element.
    ///
    /// # Panics
    ///
    /// This function panics if the element is zero.
    pub fn inv(self) -> Gf64 {
        match self.log() {
            Some(log) => Gf64::exp(ORDER - usize::from(log)),
            None => panic!("zero has no inverse"),
        }
    }

    /// Returns an iterator over all the field elements, in increasing order.
    pub fn elements() -> impl Iterator<Item = Gf64> {
        (0..M as u8).map(Gf64)
    }
}

impl TryFrom<u8> for Gf64 {
    type Error = Error;

    fn try_from(value: u8) -> Result<Gf64, Error> {
        if usize::from(value) < M {
            Ok(Gf64(value))
        } else {
            Err(Error::OutOfRange(value))
        }
    }
}

impl From<Gf64> for u8 {
    fn from(value: Gf64) -> u8 {
        value.0
    }
}

impl From<Gf64> for usize {
    fn from(value: Gf64) -> usize {
        usize::from(value.0)
    }
}

impl std::fmt::Display for Gf64 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Zero for Gf64 {
    fn zero() -> Gf64 {
        Gf64(0)
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    fn set_zero(&mut self) {
        *self = Self::zero()
    }
}

impl One for Gf64 {
    fn one() -> Gf64 {
        Gf64(1)
    }

    fn set_one(&mut self) {
        *self = Self::one()
    }

    fn is_one(&self) -> bool {
        *self == Self::one()
    }
}

impl Add for Gf64 {
    type Output = Gf64;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn add(self, rhs: Gf64) -> Gf64 {
        Gf64(self.0 ^ rhs.0)
    }
}

impl Sub for Gf64 {
    type Output = Gf64;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn sub(self, rhs: Gf64) -> Gf64 {
        self + rhs
    }
}

impl Mul for Gf64 {
    type Output = Gf64;

    fn mul(self, rhs: Gf64) -> Gf64 {
        match rhs.log() {
            Some(log) => self.mul_log(log),
            None => Gf64::zero(),
        }
    }
}

impl Div for Gf64 {
    type Output = Gf64;

    fn div(self, rhs: Gf64) -> Gf64 {
        if rhs.is_zero() {
            panic!("division by zero");
        }
        self * rhs.inv()
    }
}

macro_rules! impl_ops {
    ($op:ident, $opmethod:ident, $opassign:ident, $opassign_method:ident) => {
        impl $op<&Gf64> for Gf64 {
            type Output = Gf64;
            fn $opmethod(self, rhs: &Gf64) -> Gf64 {
                self.$opmethod(*rhs)
            }
        }

        impl $opassign for Gf64 {
            fn $opassign_method(&mut self, rhs: Gf64) {
                *self = self.$opmethod(rhs);
            }
        }

        impl $opassign<&Gf64> for Gf64 {
            fn $opassign_method(&mut self, rhs: &Gf64) {
                *self = self.$opmethod(*rhs);
            }
        }
    };
}

impl_ops!(Add, add, AddAssign, add_assign);
impl_ops!(Sub, sub, SubAssign, sub_assign);
impl_ops!(Mul, mul, MulAssign, mul_assign);
impl_ops!(Div, div, DivAssign, div_assign);

impl ScalarOperand for Gf64 {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tables() {
        assert_eq!(&EXP[..8], &[1, 2, 4, 8, 16, 32, 3, 6]);
        assert_eq!(&LOG[1..8], &[0, 1, 6, 2, 12, 7, 26]);
        // alpha^63 = 1, so the exponential table is a permutation of the
        // nonzero elements
        let mut seen = [false; M];
        for &x in EXP.iter() {
            assert_ne!(x, 0);
            assert!(!seen[usize::from(x)]);
            seen[usize::from(x)] = true;
        }
        for j in 0..ORDER {
            assert_eq!(usize::from(LOG[usize::from(EXP[j])]), j);
        }
    }

    #[test]
    fn ops() {
        let a = Gf64(0b101101);
        let b = Gf64(0b010011);
        assert_eq!(a + b, Gf64(0b111110));
        assert_eq!(a - b, a + b);
        assert_eq!(a + a, Gf64::zero());
        // x * x^5 = x^6 = x + 1
        assert_eq!(Gf64(2) * Gf64(32), Gf64(3));
        assert_eq!(a * Gf64::zero(), Gf64::zero());
        assert_eq!(Gf64::zero() * a, Gf64::zero());
        assert_eq!(a * Gf64::one(), a);
        assert_eq!((a * b) / b, a);
    }

    #[test]
    fn field_axioms() {
        for a in Gf64::elements() {
            if !a.is_zero() {
                assert_eq!(a * a.inv(), Gf64::one());
            }
            for b in Gf64::elements() {
                assert_eq!(a * b, b * a);
                for c in [Gf64(1), Gf64(7), Gf64(42), Gf64(63)] {
                    assert_eq!(a * (b + c), a * b + a * c);
                }
            }
        }
    }

    #[test]
    fn mul_log_matches_mul() {
        for a in Gf64::elements() {
            for w in 0..ORDER as u8 {
                assert_eq!(a.mul_log(w), a * Gf64::exp(usize::from(w)));
                assert_eq!(
                    usize::from(permutation(w)[usize::from(a)]),
                    usize::from(a.mul_log(w))
                );
            }
        }
    }

    #[test]
    fn permutations_are_bijections() {
        for w in 0..ORDER as u8 {
            let p = permutation(w);
            assert_eq!(p[0], 0);
            let mut seen = [false; M];
            for &x in p.iter() {
                assert!(!seen[usize::from(x)]);
                seen[usize::from(x)] = true;
            }
        }
        for (j, &x) in permutation(0).iter().enumerate() {
            assert_eq!(usize::from(x), j);
        }
    }

    #[test]
    fn try_from() {
        assert_eq!(Gf64::try_from(63u8), Ok(Gf64(63)));
        assert_eq!(Gf64::try_from(64u8), Err(Error::OutOfRange(64)));
        assert_eq!(u8::from(Gf64(17)), 17);
    }

    #[test]
    #[should_panic]
    fn div_by_zero() {
        let _a = Gf64(5) / Gf64(0);
    }
}
