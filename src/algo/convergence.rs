//! Truncation of the duplication sequence at Carlson's error bound.
//!
//! The bound `Q` differs per integral kind only in its exponent and lead
//! multiplier. The sequence is stopped at the first index m with
//! `4^(-m)·Q < |A_m|`; that index is the truncation index n.

use num_traits::{Float, One};

use crate::machine::CarlsonFloat;
use crate::scalar::CarlsonScalar;
use crate::types::Error;

/// Truncation index and terminal iterate.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Truncation<S: CarlsonScalar> {
    /// Truncation index n.
    pub(crate) n: u32,
    /// Terminal iterate A_n.
    pub(crate) a_n: S,
}

impl<S: CarlsonScalar> Truncation<S> {
    /// `4^(-n)`.
    pub(crate) fn inv_pow4(&self) -> S::Real {
        <S::Real as CarlsonFloat>::from_f64(0.25).powi(self.n as i32)
    }

    /// Normalized deviation `(a0 - v) / (4^n A_n)`.
    pub(crate) fn deviation(&self, a0: S, v: S) -> S {
        (a0 - v) * S::from_real(self.inv_pow4()) / self.a_n
    }
}

/// Carlson's bound `Q = factor · spread`, kept as its two factors.
///
/// `spread` is `max |A0 - v|` and may sit near the overflow threshold, so
/// the product is never formed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ErrorBound<T> {
    pub(crate) factor: T,
    pub(crate) spread: T,
}

impl<T: CarlsonFloat> ErrorBound<T> {
    /// `scale · Q < modulus`.
    #[inline]
    fn is_met(&self, scale: T, modulus: T) -> bool {
        scale * self.spread < modulus / self.factor
    }
}

fn max_spread<S: CarlsonScalar>(a0: S, args: &[S]) -> S::Real {
    args.iter()
        .map(|&v| (a0 - v).modulus())
        .fold(<S::Real as num_traits::Zero>::zero(), Float::max)
}

/// R_F bound: `(3·rtol)^(-1/6) · max |A0 - v|`.
pub(crate) fn rf_bound<S: CarlsonScalar>(
    rtol: S::Real,
    a0: S,
    x: S,
    y: S,
    z: S,
) -> ErrorBound<S::Real> {
    let three = <S::Real as CarlsonFloat>::from_f64(3.0);
    let exponent = <S::Real as CarlsonFloat>::from_f64(-1.0 / 6.0);
    ErrorBound {
        factor: (three * rtol).powf(exponent),
        spread: max_spread(a0, &[x, y, z]),
    }
}

/// R_C bound: `(3·rtol)^(-1/8) · |A0 - x|`.
pub(crate) fn rc_bound<S: CarlsonScalar>(rtol: S::Real, a0: S, x: S) -> ErrorBound<S::Real> {
    let three = <S::Real as CarlsonFloat>::from_f64(3.0);
    let exponent = <S::Real as CarlsonFloat>::from_f64(-1.0 / 8.0);
    ErrorBound {
        factor: (three * rtol).powf(exponent),
        spread: (a0 - x).modulus(),
    }
}

/// R_J bound: `(rtol/4)^(-1/6) · max |A0 - v|`.
pub(crate) fn rj_bound<S: CarlsonScalar>(
    rtol: S::Real,
    a0: S,
    x: S,
    y: S,
    z: S,
    p: S,
) -> ErrorBound<S::Real> {
    let quarter = <S::Real as CarlsonFloat>::from_f64(0.25);
    let exponent = <S::Real as CarlsonFloat>::from_f64(-1.0 / 6.0);
    ErrorBound {
        factor: (rtol * quarter).powf(exponent),
        spread: max_spread(a0, &[x, y, z, p]),
    }
}

/// Advance `seq` until the error bound is met.
///
/// At most `max_iterations` iterates are examined. A non-finite iterate
/// is a domain error; running out of iterations is a convergence failure.
pub(crate) fn truncate<S, I>(
    seq: I,
    bound: ErrorBound<S::Real>,
    max_iterations: u32,
) -> Result<Truncation<S>, Error>
where
    S: CarlsonScalar,
    I: Iterator<Item = S>,
{
    let quarter = <S::Real as CarlsonFloat>::from_f64(0.25);
    // 4^(-m)
    let mut scale = <S::Real as One>::one();

    for (m, a_m) in seq.take(max_iterations as usize).enumerate() {
        if !a_m.is_finite() {
            return Err(Error::DomainError);
        }
        if bound.is_met(scale, a_m.modulus()) {
            return Ok(Truncation {
                n: m as u32,
                a_n: a_m,
            });
        }
        scale = scale * quarter;
    }

    Err(Error::ConvergenceFailure)
}
