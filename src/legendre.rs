//! Legendre elliptic integrals assembled from the Carlson forms.
//!
//! Parameter convention m = k², matching `scipy.special.ellipk(m)` and
//! friends. All four functions evaluate at full working precision.
//!
//! - K(m) = R_F(0, 1-m, 1)
//! - E(m) = R_F(0, 1-m, 1) - (m/3)·R_D(0, 1-m, 1)
//! - F(φ, m) = sinφ·R_F(cos²φ, 1 - m·sin²φ, 1)
//! - E(φ, m) = sinφ·R_F(c², Δ², 1) - (m/3)·sin³φ·R_D(c², Δ², 1)
//!
//! Amplitudes outside [-π/2, π/2] are reduced with
//! F(φ + jπ) = F(φ) + 2jK and E(φ + jπ) = E(φ) + 2jE.

use num_traits::Float;

use crate::machine::CarlsonFloat;
use crate::rd::compute_rd;
use crate::rf::compute_rf;
use crate::scalar::CarlsonScalar;
use crate::types::{Convergence, Error};

/// Real floats usable both as Carlson arguments and as their own real part.
pub trait LegendreFloat: CarlsonFloat + CarlsonScalar<Real = Self> {}

impl<T: CarlsonFloat + CarlsonScalar<Real = T>> LegendreFloat for T {}

#[inline]
fn lit<T: CarlsonFloat>(x: f64) -> T {
    <T as CarlsonFloat>::from_f64(x)
}

/// Split φ into j·π + φ_r with |φ_r| <= π/2.
fn reduce_amplitude<T: CarlsonFloat>(phi: T) -> (T, T) {
    let pi = lit::<T>(core::f64::consts::PI);
    let j = Float::round(phi / pi);
    (j, phi - j * pi)
}

/// Complete elliptic integral of the first kind K(m), m < 1.
pub fn ellipk<T: LegendreFloat>(m: T) -> Result<T, Error> {
    let one = T::one();
    if m >= one {
        return Err(Error::DomainError);
    }
    compute_rf(T::zero(), one - m, one, &Convergence::full_precision())
}

/// Complete elliptic integral of the second kind E(m), m <= 1.
pub fn ellipe<T: LegendreFloat>(m: T) -> Result<T, Error> {
    let one = T::one();
    if m > one || Float::is_nan(m) {
        return Err(Error::DomainError);
    }
    if m == one {
        return Ok(one);
    }
    let conv = Convergence::full_precision();
    let mc = one - m;
    let rf = compute_rf(T::zero(), mc, one, &conv)?;
    let rd = compute_rd(T::zero(), mc, one, &conv)?;
    Ok(rf - m / lit::<T>(3.0) * rd)
}

/// Incomplete elliptic integral of the first kind F(φ, m).
pub fn ellipf<T: LegendreFloat>(phi: T, m: T) -> Result<T, Error> {
    if !Float::is_finite(phi) {
        return Err(Error::DomainError);
    }
    let one = T::one();
    let (j, phi_r) = reduce_amplitude(phi);
    let (s, c) = Float::sin_cos(phi_r);

    let conv = Convergence::full_precision();
    let mut value = if s == T::zero() {
        T::zero()
    } else {
        s * compute_rf(c * c, one - m * s * s, one, &conv)?
    };
    if j != T::zero() {
        value = value + lit::<T>(2.0) * j * ellipk(m)?;
    }
    Ok(value)
}

/// Incomplete elliptic integral of the second kind E(φ, m).
pub fn ellipeinc<T: LegendreFloat>(phi: T, m: T) -> Result<T, Error> {
    if !Float::is_finite(phi) {
        return Err(Error::DomainError);
    }
    let one = T::one();
    let (j, phi_r) = reduce_amplitude(phi);
    let (s, c) = Float::sin_cos(phi_r);

    let conv = Convergence::full_precision();
    let mut value = if s == T::zero() {
        T::zero()
    } else {
        let c2 = c * c;
        let d2 = one - m * s * s;
        let rf = compute_rf(c2, d2, one, &conv)?;
        let rd = compute_rd(c2, d2, one, &conv)?;
        s * rf - m / lit::<T>(3.0) * s * s * s * rd
    };
    if j != T::zero() {
        value = value + lit::<T>(2.0) * j * ellipe(m)?;
    }
    Ok(value)
}
