//! Carlson symmetric elliptic integrals for real and complex arguments.
//!
//! This crate evaluates R_F, R_C, R_J and R_D with Carlson's duplication
//! algorithm (B. C. Carlson, "Numerical computation of real or complex
//! elliptic integrals", Numer. Algorithms 10 (1995), arXiv:math/9409227).
//! The classical Legendre integrals K, E, F and E(φ, m) are provided on top.
//!
//! Every function is generic over [`CarlsonScalar`]: pass `f64`/`f32` for
//! real evaluation or `Complex<f64>`/`Complex<f32>` for complex evaluation.
//! A real call never silently turns complex; arguments that would need a
//! complex square root are rejected with [`Error::DomainError`]. Negative
//! y in R_C and negative p in R_J give Cauchy principal values.
//!
//! # Tolerance
//!
//! The plain functions use per-integral default tolerances
//! ([`DEFAULT_RTOL_RF`], [`DEFAULT_RTOL_RC`], …), which are loose
//! (relative error around 1e-7). The `_with` variants accept a
//! [`Convergence`] to tighten the tolerance or change the iteration cap;
//! [`Convergence::full_precision`] gives full working precision.
//!
//! # Example
//!
//! ```
//! use carlson_elliptic::{elliprc, elliprf_with, Convergence};
//! use num_complex::Complex64;
//!
//! // R_C(0, 1/4) = π
//! let pi = elliprc(0.0_f64, 0.25).unwrap();
//! assert!((pi - core::f64::consts::PI).abs() < 1e-6);
//!
//! // R_F(i, -i, 0) is real
//! let conv = Convergence::full_precision();
//! let v = elliprf_with(
//!     Complex64::new(0.0, 1.0),
//!     Complex64::new(0.0, -1.0),
//!     Complex64::new(0.0, 0.0),
//!     conv,
//! )
//! .unwrap();
//! assert!((v.re - 1.8540746773014).abs() < 1e-12);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]

mod algo;
mod legendre;
mod rc;
mod rd;
mod rf;
mod rj;
mod utils;

pub mod machine;
pub mod scalar;
pub mod types;

pub use legendre::{ellipe, ellipeinc, ellipf, ellipk, LegendreFloat};
pub use machine::CarlsonFloat;
pub use scalar::CarlsonScalar;
pub use types::{
    Convergence, Error, DEFAULT_MAX_ITERATIONS, DEFAULT_RTOL_RC, DEFAULT_RTOL_RD,
    DEFAULT_RTOL_RF, DEFAULT_RTOL_RJ,
};

// ── Default-tolerance functions ──

/// Symmetric integral of the first kind, R_F(x, y, z).
///
/// R_F(x, y, z) = ½ ∫₀^∞ [(t + x)(t + y)(t + z)]^(-1/2) dt.
/// At most one argument may be zero. `y == z` evaluates R_C(x, y).
pub fn elliprf<S: CarlsonScalar>(x: S, y: S, z: S) -> Result<S, Error> {
    rf::compute_rf(x, y, z, &Convergence::rf())
}

/// Degenerate integral R_C(x, y) = R_F(x, y, y).
///
/// For negative real y the Cauchy principal value is returned.
pub fn elliprc<S: CarlsonScalar>(x: S, y: S) -> Result<S, Error> {
    rc::compute_rc(x, y, &Convergence::rc())
}

/// Symmetric integral of the third kind, R_J(x, y, z, p).
///
/// R_J(x, y, z, p) = (3/2) ∫₀^∞ [(t + x)(t + y)(t + z)]^(-1/2) (t + p)^(-1) dt.
/// For p on the negative real axis the Cauchy principal value is returned;
/// x, y and z must then be real and non-negative.
pub fn elliprj<S: CarlsonScalar>(x: S, y: S, z: S, p: S) -> Result<S, Error> {
    rj::compute_rj(x, y, z, p, &Convergence::rj())
}

/// Symmetric integral of the second kind, R_D(x, y, z) = R_J(x, y, z, z).
pub fn elliprd<S: CarlsonScalar>(x: S, y: S, z: S) -> Result<S, Error> {
    rd::compute_rd(x, y, z, &Convergence::rd())
}

// ── Functions with explicit convergence settings ──

/// R_F(x, y, z) with explicit convergence settings.
pub fn elliprf_with<S: CarlsonScalar>(
    x: S,
    y: S,
    z: S,
    conv: Convergence<S::Real>,
) -> Result<S, Error> {
    rf::compute_rf(x, y, z, &conv)
}

/// R_C(x, y) with explicit convergence settings.
pub fn elliprc_with<S: CarlsonScalar>(
    x: S,
    y: S,
    conv: Convergence<S::Real>,
) -> Result<S, Error> {
    rc::compute_rc(x, y, &conv)
}

/// R_J(x, y, z, p) with explicit convergence settings.
///
/// The settings also govern every R_C evaluation in the correction sum.
pub fn elliprj_with<S: CarlsonScalar>(
    x: S,
    y: S,
    z: S,
    p: S,
    conv: Convergence<S::Real>,
) -> Result<S, Error> {
    rj::compute_rj(x, y, z, p, &conv)
}

/// R_D(x, y, z) with explicit convergence settings.
pub fn elliprd_with<S: CarlsonScalar>(
    x: S,
    y: S,
    z: S,
    conv: Convergence<S::Real>,
) -> Result<S, Error> {
    rd::compute_rd(x, y, z, &conv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::{Complex32, Complex64};

    #[test]
    fn defaults_are_close() {
        let v = elliprf(2.0_f64, 3.0, 4.0).unwrap();
        assert!((v - 0.58408284167715).abs() < 1e-6);
        let v = elliprc(2.25_f64, 2.0).unwrap();
        assert!((v - core::f64::consts::LN_2).abs() < 1e-6);
        let v = elliprj(2.0_f64, 3.0, 4.0, 5.0).unwrap();
        assert!((v - 0.14297579667157).abs() < 1e-6);
        let v = elliprd(2.0_f64, 3.0, 4.0).unwrap();
        assert!((v - 0.16510527294261).abs() < 1e-6);
    }

    #[test]
    fn with_variants_honor_cap() {
        let conv = Convergence::full_precision().with_max_iterations(0);
        assert_eq!(elliprf_with(1.0_f64, 2.0, 3.0, conv), Err(Error::ConvergenceFailure));
        assert_eq!(elliprc_with(0.0_f64, 1.0, conv), Err(Error::ConvergenceFailure));
        assert_eq!(
            elliprj_with(1.0_f64, 2.0, 3.0, 4.0, conv),
            Err(Error::ConvergenceFailure)
        );
        assert_eq!(elliprd_with(1.0_f64, 2.0, 3.0, conv), Err(Error::ConvergenceFailure));
    }

    #[test]
    fn f32_and_complex32() {
        let v = elliprf(1.0_f32, 2.0, 0.0).unwrap();
        assert!((v - 1.3110288).abs() < 1e-5);
        let v = elliprc(Complex32::new(0.0, 0.0), Complex32::new(0.0, 1.0)).unwrap();
        assert!((v.re - 1.1107207).abs() < 1e-5);
        assert!((v.im + 1.1107207).abs() < 1e-5);
    }

    #[test]
    fn complex_representation_is_preserved() {
        // A real problem evaluated as complex comes back with zero imaginary part
        let conv = Convergence::full_precision();
        let v = elliprj_with(
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0, 0.0),
            Complex64::new(2.0, 0.0),
            Complex64::new(3.0, 0.0),
            conv,
        )
        .unwrap();
        assert!((v.re - 0.77688623778582).abs() < 1e-13);
        assert!(v.im.abs() < 1e-15);
    }
}
