//! R_J upper interface.
//!
//! R_J(x, y, z, p) = (3/2) ∫₀^∞ [(t + x)(t + y)(t + z)]^(-1/2) (t + p)^(-1) dt.
//!
//! The value is the truncated series at index n plus six times the R_C
//! correction sum over m = 0..n-1. For p on the negative real axis the
//! Cauchy principal value is returned.

use core::cmp::Ordering;

use num_traits::{Float, Zero};

use crate::algo::convergence::{rj_bound, truncate};
use crate::algo::correction::rc_correction_sum;
use crate::algo::duplication::{mean4, Duplication4};
use crate::algo::series::rj_series;
use crate::rc::compute_rc;
use crate::rf::compute_rf;
use crate::scalar::{check_arguments, finite_result, zero_count, CarlsonScalar};
use crate::types::{Convergence, Error};

/// Compute R_J(x, y, z, p).
///
/// A negative real p requires x, y and z real and non-negative; the result
/// is then the principal value. Otherwise the arguments follow R_F's
/// domain and p must be non-zero.
pub(crate) fn compute_rj<S: CarlsonScalar>(
    x: S,
    y: S,
    z: S,
    p: S,
    conv: &Convergence<S::Real>,
) -> Result<S, Error> {
    conv.validate()?;
    if p.is_negative_real() {
        return principal_value(x, y, z, p, conv);
    }
    check_arguments(&[x, y, z, p])?;
    if zero_count(&[x, y, z]) > 1 || p.is_zero() {
        return Err(Error::DomainError);
    }

    let a0 = mean4(x, y, z, p);
    let q = rj_bound(conv.rtol, a0, x, y, z, p);
    let t = truncate(Duplication4::new(x, y, z, p), q, conv.max_iterations)?;

    let x_dev = t.deviation(a0, x);
    let y_dev = t.deviation(a0, y);
    let z_dev = t.deviation(a0, z);
    let main = rj_series(x_dev, y_dev, z_dev, t.inv_pow4(), t.a_n);

    let correction = rc_correction_sum(x, y, z, p, t.n, conv)?;

    finite_result(main + S::from_f64(6.0) * correction)
}

/// Cauchy principal value of R_J for p < 0.
///
/// With x <= y <= z and q = -p the pole moves to
/// `p' = (z(x + y + q) - xy)/(z + q) > 0` and
///
/// `(z + q)·R_J(x, y, z, p) = (p' - z)·R_J(x, y, z, p') - 3·R_F(x, y, z)
///     + 3·√(xyz/(xy + p'q))·R_C(xy + p'q, p'q)`.
fn principal_value<S: CarlsonScalar>(
    x: S,
    y: S,
    z: S,
    p: S,
    conv: &Convergence<S::Real>,
) -> Result<S, Error> {
    let mut v = match (x.as_real(), y.as_real(), z.as_real()) {
        (Some(x), Some(y), Some(z)) => [x, y, z],
        _ => return Err(Error::DomainError),
    };
    let zero = <S::Real as Zero>::zero();
    if !p.is_finite() || v.iter().any(|r| !Float::is_finite(*r) || *r < zero) {
        return Err(Error::DomainError);
    }
    v.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let [x, y, z] = v.map(S::from_real);

    let three = S::from_f64(3.0);
    let q = -p;
    let p_shift = (z * (x + y + q) - x * y) / (z + q);
    let pq = p_shift * q;
    let xy_pq = x * y + pq;

    let rj = compute_rj(x, y, z, p_shift, conv)?;
    let rf = compute_rf(x, y, z, conv)?;
    let rc = compute_rc(xy_pq, pq, conv)?;
    let root = (x * y * z / xy_pq).principal_sqrt();

    finite_result(((p_shift - z) * rj - three * rf + three * root * rc) / (z + q))
}
