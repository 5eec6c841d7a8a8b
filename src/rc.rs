//! R_C upper interface.
//!
//! R_C(x, y) = ½ ∫₀^∞ (t + x)^(-1/2) (t + y)^(-1) dt, the degenerate case
//! R_F(x, y, y). For y on the negative real axis the Cauchy principal value
//! is returned via
//! R_C(x, y) = √(x/(x - y)) · R_C(x - y, -y).

use crate::algo::convergence::{rc_bound, truncate};
use crate::algo::duplication::{mean3, Duplication3};
use crate::algo::series::rc_series;
use crate::scalar::{check_arguments, finite_result, CarlsonScalar};
use crate::types::{Convergence, Error};

/// Compute R_C(x, y).
pub(crate) fn compute_rc<S: CarlsonScalar>(
    x: S,
    y: S,
    conv: &Convergence<S::Real>,
) -> Result<S, Error> {
    conv.validate()?;
    if !x.is_finite() || !y.is_finite() || !x.has_real_sqrt() || y.is_zero() {
        return Err(Error::DomainError);
    }

    // Negative real y: move onto the principal branch
    let (x, y, factor) = if y.is_negative_real() {
        let ay = S::from_real(y.modulus());
        let shifted = x + ay;
        (shifted, ay, (x / shifted).principal_sqrt())
    } else {
        (x, y, S::from_f64(1.0))
    };
    check_arguments(&[x, y])?;

    let a0 = mean3(x, y, y);
    let q = rc_bound(conv.rtol, a0, x);
    let t = truncate(Duplication3::new(x, y, y), q, conv.max_iterations)?;
    // s = (y - A0)/(4^n A_n)
    let s = t.deviation(y, a0);

    finite_result(factor * rc_series(s, t.a_n))
}
