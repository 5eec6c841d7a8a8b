//! R_F upper interface.
//!
//! R_F(x, y, z) = ½ ∫₀^∞ [(t + x)(t + y)(t + z)]^(-1/2) dt.

use crate::algo::convergence::{rf_bound, truncate};
use crate::algo::duplication::{mean3, Duplication3};
use crate::algo::series::rf_series;
use crate::rc::compute_rc;
use crate::scalar::{check_arguments, finite_result, zero_count, CarlsonScalar};
use crate::types::{Convergence, Error};

/// Compute R_F(x, y, z).
///
/// `y == z` is handed to R_C, which is exact for that case.
pub(crate) fn compute_rf<S: CarlsonScalar>(
    x: S,
    y: S,
    z: S,
    conv: &Convergence<S::Real>,
) -> Result<S, Error> {
    conv.validate()?;
    check_arguments(&[x, y, z])?;
    if zero_count(&[x, y, z]) > 1 {
        return Err(Error::DomainError);
    }

    if y == z {
        return compute_rc(x, y, conv);
    }

    let a0 = mean3(x, y, z);
    let q = rf_bound(conv.rtol, a0, x, y, z);
    let t = truncate(Duplication3::new(x, y, z), q, conv.max_iterations)?;
    let x_dev = t.deviation(a0, x);
    let y_dev = t.deviation(a0, y);

    finite_result(rf_series(x_dev, y_dev, t.a_n))
}
