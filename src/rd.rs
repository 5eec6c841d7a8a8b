//! R_D upper interface.
//!
//! R_D(x, y, z) = R_J(x, y, z, z), the symmetric integral of the second
//! kind. With p = z the δ term vanishes and every R_C factor in the
//! correction sum is R_C(1, 1) = 1.

use crate::rj::compute_rj;
use crate::scalar::CarlsonScalar;
use crate::types::{Convergence, Error};

/// Compute R_D(x, y, z).
pub(crate) fn compute_rd<S: CarlsonScalar>(
    x: S,
    y: S,
    z: S,
    conv: &Convergence<S::Real>,
) -> Result<S, Error> {
    compute_rj(x, y, z, z, conv)
}
