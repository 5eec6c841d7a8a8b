//! R_C correction sum for R_J.
//!
//! With `δ = (p-x)(p-y)(p-z)` and `e_m = 4^(-3m)·δ/d_m²`, R_J picks up
//! `6 · Σ_{m=0}^{n-1} 4^(-m)/d_m · R_C(1, 1 + e_m)` on top of its series
//! term. The sum is empty when the truncation index n is 0.

use num_traits::One;

use crate::algo::duplication::CorrectionDenominators;
use crate::machine::CarlsonFloat;
use crate::rc::compute_rc;
use crate::scalar::CarlsonScalar;
use crate::types::{Convergence, Error};

/// `Σ_{m=0}^{n-1} 4^(-m)/d_m · R_C(1, 1 + e_m)`.
///
/// Each R_C term is evaluated in the caller's representation and with
/// the caller's convergence settings.
pub(crate) fn rc_correction_sum<S: CarlsonScalar>(
    x: S,
    y: S,
    z: S,
    p: S,
    n: u32,
    conv: &Convergence<S::Real>,
) -> Result<S, Error> {
    let one = S::from_f64(1.0);
    let quarter = <S::Real as CarlsonFloat>::from_f64(0.25);
    let sixty_fourth = <S::Real as CarlsonFloat>::from_f64(1.0 / 64.0);

    let (px, py, pz) = (p - x, p - y, p - z);

    let mut sum = S::from_f64(0.0);
    // 4^(-m) and 4^(-3m)
    let mut w = <S::Real as One>::one();
    let mut w3 = <S::Real as One>::one();

    for d_m in CorrectionDenominators::new(x, y, z, p).take(n as usize) {
        // δ·4^(-3m)/d_m², dividing as it goes so d_m² is never formed
        let e_m = px / d_m * py / d_m * pz * S::from_real(w3);
        let rc = compute_rc(one, one + e_m, conv)?;
        sum = sum + S::from_real(w) / d_m * rc;
        w = w * quarter;
        w3 = w3 * sixty_fourth;
    }

    Ok(sum)
}
