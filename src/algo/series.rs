//! Truncated Taylor series in the normalized deviations.
//!
//! Each evaluator is a pure function of the deviations at the truncation
//! index and the terminal iterate A_n.

use crate::algo::constants::*;
use crate::scalar::CarlsonScalar;

#[inline]
fn c<S: CarlsonScalar>(v: f64) -> S {
    S::from_f64(v)
}

/// R_F series with `X`, `Y` given and `Z = -X - Y`.
///
/// `A_n^(-1/2) · (1 - E2/10 + E3/14 + E2²/24 - 3·E2·E3/44)`,
/// `E2 = XY - Z²`, `E3 = XYZ`.
pub(crate) fn rf_series<S: CarlsonScalar>(x_dev: S, y_dev: S, a_n: S) -> S {
    let one = c::<S>(1.0);
    let z_dev = -x_dev - y_dev;
    let e2 = x_dev * y_dev - z_dev * z_dev;
    let e3 = x_dev * y_dev * z_dev;
    let poly = one - e2 * c(RF_E2) + e3 * c(RF_E3) + e2 * e2 * c(RF_E2_2)
        - e2 * e3 * c(RF_E2_E3);
    poly / a_n.principal_sqrt()
}

/// R_C series in `s = (y - A0)/(4^n A_n)`.
pub(crate) fn rc_series<S: CarlsonScalar>(s: S, a_n: S) -> S {
    let one = c::<S>(1.0);
    // Horner from the s⁷ term down to s²
    let tail = c::<S>(RC_S2)
        + s * (c::<S>(RC_S3)
            + s * (c::<S>(RC_S4) + s * (c::<S>(RC_S5) + s * (c::<S>(RC_S6) + s * c(RC_S7)))));
    (one + s * s * tail) / a_n.principal_sqrt()
}

/// Main R_J term, `4^(-n) · A_n^(-3/2) · (series)`.
///
/// `P = (-X - Y - Z)/2`;
/// `E2 = XY + XZ + YZ - 3P²`, `E3 = XYZ + 2E2P + 4P³`,
/// `E4 = (2XYZ + E2P + 3P³)P`, `E5 = XYZP²`.
pub(crate) fn rj_series<S: CarlsonScalar>(
    x_dev: S,
    y_dev: S,
    z_dev: S,
    inv_pow4: S::Real,
    a_n: S,
) -> S {
    let one = c::<S>(1.0);
    let two = c::<S>(2.0);
    let three = c::<S>(3.0);
    let four = c::<S>(4.0);

    let p_dev = (-x_dev - y_dev - z_dev) * c(0.5);
    let p2 = p_dev * p_dev;
    let p3 = p2 * p_dev;
    let xyz = x_dev * y_dev * z_dev;

    let e2 = x_dev * y_dev + x_dev * z_dev + y_dev * z_dev - three * p2;
    let e3 = xyz + two * e2 * p_dev + four * p3;
    let e4 = (two * xyz + e2 * p_dev + three * p3) * p_dev;
    let e5 = xyz * p2;

    let poly = one - e2 * c(RJ_E2) + e3 * c(RJ_E3) + e2 * e2 * c(RJ_E2_2)
        - e4 * c(RJ_E4)
        - e2 * e3 * c(RJ_E2_E3)
        + e5 * c(RJ_E5);

    S::from_real(inv_pow4) * poly / (a_n * a_n.principal_sqrt())
}
