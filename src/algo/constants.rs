//! Taylor coefficients of the truncated symmetric-function series.
//!
//! Carlson (1995), "Numerical computation of real or complex elliptic
//! integrals", eqs. (2.7), (2.13) and (2.18).

// R_F: 1 - E2/10 + E3/14 + E2²/24 - 3·E2·E3/44
pub(crate) const RF_E2: f64 = 1.0 / 10.0;
pub(crate) const RF_E3: f64 = 1.0 / 14.0;
pub(crate) const RF_E2_2: f64 = 1.0 / 24.0;
pub(crate) const RF_E2_E3: f64 = 3.0 / 44.0;

// R_C: 1 + 3s²/10 + s³/7 + 3s⁴/8 + 9s⁵/22 + 159s⁶/208 + 9s⁷/8
pub(crate) const RC_S2: f64 = 3.0 / 10.0;
pub(crate) const RC_S3: f64 = 1.0 / 7.0;
pub(crate) const RC_S4: f64 = 3.0 / 8.0;
pub(crate) const RC_S5: f64 = 9.0 / 22.0;
pub(crate) const RC_S6: f64 = 159.0 / 208.0;
pub(crate) const RC_S7: f64 = 9.0 / 8.0;

// R_J: 1 - 3E2/14 + E3/6 + 9E2²/88 - 3E4/22 - 9E2E3/52 + 3E5/26
pub(crate) const RJ_E2: f64 = 3.0 / 14.0;
pub(crate) const RJ_E3: f64 = 1.0 / 6.0;
pub(crate) const RJ_E2_2: f64 = 9.0 / 88.0;
pub(crate) const RJ_E4: f64 = 3.0 / 22.0;
pub(crate) const RJ_E2_E3: f64 = 9.0 / 52.0;
pub(crate) const RJ_E5: f64 = 3.0 / 26.0;
