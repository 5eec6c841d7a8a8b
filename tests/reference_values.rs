//! Published reference values through the public API.
//!
//! Real and complex values from Carlson (1995), Table of test values,
//! plus the closed forms π and ln 2 for R_C. All checked at full working
//! precision to at least 13 significant figures.

use carlson_elliptic::*;
use core::f64::consts::{LN_2, PI};
use num_complex::Complex64;

const SIG_FIGS: i32 = 13;

fn full() -> Convergence<f64> {
    Convergence::full_precision()
}

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

fn assert_sig(actual: f64, expected: f64, what: &str) {
    let scale = expected.abs().max(1e-300);
    let rel = (actual - expected).abs() / scale;
    assert!(
        rel < 10f64.powi(-SIG_FIGS),
        "{what}: got {actual}, expected {expected} (rel err {rel:e})"
    );
}

fn assert_sig_c(actual: Complex64, expected: Complex64, what: &str) {
    let rel = (actual - expected).norm() / expected.norm();
    assert!(
        rel < 10f64.powi(-SIG_FIGS),
        "{what}: got {actual}, expected {expected} (rel err {rel:e})"
    );
}

// ── R_F ──

#[test]
fn rf_real() {
    assert_sig(elliprf_with(1.0, 2.0, 0.0, full()).unwrap(), 1.3110287771461, "R_F(1,2,0)");
    assert_sig(elliprf_with(0.5, 1.0, 0.0, full()).unwrap(), 1.8540746773014, "R_F(0.5,1,0)");
    assert_sig(elliprf_with(2.0, 3.0, 4.0, full()).unwrap(), 0.58408284167715, "R_F(2,3,4)");
}

#[test]
fn rf_complex() {
    let v = elliprf_with(c(0.0, 1.0), c(0.0, -1.0), c(0.0, 0.0), full()).unwrap();
    assert_sig_c(v, c(1.8540746773014, 0.0), "R_F(i,-i,0)");
    let v = elliprf_with(c(-1.0, 1.0), c(0.0, 1.0), c(0.0, 0.0), full()).unwrap();
    assert_sig_c(v, c(0.79612586584234, -1.2138566698365), "R_F(i-1,i,0)");
    let v = elliprf_with(c(0.0, 1.0), c(0.0, -1.0), c(2.0, 0.0), full()).unwrap();
    assert_sig_c(v, c(1.0441445654064, 0.0), "R_F(i,-i,2)");
    let v = elliprf_with(c(-1.0, 1.0), c(0.0, 1.0), c(1.0, -1.0), full()).unwrap();
    assert_sig_c(v, c(0.93912050218619, -0.53296252018635), "R_F(i-1,i,1-i)");
}

// ── R_C ──

#[test]
fn rc_closed_forms() {
    assert_sig(elliprc_with(0.0, 0.25, full()).unwrap(), PI, "R_C(0,1/4)");
    assert_sig(elliprc_with(2.25, 2.0, full()).unwrap(), LN_2, "R_C(9/4,2)");
    assert_sig(elliprc_with(0.25, -2.0, full()).unwrap(), LN_2 / 3.0, "R_C(1/4,-2)");
}

#[test]
fn rc_complex() {
    let v = elliprc_with(c(0.0, 0.0), c(0.0, 1.0), full()).unwrap();
    assert_sig_c(v, c(1.1107207345396, -1.1107207345396), "R_C(0,i)");
    let v = elliprc_with(c(0.0, -1.0), c(0.0, 1.0), full()).unwrap();
    assert_sig_c(v, c(1.2260849569072, -0.34471136988768), "R_C(-i,i)");
    let v = elliprc_with(c(0.0, 1.0), c(-1.0, 0.0), full()).unwrap();
    assert_sig_c(v, c(0.77778596920447, 0.19832484993429), "R_C(i,-1)");
}

// ── R_J ──

#[test]
fn rj_real() {
    assert_sig(elliprj_with(0.0, 1.0, 2.0, 3.0, full()).unwrap(), 0.77688623778582, "R_J(0,1,2,3)");
    assert_sig(elliprj_with(2.0, 3.0, 4.0, 5.0, full()).unwrap(), 0.14297579667157, "R_J(2,3,4,5)");
}

#[test]
fn rj_complex() {
    let v = elliprj_with(c(2.0, 0.0), c(3.0, 0.0), c(4.0, 0.0), c(-1.0, 1.0), full()).unwrap();
    assert_sig_c(v, c(0.13613945827771, -0.38207561624427), "R_J(2,3,4,-1+i)");
    let v = elliprj_with(c(0.0, 1.0), c(0.0, -1.0), c(0.0, 0.0), c(2.0, 0.0), full()).unwrap();
    assert_sig_c(v, c(1.6490011662711, 0.0), "R_J(i,-i,0,2)");
    let v = elliprj_with(c(-1.0, 1.0), c(-1.0, -1.0), c(1.0, 0.0), c(2.0, 0.0), full()).unwrap();
    assert_sig_c(v, c(0.94148358841220, 0.0), "R_J(-1+i,-1-i,1,2)");
    let v = elliprj_with(c(0.0, 1.0), c(0.0, -1.0), c(0.0, 0.0), c(1.0, -1.0), full()).unwrap();
    assert_sig_c(v, c(1.8260115229009, 1.2290661908643), "R_J(i,-i,0,1-i)");
    let v = elliprj_with(c(-1.0, 1.0), c(-1.0, -1.0), c(1.0, 0.0), c(-3.0, 1.0), full()).unwrap();
    assert_sig_c(v, c(-0.61127970812028, -1.0684038390007), "R_J(-1+i,-1-i,1,-3+i)");
    let v = elliprj_with(c(-1.0, 1.0), c(-2.0, -1.0), c(0.0, -1.0), c(-1.0, 1.0), full()).unwrap();
    assert_sig_c(v, c(1.8249027393704, -1.2218475784827), "R_J(-1+i,-2-i,-i,-1+i)");
}

#[test]
fn rj_principal_value() {
    assert_sig(elliprj_with(2.0, 3.0, 4.0, -0.5, full()).unwrap(), 0.24723819703052, "R_J(2,3,4,-0.5)");
    assert_sig(elliprj_with(2.0, 3.0, 4.0, -5.0, full()).unwrap(), -0.12711230042964, "R_J(2,3,4,-5)");
    let v = elliprj_with(c(2.0, 0.0), c(3.0, 0.0), c(4.0, 0.0), c(-0.5, 0.0), full()).unwrap();
    assert_sig_c(v, c(0.24723819703052, 0.0), "R_J(2,3,4,-0.5+0i)");
}

// ── Extreme scales ──

#[test]
fn third_kind_over_wide_scale_range() {
    let rj = elliprj_with(1.0, 2.0, 3.0, 4.0, full()).unwrap();
    let rd = elliprd_with(1.0, 2.0, 3.0, full()).unwrap();
    for k in [1e-120_f64, 1e120] {
        let s = k * k.sqrt();
        let v = elliprj_with(k, 2.0 * k, 3.0 * k, 4.0 * k, full()).unwrap();
        assert_sig(v * s, rj, "scaled R_J");
        let v = elliprd_with(k, 2.0 * k, 3.0 * k, full()).unwrap();
        assert_sig(v * s, rd, "scaled R_D");
    }
}

#[test]
fn first_kind_near_overflow() {
    let v = elliprf_with(1e308, 1.5e308, 1e307, full()).unwrap();
    assert_sig(v * 1e154, elliprf_with(1.0, 1.5, 0.1, full()).unwrap(), "R_F at 1e308");
}

// ── R_D ──

#[test]
fn rd_real() {
    assert_sig(elliprd_with(0.0, 2.0, 1.0, full()).unwrap(), 1.7972103521034, "R_D(0,2,1)");
    assert_sig(elliprd_with(2.0, 3.0, 4.0, full()).unwrap(), 0.16510527294261, "R_D(2,3,4)");
}

#[test]
fn rd_complex() {
    let v = elliprd_with(c(0.0, 1.0), c(0.0, -1.0), c(2.0, 0.0), full()).unwrap();
    assert_sig_c(v, c(0.65933854154220, 0.0), "R_D(i,-i,2)");
    let v = elliprd_with(c(0.0, 0.0), c(0.0, 1.0), c(0.0, -1.0), full()).unwrap();
    assert_sig_c(v, c(1.2708196271910, 2.7811120159521), "R_D(0,i,-i)");
    let v = elliprd_with(c(0.0, 0.0), c(-1.0, 1.0), c(0.0, 1.0), full()).unwrap();
    assert_sig_c(v, c(-1.8577235439239, -0.96193450888839), "R_D(0,i-1,i)");
    let v = elliprd_with(c(-2.0, -1.0), c(0.0, -1.0), c(-1.0, 1.0), full()).unwrap();
    assert_sig_c(v, c(1.8249027393704, -1.2218475784827), "R_D(-2-i,-i,-1+i)");
}

// ── Legendre forms ──

#[test]
fn legendre_complete() {
    assert_sig(ellipk(0.5).unwrap(), 1.8540746773013719, "K(0.5)");
    assert_sig(ellipe(0.5).unwrap(), 1.3506438810476755, "E(0.5)");
    // K(-1) = R_F(0, 2, 1) = R_F(1, 2, 0)
    assert_sig(ellipk(-1.0).unwrap(), 1.3110287771461, "K(-1)");
}

// ── Failure modes ──

#[test]
fn iteration_cap_yields_error_not_value() {
    let conv = full().with_max_iterations(1);
    assert_eq!(elliprf_with(1.0, 2.0, 0.0, conv), Err(Error::ConvergenceFailure));
    assert_eq!(elliprj_with(0.0, 1.0, 2.0, 3.0, conv), Err(Error::ConvergenceFailure));
}

#[test]
fn singular_inputs_are_domain_errors() {
    assert_eq!(elliprf(0.0, 0.0, 0.0), Err(Error::DomainError));
    assert_eq!(elliprc(1.0, 0.0), Err(Error::DomainError));
    assert_eq!(elliprj(1.0, 2.0, 3.0, 0.0), Err(Error::DomainError));
    assert_eq!(elliprd(1.0, 2.0, 0.0), Err(Error::DomainError));
    assert_eq!(
        elliprf_with(1.0, 2.0, 3.0, Convergence::new(0.0)),
        Err(Error::InvalidTolerance)
    );
}
