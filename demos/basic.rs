use carlson_elliptic::*;
use num_complex::Complex;

fn main() {
    // -- Real arguments, default tolerance --
    println!("=== Real arguments (f64) ===");
    let rf = elliprf(1.0_f64, 2.0, 0.0).unwrap();
    println!("R_F(1, 2, 0) = {rf}");

    let rc = elliprc(0.0_f64, 0.25).unwrap();
    println!("R_C(0, 1/4) = {rc}  (π = {})", core::f64::consts::PI);

    let rj = elliprj(2.0_f64, 3.0, 4.0, 5.0).unwrap();
    println!("R_J(2, 3, 4, 5) = {rj}");

    let rd = elliprd(2.0_f64, 3.0, 4.0).unwrap();
    println!("R_D(2, 3, 4) = {rd}");

    // -- Principal value --
    println!("\n=== Cauchy principal value ===");
    let pv = elliprc(0.25_f64, -2.0).unwrap();
    println!("R_C(1/4, -2) = {pv}  (ln2/3 = {})", core::f64::consts::LN_2 / 3.0);

    // -- Full working precision --
    println!("\n=== Full precision ===");
    let conv = Convergence::full_precision();
    let rf_full = elliprf_with(1.0_f64, 2.0, 0.0, conv).unwrap();
    println!("R_F(1, 2, 0) = {rf_full}");
    println!("  default-tolerance difference: {:e}", rf - rf_full);

    // -- Complex arguments --
    println!("\n=== Complex arguments ===");
    let i = Complex::new(0.0_f64, 1.0);
    let zero = Complex::new(0.0_f64, 0.0);
    let v = elliprf_with(i, -i, zero, conv).unwrap();
    println!("R_F(i, -i, 0) = {v}");

    let v = elliprj_with(
        Complex::new(2.0, 0.0),
        Complex::new(3.0, 0.0),
        Complex::new(4.0, 0.0),
        Complex::new(-1.0, 1.0),
        conv,
    )
    .unwrap();
    println!("R_J(2, 3, 4, -1+i) = {v}");

    // -- Legendre forms --
    println!("\n=== Legendre forms (m = k²) ===");
    let m = 0.5_f64;
    println!("K({m}) = {}", ellipk(m).unwrap());
    println!("E({m}) = {}", ellipe(m).unwrap());
    println!("F(0.7, {m}) = {}", ellipf(0.7, m).unwrap());
    println!("E(0.7, {m}) = {}", ellipeinc(0.7, m).unwrap());

    // -- Errors --
    println!("\n=== Errors ===");
    match elliprf(0.0_f64, 0.0, 1.0) {
        Ok(v) => println!("unexpected value {v}"),
        Err(e) => println!("R_F(0, 0, 1): {e}"),
    }
    match elliprf_with(1.0_f64, 2.0, 0.0, conv.with_max_iterations(1)) {
        Ok(v) => println!("unexpected value {v}"),
        Err(e) => println!("R_F(1, 2, 0) capped at one step: {e}"),
    }

    // -- f32 support --
    println!("\n=== f32 support ===");
    let rf32 = elliprf(1.0_f32, 2.0, 0.0).unwrap();
    println!("R_F(1, 2, 0) = {rf32} (f32)");
}
