//! Overflow-safe complex modulus and the principal square root.

use num_complex::Complex;

use crate::machine::CarlsonFloat;

/// Overflow-safe complex absolute value.
///
/// Computes `|z| = sqrt(re² + im²)` without intermediate overflow by
/// factoring out the larger component:
///   `max * sqrt(1 + (min/max)²)`
#[inline]
pub(crate) fn cabs<T: CarlsonFloat>(z: Complex<T>) -> T {
    let u = z.re.abs();
    let v = z.im.abs();
    let s = u + v;
    if s == T::zero() {
        return T::zero();
    }
    if u > v {
        let q = v / u;
        u * (T::one() + q * q).sqrt()
    } else {
        let q = u / v;
        v * (T::one() + q * q).sqrt()
    }
}

/// Principal square root with the branch cut on the negative real axis.
///
/// The result always has a non-negative real part. A negative real
/// argument maps to `+i·sqrt(|z|)` whatever the sign of its zero
/// imaginary part, so a `-0.0` produced by arithmetic cannot move the
/// value to the lower branch.
#[inline]
pub(crate) fn csqrt<T: CarlsonFloat>(z: Complex<T>) -> Complex<T> {
    let zero = T::zero();
    if z.im == zero {
        return if z.re >= zero {
            Complex::new(z.re.sqrt(), zero)
        } else {
            Complex::new(zero, (-z.re).sqrt())
        };
    }

    // sqrt(z) = sqrt((|z| + re)/2) + i·sign(im)·sqrt((|z| - re)/2),
    // evaluated so the larger component never suffers cancellation.
    let half = T::from_f64(0.5);
    let r = cabs(z);
    if z.re >= zero {
        let t = ((r + z.re) * half).sqrt();
        Complex::new(t, z.im / (t + t))
    } else {
        let t = ((r - z.re) * half).sqrt();
        let im = if z.im < zero { -t } else { t };
        Complex::new(z.im.abs() / (t + t), im)
    }
}
