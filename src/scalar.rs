//! The argument type shared by all Carlson integrals.
//!
//! Every entry point is generic over [`CarlsonScalar`], which covers the
//! plain floats (`f32`, `f64`) and their complex counterparts. Evaluation
//! never changes representation: a real call stays real, a complex call
//! stays complex.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

use num_complex::Complex;
use num_traits::{Float, Zero};

use crate::machine::CarlsonFloat;
use crate::types::Error;
use crate::utils::{cabs, csqrt};

/// Real or complex scalar accepted by the Carlson integrals.
pub trait CarlsonScalar:
    Copy
    + PartialEq
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    /// Underlying real type, used for tolerances and moduli.
    type Real: CarlsonFloat;

    /// Embed a real value.
    fn from_real(r: Self::Real) -> Self;

    /// Absolute value (modulus for complex values).
    fn modulus(self) -> Self::Real;

    /// Principal square root.
    ///
    /// For real scalars this is only meaningful when
    /// [`has_real_sqrt`](Self::has_real_sqrt) holds.
    fn principal_sqrt(self) -> Self;

    /// Whether every component is finite.
    fn is_finite(self) -> bool;

    /// Zero imaginary part and strictly negative real part.
    fn is_negative_real(self) -> bool;

    /// The value as a real number, if its imaginary part is zero.
    fn as_real(self) -> Option<Self::Real>;

    /// Whether the square root of `self` exists in this representation.
    ///
    /// Always true for complex scalars; for real scalars, `self >= 0`.
    fn has_real_sqrt(self) -> bool;

    #[inline]
    fn is_zero(self) -> bool {
        self == Self::from_real(<Self::Real as Zero>::zero())
    }

    #[inline]
    fn from_f64(x: f64) -> Self {
        Self::from_real(<Self::Real as CarlsonFloat>::from_f64(x))
    }
}

macro_rules! impl_real_scalar {
    ($($t:ty),*) => {$(
        impl CarlsonScalar for $t {
            type Real = $t;

            #[inline]
            fn from_real(r: $t) -> $t {
                r
            }
            #[inline]
            fn modulus(self) -> $t {
                Float::abs(self)
            }
            #[inline]
            fn principal_sqrt(self) -> $t {
                Float::sqrt(self)
            }
            #[inline]
            fn is_finite(self) -> bool {
                Float::is_finite(self)
            }
            #[inline]
            fn is_negative_real(self) -> bool {
                self < 0.0
            }
            #[inline]
            fn as_real(self) -> Option<$t> {
                Some(self)
            }
            #[inline]
            fn has_real_sqrt(self) -> bool {
                self >= 0.0
            }
        }
    )*};
}

impl_real_scalar!(f32, f64);

impl<T: CarlsonFloat> CarlsonScalar for Complex<T> {
    type Real = T;

    #[inline]
    fn from_real(r: T) -> Complex<T> {
        Complex::new(r, T::zero())
    }
    #[inline]
    fn modulus(self) -> T {
        cabs(self)
    }
    #[inline]
    fn principal_sqrt(self) -> Complex<T> {
        csqrt(self)
    }
    #[inline]
    fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
    #[inline]
    fn is_negative_real(self) -> bool {
        self.im == T::zero() && self.re < T::zero()
    }
    #[inline]
    fn as_real(self) -> Option<T> {
        if self.im == T::zero() {
            Some(self.re)
        } else {
            None
        }
    }
    #[inline]
    fn has_real_sqrt(self) -> bool {
        true
    }
}

/// Reject non-finite arguments and, for real scalars, arguments without a
/// real square root.
pub(crate) fn check_arguments<S: CarlsonScalar>(args: &[S]) -> Result<(), Error> {
    if args.iter().all(|a| a.is_finite() && a.has_real_sqrt()) {
        Ok(())
    } else {
        Err(Error::DomainError)
    }
}

/// Number of exactly-zero arguments.
pub(crate) fn zero_count<S: CarlsonScalar>(args: &[S]) -> usize {
    args.iter().filter(|a| a.is_zero()).count()
}

/// Pass a finite result through; anything else is a domain error.
pub(crate) fn finite_result<S: CarlsonScalar>(value: S) -> Result<S, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::DomainError)
    }
}
