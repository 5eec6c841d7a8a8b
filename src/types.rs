//! Core types for Carlson integral computation.

use core::fmt;

use crate::machine::CarlsonFloat;

/// Default relative tolerance for R_F.
pub const DEFAULT_RTOL_RF: f64 = 3e-4;
/// Default relative tolerance for R_C.
pub const DEFAULT_RTOL_RC: f64 = 2e-4;
/// Default relative tolerance for R_J.
pub const DEFAULT_RTOL_RJ: f64 = 3e-4;
/// Default relative tolerance for R_D.
pub const DEFAULT_RTOL_RD: f64 = 3e-4;
/// Default cap on the number of duplication steps.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Convergence settings for a single evaluation.
///
/// `rtol` sets Carlson's error bound and therefore how many duplication
/// steps are taken before the series is truncated. Smaller values give
/// more accurate results at the price of a few more steps; values near
/// machine epsilon give full working precision.
///
/// `max_iterations` caps the duplication loop. Exceeding it yields
/// [`Error::ConvergenceFailure`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Convergence<T: CarlsonFloat> {
    /// Relative tolerance, must be finite and positive.
    pub rtol: T,
    /// Maximum number of duplication steps examined.
    pub max_iterations: u32,
}

impl<T: CarlsonFloat> Convergence<T> {
    /// Settings with the given tolerance and the default iteration cap.
    pub fn new(rtol: T) -> Self {
        Convergence {
            rtol,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Defaults used by [`elliprf`](crate::elliprf).
    pub fn rf() -> Self {
        Self::new(T::from_f64(DEFAULT_RTOL_RF))
    }

    /// Defaults used by [`elliprc`](crate::elliprc).
    pub fn rc() -> Self {
        Self::new(T::from_f64(DEFAULT_RTOL_RC))
    }

    /// Defaults used by [`elliprj`](crate::elliprj).
    pub fn rj() -> Self {
        Self::new(T::from_f64(DEFAULT_RTOL_RJ))
    }

    /// Defaults used by [`elliprd`](crate::elliprd).
    pub fn rd() -> Self {
        Self::new(T::from_f64(DEFAULT_RTOL_RD))
    }

    /// Tolerance at machine epsilon, for full working precision.
    pub fn full_precision() -> Self {
        Self::new(T::MACH_EPSILON)
    }

    /// Same settings with a different tolerance.
    pub fn with_rtol(self, rtol: T) -> Self {
        Convergence { rtol, ..self }
    }

    /// Same settings with a different iteration cap. A cap of 0 makes
    /// every evaluation fail with [`Error::ConvergenceFailure`].
    pub fn with_max_iterations(self, max_iterations: u32) -> Self {
        Convergence {
            max_iterations,
            ..self
        }
    }

    /// Reject tolerances that would make the error bound meaningless.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if !self.rtol.is_finite() || self.rtol <= T::zero() {
            return Err(Error::InvalidTolerance);
        }
        Ok(())
    }
}

/// Error type for Carlson integral computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// Relative tolerance is zero, negative or not finite.
    InvalidTolerance,
    /// Argument outside the integral's domain, a singular argument
    /// pattern, or a non-finite result.
    DomainError,
    /// Duplication did not reach the error bound within the iteration cap.
    ConvergenceFailure,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidTolerance => {
                write!(f, "invalid tolerance: rtol must be finite and positive")
            }
            Error::DomainError => {
                write!(f, "domain error: arguments outside the integral's domain")
            }
            Error::ConvergenceFailure => {
                write!(
                    f,
                    "convergence failure: error bound not met within the iteration cap"
                )
            }
        }
    }
}

impl core::error::Error for Error {}
