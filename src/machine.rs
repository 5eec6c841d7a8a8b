//! Machine constants and the `CarlsonFloat` trait.

use num_traits::Float;

/// Floating-point trait for Carlson integral computation.
///
/// Implemented for `f64` and `f32`. Provides the machine constants
/// and literal conversion used by the duplication algorithm.
pub trait CarlsonFloat: Float + core::fmt::Debug + 'static {
    /// Machine epsilon.
    const MACH_EPSILON: Self;
    /// Largest representable number.
    const MACH_HUGE: Self;

    /// Infallible conversion from f64.
    ///
    /// For f64 this is the identity; for f32 it rounds via `as f32`.
    /// All series coefficients originate as f64 literals.
    fn from_f64(x: f64) -> Self;
}

impl CarlsonFloat for f64 {
    const MACH_EPSILON: f64 = 2.220446049250313e-16;
    const MACH_HUGE: f64 = 1.7976931348623157e+308;

    #[inline]
    fn from_f64(x: f64) -> f64 {
        x
    }
}

impl CarlsonFloat for f32 {
    const MACH_EPSILON: f32 = 1.1920929e-7;
    const MACH_HUGE: f32 = 3.4028235e+38;

    #[inline]
    fn from_f64(x: f64) -> f32 {
        x as f32
    }
}
