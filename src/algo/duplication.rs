//! Duplication-theorem iterate sequences.
//!
//! Each step replaces every argument `v` by `(v + λ)/4` with
//! `λ = √x·√y + √x·√z + √y·√z`. The sequences are infinite; the
//! convergence controller decides where to stop.
//!
//! Sums are formed from pre-scaled terms so arguments up to the largest
//! finite float never overflow. Scaling by a power of two is exact, so
//! for normal numbers the results are bit-identical to the plain formulas.

use crate::scalar::CarlsonScalar;

/// `A_0 = (x + y + z)/3` for the three-argument forms.
#[inline]
pub(crate) fn mean3<S: CarlsonScalar>(x: S, y: S, z: S) -> S {
    let q = S::from_f64(0.25);
    (x * q + y * q + z * q) / S::from_f64(0.75)
}

/// `A_0 = (x + y + z + 2p)/5` for the four-argument forms.
#[inline]
pub(crate) fn mean4<S: CarlsonScalar>(x: S, y: S, z: S, p: S) -> S {
    let e = S::from_f64(0.125);
    (x * e + y * e + z * e + p * e + p * e) / S::from_f64(0.625)
}

/// λ_m/4 from three independent principal roots.
///
/// `√x·√y` is used rather than `√(xy)`: the product of roots stays on the
/// correct branch for complex arguments, the root of the product does not.
#[inline]
pub(crate) fn quarter_lambda<S: CarlsonScalar>(x: S, y: S, z: S) -> S {
    let q = S::from_f64(0.25);
    let sx = x.principal_sqrt();
    let sy = y.principal_sqrt();
    let sz = z.principal_sqrt();
    sx * sy * q + sx * sz * q + sy * sz * q
}

/// `(v + λ)/4` given `λ/4`.
#[inline]
fn quarter<S: CarlsonScalar>(v: S, lam_q: S) -> S {
    v * S::from_f64(0.25) + lam_q
}

/// Iterates `A_0, A_1, …` for the three-argument forms (R_F, R_C).
///
/// `A_0 = (x + y + z)/3`. A_m is yielded before λ_m is evaluated, so the
/// m-th item pairs with index m.
#[derive(Debug, Clone)]
pub(crate) struct Duplication3<S> {
    x: S,
    y: S,
    z: S,
    a: S,
    started: bool,
}

impl<S: CarlsonScalar> Duplication3<S> {
    pub(crate) fn new(x: S, y: S, z: S) -> Self {
        Duplication3 {
            x,
            y,
            z,
            a: mean3(x, y, z),
            started: false,
        }
    }

    fn advance(&mut self) {
        let lam = quarter_lambda(self.x, self.y, self.z);
        self.a = quarter(self.a, lam);
        self.x = quarter(self.x, lam);
        self.y = quarter(self.y, lam);
        self.z = quarter(self.z, lam);
    }
}

impl<S: CarlsonScalar> Iterator for Duplication3<S> {
    type Item = S;

    fn next(&mut self) -> Option<S> {
        if self.started {
            self.advance();
        } else {
            self.started = true;
        }
        Some(self.a)
    }
}

/// Iterates `A_0, A_1, …` for the four-argument forms (R_J, R_D).
///
/// `A_0 = (x + y + z + 2p)/5`. `p` is carried along with the same
/// quarter-scaling but does not enter λ.
#[derive(Debug, Clone)]
pub(crate) struct Duplication4<S> {
    x: S,
    y: S,
    z: S,
    p: S,
    a: S,
    started: bool,
}

impl<S: CarlsonScalar> Duplication4<S> {
    pub(crate) fn new(x: S, y: S, z: S, p: S) -> Self {
        Duplication4 {
            x,
            y,
            z,
            p,
            a: mean4(x, y, z, p),
            started: false,
        }
    }

    fn advance(&mut self) {
        let lam = quarter_lambda(self.x, self.y, self.z);
        self.a = quarter(self.a, lam);
        self.x = quarter(self.x, lam);
        self.y = quarter(self.y, lam);
        self.z = quarter(self.z, lam);
        self.p = quarter(self.p, lam);
    }
}

impl<S: CarlsonScalar> Iterator for Duplication4<S> {
    type Item = S;

    fn next(&mut self) -> Option<S> {
        if self.started {
            self.advance();
        } else {
            self.started = true;
        }
        Some(self.a)
    }
}

/// Iterates `d_0, d_1, …` driving the R_C correction terms of R_J.
///
/// `d_m = (√p_m + √x_m)(√p_m + √y_m)(√p_m + √z_m)`, with the arguments
/// advanced exactly as in [`Duplication4`].
#[derive(Debug, Clone)]
pub(crate) struct CorrectionDenominators<S> {
    x: S,
    y: S,
    z: S,
    p: S,
    started: bool,
}

impl<S: CarlsonScalar> CorrectionDenominators<S> {
    pub(crate) fn new(x: S, y: S, z: S, p: S) -> Self {
        CorrectionDenominators {
            x,
            y,
            z,
            p,
            started: false,
        }
    }

    fn advance(&mut self) {
        let lam = quarter_lambda(self.x, self.y, self.z);
        self.x = quarter(self.x, lam);
        self.y = quarter(self.y, lam);
        self.z = quarter(self.z, lam);
        self.p = quarter(self.p, lam);
    }
}

impl<S: CarlsonScalar> Iterator for CorrectionDenominators<S> {
    type Item = S;

    fn next(&mut self) -> Option<S> {
        if self.started {
            self.advance();
        } else {
            self.started = true;
        }
        let sp = self.p.principal_sqrt();
        let d = (sp + self.x.principal_sqrt())
            * (sp + self.y.principal_sqrt())
            * (sp + self.z.principal_sqrt());
        Some(d)
    }
}
