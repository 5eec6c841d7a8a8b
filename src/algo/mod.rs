//! Internal algorithm modules for Carlson integral computation.
//!
//! These modules implement Carlson's duplication algorithm
//! (arXiv:math/9409227). All items are `pub(crate)`; the public surface
//! lives in the crate root.
//!
//! Data flow for one evaluation:
//! duplication sequence → truncation at the error bound → normalized
//! deviations → truncated series, plus (R_J only) the R_C correction sum
//! driven by its own denominator sequence.

pub(crate) mod constants;
pub(crate) mod convergence;
pub(crate) mod correction;
pub(crate) mod duplication;
pub(crate) mod series;
