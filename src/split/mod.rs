//! Proximal Splitting for Composite Objectives
//!
//! Minimization of a smooth _f_ plus one or two non-smooth terms that are
//! only available through their proximal operators:
//! - [`three_split`]: Davis-Yin splitting for $`f(x) + \alpha g(x) + \beta h(x)`$
//! - [`primal_dual`]: primal-dual splitting for $`f(x) + \alpha g(x) + \beta h(Lx)`$
//!
//! Both solvers are plain sequential loops. Reaching the iteration cap or
//! running out of backtracking trials is reported to a
//! [`Diagnostics`](crate::diagnostics::Diagnostics) sink and never aborts the
//! solve; only invalid options are returned as an error.

mod three_split;
pub use three_split::*;

mod primal_dual;
pub use primal_dual::*;

use ndarray::prelude::*;
use ndarray::NdFloat;

/// Do nothing observer
#[allow(clippy::needless_pass_by_value)]
pub fn nop<T>(_x: ArrayView1<T>, _itr: usize) {}

/// $`\|x\|_\infty`$, NaN if any entry is NaN.
pub(crate) fn inf_norm<S: NdFloat>(x: &Array1<S>) -> S {
    x.fold(S::zero(), |acc, &v| {
        let a = v.abs();
        if a > acc || a.is_nan() {
            a
        } else {
            acc
        }
    })
}

pub(crate) fn all_finite<S: NdFloat>(x: &Array1<S>) -> bool {
    x.iter().all(|v| v.is_finite())
}

pub(crate) fn to_metric<S: NdFloat>(v: S) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}
