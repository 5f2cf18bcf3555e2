//! A few common proximal operators

use super::Prox;
use ndarray::prelude::*;
use ndarray::NdFloat;

/// The $`\ell_1`$ norm, whose proximal operator is soft thresholding
///
/// ```math
/// \mathrm{prox}_{s\|\cdot\|_1}(v)_i = \mathrm{sign}(v_i) \max(|v_i| - s, 0)
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct L1Norm;

impl L1Norm {
    pub fn value<S: NdFloat>(&self, x: ArrayView1<S>) -> S {
        x.fold(S::zero(), |acc, &v| acc + v.abs())
    }
}

impl<S: NdFloat> Prox<S> for L1Norm {
    fn prox(&self, v: ArrayView1<S>, step: S) -> Array1<S> {
        v.mapv(|vi| {
            let shrunk = (vi.abs() - step).max(S::zero());
            if vi < S::zero() {
                -shrunk
            } else {
                shrunk
            }
        })
    }
}

/// Indicator of the box $`[l, u]^n`$, whose proximal operator is the
/// projection (clipping) onto it regardless of the step.
#[derive(Clone, Copy, Debug)]
pub struct BoxConstraint<S> {
    pub lower: S,
    pub upper: S,
}

impl<S: NdFloat> BoxConstraint<S> {
    pub fn new(lower: S, upper: S) -> Self {
        debug_assert!(lower <= upper);
        BoxConstraint { lower, upper }
    }

    pub fn contains(&self, x: ArrayView1<S>) -> bool {
        x.iter().all(|&v| v >= self.lower && v <= self.upper)
    }
}

impl<S: NdFloat> Prox<S> for BoxConstraint<S> {
    fn prox(&self, v: ArrayView1<S>, _step: S) -> Array1<S> {
        v.mapv(|vi| vi.max(self.lower).min(self.upper))
    }
}
