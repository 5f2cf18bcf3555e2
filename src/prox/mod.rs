//! Proximal operators for the non-smooth terms
//!
//! The proximal operator of a function $`\phi`$ with step $`s > 0`$ is
//! ```math
//! \mathrm{prox}_{s\phi}(v) = \mathrm{arg}\!\min_u \frac{1}{2s}\|u - v\|_2^2 + \phi(u)
//! ```
//! The solvers only ever see a non-smooth term through this map, so any type
//! implementing [`Prox`] can be plugged in. A projection is the proximal
//! operator of a constraint set, which is how constrained problems are
//! expressed. Parameters the operator needs besides $`v`$ and $`s`$ are
//! captured when it is built.

mod ops;
pub use ops::*;

use ndarray::prelude::*;
use ndarray::NdFloat;

/// Proximal map `prox(v, s)` of a (possibly non-smooth) term.
pub trait Prox<S> {
    /// Returns a new vector of the same dimension as `v`.
    fn prox(&self, v: ArrayView1<S>, step: S) -> Array1<S>;
}

impl<'a, S, P: Prox<S> + ?Sized> Prox<S> for &'a P {
    #[inline]
    fn prox(&self, v: ArrayView1<S>, step: S) -> Array1<S> {
        (**self).prox(v, step)
    }
}

/// The proximal operator of the zero function, i.e. "no term at all".
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityProx;

impl<S: NdFloat> Prox<S> for IdentityProx {
    #[inline]
    fn prox(&self, v: ArrayView1<S>, _step: S) -> Array1<S> {
        v.to_owned()
    }
}

/// A [`Prox`] backed by a closure, see [`prox_fn`].
#[derive(Clone, Copy, Debug)]
pub struct ProxFn<F>(F);

/// Wrap a closure `(v, step) -> prox` as a [`Prox`].
pub fn prox_fn<S, F>(f: F) -> ProxFn<F>
where
    F: Fn(ArrayView1<S>, S) -> Array1<S>,
{
    ProxFn(f)
}

impl<S, F> Prox<S> for ProxFn<F>
where
    F: Fn(ArrayView1<S>, S) -> Array1<S>,
{
    #[inline]
    fn prox(&self, v: ArrayView1<S>, step: S) -> Array1<S> {
        (self.0)(v, step)
    }
}

/// Proximal operator of the convex conjugate $`(\beta h)^*`$
///
/// Derived from the proximal operator of $`h`$ through Moreau's identity
/// ```math
/// \mathrm{prox}_{s(\beta h)^*}(v) = v - s\,\mathrm{prox}_{(\beta/s) h}(v / s)
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ConjugateProx<'a, P, S> {
    prox: &'a P,
    beta: S,
}

impl<'a, P, S> ConjugateProx<'a, P, S> {
    pub fn new(prox: &'a P, beta: S) -> Self {
        ConjugateProx { prox, beta }
    }
}

impl<'a, P, S> Prox<S> for ConjugateProx<'a, P, S>
where
    P: Prox<S>,
    S: NdFloat,
{
    fn prox(&self, v: ArrayView1<S>, step: S) -> Array1<S> {
        let inner = self.prox.prox((&v / step).view(), self.beta / step);
        &v - &(inner * step)
    }
}
