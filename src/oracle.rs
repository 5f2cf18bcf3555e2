//! Smooth objective oracles

use ndarray::prelude::*;

/// Value and gradient of the smooth term _f_.
///
/// The solvers trust that `gradient` really is the derivative of `value`;
/// this is never checked.
pub trait Objective<S> {
    fn value(&self, x: ArrayView1<S>) -> S;
    fn gradient(&self, x: ArrayView1<S>) -> Array1<S>;
}

/// An [`Objective`] built from a pair of closures, see [`objective`].
#[derive(Clone, Copy, Debug)]
pub struct FnObjective<F, G> {
    f: F,
    f_prime: G,
}

/// Build an [`Objective`] from a value closure and a gradient closure.
pub fn objective<S, F, G>(f: F, f_prime: G) -> FnObjective<F, G>
where
    F: Fn(ArrayView1<S>) -> S,
    G: Fn(ArrayView1<S>) -> Array1<S>,
{
    FnObjective { f, f_prime }
}

impl<S, F, G> Objective<S> for FnObjective<F, G>
where
    F: Fn(ArrayView1<S>) -> S,
    G: Fn(ArrayView1<S>) -> Array1<S>,
{
    #[inline]
    fn value(&self, x: ArrayView1<S>) -> S {
        (self.f)(x)
    }

    #[inline]
    fn gradient(&self, x: ArrayView1<S>) -> Array1<S> {
        (self.f_prime)(x)
    }
}

impl<'a, S, O: Objective<S> + ?Sized> Objective<S> for &'a O {
    fn value(&self, x: ArrayView1<S>) -> S {
        (**self).value(x)
    }

    fn gradient(&self, x: ArrayView1<S>) -> Array1<S> {
        (**self).gradient(x)
    }
}
