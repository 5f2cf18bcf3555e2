//! Linear operators and their adjoints
//!
//! Forward application comes from `ndarray_linalg::operator::LinearOperator`;
//! the primal-dual solver additionally needs $`L^T`$, provided here by the
//! [`Adjoint`] trait.

use std::marker::PhantomData;

use ndarray::prelude::*;
use ndarray::{Data, DataMut, NdFloat, ViewRepr};
pub use ndarray_linalg::operator::LinearOperator;
use ndarray_linalg::Scalar;

/// Access to the adjoint (transpose, for real scalars) of an operator.
pub trait Adjoint<'a> {
    type Output;
    fn adj(&'a self) -> Self::Output;
}

impl<'a, A, S> Adjoint<'a> for ArrayBase<S, Ix2>
where
    A: 'a,
    S: Data<Elem = A>,
{
    type Output = ArrayView<'a, A, Ix2>;

    fn adj(&'a self) -> Self::Output {
        self.t()
    }
}

/// A diagonal matrix stored as its diagonal. Self-adjoint; the adjoint
/// borrows the same entries.
pub struct Diagonal<S: Data> {
    diag: ArrayBase<S, Ix1>,
}

impl<A, S: Data<Elem = A>> Diagonal<S> {
    pub fn new(diag: ArrayBase<S, Ix1>) -> Self {
        Diagonal { diag }
    }

    pub fn diag(&self) -> ArrayView1<'_, A> {
        self.diag.view()
    }
}

impl<A, Sd> LinearOperator for Diagonal<Sd>
where
    A: NdFloat + Scalar,
    Sd: Data<Elem = A>,
{
    type Elem = A;

    #[inline]
    fn apply<S>(&self, a: &ArrayBase<S, Ix1>) -> Array1<S::Elem>
    where
        S: Data<Elem = Self::Elem>,
    {
        a * &self.diag
    }

    #[inline]
    fn apply_mut<S>(&self, a: &mut ArrayBase<S, Ix1>)
    where
        S: DataMut<Elem = Self::Elem>,
    {
        *a *= &self.diag;
    }
}

impl<'a, A, S> Adjoint<'a> for Diagonal<S>
where
    A: 'a,
    S: Data<Elem = A>,
{
    type Output = Diagonal<ViewRepr<&'a A>>;

    fn adj(&'a self) -> Self::Output {
        Diagonal::new(self.diag.view())
    }
}

/// The identity map on any dimension.
#[derive(Default)]
pub struct Identity<A> {
    phantom: PhantomData<*const A>,
}

impl<A> Identity<A> {
    #[must_use]
    pub fn new() -> Identity<A> {
        Identity {
            phantom: PhantomData,
        }
    }
}

impl<A> LinearOperator for Identity<A>
where
    A: NdFloat + Scalar,
{
    type Elem = A;

    #[inline]
    fn apply<S>(&self, a: &ArrayBase<S, Ix1>) -> Array1<S::Elem>
    where
        S: Data<Elem = Self::Elem>,
    {
        a.to_owned()
    }

    #[inline]
    fn apply_mut<S>(&self, _a: &mut ArrayBase<S, Ix1>)
    where
        S: DataMut<Elem = Self::Elem>,
    {
    }
}

impl<'a, A> Adjoint<'a> for Identity<A> {
    type Output = Identity<A>;

    fn adj(&'a self) -> Self::Output {
        Identity::new()
    }
}

/// A scalar multiple of the identity, $`cI`$. Self-adjoint.
#[derive(Clone, Copy, Debug)]
pub struct ScaledIdentity<A> {
    pub scale: A,
}

impl<A> ScaledIdentity<A> {
    pub fn new(scale: A) -> Self {
        ScaledIdentity { scale }
    }
}

impl<A> LinearOperator for ScaledIdentity<A>
where
    A: NdFloat + Scalar,
{
    type Elem = A;

    #[inline]
    fn apply<S>(&self, a: &ArrayBase<S, Ix1>) -> Array1<S::Elem>
    where
        S: Data<Elem = Self::Elem>,
    {
        a.mapv(|v| v * self.scale)
    }

    #[inline]
    fn apply_mut<S>(&self, a: &mut ArrayBase<S, Ix1>)
    where
        S: DataMut<Elem = Self::Elem>,
    {
        let scale = self.scale;
        a.mapv_inplace(|v| v * scale);
    }
}

impl<'a, A: Copy> Adjoint<'a> for ScaledIdentity<A> {
    type Output = ScaledIdentity<A>;

    fn adj(&'a self) -> Self::Output {
        *self
    }
}
