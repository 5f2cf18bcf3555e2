//! Primal-Dual Splitting
//!
//! __Experimental.__ The iteration runs with fixed step sizes and has no
//! safeguard: step sizes that are too large make it diverge.

#![allow(non_snake_case)]

use super::{all_finite, to_metric};
use crate::diagnostics::{Diagnostics, LogSink, Warning};
use crate::error::{invalid, SplitResult};
use crate::linop::{Adjoint, LinearOperator};
use crate::oracle::Objective;
use crate::prox::{ConjugateProx, Prox};
use ndarray::prelude::*;
use ndarray::NdFloat;
use ndarray_linalg::Scalar;
use num_traits::Float;

const SOLVER: &str = "primal_dual";

/// Options for [`primal_dual`]
#[derive(Clone, Debug)]
pub struct PrimalDualOptions<S> {
    /// weight of _g_
    pub alpha: S,
    /// weight of _h_
    pub beta: S,
    /// stop once $`\|x_{k+1} - x_k\|^2 + \|y_{k+1} - y_k\|^2 < \mathrm{tol}`$
    pub tol: S,
    pub max_iter: usize,
    /// primal step size $`\tau`$
    pub step_size_x: S,
    /// dual step size $`\sigma`$
    pub step_size_y: S,
    /// must be positive; reserved, no line search is performed
    pub max_iter_ls: usize,
    /// `0` is silent, `>= 1` reports every iteration to the sink
    pub verbose: u8,
    /// stop early if the increment stops being finite
    pub check_finite: bool,
}

impl<S: NdFloat> Default for PrimalDualOptions<S> {
    fn default() -> Self {
        PrimalDualOptions {
            alpha: S::one(),
            beta: S::one(),
            tol: S::from(1e-12).unwrap(),
            max_iter: 10000,
            step_size_x: S::from(1e-3).unwrap(),
            step_size_y: S::from(1e3).unwrap(),
            max_iter_ls: 20,
            verbose: 0,
            check_finite: false,
        }
    }
}

impl<S: NdFloat> PrimalDualOptions<S> {
    pub fn validate(&self) -> SplitResult<()> {
        if self.max_iter_ls == 0 {
            return invalid("Line search iterations need to be greater than 0");
        }
        if self.max_iter == 0 {
            return invalid("max_iter needs to be greater than 0");
        }
        if !(self.step_size_x > S::zero() && self.step_size_y > S::zero()) {
            return invalid("step sizes need to be positive");
        }
        if !(self.tol > S::zero()) {
            return invalid("tol needs to be positive");
        }
        Ok(())
    }
}

/// Result of [`primal_dual`]
#[derive(Clone, Debug)]
pub struct PrimalDualResult<S> {
    /// final primal iterate
    pub x: Array1<S>,
    /// final dual iterate, same dimension as $`Lx`$
    pub y: Array1<S>,
    pub success: bool,
    /// number of iterations performed
    pub nit: usize,
}

/// Primal-Dual Splitting
///
/// Minimizes $`f(x) + \alpha g(x) + \beta h(Lx)`$ for a smooth _f_, proximable
/// _g_, _h_ and a linear operator _L_ [\[CP16\]](#references). The proximal
/// operator of the conjugate $`(\beta h)^*`$ is obtained from `h_prox` by
/// Moreau's identity, see [`ConjugateProx`].
///
/// Algorithm
/// ---------
/// ```math
/// \begin{aligned}
/// y_0 &= L x_0 \\
/// x_{k+1} &= \mathrm{prox}_{\tau\alpha g}(x_k - \tau \nabla f(x_k) - \tau L^T y_k) \\
/// y_{k+1} &= \mathrm{prox}_{\sigma (\beta h)^*}(y_k + \sigma L(2x_{k+1} - x_k))
/// \end{aligned}
/// ```
/// with fixed $`\tau`$ = `step_size_x` and $`\sigma`$ = `step_size_y`.
/// Convergence requires roughly $`\tau\sigma\|L\|^2 < 1`$ and $`\tau`$ small
/// relative to the Lipschitz constant of $`\nabla f`$; nothing here checks
/// or enforces it.
///
/// Parameters
/// ----------
/// - __f:__         value and gradient of the smooth term
/// - __g_prox:__    proximal operator of _g_
/// - __h_prox:__    proximal operator of _h_
/// - __L:__         linear operator inside _h_
/// - __x0:__        initial guess
/// - __options:__   see [`PrimalDualOptions`]
/// - __callback:__  user-defined function evaluated with $`(x_{k+1}, k)`$ after every iteration
///
/// References
/// ----------
/// \[CP16\]: [ Chambolle A, Pock T,
///             "On the ergodic convergence rates of a first-order primal-dual algorithm",
///             Mathematical Programming, 2016 ](https://doi.org/10.1007/s10107-015-0957-3)
pub fn primal_dual<'b, S, F, G, H, R, Q>(
    f: &F,
    g_prox: &G,
    h_prox: &H,
    L: &'b R,
    x0: ArrayView1<S>,
    options: &PrimalDualOptions<S>,
    callback: impl FnMut(ArrayView1<S>, usize),
) -> SplitResult<PrimalDualResult<S>>
where
    S: NdFloat + Scalar,
    F: Objective<S>,
    G: Prox<S>,
    H: Prox<S>,
    R: 'b + LinearOperator<Elem = S> + Adjoint<'b, Output = Q>,
    Q: LinearOperator<Elem = S>,
{
    primal_dual_with_sink(f, g_prox, h_prox, L, x0, options, callback, LogSink)
}

/// [`primal_dual`] reporting to a caller-provided [`Diagnostics`] sink.
#[allow(clippy::too_many_arguments)]
pub fn primal_dual_with_sink<'b, S, F, G, H, R, Q>(
    f: &F,
    g_prox: &G,
    h_prox: &H,
    L: &'b R,
    x0: ArrayView1<S>,
    options: &PrimalDualOptions<S>,
    mut callback: impl FnMut(ArrayView1<S>, usize),
    mut sink: impl Diagnostics,
) -> SplitResult<PrimalDualResult<S>>
where
    S: NdFloat + Scalar,
    F: Objective<S>,
    G: Prox<S>,
    H: Prox<S>,
    R: 'b + LinearOperator<Elem = S> + Adjoint<'b, Output = Q>,
    Q: LinearOperator<Elem = S>,
{
    options.validate()?;
    let PrimalDualOptions {
        alpha,
        beta,
        tol,
        max_iter,
        step_size_x,
        step_size_y,
        verbose,
        check_finite,
        ..
    } = *options;
    let two = S::one() + S::one();

    let Lt = L.adj();
    let h_conj = ConjugateProx::new(h_prox, beta);

    let mut x = x0.to_owned();
    let mut y = L.apply(&x);
    let mut success = false;
    let mut diverged = false;
    let mut nit = 0;

    for iter in 1..=max_iter {
        nit = iter;
        let grad = f.gradient(x.view());
        let forward = &x - &(grad * step_size_x) - &(Lt.apply(&y) * step_size_x);
        let x_next = g_prox.prox(forward.view(), step_size_x * alpha);

        let extrapolated = &x_next * two - &x;
        let ascent = &y + &(L.apply(&extrapolated) * step_size_y);
        let y_next = h_conj.prox(ascent.view(), step_size_y);

        let dx = &x_next - &x;
        let dy = &y_next - &y;
        let incr = dx.dot(&dx) + dy.dot(&dy);

        if check_finite && !(Float::is_finite(incr) && all_finite(&x_next)) {
            sink.warning(Warning::Diverged {
                solver: SOLVER,
                iteration: iter,
            });
            diverged = true;
            break;
        }
        x = x_next;
        y = y_next;

        if verbose > 0 {
            sink.progress(SOLVER, iter, to_metric(incr));
        }

        callback(x.view(), iter);

        if incr < tol {
            success = true;
            if verbose > 0 {
                sink.converged(SOLVER, iter);
            }
            break;
        }
    }

    if !success && !diverged {
        sink.warning(Warning::NonConvergence {
            solver: SOLVER,
            iterations: nit,
        });
    }

    Ok(PrimalDualResult { x, y, success, nit })
}
