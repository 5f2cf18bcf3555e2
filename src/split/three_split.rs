//! Davis-Yin Three Operator Splitting

use super::{all_finite, inf_norm, to_metric};
use crate::diagnostics::{Diagnostics, LogSink, Warning};
use crate::error::{invalid, SplitResult};
use crate::oracle::Objective;
use crate::prox::Prox;
use ndarray::prelude::*;
use ndarray::NdFloat;

const SOLVER: &str = "three_split";

/// Options for [`three_split`]
#[derive(Clone, Debug)]
pub struct ThreeSplitOptions<S> {
    /// weight of _g_
    pub alpha: S,
    /// weight of _h_
    pub beta: S,
    /// stop once $`\|z - x_k\|_\infty < \mathrm{tol} \cdot \mathrm{step}`$
    pub tol: S,
    pub max_iter: usize,
    /// initial step size, restored at the start of every iteration
    pub step_size: S,
    /// shrink the step until a sufficient-decrease condition holds
    pub backtracking: bool,
    /// shrink factor in (0, 1)
    pub backtracking_factor: S,
    /// trials per backtracking search, must be positive
    pub max_iter_backtracking: usize,
    /// `0` is silent, `>= 1` reports every iteration to the sink
    pub verbose: u8,
    /// stop early if the increment stops being finite
    pub check_finite: bool,
}

impl<S: NdFloat> Default for ThreeSplitOptions<S> {
    fn default() -> Self {
        ThreeSplitOptions {
            alpha: S::one(),
            beta: S::one(),
            tol: S::from(1e-6).unwrap(),
            max_iter: 1000,
            step_size: S::one(),
            backtracking: true,
            backtracking_factor: S::from(0.4).unwrap(),
            max_iter_backtracking: 100,
            verbose: 0,
            check_finite: false,
        }
    }
}

impl<S: NdFloat> ThreeSplitOptions<S> {
    pub fn validate(&self) -> SplitResult<()> {
        if self.max_iter_backtracking == 0 {
            return invalid("Line search iterations need to be greater than 0");
        }
        if self.max_iter == 0 {
            return invalid("max_iter needs to be greater than 0");
        }
        if !(self.step_size > S::zero()) {
            return invalid("step_size needs to be positive");
        }
        if !(self.tol > S::zero()) {
            return invalid("tol needs to be positive");
        }
        if !(self.backtracking_factor > S::zero() && self.backtracking_factor < S::one()) {
            return invalid("backtracking_factor needs to lie in (0, 1)");
        }
        Ok(())
    }
}

/// Result of [`three_split`]
#[derive(Clone, Debug)]
pub struct ThreeSplitResult<S> {
    /// last proximal anchor $`x_k = \mathrm{prox}_{g}(y_k)`$, the solution estimate
    pub x: Array1<S>,
    /// final fixed-point variable $`y`$
    pub y: Array1<S>,
    pub success: bool,
    /// prox-grad mapping $`(z - x_k) / \mathrm{step}`$ of the last iteration
    pub residual: Array1<S>,
    /// step size used in the last iteration
    pub step_size: S,
    /// number of iterations performed
    pub nit: usize,
}

/// A trial point of the backtracking search.
#[derive(Clone, Debug)]
pub(crate) struct Candidate<S> {
    pub z: Array1<S>,
    pub incr: Array1<S>,
    pub step: S,
}

impl<S: NdFloat> Candidate<S> {
    /// $`z = \mathrm{prox}_{h}(2x - y - \mathrm{step}\,\nabla f(x), \mathrm{step}\,\beta)`$,
    /// with `reflected` $`= 2x - y`$
    pub fn new(
        h_prox: &impl Prox<S>,
        x: &Array1<S>,
        reflected: &Array1<S>,
        grad: &Array1<S>,
        step: S,
        beta: S,
    ) -> Self {
        let z = h_prox.prox((reflected - &(grad * step)).view(), step * beta);
        let incr = &z - x;
        Candidate { z, incr, step }
    }
}

/// Quadratic upper bound test
/// ```math
/// f(z) \leq f(x) + \langle \nabla f(x), z - x \rangle + \frac{1}{2\,\mathrm{step}}\|z - x\|_2^2
/// ```
pub(crate) fn sufficient_decrease<S: NdFloat>(
    fz: S,
    fx: S,
    grad: &Array1<S>,
    incr: &Array1<S>,
    step: S,
) -> bool {
    let two = S::one() + S::one();
    fz <= fx + grad.dot(incr) + incr.dot(incr) / (two * step)
}

/// Shrink the step of `candidate` until [`sufficient_decrease`] holds.
///
/// The anchor `x` is kept fixed, only _z_ is recomputed. Performs at most
/// `max_iter` tests; the returned flag is false if none of them passed, in
/// which case the last (untested) candidate is returned.
#[allow(clippy::too_many_arguments)]
pub(crate) fn backtrack<S, F, H>(
    f: &F,
    h_prox: &H,
    x: &Array1<S>,
    reflected: &Array1<S>,
    grad: &Array1<S>,
    beta: S,
    factor: S,
    max_iter: usize,
    mut candidate: Candidate<S>,
) -> (Candidate<S>, bool)
where
    S: NdFloat,
    F: Objective<S>,
    H: Prox<S>,
{
    let fx = f.value(x.view());
    for _ in 0..max_iter {
        let fz = f.value(candidate.z.view());
        if sufficient_decrease(fz, fx, grad, &candidate.incr, candidate.step) {
            return (candidate, true);
        }
        let step = candidate.step * factor;
        candidate = Candidate::new(h_prox, x, reflected, grad, step, beta);
    }
    (candidate, false)
}

/// Davis-Yin Three Operator Splitting
///
/// Minimizes $`f(x) + \alpha g(x) + \beta h(x)`$ for a smooth _f_ and
/// proximable _g_, _h_ [\[DY17\]](#references). Pass
/// [`IdentityProx`](crate::prox::IdentityProx) for a term that is absent.
///
/// Algorithm
/// ---------
/// ```math
/// \begin{aligned}
/// x_k &= \mathrm{prox}_{\gamma\alpha g}(y_k) \\
/// z_k &= \mathrm{prox}_{\gamma\beta h}(2x_k - y_k - \gamma \nabla f(x_k)) \\
/// y_{k+1} &= y_k + z_k - x_k
/// \end{aligned}
/// ```
/// With backtracking, $`\gamma`$ starts at `step_size` each iteration and is
/// multiplied by `backtracking_factor` until
/// $`f(z_k) \leq f(x_k) + \langle \nabla f(x_k), z_k - x_k\rangle + \|z_k - x_k\|^2 / 2\gamma`$.
///
/// Parameters
/// ----------
/// - __f:__         value and gradient of the smooth term
/// - __g_prox:__    proximal operator of _g_
/// - __h_prox:__    proximal operator of _h_
/// - __y0:__        initial guess
/// - __options:__   see [`ThreeSplitOptions`]
/// - __callback:__  user-defined function evaluated with $`(x_k, k)`$ after every
///                   iteration that did not meet the tolerance
///
/// Returns `Err` only for invalid options, before any oracle is called.
/// Hitting `max_iter` yields `success == false` and a
/// [`Warning::NonConvergence`] on the log.
///
/// References
/// ----------
/// \[DY17\]: [ Davis D, Yin W,
///             "A three-operator splitting scheme and its optimization applications",
///             Set-Valued and Variational Analysis, 2017 ](https://arxiv.org/abs/1504.01032)
pub fn three_split<S, F, G, H>(
    f: &F,
    g_prox: &G,
    h_prox: &H,
    y0: ArrayView1<S>,
    options: &ThreeSplitOptions<S>,
    callback: impl FnMut(ArrayView1<S>, usize),
) -> SplitResult<ThreeSplitResult<S>>
where
    S: NdFloat,
    F: Objective<S>,
    G: Prox<S>,
    H: Prox<S>,
{
    three_split_with_sink(f, g_prox, h_prox, y0, options, callback, LogSink)
}

/// [`three_split`] reporting to a caller-provided [`Diagnostics`] sink.
pub fn three_split_with_sink<S, F, G, H>(
    f: &F,
    g_prox: &G,
    h_prox: &H,
    y0: ArrayView1<S>,
    options: &ThreeSplitOptions<S>,
    mut callback: impl FnMut(ArrayView1<S>, usize),
    mut sink: impl Diagnostics,
) -> SplitResult<ThreeSplitResult<S>>
where
    S: NdFloat,
    F: Objective<S>,
    G: Prox<S>,
    H: Prox<S>,
{
    options.validate()?;
    let ThreeSplitOptions {
        alpha,
        beta,
        tol,
        max_iter,
        step_size,
        backtracking,
        backtracking_factor,
        max_iter_backtracking,
        verbose,
        check_finite,
    } = *options;
    let two = S::one() + S::one();

    let mut y = y0.to_owned();
    let mut x = y.to_owned();
    let mut incr = Array1::zeros(y.raw_dim());
    let mut step = step_size;
    let mut success = false;
    let mut diverged = false;
    let mut nit = 0;

    for iter in 1..=max_iter {
        nit = iter;
        step = step_size;
        x = g_prox.prox(y.view(), step * alpha);
        let grad = f.gradient(x.view());
        let reflected = &x * two - &y;
        let mut candidate = Candidate::new(h_prox, &x, &reflected, &grad, step, beta);

        if backtracking {
            let (found, accepted) = backtrack(
                f,
                h_prox,
                &x,
                &reflected,
                &grad,
                beta,
                backtracking_factor,
                max_iter_backtracking,
                candidate,
            );
            if !accepted {
                sink.warning(Warning::LineSearchExhausted { iteration: iter });
            }
            candidate = found;
        }
        step = candidate.step;
        incr = candidate.incr;

        if check_finite && !all_finite(&incr) {
            sink.warning(Warning::Diverged {
                solver: SOLVER,
                iteration: iter,
            });
            diverged = true;
            break;
        }
        y += &incr;

        let norm_incr = inf_norm(&incr);
        if verbose > 0 {
            sink.progress(SOLVER, iter, to_metric(norm_incr / step));
        }

        if norm_incr < tol * step {
            success = true;
            if verbose > 0 {
                sink.converged(SOLVER, iter);
            }
            break;
        }

        callback(x.view(), iter);
    }

    if !success && !diverged {
        sink.warning(Warning::NonConvergence {
            solver: SOLVER,
            iterations: nit,
        });
    }

    Ok(ThreeSplitResult {
        residual: &incr / step,
        x,
        y,
        success,
        step_size: step,
        nit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{Recorder, Silent};
    use crate::oracle::objective;
    use crate::prox::{prox_fn, BoxConstraint, IdentityProx, L1Norm};
    use crate::split::nop;
    use approx::assert_abs_diff_eq;
    use ndarray_rand::rand::rngs::StdRng;
    use ndarray_rand::rand::SeedableRng;
    use ndarray_rand::rand_distr::Uniform;
    use ndarray_rand::RandomExt;
    use std::cell::Cell;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn soft_threshold_scenario() {
        let f = objective(
            |x: ArrayView1<f64>| 0.5 * x.dot(&x),
            |x: ArrayView1<f64>| x.to_owned(),
        );
        let x0 = array![5., -5.];
        let options = ThreeSplitOptions {
            tol: 1e-8,
            max_iter: 200,
            step_size: 1.,
            ..Default::default()
        };
        let res = three_split(&f, &L1Norm, &IdentityProx, x0.view(), &options, nop).unwrap();
        assert!(res.success);
        assert_abs_diff_eq!(res.x, array![0., 0.], epsilon = 1e-8);
        assert_abs_diff_eq!(res.y, array![0., 0.], epsilon = 1e-8);
        assert!(res.nit <= 200);
    }

    #[test]
    fn identity_prox_is_gradient_descent() {
        let c = array![1., -2., 0.5];
        let f = objective(
            |x: ArrayView1<f64>| (&x - &c).mapv(|v| v * v).sum(),
            |x: ArrayView1<f64>| (&x - &c) * 2.,
        );
        let step = 0.1;
        let x0 = array![4., 4., -3.];
        let options = ThreeSplitOptions {
            step_size: step,
            backtracking: false,
            tol: 1e-300,
            max_iter: 25,
            ..Default::default()
        };

        let mut reference = x0.clone();
        let mut seen = 0;
        let res = three_split_with_sink(
            &f,
            &IdentityProx,
            &IdentityProx,
            x0.view(),
            &options,
            |x, iter| {
                seen += 1;
                assert_eq!(iter, seen);
                // observer sees x_k, i.e. the iterate before this step
                assert_abs_diff_eq!(x, reference.view(), epsilon = 1e-12);
                reference = &reference - &((&reference - &c) * (2. * step));
            },
            Silent,
        )
        .unwrap();
        assert!(!res.success);
        assert_eq!(res.nit, 25);
        assert_abs_diff_eq!(res.y, reference, epsilon = 1e-12);
    }

    #[test]
    fn box_constrained_least_squares() {
        const N: usize = 10;
        let d = Array1::linspace(0.2, 1., N);
        let c = Array1::linspace(-3., 3., N);
        let f = objective(
            |x: ArrayView1<f64>| 0.5 * (&d * &(&x - &c).mapv(|v| v * v)).sum(),
            |x: ArrayView1<f64>| &d * &(&x - &c),
        );
        let constraint = BoxConstraint::new(-1., 1.);
        let options = ThreeSplitOptions {
            tol: 1e-6,
            max_iter: 1000,
            ..Default::default()
        };
        let res = three_split(
            &f,
            &constraint,
            &IdentityProx,
            Array1::<f64>::zeros(N).view(),
            &options,
            nop,
        )
        .unwrap();
        assert!(res.success);
        let expected = c.mapv(|v: f64| v.max(-1.).min(1.));
        // |x_k - x*| <= |incr| / min(d) on the free coordinates
        assert_abs_diff_eq!(res.x, expected, epsilon = 1e-5);
        assert!(constraint.contains(res.x.view()));
    }

    #[test]
    fn tighter_tolerance_never_worse() {
        let d = array![0.9, 0.5, 0.8, 0.3, 0.6];
        let c = array![2., -0.4, 0.1, -3., 1.2];
        let f = objective(
            |x: ArrayView1<f64>| 0.5 * (&d * &(&x - &c).mapv(|v| v * v)).sum(),
            |x: ArrayView1<f64>| &d * &(&x - &c),
        );
        let alpha = 0.3;
        let total = |x: ArrayView1<f64>| f.value(x) + alpha * L1Norm.value(x);
        let x0 = array![10., 10., -10., 10., 0.];

        let mut last = f64::INFINITY;
        for &tol in &[1e-2, 1e-3, 1e-4, 1e-5, 1e-6, 1e-7] {
            let options = ThreeSplitOptions {
                alpha,
                tol,
                max_iter: 100_000,
                step_size: 1.,
                backtracking: false,
                ..Default::default()
            };
            let res = three_split_with_sink(
                &f,
                &L1Norm,
                &IdentityProx,
                x0.view(),
                &options,
                nop,
                Silent,
            )
            .unwrap();
            assert!(res.success);
            let value = total(res.x.view());
            assert!(value <= last + 1e-12, "{} > {}", value, last);
            last = value;
        }
    }

    #[test]
    fn invalid_configuration_before_any_oracle_call() {
        let calls = Cell::new(0);
        let f = objective(
            |x: ArrayView1<f64>| {
                calls.set(calls.get() + 1);
                x.sum()
            },
            |x: ArrayView1<f64>| {
                calls.set(calls.get() + 1);
                x.to_owned()
            },
        );
        let g = prox_fn(|v: ArrayView1<f64>, _s: f64| {
            calls.set(calls.get() + 1);
            v.to_owned()
        });
        let options = ThreeSplitOptions {
            max_iter_backtracking: 0,
            ..Default::default()
        };
        let mut observed = 0;
        let err = three_split(&f, &g, &g, array![1.].view(), &options, |_, _| observed += 1)
            .unwrap_err();
        assert!(matches!(err, crate::SplitError::InvalidConfiguration(_)));
        assert_eq!(calls.get(), 0);
        assert_eq!(observed, 0);

        for options in vec![
            ThreeSplitOptions {
                max_iter: 0,
                ..Default::default()
            },
            ThreeSplitOptions {
                step_size: 0.,
                ..Default::default()
            },
            ThreeSplitOptions {
                backtracking_factor: 1.,
                ..Default::default()
            },
            ThreeSplitOptions {
                tol: f64::NAN,
                ..Default::default()
            },
        ] {
            assert!(options.validate().is_err());
        }
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn accepted_steps_satisfy_sufficient_decrease() {
        // badly scaled quadratic, the initial step is far too large
        let d = array![50., 1., 0.01, 20.];
        let f = objective(
            |x: ArrayView1<f64>| 0.5 * (&d * &x.mapv(|v| v * v)).sum(),
            |x: ArrayView1<f64>| &d * &x,
        );
        let h = L1Norm;
        let beta = 0.1;
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let x = Array1::random_using(4, Uniform::new(-5., 5.), &mut rng);
            let y = Array1::random_using(4, Uniform::new(-5., 5.), &mut rng);
            let grad = f.gradient(x.view());
            let reflected = &x * 2. - &y;
            let start = Candidate::new(&h, &x, &reflected, &grad, 1., beta);
            let (accepted, ok) = backtrack(&f, &h, &x, &reflected, &grad, beta, 0.4, 100, start);
            assert!(ok);
            assert!(accepted.step > 0. && accepted.step <= 1.);
            let rhs = f.value(x.view())
                + grad.dot(&accepted.incr)
                + accepted.incr.dot(&accepted.incr) / (2. * accepted.step);
            assert!(f.value(accepted.z.view()) <= rhs);
            // the accepted candidate is consistent with its step
            let again = Candidate::new(&h, &x, &reflected, &grad, accepted.step, beta);
            assert_abs_diff_eq!(again.z, accepted.z);
        }
    }

    #[test]
    fn exhausted_backtracking_is_a_warning() {
        let f = objective(
            |x: ArrayView1<f64>| 0.5e6 * x.dot(&x),
            |x: ArrayView1<f64>| &x * 1e6,
        );
        let options = ThreeSplitOptions {
            max_iter: 3,
            backtracking_factor: 0.5,
            max_iter_backtracking: 2,
            ..Default::default()
        };
        let mut rec = Recorder::new();
        let res = three_split_with_sink(
            &f,
            &IdentityProx,
            &IdentityProx,
            array![1., 1.].view(),
            &options,
            nop,
            &mut rec,
        )
        .unwrap();
        assert!(!res.success);
        assert_eq!(res.nit, 3);
        // two trials, then the last candidate is used untested
        assert_abs_diff_eq!(res.step_size, 0.25);
        assert_eq!(
            rec.warnings[0],
            Warning::LineSearchExhausted { iteration: 1 }
        );
        assert_eq!(
            rec.warnings.last(),
            Some(&Warning::NonConvergence {
                solver: "three_split",
                iterations: 3
            })
        );
    }

    #[test]
    fn verbose_reports_progress() {
        let f = objective(
            |x: ArrayView1<f64>| 0.5 * x.dot(&x),
            |x: ArrayView1<f64>| x.to_owned(),
        );
        let options = ThreeSplitOptions {
            verbose: 1,
            ..Default::default()
        };
        let mut rec = Recorder::new();
        let res = three_split_with_sink(
            &f,
            &L1Norm,
            &IdentityProx,
            array![5., -5.].view(),
            &options,
            nop,
            &mut rec,
        )
        .unwrap();
        assert!(res.success);
        assert_eq!(rec.progress.len(), res.nit);
        assert_eq!(rec.progress[0].1, 1);
        assert_eq!(rec.converged_at, Some(res.nit));
        assert!(rec.warnings.is_empty());

        let mut quiet = Recorder::new();
        let options = ThreeSplitOptions::default();
        three_split_with_sink(
            &f,
            &L1Norm,
            &IdentityProx,
            array![5., -5.].view(),
            &options,
            nop,
            &mut quiet,
        )
        .unwrap();
        assert!(quiet.progress.is_empty());
        assert_eq!(quiet.converged_at, None);
    }

    #[cfg(rustc_nightly)]
    #[bench]
    fn bench_lasso_100(b: &mut test::Bencher) {
        let d = Array1::linspace(0.1, 1., 100);
        let c = Array1::linspace(-2., 2., 100);
        let f = objective(
            |x: ArrayView1<f64>| 0.5 * (&d * &(&x - &c).mapv(|v| v * v)).sum(),
            |x: ArrayView1<f64>| &d * &(&x - &c),
        );
        let options = ThreeSplitOptions {
            alpha: 0.5,
            ..Default::default()
        };
        let x0 = Array1::<f64>::zeros(100);
        b.iter(|| {
            three_split_with_sink(&f, &L1Norm, &IdentityProx, x0.view(), &options, nop, Silent)
        });
    }

    #[test]
    fn divergence_guard_is_opt_in() {
        // step 3 on a unit quadratic doubles the iterate every step
        let f = objective(
            |x: ArrayView1<f64>| 0.5 * x.dot(&x),
            |x: ArrayView1<f64>| x.to_owned(),
        );
        let mut options = ThreeSplitOptions {
            step_size: 3.,
            backtracking: false,
            max_iter: 2000,
            check_finite: true,
            ..Default::default()
        };
        let mut rec = Recorder::new();
        let res = three_split_with_sink(
            &f,
            &IdentityProx,
            &IdentityProx,
            array![1.].view(),
            &options,
            nop,
            &mut rec,
        )
        .unwrap();
        assert!(!res.success);
        assert!(res.nit < 2000);
        assert!(res.y.iter().all(|v| v.is_finite()));
        assert!(matches!(rec.warnings[..], [Warning::Diverged { .. }]));

        options.check_finite = false;
        let res = three_split_with_sink(
            &f,
            &IdentityProx,
            &IdentityProx,
            array![1.].view(),
            &options,
            nop,
            Silent,
        )
        .unwrap();
        assert!(!res.success);
        assert_eq!(res.nit, 2000);
        assert!(!res.y[0].is_finite());
    }

    #[test]
    fn observer_panic_aborts_the_run() {
        let grads = Cell::new(0);
        let f = objective(
            |x: ArrayView1<f64>| 0.5 * x.dot(&x),
            |x: ArrayView1<f64>| {
                grads.set(grads.get() + 1);
                x.to_owned()
            },
        );
        let options = ThreeSplitOptions {
            step_size: 0.5,
            backtracking: false,
            tol: 1e-300,
            ..Default::default()
        };
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            three_split_with_sink(
                &f,
                &IdentityProx,
                &IdentityProx,
                array![4., -2.].view(),
                &options,
                |_, iter| {
                    if iter == 2 {
                        panic!("stop at 2");
                    }
                },
                Silent,
            )
        }));
        let payload = outcome.unwrap_err();
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"stop at 2"));
        assert_eq!(grads.get(), 2);
    }

    #[test]
    fn gradient_panic_aborts_the_run() {
        let grads = Cell::new(0);
        let proxes = Cell::new(0);
        let f = objective(
            |x: ArrayView1<f64>| 0.5 * x.dot(&x),
            |x: ArrayView1<f64>| {
                grads.set(grads.get() + 1);
                if grads.get() == 2 {
                    panic!("gradient failed");
                }
                x.to_owned()
            },
        );
        let h = prox_fn(|v: ArrayView1<f64>, _s: f64| {
            proxes.set(proxes.get() + 1);
            v.to_owned()
        });
        let options = ThreeSplitOptions {
            step_size: 0.5,
            backtracking: false,
            tol: 1e-300,
            ..Default::default()
        };
        let mut observed = Vec::new();
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            three_split_with_sink(
                &f,
                &IdentityProx,
                &h,
                array![4., -2.].view(),
                &options,
                |_, iter| observed.push(iter),
                Silent,
            )
        }));
        let payload = outcome.unwrap_err();
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"gradient failed"));
        assert_eq!(grads.get(), 2);
        // h was only reached on the first iteration
        assert_eq!(proxes.get(), 1);
        assert_eq!(observed, vec![1]);
    }

    #[test]
    #[should_panic(expected = "stop at 2")]
    fn observer_panic_propagates() {
        let f = objective(
            |x: ArrayView1<f64>| 0.5 * x.dot(&x),
            |x: ArrayView1<f64>| x.to_owned(),
        );
        let options = ThreeSplitOptions {
            step_size: 0.5,
            backtracking: false,
            tol: 1e-300,
            ..Default::default()
        };
        let _ = three_split(
            &f,
            &IdentityProx,
            &IdentityProx,
            array![4., -2.].view(),
            &options,
            |_, iter| assert!(iter < 2, "stop at {}", iter),
        );
    }
}
