//! Non-fatal solver diagnostics
//!
//! The solvers never print. Progress lines and warnings go through a
//! [`Diagnostics`] sink handed to the solver, so a caller can forward them
//! to the [`log`] facade ([`LogSink`], the default), drop them ([`Silent`]),
//! or keep them around for inspection ([`Recorder`]).

use thiserror::Error;

/// Conditions worth reporting that do not stop the solver from returning
/// a result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Warning {
    /// The iteration cap was reached before the tolerance test passed
    #[error("{solver} did not reach the desired tolerance level after {iterations} iterations")]
    NonConvergence {
        solver: &'static str,
        iterations: usize,
    },

    /// The backtracking loop ran out of trials without sufficient decrease
    #[error("maximum number of line-search iterations reached at iteration {iteration}")]
    LineSearchExhausted { iteration: usize },

    /// A non-finite increment was detected (only with `check_finite`)
    #[error("{solver} produced a non-finite iterate at iteration {iteration}")]
    Diverged {
        solver: &'static str,
        iteration: usize,
    },
}

/// Sink for solver warnings and per-iteration progress.
pub trait Diagnostics {
    /// Report a non-fatal condition.
    fn warning(&mut self, warning: Warning);

    /// Per-iteration progress, only emitted when `verbose >= 1`.
    fn progress(&mut self, _solver: &'static str, _iter: usize, _metric: f64) {}

    /// The tolerance test passed, only emitted when `verbose >= 1`.
    fn converged(&mut self, _solver: &'static str, _iter: usize) {}
}

/// Forwards everything to the `log` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl Diagnostics for LogSink {
    fn warning(&mut self, warning: Warning) {
        log::warn!("{}", warning);
    }

    fn progress(&mut self, solver: &'static str, iter: usize, metric: f64) {
        log::info!("[{}] iteration {}, increment: {:e}", solver, iter, metric);
    }

    fn converged(&mut self, solver: &'static str, iter: usize) {
        log::info!("[{}] achieved relative tolerance at iteration {}", solver, iter);
    }
}

/// Discards all diagnostics.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Diagnostics for Silent {
    fn warning(&mut self, _warning: Warning) {}
}

/// Keeps all diagnostics in memory.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    pub warnings: Vec<Warning>,
    /// `(solver, iteration, metric)` per progress line
    pub progress: Vec<(&'static str, usize, f64)>,
    /// iteration at which the tolerance test passed
    pub converged_at: Option<usize>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Diagnostics for Recorder {
    fn warning(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    fn progress(&mut self, solver: &'static str, iter: usize, metric: f64) {
        self.progress.push((solver, iter, metric));
    }

    fn converged(&mut self, _solver: &'static str, iter: usize) {
        self.converged_at = Some(iter);
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for &mut D {
    fn warning(&mut self, warning: Warning) {
        (**self).warning(warning)
    }

    fn progress(&mut self, solver: &'static str, iter: usize, metric: f64) {
        (**self).progress(solver, iter, metric)
    }

    fn converged(&mut self, solver: &'static str, iter: usize) {
        (**self).converged(solver, iter)
    }
}
