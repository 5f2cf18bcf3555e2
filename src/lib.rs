//! The `ndarray-splitting` crate provides proximal splitting algorithms
//! for minimizing composite functions of an `ndarray`.
//!
//! The objectives handled here are sums of a smooth term, accessed
//! through its value and gradient, and one or two non-smooth terms that are
//! only accessed through their proximal operators:
//! - Davis-Yin three operator splitting, with backtracking line search
//! - Primal-dual splitting for a non-smooth term composed with a linear operator
//!
//! Common examples are the LASSO, total variation denoising, and smooth
//! objectives under several simple constraint sets, since a projection is the
//! proximal operator of a constraint set.
//!
//! Solvers never print. Progress and warnings go to a
//! [`Diagnostics`](diagnostics::Diagnostics) sink, by default the `log`
//! facade, and invalid options are returned as a [`SplitError`].

#![cfg_attr(all(rustc_nightly, test), feature(test))]
#[cfg(all(rustc_nightly, test))]
extern crate test;

pub mod diagnostics;
mod error;
pub mod linop;
pub mod oracle;
pub mod prox;
pub mod split;
pub mod trace;

pub use error::{SplitError, SplitResult};
