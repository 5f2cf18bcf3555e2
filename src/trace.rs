//! Iterate history collected through a solver callback

use std::time::{Duration, Instant};

use ndarray::prelude::*;

/// Append-only log of iterates and the time at which they were seen.
///
/// ```ignore
/// let mut trace = Trace::new();
/// three_split(&f, &g, &h, x0.view(), &options, |x, it| trace.record(x, it))?;
/// let losses = trace.values(|x| loss(x));
/// ```
#[derive(Clone, Debug)]
pub struct Trace<S> {
    start: Instant,
    iterations: Vec<usize>,
    iterates: Vec<Array1<S>>,
    times: Vec<Duration>,
}

impl<S: Clone> Trace<S> {
    /// Timestamps are measured from the moment of creation.
    pub fn new() -> Self {
        Trace {
            start: Instant::now(),
            iterations: Vec::new(),
            iterates: Vec::new(),
            times: Vec::new(),
        }
    }

    pub fn record(&mut self, x: ArrayView1<S>, iter: usize) {
        self.iterations.push(iter);
        self.iterates.push(x.to_owned());
        self.times.push(self.start.elapsed());
    }

    pub fn len(&self) -> usize {
        self.iterates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.iterates.is_empty()
    }

    pub fn iterations(&self) -> &[usize] {
        &self.iterations
    }

    pub fn iterates(&self) -> &[Array1<S>] {
        &self.iterates
    }

    /// elapsed time at each record
    pub fn times(&self) -> &[Duration] {
        &self.times
    }

    pub fn last(&self) -> Option<ArrayView1<'_, S>> {
        self.iterates.last().map(Array1::view)
    }

    /// Evaluate `func` (typically the full composite objective) on every
    /// recorded iterate.
    pub fn values<T>(&self, func: impl Fn(ArrayView1<S>) -> T) -> Vec<T> {
        self.iterates.iter().map(|x| func(x.view())).collect()
    }
}

impl<S: Clone> Default for Trace<S> {
    fn default() -> Self {
        Self::new()
    }
}
