// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the solver implementation.
mod sequential;
pub use sequential::*;

use crate::{Edge, Error, Instance, MinLB, NoCutoff, OneTreeLowerBound, SimpleFringe, Solver};

/// A type alias to emphasize that this is the solver that should be used by default.
pub type DefaultSolver<'a> = SequentialSolver<'a>;

/// Computes the shortest tour of the given instance using a best-bound-first
/// branch-and-bound driven by the given lower bound. It returns the `n` edges
/// of an optimal tour.
///
/// An error is returned when the instance is degenerate (fewer than three
/// cities, invalid distances); no search is attempted in that case.
///
/// # Example
/// ```
/// # use bbtsp::*;
/// let instance = TspInstance::from_coordinates(
///     &[10.0, 10.0, 20.0, 70.0, 40.0, 60.0, 50.0],
///     &[10.0, 30.0, 60.0, 40.0, 10.0, 20.0, 60.0]).unwrap();
/// let simple = optimize(&instance, &SimpleOneTree).unwrap();
/// let hk     = optimize(&instance, &HeldKarpOneTree::default()).unwrap();
/// assert_eq!(7, simple.len());
/// assert_eq!(184.0, tour_cost(&simple));
/// assert_eq!(184.0, tour_cost(&hk));
/// ```
pub fn optimize(instance: &dyn Instance, bound: &dyn OneTreeLowerBound) -> Result<Vec<Edge>, Error> {
    let mut fringe = SimpleFringe::new(MinLB);
    let mut solver = DefaultSolver::custom(instance, bound, &NoCutoff, &mut fringe);
    solver.minimize()?;
    solver.best_solution().ok_or(Error::NoTourFound)
}
