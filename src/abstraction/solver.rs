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

//! This module defines the `Solver` trait.

use crate::{Completion, Edge, Error, EPSILON};

/// A solution is the set of edges forming a tour
pub type Solution = Vec<Edge>;

/// This is the solver abstraction. It is implemented by a structure that
/// implements the branch-and-bound paradigm to find the shortest tour of a
/// given instance.
pub trait Solver {
    /// This method orders the solver to search for the shortest tour among
    /// all possibilities. It returns a structure standing for the outcome of
    /// the attempted minimization. Such a `Completion` may either be marked
    /// **exact** if the minimization has been carried out until optimality was
    /// proved. Or it can be inexact, in which case it means that the
    /// minimization process was stopped because of the satisfaction of some
    /// cutoff criterion.
    ///
    /// An error is returned (and no search is attempted) when the instance is
    /// degenerate: fewer than three cities, or invalid distances.
    fn minimize(&mut self) -> Result<Completion, Error>;
    /// This method returns the length of the best tour that has been found.
    fn best_value(&self) -> Option<f64>;
    /// This method returns the edges of the best tour that has been found.
    fn best_solution(&self) -> Option<Solution>;
    /// Returns the tightest lower bound that can be guaranteed so far.
    /// In case where no lower bound has been computed, it should return -inf.
    fn best_lower_bound(&self) -> f64;
    /// Returns the number of subproblems that have been explored so far.
    fn explored(&self) -> usize;
    /// Sets a primal (best known value and solution) of the problem.
    fn set_primal(&mut self, value: f64, solution: Solution);

    /// Computes the optimality gap
    fn gap(&self) -> f64 {
        match self.best_value() {
            None => 1.0,
            Some(ub) => {
                let lb = self.best_lower_bound();
                if !lb.is_finite() {
                    1.0
                } else if ub <= EPSILON {
                    0.0
                } else {
                    ((ub - lb) / ub).max(0.0)
                }
            }
        }
    }
}
