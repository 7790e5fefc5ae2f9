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

//! This module defines the `OneTreeLowerBound` trait: the abstraction of the
//! relaxation used by the solver to prune the search space.

use crate::{EdgeConstraints, Instance, OneTree};

/// This trait abstracts away the computation of a lower bound for the
/// subproblem characterized by a set of edge constraints. The solver is
/// totally agnostic of the way the bound is computed: it only consults the
/// bound to decide whether a subproblem must be pruned, and the witness to
/// decide how to branch.
pub trait OneTreeLowerBound {
    /// Computes a lower bound on the length of the shortest tour of `instance`
    /// complying with the given `constraints` (all required edges are used,
    /// none of the forbidden edges is). It returns the bound along with the
    /// one tree witnessing it.
    ///
    /// # Note:
    /// When the constraints admit no tour at all (a city would have more than
    /// two required edges, the usable edges cannot connect the cities, or the
    /// required edges close a cycle that does not visit all cities), the
    /// returned one tree must be `OneTree::infeasible` (bound = +inf).
    fn compute_bound(&self, instance: &dyn Instance, constraints: &EdgeConstraints) -> OneTree;
}
