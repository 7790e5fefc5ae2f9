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

//! This module provides some utilities which are useful when implementing
//! solver heuristics.

use std::cmp::Ordering;

use compare::Compare;

use crate::{SubProblem, SubProblemRanking};

/// This is a thin wrapper to convert a SubProblemRanking into a `Compare`
/// object as is sometimes required (e.g. to configure the order in a binary
/// heap)
///
/// # Note:
/// This wrapper is only ever useful if you are implementing your own fringe.
#[derive(Debug, Clone, Copy)]
pub struct CompareSubProblem<X:SubProblemRanking>(X);
impl <X:SubProblemRanking> CompareSubProblem<X> {
    /// Creates a new instance
    pub fn new(x: X) -> Self {
        Self(x)
    }
}
impl <X:SubProblemRanking> Compare<SubProblem> for CompareSubProblem<X> {
    fn compare(&self, l: &SubProblem, r: &SubProblem) -> Ordering {
        self.0.compare(l, r)
    }
}

#[cfg(test)]
mod test {
    use std::cmp::Ordering;
    use compare::Compare;
    use crate::*;

    fn node(id: usize, bound: f64) -> SubProblem {
        SubProblem {
            constraints: EdgeConstraints::new(3),
            bound,
            witness: OneTree::infeasible(3),
            depth: 0,
            id,
        }
    }

    #[test]
    fn compare_sub_problem_delegates_to_the_ranking() {
        let cmp = CompareSubProblem::new(MinLB);
        let a = node(0, 10.0);
        let b = node(1, 20.0);
        assert_eq!(Ordering::Greater, cmp.compare(&a, &b));
        assert_eq!(Ordering::Less,    cmp.compare(&b, &a));
        assert_eq!(Ordering::Equal,   cmp.compare(&a, &a));
    }
}
