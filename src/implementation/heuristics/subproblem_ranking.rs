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

//! This module provides the implementation of subproblem rankings that are used to
//! set the ordering of the solver fringe.

use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use crate::{SubProblemRanking, SubProblem};

/// The MinLB (minimum lower bound) strategy is one that always selects the
/// node having the lowest bound in the fringe (best-bound-first). In case of
/// equalities, the deepest node is preferred (it is closer to a complete tour)
/// and eventually the oldest one, which makes the exploration order fully
/// deterministic.
///
/// # Example
/// ```
/// # use bbtsp::*;
/// let node = |id: usize, bound: f64, depth: usize| SubProblem {
///     constraints: EdgeConstraints::new(3),
///     witness: OneTree::infeasible(3),
///     bound, depth, id,
/// };
///
/// let mut priority_q = SimpleFringe::new(MinLB);
/// priority_q.push(node(0, 300.0, 1));
/// priority_q.push(node(1, 100.0, 1));
/// priority_q.push(node(2, 100.0, 2));
/// priority_q.push(node(3, 700.0, 0));
///
/// assert_eq!(2, priority_q.pop().unwrap().id); // because 100 is the lowest bound and it is deeper
/// assert_eq!(1, priority_q.pop().unwrap().id); // because 100 is the lowest bound
/// assert_eq!(0, priority_q.pop().unwrap().id); // because 300 is the next lowest
/// assert_eq!(3, priority_q.pop().unwrap().id); // because 700 is the worst
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct MinLB;

impl SubProblemRanking for MinLB {
    fn compare(&self, l: &SubProblem, r: &SubProblem) -> Ordering {
        OrderedFloat(r.bound).cmp(&OrderedFloat(l.bound))
            .then_with(|| l.depth.cmp(&r.depth))
            .then_with(|| r.id.cmp(&l.id))
    }
}


#[cfg(test)]
mod test_minlb {
    use std::cmp::Ordering;

    use crate::*;

    fn node(id: usize, bound: f64, depth: usize) -> SubProblem {
        SubProblem {
            constraints: EdgeConstraints::new(3),
            bound,
            witness: OneTree::infeasible(3),
            depth,
            id,
        }
    }

    #[test]
    fn gt_because_bound() {
        let a = node(0, 100.0, 0);
        let b = node(1, 300.0, 5);
        assert_eq!(Ordering::Greater, MinLB.compare(&a, &b));
    }
    #[test]
    fn gt_because_depth() {
        let a = node(5, 100.0, 3);
        let b = node(1, 100.0, 2);
        assert_eq!(Ordering::Greater, MinLB.compare(&a, &b));
    }
    #[test]
    fn gt_because_id() {
        let a = node(1, 100.0, 3);
        let b = node(2, 100.0, 3);
        assert_eq!(Ordering::Greater, MinLB.compare(&a, &b));
    }
    #[test]
    fn lt_because_bound() {
        let a = node(0, 100.0, 0);
        let b = node(1, 300.0, 5);
        assert_eq!(Ordering::Less, MinLB.compare(&b, &a));
    }
    #[test]
    fn infinite_bounds_come_last() {
        let a = node(0, f64::INFINITY, 9);
        let b = node(1, 300.0, 0);
        assert_eq!(Ordering::Less, MinLB.compare(&a, &b));
    }
    #[test]
    fn eq_self() {
        let a = node(0, 100.0, 0);
        assert_eq!(Ordering::Equal, MinLB.compare(&a, &a));
    }
}
