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

//! This module provides the implementation of a simple solver fringe (priority queue)

use binary_heap_plus::BinaryHeap;

use crate::*;


/// A priority queue of subproblems, ordered by the given `SubProblemRanking`.
///
/// # Note
/// Used along with the `MinLB` ranking, this fringe implements the
/// best-bound-first exploration which is the default behavior of the solver.
pub struct SimpleFringe<O: SubProblemRanking> {
    heap: BinaryHeap<SubProblem, CompareSubProblem<O>>
}
impl <O> SimpleFringe<O> where O: SubProblemRanking {
    /// Creates an empty fringe whose nodes are popped in the order of `o`
    pub fn new(o: O) -> Self {
        Self{ heap: BinaryHeap::from_vec_cmp(vec![], CompareSubProblem::new(o)) }
    }
}
impl <O> Fringe for SimpleFringe<O> where O: SubProblemRanking {
    fn push(&mut self, node: SubProblem) {
        self.heap.push(node)
    }

    fn pop(&mut self) -> Option<SubProblem> {
        self.heap.pop()
    }

    fn clear(&mut self) {
        self.heap.clear()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod test_simple_fringe {
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
    fn a_new_fringe_has_nothing_to_pop() {
        let mut fringe = SimpleFringe::new(MinLB);
        assert!(fringe.is_empty());
        assert!(fringe.pop().is_none());
    }
    #[test]
    fn len_follows_pushes_and_pops() {
        let mut fringe = SimpleFringe::new(MinLB);
        fringe.push(node(0, 10.0, 0));
        fringe.push(node(1, 20.0, 0));
        assert_eq!(2, fringe.len());
        assert!(fringe.pop().is_some());
        assert_eq!(1, fringe.len());
        assert!(fringe.pop().is_some());
        assert!(fringe.is_empty());
    }
    #[test]
    fn the_lowest_bound_is_popped_first() {
        let mut fringe = SimpleFringe::new(MinLB);
        fringe.push(node(0, 40.0, 0));
        fringe.push(node(1, 10.0, 0));
        fringe.push(node(2, 30.0, 0));
        fringe.push(node(3, 20.0, 0));
        fringe.push(node(4, 10.0, 0));
        fringe.push(node(5, 10.0, 2));

        let order = std::iter::from_fn(|| fringe.pop()).map(|n| n.id).collect::<Vec<_>>();
        assert_eq!(vec![5, 1, 4, 3, 2, 0], order);
    }
    #[test]
    fn clear_drops_every_node() {
        let mut fringe = SimpleFringe::new(MinLB);
        fringe.push(node(0, 5.0, 0));
        fringe.push(node(1, 6.0, 1));
        fringe.clear();
        assert!(fringe.is_empty());
        assert_eq!(0, fringe.len());
    }
}
