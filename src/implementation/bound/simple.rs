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

//! This module provides the simplest bounding strategy: the length of a
//! minimum 1-tree computed on the actual distances.

use crate::{build_one_tree, EdgeConstraints, Instance, OneTree, OneTreeLowerBound};

/// _This is the default lower bound._ It computes a minimum 1-tree once,
/// using the raw distances of the instance.
///
/// # Example
/// ```
/// # use bbtsp::*;
/// let instance = TspInstance::from_coordinates(&[0.0, 0.0, 3.0], &[0.0, 4.0, 0.0]).unwrap();
/// let tree = SimpleOneTree.compute_bound(&instance, &EdgeConstraints::new(3));
/// assert!(tree.is_tour());
/// assert_eq!(12.0, tree.bound);
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct SimpleOneTree;

impl OneTreeLowerBound for SimpleOneTree {
    fn compute_bound(&self, instance: &dyn Instance, constraints: &EdgeConstraints) -> OneTree {
        let penalties = vec![0.0; instance.nb_cities()];
        build_one_tree(instance, constraints, &penalties)
    }
}

#[cfg(test)]
mod test_simple_one_tree {
    use crate::*;
    use crate::test_utils::{seven_cities, brute_force};

    #[test]
    fn the_bound_is_the_length_of_the_one_tree() {
        let inst = seven_cities();
        let tree = SimpleOneTree.compute_bound(&inst, &EdgeConstraints::new(7));
        assert!((tree.bound - tree.length()).abs() < 1e-9);
    }
    #[test]
    fn the_bound_is_sound_for_random_instances() {
        for seed in 0..20 {
            let inst = TspInstance::random(6, seed, 100).unwrap();
            let cons = EdgeConstraints::new(6);
            let tree = SimpleOneTree.compute_bound(&inst, &cons);
            assert!(tree.bound <= brute_force(&inst, &cons) + EPSILON);
        }
    }
    #[test]
    fn infeasible_constraints_yield_an_infinite_bound() {
        let inst = seven_cities();
        let mut cons = EdgeConstraints::new(7);
        cons.require(0, 1);
        cons.require(0, 2);
        cons.require(0, 3);
        assert_eq!(f64::INFINITY, SimpleOneTree.compute_bound(&inst, &cons).bound);
    }
}
