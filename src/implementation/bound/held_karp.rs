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

//! This module provides the Held-Karp bounding strategy. It improves the plain
//! 1-tree bound through a Lagrangian relaxation of the degree constraints: a
//! penalty is associated with each city and iteratively adjusted by a
//! subgradient ascent so as to push the degree of each city towards two.

use derive_builder::Builder;
use log::trace;

use crate::{build_one_tree, EdgeConstraints, Instance, OneTree, OneTreeLowerBound};

/// This is how you configure the subgradient ascent of the Held-Karp bound.
///
/// # Example
/// ```
/// # use bbtsp::*;
/// let config = HeldKarpConfigBuilder::default()
///     .max_iterations(50)
///     .build()
///     .unwrap();
/// let bound = HeldKarpOneTree::new(config);
/// assert_eq!(50, bound.config().max_iterations);
/// ```
#[derive(Debug, Clone, Builder)]
pub struct HeldKarpConfig {
    /// The maximum number of subgradient iterations per evaluation
    #[builder(default="100")]
    pub max_iterations: usize,
    /// The size of the first step, expressed as a fraction of the average
    /// edge weight of the initial 1-tree (`|bound| / n`)
    #[builder(default="0.1")]
    pub initial_step: f64,
    /// The step is halved whenever that many consecutive iterations did not
    /// improve the best bound
    #[builder(default="5")]
    pub stagnation_limit: usize,
    /// The ascent stops as soon as the step becomes smaller than this
    #[builder(default="1e-9")]
    pub min_step: f64,
}
impl Default for HeldKarpConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            initial_step: 0.1,
            stagnation_limit: 5,
            min_step: 1e-9,
        }
    }
}

/// The Held-Karp lower bound. Each evaluation starts from a null penalty
/// vector (hence its first iteration is exactly the `SimpleOneTree` bound) and
/// returns the best bound met during the ascent along with its witness. The
/// resulting bound is thus never weaker than the simple 1-tree bound.
///
/// # Note:
/// The penalties only live for the duration of one evaluation. Two calls with
/// the same arguments always produce the same result.
///
/// # Example
/// ```
/// # use bbtsp::*;
/// let instance = TspInstance::from_coordinates(
///     &[10.0, 10.0, 20.0, 70.0, 40.0, 60.0, 50.0],
///     &[10.0, 30.0, 60.0, 40.0, 10.0, 20.0, 60.0]).unwrap();
/// let constraints = EdgeConstraints::new(7);
/// let simple = SimpleOneTree.compute_bound(&instance, &constraints);
/// let hk     = HeldKarpOneTree::default().compute_bound(&instance, &constraints);
/// assert!(hk.bound >= simple.bound);
/// ```
#[derive(Debug, Default, Clone)]
pub struct HeldKarpOneTree {
    config: HeldKarpConfig,
}
impl HeldKarpOneTree {
    pub fn new(config: HeldKarpConfig) -> Self {
        Self { config }
    }
    pub fn config(&self) -> &HeldKarpConfig {
        &self.config
    }
}

impl OneTreeLowerBound for HeldKarpOneTree {
    fn compute_bound(&self, instance: &dyn Instance, constraints: &EdgeConstraints) -> OneTree {
        let n = instance.nb_cities();
        let mut penalties = vec![0.0; n];

        let mut best = build_one_tree(instance, constraints, &penalties);
        // the feasibility of the constraints does not depend on the penalties
        if !best.is_feasible() || best.is_tour() {
            return best;
        }

        let mut step = self.config.initial_step * best.bound.abs().max(1.0) / n as f64;
        let mut current = best.clone();
        let mut stagnation = 0;
        for iteration in 1..self.config.max_iterations {
            if step < self.config.min_step {
                break;
            }
            // ascent along the subgradient (degree - 2)
            for (penalty, degree) in penalties.iter_mut().zip(current.degrees.iter()) {
                *penalty += step * (*degree as f64 - 2.0);
            }

            current = build_one_tree(instance, constraints, &penalties);
            trace!("held-karp iteration {iteration}: bound {:.4} (step {step:.6})", current.bound);

            if current.is_tour() {
                // the bound is exact: nothing can do better
                current.bound = current.length().max(best.bound);
                return current;
            }
            if current.bound > best.bound {
                best = current.clone();
                stagnation = 0;
            } else {
                stagnation += 1;
                if stagnation >= self.config.stagnation_limit {
                    step /= 2.0;
                    stagnation = 0;
                }
            }
        }
        best
    }
}

#[cfg(test)]
mod test_held_karp {
    use crate::*;
    use crate::test_utils::{seven_cities, brute_force};

    #[test]
    fn the_default_config_matches_the_builder_defaults() {
        let built = HeldKarpConfigBuilder::default().build().unwrap();
        let deflt = HeldKarpConfig::default();
        assert_eq!(built.max_iterations, deflt.max_iterations);
        assert_eq!(built.initial_step, deflt.initial_step);
        assert_eq!(built.stagnation_limit, deflt.stagnation_limit);
        assert_eq!(built.min_step, deflt.min_step);
    }
    #[test]
    fn held_karp_is_at_least_as_tight_as_the_simple_bound() {
        for seed in 0..20 {
            let inst = TspInstance::random(7, seed, 100).unwrap();
            let cons = EdgeConstraints::new(7);
            let simple = SimpleOneTree.compute_bound(&inst, &cons);
            let hk = HeldKarpOneTree::default().compute_bound(&inst, &cons);
            assert!(hk.bound >= simple.bound, "seed {seed}: {} < {}", hk.bound, simple.bound);
        }
    }
    #[test]
    fn held_karp_is_sound() {
        for seed in 0..20 {
            let inst = TspInstance::random(7, seed, 100).unwrap();
            let cons = EdgeConstraints::new(7);
            let hk = HeldKarpOneTree::default().compute_bound(&inst, &cons);
            assert!(hk.bound <= brute_force(&inst, &cons) + EPSILON);
        }
    }
    #[test]
    fn held_karp_is_sound_under_constraints() {
        let inst = seven_cities();
        let mut cons = EdgeConstraints::new(7);
        assert!(cons.require(0, 3));
        assert!(cons.forbid(1, 2));
        assert!(cons.propagate());
        let simple = SimpleOneTree.compute_bound(&inst, &cons);
        let hk = HeldKarpOneTree::default().compute_bound(&inst, &cons);
        let optimum = brute_force(&inst, &cons);
        assert!(simple.bound <= hk.bound);
        assert!(hk.bound <= optimum + EPSILON);
    }
    #[test]
    fn held_karp_witness_is_a_one_tree() {
        let inst = seven_cities();
        let hk = HeldKarpOneTree::default().compute_bound(&inst, &EdgeConstraints::new(7));
        assert_eq!(7, hk.edges.len());
        assert_eq!(2, hk.degrees[ROOT]);
    }
    #[test]
    fn held_karp_is_deterministic() {
        let inst = seven_cities();
        let a = HeldKarpOneTree::default().compute_bound(&inst, &EdgeConstraints::new(7));
        let b = HeldKarpOneTree::default().compute_bound(&inst, &EdgeConstraints::new(7));
        assert_eq!(a, b);
    }
    #[test]
    fn infeasible_constraints_yield_an_infinite_bound() {
        let inst = seven_cities();
        let mut cons = EdgeConstraints::new(7);
        cons.require(4, 5);
        cons.require(5, 6);
        cons.require(6, 4);
        assert!(!HeldKarpOneTree::default().compute_bound(&inst, &cons).is_feasible());
    }
    #[test]
    fn a_single_iteration_is_the_simple_bound() {
        let inst = seven_cities();
        let cons = EdgeConstraints::new(7);
        let config = HeldKarpConfigBuilder::default().max_iterations(1).build().unwrap();
        let hk = HeldKarpOneTree::new(config).compute_bound(&inst, &cons);
        let simple = SimpleOneTree.compute_bound(&inst, &cons);
        assert_eq!(simple, hk);
    }
}
