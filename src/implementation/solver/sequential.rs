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

//! This module provides the implementation of the sequential branch-and-bound
//! solver. That is a solver that explores the subproblems one at a time,
//! using one single thread of execution.
//!
//! Each subproblem is evaluated with the configured lower bound as soon as it
//! is created. A subproblem is then either:
//!
//!  + pruned: it is infeasible or its bound cannot improve on the incumbent;
//!  + solved: its witness is a tour, which may become the new incumbent;
//!  + branched: its witness has a city of degree > 2, and the subproblem is
//!    partitioned into children that constrain the edges of that city.

use log::{debug, info, trace};

use crate::{check_instance, Completion, Cutoff, Edge, EdgeConstraints, Error, Fringe, Instance, NoCutoff,
    OneTree, OneTreeLowerBound, Reason, Solution, Solver, SubProblem, EPSILON};

/// The workload the solver gets from its fringe
enum WorkLoad {
    /// There is no work left to be done: the incumbent is optimal
    Complete,
    /// The work must stop because of an external cutoff
    Aborted,
    /// The item to process
    WorkItem { node: SubProblem },
}

pub struct SequentialSolver<'a> {
    /// A reference to the instance being solved
    instance: &'a dyn Instance,
    /// The strategy used to compute the lower bound of each subproblem
    bound: &'a dyn OneTreeLowerBound,
    /// A cutoff heuristic meant to decide when to stop the resolution of
    /// a given problem.
    cutoff: &'a dyn Cutoff,

    /// This is the fringe: the set of nodes that must still be explored before
    /// the problem can be considered 'solved'.
    fringe: &'a mut dyn Fringe,
    /// This is a counter that tracks the number of nodes that have effectively
    /// been explored (popped from the fringe and branched upon).
    explored: usize,
    /// The number of subproblems that were discarded without being explored
    pruned: usize,
    /// The number of subproblems that have been created so far (used to give
    /// each of them a unique id)
    created: usize,
    /// This is the length of the best known tour (+inf when none is known)
    best_ub: f64,
    /// This is the value of the best known lower bound: the bound of the root
    /// until the search completes, the length of the optimal tour afterwards.
    best_lb: f64,
    /// If set, this keeps the edges of the best tour so far.
    best_sol: Option<Solution>,
    /// If we decide not to go through a complete proof of optimality, this is
    /// the reason why we took that decision.
    abort_proof: Option<Reason>,
}

impl<'a> SequentialSolver<'a> {
    /// Creates a solver which explores the search space until optimality is
    /// proved
    pub fn new(
        instance: &'a dyn Instance,
        bound: &'a dyn OneTreeLowerBound,
        fringe: &'a mut dyn Fringe,
    ) -> Self {
        Self::custom(instance, bound, &NoCutoff, fringe)
    }

    pub fn custom(
        instance: &'a dyn Instance,
        bound: &'a dyn OneTreeLowerBound,
        cutoff: &'a dyn Cutoff,
        fringe: &'a mut dyn Fringe,
    ) -> Self {
        SequentialSolver {
            instance,
            bound,
            cutoff,
            fringe,
            //
            explored: 0,
            pruned: 0,
            created: 0,
            best_ub: f64::INFINITY,
            best_lb: f64::NEG_INFINITY,
            best_sol: None,
            abort_proof: None,
        }
    }

    /// The number of subproblems that were pruned
    pub fn pruned(&self) -> usize {
        self.pruned
    }

    /// This method initializes the problem resolution. Put more simply, this
    /// method evaluates the root subproblem and posts it onto the fringe
    /// (unless it is solved or pruned right away).
    fn initialize(&mut self) {
        self.fringe.clear();
        self.explored = 0;
        self.pruned = 0;
        self.created = 0;
        self.abort_proof = None;

        let mut constraints = EdgeConstraints::new(self.instance.nb_cities());
        if constraints.propagate() {
            if let Some(root) = self.evaluate(constraints, 0) {
                self.best_lb = root.bound;
                self.fringe.push(root);
            }
        } else {
            self.pruned += 1;
        }
    }

    /// Evaluates the subproblem characterized by the given constraints. It
    /// returns the subproblem when it needs to be branched upon, and None when
    /// it has been pruned or solved (in which case the incumbent is updated
    /// if needed).
    fn evaluate(&mut self, constraints: EdgeConstraints, depth: usize) -> Option<SubProblem> {
        let witness = self.bound.compute_bound(self.instance, &constraints);
        if !witness.is_feasible() || self.cannot_improve(witness.bound) {
            self.pruned += 1;
            return None;
        }
        if witness.is_tour() {
            self.maybe_update_best(&witness);
            return None;
        }
        let id = self.created;
        self.created += 1;
        Some(SubProblem { constraints, bound: witness.bound, witness, depth, id })
    }

    /// Returns true iff a subproblem with the given bound cannot possibly
    /// contain a tour shorter than the incumbent
    fn cannot_improve(&self, bound: f64) -> bool {
        bound >= self.best_ub - EPSILON
    }

    /// This private method updates the incumbent in case the given witness
    /// (which is a tour) is strictly shorter than the best known tour.
    fn maybe_update_best(&mut self, witness: &OneTree) {
        let length = witness.length();
        if length < self.best_ub - EPSILON {
            debug!("new incumbent: {length:.4} (explored {})", self.explored);
            self.best_ub = length;
            self.best_sol = Some(witness.edges.clone());
        }
    }

    /// This method processes the given `node`: unless it was made useless by
    /// an improvement of the incumbent, it branches on the city of highest
    /// degree of its witness and evaluates the resulting children.
    fn process_one_node(&mut self, node: SubProblem) {
        if self.cannot_improve(node.bound) {
            self.pruned += 1;
            return;
        }
        self.explored += 1;

        let mut children = vec![];
        for constraints in branch(&node) {
            if let Some(child) = self.evaluate(constraints, node.depth + 1) {
                children.push(child);
            }
        }
        // the most promising child is pushed last (so that a lifo fringe pops it first)
        children.sort_by(|a, b| b.bound.total_cmp(&a.bound).then_with(|| b.id.cmp(&a.id)));
        for child in children {
            self.fringe.push(child);
        }
    }

    fn abort_search(&mut self, reason: Reason) {
        self.abort_proof = Some(reason);
        self.fringe.clear();
    }

    /// Consults the fringe to fetch a workload. Depending on the current
    /// state, the workload can either be:
    ///
    ///   + Complete, when the problem is solved
    ///   + Aborted, when the cutoff criterion is met
    ///   + WorkItem, when the solver successfully obtained a subproblem to
    ///     process.
    fn get_workload(&mut self) -> WorkLoad {
        if self.abort_proof.is_some() {
            return WorkLoad::Aborted;
        }
        if self.fringe.is_empty() {
            self.best_lb = self.best_ub;
            return WorkLoad::Complete;
        }
        if self.cutoff.must_stop() {
            return WorkLoad::Aborted;
        }

        match self.fringe.pop() {
            Some(node) => WorkLoad::WorkItem { node },
            None => WorkLoad::Complete,
        }
    }
}

/// Partitions the tours of `node` by constraining the free witness edges of
/// the city having the highest degree in the witness. With `f0, f1, ...` those
/// edges (by increasing distance) and `r` the number of required edges at that
/// city, the k-th child (`k < 2 - r`) requires `f0..fk-1` and forbids `fk`
/// while the last child requires `f0..f(1-r)`. The children are disjoint, they
/// cover all tours of the node, and none of them admits the node's witness.
///
/// Children whose constraints are found infeasible by propagation are
/// dropped.
fn branch(node: &SubProblem) -> Vec<EdgeConstraints> {
    let witness = &node.witness;
    let Some(city) = witness.branching_city() else {
        return vec![];
    };
    let parent = &node.constraints;
    let mut free = witness.edges.iter().copied()
        .filter(|e| e.touches(city) && parent.is_free(e.v1(), e.v2()))
        .collect::<Vec<Edge>>();
    free.sort_by(|a, b| a.cost().total_cmp(&b.cost()).then_with(|| a.other(city).cmp(&b.other(city))));

    let missing = 2usize.saturating_sub(parent.required_degree(city));
    trace!("branching on city {city} (degree {}, {} free edges)", witness.degrees[city], free.len());

    let mut children = vec![];
    for k in 0..=missing {
        let mut child = parent.clone();
        let mut feasible = free.iter().take(k).all(|e| child.require(e.v1(), e.v2()));
        if k < missing {
            feasible = feasible && free.get(k).map_or(false, |e| child.forbid(e.v1(), e.v2()));
        }
        if feasible && child.propagate() {
            children.push(child);
        }
    }
    children
}

impl<'a> Solver for SequentialSolver<'a> {
    /// Applies the branch and bound algorithm to solve the instance to
    /// optimality: the subproblems are continually fetched from the fringe and
    /// processed until the fringe is exhausted (or the cutoff criterion is
    /// met).
    fn minimize(&mut self) -> Result<Completion, Error> {
        check_instance(self.instance)?;
        self.initialize();

        loop {
            match self.get_workload() {
                WorkLoad::Complete => break,
                WorkLoad::Aborted => {
                    self.abort_search(Reason::CutoffOccurred);
                    break;
                }
                WorkLoad::WorkItem { node } => self.process_one_node(node),
            }
        }

        let completion = Completion { is_exact: self.abort_proof.is_none(), best_value: self.best_value() };
        info!("search {}: best value {:?}, explored {} nodes, pruned {}",
            if completion.is_exact { "complete" } else { "aborted" },
            completion.best_value, self.explored, self.pruned);
        Ok(completion)
    }

    /// Returns the best tour that has been identified for this problem.
    fn best_solution(&self) -> Option<Solution> {
        self.best_sol.clone()
    }
    /// Returns the length of the best tour that has been identified for
    /// this problem.
    fn best_value(&self) -> Option<f64> {
        self.best_sol.as_ref().map(|_sol| self.best_ub)
    }
    /// Returns the value of the best lower bound that has been identified for
    /// this problem.
    fn best_lower_bound(&self) -> f64 {
        self.best_lb
    }
    fn explored(&self) -> usize {
        self.explored
    }
    /// Sets a primal (best known value and solution) of the problem.
    fn set_primal(&mut self, value: f64, solution: Solution) {
        if value < self.best_ub {
            self.best_sol = Some(solution);
            self.best_ub  = value;
        }
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_solver {
    use std::time::Duration;

    use crate::test_utils::{brute_force, seven_cities};
    use crate::*;

    /// A hub surrounded by four cities: the minimum one tree is a star
    fn star() -> TspInstance {
        let xs = [85.0, 50.0, 50.0, 90.0, 50.0, 10.0];
        let ys = [85.0, 50.0, 90.0, 50.0, 10.0, 50.0];
        TspInstance::from_coordinates(&xs, &ys).unwrap()
    }

    #[test]
    fn it_finds_the_optimal_tour_with_the_simple_bound() {
        let instance = seven_cities();
        let mut fringe = SimpleFringe::new(MinLB);
        let mut solver = SequentialSolver::new(&instance, &SimpleOneTree, &mut fringe);
        let outcome = solver.minimize().unwrap();

        assert!(outcome.is_exact);
        assert_eq!(Some(184.0), outcome.best_value);
        assert_eq!(Some(184.0), solver.best_value());
        assert_eq!(184.0, solver.best_lower_bound());
        assert_eq!(0.0, solver.gap());
        let tour = solver.best_solution().unwrap();
        assert_eq!(Some(vec![0, 1, 2, 6, 3, 5, 4]), tour_order(7, &tour));
    }
    #[test]
    fn it_finds_the_optimal_tour_with_the_held_karp_bound() {
        let instance = seven_cities();
        let bound = HeldKarpOneTree::default();
        let mut fringe = SimpleFringe::new(MinLB);
        let mut solver = SequentialSolver::new(&instance, &bound, &mut fringe);
        let outcome = solver.minimize().unwrap();

        assert!(outcome.is_exact);
        assert_eq!(Some(184.0), outcome.best_value);
        let tour = solver.best_solution().unwrap();
        assert_eq!(Some(vec![0, 1, 2, 6, 3, 5, 4]), tour_order(7, &tour));
    }
    #[test]
    fn depth_first_and_best_first_agree() {
        for seed in 0..10 {
            let instance = TspInstance::random(7, seed, 100).unwrap();

            let mut best_first = SimpleFringe::new(MinLB);
            let mut solver = SequentialSolver::new(&instance, &SimpleOneTree, &mut best_first);
            let bf = solver.minimize().unwrap();

            let mut depth_first = DepthFirstFringe::new();
            let mut solver = SequentialSolver::new(&instance, &SimpleOneTree, &mut depth_first);
            let df = solver.minimize().unwrap();

            let expected = brute_force(&instance, &EdgeConstraints::new(7));
            assert!(bf.is_exact && df.is_exact);
            assert!((bf.best_value.unwrap() - expected).abs() < EPSILON);
            assert!((df.best_value.unwrap() - expected).abs() < EPSILON);
        }
    }
    #[test]
    fn the_best_first_search_explores_the_star_before_proving_optimality() {
        let instance = star();
        let mut fringe = SimpleFringe::new(MinLB);
        let mut solver = SequentialSolver::new(&instance, &SimpleOneTree, &mut fringe);
        let outcome = solver.minimize().unwrap();

        let expected = brute_force(&instance, &EdgeConstraints::new(6));
        assert!(outcome.is_exact);
        assert!(solver.explored() >= 1);
        assert!((outcome.best_value.unwrap() - expected).abs() < EPSILON);
    }
    #[test]
    fn it_rejects_degenerate_instances() {
        struct Tiny(usize);
        impl Instance for Tiny {
            fn nb_cities(&self) -> usize { self.0 }
            fn distance(&self, i: usize, j: usize) -> f64 { if i == j { 0.0 } else { 1.0 } }
        }
        for instance in [Tiny(0), Tiny(1), Tiny(2)] {
            let mut fringe = SimpleFringe::new(MinLB);
            let mut solver = SequentialSolver::new(&instance, &SimpleOneTree, &mut fringe);
            assert!(matches!(solver.minimize(), Err(Error::NotEnoughCities(_))));
            assert_eq!(None, solver.best_solution());
            assert_eq!(0, solver.explored());
        }
    }
    #[test]
    fn a_zero_time_budget_aborts_the_search() {
        let instance = star();
        let cutoff = TimeBudget::new(Duration::from_secs(0));
        let mut fringe = SimpleFringe::new(MinLB);
        let mut solver = SequentialSolver::custom(&instance, &SimpleOneTree, &cutoff, &mut fringe);
        let outcome = solver.minimize().unwrap();

        assert!(!outcome.is_exact);
        assert_eq!(0, solver.explored());
        assert_eq!(1.0, solver.gap());
        assert!(fringe.is_empty());
    }
    #[test]
    fn an_optimal_primal_solution_is_kept() {
        let instance = seven_cities();
        let (value, tour) = {
            let mut fringe = SimpleFringe::new(MinLB);
            let mut solver = SequentialSolver::new(&instance, &SimpleOneTree, &mut fringe);
            solver.minimize().unwrap();
            (solver.best_value().unwrap(), solver.best_solution().unwrap())
        };

        let mut fringe = SimpleFringe::new(MinLB);
        let mut solver = SequentialSolver::new(&instance, &SimpleOneTree, &mut fringe);
        solver.set_primal(value, tour.clone());
        let outcome = solver.minimize().unwrap();
        assert!(outcome.is_exact);
        assert_eq!(Some(value), outcome.best_value);
        assert_eq!(Some(tour), solver.best_solution());
    }
    #[test]
    fn a_worse_primal_solution_is_improved() {
        let instance = seven_cities();
        let (value, tour) = nearest_neighbor_tour(&instance).unwrap();

        let mut fringe = DepthFirstFringe::new();
        let mut solver = SequentialSolver::new(&instance, &SimpleOneTree, &mut fringe);
        solver.set_primal(value, tour);
        let outcome = solver.minimize().unwrap();
        assert!(outcome.is_exact);
        assert_eq!(Some(184.0), outcome.best_value);
    }
    #[test]
    fn set_primal_ignores_worse_solutions() {
        let instance = seven_cities();
        let mut fringe = SimpleFringe::new(MinLB);
        let mut solver = SequentialSolver::new(&instance, &SimpleOneTree, &mut fringe);
        solver.set_primal(200.0, vec![]);
        solver.set_primal(300.0, vec![Edge::new(0, 1, 300.0)]);
        assert_eq!(Some(200.0), solver.best_value());
        assert_eq!(Some(vec![]), solver.best_solution());
    }
}
