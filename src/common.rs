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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client code is likely to work with.

use std::hash::{Hash, Hasher};

use crate::EdgeConstraints;

/// The tolerance used whenever two costs or bounds are compared. Two values
/// that differ by less than `EPSILON` are considered equal: a subproblem whose
/// bound is within `EPSILON` of the incumbent is pruned, and a tour only
/// replaces the incumbent when it is shorter by at least `EPSILON`.
pub const EPSILON: f64 = 1e-6;

// ----------------------------------------------------------------------------
// --- EDGE -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This denotes an (undirected) edge of the complete graph spanned by the
/// cities of an instance. It connects city `v1` with city `v2` and caches the
/// distance between these two.
///
/// # Note:
/// Edges are undirected: `Edge::new(1, 2, c) == Edge::new(2, 1, c)`.
///
/// # Examples:
/// ```
/// # use bbtsp::Edge;
/// let e = Edge::new(4, 2, 10.0);
/// assert_eq!(4, e.v1());
/// assert_eq!(2, e.v2());
/// assert_eq!(2, e.min());
/// assert_eq!(4, e.max());
/// assert_eq!(2, e.other(4));
/// assert_eq!(e, Edge::new(2, 4, 10.0));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Edge {
    v1  : usize,
    v2  : usize,
    cost: f64,
}
impl Edge {
    /// Creates a new edge between `v1` and `v2`.
    pub fn new(v1: usize, v2: usize, cost: f64) -> Self {
        debug_assert_ne!(v1, v2, "an edge needs two distinct endpoints");
        Self { v1, v2, cost }
    }
    #[inline]
    pub fn v1(self) -> usize {
        self.v1
    }
    #[inline]
    pub fn v2(self) -> usize {
        self.v2
    }
    /// The endpoint having the smallest index
    #[inline]
    pub fn min(self) -> usize {
        self.v1.min(self.v2)
    }
    /// The endpoint having the largest index
    #[inline]
    pub fn max(self) -> usize {
        self.v1.max(self.v2)
    }
    #[inline]
    pub fn cost(self) -> f64 {
        self.cost
    }
    /// Returns true iff `v` is one of the endpoints of this edge
    #[inline]
    pub fn touches(self, v: usize) -> bool {
        self.v1 == v || self.v2 == v
    }
    /// Returns the endpoint at the opposite of `v`.
    /// (`v` is assumed to be one of the endpoints of the edge)
    #[inline]
    pub fn other(self, v: usize) -> usize {
        if self.v1 == v { self.v2 } else { self.v1 }
    }
}
impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.min() == other.min() && self.max() == other.max()
    }
}
impl Eq for Edge {}
impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.min().hash(state);
        self.max().hash(state);
    }
}

// ----------------------------------------------------------------------------
// --- ONE TREE ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A one tree is the witness produced by a lower bound computation. It spans
/// all the cities of the instance: the designated vertex (city 0) has degree
/// two while the other cities form a spanning tree.
///
/// An infeasible subproblem is denoted by a one tree whose bound is `+inf`
/// and which has no edge at all.
#[derive(Debug, Clone, PartialEq)]
pub struct OneTree {
    /// A lower bound on the length of any tour complying with the constraints
    /// of the subproblem that was evaluated
    pub bound: f64,
    /// The edges of the witness (with their actual distances)
    pub edges: Vec<Edge>,
    /// The degree of each city in the witness
    pub degrees: Vec<usize>,
}
impl OneTree {
    /// Creates a witness that stands for an infeasible subproblem
    pub fn infeasible(nb_cities: usize) -> Self {
        Self { bound: f64::INFINITY, edges: vec![], degrees: vec![0; nb_cities] }
    }
    /// Returns true iff the subproblem admits at least one tour
    pub fn is_feasible(&self) -> bool {
        self.bound.is_finite()
    }
    /// Returns true iff the witness is a tour: every city has degree two.
    /// (A one tree has n edges and is connected, so it is then a single
    /// Hamiltonian cycle.)
    pub fn is_tour(&self) -> bool {
        self.is_feasible() && self.degrees.iter().all(|d| *d == 2)
    }
    /// The actual length of the witness, irrespective of any penalty
    pub fn length(&self) -> f64 {
        tour_cost(&self.edges)
    }
    /// The city that should be branched upon: the one having the highest
    /// degree in the witness. Ties are broken in favor of the lowest index.
    /// It returns None when the witness is a tour (or infeasible).
    pub fn branching_city(&self) -> Option<usize> {
        if !self.is_feasible() {
            return None;
        }
        let mut best: Option<usize> = None;
        for (city, degree) in self.degrees.iter().copied().enumerate() {
            if degree > 2 && best.map_or(true, |b| degree > self.degrees[b]) {
                best = Some(city);
            }
        }
        best
    }
}

// ----------------------------------------------------------------------------
// --- SUBPROBLEM -------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A subproblem is a residual problem that must be solved in order to complete
/// the resolution of the original problem. It is characterized by the set of
/// edge constraints imposed by the branching decisions that led to it.
///
/// # Note:
/// Subproblems are created and owned by the solver. If you are only
/// discovering the API, rest assured: you don't need to create any yourself.
#[derive(Debug, Clone)]
pub struct SubProblem {
    /// The edges that must (or must not) be part of the tours of this subproblem
    pub constraints: EdgeConstraints,
    /// A lower bound on the length of the tours of this subproblem
    pub bound: f64,
    /// The one tree witnessing the bound
    pub witness: OneTree,
    /// The number of branching decisions between the root and this subproblem
    pub depth: usize,
    /// A sequence number, unique within one search, used to break ties
    pub id: usize,
}

// ----------------------------------------------------------------------------
// --- Results ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A reason explaining why the search was stopped before proving optimality
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Reason {
    /// It stopped because the configured cutoff criterion was met
    CutoffOccurred
}

/// The outcome of a search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Completion {
    /// is the given solution exact (proved optimal) or is it an approximation ?
    pub is_exact: bool,
    /// if present the length of the best tour that has been found
    pub best_value: Option<f64>,
}

// ----------------------------------------------------------------------------
// --- TOUR UTILITIES ---------------------------------------------------------
// ----------------------------------------------------------------------------
/// Returns the total length of the given edges
pub fn tour_cost(edges: &[Edge]) -> f64 {
    edges.iter().map(|e| e.cost()).sum()
}

/// Turns a set of edges into the sequence of cities visited by the tour they
/// describe. The sequence starts from city 0 and then heads to the lowest
/// indexed neighbour of city 0. This function returns None when the
/// `edges` do not form one single Hamiltonian cycle over `nb_cities` cities.
///
/// # Examples:
/// ```
/// # use bbtsp::{Edge, tour_order};
/// let edges = vec![Edge::new(0, 2, 1.0), Edge::new(1, 2, 1.0), Edge::new(1, 0, 1.0)];
/// assert_eq!(Some(vec![0, 1, 2]), tour_order(3, &edges));
/// assert_eq!(None, tour_order(4, &edges));
/// ```
pub fn tour_order(nb_cities: usize, edges: &[Edge]) -> Option<Vec<usize>> {
    if nb_cities < 3 || edges.len() != nb_cities {
        return None;
    }
    let mut adjacency = vec![vec![]; nb_cities];
    for e in edges {
        if e.max() >= nb_cities || e.v1() == e.v2() {
            return None;
        }
        adjacency[e.v1()].push(e.v2());
        adjacency[e.v2()].push(e.v1());
    }
    if adjacency.iter().any(|adj| adj.len() != 2) {
        return None;
    }

    let mut order = Vec::with_capacity(nb_cities);
    let mut previous = 0;
    let mut current = adjacency[0][0].min(adjacency[0][1]);
    order.push(0);
    while current != 0 && order.len() < nb_cities {
        order.push(current);
        let next = if adjacency[current][0] != previous { adjacency[current][0] } else { adjacency[current][1] };
        previous = current;
        current = next;
    }

    if current == 0 && order.len() == nb_cities { Some(order) } else { None }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################


#[cfg(test)]
mod test_one_tree {
    use crate::{Edge, OneTree};

    #[test]
    fn an_infeasible_tree_has_an_infinite_bound() {
        let t = OneTree::infeasible(4);
        assert!(!t.is_feasible());
        assert!(!t.is_tour());
        assert_eq!(None, t.branching_city());
    }
    #[test]
    fn a_tree_where_all_degrees_are_two_is_a_tour() {
        let t = OneTree {
            bound: 3.0,
            edges: vec![Edge::new(0, 1, 1.0), Edge::new(1, 2, 1.0), Edge::new(2, 0, 1.0)],
            degrees: vec![2, 2, 2],
        };
        assert!(t.is_tour());
        assert_eq!(3.0, t.length());
        assert_eq!(None, t.branching_city());
    }
    #[test]
    fn branching_city_is_the_lowest_one_with_max_degree() {
        let t = OneTree {
            bound: 3.0,
            edges: vec![],
            degrees: vec![2, 1, 3, 1, 3, 2],
        };
        assert_eq!(Some(2), t.branching_city());

        let t = OneTree {
            bound: 3.0,
            edges: vec![],
            degrees: vec![2, 1, 3, 1, 1, 4],
        };
        assert_eq!(Some(5), t.branching_city());
    }
}

#[cfg(test)]
mod test_tour {
    use crate::{Edge, tour_cost, tour_order};

    #[test]
    fn two_disjoint_triangles_are_not_a_tour() {
        let edges = vec![
            Edge::new(0, 1, 1.0), Edge::new(1, 2, 1.0), Edge::new(2, 0, 1.0),
            Edge::new(3, 4, 1.0), Edge::new(4, 5, 1.0), Edge::new(5, 3, 1.0),
        ];
        assert_eq!(None, tour_order(6, &edges));
    }
    #[test]
    fn a_hamiltonian_cycle_is_a_tour() {
        let edges = vec![
            Edge::new(0, 3, 1.0), Edge::new(3, 1, 2.0),
            Edge::new(1, 2, 3.0), Edge::new(2, 0, 4.0),
        ];
        assert_eq!(Some(vec![0, 2, 1, 3]), tour_order(4, &edges));
        assert_eq!(10.0, tour_cost(&edges));
    }
    #[test]
    fn a_vertex_of_degree_three_is_not_a_tour() {
        let edges = vec![
            Edge::new(0, 1, 1.0), Edge::new(0, 2, 1.0),
            Edge::new(0, 3, 1.0), Edge::new(1, 2, 1.0),
        ];
        assert_eq!(None, tour_order(4, &edges));
    }
}
