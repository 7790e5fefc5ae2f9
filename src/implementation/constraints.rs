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

//! This module provides the bookkeeping of the edge constraints that
//! characterize a subproblem: the edges that must appear in any of its tours
//! (required) and those that must not (forbidden).

/// The status of an edge with respect to a subproblem
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EdgeState {
    /// No branching decision was made about this edge yet
    Free,
    /// The edge must be part of any tour of the subproblem
    Required,
    /// The edge cannot be part of any tour of the subproblem
    Forbidden,
}

/// The set of constraints of a subproblem.
///
/// # Invariants
/// An edge is never required and forbidden at the same time. The number of
/// required edges incident to a city should never exceed two; when an
/// operation breaks that rule (or any other necessary condition for a tour to
/// exist), it reports it by returning false and the constraint set should be
/// considered infeasible.
///
/// # Example
/// ```
/// # use bbtsp::{EdgeConstraints, EdgeState};
/// let mut constraints = EdgeConstraints::new(4);
/// assert!(constraints.require(0, 1));
/// assert!(constraints.forbid(2, 1));
/// assert_eq!(EdgeState::Required,  constraints.state(1, 0));
/// assert_eq!(EdgeState::Forbidden, constraints.state(1, 2));
/// assert_eq!(EdgeState::Free,      constraints.state(2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeConstraints {
    nb_cities: usize,
    /// The (symmetric) state of each edge, stored row by row
    states: Vec<EdgeState>,
    /// The number of required edges incident to each city
    required: Vec<usize>,
    /// The number of forbidden edges incident to each city
    forbidden: Vec<usize>,
    nb_required: usize,
}

impl EdgeConstraints {
    /// Creates an empty set of constraints on `nb_cities` cities
    pub fn new(nb_cities: usize) -> Self {
        Self {
            nb_cities,
            states: vec![EdgeState::Free; nb_cities * nb_cities],
            required: vec![0; nb_cities],
            forbidden: vec![0; nb_cities],
            nb_required: 0,
        }
    }

    pub fn nb_cities(&self) -> usize {
        self.nb_cities
    }
    /// The state of edge `(i, j)`. A self loop is always forbidden.
    #[inline]
    pub fn state(&self, i: usize, j: usize) -> EdgeState {
        if i == j {
            EdgeState::Forbidden
        } else {
            self.states[i * self.nb_cities + j]
        }
    }
    #[inline]
    pub fn is_free(&self, i: usize, j: usize) -> bool {
        self.state(i, j) == EdgeState::Free
    }
    #[inline]
    pub fn is_required(&self, i: usize, j: usize) -> bool {
        self.state(i, j) == EdgeState::Required
    }
    #[inline]
    pub fn is_forbidden(&self, i: usize, j: usize) -> bool {
        self.state(i, j) == EdgeState::Forbidden
    }
    /// The number of required edges incident to `city`
    #[inline]
    pub fn required_degree(&self, city: usize) -> usize {
        self.required[city]
    }
    /// The number of forbidden edges incident to `city`
    #[inline]
    pub fn forbidden_degree(&self, city: usize) -> usize {
        self.forbidden[city]
    }
    /// The number of edges incident to `city` that can still be used
    #[inline]
    pub fn allowed_degree(&self, city: usize) -> usize {
        (self.nb_cities - 1).saturating_sub(self.forbidden[city])
    }
    /// The total number of required edges
    pub fn nb_required(&self) -> usize {
        self.nb_required
    }
    /// Iterates over the required edges (smallest endpoint first)
    pub fn required_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.nb_cities;
        (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
            .filter(move |(i, j)| self.is_required(*i, *j))
    }
    /// Iterates over the cities joined to `city` by a required edge
    pub fn required_neighbours(&self, city: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.nb_cities).filter(move |other| self.is_required(city, *other))
    }

    /// Imposes that edge `(i, j)` be part of the tour. This method returns
    /// false when the constraint contradicts the current ones (the edge is
    /// forbidden, or one of its endpoints now has more than two required
    /// edges).
    pub fn require(&mut self, i: usize, j: usize) -> bool {
        match self.state(i, j) {
            EdgeState::Required  => true,
            EdgeState::Forbidden => false,
            EdgeState::Free      => {
                self.set(i, j, EdgeState::Required);
                self.required[i] += 1;
                self.required[j] += 1;
                self.nb_required += 1;
                self.required[i] <= 2 && self.required[j] <= 2
            }
        }
    }
    /// Imposes that edge `(i, j)` be left out of the tour. This method returns
    /// false when the constraint contradicts the current ones (the edge is
    /// required, or one of its endpoints is left with fewer than two usable
    /// edges).
    pub fn forbid(&mut self, i: usize, j: usize) -> bool {
        match self.state(i, j) {
            EdgeState::Forbidden => true,
            EdgeState::Required  => false,
            EdgeState::Free      => {
                self.set(i, j, EdgeState::Forbidden);
                self.forbidden[i] += 1;
                self.forbidden[j] += 1;
                self.allowed_degree(i) >= 2 && self.allowed_degree(j) >= 2
            }
        }
    }

    /// Returns true iff the constraints are not trivially contradictory: no
    /// city has more than two required edges or fewer than two usable edges,
    /// and the required edges do not close any cycle that misses some city.
    pub fn is_consistent(&self) -> bool {
        self.degrees_are_consistent() && self.required_paths().is_some()
    }

    /// Derives all the constraints implied by the current ones, until a
    /// fixpoint is reached. Namely:
    ///
    /// * a city having two required edges cannot use any other edge;
    /// * a city having only two usable edges must use both of them;
    /// * the edge joining the two ends of a path of required edges is
    ///   forbidden unless that path already visits all the cities.
    ///
    /// This method returns false as soon as the constraints are found to be
    /// infeasible.
    pub fn propagate(&mut self) -> bool {
        let n = self.nb_cities;
        loop {
            let mut changed = false;
            for city in 0..n {
                if !self.degree_is_consistent(city) {
                    return false;
                }
                let required = self.required[city];
                let allowed = self.allowed_degree(city);
                if required == 2 && allowed > 2 {
                    for other in 0..n {
                        if other != city && self.is_free(city, other) {
                            if !self.forbid(city, other) {
                                return false;
                            }
                            changed = true;
                        }
                    }
                } else if allowed == 2 && required < 2 {
                    for other in 0..n {
                        if other != city && self.is_free(city, other) {
                            if !self.require(city, other) {
                                return false;
                            }
                            changed = true;
                        }
                    }
                }
            }

            match self.required_paths() {
                None => return false,
                Some(paths) => {
                    for (a, b, len) in paths {
                        if len < n - 1 && self.is_free(a, b) {
                            if !self.forbid(a, b) {
                                return false;
                            }
                            changed = true;
                        }
                    }
                }
            }

            if !changed {
                return true;
            }
        }
    }

    /// Returns the maximal paths formed by the required edges as triples
    /// `(first end, last end, number of edges)`. It returns None when the
    /// required edges close a cycle that does not visit all the cities.
    fn required_paths(&self) -> Option<Vec<(usize, usize, usize)>> {
        let n = self.nb_cities;
        if self.required.iter().any(|d| *d > 2) {
            return None;
        }

        let mut visited = vec![false; n];
        let mut paths = vec![];
        for start in 0..n {
            if visited[start] || self.required[start] != 1 {
                continue;
            }
            visited[start] = true;
            let (last, len) = self.walk(start, &mut visited);
            paths.push((start, last, len));
        }

        // whatever has two required edges and was not reached lies on a cycle
        if let Some(start) = (0..n).find(|c| !visited[*c] && self.required[*c] == 2) {
            let (_, len) = self.walk(start, &mut visited);
            if len < n {
                return None;
            }
        }
        Some(paths)
    }
    /// Follows the required edges from `start` until it reaches the end of the
    /// path (or comes back to `start`). It returns the last city reached and
    /// the number of edges traversed.
    fn walk(&self, start: usize, visited: &mut [bool]) -> (usize, usize) {
        visited[start] = true;
        let mut previous = start;
        let mut current = start;
        let mut len = 0;
        loop {
            let next = self.required_neighbours(current).find(|c| *c != previous);
            match next {
                None => return (current, len),
                Some(next) => {
                    len += 1;
                    if next == start {
                        return (start, len);
                    }
                    visited[next] = true;
                    previous = current;
                    current = next;
                }
            }
        }
    }
    fn degrees_are_consistent(&self) -> bool {
        (0..self.nb_cities).all(|c| self.degree_is_consistent(c))
    }
    fn degree_is_consistent(&self, city: usize) -> bool {
        self.required[city] <= 2 && self.allowed_degree(city) >= 2
    }
    fn set(&mut self, i: usize, j: usize, state: EdgeState) {
        let n = self.nb_cities;
        self.states[i * n + j] = state;
        self.states[j * n + i] = state;
    }
}

#[cfg(test)]
mod test_constraints {
    use crate::{EdgeConstraints, EdgeState};

    #[test]
    fn by_default_all_edges_are_free() {
        let c = EdgeConstraints::new(5);
        for i in 0..5 {
            for j in 0..5 {
                if i != j {
                    assert_eq!(EdgeState::Free, c.state(i, j));
                }
            }
            assert_eq!(4, c.allowed_degree(i));
            assert_eq!(0, c.required_degree(i));
        }
        assert!(c.is_consistent());
    }
    #[test]
    fn self_loops_are_forbidden() {
        let c = EdgeConstraints::new(5);
        assert!(c.is_forbidden(3, 3));
    }
    #[test]
    fn constraints_are_symmetric() {
        let mut c = EdgeConstraints::new(5);
        assert!(c.require(3, 1));
        assert!(c.forbid(2, 4));
        assert!(c.is_required(1, 3));
        assert!(c.is_forbidden(4, 2));
        assert_eq!(1, c.required_degree(1));
        assert_eq!(1, c.required_degree(3));
        assert_eq!(1, c.forbidden_degree(2));
        assert_eq!(1, c.forbidden_degree(4));
        assert_eq!(vec![(1, 3)], c.required_edges().collect::<Vec<_>>());
    }
    #[test]
    fn an_edge_cannot_be_both_required_and_forbidden() {
        let mut c = EdgeConstraints::new(5);
        assert!(c.require(0, 1));
        assert!(!c.forbid(0, 1));
        assert!(c.is_required(0, 1));

        assert!(c.forbid(2, 3));
        assert!(!c.require(2, 3));
        assert!(c.is_forbidden(2, 3));
    }
    #[test]
    fn a_third_required_edge_is_a_contradiction() {
        let mut c = EdgeConstraints::new(5);
        assert!(c.require(0, 1));
        assert!(c.require(0, 2));
        assert!(!c.require(0, 3));
        assert!(!c.is_consistent());
    }
    #[test]
    fn a_city_needs_two_usable_edges() {
        let mut c = EdgeConstraints::new(4);
        assert!(c.forbid(0, 1));
        assert!(!c.forbid(0, 2));
        assert!(!c.is_consistent());
    }
    #[test]
    fn a_premature_cycle_is_inconsistent() {
        let mut c = EdgeConstraints::new(5);
        assert!(c.require(0, 1));
        assert!(c.require(1, 2));
        assert!(c.is_consistent());
        assert!(c.require(2, 0));
        assert!(!c.is_consistent());
        assert!(!c.propagate());
    }
    #[test]
    fn a_complete_tour_is_consistent() {
        let mut c = EdgeConstraints::new(4);
        assert!(c.require(0, 1));
        assert!(c.require(1, 2));
        assert!(c.require(2, 3));
        assert!(c.require(3, 0));
        assert!(c.is_consistent());
        assert!(c.propagate());
        assert!(c.is_forbidden(0, 2));
        assert!(c.is_forbidden(1, 3));
    }
    #[test]
    fn two_disjoint_cycles_are_inconsistent() {
        let mut c = EdgeConstraints::new(6);
        for (i, j) in [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)] {
            assert!(c.require(i, j));
        }
        assert!(!c.is_consistent());
    }
    #[test]
    fn propagation_forbids_the_other_edges_of_a_saturated_city() {
        let mut c = EdgeConstraints::new(6);
        assert!(c.require(0, 1));
        assert!(c.require(0, 2));
        assert!(c.propagate());
        assert!(c.is_forbidden(0, 3));
        assert!(c.is_forbidden(0, 4));
        assert!(c.is_forbidden(0, 5));
        // 1 - 0 - 2 is a path: closing it would make a subtour
        assert!(c.is_forbidden(1, 2));
    }
    #[test]
    fn propagation_requires_the_last_two_usable_edges() {
        let mut c = EdgeConstraints::new(5);
        assert!(c.forbid(0, 1));
        assert!(c.forbid(0, 2));
        assert!(c.propagate());
        assert!(c.is_required(0, 3));
        assert!(c.is_required(0, 4));
        assert!(c.is_forbidden(3, 4));
    }
    #[test]
    fn propagation_closes_a_hamiltonian_path() {
        let mut c = EdgeConstraints::new(4);
        assert!(c.require(0, 1));
        assert!(c.require(1, 2));
        assert!(c.require(2, 3));
        assert!(c.propagate());
        assert!(c.is_required(3, 0));
        assert_eq!(4, c.nb_required());
    }
    #[test]
    fn propagation_fills_a_triangle() {
        let mut c = EdgeConstraints::new(3);
        assert!(c.propagate());
        assert_eq!(3, c.nb_required());
        assert!(c.is_consistent());
    }
    #[test]
    fn propagation_detects_a_dead_end() {
        let mut c = EdgeConstraints::new(5);
        assert!(c.require(0, 1));
        assert!(c.require(0, 2));
        // 1 can only reach 0 and 2 but 0 is saturated and 1-2 closes a subtour
        assert!(c.forbid(1, 3));
        assert!(c.forbid(1, 4));
        assert!(!c.propagate());
    }
}
