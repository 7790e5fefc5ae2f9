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

//! This module implements the construction of a minimum 1-tree complying with
//! a set of edge constraints. It is the skeleton shared by all the bounding
//! strategies.

use crate::{Edge, EdgeConstraints, Instance, OneTree};

/// The designated city which is attached to the spanning tree of the others
/// by means of its two cheapest edges.
pub const ROOT: usize = 0;

/// Computes a minimum 1-tree complying with the given constraints when the
/// distance between two cities `i` and `j` is reshaped as
/// `distance(i, j) + penalties[i] + penalties[j]`.
///
/// The bound of the resulting one tree is its reshaped length minus twice the
/// sum of the penalties. With a null penalty vector, this is nothing but the
/// length of the 1-tree. The edges of the witness always carry their actual
/// distance.
///
/// Ties are broken deterministically: among equally weighted edges, the one
/// having the lowest pair of endpoints is selected first.
pub fn build_one_tree(instance: &dyn Instance, constraints: &EdgeConstraints, penalties: &[f64]) -> OneTree {
    let n = instance.nb_cities();
    if n < 3 || constraints.nb_cities() != n || penalties.len() != n || !constraints.is_consistent() {
        return OneTree::infeasible(n);
    }
    let weight = |i: usize, j: usize| instance.distance(i, j) + penalties[i] + penalties[j];

    let mut tree = TreeBuilder::new(n);
    let mut forest = DisjointSets::new(n);

    // 1. spanning tree over all cities but the root (kruskal)
    for (i, j) in constraints.required_edges().filter(|(i, j)| *i != ROOT && *j != ROOT) {
        if !forest.union(i, j) {
            return OneTree::infeasible(n);
        }
        tree.add(i, j, weight(i, j), instance.distance(i, j));
    }

    let mut candidates = vec![];
    for i in (ROOT + 1)..n {
        for j in (i + 1)..n {
            if constraints.is_free(i, j) {
                candidates.push((weight(i, j), i, j));
            }
        }
    }
    candidates.sort_unstable_by(|a, b| a.0.total_cmp(&b.0)
        .then_with(|| a.1.cmp(&b.1))
        .then_with(|| a.2.cmp(&b.2)));

    for (w, i, j) in candidates {
        if tree.edges.len() == n - 2 {
            break;
        }
        if forest.union(i, j) {
            tree.add(i, j, w, instance.distance(i, j));
        }
    }
    if tree.edges.len() != n - 2 {
        // the usable edges cannot connect the cities
        return OneTree::infeasible(n);
    }

    // 2. attach the root with its required edges, then its cheapest ones
    for other in constraints.required_neighbours(ROOT) {
        tree.add(ROOT, other, weight(ROOT, other), instance.distance(ROOT, other));
    }
    let mut candidates = ((ROOT + 1)..n)
        .filter(|other| constraints.is_free(ROOT, *other))
        .map(|other| (weight(ROOT, other), other))
        .collect::<Vec<_>>();
    candidates.sort_unstable_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

    for (w, other) in candidates {
        if tree.degrees[ROOT] >= 2 {
            break;
        }
        tree.add(ROOT, other, w, instance.distance(ROOT, other));
    }
    if tree.degrees[ROOT] != 2 {
        return OneTree::infeasible(n);
    }

    let correction = 2.0 * penalties.iter().sum::<f64>();
    OneTree {
        bound: tree.weight - correction,
        edges: tree.edges,
        degrees: tree.degrees,
    }
}

/// Accumulates the edges of the one tree being built
struct TreeBuilder {
    edges: Vec<Edge>,
    degrees: Vec<usize>,
    weight: f64,
}
impl TreeBuilder {
    fn new(n: usize) -> Self {
        Self { edges: Vec::with_capacity(n), degrees: vec![0; n], weight: 0.0 }
    }
    fn add(&mut self, i: usize, j: usize, weight: f64, distance: f64) {
        self.edges.push(Edge::new(i, j, distance));
        self.degrees[i] += 1;
        self.degrees[j] += 1;
        self.weight += weight;
    }
}

/// A plain union-find structure (with path compression)
struct DisjointSets {
    parent: Vec<usize>,
}
impl DisjointSets {
    fn new(n: usize) -> Self {
        Self { parent: (0..n).collect() }
    }
    fn find(&mut self, i: usize) -> usize {
        if self.parent[i] != i {
            let root = self.find(self.parent[i]);
            self.parent[i] = root;
        }
        self.parent[i]
    }
    /// Merges the sets of `i` and `j`. Returns false when they already were
    /// in the same set.
    fn union(&mut self, i: usize, j: usize) -> bool {
        let ri = self.find(i);
        let rj = self.find(j);
        if ri == rj {
            false
        } else {
            self.parent[ri] = rj;
            true
        }
    }
}
