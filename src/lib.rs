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
//! # BBTSP
//! BBTSP is an exact solver for the symmetric traveling salesman problem. It
//! finds a shortest Hamiltonian cycle of a complete weighted graph by means of
//! branch-and-bound, where every subproblem is bounded by a *one tree*: a
//! spanning tree of the cities `1..n` plus the two cheapest edges that connect
//! city 0 to that tree.
//!
//! Two lower bounds are available:
//!
//!  + `SimpleOneTree` computes the plain minimum one tree of a subproblem;
//!  + `HeldKarpOneTree` improves on it with a subgradient optimisation of
//!    the node penalties (Held and Karp's Lagrangian relaxation).
//!
//! Both are exact: they only change how many subproblems get explored
//! before optimality is proved.
//!
//! ## Quick Example
//! ```
//! use bbtsp::*;
//!
//! let instance = TspInstance::from_coordinates(
//!     &[10.0, 10.0, 20.0, 70.0, 40.0, 60.0, 50.0],
//!     &[10.0, 30.0, 60.0, 40.0, 10.0, 20.0, 60.0]).unwrap();
//!
//! let bound      = HeldKarpOneTree::default();
//! let mut fringe = SimpleFringe::new(MinLB);
//! let mut solver = DefaultSolver::new(&instance, &bound, &mut fringe);
//!
//! let outcome = solver.minimize().unwrap();
//! assert!(outcome.is_exact);
//! assert_eq!(Some(184.0), outcome.best_value);
//!
//! let tour = solver.best_solution().unwrap();
//! assert_eq!(Some(vec![0, 1, 2, 6, 3, 5, 4]), tour_order(7, &tour));
//! ```
//!
//! When all you need is the optimal tour, the `optimize` function does all of
//! the above in one call.

mod common;
mod error;
mod abstraction;
mod implementation;

pub use common::*;
pub use error::*;
pub use abstraction::*;
pub use implementation::*;

#[cfg(test)]
mod test_utils;
