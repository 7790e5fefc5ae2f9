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

//! This module provides some utilities which are only useful when testing.

use crate::{EdgeConstraints, Instance, TspInstance};

/// The seven cities instance whose optimal tour is
/// 0-1, 1-2, 2-6, 6-3, 3-5, 5-4, 4-0 (length 184)
pub fn seven_cities() -> TspInstance {
    let xs = [10.0, 10.0, 20.0, 70.0, 40.0, 60.0, 50.0];
    let ys = [10.0, 30.0, 60.0, 40.0, 10.0, 20.0, 60.0];
    TspInstance::from_coordinates(&xs, &ys).unwrap()
}

/// Exhaustively enumerates all the tours complying with the given constraints
/// and returns the length of the shortest one (+inf when there is none).
pub fn brute_force(instance: &dyn Instance, constraints: &EdgeConstraints) -> f64 {
    let n = instance.nb_cities();
    let mut visited = vec![false; n];
    visited[0] = true;
    let mut best = f64::INFINITY;
    explore(instance, constraints, &mut visited, 0, 1, 0, 0.0, &mut best);
    best
}

#[allow(clippy::too_many_arguments)]
fn explore(
    instance: &dyn Instance,
    constraints: &EdgeConstraints,
    visited: &mut [bool],
    current: usize,
    depth: usize,
    used: usize,
    length: f64,
    best: &mut f64,
) {
    let n = instance.nb_cities();
    if depth == n {
        if constraints.is_forbidden(current, 0) {
            return;
        }
        let used = used + usize::from(constraints.is_required(current, 0));
        if used == constraints.nb_required() {
            *best = best.min(length + instance.distance(current, 0));
        }
        return;
    }
    for next in 0..n {
        if visited[next] || constraints.is_forbidden(current, next) {
            continue;
        }
        visited[next] = true;
        let used = used + usize::from(constraints.is_required(current, next));
        explore(instance, constraints, visited, next, depth + 1, used, length + instance.distance(current, next), best);
        visited[next] = false;
    }
}

#[cfg(test)]
mod tests {
    use crate::EdgeConstraints;
    use super::{seven_cities, brute_force};

    #[test]
    fn the_seven_cities_optimum_is_184() {
        let inst = seven_cities();
        assert_eq!(184.0, brute_force(&inst, &EdgeConstraints::new(7)));
    }
    #[test]
    fn contradictory_constraints_admit_no_tour() {
        let inst = seven_cities();
        let mut cons = EdgeConstraints::new(7);
        cons.require(1, 2);
        cons.require(2, 3);
        cons.require(3, 1);
        assert_eq!(f64::INFINITY, brute_force(&inst, &cons));
    }
}
