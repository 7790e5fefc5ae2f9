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

//! This module provides a primal heuristic: a cheap way to come up with a
//! first tour that can be used to seed the incumbent of the solver.

use crate::{Edge, Instance, tour_cost};

/// Builds a tour with the nearest neighbor heuristic: starting from city 0,
/// it always travels to the closest city which has not been visited yet (the
/// lowest index wins in case of ties) and eventually returns to city 0.
///
/// It returns the length of the tour along with its edges; or None when the
/// instance has fewer than three cities.
///
/// # Example
/// ```
/// # use bbtsp::*;
/// let instance = TspInstance::random(8, 0, 100).unwrap();
/// let (length, tour) = nearest_neighbor_tour(&instance).unwrap();
/// assert_eq!(8, tour.len());
/// assert!(tour_order(8, &tour).is_some());
/// assert_eq!(length, tour_cost(&tour));
/// ```
pub fn nearest_neighbor_tour(instance: &dyn Instance) -> Option<(f64, Vec<Edge>)> {
    let n = instance.nb_cities();
    if n < 3 {
        return None;
    }
    let mut visited = vec![false; n];
    let mut edges = Vec::with_capacity(n);
    let mut current = 0;
    visited[current] = true;

    for _ in 1..n {
        let next = (0..n)
            .filter(|c| !visited[*c])
            .min_by(|a, b| instance.distance(current, *a).total_cmp(&instance.distance(current, *b))
                .then_with(|| a.cmp(b)))?;
        edges.push(Edge::new(current, next, instance.distance(current, next)));
        visited[next] = true;
        current = next;
    }
    edges.push(Edge::new(current, 0, instance.distance(current, 0)));

    Some((tour_cost(&edges), edges))
}

#[cfg(test)]
mod test_primal {
    use crate::*;
    use crate::test_utils::{seven_cities, brute_force};

    #[test]
    fn the_nearest_neighbor_tour_is_a_tour() {
        let inst = seven_cities();
        let (length, tour) = nearest_neighbor_tour(&inst).unwrap();
        assert_eq!(7, tour.len());
        assert!(tour_order(7, &tour).is_some());
        assert!(length >= brute_force(&inst, &EdgeConstraints::new(7)));
    }
    #[test]
    fn the_nearest_neighbor_tour_starts_with_the_closest_city() {
        let inst = seven_cities();
        let (_, tour) = nearest_neighbor_tour(&inst).unwrap();
        assert_eq!(Edge::new(0, 1, 20.0), tour[0]);
    }
}
