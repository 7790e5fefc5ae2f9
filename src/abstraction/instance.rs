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

//! This module defines the `Instance` trait: the contract between the solver
//! and whatever provides the distances between the cities of a problem.

/// An instance of the traveling salesman problem. It is fully characterized
/// by its number of cities and the (symmetric, non negative) distance between
/// any two of them. The solver never mutates an instance.
pub trait Instance {
    /// The number of cities $n$. Cities are identified by the integers $0..n$
    fn nb_cities(&self) -> usize;
    /// The distance between cities `i` and `j`
    fn distance(&self, i: usize, j: usize) -> f64;
    /// The length of an optimal tour, when it is known beforehand.
    /// This is only ever meant for verification purposes; the solver itself
    /// never reads it.
    fn objective(&self) -> Option<f64> {
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::Instance;

    struct Square;
    impl Instance for Square {
        fn nb_cities(&self) -> usize {
            4
        }
        fn distance(&self, i: usize, j: usize) -> f64 {
            if i == j { 0.0 } else if (i + j) % 2 == 1 { 1.0 } else { 1.4 }
        }
    }

    #[test]
    fn by_default_the_objective_is_unknown() {
        assert_eq!(None, Square.objective());
    }
}
