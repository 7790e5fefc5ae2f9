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

//! This module defines the errors that may be reported by this library.
//! Infeasible subproblems are never reported as errors: they are simply
//! pruned. The errors below denote situations where the search cannot even
//! start (or where an instance could not be loaded).

use std::num::{ParseFloatError, ParseIntError};

/// This enumeration groups the kind of errors that might occur when building
/// an instance or when trying to solve it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A tour only makes sense when there are at least three cities
    #[error("an instance needs at least 3 cities (got {0})")]
    NotEnoughCities(usize),
    /// The distance matrix is not a square matrix
    #[error("row {row} of the distance matrix has {len} entries (expected {expected})")]
    NotSquare { row: usize, len: usize, expected: usize },
    /// Some distance is negative, infinite or not a number
    #[error("invalid distance between {from} and {to}: {value}")]
    InvalidDistance { from: usize, to: usize, value: f64 },
    /// The distance matrix is not symmetric
    #[error("the distance from {from} to {to} differs from the distance from {to} to {from}")]
    AsymmetricDistance { from: usize, to: usize },
    /// Not the same number of x and y coordinates
    #[error("{xs} x coordinates but {ys} y coordinates")]
    CoordinateMismatch { xs: usize, ys: usize },
    /// The search completed without finding any tour
    #[error("no tour could be found")]
    NoTourFound,
    /// There was an io related error
    #[error("io error {0}")]
    Io(#[from] std::io::Error),
    /// The parser expected to read an integer but got some garbage
    #[error("parse int {0}")]
    ParseInt(#[from] ParseIntError),
    /// The parser expected to read a number but got some garbage
    #[error("parse float {0}")]
    ParseFloat(#[from] ParseFloatError),
    /// The file is not an instance
    #[error("ill formed instance: {0}")]
    Format(String),
}
