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

//! This module provides `TspInstance`: a plain distance matrix implementing
//! the `Instance` trait, along with the means to build one from coordinates,
//! at random or from a file. It also provides `check_instance`, the
//! validation every instance goes through before being solved.

use std::{fs::File, io::{BufRead, BufReader}, path::Path};

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{Error, Instance, EPSILON};

/// This structure represents a (symmetric) TSP instance
#[derive(Debug, Clone, PartialEq)]
pub struct TspInstance {
    /// This is the distance matrix between any two cities
    distances: Vec<Vec<f64>>,
    /// The length of an optimal tour (when it is known)
    objective: Option<f64>,
}

impl TspInstance {
    /// Creates an instance from the given distance matrix. The matrix must be
    /// square, symmetric, and hold finite non negative distances between at
    /// least three cities.
    pub fn from_matrix(distances: Vec<Vec<f64>>) -> Result<Self, Error> {
        let n = distances.len();
        for (row, line) in distances.iter().enumerate() {
            if line.len() != n {
                return Err(Error::NotSquare { row, len: line.len(), expected: n });
            }
        }
        let instance = Self { distances, objective: None };
        check_instance(&instance)?;
        Ok(instance)
    }
    /// Creates an instance whose cities are points of the plane. The distance
    /// between two cities is their euclidean distance rounded to the nearest
    /// integer (as in the `EUC_2D` instances of TSPLIB).
    ///
    /// # Example
    /// ```
    /// # use bbtsp::*;
    /// let instance = TspInstance::from_coordinates(&[0.0, 0.0, 3.0], &[0.0, 4.0, 0.0]).unwrap();
    /// assert_eq!(5.0, instance.distance(1, 2));
    /// ```
    pub fn from_coordinates(xs: &[f64], ys: &[f64]) -> Result<Self, Error> {
        if xs.len() != ys.len() {
            return Err(Error::CoordinateMismatch { xs: xs.len(), ys: ys.len() });
        }
        let n = xs.len();
        let mut distances = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in 0..n {
                let dx = xs[i] - xs[j];
                let dy = ys[i] - ys[j];
                distances[i][j] = (dx * dx + dy * dy).sqrt().round();
            }
        }
        Self::from_matrix(distances)
    }
    /// Creates a random instance of `nb_cities` cities whose integer
    /// coordinates are drawn uniformly in `[0, max_coord)`. The same seed
    /// always yields the same instance.
    pub fn random(nb_cities: usize, seed: u64, max_coord: u32) -> Result<Self, Error> {
        let mut rng = StdRng::seed_from_u64(seed);
        let max_coord = max_coord.max(1);
        let mut xs = Vec::with_capacity(nb_cities);
        let mut ys = Vec::with_capacity(nb_cities);
        for _ in 0..nb_cities {
            xs.push(rng.gen_range(0..max_coord) as f64);
            ys.push(rng.gen_range(0..max_coord) as f64);
        }
        Self::from_coordinates(&xs, &ys)
    }
    /// Attaches the known length of an optimal tour to this instance
    pub fn with_objective(mut self, objective: f64) -> Self {
        self.objective = Some(objective);
        self
    }
    /// The distance matrix of this instance
    pub fn distances(&self) -> &[Vec<f64>] {
        &self.distances
    }
}

impl Instance for TspInstance {
    fn nb_cities(&self) -> usize {
        self.distances.len()
    }
    fn distance(&self, i: usize, j: usize) -> f64 {
        self.distances[i][j]
    }
    fn objective(&self) -> Option<f64> {
        self.objective
    }
}

/// Makes sure that the given instance can be solved: it must comprise at
/// least three cities, and the distance between any two of them must be
/// finite, non negative and symmetric.
pub fn check_instance(instance: &dyn Instance) -> Result<(), Error> {
    let n = instance.nb_cities();
    if n < 3 {
        return Err(Error::NotEnoughCities(n));
    }
    for from in 0..n {
        for to in 0..n {
            if from == to {
                continue;
            }
            let value = instance.distance(from, to);
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidDistance { from, to, value });
            }
            if (value - instance.distance(to, from)).abs() > EPSILON {
                return Err(Error::AsymmetricDistance { from, to });
            }
        }
    }
    Ok(())
}

/// This function is used to read an instance from file. It returns either an
/// instance if everything went on well or an error describing the problem.
///
/// The expected format is the following: lines starting with a `#` are
/// comments. The first line gives the number of cities `n`, optionally
/// followed by the length of an optimal tour. The next `n` lines give the
/// `x` and `y` coordinates of each city.
pub fn read_instance<P: AsRef<Path>>(fname: P) -> Result<TspInstance, Error> {
    let f = File::open(fname)?;
    let f = BufReader::new(f);

    let mut nb_cities = None;
    let mut objective = None;
    let mut xs = vec![];
    let mut ys = vec![];

    for line in f.lines() {
        let line = line?;
        let line = line.trim();

        // skip comment lines
        if line.starts_with('#') || line.is_empty() {
            continue;
        }

        let mut tokens = line.split_whitespace();
        match nb_cities {
            None => {
                let n = next_token(&mut tokens, "number of cities")?.parse::<usize>()?;
                nb_cities = Some(n);
                if let Some(obj) = tokens.next() {
                    objective = Some(obj.parse::<f64>()?);
                }
            }
            Some(n) => {
                if xs.len() == n {
                    return Err(Error::Format(format!("more than {n} cities")));
                }
                xs.push(next_token(&mut tokens, "x coordinate")?.parse::<f64>()?);
                ys.push(next_token(&mut tokens, "y coordinate")?.parse::<f64>()?);
            }
        }
    }

    let n = nb_cities.ok_or_else(|| Error::Format("empty file".to_string()))?;
    if xs.len() != n {
        return Err(Error::Format(format!("expected {n} cities, found {}", xs.len())));
    }
    let instance = TspInstance::from_coordinates(&xs, &ys)?;
    Ok(match objective {
        Some(obj) => instance.with_objective(obj),
        None => instance,
    })
}

fn next_token<'a>(tokens: &mut impl Iterator<Item = &'a str>, what: &str) -> Result<&'a str, Error> {
    tokens.next().ok_or_else(|| Error::Format(format!("missing {what}")))
}
