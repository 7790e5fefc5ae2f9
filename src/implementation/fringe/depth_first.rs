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

//! This module provides the implementation of a depth first fringe: the last
//! subproblem to have been pushed is the first one to be popped. The solver
//! pushes the children of a node from the least to the most promising one,
//! so this fringe dives towards the most promising leaf while its memory use
//! stays bounded by the depth of the search times the branching factor.

use crate::{Fringe, SubProblem};

#[derive(Debug, Default, Clone)]
pub struct DepthFirstFringe {
    stack: Vec<SubProblem>,
}
impl DepthFirstFringe {
    pub fn new() -> Self {
        Self::default()
    }
}
impl Fringe for DepthFirstFringe {
    fn push(&mut self, node: SubProblem) {
        self.stack.push(node)
    }

    fn pop(&mut self) -> Option<SubProblem> {
        self.stack.pop()
    }

    fn clear(&mut self) {
        self.stack.clear()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}
