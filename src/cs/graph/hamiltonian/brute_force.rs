//! Brute-force Hamiltonian search by exhaustive permutation enumeration.
//!
//! Phase one walks every ordering of all vertices (ascending vertex order, lexicographic by
//! position). The first ordering whose consecutive vertices are all adjacent is the recorded
//! Hamiltonian path; the first such ordering whose last vertex is also adjacent to its first
//! is the recorded Hamiltonian cycle.
//!
//! Phase two runs only when phase one found no Hamiltonian cycle. It enumerates every subset
//! of at least three vertices and every ordering of each subset, to find the largest simple
//! cycle of any size. It never changes the recorded path.
//!
//! Runs in `O(n!)` for phase one and `O(2^n * k!)` for phase two, so it is only practical for
//! a handful of vertices. It serves as the reference against which [`Backtracking`] is checked.
//!
//! [`Backtracking`]: super::Backtracking

use std::ops::ControlFlow;

use super::{HamiltonianSolver, Solution};
use crate::cs::combinatorial::backtracking::{for_each_permutation, for_each_subset};
use crate::cs::graph::Graph;
use crate::error::Result;

#[derive(Clone, Copy, Debug, Default)]
pub struct BruteForce;

impl HamiltonianSolver for BruteForce {
    fn name(&self) -> &'static str {
        "BruteForce"
    }

    fn solve(&self, graph: &Graph) -> Result<Solution> {
        Ok(enumerate(graph))
    }
}

fn enumerate(graph: &Graph) -> Solution {
    let n = graph.order();
    if n == 0 {
        return Solution::default();
    }
    let indices: Vec<usize> = (0..n).collect();

    let mut path: Option<Vec<usize>> = None;
    let mut cycle: Option<Vec<usize>> = None;
    let mut largest_cycle = 0;

    let _ = for_each_permutation(&indices, |perm| {
        if !graph.is_walk(perm) {
            return ControlFlow::Continue(());
        }
        if path.is_none() {
            path = Some(perm.to_vec());
        }
        if closes(graph, perm) {
            largest_cycle = largest_cycle.max(perm.len());
            if cycle.is_none() {
                let mut closed = perm.to_vec();
                closed.push(perm[0]);
                cycle = Some(closed);
            }
        }
        // Later orderings can no longer change anything.
        if path.is_some() && cycle.is_some() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });

    if largest_cycle < n {
        let _ = for_each_subset(&indices, 3, |subset| -> ControlFlow<()> {
            if subset.len() <= largest_cycle {
                return ControlFlow::Continue(());
            }
            let found = for_each_permutation(subset, |perm| {
                if graph.is_walk(perm) && closes(graph, perm) {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            });
            if found.is_break() {
                largest_cycle = subset.len();
            }
            ControlFlow::Continue(())
        });
    }

    Solution {
        path: path.map(|p| graph.labels_of(&p)),
        cycle: cycle.map(|c| graph.labels_of(&c)),
        largest_cycle,
    }
}

/// A walk of three or more vertices whose last vertex is adjacent to its first.
fn closes(graph: &Graph, walk: &[usize]) -> bool {
    match (walk.first(), walk.last()) {
        (Some(&first), Some(&last)) if walk.len() >= 3 => graph.adjacent(last, first),
        _ => false,
    }
}
