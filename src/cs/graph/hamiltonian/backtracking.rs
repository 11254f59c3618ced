//! Depth-first backtracking search for Hamiltonian paths and cycles.
//!
//! From each start vertex (ascending), the current path is extended one unvisited neighbor
//! at a time, trying neighbors in edge insertion order and undoing each choice before the
//! next. Every partial path of three or more vertices whose tail is adjacent to its start
//! closes a cycle, which feeds the largest-cycle figure even when no Hamiltonian cycle
//! exists. The first Hamiltonian cycle ends the whole search.
//!
//! Every complete walk replaces the recorded Hamiltonian path, so a reported cycle always
//! comes with its own open path, and without a cycle the path is the last walk explored.
//!
//! The traversal keeps its own stack (the path plus a neighbor cursor per depth), so graph
//! order is not limited by the call stack.
//!
//! # Example
//! ```
//! use hamilton::cs::graph::Graph;
//! use hamilton::cs::graph::hamiltonian::{Backtracking, HamiltonianSolver};
//!
//! // Two triangles sharing vertex 3: a Hamiltonian path but no Hamiltonian cycle.
//! let g = Graph::from_edges(1..=5, &[(1, 2), (2, 3), (3, 1), (3, 4), (4, 5), (5, 3)]).unwrap();
//! let solution = Backtracking.solve(&g).unwrap();
//! assert_eq!(solution.path, Some(vec![5, 4, 3, 1, 2]));
//! assert!(solution.cycle.is_none());
//! assert_eq!(solution.largest_cycle, 3);
//! ```

use std::ops::ControlFlow;

use bitvec::prelude::*;

use super::{HamiltonianSolver, Solution};
use crate::cs::graph::Graph;
use crate::error::Result;

#[derive(Clone, Copy, Debug, Default)]
pub struct Backtracking;

impl HamiltonianSolver for Backtracking {
    fn name(&self) -> &'static str {
        "Backtracking"
    }

    fn solve(&self, graph: &Graph) -> Result<Solution> {
        Ok(Search::new(graph).run())
    }
}

/// Mutable state of one search. Indices refer to the graph's internal vertex order.
struct Search<'g> {
    graph: &'g Graph,
    path: Vec<usize>,
    /// `cursors[d]` is the next position to try in the adjacency list of `path[d]`.
    cursors: Vec<usize>,
    visited: BitVec,
    hamiltonian_path: Option<Vec<usize>>,
    hamiltonian_cycle: Option<Vec<usize>>,
    largest_cycle: usize,
}

impl<'g> Search<'g> {
    fn new(graph: &'g Graph) -> Self {
        let n = graph.order();
        Search {
            graph,
            path: Vec::with_capacity(n),
            cursors: Vec::with_capacity(n),
            visited: bitvec![0; n],
            hamiltonian_path: None,
            hamiltonian_cycle: None,
            largest_cycle: 0,
        }
    }

    fn run(mut self) -> Solution {
        for start in 0..self.graph.order() {
            if self.explore(start).is_break() {
                break;
            }
        }
        Solution {
            path: self.hamiltonian_path.map(|p| self.graph.labels_of(&p)),
            cycle: self.hamiltonian_cycle.map(|c| self.graph.labels_of(&c)),
            largest_cycle: self.largest_cycle,
        }
    }

    /// Explores every simple path starting at `start`. Breaks once a Hamiltonian cycle is found.
    fn explore(&mut self, start: usize) -> ControlFlow<()> {
        let graph = self.graph;
        self.path.clear();
        self.cursors.clear();
        self.visited.fill(false);
        self.enter(start)?;

        while let Some(&tail) = self.path.last() {
            let depth = self.path.len() - 1;
            let neighbors = graph.neighbor_indices(tail);
            let from = self.cursors[depth];
            let next = neighbors[from..]
                .iter()
                .position(|&v| !self.visited[v])
                .map(|offset| from + offset);

            match next {
                Some(pos) => {
                    self.cursors[depth] = pos + 1;
                    self.enter(neighbors[pos])?;
                }
                None => self.leave(),
            }
        }
        ControlFlow::Continue(())
    }

    /// Appends `v` to the path and records any cycle or Hamiltonian path it completes.
    fn enter(&mut self, v: usize) -> ControlFlow<()> {
        self.path.push(v);
        self.cursors.push(0);
        self.visited.set(v, true);

        let len = self.path.len();
        let start = self.path[0];
        let closes = len >= 3 && self.graph.adjacent(v, start);
        if closes {
            self.largest_cycle = self.largest_cycle.max(len);
        }

        if len == self.graph.order() {
            self.hamiltonian_path = Some(self.path.clone());
            if closes {
                let mut cycle = self.path.clone();
                cycle.push(start);
                self.hamiltonian_cycle = Some(cycle);
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    fn leave(&mut self) {
        if let Some(v) = self.path.pop() {
            self.cursors.pop();
            self.visited.set(v, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(vertices: impl IntoIterator<Item = usize>, edges: &[(usize, usize)]) -> Solution {
        let g = Graph::from_edges(vertices, edges).unwrap();
        Backtracking.solve(&g).unwrap()
    }

    #[test]
    fn test_square_with_diagonal() {
        let s = solve(1..=4, &[(1, 2), (1, 4), (2, 3), (2, 4), (3, 4)]);
        assert_eq!(s.path, Some(vec![1, 2, 3, 4]));
        assert_eq!(s.cycle, Some(vec![1, 2, 3, 4, 1]));
        assert_eq!(s.largest_cycle, 4);
    }

    #[test]
    fn test_six_vertex_cycle_follows_edge_order() {
        let s = solve(
            1..=6,
            &[
                (1, 5),
                (1, 6),
                (2, 3),
                (2, 4),
                (2, 6),
                (3, 4),
                (3, 5),
                (3, 6),
                (4, 5),
                (4, 6),
            ],
        );
        assert_eq!(s.path, Some(vec![1, 5, 3, 2, 4, 6]));
        assert_eq!(s.cycle, Some(vec![1, 5, 3, 2, 4, 6, 1]));
        assert_eq!(s.largest_cycle, 6);
    }

    #[test]
    fn test_tree_has_nothing() {
        let s = solve(1..=5, &[(1, 5), (2, 3), (3, 5), (4, 5)]);
        assert_eq!(s, Solution::default());
    }

    #[test]
    fn test_path_without_cycle() {
        let s = solve(1..=4, &[(1, 2), (2, 3), (3, 4)]);
        assert_eq!(s.path, Some(vec![4, 3, 2, 1]));
        assert!(s.cycle.is_none());
        assert_eq!(s.largest_cycle, 0);
    }

    #[test]
    fn test_last_path_is_kept_when_no_cycle() {
        // Triangle 1-2-3 with pendant 4: walks from 4 are explored last.
        let s = solve(1..=4, &[(1, 2), (2, 3), (3, 1), (3, 4)]);
        assert_eq!(s.path, Some(vec![4, 3, 1, 2]));
        assert!(s.cycle.is_none());
        assert_eq!(s.largest_cycle, 3);
    }

    #[test]
    fn test_largest_cycle_not_through_first_start() {
        // Vertex 1 is a pendant; the 4-cycle 2-3-4-5 does not contain it.
        let s = solve(1..=5, &[(1, 2), (2, 3), (3, 4), (4, 5), (5, 2)]);
        assert_eq!(s.path, Some(vec![5, 4, 3, 2, 1]));
        assert!(s.cycle.is_none());
        assert_eq!(s.largest_cycle, 4);
    }

    #[test]
    fn test_trivial_graphs() {
        assert_eq!(solve(std::iter::empty(), &[]), Solution::default());

        let single = solve([9], &[]);
        assert_eq!(single.path, Some(vec![9]));
        assert!(single.cycle.is_none());
        assert_eq!(single.largest_cycle, 0);

        let pair = solve([1, 2], &[(1, 2)]);
        assert_eq!(pair.path, Some(vec![2, 1]));
        assert!(pair.cycle.is_none());
        assert_eq!(pair.largest_cycle, 0);

        let apart = solve([1, 2], &[]);
        assert_eq!(apart, Solution::default());
    }

    #[test]
    fn test_path_is_open_form_of_reported_cycle() {
        // [1, 2, 3, 4] is explored first but 4-1 is missing; [1, 2, 4, 3] closes.
        let s = solve(1..=4, &[(1, 2), (2, 3), (3, 4), (1, 3), (2, 4)]);
        let cycle = s.cycle.unwrap();
        assert_eq!(cycle, vec![1, 2, 4, 3, 1]);
        assert_eq!(s.path.as_deref(), Some(&cycle[..4]));
        assert_eq!(s.largest_cycle, 4);
    }

    #[test]
    fn test_triangle() {
        let s = solve([3, 1, 2], &[(1, 2), (2, 3), (3, 1)]);
        assert_eq!(s.path, Some(vec![1, 2, 3]));
        assert_eq!(s.cycle, Some(vec![1, 2, 3, 1]));
        assert_eq!(s.largest_cycle, 3);
    }

    #[test]
    fn test_non_contiguous_labels() {
        let s = solve([10, 20, 30, 40], &[(10, 30), (30, 20), (20, 40), (40, 10)]);
        assert_eq!(s.cycle, Some(vec![10, 30, 20, 40, 10]));
    }

    #[test]
    fn test_duplicate_edges_do_not_change_result() {
        let plain = solve(1..=4, &[(1, 2), (2, 3), (3, 4), (4, 1)]);
        let noisy = solve(1..=4, &[(1, 2), (2, 1), (2, 3), (3, 3), (3, 4), (4, 1), (1, 4)]);
        assert_eq!(plain, noisy);
    }

    #[test]
    fn test_long_cycle_does_not_exhaust_stack() {
        let n = 5_000;
        let edges: Vec<(usize, usize)> = (1..n).map(|v| (v, v + 1)).chain([(n, 1)]).collect();
        let s = solve(1..=n, &edges);
        assert_eq!(s.largest_cycle, n);
        let cycle = s.cycle.unwrap();
        assert_eq!(cycle.len(), n + 1);
        assert_eq!(cycle.first(), cycle.last());
    }
}
