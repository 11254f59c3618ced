//! # Hamiltonian Paths and Cycles
//!
//! Decides whether an undirected [`Graph`] has a Hamiltonian path and/or a Hamiltonian cycle,
//! and reports the size of the largest simple cycle when no Hamiltonian cycle exists.
//!
//! Two exhaustive strategies are provided behind the [`HamiltonianSolver`] trait:
//! - [`Backtracking`]: depth-first extension of a path along adjacency lists, stopping at the
//!   first Hamiltonian cycle.
//! - [`BruteForce`]: enumeration of every vertex permutation, then of every subset's
//!   permutations to size the largest cycle. Used as the reference oracle.
//!
//! Both are exponential and meant for small graphs. [`Simple`] and [`BestCase`] are reserved
//! slots that report [`Error::Unsupported`].
//!
//! ## Example
//! ```rust
//! use hamilton::cs::graph::Graph;
//! use hamilton::cs::graph::hamiltonian::{Algorithm, HamiltonianSolver};
//!
//! let g = Graph::from_edges(1..=4, &[(1, 2), (1, 4), (2, 3), (2, 4), (3, 4)]).unwrap();
//! let solution = Algorithm::Backtracking.solve(&g).unwrap();
//! assert_eq!(solution.path, Some(vec![1, 2, 3, 4]));
//! assert_eq!(solution.cycle, Some(vec![1, 2, 3, 4, 1]));
//! assert_eq!(solution.largest_cycle, 4);
//! ```

pub mod backtracking;
pub mod brute_force;

use std::fmt;
use std::str::FromStr;

pub use backtracking::Backtracking;
pub use brute_force::BruteForce;

use crate::cs::graph::{Graph, Vertex};
use crate::error::{Error, Result};

/// Outcome of a Hamiltonian search.
///
/// `path` is a Hamiltonian path in visiting order. `cycle` is a Hamiltonian cycle closed by
/// repeating its first vertex at the end. `largest_cycle` is the vertex count of the largest
/// simple cycle found, equal to the graph order whenever `cycle` is present and `0` when the
/// graph has no cycle at all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    pub path: Option<Vec<Vertex>>,
    pub cycle: Option<Vec<Vertex>>,
    pub largest_cycle: usize,
}

impl Solution {
    #[must_use]
    pub fn path_found(&self) -> bool {
        self.path.is_some()
    }

    #[must_use]
    pub fn cycle_found(&self) -> bool {
        self.cycle.is_some()
    }

    /// Splits into `(path_found, path, cycle_found, cycle, largest_cycle)`.
    #[must_use]
    pub fn into_parts(self) -> (bool, Option<Vec<Vertex>>, bool, Option<Vec<Vertex>>, usize) {
        (
            self.path.is_some(),
            self.path,
            self.cycle.is_some(),
            self.cycle,
            self.largest_cycle,
        )
    }
}

/// A strategy that searches a graph for Hamiltonian paths and cycles.
///
/// Implementations are pure: they read the graph, hold no state between calls and may be
/// invoked concurrently on different graphs.
pub trait HamiltonianSolver {
    /// Name reported alongside results.
    fn name(&self) -> &'static str;

    /// Searches `graph`.
    ///
    /// # Errors
    /// Only [`Error::Unsupported`] for strategies without an implementation. Graphs
    /// without a path or cycle are reported through the returned [`Solution`].
    fn solve(&self, graph: &Graph) -> Result<Solution>;
}

/// Heuristic variant. Not implemented.
#[derive(Clone, Copy, Debug, Default)]
pub struct Simple;

impl HamiltonianSolver for Simple {
    fn name(&self) -> &'static str {
        "Simple"
    }

    fn solve(&self, _graph: &Graph) -> Result<Solution> {
        Err(Error::Unsupported(self.name()))
    }
}

/// Best-case variant. Not implemented.
#[derive(Clone, Copy, Debug, Default)]
pub struct BestCase;

impl HamiltonianSolver for BestCase {
    fn name(&self) -> &'static str {
        "BestCase"
    }

    fn solve(&self, _graph: &Graph) -> Result<Solution> {
        Err(Error::Unsupported(self.name()))
    }
}

/// Selects one of the available strategies by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Backtracking,
    BruteForce,
    Simple,
    BestCase,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Backtracking,
        Algorithm::BruteForce,
        Algorithm::Simple,
        Algorithm::BestCase,
    ];

    fn solver(self) -> &'static dyn HamiltonianSolver {
        match self {
            Algorithm::Backtracking => &Backtracking,
            Algorithm::BruteForce => &BruteForce,
            Algorithm::Simple => &Simple,
            Algorithm::BestCase => &BestCase,
        }
    }
}

impl HamiltonianSolver for Algorithm {
    fn name(&self) -> &'static str {
        self.solver().name()
    }

    fn solve(&self, graph: &Graph) -> Result<Solution> {
        self.solver().solve(graph)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().to_lowercase() == key)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}
