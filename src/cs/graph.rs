//! # Undirected Graph Model
//!
//! A fixed vertex set plus a deduplicated list of undirected edges, as consumed by the
//! Hamiltonian searches in [`hamiltonian`].
//!
//! Vertices are arbitrary `usize` identifiers. Internally they are stored sorted ascending
//! and addressed by their index in that order, which fixes a deterministic iteration order
//! for every algorithm. Each vertex keeps its neighbors in the order the edges were first
//! added, so searches that walk adjacency lists reproduce the same result for the same input.
//!
//! ## Example
//! ```rust
//! use hamilton::cs::graph::Graph;
//!
//! let g = Graph::from_edges([1, 2, 3], &[(1, 2), (2, 3), (3, 2), (1, 1)]).unwrap();
//! assert_eq!(g.order(), 3);
//! // the reversed duplicate and the self-loop are ignored
//! assert_eq!(g.size(), 2);
//! assert!(g.has_edge(3, 2));
//! assert!(!g.has_edge(1, 1));
//! ```

pub mod hamiltonian;

use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};

/// Vertex identifier as supplied by the caller.
pub type Vertex = usize;

/// Simple undirected graph with insertion-ordered adjacency lists and an edge lookup set.
#[derive(Clone, Debug)]
pub struct Graph {
    /// Vertex identifiers, ascending. `labels[i]` is the vertex at index `i`.
    labels: Vec<Vertex>,
    index: HashMap<Vertex, usize>,
    /// `adjacency[i]` lists neighbor indices of vertex `i` in first-seen edge order.
    adjacency: Vec<Vec<usize>>,
    /// Every edge in both orientations, as index pairs.
    edges: HashSet<(usize, usize)>,
    edge_count: usize,
}

impl Graph {
    /// Creates a graph over `vertices` with no edges. Repeated vertices are collapsed.
    pub fn new<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = Vertex>,
    {
        let mut labels: Vec<Vertex> = vertices.into_iter().collect();
        labels.sort_unstable();
        labels.dedup();

        let n = labels.len();
        let index = labels.iter().enumerate().map(|(i, &v)| (v, i)).collect();
        Graph {
            labels,
            index,
            adjacency: vec![Vec::new(); n],
            edges: HashSet::new(),
            edge_count: 0,
        }
    }

    /// Builds a graph from a vertex set and an edge list in one step.
    ///
    /// # Errors
    /// [`Error::UnknownVertex`] if an edge references a vertex outside `vertices`.
    pub fn from_edges<I>(vertices: I, edges: &[(Vertex, Vertex)]) -> Result<Self>
    where
        I: IntoIterator<Item = Vertex>,
    {
        let mut graph = Graph::new(vertices);
        for &(u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Adds the undirected edge `{u, v}`.
    ///
    /// Returns `Ok(false)` when nothing was inserted: `u == v`, or the edge already
    /// exists in either orientation.
    ///
    /// # Errors
    /// [`Error::UnknownVertex`] if either endpoint is not a vertex of this graph.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex) -> Result<bool> {
        let a = self.index_of(u)?;
        let b = self.index_of(v)?;
        if a == b || self.adjacent(a, b) {
            return Ok(false);
        }
        self.edges.insert((a, b));
        self.edges.insert((b, a));
        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
        self.edge_count += 1;
        Ok(true)
    }

    /// Number of vertices.
    #[must_use]
    pub fn order(&self) -> usize {
        self.labels.len()
    }

    /// Number of distinct undirected edges.
    #[must_use]
    pub fn size(&self) -> usize {
        self.edge_count
    }

    /// Vertices in ascending order.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.labels
    }

    /// Whether `{u, v}` is an edge. Unknown vertices and self-loops are never adjacent.
    #[must_use]
    pub fn has_edge(&self, u: Vertex, v: Vertex) -> bool {
        match (self.index.get(&u), self.index.get(&v)) {
            (Some(&a), Some(&b)) => self.adjacent(a, b),
            _ => false,
        }
    }

    /// Neighbors of vertex `u` in first-seen edge order.
    ///
    /// # Errors
    /// [`Error::UnknownVertex`] if `u` is not a vertex of this graph.
    pub fn neighbors(&self, u: Vertex) -> Result<Vec<Vertex>> {
        let a = self.index_of(u)?;
        Ok(self.adjacency[a].iter().map(|&b| self.labels[b]).collect())
    }

    fn index_of(&self, v: Vertex) -> Result<usize> {
        self.index.get(&v).copied().ok_or(Error::UnknownVertex(v))
    }

    pub(crate) fn labels_of(&self, indices: &[usize]) -> Vec<Vertex> {
        indices.iter().map(|&i| self.labels[i]).collect()
    }

    pub(crate) fn adjacent(&self, a: usize, b: usize) -> bool {
        self.edges.contains(&(a, b))
    }

    pub(crate) fn neighbor_indices(&self, a: usize) -> &[usize] {
        &self.adjacency[a]
    }

    /// True when every consecutive pair of `indices` is adjacent.
    pub(crate) fn is_walk(&self, indices: &[usize]) -> bool {
        indices.windows(2).all(|w| self.adjacent(w[0], w[1]))
    }
}
