//! Cross-checks the backtracking search against the brute-force enumerator on seeded
//! random graphs of up to eight vertices.

use std::collections::HashSet;

use hamilton::cs::graph::hamiltonian::{Backtracking, BruteForce, HamiltonianSolver, Solution};
use hamilton::cs::graph::{Graph, Vertex};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_graph(rng: &mut ChaCha8Rng) -> Graph {
    let n = rng.gen_range(0..=8);
    let density = rng.gen_range(0.15..0.85);
    let vertices: Vec<Vertex> = (1..=n).collect();
    let mut edges = Vec::new();
    for &u in &vertices {
        for &v in &vertices {
            if u < v && rng.gen_bool(density) {
                // shuffle orientation so both orderings get exercised
                edges.push(if rng.gen_bool(0.5) { (u, v) } else { (v, u) });
            }
        }
    }
    Graph::from_edges(vertices, &edges).unwrap()
}

fn assert_valid_path(graph: &Graph, path: &[Vertex]) {
    assert_eq!(path.len(), graph.order(), "path {path:?} misses vertices");
    let distinct: HashSet<_> = path.iter().collect();
    assert_eq!(distinct.len(), path.len(), "path {path:?} repeats a vertex");
    for pair in path.windows(2) {
        assert!(graph.has_edge(pair[0], pair[1]), "path {path:?} uses missing edge {pair:?}");
    }
}

fn assert_valid_cycle(graph: &Graph, cycle: &[Vertex]) {
    assert!(cycle.len() >= 4, "cycle {cycle:?} too short");
    assert_eq!(cycle.first(), cycle.last(), "cycle {cycle:?} is not closed");
    let open = &cycle[..cycle.len() - 1];
    assert_valid_path(graph, open);
    assert!(graph.has_edge(open[open.len() - 1], open[0]));
}

fn check_properties(graph: &Graph, solution: &Solution) {
    let n = graph.order();
    assert!(solution.largest_cycle <= n);
    assert_eq!(solution.cycle_found(), solution.largest_cycle == n && n >= 3);
    if n < 3 {
        assert!(!solution.cycle_found());
        assert_eq!(solution.largest_cycle, 0);
    }
    if let Some(path) = &solution.path {
        assert_valid_path(graph, path);
    }
    if let Some(cycle) = &solution.cycle {
        assert_valid_cycle(graph, cycle);
    }
}

#[test]
fn backtracking_agrees_with_brute_force() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x4841_4d49);
    for _ in 0..300 {
        let graph = random_graph(&mut rng);
        let fast = Backtracking.solve(&graph).unwrap();
        let slow = BruteForce.solve(&graph).unwrap();

        check_properties(&graph, &fast);
        check_properties(&graph, &slow);
        if let Some(cycle) = &fast.cycle {
            assert_eq!(fast.path.as_deref(), Some(&cycle[..graph.order()]));
        }
        assert_eq!(fast.path_found(), slow.path_found(), "path disagreement on {graph:?}");
        assert_eq!(fast.cycle_found(), slow.cycle_found(), "cycle disagreement on {graph:?}");
        assert_eq!(
            fast.largest_cycle, slow.largest_cycle,
            "largest cycle disagreement on {graph:?}"
        );
    }
}

#[test]
fn complete_graphs_are_hamiltonian() {
    for n in 3..=7 {
        let vertices: Vec<Vertex> = (1..=n).collect();
        let edges: Vec<(Vertex, Vertex)> = vertices
            .iter()
            .flat_map(|&u| vertices.iter().filter(move |&&v| u < v).map(move |&v| (u, v)))
            .collect();
        let graph = Graph::from_edges(vertices.clone(), &edges).unwrap();
        for solution in [Backtracking.solve(&graph).unwrap(), BruteForce.solve(&graph).unwrap()] {
            let mut expected = vertices.clone();
            assert_eq!(solution.path.as_ref(), Some(&expected));
            expected.push(1);
            assert_eq!(solution.cycle, Some(expected));
            assert_eq!(solution.largest_cycle, n);
        }
    }
}

#[test]
fn petersen_graph_has_path_but_no_cycle() {
    let outer = [(1, 2), (2, 3), (3, 4), (4, 5), (5, 1)];
    let spokes = [(1, 6), (2, 7), (3, 8), (4, 9), (5, 10)];
    let inner = [(6, 8), (8, 10), (10, 7), (7, 9), (9, 6)];
    let edges: Vec<_> = outer.into_iter().chain(spokes).chain(inner).collect();
    let graph = Graph::from_edges(1..=10, &edges).unwrap();

    let solution = Backtracking.solve(&graph).unwrap();
    check_properties(&graph, &solution);
    assert!(solution.path_found());
    assert!(!solution.cycle_found());
    assert_eq!(solution.largest_cycle, 9);
}
