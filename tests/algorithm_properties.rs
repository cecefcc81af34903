//! Property checks on seeded random graphs
//!
//! Each algorithm is compared against a brute-force oracle on small graphs.

use arbor::{Graph, GraphError, GraphMode, NodeId, TopologicalSortConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEEDS: u64 = 40;

/// Random DAG: edges only go from lower to higher position in a shuffled rank
fn random_dag(rng: &mut StdRng, n: usize, density: f64) -> Graph {
    let mut graph = Graph::new(GraphMode::Directed);
    let nodes: Vec<NodeId> = (0..n).map(|_| graph.add_node()).collect();

    let mut rank: Vec<usize> = (0..n).collect();
    for i in (1..n).rev() {
        let j = rng.gen_range(0..=i);
        rank.swap(i, j);
    }

    for u in 0..n {
        for v in 0..n {
            if rank[u] < rank[v] && rng.gen_bool(density) {
                graph.add_edge(nodes[u], nodes[v]).unwrap();
            }
        }
    }
    graph
}

fn random_digraph(rng: &mut StdRng, n: usize, density: f64) -> Graph {
    let mut graph = Graph::new(GraphMode::Directed);
    let nodes: Vec<NodeId> = (0..n).map(|_| graph.add_node()).collect();
    for &u in &nodes {
        for &v in &nodes {
            if rng.gen_bool(density) {
                graph.add_edge(u, v).unwrap();
            }
        }
    }
    graph
}

fn random_weighted(rng: &mut StdRng, n: usize, m: usize) -> Graph {
    let mut graph = Graph::new(GraphMode::Undirected);
    let nodes: Vec<NodeId> = (0..n).map(|_| graph.add_node()).collect();
    for _ in 0..m {
        let u = nodes[rng.gen_range(0..n)];
        let v = nodes[rng.gen_range(0..n)];
        graph.add_weighted_edge(u, v, rng.gen_range(-3..10)).unwrap();
    }
    graph
}

/// reach[u][v]: v reachable from u over zero or more edges
fn reachability(graph: &Graph) -> Vec<Vec<bool>> {
    let n = graph.node_count();
    let mut reach = vec![vec![false; n]; n];
    for start in graph.nodes() {
        let mut stack = vec![start];
        reach[start.index()][start.index()] = true;
        while let Some(u) = stack.pop() {
            for v in graph.neighbors(u) {
                if !reach[start.index()][v.index()] {
                    reach[start.index()][v.index()] = true;
                    stack.push(v);
                }
            }
        }
    }
    reach
}

/// Count connected components of `n` nodes joined by the chosen edges;
/// None if the edges contain a cycle.
fn forest_components(n: usize, edges: &[(usize, usize)]) -> Option<usize> {
    let mut parent: Vec<usize> = (0..n).collect();
    fn root(parent: &mut [usize], mut x: usize) -> usize {
        while parent[x] != x {
            x = parent[x];
        }
        x
    }
    let mut components = n;
    for &(u, v) in edges {
        let (ru, rv) = (root(&mut parent, u), root(&mut parent, v));
        if ru == rv {
            return None;
        }
        parent[ru] = rv;
        components -= 1;
    }
    Some(components)
}

#[test]
fn test_topological_order_respects_every_edge() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let n = rng.gen_range(1..30);
        let graph = random_dag(&mut rng, n, 0.2);

        let order = graph.topological_sort().unwrap();
        assert_eq!(order.len(), n);

        let mut position = vec![usize::MAX; n];
        for (pos, node) in order.iter().enumerate() {
            assert_eq!(position[node.index()], usize::MAX, "duplicate {}", node);
            position[node.index()] = pos;
        }
        for edge in graph.edges() {
            assert!(
                position[edge.source.index()] < position[edge.target.index()],
                "seed {}: {} placed after {}",
                seed,
                edge.source,
                edge.target
            );
        }
        assert!(!graph.has_cycle().unwrap());
    }
}

#[test]
fn test_cycle_detection_matches_scc() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let n = rng.gen_range(1..12);
        let graph = random_digraph(&mut rng, n, 0.15);

        let scc = graph.strongly_connected_components().unwrap();
        let cyclic = scc.cyclic.iter().any(|&c| c);
        assert_eq!(graph.has_cycle().unwrap(), cyclic, "seed {}", seed);

        match graph.topological_sort() {
            Ok(order) => {
                assert!(!cyclic);
                assert_eq!(order.len(), n);
            }
            Err(GraphError::CycleDetected { from, to }) => {
                assert!(cyclic);
                // The reported back edge exists and closes a cycle
                assert!(graph.neighbors(from).contains(&to));
                assert!(scc.same_component(from, to));
            }
            Err(other) => panic!("unexpected error: {}", other),
        }

        // Lenient mode always returns a permutation
        let mut lenient = graph
            .topological_sort_with(&TopologicalSortConfig::allow_cycles())
            .unwrap();
        lenient.sort();
        assert_eq!(lenient, graph.nodes().collect::<Vec<_>>());
    }
}

#[test]
fn test_scc_matches_mutual_reachability() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let n = rng.gen_range(1..15);
        let graph = random_digraph(&mut rng, n, 0.12);

        let result = graph.strongly_connected_components().unwrap();
        let reach = reachability(&graph);

        // Partition: every node exactly once
        let mut seen = vec![0; n];
        for members in &result.components {
            assert!(!members.is_empty());
            for node in members {
                seen[node.index()] += 1;
            }
        }
        assert!(seen.iter().all(|&count| count == 1), "seed {}", seed);

        for u in graph.nodes() {
            for v in graph.nodes() {
                let mutual = reach[u.index()][v.index()] && reach[v.index()][u.index()];
                assert_eq!(result.same_component(u, v), mutual, "seed {}: {} {}", seed, u, v);
            }
        }

        // Components come out in topological order of the condensation
        for (from, to) in result.condensation_edges(&graph) {
            assert!(from < to, "seed {}: condensation edge {} -> {}", seed, from, to);
        }
    }
}

#[test]
fn test_mst_is_minimal_spanning_forest() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let n = rng.gen_range(1..7);
        let m = rng.gen_range(0..10);
        let graph = random_weighted(&mut rng, n, m);

        let mst = graph.minimum_spanning_tree().unwrap();
        let chosen: Vec<(usize, usize)> = mst
            .edges
            .iter()
            .map(|edge| (edge.source.index(), edge.target.index()))
            .collect();

        // Acyclic, and as connected as the graph itself
        let all: Vec<(usize, usize)> = graph
            .edges()
            .iter()
            .map(|edge| (edge.source.index(), edge.target.index()))
            .collect();
        let reach = reachability(&graph);
        let graph_components = (0..n)
            .filter(|&u| (0..u).all(|v| !reach[u][v]))
            .count();
        assert_eq!(forest_components(n, &chosen), Some(graph_components), "seed {}", seed);
        assert_eq!(mst.tree_count, graph_components);
        assert_eq!(mst.edges.len(), n - graph_components);
        assert!(all.len() >= chosen.len());

        // Brute force: cheapest acyclic subset of the same size
        let k = chosen.len();
        let mut best = i128::MAX;
        for mask in 0u32..(1 << graph.edge_count()) {
            if mask.count_ones() as usize != k {
                continue;
            }
            let subset: Vec<(usize, usize)> = (0..all.len())
                .filter(|&i| mask & (1 << i) != 0)
                .map(|i| all[i])
                .collect();
            if forest_components(n, &subset).is_some() {
                let weight: i128 = (0..all.len())
                    .filter(|&i| mask & (1 << i) != 0)
                    .map(|i| i128::from(graph.edges()[i].weight))
                    .sum();
                best = best.min(weight);
            }
        }
        if k == 0 {
            best = 0;
        }
        assert_eq!(mst.total_weight, best, "seed {}", seed);
    }
}

#[test]
fn test_results_are_deterministic() {
    let mut rng = StdRng::seed_from_u64(7);
    let digraph = random_digraph(&mut rng, 20, 0.1);
    let weighted = random_weighted(&mut rng, 20, 40);

    let order = digraph
        .topological_sort_with(&TopologicalSortConfig::allow_cycles())
        .unwrap();
    let scc = digraph.strongly_connected_components().unwrap();
    let mst = weighted.minimum_spanning_tree().unwrap();

    for _ in 0..3 {
        assert_eq!(
            digraph
                .topological_sort_with(&TopologicalSortConfig::allow_cycles())
                .unwrap(),
            order
        );
        assert_eq!(digraph.strongly_connected_components().unwrap(), scc);
        assert_eq!(weighted.minimum_spanning_tree().unwrap(), mst);
    }
}

#[test]
fn test_mode_preconditions() {
    let mut undirected = Graph::new(GraphMode::Undirected);
    let a = undirected.add_node();
    let b = undirected.add_node();
    undirected.add_edge(a, b).unwrap();

    let wrong = GraphError::ModeMismatch {
        expected: GraphMode::Directed,
        actual: GraphMode::Undirected,
    };
    assert_eq!(undirected.topological_sort(), Err(wrong.clone()));
    assert_eq!(undirected.strongly_connected_components(), Err(wrong));

    let directed = Graph::new(GraphMode::Directed);
    assert!(matches!(
        directed.minimum_spanning_tree(),
        Err(GraphError::ModeMismatch { .. })
    ));
}

#[test]
fn test_out_of_range_endpoint_is_rejected() {
    // Ids are dense indices: only an index past node_count() is unknown here
    let mut graph = Graph::new(GraphMode::Directed);
    let a = graph.add_node();
    let other = {
        let mut elsewhere = Graph::new(GraphMode::Directed);
        elsewhere.add_node();
        elsewhere.add_node()
    };

    assert_eq!(
        graph.add_edge(a, other),
        Err(GraphError::InvalidEdgeTarget(other))
    );
    assert_eq!(graph.edge_count(), 0);
    graph.verify().unwrap();
}
