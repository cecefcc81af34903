//! Walks through the three algorithms on small textbook graphs.
//!
//! Library debug events are printed by a fmt subscriber:
//! `cargo run --example clrs_demo`

use arbor::{Graph, GraphMode, NodeData, NodeId};
use tracing_subscriber::filter::LevelFilter;

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .init();

    println!("Arbor Graph Library v{}", arbor::version());
    println!("==========================================");
    println!();

    demo_topological_sort();
    demo_strongly_connected_components();
    demo_minimum_spanning_tree();
}

fn named(graph: &mut Graph, names: &mut NodeData<&'static str>, name: &'static str) -> NodeId {
    let id = graph.add_node();
    names.insert(id, name);
    id
}

fn demo_topological_sort() {
    println!("=== Demo 1: Getting dressed (topological sort) ===");
    let mut graph = Graph::new(GraphMode::Directed);
    let mut names = NodeData::new();

    let shirt = named(&mut graph, &mut names, "shirt");
    let tie = named(&mut graph, &mut names, "tie");
    let jacket = named(&mut graph, &mut names, "jacket");
    let belt = named(&mut graph, &mut names, "belt");
    named(&mut graph, &mut names, "watch");
    let undershorts = named(&mut graph, &mut names, "undershorts");
    let pants = named(&mut graph, &mut names, "pants");
    let shoes = named(&mut graph, &mut names, "shoes");
    let socks = named(&mut graph, &mut names, "socks");

    for (before, after) in [
        (shirt, tie),
        (tie, jacket),
        (shirt, belt),
        (belt, jacket),
        (undershorts, pants),
        (undershorts, shoes),
        (pants, belt),
        (pants, shoes),
        (socks, shoes),
    ] {
        if let Err(e) = graph.add_edge(before, after) {
            println!("✗ {}", e);
            return;
        }
    }

    match graph.topological_sort() {
        Ok(order) => {
            let steps: Vec<&str> = order.iter().map(|&n| names[n]).collect();
            println!("✓ Dressing order: {}", steps.join(" -> "));
        }
        Err(e) => println!("✗ {}", e),
    }
    println!();
}

fn demo_strongly_connected_components() {
    println!("=== Demo 2: Strongly connected components ===");
    let mut graph = Graph::new(GraphMode::Directed);
    let mut names = NodeData::new();

    let ids: Vec<NodeId> = ["a", "b", "c", "d", "e", "f", "g", "h"]
        .into_iter()
        .map(|name| named(&mut graph, &mut names, name))
        .collect();
    let edges = [
        (0, 1), (1, 2), (1, 4), (1, 5), (2, 3), (2, 6), (3, 2), (3, 7),
        (4, 0), (4, 5), (5, 6), (6, 5), (6, 7), (7, 7),
    ];
    for (u, v) in edges {
        if let Err(e) = graph.add_edge(ids[u], ids[v]) {
            println!("✗ {}", e);
            return;
        }
    }

    match graph.strongly_connected_components() {
        Ok(result) => {
            for (idx, members) in result.components.iter().enumerate() {
                let labels: Vec<&str> = members.iter().map(|&n| names[n]).collect();
                println!("✓ Component {}: {{{}}}", idx, labels.join(", "));
            }
            println!("  Condensation edges: {:?}", result.condensation_edges(&graph));
        }
        Err(e) => println!("✗ {}", e),
    }
    println!();
}

fn demo_minimum_spanning_tree() {
    println!("=== Demo 3: Minimum spanning tree ===");
    let mut graph = Graph::new(GraphMode::Undirected);
    let mut names = NodeData::new();

    let ids: Vec<NodeId> = ["a", "b", "c", "d", "e", "f", "g", "h", "i"]
        .into_iter()
        .map(|name| named(&mut graph, &mut names, name))
        .collect();
    let edges = [
        (0, 1, 4), (0, 7, 8), (1, 7, 11), (1, 2, 8), (2, 8, 2), (2, 5, 4), (2, 3, 7),
        (3, 4, 9), (3, 5, 14), (4, 5, 10), (5, 6, 2), (6, 7, 1), (6, 8, 6), (7, 8, 7),
    ];
    for (u, v, w) in edges {
        if let Err(e) = graph.add_weighted_edge(ids[u], ids[v], w) {
            println!("✗ {}", e);
            return;
        }
    }

    match graph.minimum_spanning_tree() {
        Ok(mst) => {
            for edge in &mst.edges {
                println!(
                    "✓ {} - {} (weight {})",
                    names[edge.source], names[edge.target], edge.weight
                );
            }
            println!("  Total weight: {}", mst.total_weight);
        }
        Err(e) => println!("✗ {}", e),
    }
}
