use std::collections::BTreeSet;

use sat2vc::{
    graph::{Graph, Node},
    types::{Clause, Lit},
};

mod dpll;

pub use dpll::{satisfiable, satisfiable_under};

/// Exhaustive search for a cover of exactly `size` nodes.
pub fn has_cover(graph: &Graph, size: usize) -> bool {
    let nodes: Vec<Node> = graph.nodes().collect();
    assert!(nodes.len() <= 20, "graph too large to enumerate");

    (0..1u32 << nodes.len())
        .filter(|bits| bits.count_ones() as usize == size)
        .any(|bits| {
            let cover: BTreeSet<Node> = nodes
                .iter()
                .enumerate()
                .filter(|(i, _)| bits >> i & 1 != 0)
                .map(|(_, &node)| node)
                .collect();
            graph.is_cover(&cover)
        })
}
