//! 3-CNF to Vertex Cover: satisfiable iff the graph has a cover of size `V + 2C`.

use std::collections::{BTreeSet, HashSet};

use crate::{
    error::ReduceError,
    formula::Formula,
    types::{to_lit, to_var, Lit},
};

pub type Node = usize;

/// Simple undirected graph keeping edges in insertion order.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: BTreeSet<Node>,
    edges: Vec<(Node, Node)>,
    seen: HashSet<(Node, Node)>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the edge `u - v`; an edge already present is ignored.
    pub fn add_edge(&mut self, u: Node, v: Node) {
        assert_ne!(u, v, "self-loop on node {u}");
        if !self.seen.insert((u.min(v), u.max(v))) {
            return;
        }
        self.nodes.insert(u);
        self.nodes.insert(v);
        self.edges.push((u, v));
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.nodes.iter().copied()
    }

    pub fn edges(&self) -> impl Iterator<Item = (Node, Node)> + '_ {
        self.edges.iter().copied()
    }

    pub fn is_cover(&self, cover: &BTreeSet<Node>) -> bool {
        self.edges
            .iter()
            .all(|(u, v)| cover.contains(u) || cover.contains(v))
    }
}

#[derive(Clone, Debug)]
pub struct VertexCover {
    graph: Graph,
    cover_size: usize,
}

impl VertexCover {
    /// Fails if some clause does not have exactly three literals.
    pub fn from_formula(formula: &Formula) -> Result<Self, ReduceError> {
        if let Some((index, clause)) = formula
            .clauses()
            .iter()
            .enumerate()
            .find(|(_, clause)| clause.len() != 3)
        {
            return Err(ReduceError::NotThreeCnf {
                index,
                len: clause.len(),
            });
        }

        let var_count = formula.var_count();
        let clause_count = formula.clause_count();
        assert!(
            formula.variables().last().map_or(true, |&var| var <= var_count),
            "variable ids are not contiguous"
        );

        // clause nodes start after the variables, negative literals after the clauses
        let mut cursor = var_count + 1;
        let end = cursor + 3 * clause_count;
        let node = |lit: Lit| -> Node {
            let var = to_var(lit);
            if lit < 0 {
                var + end - 1
            } else {
                var
            }
        };

        let mut graph = Graph::new();

        for &var in formula.variables() {
            graph.add_edge(var, node(-to_lit(var)));
        }

        for clause in formula.clauses() {
            graph.add_edge(cursor, cursor + 1);
            graph.add_edge(cursor + 1, cursor + 2);
            graph.add_edge(cursor + 2, cursor);

            for (i, &lit) in clause.iter().enumerate() {
                graph.add_edge(cursor + i, node(lit));
            }

            cursor += 3;
        }

        assert_eq!(cursor, end, "clause gadget nodes out of step");

        let cover_size = var_count + 2 * clause_count;
        log::info!(
            "vertex cover: {} nodes, {} edges, cover size {cover_size}",
            graph.node_count(),
            graph.edge_count()
        );

        Ok(Self { graph, cover_size })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn cover_size(&self) -> usize {
        self.cover_size
    }
}
