use std::collections::HashMap;

use super::types::{MazeError, Node};

/// Undirected maze graph built from declared path lists.
///
/// Adjacency is symmetric, and each node's neighbor list preserves the order
/// in which its edges were first declared. That order is the tie-breaker when
/// a traversal ranks candidate moves, so it is part of the graph's contract.
#[derive(Debug, Clone, Default)]
pub struct MazeGraph {
    adjacency: HashMap<Node, Vec<Node>>,
    edge_count: usize,
}

impl MazeGraph {
    /// Build a graph from path lists.
    ///
    /// Each path list is a chain of nodes; every consecutive pair becomes an
    /// undirected edge. Re-declaring an edge is a no-op, so overlapping lists
    /// coalesce. Lists with fewer than two nodes contribute nothing.
    ///
    /// A list that repeats the same node twice in a row describes a
    /// zero-length segment and is rejected with `MazeError::MalformedPath`.
    pub fn build(path_lists: &[Vec<Node>]) -> Result<Self, MazeError> {
        let mut graph = Self::default();
        for (path_index, path) in path_lists.iter().enumerate() {
            for pair in path.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                if a == b {
                    return Err(MazeError::MalformedPath {
                        path_index,
                        node: a,
                    });
                }
                graph.add_edge(a, b);
            }
        }
        Ok(graph)
    }

    /// Insert the undirected edge (a, b) unless it is already present.
    fn add_edge(&mut self, a: Node, b: Node) {
        let a_list = self.adjacency.entry(a).or_default();
        if a_list.contains(&b) {
            return;
        }
        a_list.push(b);
        self.adjacency.entry(b).or_default().push(a);
        self.edge_count += 1;
    }

    /// Check if a node is part of the graph.
    pub fn contains(&self, node: Node) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Neighbors of a node, in declaration order.
    pub fn neighbors(&self, node: Node) -> &[Node] {
        static EMPTY: &[Node] = &[];
        self.adjacency.get(&node).map_or(EMPTY, |v| v.as_slice())
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
