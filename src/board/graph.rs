//! The shared transport graph.
//!
//! Nodes are locations; each connected pair of nodes carries the set of
//! transport kinds running between them. Connections are symmetric in
//! effect (`connect` inserts both directions) but queried directionally.
//!
//! Building a graph from real map data is a collaborator's job; this type
//! only stores adjacency and answers the two queries the move generator
//! needs: `adjacent` and `transports`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Transport;

/// Location (graph node) identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u16);

impl NodeId {
    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transports on one edge. Real maps rarely list more than two kinds
/// between the same pair of nodes, so they stay inline.
type TransportSet = SmallVec<[Transport; 2]>;

/// Adjacency map: node -> (neighbour -> transports between them).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransportGraph {
    edges: FxHashMap<NodeId, FxHashMap<NodeId, TransportSet>>,
}

impl TransportGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect `a` and `b` with `transport`, in both directions.
    ///
    /// Repeating the same transport on the same edge is a no-op.
    pub fn connect(&mut self, a: NodeId, b: NodeId, transport: Transport) {
        for (from, to) in [(a, b), (b, a)] {
            let set = self.edges.entry(from).or_default().entry(to).or_default();
            if !set.contains(&transport) {
                set.push(transport);
            }
        }
    }

    /// Nodes reachable from `node` in one leg.
    pub fn adjacent(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.edges
            .get(&node)
            .into_iter()
            .flat_map(|neighbours| neighbours.keys().copied())
    }

    /// Transport kinds between `a` and `b`; empty if they are not
    /// connected.
    #[must_use]
    pub fn transports(&self, a: NodeId, b: NodeId) -> &[Transport] {
        self.edges
            .get(&a)
            .and_then(|neighbours| neighbours.get(&b))
            .map_or(&[], |set| set.as_slice())
    }

    /// Number of nodes with at least one connection.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    /// Check whether the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_is_symmetric() {
        let mut graph = TransportGraph::new();
        graph.connect(NodeId::new(1), NodeId::new(2), Transport::Taxi);

        assert_eq!(
            graph.transports(NodeId::new(1), NodeId::new(2)),
            &[Transport::Taxi]
        );
        assert_eq!(
            graph.transports(NodeId::new(2), NodeId::new(1)),
            &[Transport::Taxi]
        );
    }

    #[test]
    fn test_no_edge_means_no_transports() {
        let mut graph = TransportGraph::new();
        graph.connect(NodeId::new(1), NodeId::new(2), Transport::Bus);

        assert!(graph.transports(NodeId::new(1), NodeId::new(3)).is_empty());
        assert!(graph.transports(NodeId::new(7), NodeId::new(8)).is_empty());
    }

    #[test]
    fn test_multiple_transports_per_edge() {
        let mut graph = TransportGraph::new();
        graph.connect(NodeId::new(1), NodeId::new(2), Transport::Taxi);
        graph.connect(NodeId::new(1), NodeId::new(2), Transport::Bus);
        graph.connect(NodeId::new(1), NodeId::new(2), Transport::Taxi); // duplicate

        let transports = graph.transports(NodeId::new(1), NodeId::new(2));
        assert_eq!(transports.len(), 2);
        assert!(transports.contains(&Transport::Taxi));
        assert!(transports.contains(&Transport::Bus));
    }

    #[test]
    fn test_adjacent() {
        let mut graph = TransportGraph::new();
        graph.connect(NodeId::new(1), NodeId::new(2), Transport::Taxi);
        graph.connect(NodeId::new(1), NodeId::new(3), Transport::Underground);

        let mut neighbours: Vec<_> = graph.adjacent(NodeId::new(1)).collect();
        neighbours.sort();
        assert_eq!(neighbours, vec![NodeId::new(2), NodeId::new(3)]);

        assert_eq!(graph.adjacent(NodeId::new(9)).count(), 0);
    }

    #[test]
    fn test_node_count_and_emptiness() {
        let mut graph = TransportGraph::new();
        assert!(graph.is_empty());

        graph.connect(NodeId::new(1), NodeId::new(2), Transport::Ferry);
        assert!(!graph.is_empty());
        assert_eq!(graph.node_count(), 2);
    }
}
