//! Per-net adjacency graphs, and connectivity queries over them.
//!
//! Each net gets its own small undirected graph. The two terminals are nodes 0 and 1 (a single node if they share
//! a cell); every other distinct wire cell becomes a node the first time it is seen. Two nodes are joined by an
//! edge when their cells are grid-adjacent, which is found by probing the six axis neighbours of each cell rather
//! than comparing all pairs of nodes.

use std::collections::HashMap;

use petgraph::algo::has_path_connecting;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::cell::Cell;
use crate::net::ResolvedNet;

/// The adjacency graph of one net's wire.
#[derive(Debug)]
pub struct NetGraph {
    graph: UnGraph<Cell, ()>,
    index: HashMap<Cell, NodeIndex>,
    source: NodeIndex,
    sink: NodeIndex,
}

impl NetGraph {
    /// Build the graph of `wire` between the terminal cells `from` and `to`.
    ///
    /// A terminal cell that never appears on the wire is still a node, but an isolated one.
    #[must_use]
    pub fn build(wire: &[Cell], from: Cell, to: Cell) -> Self {
        let mut graph = UnGraph::with_capacity(wire.len() + 2, wire.len() * 3);
        let mut index = HashMap::with_capacity(wire.len() + 2);

        let source = graph.add_node(from);
        index.insert(from, source);

        // Two terminals on the same cell are trivially connected.
        let sink = if to == from {
            source
        } else {
            let sink = graph.add_node(to);
            index.insert(to, sink);
            sink
        };

        for &cell in wire {
            index.entry(cell).or_insert_with(|| graph.add_node(cell));
        }

        for node in graph.node_indices().collect::<Vec<_>>() {
            let cell = graph[node];
            for neighbour in cell.neighbours() {
                if let Some(&other) = index.get(&neighbour) {
                    // Each edge is seen from both ends; only add it once.
                    if node < other {
                        graph.add_edge(node, other, ());
                    }
                }
            }
        }

        Self { graph, index, source, sink }
    }

    /// Build the graph of a resolved net.
    #[must_use]
    pub fn from_net(net: &ResolvedNet) -> Self {
        Self::build(&net.wire, net.terminals.0.cell, net.terminals.1.cell)
    }

    /// Returns true if the two terminals are joined by a path of adjacent wire cells.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        has_path_connecting(&self.graph, self.source, self.sink, None)
    }

    /// The underlying petgraph graph, one node per distinct cell.
    #[must_use]
    pub fn graph(&self) -> &UnGraph<Cell, ()> {
        &self.graph
    }

    /// Number of distinct cells, terminals included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of adjacent cell pairs.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns the node holding `cell`, if the cell is part of the graph.
    #[must_use]
    pub fn node(&self, cell: Cell) -> Option<NodeIndex> {
        self.index.get(&cell).copied()
    }
}

/// Returns true if a resolved net's wire connects its two terminals.
#[must_use]
pub fn is_connected(net: &ResolvedNet) -> bool {
    NetGraph::from_net(net).is_connected()
}
