use std::ops::Range;

use itertools::Itertools;

use crate::{repr::Neighbor, *};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns the range `0..n` of all vertices.
    /// In contrast to self.vertices(), the range does not borrow self.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new_for_nodes(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of (undirected) edges of the graph.
    /// Parallel edges and self-loops count once each.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// A neighbor is reported once per adjacency record, so parallel edges repeat it
    /// and a self-loop reports `u` twice.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of adjacency records of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the degrees of all nodes
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns *true* if `u` has no neighbors
    /// ** Panics if `u >= n` **
    fn is_isolated(&self, u: Node) -> bool {
        self.degree_of(u) == 0
    }

    /// Returns an iterator to all vertices with non-zero degree
    fn vertices_with_neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| self.degree_of(u) > 0)
    }

    /// Returns *true* if there is at least one edge `{u, v}`.
    /// ** Panics if `u >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.neighbors_of(u).any(|w| w == v)
    }

    /// Returns *true* if a self-loop `{u, u}` exists.
    /// ** Panics if `u >= n` **
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }
}

/// Neighborhood access including weights and edge identities
pub trait WeightedAdjacencyList: AdjacencyList + GraphEdgeOrder {
    /// Returns an iterator over the adjacency records of `u`.
    /// ** Panics if `u >= n` **
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = Neighbor> + '_;

    /// Returns an iterator over all undirected edges, each reported once in insertion order.
    fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_;

    /// Returns the smallest weight of any edge `{u, v}`, or `None` if there is none.
    /// ** Panics if `u >= n` **
    fn weight_of(&self, u: Node, v: Node) -> Option<Weight> {
        self.weighted_neighbors_of(u)
            .filter(|nb| nb.node == v)
            .map(|nb| nb.weight)
            .min()
    }

    /// Returns the sum of all edge weights
    fn total_weight(&self) -> Distance {
        self.edges().map(|e| e.weight as Distance).sum()
    }
}

/// Access to the name of a graph and the labels of its nodes
pub trait GraphLabels: GraphNodeOrder {
    /// Returns the name of the graph
    fn name(&self) -> &str;

    /// Returns the label of `u`
    /// ** Panics if `u >= n` **
    fn label_of(&self, u: Node) -> &str;

    /// Returns the node carrying `label` (exact, case-sensitive match)
    fn node_of(&self, label: &str) -> Option<Node>;

    /// Returns an iterator over all labels in node order
    fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.vertices().map(|u| self.label_of(u))
    }

    /// Returns the labels of the given nodes sorted lexicographically
    fn sorted_labels_of<I>(&self, nodes: I) -> Vec<&str>
    where
        I: IntoIterator<Item = Node>,
    {
        nodes.into_iter().map(|u| self.label_of(u)).sorted().collect()
    }

    /// Returns the label-pairs of the given edges, each pair ordered internally,
    /// and the pairs sorted lexicographically.
    fn sorted_label_pairs_of<I>(&self, edges: I) -> Vec<(&str, &str)>
    where
        I: IntoIterator<Item = Edge>,
    {
        edges
            .into_iter()
            .map(|Edge(u, v)| {
                let (a, b) = (self.label_of(u), self.label_of(v));
                if a <= b { (a, b) } else { (b, a) }
            })
            .sorted()
            .collect()
    }
}

/// Random access into the adjacency records of a node
pub trait IndexedAdjacencyList: WeightedAdjacencyList {
    /// Returns the ith adjacency record (0-indexed) of a given vertex
    /// ** Panics if `u >= n || i >= deg(u)` **
    fn ith_neighbor(&self, u: Node, i: NumNodes) -> Neighbor;
}
