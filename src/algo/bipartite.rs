/*!
# Bipartiteness

A graph is bipartite if its nodes can be split into two sides such that every edge joins
nodes of different sides. Each connected component is two-coloured independently by a BFS
that stops at the first edge whose endpoints received the same colour.

A self-loop joins a node with itself and thus makes the graph non-bipartite.
The graph without nodes is bipartite.
*/

use std::collections::VecDeque;

use super::*;

/// Representation of a bipartition of the node set.
///
/// - Nodes in the set are considered to be on the **right** (1) side
/// - Nodes not in the set are considered to be on the **left** (0) side
pub trait Bipartition {
    /// Returns `true` if the node is on the left (0) side of the partition.
    fn is_on_left_side(&self, u: Node) -> bool;

    /// Returns `true` if the node is on the right (1) side of the partition.
    fn is_on_right_side(&self, u: Node) -> bool {
        !self.is_on_left_side(u)
    }
}

impl Bipartition for NodeBitSet {
    #[inline]
    fn is_on_left_side(&self, u: Node) -> bool {
        !self.has_node(u)
    }
}

/// Testing and computing bipartitions of graphs
pub trait BipartiteTest: WeightedAdjacencyList {
    /// Tests whether the given candidate partition is a valid bipartition.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = LabelledGraph::from_labelled_edges("g", [("a", "b", 1), ("b", "c", 1)]);
    ///
    /// let mut right = NodeBitSet::new_for_nodes(3);
    /// right.set_node(1);
    /// assert!(g.is_bipartition(&right));
    /// ```
    fn is_bipartition<B>(&self, bipartition: &B) -> bool
    where
        B: Bipartition,
    {
        self.edges().all(|e| {
            let Edge(u, v) = e.edge;
            bipartition.is_on_left_side(u) != bipartition.is_on_left_side(v)
        })
    }

    /// Computes a valid bipartition of the graph, if one exists.
    /// Returns `None` if the graph is not bipartite.
    ///
    /// The smallest node of every component is put on the left side.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = LabelledGraph::from_labelled_edges("g", [("a", "b", 1), ("b", "c", 1), ("c", "d", 1)]);
    ///
    /// let bip = g.compute_bipartition().unwrap();
    /// assert_eq!(bip.iter_nodes().collect::<Vec<_>>(), vec![1, 3]);
    /// ```
    fn compute_bipartition(&self) -> Option<NodeBitSet> {
        TwoColouring::new(self).compute()
    }

    /// Tests whether the graph is bipartite.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = LabelledGraph::from_labelled_edges("g", [("a", "b", 1), ("b", "c", 1), ("c", "a", 1)]);
    /// assert!(!g.is_bipartite());
    /// ```
    fn is_bipartite(&self) -> bool {
        self.compute_bipartition().is_some()
    }
}

impl<G> BipartiteTest for G where G: WeightedAdjacencyList {}

struct TwoColouring<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    coloured: NodeBitSet,
    right: NodeBitSet,
    queue: VecDeque<Node>,
}

impl<'a, G> TwoColouring<'a, G>
where
    G: AdjacencyList,
{
    fn new(graph: &'a G) -> Self {
        Self {
            graph,
            coloured: graph.vertex_bitset_unset(),
            right: graph.vertex_bitset_unset(),
            queue: VecDeque::new(),
        }
    }

    fn compute(mut self) -> Option<NodeBitSet> {
        for root in self.graph.vertices_range() {
            if self.coloured.set_node(root) {
                continue;
            }

            if !self.colour_component(root) {
                return None;
            }
        }

        Some(self.right)
    }

    /// Returns *false* as soon as an edge with equally coloured endpoints is found
    fn colour_component(&mut self, root: Node) -> bool {
        self.queue.push_back(root);

        while let Some(u) = self.queue.pop_front() {
            let u_right = self.right.has_node(u);

            for v in self.graph.neighbors_of(u) {
                if !self.coloured.set_node(v) {
                    if !u_right {
                        self.right.set_node(v);
                    }
                    self.queue.push_back(v);
                } else if self.right.has_node(v) == u_right {
                    self.queue.clear();
                    return false;
                }
            }
        }

        true
    }
}
