/*!
Breadth-first traversal.

[`BFS`] is an iterator over the nodes reachable from a start node. Once it is exhausted it can be
restarted at the smallest unvisited node, which turns it into a traversal of the whole
BFS forest; [`ConnectedComponents`](super::ConnectedComponents) is built on exactly that.
*/

use std::collections::VecDeque;

use super::*;

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub struct BFS<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    queue: VecDeque<Node>,
    /// Every node below this value is known to be visited
    potentially_unvisited: Node,
}

impl<'a, G> BFS<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut bfs = Self::idle(graph);
        bfs.visited.set_node(start);
        bfs.queue.push_back(start);
        bfs
    }

    /// Creates a traversal without a start node. It yields nothing until
    /// [`BFS::try_restart_at_unvisited`] is called.
    pub fn idle(graph: &'a G) -> Self {
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            queue: VecDeque::new(),
            potentially_unvisited: 0,
        }
    }

    /// Returns *true* if `u` was discovered by the traversal so far
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.has_node(u)
    }

    /// Tries to restart the search at the smallest yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert!(self.queue.is_empty());

        while self.potentially_unvisited < self.graph.number_of_nodes() {
            let u = self.potentially_unvisited;
            self.potentially_unvisited += 1;

            if !self.visited.set_node(u) {
                self.queue.push_back(u);
                return true;
            }
        }

        false
    }
}

impl<G> Iterator for BFS<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.graph.neighbors_of(u) {
            if !self.visited.set_node(v) {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.queue.len(),
            Some(self.graph.len() - self.visited.count_ones(..) + self.queue.len()),
        )
    }
}

/// Provides convenient traversal methods
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = LabelledGraph::from_labelled_edges("g", [("a", "b", 1), ("c", "d", 1)]);
    ///
    /// let order: Vec<_> = g.bfs(1).collect();
    /// assert_eq!(order, vec![1, 0]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns the number of edges on a shortest path from `start` to every node,
    /// ignoring weights; `None` marks unreachable nodes.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = LabelledGraph::from_labelled_edges("g", [("a", "b", 7), ("b", "c", 7)]);
    /// assert_eq!(g.hop_distances_from(0), vec![Some(0), Some(1), Some(2)]);
    /// ```
    fn hop_distances_from(&self, start: Node) -> Vec<Option<NumNodes>> {
        let mut hops = vec![None; self.len()];
        hops[start as usize] = Some(0);

        let mut queue = VecDeque::from([start]);
        while let Some(u) = queue.pop_front() {
            let next = hops[u as usize].map(|h| h + 1);
            for v in self.neighbors_of(u) {
                if hops[v as usize].is_none() {
                    hops[v as usize] = next;
                    queue.push_back(v);
                }
            }
        }

        hops
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
