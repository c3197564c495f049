/*!
# Cut Vertices and Cut Edges

An **articulation point** is a node whose removal increases the number of connected components;
a **bridge** is an edge with the same property. Both are found by one depth-first search forest
using Tarjan's low-link values:
- `disc[u]` is the time `u` was discovered,
- `low[u]` is the smallest discovery time reachable from the subtree of `u` using at most one
  non-tree adjacency record.

The search is iterative, so arbitrarily deep DFS trees (e.g. long paths) are fine.

# Parallel edges

With [`ParentExclusion::TreeEdge`] (the default) only the adjacency record of the tree edge
itself is ignored when looking for back edges, so a second edge to the parent is a back edge
and neither copy is reported as a bridge. [`ParentExclusion::ParentNode`] ignores every record
leading to the parent, which reports parallel edges as bridges.

```
use wgraphs::{prelude::*, algo::*};

let g = LabelledGraph::from_labelled_edges("g", [("a", "b", 1), ("a", "b", 2)]);
assert!(g.compute_bridges().is_empty());

let cuts = CutSearch::new(&g).parent_exclusion(ParentExclusion::ParentNode).compute();
assert_eq!(cuts.bridges, vec![Edge(0, 1)]);
```
*/

use super::*;

/// Determines which adjacency records of a node are *not* considered back edges to its DFS parent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ParentExclusion {
    /// Skip only the record of the tree edge
    #[default]
    TreeEdge,
    /// Skip every record pointing to the parent node
    ParentNode,
}

impl ParentExclusion {
    #[inline]
    fn is_tree_parent(self, parent: Option<(Node, EdgeId)>, record: Neighbor) -> bool {
        parent.is_some_and(|(p, e)| match self {
            ParentExclusion::TreeEdge => e == record.edge,
            ParentExclusion::ParentNode => p == record.node,
        })
    }
}

/// Articulation points and bridges of a graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutStructure {
    pub articulation_points: NodeBitSet,
    /// Bridges as `Edge(parent, child)` of the DFS forest, in the order they were found
    pub bridges: Vec<Edge>,
}

pub trait ArticulationPoints: IndexedAdjacencyList + Sized {
    /// Returns the set of all articulation points.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = LabelledGraph::from_labelled_edges("g", [("a", "b", 1), ("b", "c", 1)]);
    /// assert_eq!(g.compute_articulation_points().iter_nodes().collect::<Vec<_>>(), vec![1]);
    /// ```
    fn compute_articulation_points(&self) -> NodeBitSet {
        CutSearch::new(self).compute().articulation_points
    }
}

pub trait Bridges: IndexedAdjacencyList + Sized {
    /// Returns all bridges as `Edge(parent, child)` of the DFS forest.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = LabelledGraph::from_labelled_edges("g", [("a", "b", 1), ("b", "c", 1)]);
    /// assert_eq!(g.compute_bridges(), vec![Edge(1, 2), Edge(0, 1)]);
    /// ```
    fn compute_bridges(&self) -> Vec<Edge> {
        CutSearch::new(self).compute().bridges
    }
}

pub trait CutStructures: IndexedAdjacencyList + Sized {
    /// Computes articulation points and bridges in a single search
    fn compute_cut_structure(&self) -> CutStructure {
        CutSearch::new(self).compute()
    }
}

impl<G> ArticulationPoints for G where G: IndexedAdjacencyList + Sized {}
impl<G> Bridges for G where G: IndexedAdjacencyList + Sized {}
impl<G> CutStructures for G where G: IndexedAdjacencyList + Sized {}

#[derive(Debug, Clone, Copy)]
struct Frame {
    node: Node,
    /// Parent node and the id of the tree edge leading to it; `None` for roots
    parent: Option<(Node, EdgeId)>,
    children: NumNodes,
    cursor: NumNodes,
}

/// Configurable search for articulation points and bridges
pub struct CutSearch<'a, G>
where
    G: IndexedAdjacencyList,
{
    graph: &'a G,
    policy: ParentExclusion,
    visited: NodeBitSet,
    discovery: Vec<Node>,
    low: Vec<Node>,
    time: Node,
    stack: Vec<Frame>,
    articulation_points: NodeBitSet,
    bridges: Vec<Edge>,
}

impl<'a, G> CutSearch<'a, G>
where
    G: IndexedAdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        let n = graph.len();
        Self {
            graph,
            policy: ParentExclusion::default(),
            visited: graph.vertex_bitset_unset(),
            discovery: vec![0; n],
            low: vec![0; n],
            time: 0,
            stack: Vec::new(),
            articulation_points: graph.vertex_bitset_unset(),
            bridges: Vec::new(),
        }
    }

    /// Updates the policy used to recognize the edge to the DFS parent
    pub fn parent_exclusion(mut self, policy: ParentExclusion) -> Self {
        self.policy = policy;
        self
    }

    pub fn compute(mut self) -> CutStructure {
        for root in self.graph.vertices_range() {
            if self.visited.has_node(root) {
                continue;
            }

            self.visit(root, None);
            self.search();
        }

        CutStructure {
            articulation_points: self.articulation_points,
            bridges: self.bridges,
        }
    }

    fn visit(&mut self, u: Node, parent: Option<(Node, EdgeId)>) {
        self.visited.set_node(u);
        self.time += 1;
        self.discovery[u as usize] = self.time;
        self.low[u as usize] = self.time;
        self.stack.push(Frame {
            node: u,
            parent,
            children: 0,
            cursor: 0,
        });
    }

    fn search(&mut self) {
        while let Some(frame) = self.stack.last_mut() {
            let u = frame.node;

            if frame.cursor < self.graph.degree_of(u) {
                let record = self.graph.ith_neighbor(u, frame.cursor);
                frame.cursor += 1;

                if !self.visited.has_node(record.node) {
                    frame.children += 1;
                    self.visit(record.node, Some((u, record.edge)));
                } else if !self.policy.is_tree_parent(frame.parent, record) {
                    let disc_v = self.discovery[record.node as usize];
                    self.update_low(u, disc_v);
                }
                continue;
            }

            let Frame {
                parent, children, ..
            } = *frame;
            self.stack.pop();

            let Some((p, _)) = parent else {
                if children > 1 {
                    self.articulation_points.set_node(u);
                }
                continue;
            };

            let low_u = self.low[u as usize];
            let disc_p = self.discovery[p as usize];
            self.update_low(p, low_u);

            // the frame of `p` is on top now; roots are handled when they are popped
            let p_is_root = self.stack.last().is_none_or(|f| f.parent.is_none());
            if !p_is_root && low_u >= disc_p {
                self.articulation_points.set_node(p);
            }

            if low_u > disc_p {
                self.bridges.push(Edge(p, u));
            }
        }
    }

    #[inline]
    fn update_low(&mut self, u: Node, value: Node) {
        let low = &mut self.low[u as usize];
        *low = (*low).min(value);
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    use super::*;
    use crate::testing::*;

    fn sorted_bridges(bridges: Vec<Edge>) -> Vec<Edge> {
        bridges.into_iter().map(|e| e.normalized()).sorted().collect()
    }

    #[test]
    fn bridges_in_path() {
        for n in [1, 2, 5, 10, 15] {
            let graph = path(n);
            let cuts = graph.compute_cut_structure();

            assert_eq!(
                sorted_bridges(cuts.bridges),
                (1..n).map(|u| Edge(u - 1, u)).collect_vec()
            );
            assert_eq!(
                cuts.articulation_points.iter_nodes().collect_vec(),
                (1..n.saturating_sub(1)).collect_vec()
            );
        }
    }

    #[test]
    fn bridge_in_example() {
        let graph = numbered_graph(
            6,
            [(0, 1, 1), (0, 2, 1), (2, 1, 1), (1, 3, 1), (3, 4, 1), (4, 5, 1), (5, 3, 1)],
        );

        assert_eq!(graph.compute_bridges(), vec![Edge(1, 3)]);
        assert_eq!(
            graph.compute_articulation_points().iter_nodes().collect_vec(),
            vec![1, 3]
        );
    }

    #[test]
    fn cycles_have_no_cuts() {
        for n in [3, 4, 50] {
            let cuts = cycle(n).compute_cut_structure();
            assert!(cuts.bridges.is_empty());
            assert_eq!(cuts.articulation_points.count_ones(..), 0);
        }
    }

    #[test]
    fn star_root_with_many_children() {
        let graph = numbered_graph(4, [(0, 1, 1), (0, 2, 1), (0, 3, 1)]);
        let cuts = graph.compute_cut_structure();
        assert_eq!(cuts.articulation_points.iter_nodes().collect_vec(), vec![0]);
        assert_eq!(cuts.bridges.len(), 3);

        // root with a single child is no articulation point
        let graph = numbered_graph(3, [(0, 1, 1), (1, 2, 1), (2, 0, 1), (0, 0, 1)]);
        assert_eq!(graph.compute_articulation_points().count_ones(..), 0);
    }

    #[test]
    fn self_loops_give_no_signal() {
        let graph = numbered_graph(3, [(0, 1, 1), (1, 1, 1), (1, 2, 1), (2, 2, 4)]);
        let cuts = graph.compute_cut_structure();
        assert_eq!(cuts.articulation_points.iter_nodes().collect_vec(), vec![1]);
        assert_eq!(sorted_bridges(cuts.bridges), vec![Edge(0, 1), Edge(1, 2)]);
    }

    #[test]
    fn parallel_edges_under_both_policies() {
        let graph = numbered_graph(3, [(0, 1, 1), (1, 0, 1), (1, 2, 1)]);

        let tree_edge = CutSearch::new(&graph).compute();
        assert_eq!(sorted_bridges(tree_edge.bridges), vec![Edge(1, 2)]);
        assert_eq!(tree_edge.articulation_points.iter_nodes().collect_vec(), vec![1]);

        let parent_node = CutSearch::new(&graph)
            .parent_exclusion(ParentExclusion::ParentNode)
            .compute();
        assert_eq!(
            sorted_bridges(parent_node.bridges),
            vec![Edge(0, 1), Edge(1, 2)]
        );
        assert_eq!(
            parent_node.articulation_points.iter_nodes().collect_vec(),
            vec![1]
        );
    }

    #[test]
    fn policies_agree_on_simple_graphs() {
        let graph = numbered_graph(
            7,
            [(0, 1, 1), (1, 2, 1), (2, 0, 1), (2, 3, 1), (3, 4, 1), (4, 5, 1), (5, 3, 1)],
        );
        assert_eq!(
            CutSearch::new(&graph).compute(),
            CutSearch::new(&graph)
                .parent_exclusion(ParentExclusion::ParentNode)
                .compute()
        );
    }

    #[test]
    fn deep_path() {
        let n = 100_000;
        let graph = path(n);
        let cuts = graph.compute_cut_structure();

        assert_eq!(cuts.bridges.len(), n as usize - 1);
        assert_eq!(cuts.articulation_points.count_ones(..), n as usize - 2);
        assert!(!cuts.articulation_points.has_node(0));
        assert!(!cuts.articulation_points.has_node(n - 1));
    }

    #[test]
    fn random_against_brute_force() {
        let rng = &mut Pcg64::seed_from_u64(31337);

        for n in [1, 3, 8, 25, 60] {
            for m in [0, n / 2, n, n + n / 2, 2 * n] {
                let graph = random_graph(rng, n, m, 3, true);
                let cuts = graph.compute_cut_structure();
                let before = brute_force_components(&graph, None, None);

                for u in graph.vertices_range() {
                    assert_eq!(
                        cuts.articulation_points.has_node(u),
                        brute_force_components(&graph, Some(u), None) > before,
                        "node {u}"
                    );
                }

                let expected = graph
                    .edges()
                    .enumerate()
                    .filter(|&(id, _)| {
                        brute_force_components(&graph, None, Some(id as EdgeId)) > before
                    })
                    .map(|(_, e)| e.edge)
                    .collect_vec();
                assert_eq!(sorted_bridges(cuts.bridges), sorted_bridges(expected));
            }
        }
    }

    #[test]
    fn idempotent() {
        let graph = numbered_graph(5, [(0, 1, 1), (1, 2, 1), (2, 0, 1), (2, 3, 1)]);
        assert_eq!(graph.compute_cut_structure(), graph.compute_cut_structure());
    }
}
