use itertools::Itertools;

use super::*;

pub trait Connectivity: AdjacencyList + Sized {
    /// Returns an iterator over the connected components of the graph.
    ///
    /// Components are emitted in increasing order of their smallest node, which is also the
    /// order in which [`Connectivity::partition_into_connected_components`] numbers them.
    /// The order of nodes within a component is the BFS order from that smallest node.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = LabelledGraph::from_labelled_edges("g", [("a", "b", 1), ("c", "d", 1), ("d", "a", 1)]);
    /// assert_eq!(g.connected_components().count(), 1);
    /// ```
    fn connected_components(&self) -> ConnectedComponents<'_, Self>;

    /// Partition the graph into its connected components
    fn partition_into_connected_components(&self) -> Partition {
        let partition = self
            .connected_components()
            .into_partition(self.number_of_nodes());
        debug_assert_eq!(partition.number_of_unassigned(), 0);
        partition
    }

    /// Returns the number of connected components; `0` for a graph without nodes
    fn number_of_connected_components(&self) -> NumNodes {
        self.connected_components().count() as NumNodes
    }

    /// Returns *true* if the graph has exactly one connected component
    fn is_connected(&self) -> bool {
        self.connected_components().nth(1).is_none() && !self.is_empty()
    }
}

impl<G> Connectivity for G
where
    G: AdjacencyList + Sized,
{
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }
}

pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    bfs: BFS<'a, G>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            bfs: BFS::idle(graph),
        }
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let cc = self.bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !self.bfs.try_restart_at_unvisited() {
                return None;
            }
        }
    }
}

/// Sorts the nodes in each component increasingly and then the components by their smallest node.
pub fn sort_components(mut components: Vec<Vec<Node>>) -> Vec<Vec<Node>> {
    components.iter_mut().for_each(|comp| comp.sort_unstable());
    components.sort_by(|a, b| a[0].cmp(&b[0]));
    components
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    use super::*;
    use crate::testing::*;

    #[test]
    fn partition_into_connected_components() {
        let graph = numbered_graph(7, [(1, 2, 1), (2, 3, 1), (4, 5, 1)]);

        let part = graph.partition_into_connected_components();
        assert_eq!(part.number_of_classes(), 4);
        assert_eq!(part.number_of_unassigned(), 0);

        assert_eq!(part.class_of_node(0), Some(0));
        assert_eq!(part.class_of_node(1), Some(1));
        assert_eq!(part.class_of_node(1), part.class_of_node(2));
        assert_eq!(part.class_of_node(1), part.class_of_node(3));
        assert_eq!(part.class_of_node(4), Some(2));
        assert_eq!(part.class_of_node(4), part.class_of_node(5));
        assert_eq!(part.class_of_node(6), Some(3));
    }

    #[test]
    fn components_in_scan_order() {
        let graph = numbered_graph(6, [(5, 3, 1), (4, 0, 1), (2, 2, 1)]);
        let ccs = graph.connected_components().collect_vec();

        assert_eq!(ccs.len(), 4);
        assert_eq!(ccs[0], vec![0, 4]);
        assert_eq!(ccs[1], vec![1]);
        assert_eq!(ccs[2], vec![2]);
        assert_eq!(ccs[3], vec![3, 5]);
    }

    #[test]
    fn triangle_with_isolated_vertex() {
        let graph = graph_from_text("g\na -- b\nb -- c\nc -- a\nd\n");
        assert_eq!(graph.number_of_connected_components(), 2);
        assert!(!graph.is_connected());
    }

    #[test]
    fn empty_graph() {
        let graph = graph_from_text("only a name\n");
        assert_eq!(graph.number_of_connected_components(), 0);
        assert!(!graph.is_connected());
        assert_eq!(graph.partition_into_connected_components().number_of_classes(), 0);
    }

    #[test]
    fn path_and_cycle() {
        for n in [1, 2, 10, 100] {
            assert_eq!(path(n).number_of_connected_components(), 1);
            assert_eq!(cycle(n).number_of_connected_components(), 1);
            assert!(path(n).is_connected());
        }
    }

    #[test]
    fn random_against_union_find() {
        let rng = &mut Pcg64::seed_from_u64(1234);

        for n in [1, 5, 20, 80] {
            for m in [0, n / 2, n, 2 * n] {
                let graph = random_graph(rng, n, m, 5, true);
                let ccs = sort_components(graph.connected_components().collect_vec());

                assert_eq!(ccs.len(), brute_force_components(&graph, None, None));
                assert_eq!(ccs.iter().map(|cc| cc.len()).sum::<usize>(), n as usize);

                let part = graph.partition_into_connected_components();
                for e in graph.edges() {
                    let Edge(u, v) = e.edge;
                    assert_eq!(part.class_of_node(u), part.class_of_node(v));
                }
            }
        }
    }

    #[test]
    fn idempotent() {
        let graph = numbered_graph(5, [(0, 1, 1), (3, 4, 1)]);
        assert_eq!(
            graph.partition_into_connected_components(),
            graph.partition_into_connected_components()
        );
    }
}
