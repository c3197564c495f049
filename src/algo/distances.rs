/*!
# Weighted Distances

Single-source shortest paths with Dijkstra's algorithm, eccentricities and the diameter of
every connected component. All edge weights are positive (a weight of `0` is stored as `1`),
distances are accumulated as [`Distance`] to avoid overflow on long paths.
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use super::*;

/// Reusable Dijkstra search.
///
/// Working memory is kept between runs; only the entries touched by the previous run are reset,
/// so running it from every node of a component costs no more than the searches themselves.
pub struct Dijkstra<'a, G>
where
    G: WeightedAdjacencyList,
{
    graph: &'a G,
    distances: Vec<Option<Distance>>,
    settled: NodeBitSet,
    heap: BinaryHeap<Reverse<(Distance, Node)>>,
    touched: Vec<Node>,
}

impl<'a, G> Dijkstra<'a, G>
where
    G: WeightedAdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            distances: vec![None; graph.len()],
            settled: graph.vertex_bitset_unset(),
            heap: BinaryHeap::new(),
            touched: Vec::new(),
        }
    }

    /// Computes the distances from `source` to all reachable nodes and returns them;
    /// `None` marks nodes in other components.
    /// ** Panics if `source >= n` **
    pub fn run(&mut self, source: Node) -> &[Option<Distance>] {
        self.reset();

        self.relax(source, 0);
        while let Some(Reverse((dist, u))) = self.heap.pop() {
            if self.settled.set_node(u) {
                continue; // stale entry
            }

            for nb in self.graph.weighted_neighbors_of(u) {
                if !self.settled.has_node(nb.node) {
                    self.relax(nb.node, dist + nb.weight as Distance);
                }
            }
        }

        &self.distances
    }

    /// Returns the largest finite distance of the last run
    pub fn max_distance(&self) -> Distance {
        self.touched
            .iter()
            .filter_map(|&u| self.distances[u as usize])
            .max()
            .unwrap_or(0)
    }

    fn relax(&mut self, u: Node, dist: Distance) {
        let entry = &mut self.distances[u as usize];
        match *entry {
            Some(d) if d <= dist => return,
            None => self.touched.push(u),
            Some(_) => {}
        }
        *entry = Some(dist);
        self.heap.push(Reverse((dist, u)));
    }

    fn reset(&mut self) {
        for u in self.touched.drain(..) {
            self.distances[u as usize] = None;
            self.settled.set(u as usize, false);
        }
        self.heap.clear();
    }
}

/// Shortest path queries on weighted graphs
pub trait WeightedDistances: WeightedAdjacencyList + Sized {
    /// Returns the length of a shortest path from `source` to every node; `None` marks
    /// unreachable nodes.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = LabelledGraph::from_labelled_edges("g", [("a", "b", 5), ("b", "c", 2), ("a", "c", 9)]);
    /// assert_eq!(g.shortest_distances_from(0), vec![Some(0), Some(5), Some(7)]);
    /// ```
    fn shortest_distances_from(&self, source: Node) -> Vec<Option<Distance>> {
        Dijkstra::new(self).run(source).to_vec()
    }

    /// Returns the greatest shortest-path distance from `u` to any node of its component
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = LabelledGraph::from_labelled_edges("g", [("a", "b", 5), ("b", "c", 2), ("d", "d", 1)]);
    /// assert_eq!(g.eccentricity_of(1), 5);
    /// assert_eq!(g.eccentricity_of(3), 0);
    /// ```
    fn eccentricity_of(&self, u: Node) -> Distance {
        let mut dijkstra = Dijkstra::new(self);
        dijkstra.run(u);
        dijkstra.max_distance()
    }

    /// Returns the diameter of every connected component, sorted ascending.
    /// An isolated node forms a component with diameter `0`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = LabelledGraph::from_labelled_edges("g", [("a", "b", 5), ("b", "c", 2), ("d", "d", 1)]);
    /// assert_eq!(g.diameters(), vec![0, 7]);
    /// ```
    fn diameters(&self) -> Vec<Distance> {
        let partition = self.partition_into_connected_components();
        let mut diameters = vec![0; partition.number_of_classes() as usize];

        let mut dijkstra = Dijkstra::new(self);
        for u in self.vertices_range() {
            dijkstra.run(u);
            if let Some(class) = partition.class_of_node(u) {
                let diam = &mut diameters[class as usize];
                *diam = (*diam).max(dijkstra.max_distance());
            }
        }

        diameters.sort_unstable();
        diameters
    }
}

impl<G> WeightedDistances for G where G: WeightedAdjacencyList + Sized {}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    use super::*;
    use crate::testing::*;

    #[test]
    fn canonical_triangle() {
        let graph = graph_from_text(
            "triangle\num -- dois 12\ndois -- quatro 24\nquatro -- um 41\ntres\n",
        );
        let um = graph.node_of("um").unwrap();
        let dois = graph.node_of("dois").unwrap();
        let quatro = graph.node_of("quatro").unwrap();

        let dist = graph.shortest_distances_from(um);
        assert_eq!(dist[dois as usize], Some(12));
        assert_eq!(dist[quatro as usize], Some(36));
        assert_eq!(dist[graph.node_of("tres").unwrap() as usize], None);

        assert_eq!(graph.eccentricity_of(um), 36);
        assert_eq!(graph.eccentricity_of(dois), 24);
        assert_eq!(graph.eccentricity_of(quatro), 36);
        assert_eq!(graph.diameters(), vec![0, 36]);
    }

    #[test]
    fn diameter_uses_weights_not_hops() {
        // the direct edge 0 -- 2 is one hop but far heavier than the detour over 1
        let graph = numbered_graph(3, [(0, 1, 100), (1, 2, 100), (0, 2, 1000)]);

        assert_eq!(graph.shortest_distances_from(0), vec![Some(0), Some(100), Some(200)]);
        assert_eq!(graph.diameters(), vec![200]);

        let hops = graph.hop_distances_from(0);
        assert_eq!(hops, vec![Some(0), Some(1), Some(1)]);
        assert_eq!(hops.into_iter().flatten().max(), Some(1));
    }

    #[test]
    fn empty_and_isolated() {
        assert_eq!(graph_from_text("g\n").diameters(), Vec::<Distance>::new());
        assert_eq!(graph_from_text("g\na\nb\n").diameters(), vec![0, 0]);
    }

    #[test]
    fn parallel_edges_use_lightest() {
        let graph = numbered_graph(2, [(0, 1, 9), (0, 1, 4), (1, 0, 6), (1, 1, 1)]);
        assert_eq!(graph.shortest_distances_from(1), vec![Some(4), Some(0)]);
        assert_eq!(graph.diameters(), vec![4]);
    }

    #[test]
    fn zero_weight_counts_as_one() {
        let graph = graph_from_text("g\na -- b 0\nb -- c\n");
        assert_eq!(graph.diameters(), vec![2]);
    }

    #[test]
    fn long_path_does_not_overflow() {
        let n = 1000;
        let graph = numbered_graph(n, (1..n).map(|u| (u - 1, u, Weight::MAX)));
        assert_eq!(
            graph.shortest_distances_from(0)[n as usize - 1],
            Some((n - 1) as Distance * Weight::MAX as Distance)
        );
    }

    #[test]
    fn reused_search_matches_fresh_search() {
        let rng = &mut Pcg64::seed_from_u64(7);
        let graph = random_graph(rng, 40, 60, 20, true);

        let mut dijkstra = Dijkstra::new(&graph);
        for u in graph.vertices_range() {
            assert_eq!(
                dijkstra.run(u).to_vec(),
                graph.shortest_distances_from(u),
                "source {u}"
            );
        }
    }

    #[test]
    fn random_against_floyd_warshall() {
        let rng = &mut Pcg64::seed_from_u64(2024);

        for n in [1, 4, 15, 40] {
            for m in [0, n / 2, n, 3 * n] {
                let graph = random_graph(rng, n, m, 50, true);
                let apsp = floyd_warshall(&graph);

                for u in graph.vertices_range() {
                    assert_eq!(graph.shortest_distances_from(u), apsp[u as usize]);
                }

                let partition = graph.partition_into_connected_components();
                let mut expected = vec![0; partition.number_of_classes() as usize];
                for (u, row) in apsp.iter().enumerate() {
                    let ecc = row.iter().flatten().copied().max().unwrap_or(0);
                    let class = partition.class_of_node(u as Node).unwrap() as usize;
                    expected[class] = expected[class].max(ecc);
                }
                expected.sort_unstable();

                let diameters = graph.diameters();
                assert_eq!(diameters.len(), graph.number_of_connected_components() as usize);
                assert_eq!(diameters, expected);
            }
        }
    }
}
