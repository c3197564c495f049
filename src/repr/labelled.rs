use fxhash::FxHashMap;

use super::*;

/// An undirected, weighted graph whose nodes carry unique string labels.
///
/// Nodes are numbered `0..n` in the order their labels were first seen. Parallel edges and
/// self-loops are stored as-is. The graph is immutable; use [`LabelledGraphBuilder`] to create one.
#[derive(Debug, Clone, Default)]
pub struct LabelledGraph {
    name: String,
    labels: Vec<String>,
    index: FxHashMap<String, Node>,
    nbs: Vec<WeightedNeighborhood>,
    edges: Vec<WeightedEdge>,
}

impl LabelledGraph {
    /// Shorthand for building a graph from a list of labelled edges.
    /// Nodes are numbered by first appearance along the list.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// let g = LabelledGraph::from_labelled_edges("path", [("a", "b", 2), ("b", "c", 0)]);
    /// assert_eq!(g.number_of_nodes(), 3);
    /// assert_eq!(g.node_of("c"), Some(2));
    /// assert_eq!(g.weight_of(1, 2), Some(1));
    /// ```
    pub fn from_labelled_edges<'a, S, I>(name: S, edges: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (&'a str, &'a str, Weight)>,
    {
        let mut builder = LabelledGraphBuilder::new(name);
        for (a, b, w) in edges {
            builder.add_labelled_edge(a, b, Some(w));
        }
        builder.build()
    }
}

impl GraphNodeOrder for LabelledGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.labels.len() as NumNodes
    }
}

impl GraphEdgeOrder for LabelledGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl AdjacencyList for LabelledGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }
}

impl WeightedAdjacencyList for LabelledGraph {
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = Neighbor> + '_ {
        self.nbs[u as usize].records()
    }

    fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.edges.iter().copied()
    }
}

impl GraphLabels for LabelledGraph {
    fn name(&self) -> &str {
        &self.name
    }

    fn label_of(&self, u: Node) -> &str {
        &self.labels[u as usize]
    }

    fn node_of(&self, label: &str) -> Option<Node> {
        self.index.get(label).copied()
    }
}

impl IndexedAdjacencyList for LabelledGraph {
    #[inline]
    fn ith_neighbor(&self, u: Node, i: NumNodes) -> Neighbor {
        self.nbs[u as usize].ith_record(i as usize)
    }
}

impl LabelledGraph {
    /// Returns the adjacency records of `u` as a slice.
    /// ** Panics if `u >= n` **
    pub fn as_neighbors_slice(&self, u: Node) -> &[Neighbor] {
        self.nbs[u as usize].as_slice()
    }
}

/// Incrementally constructs a [`LabelledGraph`].
///
/// Nodes are created on first mention of their label; edges are appended unconditionally.
#[derive(Debug, Clone, Default)]
pub struct LabelledGraphBuilder {
    graph: LabelledGraph,
}

impl LabelledGraphBuilder {
    /// Creates a builder for an empty graph with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            graph: LabelledGraph {
                name: name.into(),
                ..Default::default()
            },
        }
    }

    /// Returns the number of nodes created so far
    pub fn number_of_nodes(&self) -> NumNodes {
        self.graph.number_of_nodes()
    }

    /// Returns the number of edges added so far
    pub fn number_of_edges(&self) -> NumEdges {
        self.graph.number_of_edges()
    }

    /// Returns the node of `label`, creating it if the label was not seen before.
    pub fn add_node(&mut self, label: &str) -> Node {
        if let Some(&u) = self.graph.index.get(label) {
            return u;
        }

        let u = self.graph.labels.len() as Node;
        assert!(u != INVALID_NODE, "Too many nodes");

        self.graph.labels.push(label.to_string());
        self.graph.index.insert(label.to_string(), u);
        self.graph.nbs.push(WeightedNeighborhood::new());
        u
    }

    /// Adds the undirected edge `{u, v}` and returns its id.
    /// A weight of `0` is stored as [`DEFAULT_WEIGHT`].
    /// ** Panics if `u >= n || v >= n` **
    pub fn add_edge(&mut self, u: Node, v: Node, weight: Weight) -> EdgeId {
        let n = self.graph.number_of_nodes();
        assert!(u < n && v < n, "Edge ({u},{v}) refers to unknown nodes");

        let edge = self.graph.edges.len() as EdgeId;
        let weight = effective_weight(Some(weight));

        self.graph.nbs[u as usize].add_neighbor(Neighbor {
            node: v,
            weight,
            edge,
        });
        self.graph.nbs[v as usize].add_neighbor(Neighbor {
            node: u,
            weight,
            edge,
        });
        self.graph.edges.push(WeightedEdge::new(u, v, weight));

        edge
    }

    /// Adds an edge between two labels, creating the nodes if necessary.
    /// A missing weight is stored as [`DEFAULT_WEIGHT`].
    pub fn add_labelled_edge(&mut self, a: &str, b: &str, weight: Option<Weight>) -> EdgeId {
        let u = self.add_node(a);
        let v = self.add_node(b);
        self.add_edge(u, v, effective_weight(weight))
    }

    /// Finishes construction
    pub fn build(mut self) -> LabelledGraph {
        self.graph.nbs.iter_mut().for_each(|nbs| nbs.shrink_to_fit());
        self.graph.edges.shrink_to_fit();
        self.graph
    }
}
