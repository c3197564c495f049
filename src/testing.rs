//! Shared helpers for the unit tests: small graph constructors, seeded random graphs and
//! brute-force reference implementations the algorithms are checked against.

use itertools::Itertools;
use rand::Rng;

use crate::{io::TextRead, prelude::*};

/// Label of node `u` in generated graphs; zero-padded so that lexicographic and numeric order agree
pub fn label(u: Node) -> String {
    format!("v{u:05}")
}

/// Parses a graph from text and panics on failure
pub fn graph_from_text(text: &str) -> LabelledGraph {
    LabelledGraph::try_read_text(text.as_bytes()).unwrap()
}

/// Builds a graph on nodes `0..n` (labelled via [`label`]) with the given weighted edges
pub fn numbered_graph<I>(n: NumNodes, edges: I) -> LabelledGraph
where
    I: IntoIterator<Item = (Node, Node, Weight)>,
{
    let mut builder = LabelledGraphBuilder::new("numbered");
    for u in 0..n {
        assert_eq!(builder.add_node(&label(u)), u);
    }
    for (u, v, w) in edges {
        builder.add_edge(u, v, w);
    }
    builder.build()
}

/// Path `0 - 1 - ... - (n-1)` with unit weights
pub fn path(n: NumNodes) -> LabelledGraph {
    numbered_graph(n, (1..n).map(|u| (u - 1, u, 1)))
}

/// Cycle `0 - 1 - ... - (n-1) - 0` with unit weights
pub fn cycle(n: NumNodes) -> LabelledGraph {
    numbered_graph(n, (0..n).map(|u| (u, (u + 1) % n, 1)))
}

/// Random multigraph with `m` edges drawn uniformly from all node pairs (loops included when
/// `with_loops`) and weights in `1..=max_weight`.
pub fn random_graph<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    m: NumEdges,
    max_weight: Weight,
    with_loops: bool,
) -> LabelledGraph {
    let edges = (0..m)
        .filter_map(|_| {
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);
            (with_loops || u != v).then(|| (u, v, rng.random_range(1..=max_weight)))
        })
        .collect_vec();
    numbered_graph(n, edges)
}

/// Number of connected components after deleting `deleted_node` (and its edges) and `deleted_edge`
pub fn brute_force_components(
    graph: &LabelledGraph,
    deleted_node: Option<Node>,
    deleted_edge: Option<EdgeId>,
) -> usize {
    let n = graph.len();
    let mut parent = (0..n).collect_vec();

    fn find(parent: &mut [usize], mut u: usize) -> usize {
        while parent[u] != u {
            parent[u] = parent[parent[u]];
            u = parent[u];
        }
        u
    }

    for (id, e) in graph.edges().enumerate() {
        let Edge(u, v) = e.edge;
        if deleted_edge == Some(id as EdgeId) || deleted_node == Some(u) || deleted_node == Some(v)
        {
            continue;
        }
        let (ru, rv) = (find(&mut parent, u as usize), find(&mut parent, v as usize));
        parent[ru] = rv;
    }

    (0..n)
        .filter(|&u| Some(u as Node) != deleted_node && find(&mut parent, u) == u)
        .count()
}

/// All-pairs shortest distances; `None` for unreachable pairs
pub fn floyd_warshall(graph: &LabelledGraph) -> Vec<Vec<Option<Distance>>> {
    let n = graph.len();
    let mut dist = vec![vec![None; n]; n];

    for u in 0..n {
        dist[u][u] = Some(0);
    }
    for e in graph.edges() {
        let Edge(u, v) = e.edge;
        let (u, v) = (u as usize, v as usize);
        let w = e.weight as Distance;
        if dist[u][v].is_none_or(|d| d > w) {
            dist[u][v] = Some(w);
            dist[v][u] = Some(w);
        }
    }

    for k in 0..n {
        for i in 0..n {
            let Some(ik) = dist[i][k] else { continue };
            for j in 0..n {
                if let Some(kj) = dist[k][j] {
                    if dist[i][j].is_none_or(|d| d > ik + kj) {
                        dist[i][j] = Some(ik + kj);
                    }
                }
            }
        }
    }

    dist
}
