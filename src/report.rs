/*!
# Reports

Renders query results the way the text interface prints them: labels instead of node ids,
sorted lexicographically, and space-separated. Every string query on a graph without nodes
returns the empty string.

```
use wgraphs::{prelude::*, report::*};

let g = LabelledGraph::from_labelled_edges("path", [("a", "b", 1), ("b", "c", 1)]);
assert_eq!(cut_vertices_string(&g), "b");
assert_eq!(cut_edges_string(&g), "a b b c");
assert_eq!(diameters_string(&g), "2");
```
*/

use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::{algo::*, prelude::*};

/// Labels of all articulation points, sorted
pub fn cut_vertices<G>(graph: &G) -> Vec<&str>
where
    G: IndexedAdjacencyList + GraphLabels,
{
    graph.sorted_labels_of(graph.compute_articulation_points().iter_nodes())
}

/// Label pairs of all bridges; each pair is ordered and the pairs are sorted
pub fn cut_edges<G>(graph: &G) -> Vec<(&str, &str)>
where
    G: IndexedAdjacencyList + GraphLabels,
{
    graph.sorted_label_pairs_of(graph.compute_bridges())
}

/// Component diameters in ascending order, e.g. `"0 36"`
pub fn diameters_string<G>(graph: &G) -> String
where
    G: WeightedAdjacencyList,
{
    graph.diameters().iter().join(" ")
}

/// Sorted labels of the cut vertices, e.g. `"b d"`
pub fn cut_vertices_string<G>(graph: &G) -> String
where
    G: IndexedAdjacencyList + GraphLabels,
{
    cut_vertices(graph).iter().join(" ")
}

/// Sorted label pairs of the cut edges, flattened, e.g. `"a b b c"`
pub fn cut_edges_string<G>(graph: &G) -> String
where
    G: IndexedAdjacencyList + GraphLabels,
{
    cut_edges(graph)
        .into_iter()
        .flat_map(|(a, b)| [a, b])
        .join(" ")
}

/// All query results of a graph, computed once
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GraphReport {
    pub name: String,
    pub number_of_nodes: NumNodes,
    pub number_of_edges: NumEdges,
    pub number_of_components: NumNodes,
    pub is_bipartite: bool,
    pub diameters: String,
    pub cut_vertices: String,
    pub cut_edges: String,
}

impl GraphReport {
    pub fn new<G>(graph: &G) -> Self
    where
        G: IndexedAdjacencyList + GraphLabels,
    {
        let cuts = graph.compute_cut_structure();

        Self {
            name: graph.name().to_string(),
            number_of_nodes: graph.number_of_nodes(),
            number_of_edges: graph.number_of_edges(),
            number_of_components: graph.number_of_connected_components(),
            is_bipartite: graph.is_bipartite(),
            diameters: diameters_string(graph),
            cut_vertices: graph
                .sorted_labels_of(cuts.articulation_points.iter_nodes())
                .iter()
                .join(" "),
            cut_edges: graph
                .sorted_label_pairs_of(cuts.bridges)
                .into_iter()
                .flat_map(|(a, b)| [a, b])
                .join(" "),
        }
    }

    /// One value per line without field names, in the order of the labelled block
    pub fn to_plain_string(&self) -> String {
        [
            self.name.clone(),
            self.number_of_nodes.to_string(),
            self.number_of_edges.to_string(),
            self.number_of_components.to_string(),
            (self.is_bipartite as u8).to_string(),
            self.diameters.clone(),
            self.cut_vertices.clone(),
            self.cut_edges.clone(),
        ]
        .join("\n")
    }
}

impl Display for GraphReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "graph: {}", self.name)?;
        writeln!(f, "vertices: {}", self.number_of_nodes)?;
        writeln!(f, "edges: {}", self.number_of_edges)?;
        writeln!(f, "components: {}", self.number_of_components)?;
        writeln!(f, "bipartite: {}", if self.is_bipartite { "yes" } else { "no" })?;
        writeln!(f, "diameters: {}", self.diameters)?;
        writeln!(f, "cut vertices: {}", self.cut_vertices)?;
        write!(f, "cut edges: {}", self.cut_edges)
    }
}
