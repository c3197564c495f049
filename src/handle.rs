/*!
# Graph Handle

[`GraphHandle`] owns at most one graph. After [`GraphHandle::destroy`] (or when constructed
empty) every query answers with an empty value instead of failing: `""` for strings, `0` for
counts and `false` for the bipartite test.

```
use wgraphs::handle::GraphHandle;

let mut handle = GraphHandle::from_reader("g\na -- b\nb -- c\n".as_bytes()).unwrap();
assert_eq!(handle.cut_vertices_string(), "b");

assert!(handle.destroy());
assert!(!handle.destroy());
assert_eq!(handle.cut_vertices_string(), "");
assert_eq!(handle.number_of_nodes(), 0);
```
*/

use std::io::{BufRead, Result};

use tracing::debug;

use crate::{algo::*, io::TextRead, prelude::*, report::*};

/// Owner of an optional [`LabelledGraph`]
#[derive(Debug, Clone, Default)]
pub struct GraphHandle {
    graph: Option<LabelledGraph>,
}

impl From<LabelledGraph> for GraphHandle {
    fn from(graph: LabelledGraph) -> Self {
        Self::new(graph)
    }
}

impl GraphHandle {
    pub fn new(graph: LabelledGraph) -> Self {
        Self { graph: Some(graph) }
    }

    /// Handle without a graph
    pub fn empty() -> Self {
        Self::default()
    }

    /// Reads a graph from the text format with default settings
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        LabelledGraph::try_read_text(reader).map(Self::new)
    }

    pub fn graph(&self) -> Option<&LabelledGraph> {
        self.graph.as_ref()
    }

    /// Releases the graph. Returns *true* if a graph was held.
    pub fn destroy(&mut self) -> bool {
        match self.graph.take() {
            Some(graph) => {
                debug!(name = graph.name(), "Destroying graph");
                true
            }
            None => false,
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.graph.is_none()
    }

    pub fn name(&self) -> &str {
        self.graph.as_ref().map_or("", |g| g.name())
    }

    pub fn number_of_nodes(&self) -> NumNodes {
        self.graph.as_ref().map_or(0, |g| g.number_of_nodes())
    }

    pub fn number_of_edges(&self) -> NumEdges {
        self.graph.as_ref().map_or(0, |g| g.number_of_edges())
    }

    pub fn number_of_connected_components(&self) -> NumNodes {
        self.graph
            .as_ref()
            .map_or(0, |g| g.number_of_connected_components())
    }

    pub fn is_bipartite(&self) -> bool {
        self.graph.as_ref().is_some_and(|g| g.is_bipartite())
    }

    pub fn diameters_string(&self) -> String {
        self.graph
            .as_ref()
            .map(diameters_string)
            .unwrap_or_default()
    }

    pub fn cut_vertices_string(&self) -> String {
        self.graph
            .as_ref()
            .map(cut_vertices_string)
            .unwrap_or_default()
    }

    pub fn cut_edges_string(&self) -> String {
        self.graph
            .as_ref()
            .map(cut_edges_string)
            .unwrap_or_default()
    }

    /// Report of the held graph, if any
    pub fn report(&self) -> Option<GraphReport> {
        self.graph.as_ref().map(GraphReport::new)
    }
}
