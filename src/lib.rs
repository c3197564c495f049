/*!
`wgraphs` is a graph data structure & algorithms library for graphs that are
- **w**eighted : every edge carries a non-negative integer weight
- labelled : every node has a unique name, nodes are numbered `0` to `n - 1` in order of first appearance
- undirected : parallel edges and self-loops are allowed and kept

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`; weighted edges are [`WeightedEdge`].
Every undirected edge also has an [`EdgeId`] so that parallel edges can be told apart.

The only graph representation is [`LabelledGraph`](crate::repr::LabelledGraph). It is built once
(from text or with a [`LabelledGraphBuilder`](crate::repr::LabelledGraphBuilder)) and never mutated afterwards.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations, and the graph representation,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as BFS (`graph.bfs(start_node)`),
  connected components, bipartite checks, weighted diameters and cut vertices/edges,
- [`io`] includes the reader for the line-oriented text format,
- [`report`] renders query results as the space-separated strings of the text interface.

In addition, [`handle::GraphHandle`] models an owned graph that can be destroyed explicitly while
queries keep answering with empty values.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use wgraphs::{prelude::*, algo::*, io::*, report::*};

let text = "\
// the name of the graph
triangle_with_vertex

um -- dois 12
dois -- quatro 24
quatro -- um 41

tres
";

let graph = LabelledGraph::try_read_text(text.as_bytes()).unwrap();
assert_eq!(graph.number_of_nodes(), 4);
assert_eq!(graph.number_of_connected_components(), 2);
assert!(!graph.is_bipartite());
assert_eq!(diameters_string(&graph), "0 36");
assert_eq!(cut_vertices_string(&graph), "");
```
*/

pub mod algo;
pub mod edge;
pub mod handle;
pub mod io;
pub mod node;
pub mod ops;
pub mod report;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use node::*;

/// `wgraphs::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
