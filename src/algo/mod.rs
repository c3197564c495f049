/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of the graph representation in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to traversal, connectivity, bipartiteness, weighted distances and cut structures.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.

All algorithms take the graph by shared reference and allocate their own working memory,
so any number of queries may run on the same graph.
*/

mod bipartite;
mod connectivity;
mod cuts;
mod distances;
mod partition;
mod traversal;

use crate::prelude::*;

pub use bipartite::*;
pub use connectivity::*;
pub use cuts::*;
pub use distances::*;
pub use partition::*;
pub use traversal::*;
