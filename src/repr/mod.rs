/*!
# Graph Representation

Graphs in this crate are **undirected**, **weighted** and **labelled**:
- every node `0..n` carries a unique string label (see [`GraphLabels`]),
- every edge carries a non-negative integer weight (see [`WeightedAdjacencyList`]),
- parallel edges and self-loops are allowed and stored independently.

The only representation is [`LabelledGraph`], an adjacency array of [`WeightedNeighborhood`]s.
It is immutable once built; construction goes through [`LabelledGraphBuilder`] (or the
text reader in [`crate::io`]).
*/

use crate::{ops::*, *};

mod labelled;
mod neighborhood;

pub use labelled::*;
pub use neighborhood::*;
