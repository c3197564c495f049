use std::{iter::Copied, slice::Iter};

use smallvec::SmallVec;

use super::*;

/// A single adjacency record: the node on the other side, the weight of the edge and the
/// id of the undirected edge this record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Neighbor {
    pub node: Node,
    pub weight: Weight,
    pub edge: EdgeId,
}

/// Inline capacity of a neighborhood before it spills onto the heap.
/// Most vertices of the graphs we read have only a handful of neighbors.
const INLINE_NEIGHBORS: usize = 4;

/// Unsorted list of adjacency records that allows multi-edges and self-loops.
#[derive(Debug, Clone, Default)]
pub struct WeightedNeighborhood(SmallVec<[Neighbor; INLINE_NEIGHBORS]>);

impl WeightedNeighborhood {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of adjacency records
    pub fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    /// Returns an iterator over all adjacency records
    pub fn records(&self) -> Copied<Iter<'_, Neighbor>> {
        self.0.iter().copied()
    }

    /// Returns an iterator over the neighboring nodes
    pub fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.iter().map(|nb| nb.node)
    }

    /// Returns the `i`-th adjacency record.
    /// ** Panics if `i >= self.num_of_neighbors()` **
    pub fn ith_record(&self, i: usize) -> Neighbor {
        self.0[i]
    }

    /// Returns a slice-reference of the adjacency records
    pub fn as_slice(&self) -> &[Neighbor] {
        &self.0
    }

    /// Appends a record without checking for an existing edge to the same node
    pub fn add_neighbor(&mut self, nb: Neighbor) {
        self.0.push(nb);
    }

    /// Releases surplus capacity once the neighborhood is complete
    pub fn shrink_to_fit(&mut self) {
        self.0.shrink_to_fit();
    }
}
