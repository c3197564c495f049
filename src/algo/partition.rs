/*!
# Partitioning of Nodes

This module provides a data structure to partition the nodes of a graph
into disjoint **classes**, e.g. its connected components.

# Example

```rust
use wgraphs::algo::Partition;

let mut part = Partition::new(5);

// Add first class with nodes 0, 1
let c0 = part.add_class([0, 1]);

// Add second class with nodes 2, 3
let c1 = part.add_class([2, 3]);

assert_eq!(part.number_of_classes(), 2);
assert_eq!(part.number_of_unassigned(), 1);
assert_eq!(part.class_of_node(3), Some(c1));
assert_eq!(part.class_of_node(1), Some(c0));
assert_eq!(part.class_of_node(4), None);
```
*/

use super::*;

/// Classes are identified by `0..number_of_classes()` in order of creation
pub type PartitionClass = NumNodes;

/// Represents a **partition** of the node set into disjoint classes.
///
/// Each node can belong to at most one class, or remain **unassigned**.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    classes: Vec<Option<PartitionClass>>,
    number_of_classes: NumNodes,
    unassigned: NumNodes,
}

impl Partition {
    /// Creates a new partition over `nodes` nodes, all initially unassigned.
    pub fn new(nodes: NumNodes) -> Self {
        Self {
            classes: vec![None; nodes as usize],
            number_of_classes: 0,
            unassigned: nodes,
        }
    }

    /// Creates a new class and assigns the given nodes to it.
    /// Returns the new class identifier.
    ///
    /// # Panics
    /// If any provided node was already assigned to another class.
    pub fn add_class<I>(&mut self, nodes: I) -> PartitionClass
    where
        I: IntoIterator<Item = Node>,
    {
        let class_id = self.number_of_classes;
        let mut size = 0;

        for u in nodes {
            assert_eq!(self.classes[u as usize], None); // check that node is unassigned
            self.classes[u as usize] = Some(class_id);
            size += 1;
        }

        self.number_of_classes += 1;
        self.unassigned -= size;
        class_id
    }

    /// Returns the class identifier of a node, or `None` if the node is unassigned.
    pub fn class_of_node(&self, node: Node) -> Option<PartitionClass> {
        self.classes[node as usize]
    }

    /// Returns the number of classes
    pub fn number_of_classes(&self) -> NumNodes {
        self.number_of_classes
    }

    /// Returns the number of nodes not assigned to any class
    pub fn number_of_unassigned(&self) -> NumNodes {
        self.unassigned
    }
}

/// Converts a collection of node classes into a [`Partition`]
pub trait IntoPartition {
    /// Creates a partition over `n` nodes with one class per item, in iteration order
    fn into_partition(self, n: NumNodes) -> Partition;
}

impl<I, C> IntoPartition for I
where
    I: IntoIterator<Item = C>,
    C: IntoIterator<Item = Node>,
{
    fn into_partition(self, n: NumNodes) -> Partition {
        let mut partition = Partition::new(n);
        for class in self {
            partition.add_class(class);
        }
        partition
    }
}
