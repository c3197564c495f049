/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` nodes.
Nodes are dense identifiers `0..n` handed out in order of first appearance; the
human readable label of a node is stored in the graph (see [`GraphLabels`](crate::ops::GraphLabels)).
*/

use fixedbitset::FixedBitSet;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes.
///
/// Indexed by `u as usize`; use [`NodeBitSetExt`] for `Node`-typed access.
pub type NodeBitSet = FixedBitSet;

/// `Node`-typed shorthands on [`NodeBitSet`]
pub trait NodeBitSetExt {
    /// Creates an empty bitset with one entry per node
    fn new_for_nodes(n: NumNodes) -> Self;

    /// Sets the bit of `u` and returns its previous value
    fn set_node(&mut self, u: Node) -> bool;

    /// Returns *true* if the bit of `u` is set
    fn has_node(&self, u: Node) -> bool;

    /// Returns an iterator over all nodes whose bit is set
    fn iter_nodes(&self) -> impl Iterator<Item = Node> + '_;
}

impl NodeBitSetExt for NodeBitSet {
    fn new_for_nodes(n: NumNodes) -> Self {
        FixedBitSet::with_capacity(n as usize)
    }

    #[inline]
    fn set_node(&mut self, u: Node) -> bool {
        self.put(u as usize)
    }

    #[inline]
    fn has_node(&self, u: Node) -> bool {
        self.contains(u as usize)
    }

    fn iter_nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.ones().map(|u| u as Node)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn bitset_shorthands() {
        let mut set = NodeBitSet::new_for_nodes(10);
        assert!(!set.set_node(3));
        assert!(set.set_node(3));
        assert!(!set.set_node(7));

        assert!(set.has_node(3));
        assert!(!set.has_node(4));
        assert_eq!(set.iter_nodes().collect_vec(), vec![3, 7]);
    }
}
