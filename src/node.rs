/*!
# Node Representation

We choose `Node = u32` as even the largest social-network snapshots we target
stay well below `2^32` nodes. This allows us to (1) save space compared to
`usize`/`u64` and (2) manipulate node values directly without abstracting over
them.
*/

use fixedbitset::FixedBitSet;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// A dense BitSet over Nodes.
///
/// Used for visited-sets in traversals, component membership, and neighbor
/// marking in the clustering scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeBitSet {
    bits: FixedBitSet,
}

impl NodeBitSet {
    /// Creates an empty bitset with capacity for nodes `0..n`
    pub fn new(n: NumNodes) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(n as usize),
        }
    }

    /// Creates a bitset with capacity for nodes `0..n` and all bits in `iter` set
    pub fn new_with_bits_set<I>(n: NumNodes, iter: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        let mut set = Self::new(n);
        set.set_bits(iter);
        set
    }

    /// Sets bit `u` and returns *true* if it was set before.
    /// ** Panics if `u >= n` **
    pub fn set_bit(&mut self, u: Node) -> bool {
        self.bits.put(u as usize)
    }

    /// Sets all bits in the iterator
    pub fn set_bits<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = Node>,
    {
        for u in iter {
            self.set_bit(u);
        }
    }

    /// Clears bit `u` and returns *true* if it was set before.
    /// ** Panics if `u >= n` **
    pub fn clear_bit(&mut self, u: Node) -> bool {
        let was_set = self.bits.contains(u as usize);
        self.bits.set(u as usize, false);
        was_set
    }

    /// Returns *true* if bit `u` is set
    pub fn get_bit(&self, u: Node) -> bool {
        self.bits.contains(u as usize)
    }

    /// Returns the number of set bits
    pub fn cardinality(&self) -> NumNodes {
        self.bits.count_ones(..) as NumNodes
    }

    /// Returns the number of bits (set or unset) in the bitset
    pub fn number_of_bits(&self) -> NumNodes {
        self.bits.len() as NumNodes
    }

    /// Returns an iterator over all set bits in increasing order
    pub fn iter_set_bits(&self) -> impl Iterator<Item = Node> + '_ {
        self.bits.ones().map(|u| u as Node)
    }

    /// Clears all bits
    pub fn clear_all(&mut self) {
        self.bits.clear();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bitset_set_and_clear() {
        let mut set = NodeBitSet::new(10);
        assert_eq!(set.cardinality(), 0);

        assert!(!set.set_bit(3));
        assert!(set.set_bit(3));
        assert!(set.get_bit(3));
        assert_eq!(set.cardinality(), 1);

        assert!(set.clear_bit(3));
        assert!(!set.clear_bit(3));
        assert_eq!(set.cardinality(), 0);
    }

    #[test]
    fn bitset_iter_is_sorted() {
        let set = NodeBitSet::new_with_bits_set(8, [5, 1, 7, 1]);
        assert_eq!(set.iter_set_bits().collect::<Vec<_>>(), vec![1, 5, 7]);
        assert_eq!(set.cardinality(), 3);
    }
}
