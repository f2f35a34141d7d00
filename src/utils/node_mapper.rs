/*!
# Node Mapper

Provides functionality to map nodes between graphs or subgraphs.
Includes utilities to store and query node mappings efficiently.
*/

use fxhash::FxHashMap;

use crate::node::*;

/// A trait for constructing node mappings.
pub trait NodeMapSetter: Sized {
    /// Creates a mapper where the largest node that can be inserted is `n-1`.
    fn with_capacity(n: NumNodes) -> Self;

    /// Stores a mapping `old <-> new`.
    fn map_node_to(&mut self, old: Node, new: Node);
}

/// A trait for accessing node mappings.
pub trait NodeMapGetter {
    /// Returns the new id of `old` if it is mapped
    fn new_id_of(&self, old: Node) -> Option<Node>;

    /// Returns the old id of `new` if it is mapped
    fn old_id_of(&self, new: Node) -> Option<Node>;

    /// Returns the number of stored mappings
    fn number_of_mapped_nodes(&self) -> NumNodes;
}

/// A bidirectional node mapping backed by hashmaps in both directions.
#[derive(Debug, Clone, Default)]
pub struct NodeMapper {
    new_ids: FxHashMap<Node, Node>,
    old_ids: FxHashMap<Node, Node>,
}

impl NodeMapSetter for NodeMapper {
    fn with_capacity(n: NumNodes) -> Self {
        let mut mapper = NodeMapper::default();
        mapper.new_ids.reserve(n as usize);
        mapper.old_ids.reserve(n as usize);
        mapper
    }

    fn map_node_to(&mut self, old: Node, new: Node) {
        self.new_ids.insert(old, new);
        self.old_ids.insert(new, old);
    }
}

impl NodeMapGetter for NodeMapper {
    fn new_id_of(&self, old: Node) -> Option<Node> {
        self.new_ids.get(&old).copied()
    }

    fn old_id_of(&self, new: Node) -> Option<Node> {
        self.old_ids.get(&new).copied()
    }

    fn number_of_mapped_nodes(&self) -> NumNodes {
        self.new_ids.len() as NumNodes
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn roundtrip() {
        let mut mapper = NodeMapper::with_capacity(4);
        mapper.map_node_to(7, 0);
        mapper.map_node_to(2, 1);

        assert_eq!(mapper.number_of_mapped_nodes(), 2);
        assert_eq!(mapper.new_id_of(7), Some(0));
        assert_eq!(mapper.new_id_of(2), Some(1));
        assert_eq!(mapper.old_id_of(0), Some(7));
        assert_eq!(mapper.old_id_of(1), Some(2));

        assert_eq!(mapper.new_id_of(0), None);
        assert_eq!(mapper.old_id_of(2), None);
    }
}
