/*!
# Subgraph Algorithms

Provides vertex-induced subgraph copies. The induced graph is a materialized
copy (never a view), so the original graph stays untouched and immutable.
*/

use super::*;

/// A trait for creating vertex-induced subgraphs from a graph.
pub trait Subgraph: Sized {
    /// Creates a **vertex-induced subgraph** from the current graph,
    /// restricted to the nodes in `vertices`.
    ///
    /// The kept nodes are re-numbered densely in increasing order of their
    /// old ids and the returned mapping relates old and new ids. All edges
    /// (including self-loops) whose endpoints both lie in `vertices` are kept.
    fn vertex_induced<M>(&self, vertices: &NodeBitSet) -> (Self, M)
    where
        Self: GraphNew + GraphEdgeEditing,
        M: NodeMapSetter + NodeMapGetter;
}

impl<G> Subgraph for G
where
    G: AdjacencyList,
{
    fn vertex_induced<M>(&self, vertices: &NodeBitSet) -> (Self, M)
    where
        Self: GraphNew + GraphEdgeEditing,
        M: NodeMapSetter + NodeMapGetter,
    {
        let new_n = vertices.cardinality();
        let mut mapping = M::with_capacity(new_n);

        for (new, old) in vertices.iter_set_bits().enumerate() {
            mapping.map_node_to(old, new as Node);
        }

        // Prevent moving mapping into the closure
        let mapping_ref = &mapping;
        let graph = Self::from_edges(
            new_n,
            vertices.iter_set_bits().flat_map(|u| {
                let new_u = mapping_ref.new_id_of(u).unwrap();
                self.neighbors_of(u).filter_map(move |v| {
                    let new_v = mapping_ref.new_id_of(v)?;
                    let e = Edge(new_u, new_v);
                    e.is_normalized().then_some(e)
                })
            }),
        );

        (graph, mapping)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn induced_subgraph_keeps_inner_edges_only() {
        // triangle 0-1-2 plus pendant 3
        let graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (0, 2), (2, 3)]);

        let members = NodeBitSet::new_with_bits_set(4, [0, 1, 2]);
        let (sub, mapper): (AdjArrayUndir, NodeMapper) = graph.vertex_induced(&members);

        assert_eq!(sub.number_of_nodes(), 3);
        assert_eq!(sub.number_of_edges(), 3);
        assert_eq!(mapper.number_of_mapped_nodes(), 3);
        assert_eq!(mapper.new_id_of(3), None);
        assert_eq!(
            sub.ordered_edges(true),
            vec![Edge(0, 1), Edge(0, 2), Edge(1, 2)]
        );
    }

    #[test]
    fn induced_subgraph_keeps_self_loops() {
        let mut graph = AdjArrayUndir::new(3);
        graph.add_edge(0, 1);
        graph.add_edge(1, 1);

        let members = NodeBitSet::new_with_bits_set(3, [1, 2]);
        let (sub, _): (AdjArrayUndir, NodeMapper) = graph.vertex_induced(&members);

        assert_eq!(sub.number_of_nodes(), 2);
        assert_eq!(sub.number_of_edges(), 1);
        assert!(sub.has_self_loop(0));
    }

    #[test]
    fn induced_subgraph_of_empty_set() {
        let graph = AdjArrayUndir::from_edges(3, [(0, 1)]);

        let members = NodeBitSet::new(3);
        let (sub, mapper): (AdjArrayUndir, NodeMapper) = graph.vertex_induced(&members);

        assert!(sub.is_empty());
        assert_eq!(mapper.number_of_mapped_nodes(), 0);
    }
}
