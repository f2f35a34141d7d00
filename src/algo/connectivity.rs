use itertools::Itertools;

use super::*;

/// Iterator over the connected components of an undirected graph.
///
/// Each component is emitted as a `Vec<Node>` in BFS discovery order. The
/// search restarts at the smallest unvisited node, so the component order is
/// deterministic. The empty graph yields no components.
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    bfs: Option<BFS<'a, G>>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            bfs: (!graph.is_empty()).then(|| graph.bfs(0)),
        }
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let bfs = self.bfs.as_mut()?;
        loop {
            let cc = bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !bfs.try_restart_at_unvisited() {
                return None;
            }
        }
    }
}

/// Connectivity queries and largest-component extraction for undirected graphs.
pub trait Connectivity: AdjacencyList + Sized {
    /// Returns an iterator over all connected components
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Returns the number of connected components (0 for the empty graph)
    fn number_of_connected_components(&self) -> NumNodes {
        self.connected_components().count() as NumNodes
    }

    /// Returns *true* if every node is reachable from every other node.
    /// Graphs with at most one node are considered connected.
    fn is_connected(&self) -> bool {
        self.len() <= 1 || self.bfs(0).count() == self.len()
    }

    /// Returns the nodes of the largest connected component in discovery
    /// order. Ties are broken towards the first-discovered component, so the
    /// result is deterministic. The empty graph yields an empty vector.
    fn largest_component_nodes(&self) -> Vec<Node> {
        let mut largest = Vec::new();
        for cc in self.connected_components() {
            if cc.len() > largest.len() {
                largest = cc;
            }
        }
        largest
    }

    /// Materializes the largest connected component as a vertex-induced
    /// subgraph copy together with the old/new node mapping.
    ///
    /// Kept nodes retain their relative order. Applying this to a connected
    /// graph yields an identical copy, making the operation idempotent.
    fn largest_connected_component<M>(&self) -> (Self, M)
    where
        Self: GraphNew + GraphEdgeEditing,
        M: NodeMapSetter + NodeMapGetter,
    {
        let members = NodeBitSet::new_with_bits_set(
            self.number_of_nodes(),
            self.largest_component_nodes(),
        );
        self.vertex_induced(&members)
    }
}

impl<G: AdjacencyList + Sized> Connectivity for G {}

#[cfg(test)]
mod test {
    use super::*;

    /// Sorts the nodes in each component increasingly and then the components
    /// themselves lexicographically.
    fn sort_components(mut components: Vec<Vec<Node>>) -> Vec<Vec<Node>> {
        components.iter_mut().for_each(|comp| comp.sort_unstable());
        components.sort_by(|a, b| a[0].cmp(&b[0]));
        components
    }

    #[test]
    fn components_of_forest() {
        let graph = AdjArrayUndir::from_edges(7, [(1, 2), (2, 3), (4, 5)]);

        let ccs = sort_components(graph.connected_components().collect_vec());
        assert_eq!(ccs, vec![vec![0], vec![1, 2, 3], vec![4, 5], vec![6]]);
        assert_eq!(graph.number_of_connected_components(), 4);
        assert!(!graph.is_connected());
    }

    #[test]
    fn components_of_empty_graph() {
        let graph = AdjArrayUndir::new(0);
        assert_eq!(graph.connected_components().count(), 0);
        assert_eq!(graph.number_of_connected_components(), 0);
        assert!(graph.is_connected());
        assert!(graph.largest_component_nodes().is_empty());
    }

    #[test]
    fn single_node_is_connected() {
        let graph = AdjArrayUndir::new(1);
        assert!(graph.is_connected());
        assert_eq!(graph.number_of_connected_components(), 1);
    }

    #[test]
    fn largest_component_first_discovered_wins_ties() {
        // two components of size 2: {0,1} and {2,3}
        let graph = AdjArrayUndir::from_edges(4, [(0, 1), (2, 3)]);
        assert_eq!(graph.largest_component_nodes(), vec![0, 1]);
    }

    #[test]
    fn largest_component_extraction() {
        let graph = AdjArrayUndir::from_edges(6, [(0, 1), (2, 3), (3, 4), (2, 4)]);

        let (lcc, mapper): (AdjArrayUndir, NodeMapper) = graph.largest_connected_component();

        assert_eq!(lcc.number_of_nodes(), 3);
        assert_eq!(lcc.number_of_edges(), 3);
        assert_eq!(mapper.new_id_of(2), Some(0));
        assert_eq!(mapper.new_id_of(3), Some(1));
        assert_eq!(mapper.new_id_of(4), Some(2));
        assert_eq!(mapper.new_id_of(0), None);
    }

    #[test]
    fn largest_component_extraction_is_idempotent() {
        let graph = AdjArrayUndir::from_edges(6, [(0, 1), (1, 2), (4, 5)]);

        let (once, _): (AdjArrayUndir, NodeMapper) = graph.largest_connected_component();
        let (twice, mapper): (AdjArrayUndir, NodeMapper) = once.largest_connected_component();

        assert_eq!(once.number_of_nodes(), twice.number_of_nodes());
        assert_eq!(once.ordered_edges(true), twice.ordered_edges(true));
        for u in twice.vertices() {
            assert_eq!(mapper.new_id_of(u), Some(u));
        }
    }
}
