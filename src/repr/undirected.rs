use super::*;

/// An undirected graph representation storing one neighbor list per node.
///
/// Every edge `{u, v}` with `u != v` appears in both endpoint lists but is
/// counted once in `num_edges`. A self-loop `{u, u}` appears once in `u`'s
/// list and is counted once.
#[derive(Clone)]
pub struct UndirectedGraph<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Representation using an Adjacency-Array
pub type AdjArrayUndir = UndirectedGraph<ArrNeighborhood>;

/// Representation using a sparse Adjacency-Array
pub type SparseAdjArrayUndir = UndirectedGraph<SparseNeighborhood>;

impl<Nbs: Neighborhood> GraphNodeOrder for UndirectedGraph<Nbs> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }
}

impl<Nbs: Neighborhood> GraphEdgeOrder for UndirectedGraph<Nbs> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs: Neighborhood> AdjacencyList for UndirectedGraph<Nbs> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for UndirectedGraph<Nbs> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].has_neighbor(v)
    }
}

impl<Nbs: Neighborhood> GraphNew for UndirectedGraph<Nbs> {
    fn new(n: NumNodes) -> Self {
        Self {
            num_edges: 0,
            nbs: vec![Nbs::new(n); n as usize],
        }
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for UndirectedGraph<Nbs> {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        assert!(v < self.number_of_nodes());
        if !self.nbs[u as usize].try_add_neighbor(v) {
            if u != v {
                assert!(!self.nbs[v as usize].try_add_neighbor(u));
            }
            self.num_edges += 1;
            false
        } else {
            true
        }
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        assert!(v < self.number_of_nodes());
        if self.nbs[u as usize].try_remove_neighbor(v) {
            if u != v {
                assert!(self.nbs[v as usize].try_remove_neighbor(u));
            }
            self.num_edges -= 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
use crate::testing::test_graph_ops;

#[cfg(test)]
test_graph_ops!(adj_array_undir, AdjArrayUndir, (GraphNew, AdjacencyList, GraphEdgeEditing));

#[cfg(test)]
test_graph_ops!(
    sparse_adj_array_undir,
    SparseAdjArrayUndir,
    (GraphNew, AdjacencyList, GraphEdgeEditing)
);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn self_loops_are_stored_once() {
        let mut graph = AdjArrayUndir::new(3);
        assert!(!graph.try_add_edge(1, 1));
        assert!(graph.try_add_edge(1, 1));

        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.degree_of(1), 1);
        assert!(graph.has_self_loop(1));

        assert!(graph.try_remove_edge(1, 1));
        assert_eq!(graph.number_of_edges(), 0);
        assert!(!graph.has_self_loop(1));
    }

    #[test]
    fn empty_graph_is_legal() {
        let graph = AdjArrayUndir::new(0);
        assert!(graph.is_empty());
        assert_eq!(graph.number_of_edges(), 0);
        assert_eq!(graph.vertices().count(), 0);
    }
}
