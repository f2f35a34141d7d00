/*!
# Summary Statistics

Descriptive statistics of a graph: node/edge counts, density, average degree,
and the degree distribution. All quantities are defined for every input graph;
divisions guard against zero-node graphs and return `0.0` sentinels so that
batch runs over many files never abort mid-way.
*/

use itertools::Itertools;

use super::*;

/// Basic descriptive statistics of a graph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphStats {
    pub num_nodes: NumNodes,
    pub num_edges: NumEdges,
    pub density: f64,
    pub avg_degree: f64,
}

/// Node/edge counts, density, and average degree.
pub trait SummaryStats: GraphNodeOrder + GraphEdgeOrder {
    /// Returns the ratio of actual edges to all possible edges between node
    /// pairs, i.e. `2m / (n * (n - 1))`. Defined as `0.0` for graphs with at
    /// most one node.
    fn density(&self) -> f64 {
        let n = self.number_of_nodes() as f64;
        if n <= 1.0 {
            return 0.0;
        }
        2.0 * self.number_of_edges() as f64 / (n * (n - 1.0))
    }

    /// Returns the average degree `2m / n`. Defined as `0.0` for the empty
    /// graph so that processing batches of files never aborts on one of them.
    fn average_degree(&self) -> f64 {
        let n = self.number_of_nodes();
        if n == 0 {
            return 0.0;
        }
        2.0 * self.number_of_edges() as f64 / n as f64
    }

    /// Bundles counts, density, and average degree
    fn summary_stats(&self) -> GraphStats {
        GraphStats {
            num_nodes: self.number_of_nodes(),
            num_edges: self.number_of_edges(),
            density: self.density(),
            avg_degree: self.average_degree(),
        }
    }
}

impl<G: GraphNodeOrder + GraphEdgeOrder> SummaryStats for G {}

/// The degrees of all nodes of a graph together with their histogram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreeDistribution {
    degrees: Vec<NumNodes>,
    histogram: Vec<(NumNodes, NumNodes)>,
}

impl DegreeDistribution {
    /// Returns the degree of every node, indexed by node id
    pub fn degrees(&self) -> &[NumNodes] {
        &self.degrees
    }

    /// Returns `(degree, count)` pairs sorted increasingly by degree.
    /// Only degrees with at least one node appear.
    pub fn histogram(&self) -> &[(NumNodes, NumNodes)] {
        &self.histogram
    }

    /// Returns the number of nodes with a given degree
    pub fn count_of(&self, degree: NumNodes) -> NumNodes {
        self.histogram
            .binary_search_by_key(&degree, |&(d, _)| d)
            .map_or(0, |i| self.histogram[i].1)
    }

    /// Returns the largest degree (0 for the empty graph)
    pub fn max_degree(&self) -> NumNodes {
        self.histogram.last().map_or(0, |&(d, _)| d)
    }

    /// Returns the sum of all histogram counts; equals the number of nodes
    pub fn count_sum(&self) -> NumNodes {
        self.histogram.iter().map(|&(_, c)| c).sum()
    }

    /// Returns the sum of all degrees; equals `2m` for loop-free graphs
    pub fn degree_sum(&self) -> u64 {
        self.degrees.iter().map(|&d| d as u64).sum()
    }
}

/// Computation of the degree distribution.
pub trait DegreeStats: AdjacencyList {
    /// Computes the degree of every node and the histogram mapping each
    /// occurring degree to the number of nodes having it. Every node is
    /// counted exactly once; the empty graph yields empty results.
    fn degree_distribution(&self) -> DegreeDistribution {
        let degrees = self.degrees().collect_vec();

        let mut histogram = degrees
            .iter()
            .copied()
            .counts()
            .into_iter()
            .map(|(d, n)| (d, n as NumNodes))
            .collect_vec();
        histogram.sort_unstable_by_key(|&(d, _)| d);

        DegreeDistribution { degrees, histogram }
    }
}

impl<G: AdjacencyList> DegreeStats for G {}
