/*!
# Clustering Metrics

Global transitivity and local clustering coefficients.

Both metrics are computed in a single scan over all nodes: the neighborhood of
the current node is marked in a [`NodeBitSet`] and the neighbor lists of its
neighbors are probed against the marks to count edges among the neighborhood.
Self-loops are excluded from the neighborhood, so they contribute neither to
the degree `k` nor to the neighbor-pair counts.
*/

use super::*;

/// Clustering coefficients of a graph
#[derive(Debug, Clone, PartialEq)]
pub struct ClusteringMetrics {
    /// Fraction of connected triples that are closed: `3 * triangles / triples`.
    /// Defined as `0.0` if the graph contains no connected triple.
    pub global_transitivity: f64,
    /// Local clustering coefficient per node, indexed by node id.
    /// Nodes of degree less than two have coefficient `0.0`.
    pub local: Vec<f64>,
    /// Arithmetic mean of all local coefficients (`0.0` for the empty graph)
    pub mean_local: f64,
}

/// Computation of transitivity and local clustering coefficients.
pub trait Clustering: AdjacencyList + Sized {
    /// Computes global transitivity, all local clustering coefficients, and
    /// their mean in one pass.
    fn clustering_metrics(&self) -> ClusteringMetrics {
        let mut local = vec![0.0f64; self.len()];
        let mut marker = self.vertex_bitset_unset();

        // number of connected triples and of ordered, connected neighbor pairs
        let mut triples: u64 = 0;
        let mut closed: u64 = 0;

        for u in self.vertices() {
            let mut k: u64 = 0;
            for v in self.neighbors_of(u) {
                if v != u {
                    marker.set_bit(v);
                    k += 1;
                }
            }

            if k >= 2 {
                // each edge among the neighborhood is seen from both endpoints
                let mut links: u64 = 0;
                for v in self.neighbors_of(u) {
                    if v == u {
                        continue;
                    }
                    for w in self.neighbors_of(v) {
                        if w != u && w != v && marker.get_bit(w) {
                            links += 1;
                        }
                    }
                }

                local[u as usize] = links as f64 / (k * (k - 1)) as f64;
                triples += k * (k - 1) / 2;
                closed += links;
            }

            for v in self.neighbors_of(u) {
                if v != u {
                    marker.clear_bit(v);
                }
            }
        }

        let global_transitivity = if triples == 0 {
            0.0
        } else {
            // closed / 2 edges among neighborhoods equal 3 * triangles
            (closed as f64 / 2.0) / triples as f64
        };

        let mean_local = if local.is_empty() {
            0.0
        } else {
            local.iter().sum::<f64>() / local.len() as f64
        };

        ClusteringMetrics {
            global_transitivity,
            local,
            mean_local,
        }
    }

    /// Returns only the global transitivity
    fn transitivity(&self) -> f64 {
        self.clustering_metrics().global_transitivity
    }

    /// Returns only the local clustering coefficients, indexed by node id
    fn local_clustering_coefficients(&self) -> Vec<f64> {
        self.clustering_metrics().local
    }

    /// Returns `(degree, local coefficient)` per node, e.g. for scatter plots
    fn degree_clustering_pairs(&self) -> Vec<(NumNodes, f64)> {
        let local = self.local_clustering_coefficients();
        self.degrees().zip(local).collect()
    }
}

impl<G: AdjacencyList + Sized> Clustering for G {}
