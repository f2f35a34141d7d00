/*!
`sngraphs` is a small toolkit for exploratory analysis of **s**ocial-**n**etwork
graphs (Facebook100-style `.gml` files): load a graph, compute descriptive
statistics, and prepare them for inspection.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of
nodes in the graph. As social-network snapshots do not come close to `2^32`
nodes, this suffices and saves space compared to `u64`/`usize`. For **edges**,
we use a simple tuple-struct `Edge(Node, Node)`; all representations in this
crate are **undirected**, so `Edge(u, v)` is treated as equivalent to
`Edge(v, u)` (although we normalize edges often).

The file ids of a graph are usually sparse; readers map them onto dense node
ids and keep the original identifier as a per-node label. Node attributes
(dormitory, gender, graduation year, ...) are dynamically typed, so they are
stored as tagged [`AttrValue`](repr::AttrValue) records next to the graph in an
[`AttributedGraph`](repr::AttributedGraph).

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations,
  and all standard graph representations,
- [`algo`] includes the statistics and algorithm traits that are implemented
  on graphs itself, such as connected components (`graph.connected_components()`),
  largest-component extraction, density/average degree, degree distributions,
  and clustering coefficients,
- [`io`] includes handlers for reading graphs from Gml or edge-list files (and
  writing Gml),
- [`utils`] includes the `NodeMapper`-framework for mapping (sub-)graphs to
  other (sub-)graphs.

In most use-cases, `use sngraphs::{prelude::*, algo::*};` suffices for your
needs:

```
use sngraphs::{prelude::*, algo::*};

// triangle with a pendant node
let graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (0, 2), (2, 3)]);

let stats = graph.summary_stats();
assert_eq!(stats.num_nodes, 4);
assert_eq!(stats.avg_degree, 2.0);

assert!(graph.is_connected());
assert_eq!(graph.degree_distribution().max_degree(), 3);
assert!((graph.transitivity() - 0.6).abs() < 1e-12);
```

The binary `sn-explore` builds a console report on top of these blocks for
batches of graph files.
*/

pub mod algo;
pub mod edge;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use node::*;

/// `sngraphs::prelude` includes definitions for nodes and edges, all basic
/// graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
