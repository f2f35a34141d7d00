/*!
# Graph Algorithms

This module provides the statistics and algorithms of this crate, built on top
of the graph representations:
```rust
use sngraphs::{prelude::*, algo::*};
```
All algorithms are blanket-implemented as traits on the graph representations,
so `graph.connected_components()`, `graph.summary_stats()` etc. work on every
representation (including [`AttributedGraph`](crate::repr::AttributedGraph)).
If possible, algorithms are provided as **iterators**, making it easy to
consume results lazily.
*/

mod clustering;
mod connectivity;
mod stats;
mod subgraph;
mod traversal;

use crate::{prelude::*, utils::*};

pub use clustering::*;
pub use connectivity::*;
pub use stats::*;
pub use subgraph::*;
pub use traversal::*;
