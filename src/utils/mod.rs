/*!
# Utilities

Provides the `NodeMapper`-framework for mapping the nodes of one graph to
another (see [`NodeMapSetter`] / [`NodeMapGetter`]), used by vertex-induced
subgraphs to relate old and new node ids.
*/

pub mod node_mapper;

pub use node_mapper::{NodeMapGetter, NodeMapSetter, NodeMapper};
