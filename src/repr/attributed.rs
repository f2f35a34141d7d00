/*!
# Attributed Graphs

Social-network files attach records to their nodes (dormitory, gender,
graduation year, ...). The values are dynamically typed per attribute, so we
model them as a tagged variant [`AttrValue`] and attach one [`AttrMap`] plus a
display label to every node of an underlying graph representation.

[`AttributedGraph`] delegates all graph operations to its inner representation,
so every algorithm trait of this crate is directly available on it.
*/

use std::fmt::{Display, Formatter};

use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;

use super::*;
use crate::{
    algo::{Connectivity, Subgraph},
    utils::{NodeMapGetter, NodeMapper},
};

/// A single dynamically typed attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Int(i64),
    Float(f64),
    Str(String),
}

impl AttrValue {
    /// Returns the type of the value as written in reports
    pub fn type_name(&self) -> &'static str {
        match self {
            AttrValue::Int(_) => "int",
            AttrValue::Float(_) => "float",
            AttrValue::Str(_) => "str",
        }
    }

    /// Returns the numeric content of the value, if any
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Int(x) => Some(*x as f64),
            AttrValue::Float(x) => Some(*x),
            AttrValue::Str(_) => None,
        }
    }

    /// Returns the string content of the value, if any
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl Display for AttrValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AttrValue::Int(x) => write!(f, "{x}"),
            // `{:?}` keeps the decimal point so the value re-parses as a float
            AttrValue::Float(x) => write!(f, "{x:?}"),
            AttrValue::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Float(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

/// The attribute record of a single node
pub type AttrMap = FxHashMap<String, AttrValue>;

/// A graph representation together with per-node labels and attribute records.
///
/// Invariant: `labels.len() == attrs.len() == graph.number_of_nodes()`.
#[derive(Debug, Clone)]
pub struct AttributedGraph<G = AdjArrayUndir> {
    graph: G,
    labels: Vec<String>,
    attrs: Vec<AttrMap>,
}

impl<G: GraphNodeOrder> AttributedGraph<G> {
    /// Combines a graph with per-node labels and attribute records.
    /// ** Panics if the vector lengths do not match the number of nodes **
    pub fn new(graph: G, labels: Vec<String>, attrs: Vec<AttrMap>) -> Self {
        assert_eq!(labels.len(), graph.len());
        assert_eq!(attrs.len(), graph.len());
        Self {
            graph,
            labels,
            attrs,
        }
    }

    /// Wraps a bare graph, using the node id as label and empty attribute records
    pub fn from_graph(graph: G) -> Self {
        let labels = graph.vertices().map(|u| u.to_string()).collect_vec();
        let attrs = vec![AttrMap::default(); graph.len()];
        Self {
            graph,
            labels,
            attrs,
        }
    }

    /// Returns a reference to the underlying graph representation
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Consumes self and returns the underlying graph representation
    pub fn into_graph(self) -> G {
        self.graph
    }

    /// Returns the display label of a given vertex.
    /// ** Panics if `u >= n` **
    pub fn label_of(&self, u: Node) -> &str {
        &self.labels[u as usize]
    }

    /// Returns the attribute record of a given vertex.
    /// ** Panics if `u >= n` **
    pub fn attrs_of(&self, u: Node) -> &AttrMap {
        &self.attrs[u as usize]
    }

    /// Returns all attribute names occurring in the graph, sorted and deduplicated
    pub fn attribute_names(&self) -> Vec<String> {
        self.attrs
            .iter()
            .flat_map(|map| map.keys().cloned())
            .sorted()
            .dedup()
            .collect_vec()
    }

    /// Computes a census of a single attribute over all nodes.
    /// Returns `None` if no node carries the attribute.
    pub fn attribute_summary(&self, name: &str) -> Option<AttributeSummary> {
        let values = self
            .attrs
            .iter()
            .filter_map(|map| map.get(name))
            .collect_vec();
        let first = values.first()?;

        let unique: FxHashSet<String> = values.iter().map(|v| v.to_string()).collect();

        let numerics = values.iter().filter_map(|v| v.as_f64()).collect_vec();
        let numeric = (!numerics.is_empty()).then(|| {
            let min = numerics.iter().copied().fold(f64::INFINITY, f64::min);
            let max = numerics.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let mean = numerics.iter().sum::<f64>() / numerics.len() as f64;
            NumericSummary { min, max, mean }
        });

        let string_values = (numeric.is_none() && unique.len() <= 10)
            .then(|| unique.iter().cloned().sorted().collect_vec());

        Some(AttributeSummary {
            name: name.to_string(),
            type_name: first.type_name(),
            non_null: values.len() as NumNodes,
            unique: unique.len() as NumNodes,
            numeric,
            string_values,
        })
    }
}

impl<G> AttributedGraph<G>
where
    G: AdjacencyList + GraphNew + GraphEdgeEditing,
{
    /// Returns the largest connected component as a new attributed graph.
    ///
    /// Labels and attribute records are carried over to the new dense node
    /// ids. Kept node ids retain their relative order, so applying this to an
    /// already connected graph yields an identical copy.
    pub fn largest_connected_component(&self) -> Self {
        let members = NodeBitSet::new_with_bits_set(
            self.graph.number_of_nodes(),
            self.graph.largest_component_nodes(),
        );
        let (sub, mapper): (G, NodeMapper) = self.graph.vertex_induced(&members);

        let (labels, attrs) = sub
            .vertices_range()
            .map(|new| {
                let old = mapper.old_id_of(new).unwrap() as usize;
                (self.labels[old].clone(), self.attrs[old].clone())
            })
            .unzip();

        Self {
            graph: sub,
            labels,
            attrs,
        }
    }
}

impl<G: GraphNodeOrder> GraphNodeOrder for AttributedGraph<G> {
    fn number_of_nodes(&self) -> NumNodes {
        self.graph.number_of_nodes()
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.graph.vertices()
    }
}

impl<G: GraphEdgeOrder> GraphEdgeOrder for AttributedGraph<G> {
    fn number_of_edges(&self) -> NumEdges {
        self.graph.number_of_edges()
    }
}

impl<G: AdjacencyList> AdjacencyList for AttributedGraph<G> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.graph.neighbors_of(u)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.graph.degree_of(u)
    }
}

impl<G: AdjacencyTest> AdjacencyTest for AttributedGraph<G> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.graph.has_edge(u, v)
    }
}

/// Aggregates of the numeric values of an attribute
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Census of a single attribute over all nodes of a graph
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSummary {
    /// Attribute name
    pub name: String,
    /// Type of the first non-null value
    pub type_name: &'static str,
    /// Number of nodes carrying the attribute
    pub non_null: NumNodes,
    /// Number of distinct values
    pub unique: NumNodes,
    /// Aggregates over numeric values, if any
    pub numeric: Option<NumericSummary>,
    /// All distinct values for small non-numeric domains
    pub string_values: Option<Vec<String>>,
}

#[cfg(test)]
mod test {
    use super::*;

    fn campus_graph() -> AttributedGraph<AdjArrayUndir> {
        let graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2)]);
        let labels = vec!["a".into(), "b".into(), "c".into(), "d".into()];
        let attrs = (0..4)
            .map(|u| {
                let mut map = AttrMap::default();
                map.insert("dorm".to_string(), AttrValue::Int(100 + u));
                if u < 2 {
                    map.insert("status".to_string(), AttrValue::Str("student".into()));
                }
                map
            })
            .collect();
        AttributedGraph::new(graph, labels, attrs)
    }

    #[test]
    fn attribute_names_are_sorted_and_unique() {
        let graph = campus_graph();
        assert_eq!(graph.attribute_names(), vec!["dorm", "status"]);
    }

    #[test]
    fn numeric_attribute_summary() {
        let graph = campus_graph();
        let summary = graph.attribute_summary("dorm").unwrap();

        assert_eq!(summary.type_name, "int");
        assert_eq!(summary.non_null, 4);
        assert_eq!(summary.unique, 4);

        let numeric = summary.numeric.unwrap();
        assert_eq!(numeric.min, 100.0);
        assert_eq!(numeric.max, 103.0);
        assert_eq!(numeric.mean, 101.5);
        assert!(summary.string_values.is_none());
    }

    #[test]
    fn string_attribute_summary() {
        let graph = campus_graph();
        let summary = graph.attribute_summary("status").unwrap();

        assert_eq!(summary.type_name, "str");
        assert_eq!(summary.non_null, 2);
        assert_eq!(summary.unique, 1);
        assert!(summary.numeric.is_none());
        assert_eq!(summary.string_values.unwrap(), vec!["student"]);
    }

    #[test]
    fn missing_attribute_has_no_summary() {
        assert!(campus_graph().attribute_summary("year").is_none());
    }

    #[test]
    fn largest_component_carries_attributes() {
        let lcc = campus_graph().largest_connected_component();

        assert_eq!(lcc.number_of_nodes(), 3);
        assert_eq!(lcc.number_of_edges(), 2);
        assert_eq!(lcc.label_of(0), "a");
        assert_eq!(lcc.label_of(2), "c");
        assert_eq!(
            lcc.attrs_of(2).get("dorm"),
            Some(&AttrValue::Int(102))
        );
    }
}
