//! # EdgeList
//!
//! The EdgeList-Format consists of one edge per non-comment-line, given as two
//! whitespace-separated node tokens `u v`. There is no header: node ids are
//! arbitrary tokens that are discovered on the fly and mapped onto dense node
//! ids in first-seen order (social-network snapshots ship their edges with
//! sparse numeric ids). Additional tokens on a line (weights, timestamps, ...)
//! are ignored.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use fxhash::FxHashMap;

use super::*;
use crate::{Edge, Node, NumNodes};

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }
}

impl<G> GraphReader<AttributedGraph<G>> for EdgeListReader
where
    G: GraphNew + GraphEdgeEditing + GraphNodeOrder,
{
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<AttributedGraph<G>> {
        let mut ids: FxHashMap<String, Node> = FxHashMap::default();
        let mut labels: Vec<String> = Vec::new();
        let mut edges: Vec<Edge> = Vec::new();

        let mut resolve = |token: &str, labels: &mut Vec<String>| -> Node {
            *ids.entry(token.to_string()).or_insert_with(|| {
                labels.push(token.to_string());
                (labels.len() - 1) as Node
            })
        };

        for (line_idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = line_idx + 1;

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(&self.comment_identifier) {
                continue;
            }

            let mut parts = trimmed.split_whitespace();
            let from = parts.next();
            raise_error_unless!(from.is_some(), line_no, "Missing source node token.");
            let dest = parts.next();
            raise_error_unless!(dest.is_some(), line_no, "Missing target node token.");

            let u = resolve(from.unwrap(), &mut labels);
            let v = resolve(dest.unwrap(), &mut labels);
            edges.push(Edge(u, v));
        }

        let mut graph = G::new(labels.len() as NumNodes);
        for Edge(u, v) in edges {
            // duplicate edges collapse, self-loops pass through
            graph.try_add_edge(u, v);
        }

        let attrs = vec![AttrMap::default(); labels.len()];
        Ok(AttributedGraph::new(graph, labels, attrs))
    }
}

/// Trait for creating graphs from an EdgeList input.
/// Used as shorthand for default [`EdgeListReader`] settings.
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> EdgeListRead for AttributedGraph<G>
where
    G: GraphNew + GraphEdgeEditing + GraphNodeOrder,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}
