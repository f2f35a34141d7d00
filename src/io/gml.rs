//! # Gml
//!
//! Reader and writer for the Graph-Modelling-Language dialect used by the
//! Facebook100 datasets:
//!
//! ```text
//! graph [
//!   node [
//!     id 1
//!     label "1"
//!     dorm 169
//!   ]
//!   edge [
//!     source 1
//!     target 2
//!   ]
//! ]
//! ```
//!
//! Node ids may be arbitrary (non-contiguous) integers; they are mapped onto
//! dense node ids in declaration order. Scalar node entries other than `id`
//! and `label` become attributes. Unknown keys and nested lists are skipped.
//! A `directed 1` flag is accepted but the graph is materialized undirected.
//! Duplicate edges collapse silently and self-loops are kept.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use fxhash::FxHashMap;
use itertools::Itertools;

use super::*;
use crate::{Edge, Node, NumNodes};

/// A GraphReader for the Gml-Format
#[derive(Debug, Clone, Default)]
pub struct GmlReader;

impl GmlReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self
    }
}

impl<G> GraphReader<AttributedGraph<G>> for GmlReader
where
    G: GraphNew + GraphEdgeEditing + GraphNodeOrder,
{
    fn try_read_graph<R: BufRead>(&self, mut reader: R) -> Result<AttributedGraph<G>> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        GmlParser::new(&input)?.parse_graph()
    }
}

/// Trait for creating graphs from a Gml input.
/// Used as shorthand for default [`GmlReader`] settings.
pub trait GmlRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_gml<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_gml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_gml(BufReader::new(File::open(path)?))
    }
}

impl<G> GmlRead for AttributedGraph<G>
where
    G: GraphNew + GraphEdgeEditing + GraphNodeOrder,
{
    fn try_read_gml<R: BufRead>(reader: R) -> Result<Self> {
        GmlReader::default().try_read_graph(reader)
    }
}

/// A single lexical token of a Gml file
#[derive(Debug, Clone, PartialEq)]
enum Token {
    Key(String),
    Int(i64),
    Float(f64),
    Str(String),
    Open,
    Close,
}

/// Splits the input into `(line, Token)` pairs.
/// Lines are counted from 1; `#` starts a comment until the end of the line.
fn lex(input: &str) -> Result<Vec<(usize, Token)>> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();
    let mut line = 1usize;

    while let Some(&c) = chars.peek() {
        match c {
            '\n' => {
                line += 1;
                chars.next();
            }
            c if c.is_whitespace() => {
                chars.next();
            }
            '#' => {
                while let Some(&c) = chars.peek() {
                    if c == '\n' {
                        break;
                    }
                    chars.next();
                }
            }
            '[' => {
                chars.next();
                tokens.push((line, Token::Open));
            }
            ']' => {
                chars.next();
                tokens.push((line, Token::Close));
            }
            '"' => {
                chars.next();
                let start_line = line;
                let mut value = String::new();
                loop {
                    match chars.next() {
                        None => {
                            return Err(syntax_error!(start_line, "Unterminated string literal."));
                        }
                        Some('"') => break,
                        Some('\n') => {
                            line += 1;
                            value.push('\n');
                        }
                        Some(c) => value.push(c),
                    }
                }
                tokens.push((start_line, Token::Str(value)));
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut key = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_ascii_alphanumeric() || c == '_' {
                        key.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push((line, Token::Key(key)));
            }
            c if c.is_ascii_digit() || matches!(c, '-' | '+' | '.') => {
                let mut number = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E') {
                        number.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let token = if let Ok(x) = number.parse::<i64>() {
                    Token::Int(x)
                } else if let Ok(x) = number.parse::<f64>() {
                    Token::Float(x)
                } else {
                    return Err(syntax_error!(line, "Cannot parse number {number:?}."));
                };
                tokens.push((line, token));
            }
            c => return Err(syntax_error!(line, "Unexpected character {c:?}.")),
        }
    }

    Ok(tokens)
}

/// A node block collected during parsing
struct GmlNode {
    id: i64,
    label: Option<String>,
    attrs: AttrMap,
    line: usize,
}

/// Recursive-descent parser over the token stream
struct GmlParser {
    tokens: Vec<(usize, Token)>,
    pos: usize,
    last_line: usize,
}

impl GmlParser {
    fn new(input: &str) -> Result<Self> {
        Ok(Self {
            tokens: lex(input)?,
            pos: 0,
            last_line: 1,
        })
    }

    fn next(&mut self) -> Option<(usize, Token)> {
        let token = self.tokens.get(self.pos).cloned();
        if let Some((line, _)) = token {
            self.last_line = line;
            self.pos += 1;
        }
        token
    }

    /// Consumes the next token or fails naming the unterminated context
    fn next_in(&mut self, context: &str) -> Result<(usize, Token)> {
        let last_line = self.last_line;
        match self.next() {
            Some(token) => Ok(token),
            None => Err(syntax_error!(last_line, "Unexpected end of {context}.")),
        }
    }

    fn expect_open(&mut self, context: &str) -> Result<()> {
        let (line, token) = self.next_in(context)?;
        raise_error_unless!(token == Token::Open, line, "Expected '[' to start {context}.");
        Ok(())
    }

    /// Skips a scalar value or a nested `[ ... ]` list
    fn skip_value(&mut self, key_line: usize, key: &str) -> Result<()> {
        let (line, token) = self.next_in("input")?;
        match token {
            Token::Int(_) | Token::Float(_) | Token::Str(_) => Ok(()),
            Token::Open => self.skip_list(line),
            _ => Err(syntax_error!(key_line, "Key {key:?} has no value.")),
        }
    }

    /// Skips the remainder of a `[ ... ]` list, including nested lists
    fn skip_list(&mut self, open_line: usize) -> Result<()> {
        let mut depth = 1usize;
        while depth > 0 {
            match self.next() {
                None => return Err(syntax_error!(open_line, "Unterminated list.")),
                Some((_, Token::Open)) => depth += 1,
                Some((_, Token::Close)) => depth -= 1,
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Parses the top level of the file: key-value pairs (Creator, Version,
    /// ...) of which exactly the `graph [ ... ]` list is interpreted.
    fn parse_graph<G>(mut self) -> Result<AttributedGraph<G>>
    where
        G: GraphNew + GraphEdgeEditing + GraphNodeOrder,
    {
        loop {
            let last_line = self.last_line;
            match self.next() {
                None => return Err(syntax_error!(last_line, "No 'graph [' block found.")),
                Some((line, Token::Key(key))) => {
                    if key == "graph" {
                        self.expect_open("the graph block")?;
                        return self.parse_graph_body();
                    }
                    self.skip_value(line, &key)?;
                }
                Some((line, _)) => {
                    return Err(syntax_error!(line, "Expected a key at the top level."));
                }
            }
        }
    }

    fn parse_graph_body<G>(&mut self) -> Result<AttributedGraph<G>>
    where
        G: GraphNew + GraphEdgeEditing + GraphNodeOrder,
    {
        let mut nodes: Vec<GmlNode> = Vec::new();
        let mut edges: Vec<(i64, i64, usize)> = Vec::new();

        loop {
            let (line, token) = self.next_in("the graph block")?;
            match token {
                Token::Close => break,
                Token::Key(key) => match key.as_str() {
                    "node" => nodes.push(self.parse_node(line)?),
                    "edge" => edges.push(self.parse_edge(line)?),
                    _ => self.skip_value(line, &key)?,
                },
                _ => {
                    return Err(syntax_error!(line, "Expected a key or ']' in the graph block."));
                }
            }
        }

        let n = nodes.len() as NumNodes;

        let mut id_map: FxHashMap<i64, Node> = FxHashMap::default();
        id_map.reserve(nodes.len());
        for (new_id, node) in nodes.iter().enumerate() {
            raise_error_unless!(
                id_map.insert(node.id, new_id as Node).is_none(),
                node.line,
                "Duplicate node id {}.",
                node.id
            );
        }

        let mut graph = G::new(n);
        for (source, target, line) in edges {
            let u = id_map.get(&source);
            raise_error_unless!(u.is_some(), line, "Edge source {source} is not a declared node.");
            let v = id_map.get(&target);
            raise_error_unless!(v.is_some(), line, "Edge target {target} is not a declared node.");

            // duplicate edges collapse, self-loops pass through
            graph.try_add_edge(*u.unwrap(), *v.unwrap());
        }

        let (labels, attrs) = nodes
            .into_iter()
            .map(|node| {
                let label = node.label.unwrap_or_else(|| node.id.to_string());
                (label, node.attrs)
            })
            .unzip();

        Ok(AttributedGraph::new(graph, labels, attrs))
    }

    fn parse_node(&mut self, block_line: usize) -> Result<GmlNode> {
        self.expect_open("a node block")?;

        let mut id: Option<i64> = None;
        let mut label: Option<String> = None;
        let mut attrs = AttrMap::default();

        loop {
            let (line, token) = self.next_in("a node block")?;
            match token {
                Token::Close => break,
                Token::Key(key) => {
                    let (value_line, value) = self.next_in("a node block")?;
                    if key == "id" {
                        match value {
                            Token::Int(x) => id = Some(x),
                            _ => {
                                return Err(syntax_error!(
                                    value_line,
                                    "Node id must be an integer."
                                ));
                            }
                        }
                    } else if key == "label" {
                        label = Some(match value {
                            Token::Str(s) => s,
                            Token::Int(x) => x.to_string(),
                            Token::Float(x) => format!("{x:?}"),
                            _ => {
                                return Err(syntax_error!(
                                    value_line,
                                    "Node label must be a scalar."
                                ));
                            }
                        });
                    } else {
                        match value {
                            Token::Int(x) => {
                                attrs.insert(key, AttrValue::Int(x));
                            }
                            Token::Float(x) => {
                                attrs.insert(key, AttrValue::Float(x));
                            }
                            Token::Str(s) => {
                                attrs.insert(key, AttrValue::Str(s));
                            }
                            Token::Open => self.skip_list(value_line)?,
                            _ => {
                                return Err(syntax_error!(line, "Key {key:?} has no value."));
                            }
                        }
                    }
                }
                _ => {
                    return Err(syntax_error!(line, "Expected a key or ']' in a node block."));
                }
            }
        }

        raise_error_unless!(id.is_some(), block_line, "Node block without an id.");

        Ok(GmlNode {
            id: id.unwrap(),
            label,
            attrs,
            line: block_line,
        })
    }

    fn parse_edge(&mut self, block_line: usize) -> Result<(i64, i64, usize)> {
        self.expect_open("an edge block")?;

        let mut source: Option<i64> = None;
        let mut target: Option<i64> = None;

        loop {
            let (line, token) = self.next_in("an edge block")?;
            match token {
                Token::Close => break,
                Token::Key(key) => {
                    let (value_line, value) = self.next_in("an edge block")?;
                    match (key.as_str(), value) {
                        ("source", Token::Int(x)) => source = Some(x),
                        ("target", Token::Int(x)) => target = Some(x),
                        ("source" | "target", _) => {
                            return Err(syntax_error!(
                                value_line,
                                "Edge endpoints must be integers."
                            ));
                        }
                        // extra edge entries (weights, ...) are ignored
                        (_, Token::Int(_) | Token::Float(_) | Token::Str(_)) => {}
                        (_, Token::Open) => self.skip_list(value_line)?,
                        (_, _) => {
                            return Err(syntax_error!(line, "Key {key:?} has no value."));
                        }
                    }
                }
                _ => {
                    return Err(syntax_error!(line, "Expected a key or ']' in an edge block."));
                }
            }
        }

        raise_error_unless!(source.is_some(), block_line, "Edge block without a source.");
        raise_error_unless!(target.is_some(), block_line, "Edge block without a target.");

        Ok((source.unwrap(), target.unwrap(), block_line))
    }
}

/// A writer for the Gml-Format
#[derive(Debug, Clone, Default)]
pub struct GmlWriter;

impl GmlWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }
}

impl<G: AdjacencyList> GraphWriter<AttributedGraph<G>> for GmlWriter {
    fn try_write_graph<W: Write>(&self, graph: &AttributedGraph<G>, mut writer: W) -> Result<()> {
        writeln!(writer, "graph [")?;
        writeln!(writer, "  directed 0")?;

        for u in graph.vertices() {
            writeln!(writer, "  node [")?;
            writeln!(writer, "    id {u}")?;
            writeln!(writer, "    label \"{}\"", graph.label_of(u))?;
            for (key, value) in graph.attrs_of(u).iter().sorted_by(|a, b| a.0.cmp(b.0)) {
                match value {
                    AttrValue::Str(s) => writeln!(writer, "    {key} \"{s}\"")?,
                    scalar => writeln!(writer, "    {key} {scalar}")?,
                }
            }
            writeln!(writer, "  ]")?;
        }

        for Edge(u, v) in graph.edges(true) {
            writeln!(writer, "  edge [")?;
            writeln!(writer, "    source {u}")?;
            writeln!(writer, "    target {v}")?;
            writeln!(writer, "  ]")?;
        }

        writeln!(writer, "]")?;
        Ok(())
    }
}

/// Trait for writing a graph to a writer in the Gml-Format.
/// Shorthand for default settings.
pub trait GmlWrite {
    /// Tries to write the graph to a writer
    fn try_write_gml<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_gml_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.try_write_gml(BufWriter::new(File::create(path)?))
    }
}

impl<G: AdjacencyList> GmlWrite for AttributedGraph<G> {
    fn try_write_gml<W: Write>(&self, writer: W) -> Result<()> {
        GmlWriter::default().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::repr::AdjArrayUndir;

    fn read(input: &str) -> Result<AttributedGraph<AdjArrayUndir>> {
        AttributedGraph::try_read_gml(input.as_bytes())
    }

    const CAMPUS: &str = r#"
Creator "sngraphs test"
graph [
  directed 0
  node [
    id 10
    label "alice"
    dorm 169
    year 2006
  ]
  node [
    id 20
    label "bob"
    dorm 170
    gpa 3.5
  ]
  node [
    id 30
  ]
  edge [
    source 10
    target 20
  ]
  edge [
    source 20
    target 30
    weight 2
  ]
]
"#;

    #[test]
    fn parses_nodes_edges_and_attributes() {
        let graph = read(CAMPUS).unwrap();

        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.number_of_edges(), 2);

        assert_eq!(graph.label_of(0), "alice");
        assert_eq!(graph.label_of(1), "bob");
        // missing label falls back to the file id
        assert_eq!(graph.label_of(2), "30");

        assert_eq!(graph.attrs_of(0).get("dorm"), Some(&AttrValue::Int(169)));
        assert_eq!(graph.attrs_of(1).get("gpa"), Some(&AttrValue::Float(3.5)));
        assert!(graph.attrs_of(2).is_empty());

        assert!(graph.graph().has_edge(0, 1));
        assert!(graph.graph().has_edge(1, 2));
        assert!(!graph.graph().has_edge(0, 2));
    }

    #[test]
    fn duplicate_edges_collapse_and_loops_survive() {
        let graph = read(
            "graph [
               node [ id 1 ]
               node [ id 2 ]
               edge [ source 1 target 2 ]
               edge [ source 2 target 1 ]
               edge [ source 1 target 1 ]
             ]",
        )
        .unwrap();

        assert_eq!(graph.number_of_edges(), 2);
        assert!(graph.graph().has_self_loop(0));
    }

    #[test]
    fn unknown_keys_and_nested_lists_are_skipped() {
        let graph = read(
            "graph [
               comment \"hi there\"
               meta [ origin [ x 1 ] y 2 ]
               node [ id 1 pos [ x 0.5 y 0.5 ] ]
               node [ id 2 ]
               edge [ source 1 target 2 ]
             ]",
        )
        .unwrap();

        assert_eq!(graph.number_of_nodes(), 2);
        assert_eq!(graph.number_of_edges(), 1);
        assert!(graph.attrs_of(0).is_empty());
    }

    #[test]
    fn directed_flag_is_folded_to_undirected() {
        let graph = read(
            "graph [
               directed 1
               node [ id 1 ]
               node [ id 2 ]
               edge [ source 2 target 1 ]
             ]",
        )
        .unwrap();

        assert!(graph.graph().has_edge(0, 1));
        assert!(graph.graph().has_edge(1, 0));
    }

    #[test]
    fn error_on_duplicate_node_id() {
        let err = read("graph [ node [ id 1 ] node [ id 1 ] ]").unwrap_err();
        assert!(matches!(err, ParseError::Syntax { .. }));
    }

    #[test]
    fn error_on_undeclared_edge_endpoint() {
        let err = read(
            "graph [
               node [ id 1 ]
               edge [ source 1 target 99 ]
             ]",
        )
        .unwrap_err();

        match err {
            ParseError::Syntax { line, msg } => {
                assert_eq!(line, 3);
                assert!(msg.contains("99"));
            }
            _ => panic!("expected syntax error"),
        }
    }

    #[test]
    fn error_on_missing_node_id() {
        let err = read("graph [ node [ label \"x\" ] ]").unwrap_err();
        assert!(matches!(err, ParseError::Syntax { .. }));
    }

    #[test]
    fn error_on_unterminated_input() {
        assert!(read("graph [ node [ id 1 ]").is_err());
        assert!(read("graph [ node [ id 1 label \"x ] ]").is_err());
        assert!(read("no graph here 1").is_err());
    }

    #[test]
    fn file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("campus.gml");

        let graph = read(CAMPUS).unwrap();
        graph.try_write_gml_file(&path).unwrap();
        let copy = AttributedGraph::<AdjArrayUndir>::try_read_gml_file(&path).unwrap();

        assert_eq!(copy.number_of_nodes(), graph.number_of_nodes());
        assert_eq!(copy.ordered_edges(true), graph.ordered_edges(true));
    }

    #[test]
    fn written_graphs_can_be_read_back() {
        let graph = read(CAMPUS).unwrap();

        let mut buffer = Vec::new();
        graph.try_write_gml(&mut buffer).unwrap();
        let copy = read(std::str::from_utf8(&buffer).unwrap()).unwrap();

        assert_eq!(copy.number_of_nodes(), graph.number_of_nodes());
        assert_eq!(copy.number_of_edges(), graph.number_of_edges());
        assert_eq!(copy.label_of(1), "bob");
        assert_eq!(copy.attrs_of(1).get("gpa"), Some(&AttrValue::Float(3.5)));
    }
}
