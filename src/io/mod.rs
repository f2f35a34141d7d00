/*!
# IO

Utilities for reading and writing social-network graphs from and to different
file formats.

## Input Formats

Currently supported input formats:
- **Gml**: The Graph-Modelling-Language dialect used by the Facebook100
  datasets: a `graph [ ... ]` list containing `node [ ... ]` blocks with ids
  and attribute scalars, and `edge [ ... ]` blocks with source/target ids.
- **EdgeList**: One edge per line as two whitespace-separated node tokens with
  `#`-comments (the dialect social-network snapshots usually ship in). There
  is no header; node ids are discovered on the fly.

Both readers produce an [`AttributedGraph`] and map the (possibly sparse) file
ids onto dense node ids in declaration order.

## Output Formats

For writing graphs, the **Gml** format is supported.

## Traits

To generalize over reading/writing:
- [`GraphReader`] and [`GraphWriter`] are implemented by readers and writers
  for a specific format.
- [`GraphRead`] abstracts over reading using a given [`FileFormat`].
*/

pub mod edge_list;
pub mod gml;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
    str::FromStr,
};

use thiserror::Error;

use crate::{ops::*, repr::*};

pub use edge_list::*;
pub use gml::*;

/// Errors raised when a graph file cannot be decoded.
///
/// A `ParseError` is fatal for the file at hand only; batch callers are
/// expected to report it and continue with the next file.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The file could not be read at all
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The file contents violate the expected format
    #[error("line {line}: {msg}")]
    Syntax { line: usize, msg: String },
    /// The requested file format is not known
    #[error("unknown file format: {0}")]
    UnknownFormat(String),
}

/// Result type of all reading/writing operations in this crate
pub type Result<T> = std::result::Result<T, ParseError>;

/// Identifier for a graph file format.
///
/// Used in [`GraphRead`] to determine the correct parser to use.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// Graph-Modelling-Language
    Gml,
    /// Edge list format
    EdgeList,
}

impl FromStr for FileFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "gml" => Ok(FileFormat::Gml),
            "edgelist" => Ok(FileFormat::EdgeList),
            _ => Err(ParseError::UnknownFormat(s.to_string())),
        }
    }
}

impl FileFormat {
    /// Guesses the format from the file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "gml" => Some(FileFormat::Gml),
            "txt" | "edges" | "el" => Some(FileFormat::EdgeList),
            _ => None,
        }
    }
}

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
///
/// Typically implemented by specific readers (e.g., [`GmlReader`],
/// [`EdgeListReader`]).
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered reader.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Trait for reading graphs when only a [`FileFormat`] is known.
///
/// Provides a unified interface to construct graphs from readers
/// or files by dispatching to the correct format-specific parser.
pub trait GraphRead: Sized {
    /// Reads a graph from the given reader according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if the input does not match the expected format.
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead;

    /// Reads a graph from the given file according to the specified [`FileFormat`].
    ///
    /// Internally wraps the file in a buffered reader.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if the input
    /// is invalid for the chosen format.
    fn try_from_file<P>(path: P, format: FileFormat) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::try_from_reader(BufReader::new(File::open(path)?), format)
    }
}

impl<G> GraphRead for AttributedGraph<G>
where
    G: GraphNew + GraphEdgeEditing + GraphNodeOrder,
{
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead,
    {
        match format {
            FileFormat::Gml => GmlReader::default().try_read_graph(reader),
            FileFormat::EdgeList => EdgeListReader::default().try_read_graph(reader),
        }
    }
}

/// Shorthand for creating a new syntax error at a given input line
macro_rules! syntax_error {
    ($line:expr, $($arg:tt)*) => {
        ParseError::Syntax {
            line: $line,
            msg: format!($($arg)*),
        }
    };
}

/// Shorthand for returning `Err(ParseError)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond:expr, $line:expr, $($arg:tt)*) => {
        if !($cond) {
            return Err(syntax_error!($line, $($arg)*));
        }
    };
}

use raise_error_unless;
use syntax_error;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn file_format_from_str() {
        assert_eq!("gml".parse::<FileFormat>().unwrap(), FileFormat::Gml);
        assert_eq!("GML".parse::<FileFormat>().unwrap(), FileFormat::Gml);
        assert_eq!(
            "edgelist".parse::<FileFormat>().unwrap(),
            FileFormat::EdgeList
        );
        assert!(matches!(
            "dot".parse::<FileFormat>(),
            Err(ParseError::UnknownFormat(_))
        ));
    }

    #[test]
    fn file_format_from_path() {
        assert_eq!(FileFormat::from_path("a/b/caltech.gml"), Some(FileFormat::Gml));
        assert_eq!(FileFormat::from_path("links.txt"), Some(FileFormat::EdgeList));
        assert_eq!(FileFormat::from_path("graph.edges"), Some(FileFormat::EdgeList));
        assert_eq!(FileFormat::from_path("README.md"), None);
        assert_eq!(FileFormat::from_path("no_extension"), None);
    }
}
