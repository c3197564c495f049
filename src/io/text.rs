//! # Text
//!
//! Line-oriented graph description:
//! - blank lines and lines starting (after leading whitespace) with the comment identifier are skipped,
//! - the first remaining line is the name of the graph,
//! - a line containing `--` is an edge `NAME1 -- NAME2 [WEIGHT]`; the `--` may touch the names,
//! - any other line declares the vertex named by its first token.
//!
//! Vertices are numbered in order of first appearance, whether declared or seen as an endpoint.
//! Malformed lines are skipped with a warning, or rejected when the reader is [strict](TextReader::strict).

use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Lines, Result},
    path::Path,
    str::FromStr,
};

use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use super::*;

/// Separator between the two endpoints of an edge line
pub const EDGE_SEPARATOR: &str = "--";

/// A GraphReader for the text format
#[derive(Debug, Clone)]
pub struct TextReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
    /// Reject malformed lines instead of skipping them
    strict: bool,
    /// Names are truncated to this many characters
    max_name_len: usize,
    /// Labels are truncated to this many characters
    max_label_len: usize,
}

impl Default for TextReader {
    fn default() -> Self {
        Self {
            comment_identifier: "//".to_string(),
            strict: false,
            max_name_len: 2047,
            max_label_len: 255,
        }
    }
}

impl TextReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier; an empty identifier disables comments
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> TextReader {
        self.comment_identifier = c.into();
        self
    }

    /// In strict mode, edge lines with fewer than two names, invalid weights or trailing tokens
    /// and vertex lines with more than one token are errors of kind [`ErrorKind::InvalidData`].
    pub fn strict(mut self, strict: bool) -> TextReader {
        self.strict = strict;
        self
    }

    /// Updates the maximum number of characters kept of the graph name
    pub fn max_name_len(mut self, len: usize) -> TextReader {
        self.max_name_len = len;
        self
    }

    /// Updates the maximum number of characters kept of each vertex label
    pub fn max_label_len(mut self, len: usize) -> TextReader {
        self.max_label_len = len;
        self
    }
}

impl GraphReader<LabelledGraph> for TextReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<LabelledGraph> {
        let mut lines = ContentLines::new(reader, &self.comment_identifier);

        let (_, name) = lines
            .next_content_line()?
            .ok_or(io_error!(ErrorKind::NotFound, "Graph name not found"))?;
        let mut builder =
            LabelledGraphBuilder::new(truncated(name.trim_end_matches('\r'), self.max_name_len));

        while let Some((number, line)) = lines.next_content_line()? {
            if let Err(err) = self.parse_line(&mut builder, &line) {
                raise_error_unless!(
                    !self.strict,
                    err.kind(),
                    format!("Line {number}: {err}")
                );
                warn!(line = number, "Skipping malformed line: {err}");
            }
        }

        let graph = builder.build();
        debug!(
            name = graph.name(),
            nodes = graph.number_of_nodes(),
            edges = graph.number_of_edges(),
            "Finished reading graph"
        );
        Ok(graph)
    }
}

impl TextReader {
    fn parse_line(&self, builder: &mut LabelledGraphBuilder, line: &str) -> Result<()> {
        match line.split_once(EDGE_SEPARATOR) {
            Some((left, right)) => self.parse_edge_line(builder, left, right),
            None => self.parse_vertex_line(builder, line),
        }
    }

    fn parse_edge_line(
        &self,
        builder: &mut LabelledGraphBuilder,
        left: &str,
        right: &str,
    ) -> Result<()> {
        let mut tokens = left
            .split_whitespace()
            .chain(right.split_whitespace())
            .collect::<SmallVec<[&str; 4]>>()
            .into_iter();

        let (Some(a), Some(b)) = (tokens.next(), tokens.next()) else {
            return Err(io_error!(
                ErrorKind::InvalidData,
                "Edge line requires two vertex names"
            ));
        };

        let weight = if self.strict {
            if tokens.len() > 0 {
                let weight: Weight = parse_next_value!(tokens, "edge weight");
                raise_error_unless!(
                    tokens.len() == 0,
                    ErrorKind::InvalidData,
                    "Unexpected tokens after edge weight"
                );
                Some(weight)
            } else {
                None
            }
        } else {
            tokens.next().and_then(|w| match w.parse() {
                Ok(w) => Some(w),
                Err(_) => {
                    warn!("Ignoring invalid edge weight {w:?}");
                    None
                }
            })
        };

        let a = truncated(a, self.max_label_len);
        let b = truncated(b, self.max_label_len);
        let id = builder.add_labelled_edge(a, b, weight);
        trace!(id, a, b, weight = effective_weight(weight), "Added edge");

        Ok(())
    }

    fn parse_vertex_line(&self, builder: &mut LabelledGraphBuilder, line: &str) -> Result<()> {
        let mut tokens = line.split_whitespace();

        // blank lines never get here
        let Some(label) = tokens.next() else {
            return Ok(());
        };
        raise_error_unless!(
            !self.strict || tokens.next().is_none(),
            ErrorKind::InvalidData,
            "Vertex line must consist of a single name"
        );

        let u = builder.add_node(truncated(label, self.max_label_len));
        trace!(u, label, "Declared vertex");

        Ok(())
    }
}

/// Trait for creating graphs from the text format.
/// Used as shorthand for default TextReader settings
pub trait TextRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_text<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_text_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_text(BufReader::new(File::open(path)?))
    }
}

impl TextRead for LabelledGraph {
    fn try_read_text<R: BufRead>(reader: R) -> Result<Self> {
        TextReader::default().try_read_graph(reader)
    }
}

impl FromStr for LabelledGraph {
    type Err = std::io::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_read_text(s.as_bytes())
    }
}

/// Iterates over the non-blank, non-comment lines of a reader together with their 1-based line number
struct ContentLines<'a, R> {
    lines: Lines<R>,
    number: usize,
    comment_identifier: &'a str,
}

impl<'a, R: BufRead> ContentLines<'a, R> {
    fn new(reader: R, comment_identifier: &'a str) -> Self {
        Self {
            lines: reader.lines(),
            number: 0,
            comment_identifier,
        }
    }

    /// Returns the next content line if it exists or propagate an error
    fn next_content_line(&mut self) -> Result<Option<(usize, String)>> {
        for line in self.lines.by_ref() {
            let line = line?;
            self.number += 1;

            let content = line.trim_start();
            if content.is_empty()
                || (!self.comment_identifier.is_empty()
                    && content.starts_with(self.comment_identifier))
            {
                continue;
            }

            return Ok(Some((self.number, line)));
        }

        Ok(None)
    }
}

/// Returns the prefix of `s` with at most `max_chars` characters
fn truncated(s: &str, max_chars: usize) -> &str {
    s.char_indices()
        .nth(max_chars)
        .map_or(s, |(end, _)| &s[..end])
}
