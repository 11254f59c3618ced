//! # Multi-instance Graph Input
//!
//! Reads a batch of independent graph instances from a line-oriented text format:
//!
//! ```text
//! c INSTANCE 1
//! p edge 4 5
//! e 1 2
//! e 1 4
//! 2 3
//! 2,4
//! e 3 4
//! ```
//!
//! - `c ...` is a comment. The last comment before a `p` line names that instance: its first
//!   unsigned integer token, or else its whole text. Without a comment the instance is named
//!   by its 1-based position in the batch.
//! - `p <kind> <n> <m>` opens an instance over vertices `1..=n` declaring `m` edges.
//! - `e <u> <v>`, `<u> <v>` and `<u>,<v>` add an undirected edge to the open instance.
//!
//! Blank lines are skipped. Self-loops and repeated edges are dropped with a warning, as is a
//! mismatch between the declared and actual number of edge lines.

use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::cs::graph::{Graph, Vertex};
use crate::error::{Error, Result};

/// One graph problem from a batch.
#[derive(Clone, Debug)]
pub struct Instance {
    pub id: String,
    /// Declared vertex count from the `p` line.
    pub vertex_count: usize,
    /// Declared edge count from the `p` line.
    pub edge_count: usize,
    pub graph: Graph,
}

/// Reads and parses every instance in the file at `path`.
pub fn read_instances(path: impl AsRef<Path>) -> Result<Vec<Instance>> {
    let path = path.as_ref();
    let input = fs::read_to_string(path)?;
    debug!("read {} bytes from {}", input.len(), path.display());
    parse_instances(&input)
}

/// Parses every instance in `input`.
///
/// # Errors
/// [`Error::Parse`] with the 1-based line number for malformed `p` or edge lines, edges
/// outside any instance, and endpoints outside `1..=n`.
///
/// # Example
/// ```
/// use hamilton::instance::parse_instances;
///
/// let batch = parse_instances("c INSTANCE 7\np edge 3 3\ne 1 2\ne 2 3\ne 3 1\n").unwrap();
/// assert_eq!(batch.len(), 1);
/// assert_eq!(batch[0].id, "7");
/// assert_eq!(batch[0].graph.size(), 3);
/// ```
pub fn parse_instances(input: &str) -> Result<Vec<Instance>> {
    let mut parser = Parser::default();
    for (i, raw) in input.lines().enumerate() {
        parser.line(i + 1, raw.trim())?;
    }
    parser.finish();
    Ok(parser.instances)
}

#[derive(Default)]
struct Parser {
    instances: Vec<Instance>,
    current: Option<Pending>,
    comment: Option<String>,
}

struct Pending {
    instance: Instance,
    edge_lines: usize,
}

impl Parser {
    fn line(&mut self, line: usize, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        match keyword(text) {
            Some(('c', rest)) => {
                self.comment = Some(rest.trim().to_string());
                Ok(())
            }
            Some(('p', rest)) => self.problem(line, rest),
            Some(('e', rest)) => self.edge(line, rest),
            _ => self.edge(line, text),
        }
    }

    fn problem(&mut self, line: usize, rest: &str) -> Result<()> {
        self.finish();
        let fields: Vec<&str> = rest.split_whitespace().collect();
        let (n, m) = match fields.as_slice() {
            [_kind, n, m] => (number(line, n)?, number(line, m)?),
            _ => {
                return Err(Error::parse(
                    line,
                    format!("expected `p <kind> <vertices> <edges>`, found `p{rest}`"),
                ))
            }
        };
        let ordinal = self.instances.len() + 1;
        let id = self
            .comment
            .take()
            .map(|c| instance_id(&c))
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| ordinal.to_string());
        debug!("instance {id}: {n} vertices, {m} edges declared");
        self.current = Some(Pending {
            instance: Instance {
                id,
                vertex_count: n,
                edge_count: m,
                graph: Graph::new(1..=n),
            },
            edge_lines: 0,
        });
        Ok(())
    }

    fn edge(&mut self, line: usize, text: &str) -> Result<()> {
        let Some(pending) = self.current.as_mut() else {
            return Err(Error::parse(line, format!("edge `{text}` before any `p` line")));
        };
        let fields: Vec<&str> = text
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|f| !f.is_empty())
            .collect();
        let (u, v) = match fields.as_slice() {
            [u, v] => (number(line, u)?, number(line, v)?),
            _ => return Err(Error::parse(line, format!("expected an edge `u v`, found `{text}`"))),
        };
        let instance = &mut pending.instance;
        for w in [u, v] {
            if w == 0 || w > instance.vertex_count {
                return Err(Error::parse(
                    line,
                    format!("vertex {w} outside 1..={}", instance.vertex_count),
                ));
            }
        }
        pending.edge_lines += 1;
        if u == v {
            warn!("line {line}: ignoring self-loop on vertex {u}");
        } else if !instance.graph.add_edge(u, v)? {
            warn!("line {line}: ignoring repeated edge {u}-{v}");
        }
        Ok(())
    }

    fn finish(&mut self) {
        if let Some(pending) = self.current.take() {
            let instance = pending.instance;
            if pending.edge_lines != instance.edge_count {
                warn!(
                    "instance {}: declared {} edges, read {}",
                    instance.id, instance.edge_count, pending.edge_lines
                );
            }
            self.instances.push(instance);
        }
    }
}

/// Splits a leading single-letter keyword (`c`, `p`, `e`) from the rest of the line.
fn keyword(text: &str) -> Option<(char, &str)> {
    let mut chars = text.chars();
    let first = chars.next()?;
    let rest = chars.as_str();
    (matches!(first, 'c' | 'p' | 'e') && (rest.is_empty() || rest.starts_with(char::is_whitespace)))
        .then_some((first, rest))
}

fn number(line: usize, field: &str) -> Result<Vertex> {
    field
        .parse()
        .map_err(|_| Error::parse(line, format!("`{field}` is not a non-negative integer")))
}

fn instance_id(comment: &str) -> String {
    comment
        .split_whitespace()
        .find(|token| token.parse::<u64>().is_ok())
        .unwrap_or(comment)
        .to_string()
}
