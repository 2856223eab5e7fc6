use crate::graph::MAX_VERTICES;
use crate::prelude::*;
use fnv::FnvHashSet;
use log::{info, warn};
use memmap::Mmap;
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

pub(crate) enum InputError {
    Io(io::Error),
    Encoding,
    MissingHeader,
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    BadNumber {
        line: usize,
        field: &'static str,
        text: String,
    },
    VertexOutOfRange {
        line: usize,
        vertex: u32,
        num_vertices: u32,
    },
    MissingEdges {
        expected: usize,
        found: usize,
    },
    TooManyVertices {
        line: usize,
        num_vertices: u32,
    },
}

impl InputError {
    pub(crate) fn is_os_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

impl From<io::Error> for InputError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(error) => write!(f, "failed to read input: {}", error),
            Self::Encoding => write!(f, "input is not UTF-8"),
            Self::MissingHeader => {
                write!(f, "missing header line with vertex and edge counts")
            }
            Self::FieldCount {
                line,
                expected,
                found,
            } => write!(
                f,
                "line {}: expected {} fields, found {}",
                line, expected, found
            ),
            Self::BadNumber { line, field, text } => write!(
                f,
                "line {}: {} '{}' is not a non-negative integer",
                line, field, text
            ),
            Self::VertexOutOfRange {
                line,
                vertex,
                num_vertices,
            } => write!(
                f,
                "line {}: vertex {} is outside 1..={}",
                line, vertex, num_vertices
            ),
            Self::MissingEdges { expected, found } => write!(
                f,
                "expected {} edges, found {}",
                expected, found
            ),
            Self::TooManyVertices { line, num_vertices } => write!(
                f,
                "line {}: cannot hold {} vertices, at most {} are supported",
                line, num_vertices, MAX_VERTICES
            ),
        }
    }
}

impl fmt::Debug for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

fn number(
    line: usize,
    field: &'static str,
    text: &str,
) -> Result<u32, InputError> {
    text.parse().map_err(|_| InputError::BadNumber {
        line,
        field,
        text: text.to_string(),
    })
}

fn fields<'a>(
    line: usize,
    text: &'a str,
    expected: usize,
) -> Result<Vec<&'a str>, InputError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != expected {
        return Err(InputError::FieldCount {
            line,
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}

fn vertex(
    line: usize,
    text: &str,
    num_vertices: u32,
) -> Result<Id<Vertex>, InputError> {
    let vertex = number(line, "vertex", text)?;
    Id::checked(vertex)
        .filter(|_| vertex <= num_vertices)
        .ok_or(InputError::VertexOutOfRange {
            line,
            vertex,
            num_vertices,
        })
}

/// Parse a header line `V E` followed by `E` lines `u v w`.
///
/// Blank lines are skipped anywhere. Self-loops, parallel edges and lines
/// after the last edge are accepted with a warning.
pub(crate) fn parse(bytes: &[u8]) -> Result<Graph, InputError> {
    let text = std::str::from_utf8(bytes).map_err(|_| InputError::Encoding)?;
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let (line, header) = lines.next().ok_or(InputError::MissingHeader)?;
    let header = fields(line, header, 2)?;
    let num_vertices = number(line, "vertex count", header[0])?;
    let num_edges = number(line, "edge count", header[1])? as usize;
    info!("reading {} vertices and {} edges", num_vertices, num_edges);

    let mut graph = Graph::try_new(num_vertices)
        .ok_or(InputError::TooManyVertices { line, num_vertices })?;
    let mut seen = FnvHashSet::default();
    for (line, text) in lines.by_ref().take(num_edges) {
        let edge = fields(line, text, 3)?;
        let u = vertex(line, edge[0], num_vertices)?;
        let v = vertex(line, edge[1], num_vertices)?;
        let weight = number(line, "weight", edge[2])?;
        let edge = Edge::new(u, v, weight);
        if u == v {
            warn!("line {}: self-loop on vertex {}", line, u);
        } else if !seen.insert(edge.endpoints()) {
            warn!("line {}: parallel edge {}--{}", line, u, v);
        }
        graph.connect(edge);
    }

    if graph.num_edges() < num_edges {
        return Err(InputError::MissingEdges {
            expected: num_edges,
            found: graph.num_edges(),
        });
    }
    if let Some((line, _)) = lines.next() {
        warn!("ignoring input from line {} after the last edge", line);
    }
    Ok(graph)
}

fn load_file(path: &Path) -> Result<Graph, InputError> {
    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return parse(b"");
    }
    // the mapping is read-only and does not outlive `file`
    let map = unsafe { Mmap::map(&file)? };
    parse(&map)
}

fn load_stdin() -> Result<Graph, InputError> {
    let mut buffer = vec![];
    io::stdin().read_to_end(&mut buffer)?;
    parse(&buffer)
}

/// Read a graph from `path`, or from stdin if there is none.
pub(crate) fn load_graph(path: Option<&Path>) -> Result<Graph, InputError> {
    match path {
        Some(path) => load_file(path),
        None => load_stdin(),
    }
}
