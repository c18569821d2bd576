//! The plain-text adjacency format.
//!
//! ```text
//! <V> <E>
//! <u> <v> <weight>      ← E lines, vertices in 1..=V
//! ```
//!
//! ASCII, single spaces, every record `\n`-terminated, no quoting.  Edge
//! lines appear in the relabeled graph's edge order.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use rn_core::VertexId;
use rn_graph::RelabeledGraph;

use crate::{FormatError, FormatResult};

// ── Writer ────────────────────────────────────────────────────────────────────

/// Write `graph` in adjacency format to `out`.
pub fn write_adjacency<W: Write>(graph: &RelabeledGraph, out: W) -> FormatResult<()> {
    let mut out = BufWriter::new(out);
    writeln!(out, "{} {}", graph.vertex_count, graph.edge_count())?;
    for e in &graph.edges {
        writeln!(out, "{} {} {}", e.u.0, e.v.0, e.weight())?;
    }
    out.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write `graph` to it.
///
/// The file is written in place; a failure part-way through leaves a
/// truncated file behind.
pub fn write_adjacency_file(graph: &RelabeledGraph, path: &Path) -> FormatResult<()> {
    info!(
        path = %path.display(),
        vertices = graph.vertex_count,
        edges = graph.edge_count(),
        "writing adjacency file"
    );
    let file = File::create(path)?;
    write_adjacency(graph, file)
}

// ── Reader ────────────────────────────────────────────────────────────────────

/// One `u v weight` line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyRecord {
    pub u:      VertexId,
    pub v:      VertexId,
    pub weight: u64,
}

/// A parsed adjacency file.
///
/// Parsing checks syntax only.  Whether the header agrees with the records
/// is the job of [`crate::validate`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyFile {
    /// `V` from the header.
    pub vertex_count:   u32,
    /// `E` from the header.
    pub declared_edges: usize,
    pub edges:          Vec<AdjacencyRecord>,
}

impl AdjacencyFile {
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Parse adjacency text from `input`.  Blank lines are ignored.
pub fn read_adjacency<R: BufRead>(input: R) -> FormatResult<AdjacencyFile> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, l)| l.map(|l| (i + 1, l)))
        .filter(|r| !matches!(r, Ok((_, l)) if l.trim().is_empty()));

    let (line_no, header) = lines.next().transpose()?.ok_or(FormatError::MissingHeader)?;
    let (vertex_count, declared_edges) = match fields(&header).as_slice() {
        &[v, e] => (
            parse_field::<u32>(v, line_no, &header, "invalid vertex count")?,
            parse_field::<usize>(e, line_no, &header, "invalid edge count")?,
        ),
        _ => return Err(syntax(line_no, "header must be `V E`", &header)),
    };

    let mut edges = Vec::with_capacity(declared_edges.min(1 << 24));
    for item in lines {
        let (line_no, line) = item?;
        let record = match fields(&line).as_slice() {
            &[u, v, w] => AdjacencyRecord {
                u:      VertexId(parse_field(u, line_no, &line, "invalid vertex id")?),
                v:      VertexId(parse_field(v, line_no, &line, "invalid vertex id")?),
                weight: parse_field(w, line_no, &line, "invalid weight")?,
            },
            _ => return Err(syntax(line_no, "edge line must be `u v weight`", &line)),
        };
        edges.push(record);
    }

    debug!(vertices = vertex_count, declared_edges, edges = edges.len(), "parsed adjacency file");
    Ok(AdjacencyFile { vertex_count, declared_edges, edges })
}

pub fn read_adjacency_file(path: &Path) -> FormatResult<AdjacencyFile> {
    info!(path = %path.display(), "reading adjacency file");
    read_adjacency(BufReader::new(File::open(path)?))
}

fn fields(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

fn parse_field<T: std::str::FromStr>(
    field:  &str,
    line:   usize,
    text:   &str,
    reason: &'static str,
) -> FormatResult<T> {
    field.parse().map_err(|_| syntax(line, reason, text))
}

fn syntax(line: usize, reason: &'static str, content: &str) -> FormatError {
    FormatError::Syntax { line, reason, content: content.to_owned() }
}
