//! Structural checks on a parsed adjacency file.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::adjacency::AdjacencyFile;

/// Result of [`validate`].  A file is valid when the header's `E` matches
/// the edge lines, every endpoint lies in `1..=V`, and the edge set is simple
/// (no self-loops, no repeated unordered pair).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub vertex_count:      u32,
    pub declared_edges:    usize,
    pub edge_lines:        usize,
    /// 0-based indices of edges with an endpoint outside `1..=V`.
    pub out_of_range:      Vec<usize>,
    pub self_loops:        usize,
    pub duplicate_edges:   usize,
    /// Vertices in `1..=V` that no edge touches.
    pub isolated_vertices: usize,
    pub total_weight:      u64,
}

impl ValidationReport {
    pub fn edge_count_matches(&self) -> bool {
        self.declared_edges == self.edge_lines
    }

    pub fn is_valid(&self) -> bool {
        self.edge_count_matches()
            && self.out_of_range.is_empty()
            && self.self_loops == 0
            && self.duplicate_edges == 0
    }
}

pub fn validate(file: &AdjacencyFile) -> ValidationReport {
    let v_max = file.vertex_count;
    let mut touched: FxHashSet<u32> = FxHashSet::default();
    let mut pairs: FxHashSet<(u32, u32)> = FxHashSet::default();

    let mut report = ValidationReport {
        vertex_count:   v_max,
        declared_edges: file.declared_edges,
        edge_lines:     file.edges.len(),
        ..Default::default()
    };

    for (i, rec) in file.edges.iter().enumerate() {
        let (u, v) = (rec.u.0, rec.v.0);
        report.total_weight = report.total_weight.saturating_add(rec.weight);

        if !(1..=v_max).contains(&u) || !(1..=v_max).contains(&v) {
            report.out_of_range.push(i);
            continue;
        }
        touched.insert(u);
        touched.insert(v);

        if u == v {
            report.self_loops += 1;
        } else if !pairs.insert((u.min(v), u.max(v))) {
            report.duplicate_edges += 1;
        }
    }

    report.isolated_vertices = v_max as usize - touched.len();
    report
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "vertices:          {}", self.vertex_count)?;
        writeln!(f, "edges (header):    {}", self.declared_edges)?;
        writeln!(f, "edges (lines):     {}", self.edge_lines)?;
        writeln!(f, "out of range:      {}", self.out_of_range.len())?;
        writeln!(f, "self-loops:        {}", self.self_loops)?;
        writeln!(f, "duplicate edges:   {}", self.duplicate_edges)?;
        writeln!(f, "isolated vertices: {}", self.isolated_vertices)?;
        writeln!(f, "total weight:      {}", self.total_weight)?;
        write!(f, "status:            {}", if self.is_valid() { "OK" } else { "INVALID" })
    }
}
