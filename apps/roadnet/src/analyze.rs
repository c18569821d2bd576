//! `check`, `paths`, `mst`, and `traverse`: commands that consume an
//! adjacency file.

use std::path::Path;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use memory_stats::memory_stats;

use rn_algo::{breadth_first, depth_first, dijkstra, prim_mst, WeightedGraph};
use rn_core::VertexId;
use rn_io::{read_adjacency_file, validate};

use crate::cli::TraversalOrder;

// ── Memory helper ─────────────────────────────────────────────────────────────

fn mem_kb() -> i64 {
    memory_stats().map(|s| (s.physical_mem / 1024) as i64).unwrap_or(0)
}

fn load(file: &Path) -> Result<WeightedGraph> {
    let adj = read_adjacency_file(file).with_context(|| format!("reading {}", file.display()))?;
    WeightedGraph::from_adjacency(&adj).with_context(|| format!("building graph from {}", file.display()))
}

pub fn check(file: &Path) -> Result<()> {
    let adj = read_adjacency_file(file).with_context(|| format!("reading {}", file.display()))?;
    let report = validate(&adj);
    println!("{}", file.display());
    println!("{report}");
    if !report.is_valid() {
        bail!("{} is not a valid adjacency file", file.display());
    }
    Ok(())
}

pub fn paths(file: &Path, source: u32, target: Option<u32>) -> Result<()> {
    let graph = load(file)?;
    if let Some(t) = target {
        if !graph.contains(VertexId(t)) {
            bail!("target vertex {t} is outside 1..={}", graph.vertex_count());
        }
    }

    let mem_before = mem_kb();
    let start = Instant::now();
    let spt = dijkstra(&graph, VertexId(source))?;
    let elapsed = start.elapsed();
    let mem_after = mem_kb();

    let reached = spt.reached();
    let farthest = spt.dist.iter().flatten().max().copied().unwrap_or(0);
    println!("Shortest-path tree from vertex {source}");
    println!("  reached:  {reached} of {} vertices", graph.vertex_count());
    println!("  farthest: {farthest}");

    if let Some(t) = target {
        let t = VertexId(t);
        match (spt.distance(t), spt.path_to(t)) {
            (Some(d), Some(path)) => {
                let hops: Vec<String> = path.iter().map(|v| v.0.to_string()).collect();
                println!("  to {}: distance {d}, {} hops", t.0, path.len().saturating_sub(1));
                println!("    {}", hops.join(" -> "));
            }
            _ => println!("  to {}: unreachable", t.0),
        }
    }

    println!("\n--- Performance Report ---");
    println!("Execution time: {} ms", elapsed.as_millis());
    println!("Memory used: {} KB", mem_after - mem_before);
    Ok(())
}

pub fn mst(file: &Path, source: u32) -> Result<()> {
    let graph = load(file)?;
    let start = Instant::now();
    let tree = prim_mst(&graph, VertexId(source))?;
    println!("Minimum spanning tree from vertex {source}");
    println!("  vertices:     {} of {}", tree.vertex_count, graph.vertex_count());
    println!("  edges:        {}", tree.edge_count());
    println!("  total weight: {}", tree.total_weight);
    println!("  time:         {} ms", start.elapsed().as_millis());
    Ok(())
}

pub fn traverse(file: &Path, source: u32, order: TraversalOrder, limit: usize) -> Result<()> {
    let graph = load(file)?;
    let visited = match order {
        TraversalOrder::Bfs => breadth_first(&graph, VertexId(source))?,
        TraversalOrder::Dfs => depth_first(&graph, VertexId(source))?,
    };
    let shown: Vec<String> = visited.iter().take(limit).map(|v| v.0.to_string()).collect();
    println!("{order:?} from vertex {source}: {} vertices visited", visited.len());
    println!("  {}", shown.join(" "));
    if visited.len() > limit {
        println!("  ... ({} more)", visited.len() - limit);
    }
    Ok(())
}
