//! The export pipeline: acquire → [simplify] → normalize → [largest
//! component] → relabel → write.
//!
//! Nothing is written until every earlier stage has succeeded, so a failed
//! download or an unknown place leaves no output file behind.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use rn_graph::{largest_component, normalize, relabel, simplify};
use rn_io::{write_adjacency_file, write_mapping_file};
use rn_osm::{OverpassFileSource, OverpassSource, PlaceQuery, RoadSource};

use crate::cli::SourceArgs;
use crate::config::{ExportSettings, ProviderSettings};

#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub raw_nodes:    usize,
    pub raw_edges:    usize,
    pub vertex_count: u32,
    pub edge_count:   usize,
    pub output:       PathBuf,
    pub mapping:      Option<PathBuf>,
}

/// Pick the road source from the command line, falling back to geocoding
/// the configured place.
pub fn select_source(
    args:     &SourceArgs,
    settings: &ExportSettings,
    provider: &ProviderSettings,
) -> Result<Box<dyn RoadSource>> {
    if let Some(path) = &args.overpass_json {
        return Ok(Box::new(OverpassFileSource::new(path)));
    }
    if let Some(path) = &args.pbf {
        return pbf_source(path);
    }
    let query = match args.bbox {
        Some(b) => PlaceQuery::BoundingBox(b),
        None    => PlaceQuery::Place(settings.place.clone()),
    };
    let source = OverpassSource::new(query, provider.acquire_options())
        .context("building HTTP client")?;
    Ok(Box::new(source))
}

#[cfg(feature = "pbf")]
fn pbf_source(path: &std::path::Path) -> Result<Box<dyn RoadSource>> {
    Ok(Box::new(rn_osm::PbfSource::new(path)))
}

#[cfg(not(feature = "pbf"))]
fn pbf_source(path: &std::path::Path) -> Result<Box<dyn RoadSource>> {
    anyhow::bail!(
        "cannot read {}: roadnet was built without PBF support (rebuild with `--features pbf`)",
        path.display()
    )
}

/// Run every stage, reporting each through `progress`.
pub fn run_export(
    source:   &dyn RoadSource,
    settings: &ExportSettings,
    progress: &mut dyn FnMut(&str),
) -> Result<ExportSummary> {
    let start = Instant::now();
    let opts = settings.normalize_options();

    // ── Acquire ───────────────────────────────────────────────────────────
    progress(&format!("Downloading road network from {}...", source.describe()));
    let mut raw = source
        .load(settings.network_type)
        .with_context(|| format!("acquiring {} network from {}", settings.network_type, source.describe()))?;
    info!(nodes = raw.node_count(), edges = raw.edge_count(), "acquired");
    let (raw_nodes, raw_edges) = (raw.node_count(), raw.edge_count());

    if settings.simplify {
        progress("Simplifying topology...");
        raw = simplify(&raw, settings.simplify_options());
    }

    // ── Normalize ─────────────────────────────────────────────────────────
    progress("Converting to undirected graph...");
    let mut graph = normalize(&raw, opts);
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        isolated = graph.isolated_node_count(),
        "normalized"
    );

    if settings.largest_component {
        progress("Keeping the largest connected component...");
        graph = largest_component(&graph);
    }

    // ── Relabel ───────────────────────────────────────────────────────────
    progress("Relabeling nodes...");
    let (relabeled, mapping) = relabel(&graph).context("relabeling nodes")?;

    // ── Write ─────────────────────────────────────────────────────────────
    progress(&format!("Writing to {}...", settings.output.display()));
    write_adjacency_file(&relabeled, &settings.output)
        .with_context(|| format!("writing {}", settings.output.display()))?;

    if let Some(path) = &settings.mapping {
        progress(&format!("Writing node mapping to {}...", path.display()));
        write_mapping_file(&mapping, path).with_context(|| format!("writing {}", path.display()))?;
    }

    info!(
        vertices = relabeled.vertex_count,
        edges = relabeled.edge_count(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "export complete"
    );
    progress(&format!("Done! File saved as {}", settings.output.display()));

    Ok(ExportSummary {
        raw_nodes,
        raw_edges,
        vertex_count: relabeled.vertex_count,
        edge_count:   relabeled.edge_count(),
        output:       settings.output.clone(),
        mapping:      settings.mapping.clone(),
    })
}
