use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use rn_core::{BoundingBox, NetworkType};
use rn_graph::CollapsePolicy;

use crate::config::ExportSettings;

/// Top-level CLI for the road-network exporter.
#[derive(Debug, Parser)]
#[command(name = "roadnet", version)]
#[command(about = "Export OpenStreetMap road networks as weighted adjacency lists", long_about = None)]
pub struct Cli {
    /// TOML settings file; command-line flags override its values.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Debug-level logging (RUST_LOG still takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch, normalize, relabel, and write a road network.
    Export(ExportArgs),

    /// Parse an adjacency file and report whether it is well formed.
    Check {
        file: PathBuf,
    },

    /// Single-source shortest paths (Dijkstra) with a performance report.
    Paths {
        file: PathBuf,

        /// Start vertex, in 1..=V.
        #[arg(short, long)]
        source: u32,

        /// Also print the path to this vertex.
        #[arg(short, long)]
        target: Option<u32>,
    },

    /// Minimum spanning tree (Prim) of the start vertex's component.
    Mst {
        file: PathBuf,

        #[arg(short, long)]
        source: u32,
    },

    /// Breadth- or depth-first visit order.
    Traverse {
        file: PathBuf,

        #[arg(short, long)]
        source: u32,

        #[arg(long, value_enum, default_value_t = TraversalOrder::Bfs)]
        order: TraversalOrder,

        /// Print at most this many vertices.
        #[arg(long, default_value_t = 50)]
        limit: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TraversalOrder {
    Bfs,
    Dfs,
}

/// Where the road network comes from.  At most one may be given; with none,
/// the configured place name is geocoded.
#[derive(Debug, Default, Args)]
#[group(multiple = false)]
pub struct SourceArgs {
    /// Place name resolved through Nominatim.
    #[arg(long)]
    pub place: Option<String>,

    /// Bounding box `south,west,north,east` in decimal degrees.
    #[arg(long, value_name = "S,W,N,E", allow_hyphen_values = true)]
    pub bbox: Option<BoundingBox>,

    /// Saved Overpass JSON response; no network access.
    #[arg(long, value_name = "FILE")]
    pub overpass_json: Option<PathBuf>,

    /// OSM PBF extract (requires the `pbf` feature).
    #[arg(long, value_name = "FILE")]
    pub pbf: Option<PathBuf>,
}

#[derive(Debug, Default, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// drive, drive_service, walk, bike, or all.
    #[arg(long, value_name = "TYPE")]
    pub network_type: Option<NetworkType>,

    /// Adjacency file to write.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also write a `vertex_id,osm_id,lat,lon` CSV.
    #[arg(long, value_name = "FILE")]
    pub mapping: Option<PathBuf>,

    /// Keep interstitial nodes.
    #[arg(long)]
    pub no_simplify: bool,

    /// Also keep nodes where two OSM ways meet mid-road.
    #[arg(long, conflicts_with = "no_simplify")]
    pub strict_simplify: bool,

    /// Keep every connected component, not just the largest.
    #[arg(long)]
    pub all_components: bool,

    /// Which length survives when edges collapse: shortest, first, or last.
    #[arg(long, value_name = "POLICY")]
    pub collapse: Option<CollapsePolicy>,

    /// Keep self-loop edges.
    #[arg(long)]
    pub keep_self_loops: bool,

    /// Cache Overpass responses in this directory.
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,
}

impl ExportArgs {
    /// Overlay the flags that were given onto `settings`.
    pub fn apply(&self, settings: &mut ExportSettings) {
        if let Some(place) = &self.source.place {
            settings.place = place.clone();
        }
        if let Some(nt) = self.network_type {
            settings.network_type = nt;
        }
        if let Some(out) = &self.output {
            settings.output = out.clone();
        }
        if let Some(map) = &self.mapping {
            settings.mapping = Some(map.clone());
        }
        if let Some(policy) = self.collapse {
            settings.collapse = policy;
        }
        if self.no_simplify {
            settings.simplify = false;
        }
        if self.strict_simplify {
            settings.strict_simplify = true;
        }
        if self.all_components {
            settings.largest_component = false;
        }
        if self.keep_self_loops {
            settings.keep_self_loops = true;
        }
    }
}
