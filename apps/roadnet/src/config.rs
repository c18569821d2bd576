//! `roadnet.toml`: optional settings file.  Every key has a default, so an
//! empty file (or none at all) reproduces the stock NYC export.
//!
//! ```toml
//! [export]
//! place        = "Boston, Massachusetts, USA"
//! network_type = "walk"
//! output       = "boston_walk.txt"
//! collapse     = "first"
//!
//! [provider]
//! cache_dir    = ".overpass-cache"
//! timeout_secs = 300
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use rn_core::NetworkType;
use rn_graph::{CollapsePolicy, NormalizeOptions, SimplifyOptions};
use rn_osm::{AcquireOptions, HttpOptions, NOMINATIM_URL, OVERPASS_URL};

pub const DEFAULT_PLACE: &str = "New York City, New York, USA";
pub const DEFAULT_OUTPUT: &str = "nyc_road_network.txt";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoadnetConfig {
    pub export:   ExportSettings,
    pub provider: ProviderSettings,
}

/// What to export and how to transform it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportSettings {
    pub place:             String,
    pub network_type:      NetworkType,
    pub output:            PathBuf,
    /// Write the `vertex_id,osm_id,lat,lon` sidecar here.
    pub mapping:           Option<PathBuf>,
    pub simplify:          bool,
    /// Treat OSM way boundaries as endpoints during simplification.
    pub strict_simplify:   bool,
    pub largest_component: bool,
    pub collapse:          CollapsePolicy,
    pub keep_self_loops:   bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            place:             DEFAULT_PLACE.to_owned(),
            network_type:      NetworkType::Drive,
            output:            PathBuf::from(DEFAULT_OUTPUT),
            mapping:           None,
            simplify:          true,
            strict_simplify:   false,
            largest_component: true,
            collapse:          CollapsePolicy::Shortest,
            keep_self_loops:   false,
        }
    }
}

impl ExportSettings {
    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions { collapse: self.collapse, keep_self_loops: self.keep_self_loops }
    }

    pub fn simplify_options(&self) -> SimplifyOptions {
        SimplifyOptions { strict: self.strict_simplify }
    }
}

/// Provider endpoints and HTTP behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProviderSettings {
    pub overpass_url:  String,
    pub nominatim_url: String,
    pub user_agent:    Option<String>,
    pub timeout_secs:  u64,
    pub cache_dir:     Option<PathBuf>,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            overpass_url:  OVERPASS_URL.to_owned(),
            nominatim_url: NOMINATIM_URL.to_owned(),
            user_agent:    None,
            timeout_secs:  180,
            cache_dir:     None,
        }
    }
}

impl ProviderSettings {
    pub fn acquire_options(&self) -> AcquireOptions {
        let mut http = HttpOptions { timeout: Duration::from_secs(self.timeout_secs), ..HttpOptions::default() };
        if let Some(ua) = &self.user_agent {
            http.user_agent = ua.clone();
        }
        AcquireOptions {
            overpass_url:  self.overpass_url.clone(),
            nominatim_url: self.nominatim_url.clone(),
            http,
            timeout_s:     self.timeout_secs,
            cache_dir:     self.cache_dir.clone(),
        }
    }
}

/// Load `path`, or the defaults when no file was given.
pub fn load(path: Option<&Path>) -> Result<RoadnetConfig> {
    let Some(path) = path else {
        return Ok(RoadnetConfig::default());
    };
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let cfg: RoadnetConfig = toml::from_str(&data)
        .with_context(|| format!("parsing config file {}", path.display()))?;
    tracing::debug!("loaded config from {}: {:?}", path.display(), cfg);
    Ok(cfg)
}
