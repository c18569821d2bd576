//! On-disk cache of Overpass responses.
//!
//! Files are named `<hash>.json`, where `<hash>` is the FxHash of the query
//! text.  A changed network type, area or timeout produces a different query
//! and therefore a different file.  Entries never expire; delete the
//! directory to refresh.

use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use rustc_hash::FxHasher;
use tracing::{debug, info};

use crate::OsmResult;

pub struct ResponseCache {
    dir: PathBuf,
}

impl ResponseCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Cache file for `query`.
    pub fn path_for(&self, query: &str) -> PathBuf {
        let mut h = FxHasher::default();
        query.hash(&mut h);
        self.dir.join(format!("{:016x}.json", h.finish()))
    }

    /// Cached body for `query`, if present.
    pub fn get(&self, query: &str) -> OsmResult<Option<String>> {
        let path = self.path_for(query);
        if !path.exists() {
            debug!(path = %path.display(), "response cache miss");
            return Ok(None);
        }
        info!(path = %path.display(), "using cached Overpass response");
        Ok(Some(fs::read_to_string(path)?))
    }

    pub fn put(&self, query: &str, body: &str) -> OsmResult<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(query);
        fs::write(&path, body)?;
        info!(path = %path.display(), "saved Overpass response to cache");
        Ok(())
    }
}
