//! Node-mapping sidecar: `vertex_id,osm_id,lat,lon`, one row per vertex.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use tracing::info;

use rn_graph::NodeMapping;

use crate::FormatResult;

pub const MAPPING_HEADER: [&str; 4] = ["vertex_id", "osm_id", "lat", "lon"];

/// Write `mapping` as CSV to `out`, rows in vertex order.
pub fn write_mapping<W: Write>(mapping: &NodeMapping, out: W) -> FormatResult<()> {
    let mut w = Writer::from_writer(out);
    w.write_record(MAPPING_HEADER)?;
    for (vertex, osm_id, pos) in mapping.iter() {
        w.write_record(&[
            vertex.0.to_string(),
            osm_id.to_string(),
            pos.lat.to_string(),
            pos.lon.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_mapping_file(mapping: &NodeMapping, path: &Path) -> FormatResult<()> {
    info!(path = %path.display(), rows = mapping.len(), "writing node mapping");
    write_mapping(mapping, File::create(path)?)
}
