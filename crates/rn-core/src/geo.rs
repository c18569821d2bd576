//! Geographic coordinate types and spatial utilities.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Edge lengths are truncated to
//! whole metres on output, so single precision would be enough for city-scale
//! distances, but segment lengths are summed during simplification and the
//! error compounds along long chains.

use std::str::FromStr;

use crate::CoreError;

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Uses the mean Earth radius; accurate to about 0.5 % which is well
    /// below the whole-metre truncation applied to edge weights.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        const R: f64 = 6_371_009.0; // mean Earth radius, metres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.7}, {:.7})", self.lat, self.lon)
    }
}

// ── BoundingBox ───────────────────────────────────────────────────────────────

/// Axis-aligned lat/lon rectangle, in the `south, west, north, east` order
/// used by Overpass QL.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub south: f64,
    pub west:  f64,
    pub north: f64,
    pub east:  f64,
}

impl BoundingBox {
    /// Create a bounding box, rejecting inverted or out-of-range edges.
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Result<Self, CoreError> {
        let bbox = Self { south, west, north, east };
        bbox.validate()?;
        Ok(bbox)
    }

    fn validate(&self) -> Result<(), CoreError> {
        let all = [self.south, self.west, self.north, self.east];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(CoreError::InvalidBoundingBox("non-finite coordinate".into()));
        }
        if !(-90.0..=90.0).contains(&self.south) || !(-90.0..=90.0).contains(&self.north) {
            return Err(CoreError::InvalidBoundingBox(format!(
                "latitude out of range: south={} north={}",
                self.south, self.north
            )));
        }
        if !(-180.0..=180.0).contains(&self.west) || !(-180.0..=180.0).contains(&self.east) {
            return Err(CoreError::InvalidBoundingBox(format!(
                "longitude out of range: west={} east={}",
                self.west, self.east
            )));
        }
        if self.south > self.north || self.west > self.east {
            return Err(CoreError::InvalidBoundingBox(format!(
                "inverted box: south={} west={} north={} east={}",
                self.south, self.west, self.north, self.east
            )));
        }
        Ok(())
    }
}

impl FromStr for BoundingBox {
    type Err = CoreError;

    /// Parse `"south,west,north,east"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<f64> = s
            .split(',')
            .map(|p| {
                p.trim()
                    .parse::<f64>()
                    .map_err(|e| CoreError::Parse(format!("bounding box component {p:?}: {e}")))
            })
            .collect::<Result<_, _>>()?;

        let &[south, west, north, east] = parts.as_slice() else {
            return Err(CoreError::InvalidBoundingBox(format!(
                "expected 4 comma-separated values, got {}",
                parts.len()
            )));
        };
        BoundingBox::new(south, west, north, east)
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{},{}", self.south, self.west, self.north, self.east)
    }
}
