//! Travel-mode filter applied when acquiring a road network.
//!
//! The variant decides which OSM ways are kept and whether one-way tags are
//! honoured.  The concrete tag filters live in `rn-osm`; this crate only
//! carries the enum so configuration and CLI layers can name it.

use std::str::FromStr;

use crate::CoreError;

/// Which subset of the OSM road network to acquire.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NetworkType {
    /// Public drivable streets, excluding service roads.
    #[default]
    Drive,
    /// Drivable streets including service roads.
    DriveService,
    /// Everything pedestrians may use.
    Walk,
    /// Everything cyclists may use.
    Bike,
    /// Every non-private `highway=*` way.
    All,
}

impl NetworkType {
    pub const ALL: [NetworkType; 5] = [
        NetworkType::Drive,
        NetworkType::DriveService,
        NetworkType::Walk,
        NetworkType::Bike,
        NetworkType::All,
    ];

    /// `true` for modes where `oneway=*` restricts travel direction.
    /// Only pedestrians may walk against it.
    #[inline]
    pub fn respects_oneway(self) -> bool {
        !matches!(self, NetworkType::Walk)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NetworkType::Drive        => "drive",
            NetworkType::DriveService => "drive_service",
            NetworkType::Walk         => "walk",
            NetworkType::Bike         => "bike",
            NetworkType::All          => "all",
        }
    }
}

impl FromStr for NetworkType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NetworkType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownNetworkType(s.to_owned()))
    }
}

impl std::fmt::Display for NetworkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
