//! Way filters per network type, and one-way interpretation.
//!
//! Each [`NetworkType`] maps to a list of tag rules.  The same table renders
//! the Overpass QL selector (`["highway"]["area"!~"yes"]…`) and evaluates
//! ways locally for offline sources, so both acquisition paths keep exactly
//! the same ways.
//!
//! Overpass `!~` is an **unanchored** regex match: `"motor"` rejects
//! `motorway`, `"no"` rejects any value containing `no`.  [`WayFilter::accepts`]
//! reproduces that with substring matching.

use rn_core::NetworkType;

/// `key` must be absent, or its value must not contain any of `excluded`.
struct TagRule {
    key:      &'static str,
    excluded: &'static [&'static str],
}

const AREA: TagRule = TagRule { key: "area", excluded: &["yes"] };
const ACCESS: TagRule = TagRule { key: "access", excluded: &["private"] };

const DRIVE: &[TagRule] = &[
    AREA,
    ACCESS,
    TagRule {
        key: "highway",
        excluded: &[
            "abandoned", "bridleway", "bus_guideway", "construction", "corridor", "cycleway",
            "elevator", "escalator", "footway", "no", "path", "pedestrian", "planned",
            "platform", "proposed", "raceway", "razed", "service", "steps", "track",
        ],
    },
    TagRule { key: "motor_vehicle", excluded: &["no"] },
    TagRule { key: "motorcar", excluded: &["no"] },
    TagRule {
        key: "service",
        excluded: &["alley", "driveway", "emergency_access", "parking", "parking_aisle", "private"],
    },
];

const DRIVE_SERVICE: &[TagRule] = &[
    AREA,
    ACCESS,
    TagRule {
        key: "highway",
        excluded: &[
            "abandoned", "bridleway", "bus_guideway", "construction", "corridor", "cycleway",
            "elevator", "escalator", "footway", "no", "path", "pedestrian", "planned",
            "platform", "proposed", "raceway", "razed", "steps", "track",
        ],
    },
    TagRule { key: "motor_vehicle", excluded: &["no"] },
    TagRule { key: "motorcar", excluded: &["no"] },
    TagRule {
        key: "service",
        excluded: &["emergency_access", "parking", "parking_aisle", "private"],
    },
];

const WALK: &[TagRule] = &[
    AREA,
    ACCESS,
    TagRule {
        key: "highway",
        excluded: &[
            "abandoned", "bus_guideway", "construction", "cycleway", "motor", "no", "planned",
            "platform", "proposed", "raceway", "razed",
        ],
    },
    TagRule { key: "foot", excluded: &["no"] },
    TagRule { key: "service", excluded: &["private"] },
];

const BIKE: &[TagRule] = &[
    AREA,
    ACCESS,
    TagRule {
        key: "highway",
        excluded: &[
            "abandoned", "bus_guideway", "construction", "corridor", "elevator", "escalator",
            "footway", "motor", "no", "planned", "platform", "proposed", "raceway", "razed",
            "steps",
        ],
    },
    TagRule { key: "bicycle", excluded: &["no"] },
    TagRule { key: "service", excluded: &["private"] },
];

const ALL: &[TagRule] = &[
    AREA,
    ACCESS,
    TagRule {
        key: "highway",
        excluded: &["abandoned", "construction", "no", "planned", "platform", "proposed", "raceway", "razed"],
    },
    TagRule { key: "service", excluded: &["private"] },
];

// ── WayFilter ─────────────────────────────────────────────────────────────────

/// Tag predicate selecting the ways of one network type.
#[derive(Copy, Clone)]
pub struct WayFilter {
    rules: &'static [TagRule],
}

impl WayFilter {
    pub fn for_network(network_type: NetworkType) -> Self {
        let rules = match network_type {
            NetworkType::Drive        => DRIVE,
            NetworkType::DriveService => DRIVE_SERVICE,
            NetworkType::Walk         => WALK,
            NetworkType::Bike         => BIKE,
            NetworkType::All          => ALL,
        };
        Self { rules }
    }

    /// Overpass QL tag selector, e.g. `["highway"]["area"!~"yes"]…`.
    pub fn overpass_selector(&self) -> String {
        let mut out = String::from(r#"["highway"]"#);
        for rule in self.rules {
            out.push_str(&format!(r#"["{}"!~"{}"]"#, rule.key, rule.excluded.join("|")));
        }
        out
    }

    /// Evaluate the filter against a way's tags.  `tag(key)` returns the
    /// value of `key`, if present.
    pub fn accepts<'t>(&self, tag: impl Fn(&str) -> Option<&'t str>) -> bool {
        if tag("highway").is_none() {
            return false;
        }
        self.rules.iter().all(|rule| match tag(rule.key) {
            Some(value) => !rule.excluded.iter().any(|pat| value.contains(pat)),
            None => true,
        })
    }
}

// ── One-way handling ──────────────────────────────────────────────────────────

/// Travel direction permitted along a way's node sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Both,
    /// Only in node order.
    Forward,
    /// Only against node order (`oneway=-1|reverse|T`).
    Reverse,
}

/// Interpret `oneway` / `junction` tags for `network_type`.
///
/// Walking networks are always bidirectional.  Otherwise `oneway` values
/// `yes|true|1|F` mean forward and `-1|reverse|T` mean reverse, the same
/// reading osmnx applies.  Any `junction=roundabout` is forward, whatever
/// its `oneway` tag says.
pub fn direction<'t>(network_type: NetworkType, tag: impl Fn(&str) -> Option<&'t str>) -> Direction {
    if !network_type.respects_oneway() {
        return Direction::Both;
    }
    match tag("oneway") {
        Some("-1" | "reverse" | "T")     => Direction::Reverse,
        Some("yes" | "true" | "1" | "F") => Direction::Forward,
        _ if tag("junction") == Some("roundabout") => Direction::Forward,
        _ => Direction::Both,
    }
}
