//! Unit tests for rn-osm.
//!
//! Nothing here touches the network: provider responses are inline JSON.

#[cfg(test)]
mod fixtures {
    /// Four drivable ways and one footway around six nodes.
    ///
    /// ```text
    ///   way 10  residential      1 ─ 2 ─ 3      two-way
    ///   way 11  primary oneway   3 → 4
    ///   way 12  footway          4 ─ 5
    ///   way 13  tertiary  -1     2 ← 4          (drawn 2 → 4, travelled 4 → 2)
    ///   node 6 is not referenced by any way
    /// ```
    pub const OVERPASS_SMALL: &str = r#"{
      "version": 0.6,
      "elements": [
        {"type": "node", "id": 1, "lat": 40.000, "lon": -74.0},
        {"type": "node", "id": 2, "lat": 40.001, "lon": -74.0},
        {"type": "node", "id": 3, "lat": 40.002, "lon": -74.0},
        {"type": "node", "id": 4, "lat": 40.003, "lon": -74.0},
        {"type": "node", "id": 5, "lat": 40.004, "lon": -74.0},
        {"type": "node", "id": 6, "lat": 40.005, "lon": -74.0},
        {"type": "way", "id": 10, "nodes": [1, 2, 3], "tags": {"highway": "residential"}},
        {"type": "way", "id": 11, "nodes": [3, 4], "tags": {"highway": "primary", "oneway": "yes"}},
        {"type": "way", "id": 12, "nodes": [4, 5], "tags": {"highway": "footway"}},
        {"type": "way", "id": 13, "nodes": [2, 4], "tags": {"highway": "tertiary", "oneway": "-1"}},
        {"type": "relation", "id": 99, "members": []}
      ]
    }"#;

    pub const FOOTWAYS_ONLY: &str = r#"{
      "elements": [
        {"type": "node", "id": 1, "lat": 40.000, "lon": -74.0},
        {"type": "node", "id": 2, "lat": 40.001, "lon": -74.0},
        {"type": "way", "id": 10, "nodes": [1, 2], "tags": {"highway": "footway"}}
      ]
    }"#;

    pub fn tags<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<&'a str> + Copy + 'a {
        move |key: &str| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }
}

// ── Way filters ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod filter {
    use rn_core::NetworkType;

    use super::fixtures::tags;
    use crate::{direction, Direction, WayFilter};

    fn accepts(nt: NetworkType, pairs: &[(&str, &str)]) -> bool {
        WayFilter::for_network(nt).accepts(tags(pairs))
    }

    #[test]
    fn drive_keeps_ordinary_roads() {
        for hw in ["motorway", "trunk", "primary", "secondary", "residential", "unclassified"] {
            assert!(accepts(NetworkType::Drive, &[("highway", hw)]), "{hw}");
        }
    }

    #[test]
    fn drive_rejects_paths_and_service_roads() {
        for hw in ["footway", "cycleway", "steps", "track", "service", "construction"] {
            assert!(!accepts(NetworkType::Drive, &[("highway", hw)]), "{hw}");
        }
    }

    #[test]
    fn ways_without_highway_are_rejected() {
        for nt in NetworkType::ALL {
            assert!(!accepts(nt, &[("railway", "rail")]));
        }
    }

    #[test]
    fn private_access_and_areas_are_rejected_everywhere() {
        for nt in NetworkType::ALL {
            assert!(!accepts(nt, &[("highway", "residential"), ("access", "private")]));
            assert!(!accepts(nt, &[("highway", "pedestrian"), ("area", "yes")]));
        }
    }

    #[test]
    fn drive_service_keeps_service_roads_but_not_parking() {
        assert!(accepts(NetworkType::DriveService, &[("highway", "service")]));
        assert!(accepts(NetworkType::DriveService, &[("highway", "service"), ("service", "driveway")]));
        assert!(!accepts(NetworkType::DriveService, &[("highway", "service"), ("service", "parking_aisle")]));
    }

    #[test]
    fn walk_rejects_motorways_and_foot_no() {
        assert!(accepts(NetworkType::Walk, &[("highway", "footway")]));
        assert!(!accepts(NetworkType::Walk, &[("highway", "motorway_link")]));
        assert!(!accepts(NetworkType::Walk, &[("highway", "primary"), ("foot", "no")]));
    }

    #[test]
    fn bike_rejects_footways_and_bicycle_no() {
        assert!(accepts(NetworkType::Bike, &[("highway", "cycleway")]));
        assert!(!accepts(NetworkType::Bike, &[("highway", "footway")]));
        assert!(!accepts(NetworkType::Bike, &[("highway", "residential"), ("bicycle", "no")]));
    }

    #[test]
    fn selector_renders_every_rule() {
        let sel = WayFilter::for_network(NetworkType::Drive).overpass_selector();
        assert!(sel.starts_with(r#"["highway"]["area"!~"yes"]["access"!~"private"]"#));
        assert!(sel.contains(r#"["motorcar"!~"no"]"#));
        assert!(sel.contains("footway"));
    }

    #[test]
    fn oneway_values() {
        let d = |pairs: &[(&str, &str)]| direction(NetworkType::Drive, tags(pairs));
        assert_eq!(d(&[("oneway", "yes")]), Direction::Forward);
        assert_eq!(d(&[("oneway", "1")]), Direction::Forward);
        assert_eq!(d(&[("oneway", "-1")]), Direction::Reverse);
        assert_eq!(d(&[("oneway", "reverse")]), Direction::Reverse);
        assert_eq!(d(&[("oneway", "no")]), Direction::Both);
        assert_eq!(d(&[]), Direction::Both);
    }

    #[test]
    fn single_letter_oneway_values() {
        let d = |pairs: &[(&str, &str)]| direction(NetworkType::Drive, tags(pairs));
        assert_eq!(d(&[("oneway", "T")]), Direction::Reverse);
        assert_eq!(d(&[("oneway", "F")]), Direction::Forward);
    }

    #[test]
    fn roundabouts_are_always_oneway() {
        let d = |pairs: &[(&str, &str)]| direction(NetworkType::Drive, tags(pairs));
        assert_eq!(d(&[("junction", "roundabout")]), Direction::Forward);
        assert_eq!(d(&[("junction", "roundabout"), ("oneway", "no")]), Direction::Forward);
        assert_eq!(d(&[("junction", "roundabout"), ("oneway", "-1")]), Direction::Reverse);
    }

    #[test]
    fn walking_is_always_bidirectional() {
        let pairs = [("oneway", "yes")];
        assert_eq!(direction(NetworkType::Walk, tags(&pairs)), Direction::Both);
        assert_eq!(direction(NetworkType::Bike, tags(&pairs)), Direction::Forward);
    }
}

// ── Query generation ──────────────────────────────────────────────────────────

#[cfg(test)]
mod query {
    use rn_core::{BoundingBox, NetworkType};

    use crate::{overpass_query, PlaceQuery, SearchArea};

    #[test]
    fn area_ids_are_offset() {
        assert_eq!(SearchArea::from_relation(175_905), SearchArea::Area(3_600_175_905));
        assert_eq!(SearchArea::from_way(42), SearchArea::Area(2_400_000_042));
    }

    #[test]
    fn area_query_shape() {
        let q = overpass_query(SearchArea::from_relation(175_905), NetworkType::Drive, 180);
        assert!(q.starts_with("[out:json][timeout:180];"));
        assert!(q.contains("area(3600175905)->.searchArea;"));
        assert!(q.contains(r#"(way["highway"]"#));
        assert!(q.contains("(area.searchArea);"));
        assert!(q.contains("(._;>;);"));
        assert!(q.trim_end().ends_with("out body;"));
    }

    #[test]
    fn bbox_query_uses_south_west_north_east() {
        let b = BoundingBox::new(40.7, -74.1, 40.8, -73.9).unwrap();
        let q = overpass_query(SearchArea::BoundingBox(b), NetworkType::Walk, 60);
        assert!(q.contains("[timeout:60]"));
        assert!(q.contains("(40.7,-74.1,40.8,-73.9);"));
        assert!(!q.contains("searchArea"));
    }

    #[test]
    fn queries_differ_by_network_type() {
        let area = SearchArea::Area(1);
        assert_ne!(
            overpass_query(area, NetworkType::Drive, 180),
            overpass_query(area, NetworkType::Walk, 180)
        );
    }

    #[test]
    fn place_query_display() {
        assert_eq!(PlaceQuery::Place("Paris".into()).to_string(), "\"Paris\"");
        let b = BoundingBox::new(1.0, 2.0, 3.0, 4.0).unwrap();
        assert_eq!(PlaceQuery::BoundingBox(b).to_string(), "bbox(1,2,3,4)");
    }
}

// ── Nominatim responses ───────────────────────────────────────────────────────

#[cfg(test)]
mod nominatim {
    use crate::{parse_search_response, OsmError, PlaceKind, SearchArea};

    #[test]
    fn relation_hit_is_preferred() {
        let body = r#"[
          {"osm_type": "node", "osm_id": 1, "display_name": "NYC (node)",
           "boundingbox": ["40.6", "40.8", "-74.1", "-73.9"]},
          {"osm_type": "relation", "osm_id": 175905, "display_name": "City of New York",
           "boundingbox": ["40.4774", "40.9176", "-74.2591", "-73.7004"]}
        ]"#;
        let place = parse_search_response(body, "New York City").unwrap();
        assert_eq!(place.kind, PlaceKind::Relation);
        assert_eq!(place.display_name, "City of New York");
        assert_eq!(place.search_area().unwrap(), SearchArea::Area(3_600_175_905));
    }

    #[test]
    fn way_hit_becomes_way_area() {
        let body = r#"[{"osm_type": "way", "osm_id": 7, "display_name": "Park"}]"#;
        let place = parse_search_response(body, "Park").unwrap();
        assert_eq!(place.search_area().unwrap(), SearchArea::Area(2_400_000_007));
    }

    #[test]
    fn node_hit_falls_back_to_bounding_box() {
        let body = r#"[{"osm_type": "node", "osm_id": 1, "display_name": "Somewhere",
                        "boundingbox": ["40.6", "40.8", "-74.1", "-73.9"]}]"#;
        let place = parse_search_response(body, "Somewhere").unwrap();
        let SearchArea::BoundingBox(b) = place.search_area().unwrap() else {
            panic!("expected a bounding box");
        };
        assert_eq!((b.south, b.west, b.north, b.east), (40.6, -74.1, 40.8, -73.9));
    }

    #[test]
    fn node_hit_without_box_is_malformed() {
        let body = r#"[{"osm_type": "node", "osm_id": 1, "display_name": "Dot"}]"#;
        let place = parse_search_response(body, "Dot").unwrap();
        assert!(matches!(place.search_area(), Err(OsmError::Malformed(_))));
    }

    #[test]
    fn empty_result_is_place_not_found() {
        let err = parse_search_response("[]", "Atlantis").unwrap_err();
        assert!(matches!(err, OsmError::PlaceNotFound(ref p) if p == "Atlantis"));
    }

    #[test]
    fn garbage_is_a_json_error() {
        assert!(matches!(parse_search_response("<html>", "x"), Err(OsmError::Json(_))));
    }
}

// ── Overpass responses → RawNetwork ───────────────────────────────────────────

#[cfg(test)]
mod overpass {
    use rn_core::{NetworkType, OsmNodeId};

    use super::fixtures::OVERPASS_SMALL;
    use crate::{build_network, parse_response, OsmError};

    fn has_edge(net: &rn_graph::RawNetwork, a: i64, b: i64) -> bool {
        let (Some(a), Some(b)) = (net.node_of(OsmNodeId(a)), net.node_of(OsmNodeId(b))) else {
            return false;
        };
        net.edges().any(|(f, t, _)| f == a && t == b)
    }

    #[test]
    fn drive_network_from_small_response() {
        let resp = parse_response(OVERPASS_SMALL).unwrap();
        let net = build_network(&resp, NetworkType::Drive).unwrap();

        // Node 5 only lies on the footway; node 6 on nothing.
        let ids: Vec<i64> = net.node_osm_id.iter().map(|id| id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        // 1–2 and 2–3 both ways, 3→4, 4→2.
        assert_eq!(net.edge_count(), 6);
        assert!(has_edge(&net, 3, 4));
        assert!(!has_edge(&net, 4, 3));
        assert!(has_edge(&net, 4, 2));
        assert!(!has_edge(&net, 2, 4));
    }

    #[test]
    fn walk_network_ignores_oneway_and_keeps_footway() {
        let resp = parse_response(OVERPASS_SMALL).unwrap();
        let net = build_network(&resp, NetworkType::Walk).unwrap();
        assert_eq!(net.node_count(), 5);
        assert_eq!(net.edge_count(), 10);
        assert!(has_edge(&net, 4, 3));
        assert!(has_edge(&net, 5, 4));
    }

    #[test]
    fn segment_lengths_are_measured() {
        let resp = parse_response(OVERPASS_SMALL).unwrap();
        let net = build_network(&resp, NetworkType::Drive).unwrap();
        // 0.001° of latitude ≈ 111.2 m.
        for len in &net.edge_length_m {
            let len = len.unwrap();
            assert!((len - 111.2).abs() < 0.5 || (len - 222.4).abs() < 1.0, "{len}");
        }
    }

    #[test]
    fn segments_to_missing_nodes_are_skipped() {
        let body = r#"{"elements": [
          {"type": "node", "id": 1, "lat": 40.000, "lon": -74.0},
          {"type": "node", "id": 2, "lat": 40.001, "lon": -74.0},
          {"type": "way", "id": 10, "nodes": [1, 2, 77], "tags": {"highway": "residential"}}
        ]}"#;
        let net = build_network(&parse_response(body).unwrap(), NetworkType::Drive).unwrap();
        assert_eq!(net.node_count(), 2);
        assert_eq!(net.edge_count(), 2);
    }

    #[test]
    fn runtime_error_remark_is_rejected() {
        let body = r#"{"elements": [], "remark": "runtime error: Query timed out in \"query\" at line 3 after 181 seconds."}"#;
        assert!(matches!(parse_response(body), Err(OsmError::Malformed(_))));
    }

    #[test]
    fn other_remarks_are_tolerated() {
        let body = r#"{"elements": [], "remark": "note"}"#;
        assert!(parse_response(body).unwrap().elements.is_empty());
    }
}

// ── Response cache ────────────────────────────────────────────────────────────

#[cfg(test)]
mod cache {
    use crate::ResponseCache;

    #[test]
    fn miss_then_hit() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ResponseCache::new(dir.path().join("overpass"));

        assert_eq!(cache.get("query A").unwrap(), None);
        cache.put("query A", "{\"elements\": []}").unwrap();
        assert_eq!(cache.get("query A").unwrap().as_deref(), Some("{\"elements\": []}"));
        assert_eq!(cache.get("query B").unwrap(), None);
    }

    #[test]
    fn file_names_are_stable_hashes() {
        let cache = ResponseCache::new("/tmp/cache");
        let a = cache.path_for("query A");
        assert_eq!(a, cache.path_for("query A"));
        assert_ne!(a, cache.path_for("query B"));
        let name = a.file_name().unwrap().to_str().unwrap();
        assert_eq!(name.len(), "0123456789abcdef.json".len());
        assert!(name.ends_with(".json"));
    }
}

// ── Sources ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod source {
    use rn_core::NetworkType;

    use super::fixtures::{FOOTWAYS_ONLY, OVERPASS_SMALL};
    use crate::{OsmError, OverpassFileSource, RoadSource};

    #[test]
    fn file_source_loads_saved_response() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("area.json");
        std::fs::write(&path, OVERPASS_SMALL).unwrap();

        let src = OverpassFileSource::new(&path);
        assert!(src.describe().contains("area.json"));
        let net = src.load(NetworkType::Drive).unwrap();
        assert_eq!(net.node_count(), 4);
    }

    #[test]
    fn no_matching_ways_is_an_empty_network_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("footways.json");
        std::fs::write(&path, FOOTWAYS_ONLY).unwrap();

        let err = OverpassFileSource::new(&path).load(NetworkType::Drive).unwrap_err();
        assert!(matches!(err, OsmError::EmptyNetwork { ref network_type, .. } if network_type == "drive"));

        // The same file is fine for walking.
        assert!(OverpassFileSource::new(&path).load(NetworkType::Walk).is_ok());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = OverpassFileSource::new(dir.path().join("nope.json"))
            .load(NetworkType::Drive)
            .unwrap_err();
        assert!(matches!(err, OsmError::Io(_)));
    }
}
