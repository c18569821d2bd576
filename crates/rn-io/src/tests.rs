//! Unit tests for rn-io.

#[cfg(test)]
mod helpers {
    use rn_core::{GeoPoint, OsmNodeId};
    use rn_graph::{normalize, relabel, NodeMapping, NormalizeOptions, RawNetworkBuilder, RelabeledGraph};

    /// Three nodes, roads 1–2 (150.7 m) and 2–3 (80.2 m), run through
    /// normalize → relabel.
    pub fn three_node_line(lengths: [Option<f64>; 2]) -> (RelabeledGraph, NodeMapping) {
        let mut b = RawNetworkBuilder::new();
        let n: Vec<_> = (0..3)
            .map(|i| b.add_node(OsmNodeId(500 + i), GeoPoint::new(40.0 + i as f64 * 0.001, -74.0)))
            .collect();
        b.add_road(n[0], n[1], lengths[0], None);
        b.add_road(n[1], n[2], lengths[1], None);
        relabel(&normalize(&b.build(), NormalizeOptions::default())).unwrap()
    }

    pub fn to_string(graph: &RelabeledGraph) -> String {
        let mut buf = Vec::new();
        crate::write_adjacency(graph, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }
}

// ── Writer ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod writer {
    use rn_core::VertexId;
    use rn_graph::{RelabeledEdge, RelabeledGraph};

    use super::helpers::{three_node_line, to_string};
    use crate::write_adjacency_file;

    #[test]
    fn three_node_scenario() {
        let (g, _) = three_node_line([Some(150.7), Some(80.2)]);
        assert_eq!(to_string(&g), "3 2\n1 2 150\n2 3 80\n");
    }

    #[test]
    fn missing_length_weighs_one() {
        let (g, _) = three_node_line([None, Some(80.2)]);
        assert_eq!(to_string(&g), "3 2\n1 2 1\n2 3 80\n");
    }

    #[test]
    fn empty_graph_is_header_only() {
        assert_eq!(to_string(&RelabeledGraph::default()), "0 0\n");
    }

    #[test]
    fn isolated_vertices_count_in_header() {
        let g = RelabeledGraph {
            vertex_count: 4,
            edges: vec![RelabeledEdge { u: VertexId(1), v: VertexId(2), length_m: Some(9.99) }],
        };
        assert_eq!(to_string(&g), "4 1\n1 2 9\n");
    }

    #[test]
    fn writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("net.txt");
        let (g, _) = three_node_line([Some(150.7), Some(80.2)]);
        write_adjacency_file(&g, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "3 2\n1 2 150\n2 3 80\n");
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let (g, _) = three_node_line([Some(1.0), Some(1.0)]);
        assert!(write_adjacency_file(&g, &dir.path().join("no/such/dir.txt")).is_err());
    }
}

// ── Reader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod reader {
    use rn_core::VertexId;

    use super::helpers::{three_node_line, to_string};
    use crate::{read_adjacency, read_adjacency_file, write_adjacency_file, AdjacencyRecord, FormatError};

    #[test]
    fn reads_written_output() {
        let (g, _) = three_node_line([Some(150.7), Some(80.2)]);
        let file = read_adjacency(to_string(&g).as_bytes()).unwrap();
        assert_eq!(file.vertex_count, 3);
        assert_eq!(file.declared_edges, 2);
        assert_eq!(
            file.edges,
            vec![
                AdjacencyRecord { u: VertexId(1), v: VertexId(2), weight: 150 },
                AdjacencyRecord { u: VertexId(2), v: VertexId(3), weight: 80 },
            ]
        );
    }

    #[test]
    fn reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("net.txt");
        let (g, _) = three_node_line([Some(10.0), Some(20.0)]);
        write_adjacency_file(&g, &path).unwrap();
        assert_eq!(read_adjacency_file(&path).unwrap().edge_count(), 2);
    }

    #[test]
    fn tolerates_blank_lines_and_extra_spaces() {
        let file = read_adjacency("\n2  1\n\n 1 2   7 \n".as_bytes()).unwrap();
        assert_eq!(file.vertex_count, 2);
        assert_eq!(file.edges[0].weight, 7);
    }

    #[test]
    fn empty_input_has_no_header() {
        assert!(matches!(read_adjacency("".as_bytes()), Err(FormatError::MissingHeader)));
    }

    #[test]
    fn bad_header_reports_line() {
        let err = read_adjacency("3\n1 2 3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, FormatError::Syntax { line: 1, .. }));
    }

    #[test]
    fn bad_record_reports_line() {
        let err = read_adjacency("3 2\n1 2 150\n2 x 80\n".as_bytes()).unwrap_err();
        assert!(matches!(err, FormatError::Syntax { line: 3, reason: "invalid vertex id", .. }));
    }

    #[test]
    fn negative_weight_is_rejected() {
        let err = read_adjacency("2 1\n1 2 -4\n".as_bytes()).unwrap_err();
        assert!(matches!(err, FormatError::Syntax { reason: "invalid weight", .. }));
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod validation {
    use super::helpers::{three_node_line, to_string};
    use crate::{read_adjacency, validate};

    fn check(text: &str) -> crate::ValidationReport {
        validate(&read_adjacency(text.as_bytes()).unwrap())
    }

    #[test]
    fn writer_output_is_valid() {
        let (g, _) = three_node_line([Some(150.7), None]);
        let report = check(&to_string(&g));
        assert!(report.is_valid(), "{report}");
        assert_eq!(report.isolated_vertices, 0);
        assert_eq!(report.total_weight, 151);
    }

    #[test]
    fn edge_count_mismatch() {
        let report = check("3 3\n1 2 1\n2 3 1\n");
        assert!(!report.edge_count_matches());
        assert!(!report.is_valid());
    }

    #[test]
    fn out_of_range_endpoints() {
        let report = check("3 3\n1 2 1\n0 3 1\n3 4 1\n");
        assert_eq!(report.out_of_range, vec![1, 2]);
        assert!(!report.is_valid());
    }

    #[test]
    fn self_loops_and_duplicates() {
        let report = check("3 4\n1 2 1\n2 1 5\n3 3 1\n2 3 1\n");
        assert_eq!(report.self_loops, 1);
        assert_eq!(report.duplicate_edges, 1);
        assert!(!report.is_valid());
    }

    #[test]
    fn huge_vertex_count_is_counted_not_allocated() {
        let report = check("4294967295 1\n1 2 7\n");
        assert_eq!(report.isolated_vertices, u32::MAX as usize - 2);
        assert!(report.is_valid());
    }

    #[test]
    fn isolated_vertices_are_counted() {
        let report = check("5 1\n2 4 1\n");
        assert!(report.is_valid());
        assert_eq!(report.isolated_vertices, 3);
    }

    #[test]
    fn report_display_has_status() {
        assert!(check("2 1\n1 2 3\n").to_string().ends_with("OK"));
        assert!(check("2 0\n1 2 3\n").to_string().ends_with("INVALID"));
    }
}

// ── Mapping CSV ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod mapping_csv {
    use super::helpers::three_node_line;
    use crate::{write_mapping, write_mapping_file, MAPPING_HEADER};

    #[test]
    fn header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.csv");
        let (_, mapping) = three_node_line([Some(1.0), Some(1.0)]);
        write_mapping_file(&mapping, &path).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, MAPPING_HEADER);

        let rows: Vec<csv::StringRecord> = rdr.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "1");
        assert_eq!(&rows[0][1], "500");
        assert_eq!(&rows[2][0], "3");
        assert_eq!(&rows[2][1], "502");
        assert_eq!(rows[1][2].parse::<f64>().unwrap(), 40.001);
        assert_eq!(&rows[1][3], "-74");
    }

    #[test]
    fn writes_to_any_writer() {
        let (_, mapping) = three_node_line([Some(1.0), Some(1.0)]);
        let mut buf = Vec::new();
        write_mapping(&mapping, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("vertex_id,osm_id,lat,lon\n1,500,40,-74\n"));
    }
}
