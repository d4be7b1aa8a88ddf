//! Integration tests for loading graph descriptions

use graphview::core::loader::{load, load_reader, load_str};
use graphview::core::models::{EdgeSpec, NodeId};
use graphview::core::stats::GraphStats;
use graphview::{ErrorKind, GraphError};
use std::io::Cursor;
use std::path::Path;

fn sample(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("samples")
        .join(name)
}

#[test]
fn test_load_sample_graph() {
    let description = load(sample("graph.json")).expect("sample should load");

    assert_eq!(description.nodes.len(), 6);
    assert_eq!(description.edges.len(), 8);
    assert_eq!(description.nodes[0].id, NodeId(0));
    assert_eq!(description.nodes[0].label, "https://www.insa-rouen.fr/");
}

#[test]
fn test_string_ids_are_coerced() {
    let description = load(sample("graph.json")).unwrap();

    assert_eq!(description.nodes[4].id, NodeId(4));
    assert!(description.edges.contains(&EdgeSpec::new(1, 4)));
}

#[test]
fn test_input_order_is_preserved() {
    let description = load_str(
        r#"{"nodes":[{"id":9,"label":"z"},{"id":3,"label":"c"},{"id":5,"label":"e"}],
            "edges":[{"source":5,"target":3},{"source":9,"target":5}]}"#,
    )
    .unwrap();

    let ids: Vec<i64> = description.nodes.iter().map(|n| n.id.0).collect();
    assert_eq!(ids, vec![9, 3, 5]);
    assert_eq!(
        description.edges,
        vec![EdgeSpec::new(5, 3), EdgeSpec::new(9, 5)]
    );
}

#[test]
fn test_load_reader_matches_load_str() {
    let json = r#"{"nodes":[{"id":1,"label":"A"}],"edges":[{"source":1,"target":1}]}"#;

    let from_reader = load_reader(Cursor::new(json)).unwrap();
    let from_str = load_str(json).unwrap();

    assert_eq!(from_reader, from_str);
    assert!(from_reader.edges[0].is_self_loop());
}

#[test]
fn test_extra_fields_are_ignored() {
    let description = load_str(
        r#"{"directed":true,"nodes":[{"id":1,"label":"A","color":"red"}],
            "edges":[{"source":1,"target":1,"weight":0.5}]}"#,
    )
    .unwrap();

    assert_eq!(description.nodes.len(), 1);
    assert_eq!(description.edges.len(), 1);
}

#[test]
fn test_missing_file_is_a_read_error() {
    let err = load(sample("no-such-file.json")).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Parse);
    match err {
        GraphError::Read { path, .. } => assert!(path.ends_with("no-such-file.json")),
        other => panic!("expected read error, got {other:?}"),
    }
}

#[test]
fn test_missing_edges_key_is_schema_error() {
    let err = load_str(r#"{"nodes":[]}"#).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Schema);
    assert!(err.to_string().contains("edges"));
}

#[test]
fn test_bad_id_reports_location() {
    let err = load_str(
        r#"{"nodes":[{"id":1,"label":"A"},{"id":true,"label":"B"}],"edges":[]}"#,
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Schema);
    assert!(err.to_string().contains("nodes[1].id"));
}

#[test]
fn test_fractional_edge_endpoint_rejected() {
    let err = load_str(
        r#"{"nodes":[{"id":1,"label":"A"}],"edges":[{"source":1,"target":1.5}]}"#,
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Schema);
    assert!(err.to_string().contains("edges[0].target"));
}

#[test]
fn test_stats_on_dangling_sample() {
    let description = load(sample("dangling.json")).unwrap();
    let stats = GraphStats::from_description(&description);

    assert!(!stats.is_closed());
    assert_eq!(stats.dangling_edges, vec![EdgeSpec::new(2, 42)]);
    assert!(stats.to_string().contains("2 → 42"));
}
