//! End-to-end tests: JSON file in, HTML file out

use graphview::core::loader::{load, load_str};
use graphview::core::models::build_model;
use graphview::core::pipeline;
use graphview::core::render::{configure, render_html, RenderSettings};
use graphview::{ErrorKind, GraphError, RenderError};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_input(dir: &TempDir, name: &str, json: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, json).expect("Failed to write input");
    path
}

fn sample(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("samples")
        .join(name)
}

#[test]
fn test_two_node_graph_renders() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "graph.json",
        r#"{"nodes":[{"id":1,"label":"A"},{"id":2,"label":"B"}],"edges":[{"source":1,"target":2}]}"#,
    );
    let output = dir.path().join("nx.html");

    let summary = pipeline::run(&input, &output, &RenderSettings::default()).unwrap();

    assert_eq!(summary.nodes, 2);
    assert_eq!(summary.edges, 1);
    assert_eq!(summary.output, output);

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains(r#""id":1,"label":"A""#));
    assert!(html.contains(r#""id":2,"label":"B""#));
    assert!(html.contains(r#"{"from":1,"to":2}"#));
    assert!(html.contains(r#""enabled":true"#));
    assert!(
        !html.contains("src="),
        "default page must not depend on a remote script"
    );
    assert!(html.contains("new GraphCanvas(container"));
}

#[test]
fn test_sample_graph_counts() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("nx.html");

    let summary = pipeline::run(&sample("graph.json"), &output, &RenderSettings::default())
        .expect("sample graph should render");

    // 6 distinct ids, 8 edges including the repeated 0 -> 1
    assert_eq!(summary.nodes, 6);
    assert_eq!(summary.edges, 8);
    assert_eq!(summary.duplicate_ids, 0);
    assert_eq!(summary.dangling_edges, 0);

    let html = fs::read_to_string(&output).unwrap();
    assert_eq!(html.matches(r#"{"from":0,"to":1}"#).count(), 2);
    assert!(html.contains(r#"{"from":1,"to":4}"#));
}

#[test]
fn test_node_count_matches_distinct_ids() {
    let description = load_str(
        r#"{"nodes":[{"id":3,"label":"c"},{"id":1,"label":"a"},{"id":"3","label":"C"},
                     {"id":2,"label":"b"},{"id":1.0,"label":"A"}],
            "edges":[{"source":1,"target":2},{"source":2,"target":3},{"source":1,"target":2}]}"#,
    )
    .unwrap();
    let distinct: HashSet<_> = description.nodes.iter().map(|n| n.id).collect();
    let edges = description.edges.len();
    assert_eq!(description.nodes.len(), 5);

    let model = build_model(description);

    assert_eq!(model.node_count(), distinct.len());
    assert_eq!(model.node_count(), 3);
    assert_eq!(model.edge_count(), edges);
}

#[test]
fn test_same_model_renders_identically_to_two_paths() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.html");
    let second = dir.path().join("second").join("copy.html");
    let settings = RenderSettings::default();
    let model = configure(build_model(load(sample("graph.json")).unwrap()), &settings);

    render_html(&model, &settings, &first).unwrap();
    render_html(&model, &settings, &second).unwrap();

    let first = fs::read_to_string(first).unwrap();
    let second = fs::read_to_string(second).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.matches(r#""shape":"dot""#).count(), model.node_count());
    assert_eq!(first.matches(r#"{"from":"#).count(), model.edge_count());
}

#[test]
fn test_pipeline_reruns_are_identical() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.html");
    let second = dir.path().join("second.html");
    let settings = RenderSettings::default();

    pipeline::run(&sample("graph.json"), &first, &settings).unwrap();
    pipeline::run(&sample("graph.json"), &second, &settings).unwrap();

    assert_eq!(
        fs::read_to_string(first).unwrap(),
        fs::read_to_string(second).unwrap()
    );
}

#[test]
fn test_empty_graph_renders() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "empty.json", r#"{"nodes":[],"edges":[]}"#);
    let output = dir.path().join("empty.html");

    let summary = pipeline::run(&input, &output, &RenderSettings::default()).unwrap();

    assert_eq!(summary.nodes, 0);
    assert_eq!(summary.edges, 0);
    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("var nodes = [];"));
    assert!(html.contains("var edges = [];"));
}

#[test]
fn test_missing_input_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("does-not-exist.json");
    let output = dir.path().join("nx.html");

    let err = pipeline::run(&input, &output, &RenderSettings::default()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(matches!(err, GraphError::Read { .. }));
    assert!(!output.exists());
}

#[test]
fn test_malformed_input_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "broken.json", r#"{"nodes": [ {"id": 1, "#);
    let output = dir.path().join("nx.html");

    let err = pipeline::run(&input, &output, &RenderSettings::default()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(!output.exists());
}

#[test]
fn test_schema_error_for_missing_label() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "nolabel.json",
        r#"{"nodes":[{"id":1}],"edges":[]}"#,
    );
    let output = dir.path().join("nx.html");

    let err = pipeline::run(&input, &output, &RenderSettings::default()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Schema);
    assert!(!output.exists());
}

#[test]
fn test_duplicate_id_keeps_last_label() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "dup.json",
        r#"{"nodes":[{"id":1,"label":"A"},{"id":1,"label":"B"}],"edges":[]}"#,
    );
    let output = dir.path().join("dup.html");

    let summary = pipeline::run(&input, &output, &RenderSettings::default()).unwrap();

    assert_eq!(summary.nodes, 1);
    assert_eq!(summary.duplicate_ids, 1);
    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains(r#""label":"B""#));
    assert!(!html.contains(r#""label":"A""#));
}

#[test]
fn test_dangling_edge_rejected_by_default() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("dangling.html");

    let err = pipeline::run(&sample("dangling.json"), &output, &RenderSettings::default())
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Render);
    match err {
        GraphError::Render(RenderError::DanglingEdge { from, to, missing }) => {
            assert_eq!(from.0, 2);
            assert_eq!(to.0, 42);
            assert_eq!(missing.0, 42);
        }
        other => panic!("expected dangling edge error, got {other:?}"),
    }
    assert!(!output.exists());
}

#[test]
fn test_rejected_render_leaves_no_directory() {
    let dir = TempDir::new().unwrap();
    let site = dir.path().join("site");
    let output = site.join("dangling.html");

    let err = pipeline::run(&sample("dangling.json"), &output, &RenderSettings::default())
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Render);
    assert!(!site.exists());
}

#[test]
fn test_dangling_edge_allowed_when_configured() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("dangling.html");
    let settings = RenderSettings {
        allow_dangling_edges: true,
        ..RenderSettings::default()
    };

    let summary = pipeline::run(&sample("dangling.json"), &output, &settings).unwrap();

    assert_eq!(summary.nodes, 2);
    assert_eq!(summary.edges, 2);
    assert_eq!(summary.dangling_edges, 1);
    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains(r#"{"from":2,"to":42}"#));
}

#[test]
fn test_output_directory_is_created() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("nested").join("deeper").join("nx.html");

    pipeline::run(&sample("graph.json"), &output, &RenderSettings::default()).unwrap();

    assert!(output.exists());
}

#[test]
fn test_settings_reach_the_page() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("styled.html");
    let settings = RenderSettings {
        width: "100%".to_string(),
        height: "720px".to_string(),
        physics: false,
        directed: true,
        title: "Crawl of insa-rouen.fr".to_string(),
        ..RenderSettings::default()
    };

    let model = configure(build_model(load(sample("graph.json")).unwrap()), &settings);
    assert!(!model.physics());
    render_html(&model, &settings, &output).unwrap();

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("width: 100%;"));
    assert!(html.contains("height: 720px;"));
    assert!(html.contains("<title>Crawl of insa-rouen.fr</title>"));
    assert!(html.contains(r#""physics":{"enabled":false"#));
    assert!(html.contains(r#""arrows":{"to":{"enabled":true}}"#));
}
