//! Tests for the demo commands and the graph renderer writing real files

use std::fs;

use graphml_writer::common::ConfigBuilder;
use graphml_writer::config::DemoOptions;
use graphml_writer::executors::CommandExecutor;
use graphml_writer::executors::basics::{self, BasicsExecutor};
use graphml_writer::executors::elif::{self, ElifExecutor};
use graphml_writer::graph::GraphmlRenderer;
use petgraph::graph::DiGraph;
use tempfile::TempDir;

fn options(temp_dir: &TempDir, indent: bool) -> DemoOptions {
    DemoOptions::builder()
        .with_output_dir(temp_dir.path().join("out"))
        .with_indent(indent)
        .build()
        .unwrap()
}

#[test]
fn test_basics_executor_writes_file() {
    let temp_dir = TempDir::new().unwrap();
    BasicsExecutor::execute(options(&temp_dir, false)).unwrap();

    let xml = fs::read_to_string(temp_dir.path().join("out").join(basics::FILE_NAME)).unwrap();
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(xml.contains(r#"<y:Shape type="octagon"/>"#));
    assert!(xml.ends_with("</graphml>"));
}

#[test]
fn test_elif_executor_writes_indented_file() {
    let temp_dir = TempDir::new().unwrap();
    ElifExecutor::execute(options(&temp_dir, true)).unwrap();

    let xml = fs::read_to_string(temp_dir.path().join("out").join(elif::FILE_NAME)).unwrap();
    assert!(xml.contains("\n  <key id=\"d0\""));
    assert_eq!(xml.matches("<node id=").count(), 11);
    assert!(xml.trim_end().ends_with("</graphml>"));
}

#[test]
fn test_renderer_output_to_file() {
    let mut graph = DiGraph::new();
    let storage = graph.add_node("storage");
    let api = graph.add_node("api & gateway");
    let web = graph.add_node("web");
    graph.add_edge(api, storage, ());
    graph.add_edge(web, api, ());

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("services.graphml");
    let mut file = fs::File::create(&path).unwrap();
    GraphmlRenderer::new(false).render(&graph, &mut file).unwrap();
    drop(file);

    let xml = fs::read_to_string(&path).unwrap();
    assert!(xml.contains(r#"<key id="label" for="node" attr.name="label" attr.type="string"/>"#));
    assert!(xml.contains(r#"<data key="label">api &amp; gateway</data>"#));
    assert!(xml.ends_with(concat!(
        r#"</graph>"#,
        r#"<edge source="N1" target="N0"/>"#,
        r#"<edge source="N2" target="N1"/>"#,
        r#"</graphml>"#,
    )));
}
