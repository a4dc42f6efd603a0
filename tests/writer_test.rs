//! Integration tests for the document writer using the library interface

use std::fs;

use graphml_writer::GraphmlError;
use graphml_writer::core::{EdgeStyle, GraphmlElement, ObjectId};
use graphml_writer::writer::{EdgeEnd, GraphmlWriter};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn into_string(writer: GraphmlWriter<Vec<u8>>) -> String {
    String::from_utf8(writer.into_inner().unwrap()).unwrap()
}

/// Strips everything up to and including the root start tag
fn body(xml: &str) -> &str {
    let root = xml.find("graphml.xsd\">").unwrap();
    &xml[root + "graphml.xsd\">".len()..]
}

#[test]
fn test_edges_follow_all_node_content_in_declaration_order() {
    let mut writer = GraphmlWriter::new(Vec::new());
    writer.start_graphml().unwrap();
    writer.start_directed_graph().unwrap();

    let a = writer.start_node().unwrap();
    writer.end_node().unwrap();
    let b = writer.start_node().unwrap();
    writer.end_node().unwrap();
    writer.edge(&a, &b).unwrap();

    let c = writer.start_node().unwrap();
    writer.end_node().unwrap();
    writer.undirected_edge(&c, &a).unwrap();
    writer.directed_edge(&b, &c).unwrap();

    writer.end_graph().unwrap();
    writer.end_graphml().unwrap();
    writer.close().unwrap();

    assert_eq!(
        body(&into_string(writer)),
        concat!(
            r#"<graph id="G0" edgedefault="directed">"#,
            r#"<node id="N0"/><node id="N1"/><node id="N2"/>"#,
            r#"</graph>"#,
            r#"<edge source="N0" target="N1"/>"#,
            r#"<edge source="N2" target="N0" directed="false"/>"#,
            r#"<edge source="N1" target="N2" directed="true"/>"#,
            r#"</graphml>"#,
        )
    );
}

#[test]
fn test_ids_are_monotonic_across_nested_graphs() {
    let mut writer = GraphmlWriter::new(Vec::new());
    writer.start_graphml().unwrap();

    let outer = writer.start_undirected_graph().unwrap();
    let first = writer.start_node().unwrap();
    let inner = writer.start_directed_graph().unwrap();
    let nested = writer.start_node().unwrap();
    writer.end_node().unwrap();
    writer.end_graph().unwrap();
    writer.end_node().unwrap();
    let last = writer.start_node().unwrap();
    writer.end_node().unwrap();
    writer.end_graph().unwrap();
    writer.end_graphml().unwrap();

    assert_eq!([outer, inner], ["G0", "G1"]);
    assert_eq!([first, nested, last], ["N0", "N1", "N2"]);
}

#[test]
fn test_object_and_id_endpoints_resolve_identically() {
    struct Task {
        name: String,
    }
    let tasks = [
        Task {
            name: "fetch".to_string(),
        },
        Task {
            name: "build".to_string(),
        },
    ];

    let mut writer = GraphmlWriter::new(Vec::new());
    writer.start_graphml().unwrap();
    writer.start_directed_graph().unwrap();
    let mut ids = Vec::new();
    for task in &tasks {
        ids.push(writer.start_node_for(ObjectId::of(task)).unwrap());
        writer.start_data("name").unwrap();
        writer.text(&task.name).unwrap();
        writer.end_data().unwrap();
        writer.end_node().unwrap();
    }

    writer
        .edge(ObjectId::of(&tasks[0]), ObjectId::of(&tasks[1]))
        .unwrap();
    writer.edge(&ids[0], &ids[1]).unwrap();

    let edges = writer.pending_edges();
    assert_eq!(edges[0], edges[1]);
    assert_eq!(edges[0].source(), "N0");
    assert_eq!(edges[0].target(), "N1");
}

#[test]
fn test_ports_are_written_on_edges() {
    let mut writer = GraphmlWriter::new(Vec::new());
    writer.start_graphml().unwrap();
    writer.start_directed_graph().unwrap();
    writer.start_node_for(ObjectId::new(1)).unwrap();
    writer.port("out").unwrap();
    writer.end_node().unwrap();
    writer.start_node_for(ObjectId::new(2)).unwrap();
    writer.port("in").unwrap();
    writer.end_node().unwrap();

    writer
        .directed_edge(
            EdgeEnd::object(ObjectId::new(1)).port("out"),
            EdgeEnd::object(ObjectId::new(2)).port("in"),
        )
        .unwrap();
    writer.end_graph().unwrap();
    writer.end_graphml().unwrap();

    let xml = into_string(writer);
    assert!(xml.contains(
        r#"<edge source="N0" sourcePort="out" target="N1" targetPort="in" directed="true"/>"#
    ));
}

#[test]
fn test_unregistered_object_is_rejected() {
    let mut writer = GraphmlWriter::new(Vec::new());
    writer.start_graphml().unwrap();
    writer.start_directed_graph().unwrap();

    let err = writer
        .edge_with_style(ObjectId::new(7), "N0", Some(EdgeStyle::Directed))
        .unwrap_err();
    assert!(matches!(err, GraphmlError::UnknownObject { .. }));
}

#[test]
fn test_custom_keys_and_data() {
    let mut writer = GraphmlWriter::new(Vec::new());
    writer.start_graphml().unwrap();
    writer
        .start_key("weight", GraphmlElement::Edge)
        .unwrap();
    writer.attribute("attr.name", "weight").unwrap();
    writer.attribute("attr.type", "double").unwrap();
    writer.end_key().unwrap();
    writer.start_undirected_graph().unwrap();
    writer.end_graph().unwrap();
    writer.end_graphml().unwrap();

    let xml = into_string(writer);
    assert!(xml.contains(r#"<key id="weight" for="edge" attr.name="weight" attr.type="double"/>"#));
}

#[test]
fn test_close_is_idempotent_and_blocks_writes() {
    let mut writer = GraphmlWriter::new(Vec::new());
    writer.start_graphml().unwrap();
    writer.close().unwrap();
    writer.close().unwrap();

    assert!(matches!(writer.start_node(), Err(GraphmlError::Closed)));
    assert!(matches!(writer.edge("N0", "N1"), Err(GraphmlError::Closed)));
}

#[test]
fn test_caller_output_survives_close() {
    let mut writer = GraphmlWriter::new(Vec::new());
    writer.start_graphml().unwrap();
    writer.start_undirected_graph().unwrap();
    writer.end_graph().unwrap();
    writer.end_graphml().unwrap();
    writer.close().unwrap();

    let xml = into_string(writer);
    assert!(xml.ends_with("</graphml>"));
}

#[test]
fn test_write_file_releases_file_on_success() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("plain.graphml");

    GraphmlWriter::write_file(&path, |writer| {
        writer.start_graphml()?;
        writer.start_undirected_graph()?;
        let a = writer.start_node()?;
        writer.end_node()?;
        writer.edge(&a, &a)?;
        writer.end_graph()?;
        writer.end_graphml()
    })
    .unwrap();

    let xml = fs::read_to_string(&path).unwrap();
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(xml.ends_with(r#"</graph><edge source="N0" target="N0"/></graphml>"#));
}

#[test]
fn test_write_file_releases_file_on_failure() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.graphml");

    let err = GraphmlWriter::write_file(&path, |writer| {
        writer.start_graphml()?;
        writer.start_directed_graph()?;
        writer.start_node()?;
        writer.end_graphml()
    })
    .unwrap_err();
    assert!(matches!(err, GraphmlError::UnclosedElements { .. }));

    // What was written before the failure is still on disk
    let xml = fs::read_to_string(&path).unwrap();
    assert!(xml.ends_with(r#"<node id="N0">"#));
}

#[test]
fn test_indented_output() {
    let mut writer = GraphmlWriter::indented(Vec::new(), false);
    writer.start_graphml().unwrap();
    writer.start_directed_graph().unwrap();
    writer.start_node().unwrap();
    writer.end_node().unwrap();
    writer.end_graph().unwrap();
    writer.end_graphml().unwrap();

    let xml = into_string(writer);
    assert!(xml.contains("\n  <graph id=\"G0\" edgedefault=\"directed\">\n    <node id=\"N0\"/>\n  </graph>\n"));
}
