//! Elif command executor

use std::io::Write;

use miette::Result;

use crate::config::DemoOptions;
use crate::core::ObjectId;
use crate::error::Result as GraphmlResult;
use crate::executors::{CommandExecutor, write_demo};
use crate::writer::GraphmlWriter;
use crate::yed::{BasicNode, YedLineStyle, YedShape, colors};

pub const FILE_NAME: &str = "elif.graphml";

pub struct ElifExecutor;

impl CommandExecutor for ElifExecutor {
    type Config = DemoOptions;

    fn execute(config: Self::Config) -> Result<()> {
        write_demo(&config, FILE_NAME, write_elif)
    }
}

/// Writes each node under its own identity, so equal descriptors still
/// become distinct nodes
fn add<W: Write>(writer: &mut GraphmlWriter<W>, nodes: &[&BasicNode]) -> GraphmlResult<()> {
    for node in nodes {
        node.write(writer, Some(ObjectId::of(*node)))?;
    }
    Ok(())
}

/// Writes the elif document; the writer must have yEd enabled
pub fn write_elif<W: Write>(writer: &mut GraphmlWriter<W>) -> GraphmlResult<()> {
    writer.start_graphml()?;
    writer.start_directed_graph()?;

    let center = BasicNode::labeled("Center")
        .with_color(colors::MAGENTA)
        .with_shape(YedShape::Octagon)
        .with_dimension(100.0, 100.0);
    add(writer, &[&center])?;

    let diamond = BasicNode::new()
        .with_line_style(YedLineStyle::Dotted)
        .with_shape(YedShape::Diamond)
        .with_dimension(60.0, 60.0);
    let alpha = diamond.clone().with_label("Alpha");
    let beta = diamond.clone().with_label("Beta");
    let gamma = diamond.clone().with_label("Gamma");
    let delta = diamond.clone().with_label("Delta");
    let epsilon = diamond.with_label("Epsilon").with_color(colors::CYAN);
    let ring = [&alpha, &beta, &gamma, &delta, &epsilon];
    add(writer, &ring)?;

    for node in ring {
        writer.directed_edge(ObjectId::of(&center), ObjectId::of(node))?;
    }
    for pair in ring.windows(2) {
        writer.directed_edge(ObjectId::of(pair[0]), ObjectId::of(pair[1]))?;
    }
    writer.directed_edge(ObjectId::of(&epsilon), ObjectId::of(&alpha))?;

    let test = BasicNode::new().with_color(colors::ORANGE);
    let head = test
        .clone()
        .with_shape(YedShape::Ellipse)
        .with_dimension(40.0, 40.0);
    let body = test
        .clone()
        .with_shape(YedShape::Trapezoid)
        .with_dimension(100.0, 100.0);
    let foot_left = test
        .clone()
        .with_shape(YedShape::Rectangle)
        .with_dimension(20.0, 10.0);
    let foot_right = foot_left.clone();
    add(writer, &[&test, &head, &body, &foot_left, &foot_right])?;

    writer.edge(ObjectId::of(&head), ObjectId::of(&body))?;
    writer.edge(ObjectId::of(&body), ObjectId::of(&foot_left))?;
    writer.edge(ObjectId::of(&body), ObjectId::of(&foot_right))?;

    writer.directed_edge(ObjectId::of(&alpha), ObjectId::of(&test))?;

    writer.end_graph()?;
    writer.end_graphml()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elif_document() {
        let mut writer = GraphmlWriter::new(Vec::new()).for_yed();
        write_elif(&mut writer).unwrap();
        writer.close().unwrap();

        let xml = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(xml.matches("<node ").count(), 11);
        assert_eq!(xml.matches("<edge ").count(), 14);
        assert_eq!(xml.matches(r#"directed="true""#).count(), 11);
        assert_eq!(xml.matches(r#"<y:Shape type="diamond"/>"#).count(), 5);
    }

    #[test]
    fn test_equal_descriptors_become_distinct_nodes() {
        let mut writer = GraphmlWriter::new(Vec::new()).for_yed();
        write_elif(&mut writer).unwrap();
        writer.close().unwrap();

        let xml = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert!(xml.contains(r#"<edge source="N8" target="N9"/>"#));
        assert!(xml.contains(r#"<edge source="N8" target="N10"/>"#));
    }
}
