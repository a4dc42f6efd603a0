//! # yEd Extension
//!
//! Adds the `y` namespace and yEd's fixed key schema (`d0`..`d6`) to a
//! document, and writes the visual payload of nodes: shape nodes with their
//! fill, border, label and geometry, and UML class nodes with attribute and
//! method lines.
//!
//! The extension is enabled on the writer with
//! [`for_yed`](crate::writer::GraphmlWriter::for_yed) and reached through
//! [`yed`](crate::writer::GraphmlWriter::yed), which borrows the writer for
//! the duration of one call chain.
//!
//! ## Example
//!
//! ```
//! use graphml_writer::writer::GraphmlWriter;
//! use graphml_writer::yed::{YedLineStyle, YedShape};
//!
//! # fn main() -> graphml_writer::error::Result<()> {
//! let mut writer = GraphmlWriter::new(Vec::new()).for_yed();
//! writer.start_graphml()?;
//! writer.start_directed_graph()?;
//!
//! writer.start_node()?;
//! let mut yed = writer.yed()?;
//! yed.start_shape_node()?;
//! yed.node_label("Alpha")?;
//! yed.border_style(YedLineStyle::Dotted)?;
//! yed.fill("#0000ff")?;
//! yed.shape(YedShape::Octagon)?;
//! yed.end_shape_node()?;
//! writer.end_node()?;
//!
//! writer.end_graph()?;
//! writer.end_graphml()?;
//! # Ok(())
//! # }
//! ```

mod basic;
mod geometry;
mod shape;

use std::io::Write;

pub use basic::{BasicNode, colors};
pub use geometry::Geometry;
pub use shape::{YedLineStyle, YedShape};
use tracing::trace;

use crate::constants::yed::{
    BORDER_COLOR, DEFAULT_BORDER_WIDTH, KEY_EDGE_DESCRIPTION, KEY_EDGE_GRAPHICS, KEY_EDGE_URL,
    KEY_NODE_DESCRIPTION, KEY_NODE_GRAPHICS, KEY_NODE_URL, KEY_RESOURCES, NAMESPACE, PREFIX, label,
};
use crate::core::GraphmlElement;
use crate::error::{GraphmlError, Result};
use crate::writer::{start_data, start_key};
use crate::xml::{ToAttribute, XmlSink};

/// Hooks a vendor extension gets while the `<graphml>` root is open
pub trait GraphmlExtension {
    /// Adds namespace declarations to the root element
    fn add_namespaces<W: Write>(&mut self, sink: &mut XmlSink<W>) -> Result<()>;

    /// Writes the extension's `<key>` declarations
    fn add_meta_info<W: Write>(&mut self, sink: &mut XmlSink<W>) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    ShapeNode,
    UmlClassNode,
}

impl BlockKind {
    fn element(self) -> &'static str {
        match self {
            BlockKind::ShapeNode => "ShapeNode",
            BlockKind::UmlClassNode => "UMLClassNode",
        }
    }
}

#[derive(Debug)]
struct Block {
    kind: BlockKind,
    geometry: Geometry,
    in_uml: bool,
}

/// State of the yEd extension, owned by the writer
#[derive(Debug, Default)]
pub struct YedExtension {
    block: Option<Block>,
}

impl YedExtension {
    pub fn new() -> Self {
        Self::default()
    }

    /// Geometry of the block being written, if any
    pub fn geometry(&self) -> Option<&Geometry> {
        self.block.as_ref().map(|block| &block.geometry)
    }
}

const KEYS: [(&str, GraphmlElement, &[(&str, &str)]); 7] = [
    (
        KEY_RESOURCES,
        GraphmlElement::Graphml,
        &[("yfiles.type", "resources")],
    ),
    (
        KEY_NODE_URL,
        GraphmlElement::Node,
        &[("attr.name", "url"), ("attr.type", "string")],
    ),
    (
        KEY_NODE_DESCRIPTION,
        GraphmlElement::Node,
        &[("attr.name", "description"), ("attr.type", "string")],
    ),
    (
        KEY_NODE_GRAPHICS,
        GraphmlElement::Node,
        &[("yfiles.type", "nodegraphics")],
    ),
    (
        KEY_EDGE_URL,
        GraphmlElement::Edge,
        &[("attr.name", "url"), ("attr.type", "string")],
    ),
    (
        KEY_EDGE_DESCRIPTION,
        GraphmlElement::Edge,
        &[("attr.name", "description"), ("attr.type", "string")],
    ),
    (
        KEY_EDGE_GRAPHICS,
        GraphmlElement::Edge,
        &[("yfiles.type", "edgegraphics")],
    ),
];

impl GraphmlExtension for YedExtension {
    fn add_namespaces<W: Write>(&mut self, sink: &mut XmlSink<W>) -> Result<()> {
        sink.attribute(&format!("xmlns:{PREFIX}"), NAMESPACE)
    }

    fn add_meta_info<W: Write>(&mut self, sink: &mut XmlSink<W>) -> Result<()> {
        for (id, element, attributes) in KEYS {
            start_key(sink, id, element)?;
            for (name, value) in attributes {
                sink.attribute(name, *value)?;
            }
            sink.end("key")?;
            trace!(id, %element, "declared yEd key");
        }
        Ok(())
    }
}

/// yEd operations on a writer, borrowed from
/// [`GraphmlWriter::yed`](crate::writer::GraphmlWriter::yed)
pub struct Yed<'a, W: Write> {
    sink: &'a mut XmlSink<W>,
    state: &'a mut YedExtension,
}

impl<'a, W: Write> Yed<'a, W> {
    pub(crate) fn new(sink: &'a mut XmlSink<W>, state: &'a mut YedExtension) -> Self {
        Self { sink, state }
    }

    /// Node url, as `<data key="d1">`
    pub fn url(&mut self, url: &str) -> Result<()> {
        self.data(KEY_NODE_URL, url)
    }

    /// Node description, as `<data key="d2">`
    pub fn description(&mut self, text: &str) -> Result<()> {
        self.data(KEY_NODE_DESCRIPTION, text)
    }

    /// Edge url, as `<data key="d4">`
    pub fn edge_url(&mut self, url: &str) -> Result<()> {
        self.data(KEY_EDGE_URL, url)
    }

    /// Edge description, as `<data key="d5">`
    pub fn edge_description(&mut self, text: &str) -> Result<()> {
        self.data(KEY_EDGE_DESCRIPTION, text)
    }

    /// Opens `<data key="d3"><y:ShapeNode>` with an estimated geometry
    pub fn start_shape_node(&mut self) -> Result<()> {
        self.start_block(BlockKind::ShapeNode, "start_shape_node")
    }

    /// Writes the node's `<y:Geometry>` and closes the shape node
    pub fn end_shape_node(&mut self) -> Result<()> {
        let block = self.take_block(BlockKind::ShapeNode, "end_shape_node")?;
        if !block.geometry.is_fixed() {
            trace!(
                lines = block.geometry.num_lines(),
                width = block.geometry.width(),
                height = block.geometry.height(),
                "estimated shape node geometry"
            );
        }
        self.write_geometry(&block.geometry)?;
        self.end_yed(BlockKind::ShapeNode.element())?;
        self.sink.end("data")
    }

    /// Opens `<data key="d3"><y:UMLClassNode>`
    pub fn start_uml_class_node(&mut self) -> Result<()> {
        self.start_block(BlockKind::UmlClassNode, "start_uml_class_node")
    }

    /// Closes the UML class node. A geometry is written only when one was
    /// set explicitly.
    pub fn end_uml_class_node(&mut self) -> Result<()> {
        let block = self.take_block(BlockKind::UmlClassNode, "end_uml_class_node")?;
        if block.geometry.is_fixed() {
            self.write_geometry(&block.geometry)?;
        }
        self.end_yed(BlockKind::UmlClassNode.element())?;
        self.sink.end("data")
    }

    /// Fixes the size of the current node, replacing the estimate
    pub fn geometry(&mut self, width: f64, height: f64) -> Result<()> {
        self.block("geometry")?.geometry = Geometry::fixed(width, height);
        Ok(())
    }

    pub fn fill(&mut self, hex_color: &str) -> Result<()> {
        self.block("fill")?;
        self.start_yed("Fill")?;
        self.sink.attribute("color", hex_color)?;
        self.sink.attribute("transparent", &false)?;
        self.end_yed("Fill")
    }

    /// Border in the given style, one pixel wide
    pub fn border_style(&mut self, line_style: YedLineStyle) -> Result<()> {
        self.border_style_with_width(line_style, DEFAULT_BORDER_WIDTH)
    }

    /// Solid border of the given width
    pub fn border_width(&mut self, line_width: u32) -> Result<()> {
        self.border_style_with_width(YedLineStyle::Line, line_width)
    }

    pub fn border_style_with_width(
        &mut self,
        line_style: YedLineStyle,
        line_width: u32,
    ) -> Result<()> {
        self.block("border_style")?;
        self.start_yed("BorderStyle")?;
        self.sink.attribute("color", BORDER_COLOR)?;
        self.sink.attribute("type", line_style.id())?;
        self.sink.attribute("width", &line_width)?;
        self.end_yed("BorderStyle")
    }

    pub fn shape(&mut self, shape: YedShape) -> Result<()> {
        self.block("shape")?;
        self.start_yed("Shape")?;
        self.sink.attribute("type", shape.id())?;
        self.end_yed("Shape")
    }

    /// Visible, centered label
    pub fn node_label(&mut self, text: &str) -> Result<()> {
        self.node_label_with_visibility(text, true)
    }

    /// Label; a visible one adds a line to the geometry estimate
    pub fn node_label_with_visibility(&mut self, text: &str, visible: bool) -> Result<()> {
        let block = self.block("node_label")?;
        if visible {
            block.geometry.add_line();
        }

        self.start_yed("NodeLabel")?;
        let attributes: [(&str, &dyn ToAttribute); 15] = [
            ("alignment", &label::ALIGNMENT),
            ("autoSizePolicy", &label::AUTO_SIZE_POLICY),
            ("borderDistance", &0.0),
            ("fontFamily", &label::FONT_FAMILY),
            ("fontSize", &label::FONT_SIZE),
            ("fontStyle", &label::FONT_STYLE),
            ("hasBackgroundColor", &false),
            ("hasLineColor", &false),
            ("modelName", &label::MODEL_NAME),
            ("modelPosition", &label::MODEL_POSITION),
            ("textColor", &label::TEXT_COLOR),
            ("visible", &visible),
            ("width", &label::WIDTH),
            ("x", &0.0),
            ("y", &0.0),
        ];
        for (name, value) in attributes {
            self.sink.attribute(name, value)?;
        }
        self.sink.text(text)?;
        self.end_yed("NodeLabel")
    }

    /// Opens `<y:UML>` inside a UML class node
    pub fn start_uml(&mut self) -> Result<()> {
        let block = self.block("start_uml")?;
        if block.kind != BlockKind::UmlClassNode {
            return Err(GraphmlError::NoOpenBlock {
                operation: "start_uml",
            });
        }
        if block.in_uml {
            return Err(GraphmlError::NestedBlock {
                operation: "start_uml",
            });
        }
        block.in_uml = true;

        self.start_yed("UML")?;
        self.sink.attribute("clipContent", &true)?;
        self.sink.attribute("constraint", "")?;
        self.sink.attribute("omitDetails", &false)?;
        self.sink.attribute("stereotype", "")?;
        self.sink.attribute("use3DEffect", &true)
    }

    pub fn attribute(&mut self, text: &str) -> Result<()> {
        self.uml_line("AttributeLabel", text, "attribute")
    }

    pub fn method(&mut self, text: &str) -> Result<()> {
        self.uml_line("MethodLabel", text, "method")
    }

    pub fn end_uml(&mut self) -> Result<()> {
        self.uml_block("end_uml")?.in_uml = false;
        self.end_yed("UML")
    }

    fn uml_line(&mut self, element: &str, text: &str, operation: &'static str) -> Result<()> {
        self.uml_block(operation)?.geometry.add_line();

        self.start_yed(element)?;
        self.sink.text(text)?;
        self.end_yed(element)
    }

    fn data(&mut self, key: &str, text: &str) -> Result<()> {
        start_data(self.sink, key)?;
        self.sink.text(text)?;
        self.sink.end("data")
    }

    fn start_block(&mut self, kind: BlockKind, operation: &'static str) -> Result<()> {
        if self.state.block.is_some() {
            return Err(GraphmlError::NestedBlock { operation });
        }

        start_data(self.sink, KEY_NODE_GRAPHICS)?;
        self.start_yed(kind.element())?;
        self.state.block = Some(Block {
            kind,
            geometry: Geometry::estimated(),
            in_uml: false,
        });
        Ok(())
    }

    fn take_block(&mut self, kind: BlockKind, operation: &'static str) -> Result<Block> {
        match self.state.block.take() {
            Some(block) if block.kind == kind && !block.in_uml => Ok(block),
            Some(block) if block.kind == kind => {
                self.state.block = Some(block);
                Err(GraphmlError::NestedBlock { operation })
            }
            other => {
                self.state.block = other;
                Err(GraphmlError::NoOpenBlock { operation })
            }
        }
    }

    fn block(&mut self, operation: &'static str) -> Result<&mut Block> {
        self.state
            .block
            .as_mut()
            .ok_or(GraphmlError::NoOpenBlock { operation })
    }

    fn uml_block(&mut self, operation: &'static str) -> Result<&mut Block> {
        match self.state.block.as_mut() {
            Some(block) if block.in_uml => Ok(block),
            _ => Err(GraphmlError::NoOpenBlock { operation }),
        }
    }

    fn write_geometry(&mut self, geometry: &Geometry) -> Result<()> {
        self.start_yed("Geometry")?;
        self.sink.attribute("height", &geometry.height())?;
        self.sink.attribute("width", &geometry.width())?;
        self.sink.attribute("x", &0.0)?;
        self.sink.attribute("y", &0.0)?;
        self.end_yed("Geometry")
    }

    fn start_yed(&mut self, element: &str) -> Result<()> {
        self.sink.start_prefixed(PREFIX, element)
    }

    fn end_yed(&mut self, element: &str) -> Result<()> {
        self.sink.end(&format!("{PREFIX}:{element}"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sink() -> XmlSink<Vec<u8>> {
        XmlSink::new(Vec::new(), false)
    }

    fn output(sink: XmlSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_meta_info_keys_in_order() {
        let mut sink = sink();
        let mut state = YedExtension::new();
        sink.start("graphml").unwrap();
        state.add_meta_info(&mut sink).unwrap();
        sink.end("graphml").unwrap();

        let xml = output(sink);
        let ids: Vec<&str> = xml
            .split("<key id=\"")
            .skip(1)
            .map(|rest| &rest[..2])
            .collect();
        assert_eq!(ids, ["d0", "d1", "d2", "d3", "d4", "d5", "d6"]);
        assert!(xml.contains(r#"<key id="d0" for="graphml" yfiles.type="resources"/>"#));
        assert!(xml.contains(
            r#"<key id="d5" for="edge" attr.name="description" attr.type="string"/>"#
        ));
    }

    #[test]
    fn test_shape_node_with_estimated_geometry() {
        let mut sink = sink();
        let mut state = YedExtension::new();
        let mut yed = Yed::new(&mut sink, &mut state);
        yed.start_shape_node().unwrap();
        yed.node_label("one").unwrap();
        yed.node_label("two").unwrap();
        yed.node_label("three").unwrap();
        yed.end_shape_node().unwrap();

        let xml = output(sink);
        assert!(xml.starts_with(r#"<data key="d3"><y:ShapeNode><y:NodeLabel"#));
        assert!(xml.ends_with(
            r#"<y:Geometry height="34.0" width="10.0" x="0.0" y="0.0"/></y:ShapeNode></data>"#
        ));
    }

    #[test]
    fn test_hidden_label_does_not_count() {
        let mut sink = sink();
        let mut state = YedExtension::new();
        let mut yed = Yed::new(&mut sink, &mut state);
        yed.start_shape_node().unwrap();
        yed.node_label_with_visibility("hidden", false).unwrap();
        yed.node_label("shown").unwrap();
        assert_eq!(yed.state.geometry().unwrap().num_lines(), 1);
    }

    #[test]
    fn test_explicit_geometry_wins() {
        let mut sink = sink();
        let mut state = YedExtension::new();
        let mut yed = Yed::new(&mut sink, &mut state);
        yed.start_shape_node().unwrap();
        yed.geometry(50.0, 60.0).unwrap();
        yed.node_label("a").unwrap();
        yed.node_label("b").unwrap();
        yed.end_shape_node().unwrap();

        assert!(output(sink).contains(r#"<y:Geometry height="60.0" width="50.0" x="0.0" y="0.0"/>"#));
    }

    #[test]
    fn test_node_label_attributes() {
        let mut sink = sink();
        let mut state = YedExtension::new();
        let mut yed = Yed::new(&mut sink, &mut state);
        yed.start_shape_node().unwrap();
        yed.node_label("Alpha").unwrap();

        let xml = output(sink);
        assert!(xml.ends_with(concat!(
            r#"<y:NodeLabel alignment="center" autoSizePolicy="content" borderDistance="0.0""#,
            r#" fontFamily="Dialog" fontSize="12" fontStyle="plain" hasBackgroundColor="false""#,
            r##" hasLineColor="false" modelName="internal" modelPosition="c" textColor="#000000""##,
            r#" visible="true" width="30.0" x="0.0" y="0.0">Alpha</y:NodeLabel>"#,
        )));
    }

    #[test]
    fn test_child_elements_require_block() {
        let mut sink = sink();
        let mut state = YedExtension::new();
        let mut yed = Yed::new(&mut sink, &mut state);

        assert!(matches!(
            yed.node_label("x"),
            Err(GraphmlError::NoOpenBlock {
                operation: "node_label"
            })
        ));
        assert!(matches!(
            yed.fill("#fff"),
            Err(GraphmlError::NoOpenBlock { .. })
        ));
        assert!(matches!(
            yed.geometry(1.0, 1.0),
            Err(GraphmlError::NoOpenBlock { .. })
        ));
        assert!(matches!(
            yed.end_shape_node(),
            Err(GraphmlError::NoOpenBlock { .. })
        ));
        assert_eq!(output(sink), "");
    }

    #[test]
    fn test_blocks_do_not_nest() {
        let mut sink = sink();
        let mut state = YedExtension::new();
        let mut yed = Yed::new(&mut sink, &mut state);
        yed.start_shape_node().unwrap();

        assert!(matches!(
            yed.start_uml_class_node(),
            Err(GraphmlError::NestedBlock { .. })
        ));
        assert!(matches!(
            yed.end_uml_class_node(),
            Err(GraphmlError::NoOpenBlock { .. })
        ));
        yed.end_shape_node().unwrap();
    }

    #[test]
    fn test_uml_class_node() {
        let mut sink = sink();
        let mut state = YedExtension::new();
        let mut yed = Yed::new(&mut sink, &mut state);
        yed.start_uml_class_node().unwrap();
        yed.node_label("Widget").unwrap();
        yed.start_uml().unwrap();
        yed.attribute("- name: String").unwrap();
        yed.method("+ render()").unwrap();
        yed.end_uml().unwrap();
        assert_eq!(yed.state.geometry().unwrap().num_lines(), 3);
        yed.end_uml_class_node().unwrap();

        let xml = output(sink);
        assert!(xml.contains(concat!(
            r#"<y:UML clipContent="true" constraint="" omitDetails="false" stereotype="""#,
            r#" use3DEffect="true"><y:AttributeLabel>- name: String</y:AttributeLabel>"#,
            r#"<y:MethodLabel>+ render()</y:MethodLabel></y:UML>"#,
        )));
        assert!(!xml.contains("y:Geometry"));
        assert!(xml.ends_with("</y:UMLClassNode></data>"));
    }

    #[test]
    fn test_uml_lines_outside_uml_section_fail() {
        let mut sink = sink();
        let mut state = YedExtension::new();
        let mut yed = Yed::new(&mut sink, &mut state);
        yed.start_uml_class_node().unwrap();

        assert!(matches!(
            yed.attribute("x"),
            Err(GraphmlError::NoOpenBlock {
                operation: "attribute"
            })
        ));
        assert!(matches!(yed.end_uml(), Err(GraphmlError::NoOpenBlock { .. })));
    }

    #[test]
    fn test_uml_section_only_in_uml_class_node() {
        let mut sink = sink();
        let mut state = YedExtension::new();
        let mut yed = Yed::new(&mut sink, &mut state);
        yed.start_shape_node().unwrap();

        assert!(matches!(
            yed.start_uml(),
            Err(GraphmlError::NoOpenBlock {
                operation: "start_uml"
            })
        ));
    }

    #[test]
    fn test_border_fill_and_shape() {
        let mut sink = sink();
        let mut state = YedExtension::new();
        let mut yed = Yed::new(&mut sink, &mut state);
        yed.start_shape_node().unwrap();
        yed.border_style(YedLineStyle::Dotted).unwrap();
        yed.border_width(3).unwrap();
        yed.fill("#0000ff").unwrap();
        yed.shape(YedShape::Octagon).unwrap();

        let xml = output(sink);
        assert!(xml.contains(r##"<y:BorderStyle color="#000000" type="dotted" width="1"/>"##));
        assert!(xml.contains(r##"<y:BorderStyle color="#000000" type="line" width="3"/>"##));
        assert!(xml.contains(r##"<y:Fill color="#0000ff" transparent="false"/>"##));
        assert!(xml.contains(r#"<y:Shape type="octagon"/>"#));
    }

    #[test]
    fn test_url_and_description_data() {
        let mut sink = sink();
        let mut state = YedExtension::new();
        sink.start("graphml").unwrap();
        let mut yed = Yed::new(&mut sink, &mut state);
        yed.url("https://example.com/a").unwrap();
        yed.description("node text").unwrap();
        yed.edge_url("https://example.com/e").unwrap();
        yed.edge_description("edge text").unwrap();
        sink.end("graphml").unwrap();

        assert_eq!(
            output(sink),
            concat!(
                r#"<graphml>"#,
                r#"<data key="d1">https://example.com/a</data>"#,
                r#"<data key="d2">node text</data>"#,
                r#"<data key="d4">https://example.com/e</data>"#,
                r#"<data key="d5">edge text</data>"#,
                r#"</graphml>"#,
            )
        );
    }
}
