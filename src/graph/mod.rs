//! # Graph Rendering Module
//!
//! Writes an in-memory [`petgraph`] graph as a GraphML document, either as
//! plain GraphML with a `label` key or as yEd shape nodes.
//!
//! ## Example
//!
//! ```
//! use graphml_writer::graph::GraphmlRenderer;
//! use graphml_writer::yed::YedShape;
//! use petgraph::graph::DiGraph;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = DiGraph::new();
//! let core = graph.add_node("core");
//! let app = graph.add_node("app");
//! graph.add_edge(app, core, ());
//!
//! let renderer = GraphmlRenderer::new(true).with_shape(YedShape::Ellipse);
//! let mut output = Vec::new();
//! renderer.render(&graph, &mut output)?;
//!
//! let xml = String::from_utf8(output)?;
//! assert!(xml.contains("<y:ShapeNode>"));
//! assert!(xml.contains(r#"<edge source="N1" target="N0"/>"#));
//! # Ok(())
//! # }
//! ```

mod renderer;

pub use renderer::GraphmlRenderer;
