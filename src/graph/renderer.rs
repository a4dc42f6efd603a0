use std::fmt::Display;
use std::io::Write;

use petgraph::graph::DiGraph;
use petgraph::visit::EdgeRef;
use tracing::debug;

use crate::core::GraphmlElement;
use crate::error::Result;
use crate::writer::GraphmlWriter;
use crate::yed::{YedLineStyle, YedShape, colors};

/// Key used for node labels in plain GraphML output
const LABEL_KEY: &str = "label";

pub struct GraphmlRenderer {
    yed: bool,
    shape: YedShape,
    fill: String,
    line_style: YedLineStyle,
    indent: bool,
}

impl GraphmlRenderer {
    /// `yed` selects yEd shape nodes over plain labelled GraphML nodes
    pub fn new(yed: bool) -> Self {
        Self {
            yed,
            shape: YedShape::RoundRectangle,
            fill: colors::WHITE.to_string(),
            line_style: YedLineStyle::Line,
            indent: false,
        }
    }

    pub fn with_shape(mut self, shape: YedShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }

    pub fn with_line_style(mut self, line_style: YedLineStyle) -> Self {
        self.line_style = line_style;
        self
    }

    pub fn with_indent(mut self, indent: bool) -> Self {
        self.indent = indent;
        self
    }

    /// Writes `graph` as a single directed GraphML graph, labelling every
    /// node with its `Display` form
    pub fn render<N, E>(&self, graph: &DiGraph<N, E>, output: &mut dyn Write) -> Result<()>
    where
        N: Display,
    {
        let mut writer = if self.indent {
            GraphmlWriter::indented(output, false)
        } else {
            GraphmlWriter::new(output)
        };
        if self.yed {
            writer.enable_yed();
        }

        writer.start_graphml()?;
        if !self.yed {
            writer.start_key(LABEL_KEY, GraphmlElement::Node)?;
            writer.attribute("attr.name", LABEL_KEY)?;
            writer.attribute("attr.type", "string")?;
            writer.end_key()?;
        }
        writer.start_directed_graph()?;

        // Graph indices are dense, so a node's position here is its index
        let mut ids = Vec::with_capacity(graph.node_count());
        for node_idx in graph.node_indices() {
            let label = graph[node_idx].to_string();
            let id = writer.start_node()?;
            if self.yed {
                let mut yed = writer.yed()?;
                yed.start_shape_node()?;
                yed.node_label(&label)?;
                yed.border_style(self.line_style)?;
                yed.fill(&self.fill)?;
                yed.shape(self.shape)?;
                yed.end_shape_node()?;
            } else {
                writer.start_data(LABEL_KEY)?;
                writer.text(&label)?;
                writer.end_data()?;
            }
            writer.end_node()?;
            ids.push(id);
        }

        for edge in graph.edge_references() {
            writer.edge(
                &ids[edge.source().index()],
                &ids[edge.target().index()],
            )?;
        }

        writer.end_graph()?;
        writer.end_graphml()?;
        writer.close()?;

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            yed = self.yed,
            "rendered graph as GraphML"
        );
        Ok(())
    }
}
