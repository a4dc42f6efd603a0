//! # Graph Document Writer
//!
//! [`GraphmlWriter`] streams a GraphML document through an [`XmlSink`]. It
//! hands out graph ids (`G0`, `G1`, ...) and node ids (`N0`, `N1`, ...) in
//! call order, can record those ids under caller [`ObjectId`]s, and buffers
//! every edge until [`end_graphml`](GraphmlWriter::end_graphml), where they
//! are written after all node content in the order they were declared.
//!
//! ## Example
//!
//! ```
//! use graphml_writer::core::EdgeStyle;
//! use graphml_writer::writer::GraphmlWriter;
//!
//! # fn main() -> graphml_writer::error::Result<()> {
//! let mut writer = GraphmlWriter::new(Vec::new());
//! writer.start_graphml()?;
//! writer.start_graph(EdgeStyle::Directed)?;
//!
//! let a = writer.start_node()?;
//! writer.end_node()?;
//! let b = writer.start_node()?;
//! writer.end_node()?;
//! writer.edge(&a, &b)?;
//!
//! writer.end_graph()?;
//! writer.end_graphml()?;
//! writer.close()?;
//!
//! let xml = String::from_utf8(writer.into_inner().unwrap()).unwrap();
//! assert!(xml.contains(r#"<edge source="N0" target="N1"/>"#));
//! # Ok(())
//! # }
//! ```

mod edge;

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub use edge::{EdgeEnd, PendingEdge};
use edge::NodeRef;
use tracing::{debug, trace, warn};

use crate::constants::graphml::{
    ENCODING, GRAPH_ID_PREFIX, NAMESPACE, NODE_ID_PREFIX, SCHEMA_LOCATION, XML_VERSION,
    XSI_NAMESPACE,
};
use crate::core::{EdgeStyle, GraphmlElement, ObjectId};
use crate::error::{GraphmlError, Result};
use crate::xml::{ToAttribute, XmlSink};
use crate::yed::{GraphmlExtension, Yed, YedExtension};

pub struct GraphmlWriter<W: Write> {
    sink: XmlSink<W>,
    graph_ids: HashMap<ObjectId, String>,
    node_ids: HashMap<ObjectId, String>,
    edges: Vec<PendingEdge>,
    next_graph_id: usize,
    next_node_id: usize,
    yed: Option<YedExtension>,
}

impl<W: Write> GraphmlWriter<W> {
    /// Writer over a caller-managed output; [`close`](Self::close) flushes it
    /// but leaves it to the caller
    pub fn new(output: W) -> Self {
        Self::with_ownership(output, false)
    }

    /// `close` controls whether [`close`](Self::close) releases the output
    pub fn with_ownership(output: W, close: bool) -> Self {
        Self::from_sink(XmlSink::new(output, close))
    }

    /// Like [`with_ownership`](Self::with_ownership), indenting nested
    /// elements
    pub fn indented(output: W, close: bool) -> Self {
        Self::from_sink(XmlSink::with_indent(output, close))
    }

    fn from_sink(sink: XmlSink<W>) -> Self {
        Self {
            sink,
            graph_ids: HashMap::new(),
            node_ids: HashMap::new(),
            edges: Vec::new(),
            next_graph_id: 0,
            next_node_id: 0,
            yed: None,
        }
    }

    /// Enables the yEd extension
    pub fn for_yed(mut self) -> Self {
        self.enable_yed();
        self
    }

    pub fn enable_yed(&mut self) -> &mut Self {
        if self.yed.is_none() {
            self.yed = Some(YedExtension::new());
        }
        self
    }

    /// Access to the yEd extension operations
    pub fn yed(&mut self) -> Result<Yed<'_, W>> {
        match self.yed.as_mut() {
            Some(extension) => Ok(Yed::new(&mut self.sink, extension)),
            None => Err(GraphmlError::ExtensionNotEnabled { extension: "yEd" }),
        }
    }

    pub fn start_graphml(&mut self) -> Result<()> {
        self.sink.write_prologue(XML_VERSION, ENCODING)?;

        self.sink.start("graphml")?;
        self.sink.attribute("xmlns", NAMESPACE)?;
        self.sink.attribute("xmlns:xsi", XSI_NAMESPACE)?;
        self.sink.attribute("xsi:schemaLocation", SCHEMA_LOCATION)?;

        if let Some(extension) = self.yed.as_mut() {
            extension.add_namespaces(&mut self.sink)?;
            extension.add_meta_info(&mut self.sink)?;
        }

        debug!(yed = self.yed.is_some(), "started GraphML document");
        Ok(())
    }

    /// Writes every pending edge, then closes the root element
    pub fn end_graphml(&mut self) -> Result<()> {
        match self.sink.open_elements() {
            [root] if root == "graphml" => {}
            [] => {
                return Err(GraphmlError::UnbalancedEnd {
                    message: "</graphml> with no document open".to_string(),
                });
            }
            open => {
                return Err(GraphmlError::UnclosedElements {
                    open: open.to_vec(),
                });
            }
        }

        let edges = std::mem::take(&mut self.edges);
        debug!(count = edges.len(), "writing deferred edges");
        for edge in &edges {
            self.write_edge(edge)?;
        }

        self.sink.end("graphml")?;
        debug!(
            graphs = self.next_graph_id,
            nodes = self.next_node_id,
            "finished GraphML document"
        );
        Ok(())
    }

    pub fn start_key(&mut self, id: &str, element: GraphmlElement) -> Result<()> {
        start_key(&mut self.sink, id, element)
    }

    pub fn end_key(&mut self) -> Result<()> {
        self.sink.end("key")
    }

    pub fn start_directed_graph(&mut self) -> Result<String> {
        self.start_graph(EdgeStyle::Directed)
    }

    pub fn start_directed_graph_for(&mut self, object: ObjectId) -> Result<String> {
        self.start_graph_for(object, EdgeStyle::Directed)
    }

    pub fn start_undirected_graph(&mut self) -> Result<String> {
        self.start_graph(EdgeStyle::Undirected)
    }

    pub fn start_undirected_graph_for(&mut self, object: ObjectId) -> Result<String> {
        self.start_graph_for(object, EdgeStyle::Undirected)
    }

    /// Opens `<graph>` and returns its id
    pub fn start_graph(&mut self, edge_style: EdgeStyle) -> Result<String> {
        self.sink.start("graph")?;
        let id = format!("{GRAPH_ID_PREFIX}{}", self.next_graph_id);
        self.next_graph_id += 1;

        self.sink.attribute("id", &id)?;
        self.sink.attribute("edgedefault", edge_style.id())?;
        trace!(%id, %edge_style, "started graph");
        Ok(id)
    }

    /// Opens `<graph>` and records its id under `object`
    pub fn start_graph_for(&mut self, object: ObjectId, edge_style: EdgeStyle) -> Result<String> {
        let id = self.start_graph(edge_style)?;
        self.graph_ids.insert(object, id.clone());
        Ok(id)
    }

    pub fn end_graph(&mut self) -> Result<()> {
        self.sink.end("graph")
    }

    /// Opens `<node>` and returns its id
    pub fn start_node(&mut self) -> Result<String> {
        self.sink.start("node")?;
        let id = format!("{NODE_ID_PREFIX}{}", self.next_node_id);
        self.next_node_id += 1;

        self.sink.attribute("id", &id)?;
        trace!(%id, "started node");
        Ok(id)
    }

    /// Opens `<node>` and records its id under `object`
    pub fn start_node_for(&mut self, object: ObjectId) -> Result<String> {
        let id = self.start_node()?;
        self.node_ids.insert(object, id.clone());
        Ok(id)
    }

    pub fn end_node(&mut self) -> Result<()> {
        self.sink.end("node")
    }

    pub fn start_data(&mut self, key: &str) -> Result<()> {
        start_data(&mut self.sink, key)
    }

    pub fn end_data(&mut self) -> Result<()> {
        self.sink.end("data")
    }

    /// Writes `<port name=".."/>` right away
    pub fn port(&mut self, name: &str) -> Result<()> {
        self.sink.start("port")?;
        self.sink.attribute("name", name)?;
        self.sink.end("port")
    }

    /// Adds an attribute to the element started last, for custom keys and
    /// data not covered by the typed operations
    pub fn attribute<V: ToAttribute + ?Sized>(&mut self, name: &str, value: &V) -> Result<()> {
        self.sink.attribute(name, value)
    }

    /// Writes escaped character data into the innermost open element
    pub fn text(&mut self, text: &str) -> Result<()> {
        self.sink.text(text)
    }

    /// Queues an edge without a `directed` attribute
    pub fn edge(&mut self, source: impl Into<EdgeEnd>, target: impl Into<EdgeEnd>) -> Result<()> {
        self.edge_with_style(source, target, None)
    }

    pub fn directed_edge(
        &mut self,
        source: impl Into<EdgeEnd>,
        target: impl Into<EdgeEnd>,
    ) -> Result<()> {
        self.edge_with_style(source, target, Some(EdgeStyle::Directed))
    }

    pub fn undirected_edge(
        &mut self,
        source: impl Into<EdgeEnd>,
        target: impl Into<EdgeEnd>,
    ) -> Result<()> {
        self.edge_with_style(source, target, Some(EdgeStyle::Undirected))
    }

    /// Queues an edge; it is written when the document ends
    pub fn edge_with_style(
        &mut self,
        source: impl Into<EdgeEnd>,
        target: impl Into<EdgeEnd>,
        style: Option<EdgeStyle>,
    ) -> Result<()> {
        if self.sink.is_closed() {
            return Err(GraphmlError::Closed);
        }

        let (source, source_port) = self.resolve(source.into())?;
        let (target, target_port) = self.resolve(target.into())?;
        self.edges.push(PendingEdge {
            source,
            source_port,
            target,
            target_port,
            style,
        });
        Ok(())
    }

    /// Edges queued since the document started, in declaration order
    pub fn pending_edges(&self) -> &[PendingEdge] {
        &self.edges
    }

    pub fn graph_id(&self, object: ObjectId) -> Option<&str> {
        self.graph_ids.get(&object).map(String::as_str)
    }

    pub fn node_id(&self, object: ObjectId) -> Option<&str> {
        self.node_ids.get(&object).map(String::as_str)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()
    }

    /// Flushes the output and releases it when the writer owns it. Further
    /// writes fail with [`GraphmlError::Closed`]; closing twice is a no-op.
    pub fn close(&mut self) -> Result<()> {
        if self.sink.is_closed() {
            return Ok(());
        }
        if !self.edges.is_empty() {
            warn!(
                count = self.edges.len(),
                "closing GraphML document with edges that were never written"
            );
        }
        self.sink.close()?;
        debug!("closed GraphML writer");
        Ok(())
    }

    /// The underlying output, unless the writer owned it and was closed
    pub fn into_inner(self) -> Option<W> {
        self.sink.into_inner()
    }

    fn resolve(&self, end: EdgeEnd) -> Result<(String, Option<String>)> {
        let id = match end.node {
            NodeRef::Id(id) => id,
            NodeRef::Object(object) => self
                .node_ids
                .get(&object)
                .cloned()
                .ok_or_else(|| GraphmlError::UnknownObject {
                    kind: "node",
                    object: object.to_string(),
                })?,
        };
        Ok((id, end.port))
    }

    // Port attributes are camelCase, as yEd reads them
    fn write_edge(&mut self, edge: &PendingEdge) -> Result<()> {
        self.sink.start("edge")?;
        self.sink.attribute("source", &edge.source)?;
        if let Some(port) = &edge.source_port {
            self.sink.attribute("sourcePort", port)?;
        }
        self.sink.attribute("target", &edge.target)?;
        if let Some(port) = &edge.target_port {
            self.sink.attribute("targetPort", port)?;
        }
        if let Some(style) = edge.style {
            self.sink.attribute("directed", &style.is_directed())?;
        }
        self.sink.end("edge")
    }
}

impl GraphmlWriter<BufWriter<File>> {
    /// Writer that owns a newly created file
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::with_ownership(BufWriter::new(file), true))
    }

    /// Creates the file, runs `body` and closes the writer whether or not
    /// `body` succeeded. The first error wins.
    pub fn write_file<F>(path: impl AsRef<Path>, body: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let writer = Self::create(path)?;
        Self::run_scoped(writer, body)
    }

    /// [`write_file`](Self::write_file) with indented output
    pub fn write_file_indented<F>(path: impl AsRef<Path>, body: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let file = File::create(path)?;
        let writer = Self::indented(BufWriter::new(file), true);
        Self::run_scoped(writer, body)
    }

    fn run_scoped<F>(mut writer: Self, body: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let result = body(&mut writer);
        let closed = writer.close();
        result.and(closed)
    }
}

pub(crate) fn start_key<W: Write>(
    sink: &mut XmlSink<W>,
    id: &str,
    element: GraphmlElement,
) -> Result<()> {
    sink.start("key")?;
    sink.attribute("id", id)?;
    sink.attribute("for", element.id())
}

pub(crate) fn start_data<W: Write>(sink: &mut XmlSink<W>, key: &str) -> Result<()> {
    sink.start("data")?;
    sink.attribute("key", key)
}
