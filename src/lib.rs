//! # GraphML Writer - Stream GraphML and yEd Documents
//!
//! GraphML Writer produces GraphML documents incrementally: callers open and
//! close graphs and nodes in document order, attach data, and declare edges
//! whenever it is convenient. Edges are held back and written once, after all
//! node content, when the document ends.
//!
//! ## Main Components
//!
//! - **Writer**: the streaming document writer with id allocation, object
//!   identity tracking and deferred edges
//! - **Yed**: the yEd vendor extension with its key schema, shape nodes, UML
//!   class nodes and size estimation
//! - **Graph**: renders an in-memory `petgraph` graph as a document
//! - **Xml**: the element sink underneath, which enforces nesting
//!
//! ## Usage
//!
//! ### Example: Writing a yEd Document to a File
//!
//! ```no_run
//! use graphml_writer::writer::GraphmlWriter;
//! use graphml_writer::yed::{BasicNode, YedShape, colors};
//!
//! # fn main() -> graphml_writer::Result<()> {
//! GraphmlWriter::write_file("shapes.graphml", |writer| {
//!     writer.enable_yed();
//!     writer.start_graphml()?;
//!     writer.start_directed_graph()?;
//!
//!     let hub = BasicNode::labeled("Hub")
//!         .with_color(colors::YELLOW)
//!         .with_shape(YedShape::Hexagon);
//!     let hub = hub.write(writer, None)?;
//!
//!     for label in ["North", "South"] {
//!         let spoke = BasicNode::labeled(label).write(writer, None)?;
//!         writer.directed_edge(&hub, &spoke)?;
//!     }
//!
//!     writer.end_graph()?;
//!     writer.end_graphml()
//! })?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Keying Nodes by Object Identity
//!
//! ```
//! use graphml_writer::core::ObjectId;
//! use graphml_writer::writer::GraphmlWriter;
//!
//! struct Service {
//!     name: &'static str,
//! }
//!
//! # fn main() -> graphml_writer::Result<()> {
//! let services = [Service { name: "api" }, Service { name: "db" }];
//!
//! let mut writer = GraphmlWriter::new(Vec::new());
//! writer.start_graphml()?;
//! writer.start_undirected_graph()?;
//! for service in &services {
//!     writer.start_node_for(ObjectId::of(service))?;
//!     writer.end_node()?;
//! }
//! writer.edge(ObjectId::of(&services[0]), ObjectId::of(&services[1]))?;
//! writer.end_graph()?;
//! writer.end_graphml()?;
//! writer.close()?;
//!
//! let xml = String::from_utf8(writer.into_inner().unwrap()).unwrap();
//! assert!(xml.contains(r#"<edge source="N0" target="N1"/>"#));
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod executors;
pub mod graph;
pub mod writer;
pub mod xml;
pub mod yed;

pub use error::{GraphmlError, Result};

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
