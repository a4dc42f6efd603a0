//! Basics command executor

use std::io::Write;

use miette::Result;

use crate::config::DemoOptions;
use crate::error::Result as GraphmlResult;
use crate::executors::{CommandExecutor, write_demo};
use crate::writer::GraphmlWriter;
use crate::yed::{YedLineStyle, YedShape};

pub const FILE_NAME: &str = "yed-basics.graphml";

pub struct BasicsExecutor;

impl CommandExecutor for BasicsExecutor {
    type Config = DemoOptions;

    fn execute(config: Self::Config) -> Result<()> {
        write_demo(&config, FILE_NAME, write_basics)
    }
}

/// Writes the basics document; the writer must have yEd enabled
pub fn write_basics<W: Write>(writer: &mut GraphmlWriter<W>) -> GraphmlResult<()> {
    writer.start_graphml()?;
    writer.start_directed_graph()?;

    let alpha = writer.start_node()?;
    let mut yed = writer.yed()?;
    yed.start_shape_node()?;
    yed.node_label("Alpha")?;
    yed.border_style(YedLineStyle::Dotted)?;
    yed.geometry(50.0, 50.0)?;
    yed.fill("#0000ff")?;
    yed.shape(YedShape::Octagon)?;
    yed.end_shape_node()?;
    writer.end_node()?;

    let mut others = Vec::new();
    for label in ["Beta", "Gamma", "Delta"] {
        let id = writer.start_node()?;
        let mut yed = writer.yed()?;
        yed.start_shape_node()?;
        yed.node_label(label)?;
        yed.end_shape_node()?;
        writer.end_node()?;
        others.push(id);
    }

    for id in &others {
        writer.edge(&alpha, id)?;
    }

    writer.end_graph()?;
    writer.end_graphml()
}
