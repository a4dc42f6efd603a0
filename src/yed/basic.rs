//! Prepackaged shape node descriptors
//!
//! A [`BasicNode`] bundles the common visual choices for a yEd shape node:
//! label, fill color, outline shape, border style and size. Descriptors are
//! plain values; a variant is derived from a prototype with the `with_*`
//! methods instead of being mutated in place.

use std::io::Write;

use crate::core::ObjectId;
use crate::error::Result;
use crate::writer::GraphmlWriter;
use crate::yed::{YedLineStyle, YedShape};

/// Fill colors as yEd expects them
pub mod colors {
    pub const BLACK: &str = "#000000";
    pub const BLUE: &str = "#0000ff";
    pub const CYAN: &str = "#00ffff";
    pub const GRAY: &str = "#808080";
    pub const GREEN: &str = "#00ff00";
    pub const MAGENTA: &str = "#ff00ff";
    pub const ORANGE: &str = "#ffc800";
    pub const PINK: &str = "#ffafaf";
    pub const RED: &str = "#ff0000";
    pub const WHITE: &str = "#ffffff";
    pub const YELLOW: &str = "#ffff00";
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BasicNode {
    label: Option<String>,
    color: Option<String>,
    shape: Option<YedShape>,
    line_style: Option<YedLineStyle>,
    dimension: Option<(f64, f64)>,
}

impl BasicNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn labeled(label: impl Into<String>) -> Self {
        Self::new().with_label(label)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_shape(mut self, shape: YedShape) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn with_line_style(mut self, line_style: YedLineStyle) -> Self {
        self.line_style = Some(line_style);
        self
    }

    pub fn with_dimension(mut self, width: f64, height: f64) -> Self {
        self.dimension = Some((width, height));
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn shape(&self) -> Option<YedShape> {
        self.shape
    }

    pub fn line_style(&self) -> Option<YedLineStyle> {
        self.line_style
    }

    pub fn dimension(&self) -> Option<(f64, f64)> {
        self.dimension
    }

    /// Writes this node as a yEd shape node, registered under `object` when
    /// given, and returns its id
    pub fn write<W: Write>(
        &self,
        writer: &mut GraphmlWriter<W>,
        object: Option<ObjectId>,
    ) -> Result<String> {
        let id = match object {
            Some(object) => writer.start_node_for(object)?,
            None => writer.start_node()?,
        };

        let mut yed = writer.yed()?;
        yed.start_shape_node()?;
        if let Some(label) = &self.label {
            yed.node_label(label)?;
        }
        if let Some(line_style) = self.line_style {
            yed.border_style(line_style)?;
        }
        if let Some((width, height)) = self.dimension {
            yed.geometry(width, height)?;
        }
        if let Some(color) = &self.color {
            yed.fill(color)?;
        }
        if let Some(shape) = self.shape {
            yed.shape(shape)?;
        }
        yed.end_shape_node()?;

        writer.end_node()?;
        Ok(id)
    }
}
