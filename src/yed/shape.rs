//! yEd shape and line style names

use std::fmt;

/// Outline of a yEd shape node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YedShape {
    Rectangle,
    RoundRectangle,
    Ellipse,
    Parallelogram,
    Hexagon,
    Triangle,
    Rectangle3d,
    Octagon,
    Diamond,
    Trapezoid,
    Trapezoid2,
}

impl YedShape {
    pub fn id(self) -> &'static str {
        match self {
            YedShape::Rectangle => "rectangle",
            YedShape::RoundRectangle => "roundrectangle",
            YedShape::Ellipse => "ellipse",
            YedShape::Parallelogram => "parallelogram",
            YedShape::Hexagon => "hexagon",
            YedShape::Triangle => "triangle",
            YedShape::Rectangle3d => "rectangle3d",
            YedShape::Octagon => "octagon",
            YedShape::Diamond => "diamond",
            YedShape::Trapezoid => "trapezoid",
            YedShape::Trapezoid2 => "trapezoid2",
        }
    }
}

impl fmt::Display for YedShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Border line pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum YedLineStyle {
    #[default]
    Line,
    Dotted,
    Dashed,
    DashedDotted,
}

impl YedLineStyle {
    pub fn id(self) -> &'static str {
        match self {
            YedLineStyle::Line => "line",
            YedLineStyle::Dotted => "dotted",
            YedLineStyle::Dashed => "dashed",
            YedLineStyle::DashedDotted => "dashed_dotted",
        }
    }
}

impl fmt::Display for YedLineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
