//! Node size estimation for yEd shape nodes

use crate::constants::yed::geometry::{BASE, UNIT};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Size {
    Estimated,
    Fixed { width: f64, height: f64 },
}

/// Width and height of the node currently being written
///
/// An estimated geometry derives its size from the text added so far:
/// `lines * 8 + 10` high and `max_chars * 8 + 10` wide. A fixed geometry
/// reports the size it was given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    num_lines: u32,
    max_num_chars: u32,
    size: Size,
}

impl Geometry {
    pub fn estimated() -> Self {
        Self {
            num_lines: 0,
            max_num_chars: 0,
            size: Size::Estimated,
        }
    }

    pub fn fixed(width: f64, height: f64) -> Self {
        Self {
            num_lines: 0,
            max_num_chars: 0,
            size: Size::Fixed { width, height },
        }
    }

    pub fn add_line(&mut self) {
        self.num_lines += 1;
    }

    /// Raises the widest-line mark to `num_chars`
    pub fn adjust_character_width(&mut self, num_chars: u32) {
        self.max_num_chars = self.max_num_chars.max(num_chars);
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self.size, Size::Fixed { .. })
    }

    pub fn num_lines(&self) -> u32 {
        self.num_lines
    }

    pub fn width(&self) -> f64 {
        match self.size {
            Size::Estimated => f64::from(self.max_num_chars) * UNIT + BASE,
            Size::Fixed { width, .. } => width,
        }
    }

    pub fn height(&self) -> f64 {
        match self.size {
            Size::Estimated => f64::from(self.num_lines) * UNIT + BASE,
            Size::Fixed { height, .. } => height,
        }
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::estimated()
    }
}
