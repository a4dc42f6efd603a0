//! Core type definitions
//!
//! This module contains the basic value types used throughout the crate, with
//! minimal logic - focusing on their GraphML spelling.

use std::fmt;

/// Directedness of an edge, or of a graph's default for its edges
///
/// An edge whose style is left unspecified (`None` where an
/// `Option<EdgeStyle>` is taken) omits the `directed` attribute entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeStyle {
    Directed,
    Undirected,
}

impl EdgeStyle {
    /// Keyword used by the `edgedefault` attribute of `<graph>`
    pub fn id(self) -> &'static str {
        match self {
            EdgeStyle::Directed => "directed",
            EdgeStyle::Undirected => "undirected",
        }
    }

    /// Value of the `directed` attribute of `<edge>`
    pub fn is_directed(self) -> bool {
        matches!(self, EdgeStyle::Directed)
    }
}

impl fmt::Display for EdgeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Element a `<key>` declaration applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphmlElement {
    All,
    Graphml,
    Graph,
    Node,
    Edge,
    Hyperedge,
    Port,
    Endpoint,
}

impl GraphmlElement {
    /// Literal expected in the `for` attribute
    pub fn id(self) -> &'static str {
        match self {
            GraphmlElement::All => "all",
            GraphmlElement::Graphml => "graphml",
            GraphmlElement::Graph => "graph",
            GraphmlElement::Node => "node",
            GraphmlElement::Edge => "edge",
            GraphmlElement::Hyperedge => "hyperedge",
            GraphmlElement::Port => "port",
            GraphmlElement::Endpoint => "endpoint",
        }
    }
}

impl fmt::Display for GraphmlElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Opaque identity of a caller-side object
///
/// Graph and node ids can be recorded under an `ObjectId` so callers refer to
/// their own domain objects instead of tracking `"N<n>"` strings. Identity is
/// never derived from value equality: two equal values get distinct ids as
/// long as they are distinct objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Identity taken from the address of a live value.
    ///
    /// Stable for as long as `value` is neither moved nor dropped. Zero-sized
    /// values share addresses and must use [`ObjectId::new`] instead.
    pub fn of<T: ?Sized>(value: &T) -> Self {
        Self(std::ptr::from_ref(value).cast::<()>() as usize as u64)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for ObjectId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<usize> for ObjectId {
    fn from(raw: usize) -> Self {
        Self(raw as u64)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
