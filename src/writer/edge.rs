//! Edge endpoints and the deferred edge record

use crate::core::{EdgeStyle, ObjectId};

/// Node an edge endpoint refers to, before resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NodeRef {
    Id(String),
    Object(ObjectId),
}

/// One end of an edge: a node, given by id or by registered object, and an
/// optional port on it
///
/// ```
/// use graphml_writer::core::ObjectId;
/// use graphml_writer::writer::EdgeEnd;
///
/// let by_id = EdgeEnd::from("N0");
/// let on_port = EdgeEnd::node("N1").port("in");
/// let by_object = EdgeEnd::object(ObjectId::new(42)).port("out");
/// # let _ = (by_id, on_port, by_object);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeEnd {
    pub(crate) node: NodeRef,
    pub(crate) port: Option<String>,
}

impl EdgeEnd {
    pub fn node(id: impl Into<String>) -> Self {
        Self {
            node: NodeRef::Id(id.into()),
            port: None,
        }
    }

    pub fn object(object: ObjectId) -> Self {
        Self {
            node: NodeRef::Object(object),
            port: None,
        }
    }

    pub fn port(mut self, name: impl Into<String>) -> Self {
        self.port = Some(name.into());
        self
    }
}

impl From<&str> for EdgeEnd {
    fn from(id: &str) -> Self {
        Self::node(id)
    }
}

impl From<String> for EdgeEnd {
    fn from(id: String) -> Self {
        Self::node(id)
    }
}

impl From<&String> for EdgeEnd {
    fn from(id: &String) -> Self {
        Self::node(id.as_str())
    }
}

impl From<ObjectId> for EdgeEnd {
    fn from(object: ObjectId) -> Self {
        Self::object(object)
    }
}

/// An `<edge>` waiting for the document to close
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEdge {
    pub source: String,
    pub source_port: Option<String>,
    pub target: String,
    pub target_port: Option<String>,
    pub style: Option<EdgeStyle>,
}

impl PendingEdge {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn style(&self) -> Option<EdgeStyle> {
        self.style
    }
}
