//! Streaming XML sink
//!
//! A thin layer over [`quick_xml::Writer`] that accepts attributes after the
//! start call, the way a StAX writer does: the start tag is held back until
//! its first child, its text, or its end arrives. An element closed with no
//! content is written as an empty element (`<port name="p"/>`).
//!
//! The sink also keeps the stack of open element names, so an end call that
//! does not match the innermost open element is rejected instead of written.

use std::borrow::Cow;
use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::{GraphmlError, Result};

/// Conversion of a value to its attribute spelling
pub trait ToAttribute {
    fn to_attribute(&self) -> Cow<'_, str>;
}

impl ToAttribute for str {
    fn to_attribute(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl ToAttribute for String {
    fn to_attribute(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl<T: ToAttribute + ?Sized> ToAttribute for &T {
    fn to_attribute(&self) -> Cow<'_, str> {
        (**self).to_attribute()
    }
}

impl ToAttribute for bool {
    fn to_attribute(&self) -> Cow<'_, str> {
        Cow::Borrowed(if *self { "true" } else { "false" })
    }
}

// Debug formatting keeps the fractional part ("0.0", "34.0")
impl ToAttribute for f64 {
    fn to_attribute(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{self:?}"))
    }
}

macro_rules! impl_to_attribute_for_integers {
    ($($ty:ty),*) => {
        $(
            impl ToAttribute for $ty {
                fn to_attribute(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

impl_to_attribute_for_integers!(i32, i64, u32, u64, usize);

pub struct XmlSink<W: Write> {
    writer: Option<Writer<W>>,
    pending: Option<BytesStart<'static>>,
    open: Vec<String>,
    started: bool,
    root_closed: bool,
    owns_output: bool,
    closed: bool,
}

impl<W: Write> XmlSink<W> {
    /// Compact output. `owns_output` decides whether [`close`](Self::close)
    /// releases the underlying writer.
    pub fn new(output: W, owns_output: bool) -> Self {
        Self::from_writer(Writer::new(output), owns_output)
    }

    /// Output indented by two spaces per nesting level
    pub fn with_indent(output: W, owns_output: bool) -> Self {
        Self::from_writer(Writer::new_with_indent(output, b' ', 2), owns_output)
    }

    fn from_writer(writer: Writer<W>, owns_output: bool) -> Self {
        Self {
            writer: Some(writer),
            pending: None,
            open: Vec::new(),
            started: false,
            root_closed: false,
            owns_output,
            closed: false,
        }
    }

    /// Writes the XML declaration; only valid before anything else
    pub fn write_prologue(&mut self, version: &str, encoding: &str) -> Result<()> {
        if self.started {
            return Err(GraphmlError::MisplacedMarkup {
                message: "the XML declaration must come first".to_string(),
            });
        }
        self.writer()?
            .write_event(Event::Decl(BytesDecl::new(version, Some(encoding), None)))?;
        self.started = true;
        Ok(())
    }

    pub fn start(&mut self, name: &str) -> Result<()> {
        if self.root_closed {
            return Err(GraphmlError::MisplacedMarkup {
                message: format!("<{name}> after the root element was closed"),
            });
        }
        self.flush_pending()?;
        self.writer()?;
        self.started = true;
        self.pending = Some(BytesStart::new(name.to_string()));
        self.open.push(name.to_string());
        Ok(())
    }

    /// Starts `prefix:name`; the prefix must already be declared on an
    /// enclosing element
    pub fn start_prefixed(&mut self, prefix: &str, name: &str) -> Result<()> {
        self.start(&format!("{prefix}:{name}"))
    }

    pub fn attribute<V: ToAttribute + ?Sized>(&mut self, name: &str, value: &V) -> Result<()> {
        self.writer()?;
        let start = self
            .pending
            .as_mut()
            .ok_or_else(|| GraphmlError::MisplacedAttribute {
                name: name.to_string(),
            })?;
        let duplicate = start
            .attributes()
            .with_checks(false)
            .flatten()
            .any(|existing| existing.key.into_inner() == name.as_bytes());
        if duplicate {
            return Err(GraphmlError::DuplicateAttribute {
                name: name.to_string(),
            });
        }
        start.push_attribute((name, value.to_attribute().as_ref()));
        Ok(())
    }

    pub fn text(&mut self, text: &str) -> Result<()> {
        if self.open.is_empty() {
            return Err(GraphmlError::UnbalancedEnd {
                message: "text written outside of any element".to_string(),
            });
        }
        self.flush_pending()?;
        self.writer()?.write_event(Event::Text(BytesText::new(text)))?;
        Ok(())
    }

    /// Closes the innermost open element, which must be `expected`
    pub fn end(&mut self, expected: &str) -> Result<()> {
        self.writer()?;
        match self.open.last() {
            Some(name) if name == expected => {}
            Some(name) => {
                return Err(GraphmlError::UnbalancedEnd {
                    message: format!("expected </{expected}> but <{name}> is the innermost element"),
                });
            }
            None => {
                return Err(GraphmlError::UnbalancedEnd {
                    message: format!("</{expected}> with no element open"),
                });
            }
        }
        self.open.pop();
        self.root_closed = self.open.is_empty();

        let event = match self.pending.take() {
            Some(start) => Event::Empty(start),
            None => Event::End(BytesEnd::new(expected.to_string())),
        };
        self.writer()?.write_event(event)?;
        Ok(())
    }

    /// Names of the currently open elements, outermost first
    pub fn open_elements(&self) -> &[String] {
        &self.open
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer()?.get_mut().flush()?;
        Ok(())
    }

    /// Flushes the output and, if the sink owns it, releases it. Any start
    /// tag still held back is written first. Calling `close` again does
    /// nothing.
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        let pending = self.pending.take();
        let result = match self.writer.as_mut() {
            Some(writer) => {
                let written = match pending {
                    Some(start) => writer.write_event(Event::Start(start)),
                    None => Ok(()),
                };
                written.and_then(|()| writer.get_mut().flush())
            }
            None => Ok(()),
        };

        if self.owns_output {
            self.writer = None;
        }
        result.map_err(GraphmlError::from)
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Gives back the underlying output, unless the sink owned it and was
    /// closed
    pub fn into_inner(self) -> Option<W> {
        self.writer.map(Writer::into_inner)
    }

    fn writer(&mut self) -> Result<&mut Writer<W>> {
        if self.closed {
            return Err(GraphmlError::Closed);
        }
        self.writer.as_mut().ok_or(GraphmlError::Closed)
    }

    fn flush_pending(&mut self) -> Result<()> {
        if let Some(start) = self.pending.take() {
            self.writer()?.write_event(Event::Start(start))?;
        }
        Ok(())
    }
}
