use miette::Diagnostic;
use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T, E = GraphmlError> = std::result::Result<T, E>;

#[derive(Error, Debug, Diagnostic)]
pub enum GraphmlError {
    #[error("GraphML I/O error")]
    #[diagnostic(
        code(graphml::io_error),
        help("The document is incomplete; discard it and write a new one")
    )]
    Io(#[from] std::io::Error),

    #[error("GraphML document has already been closed")]
    #[diagnostic(
        code(graphml::closed),
        help("Create a new writer instead of reusing a closed one")
    )]
    Closed,

    #[error("{extension} support was not enabled")]
    #[diagnostic(
        code(graphml::extension_not_enabled),
        help("Call `for_yed()` on the writer before using `yed()`")
    )]
    ExtensionNotEnabled { extension: &'static str },

    #[error("`{operation}` called with no enclosing block open")]
    #[diagnostic(
        code(graphml::no_open_block),
        help("Open a shape node, UML class node or UML section before adding child elements")
    )]
    NoOpenBlock { operation: &'static str },

    #[error("`{operation}` called while another block is still open")]
    #[diagnostic(
        code(graphml::nested_block),
        help("Close the current shape node, UML class node or UML section first")
    )]
    NestedBlock { operation: &'static str },

    #[error("No {kind} id was registered for object {object}")]
    #[diagnostic(
        code(graphml::unknown_object),
        help("Register the object with `start_node_for` or `start_graph_for` first")
    )]
    UnknownObject { kind: &'static str, object: String },

    #[error("Attribute '{name}' written outside of a start tag")]
    #[diagnostic(
        code(graphml::misplaced_attribute),
        help("Attributes must follow their element's start call, before any child content")
    )]
    MisplacedAttribute { name: String },

    #[error("Attribute '{name}' is already set on this element")]
    #[diagnostic(
        code(graphml::duplicate_attribute),
        help("Each attribute may appear only once per start tag")
    )]
    DuplicateAttribute { name: String },

    #[error("Misplaced markup: {message}")]
    #[diagnostic(
        code(graphml::misplaced_markup),
        help("A document has one XML declaration, written first, and exactly one root element")
    )]
    MisplacedMarkup { message: String },

    #[error("Cannot close element: {message}")]
    #[diagnostic(
        code(graphml::unbalanced_end),
        help("Every start call must be matched by exactly one end call, in reverse order")
    )]
    UnbalancedEnd { message: String },

    #[error("Cannot close document with open elements: {}", .open.join(" > "))]
    #[diagnostic(
        code(graphml::unclosed_elements),
        help("Close every node, graph and data block before ending the document")
    )]
    UnclosedElements { open: Vec<String> },

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(graphml::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}
