//! # Configuration Module
//!
//! Configuration structures for the demo commands, built through the
//! [`ConfigBuilder`](crate::common::ConfigBuilder) trait.
//!
//! ## Example
//!
//! ```
//! use graphml_writer::common::ConfigBuilder;
//! use graphml_writer::config::DemoOptions;
//!
//! let options = DemoOptions::builder()
//!     .with_output_dir("target/demo".into())
//!     .with_indent(true)
//!     .build()
//!     .unwrap();
//! assert!(options.output_file("elif.graphml").ends_with("elif.graphml"));
//! ```

pub mod demo;

pub use demo::DemoOptions;
