//! Core data types and structures
//!
//! This module contains the small value types shared by the writer, the yEd
//! extension and the renderer, separated from the emission logic.

pub mod types;

pub use types::*;
