//! Manifest format for csgen.
//!
//! A `csgen.toml` describes one C# file: its namespace, usings and the types
//! it declares. Parsing reports problems as [`miette`] diagnostics pointing
//! into the manifest source.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    ConstructorSpec, FieldSpec, FormatConfig, IndentStyle, IndexerSpec, Manifest, MethodSpec,
    ParamSpec, ParseContext, PropertySpec, TypeSpec, parse_manifest,
};
