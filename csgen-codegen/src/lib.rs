//! Shared code generation utilities for csgen.
//!
//! This crate provides the language-agnostic text machinery used by
//! `csgen-csharp`: an append-only buffer that tracks indentation depth,
//! the indentation style, and the fragment representation definitions
//! render themselves into.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, Indent)

pub mod builder;
mod error;

pub use builder::{
    CodeBuilder, CodeFragment, Indent, MAX_INDENT_DEPTH, MAX_INDENT_WIDTH, Renderable,
};
pub use error::RenderError;
