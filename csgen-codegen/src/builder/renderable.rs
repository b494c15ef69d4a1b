//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! Definitions describe their output as a tree of fragments; the
//! [`CodeBuilder`] turns that tree into text and owns all indentation
//! bookkeeping.

use super::{CodeBuilder, Indent};
use crate::RenderError;

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line at the current indentation (newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// Raw text without indentation or newline.
    Raw(String),
    /// A header line followed by a `{ ... }` block around the body.
    Block {
        header: String,
        body: Vec<CodeFragment>,
    },
    /// A sequence of fragments.
    Sequence(Vec<CodeFragment>),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a blank line fragment.
    pub fn blank() -> Self {
        Self::Blank
    }

    /// Create a raw text fragment.
    pub fn raw(s: impl Into<String>) -> Self {
        Self::Raw(s.into())
    }

    /// Create a block fragment.
    pub fn block(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Block {
            header: header.into(),
            body,
        }
    }

    /// Create a sequence of fragments.
    pub fn sequence(fragments: Vec<CodeFragment>) -> Self {
        Self::Sequence(fragments)
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;

    /// Render this node on its own, starting at `depth` levels of indentation.
    fn render_at(&self, indent: Indent, depth: usize) -> Result<String, RenderError> {
        let mut builder = CodeBuilder::with_depth(indent, depth)?;
        builder.emit(self)?;
        Ok(builder.build())
    }
}

/// Blanket implementation for references.
impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

/// Blanket implementation for Box.
impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.as_ref().to_fragments()
    }
}
