//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};
use crate::RenderError;

/// Append-only text buffer that tracks the current indentation depth.
///
/// Plain appends never fail. Only the operations that change depth
/// ([`open_block`](Self::open_block), [`close_block`](Self::close_block)) and
/// the constructors check the depth against [`MAX_INDENT_DEPTH`], so the
/// indentation written by every other method is always valid.
///
/// # Example
///
/// ```
/// use csgen_codegen::{CodeBuilder, Indent};
///
/// let mut builder = CodeBuilder::new(Indent::Tab);
/// builder.push_indented_line("void Reset()");
/// builder.open_block()?;
/// builder.push_indented_line("count = 0;");
/// builder.close_block()?;
///
/// assert_eq!(builder.build(), "void Reset()\n{\n\tcount = 0;\n}\n");
/// # Ok::<(), csgen_codegen::RenderError>(())
/// ```
///
/// [`MAX_INDENT_DEPTH`]: super::MAX_INDENT_DEPTH
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    prefix: String,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder at depth 0.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            prefix: String::new(),
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder starting at the given depth.
    pub fn with_depth(indent: Indent, depth: usize) -> Result<Self, RenderError> {
        Ok(Self {
            indent_level: depth,
            indent,
            prefix: indent.prefix(depth)?,
            buffer: String::new(),
        })
    }

    /// Create a new CodeBuilder with tab indentation.
    pub fn tabs() -> Self {
        Self::new(Indent::Tab)
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn spaces() -> Self {
        Self::new(Indent::SPACES_4)
    }

    /// Add raw text without indentation or newline.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Add each part in order; empty parts add nothing.
    pub fn push_all<I, S>(&mut self, parts: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for part in parts {
            self.buffer.push_str(part.as_ref());
        }
        self
    }

    /// Add the current indentation followed by `s`.
    pub fn push_indented(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.push_raw(s)
    }

    /// Add the current indentation followed by each part.
    pub fn push_indented_all<I, S>(&mut self, parts: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.write_indent();
        self.push_all(parts)
    }

    /// Add `s` followed by a newline.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add each part followed by a newline.
    pub fn push_line_all<I, S>(&mut self, parts: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.push_all(parts);
        self.buffer.push('\n');
        self
    }

    /// Add a line of code with current indentation.
    ///
    /// An empty line gets no indentation, so the output never carries
    /// trailing whitespace.
    pub fn push_indented_line(&mut self, s: &str) -> &mut Self {
        if !s.is_empty() {
            self.write_indent();
        }
        self.push_line(s)
    }

    /// Add the current indentation, each part, then a newline.
    pub fn push_indented_line_all<I, S>(&mut self, parts: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let line: String = parts.into_iter().map(|p| p.as_ref().to_owned()).collect();
        self.push_indented_line(&line)
    }

    /// Add a blank line (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        self.push_blank_lines(1)
    }

    /// Add `count` blank lines.
    pub fn push_blank_lines(&mut self, count: usize) -> &mut Self {
        for _ in 0..count {
            self.buffer.push('\n');
        }
        self
    }

    /// Add `{` at the current indentation, then indent one level.
    ///
    /// Fails when the next level would exceed the depth limit, even if nothing
    /// is written inside the block. Block fragments with an empty body never
    /// open a level, so `{` and `}` can still be written at the deepest level.
    pub fn open_block(&mut self) -> Result<&mut Self, RenderError> {
        let next = self.indent.prefix(self.indent_level + 1)?;
        self.push_indented_line("{");
        self.indent_level += 1;
        self.prefix = next;
        Ok(self)
    }

    /// Dedent one level, then add `}` at the new indentation.
    pub fn close_block(&mut self) -> Result<&mut Self, RenderError> {
        let level = self
            .indent_level
            .checked_sub(1)
            .ok_or(RenderError::UnbalancedBlock)?;
        self.prefix = self.indent.prefix(level)?;
        self.indent_level = level;
        self.push_indented_line("}");
        Ok(self)
    }

    /// Emit a Renderable node.
    pub fn emit<R: Renderable + ?Sized>(&mut self, node: &R) -> Result<&mut Self, RenderError> {
        for fragment in node.to_fragments() {
            self.apply_fragment(&fragment)?;
        }
        Ok(self)
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: &CodeFragment) -> Result<(), RenderError> {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_indented_line(s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Raw(s) => {
                self.push_raw(s);
            }
            CodeFragment::Block { header, body } if body.is_empty() => {
                self.push_indented_line(header);
                self.push_indented_line("{");
                self.push_indented_line("}");
            }
            CodeFragment::Block { header, body } => {
                self.push_indented_line(header);
                self.open_block()?;
                for f in body {
                    self.apply_fragment(f)?;
                }
                self.close_block()?;
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f)?;
                }
            }
        }
        Ok(())
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Get the indentation style.
    pub fn indent(&self) -> Indent {
        self.indent
    }

    /// Check if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        self.buffer.push_str(&self.prefix);
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::tabs()
    }
}
