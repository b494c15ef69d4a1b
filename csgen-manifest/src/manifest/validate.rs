//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use csgen_core::{ESCAPE_PREFIX, IdentifierRules, is_reserved_keyword, is_valid_identifier};
use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Holds the manifest source and the path of type names leading to the value
/// being checked, so errors can say where they happened.
///
/// # Example
///
/// ```
/// use csgen_core::IdentifierRules;
/// use csgen_manifest::ParseContext;
///
/// let ctx = ParseContext::new("namespace = \"Foo\"", "csgen.toml");
/// assert!(ctx.validate_name("Foo", "namespace", "namespace", IdentifierRules::NAMESPACE).is_ok());
///
/// let nested = ctx.push("Player");
/// assert!(nested.validate_name("do-work", "method name", "name", IdentifierRules::PLAIN).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    pub fn src(&self) -> &str {
        self.source.src()
    }

    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Describe `kind` for error messages, e.g. "method name in 'Player'".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a quoted string value in the source.
    pub fn find_span(&self, value: &str) -> Option<SourceSpan> {
        self.find_name_spans(value).into_iter().next()
    }

    /// Spans of every occurrence of `value` as a quoted string, in source order.
    ///
    /// `name = "value"` assignments come first, then any other quoted
    /// occurrence (arrays, inline tables).
    pub fn find_name_spans(&self, value: &str) -> Vec<SourceSpan> {
        let src = self.source.src();
        let mut spans: Vec<SourceSpan> = quoted_offsets(src, &format!("name = \"{value}\""))
            .map(|pos| SourceSpan::from((pos + "name = \"".len(), value.len())))
            .collect();

        if spans.is_empty() {
            spans = quoted_offsets(src, &format!("\"{value}\""))
                .map(|pos| SourceSpan::from((pos + 1, value.len())))
                .collect();
        }
        spans
    }

    /// Find the span of a bare `key = ...` assignment.
    pub fn find_key_span(&self, key: &str) -> Option<SourceSpan> {
        let src = self.source.src();
        src.match_indices(key)
            .find(|(pos, _)| {
                let at_line_start = src[..*pos].ends_with('\n') || *pos == 0;
                let rest = src[pos + key.len()..].trim_start();
                at_line_start && rest.starts_with('=')
            })
            .map(|(pos, _)| SourceSpan::from((pos, key.len())))
    }

    /// Require `value` to contain something other than whitespace.
    ///
    /// `key` is the TOML key the value was read from; it locates the blank
    /// value inside the current type's table for the error label.
    pub fn require(&self, value: &str, kind: &str, key: &str) -> Result<()> {
        if value.trim().is_empty() {
            let message = format!("{} must not be blank", self.context_for(kind));
            return Err(match self.find_blank_span(key) {
                Some(span) => self.source.validation_error_at(message, span),
                None => self.source.validation_error(message),
            });
        }
        Ok(())
    }

    /// Validate that a name is usable as-is under `rules`.
    ///
    /// Checks for blanks, reserved keywords and illegal characters.
    pub fn validate_name(
        &self,
        name: &str,
        kind: &str,
        key: &str,
        rules: IdentifierRules,
    ) -> Result<()> {
        self.require(name, kind, key)?;

        if is_reserved_keyword(name) {
            return Err(self.source.reserved_keyword_error(
                name,
                self.context_for(kind),
                self.find_span(name),
            ));
        }

        if let Some(reason) = identifier_problem(name, rules) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }

        Ok(())
    }

    /// The byte range of the current type's `[[types]]` table, or the whole
    /// source at the top level.
    fn section(&self) -> (usize, usize) {
        let src = self.source.src();
        let Some(type_name) = self.path.first() else {
            return (0, src.len());
        };
        let start = self.find_span(type_name).map_or(0, |span| span.offset());
        let end = src[start..]
            .find("\n[[types]]")
            .map_or(src.len(), |pos| start + pos);
        (start, end)
    }

    /// Find the first `key = ""` (or a blank string in a `key = [...]` array)
    /// inside the current section.
    fn find_blank_span(&self, key: &str) -> Option<SourceSpan> {
        let src = self.source.src();
        let (start, end) = self.section();
        let section = &src[start..end];

        section.match_indices(key).find_map(|(pos, _)| {
            let before = section[..pos].chars().next_back();
            if before.is_some_and(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.') {
                return None;
            }
            let after_key = &section[pos + key.len()..];
            let value = after_key.trim_start().strip_prefix('=')?;
            let value_start = start + pos + key.len() + (after_key.len() - value.len());
            let line = value.lines().next().unwrap_or_default();
            let (offset, len) = blank_string_offset(line)?;
            // Only arrays may hold the blank string further along the line.
            let array = line.trim_start().starts_with('[');
            let first = line.len() - line.trim_start().len();
            (array || offset == first).then(|| SourceSpan::from((value_start + offset, len)))
        })
    }
}

/// Offset and length of the first quoted string in `line` that holds only
/// whitespace, quotes included.
fn blank_string_offset(line: &str) -> Option<(usize, usize)> {
    let mut rest = line;
    let mut consumed = 0;
    while let Some(open) = rest.find('"') {
        let close = rest[open + 1..].find('"')? + open + 1;
        if rest[open + 1..close].trim().is_empty() {
            return Some((consumed + open, close - open + 1));
        }
        consumed += close + 1;
        rest = &rest[close + 1..];
    }
    None
}

fn quoted_offsets<'s>(src: &'s str, pattern: &'s str) -> impl Iterator<Item = usize> + 's {
    src.match_indices(pattern).map(|(pos, _)| pos)
}

/// Explain why `name` is not a valid identifier, or `None` if it is.
pub(crate) fn identifier_problem(name: &str, rules: IdentifierRules) -> Option<&'static str> {
    if is_valid_identifier(name, rules) {
        return None;
    }

    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == ESCAPE_PREFIX => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if name.chars().any(char::is_whitespace) {
        return Some("name cannot contain whitespace");
    }
    if !rules.allow_dots && name.contains('.') {
        return Some("qualified names are not allowed here");
    }
    if !rules.allow_generics && name.contains(['<', '>']) {
        return Some("generic arguments are not allowed here");
    }
    Some("name contains characters that are not allowed in C# identifiers")
}
