//! Property declarations.

use csgen_codegen::{CodeFragment, Renderable};
use csgen_core::{Access, Keyword, sanitize_identifier};

use super::validate::{non_blank, sanitized};
use crate::DefinitionError;

/// A property, rendered in one of three shapes:
///
/// - read-only with a backing field: `public int Count => count;`
/// - backing field, writable: `public int Count { get { return count; } set { count = value; } }`
/// - no backing field: `public int Count { get; set; }` (`private set;` when read-only)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDefinition {
    access: Access,
    ty: String,
    identifier: String,
    backing_field: Option<String>,
    read_only: bool,
}

impl PropertyDefinition {
    pub fn new(
        access: Access,
        ty: impl AsRef<str>,
        identifier: impl AsRef<str>,
    ) -> Result<Self, DefinitionError> {
        Ok(Self {
            access,
            ty: non_blank(ty.as_ref(), "property type")?,
            identifier: sanitized(identifier.as_ref(), "property name")?,
            backing_field: None,
            read_only: false,
        })
    }

    /// Delegate storage to a field. Blank names mean no backing field.
    pub fn backing_field(mut self, identifier: impl AsRef<str>) -> Self {
        self.backing_field = sanitize_identifier(identifier.as_ref());
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn access(&self) -> Access {
        self.access
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn backing_field_name(&self) -> Option<&str> {
        self.backing_field.as_deref()
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    fn accessors(&self) -> String {
        match (&self.backing_field, self.read_only) {
            (Some(field), true) => format!(" => {};", field),
            (Some(field), false) => {
                format!(" {{ get {{ return {field}; }} set {{ {field} = value; }} }}")
            }
            (None, true) => " { get; private set; }".to_string(),
            (None, false) => " { get; set; }".to_string(),
        }
    }
}

impl Renderable for PropertyDefinition {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "{}{} {}{}",
            self.access.text(),
            self.ty,
            self.identifier,
            self.accessors()
        ))]
    }
}
