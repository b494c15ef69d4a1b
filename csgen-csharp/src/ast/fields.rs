//! Field declarations.

use csgen_codegen::{CodeFragment, Renderable};
use csgen_core::{Access, Keyword};

use super::{
    attrs::{clean_attributes, compact_attributes},
    validate::{non_blank, sanitized},
};
use crate::DefinitionError;

/// A field: `[SerializeField] private int count;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    access: Access,
    ty: String,
    identifier: String,
    attributes: Vec<String>,
}

impl FieldDefinition {
    pub fn new(
        access: Access,
        ty: impl AsRef<str>,
        identifier: impl AsRef<str>,
    ) -> Result<Self, DefinitionError> {
        Ok(Self {
            access,
            ty: non_blank(ty.as_ref(), "field type")?,
            identifier: sanitized(identifier.as_ref(), "field name")?,
            attributes: Vec::new(),
        })
    }

    /// Add an attribute, rendered on the same line as the declaration.
    pub fn attribute(self, attribute: impl AsRef<str>) -> Self {
        self.attributes([attribute])
    }

    /// Add multiple attributes; blank entries are ignored.
    pub fn attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.attributes.extend(clean_attributes(attributes));
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

    pub fn attribute_names(&self) -> &[String] {
        &self.attributes
    }
}

impl Renderable for FieldDefinition {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "{}{}{} {};",
            compact_attributes(&self.attributes),
            self.access.text(),
            self.ty,
            self.identifier
        ))]
    }
}
