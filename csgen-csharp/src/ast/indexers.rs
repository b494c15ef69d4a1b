//! Indexer declarations (`this[int index]`).

use csgen_codegen::{CodeFragment, Renderable};
use csgen_core::{Access, Keyword};

use super::{params::ParameterDefinition, validate::non_blank};
use crate::DefinitionError;

/// An indexer with an expression-bodied getter and optional setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexerDefinition {
    access: Access,
    return_type: String,
    index: ParameterDefinition,
    getter: String,
    setter: Option<String>,
}

impl IndexerDefinition {
    pub fn new(
        access: Access,
        return_type: impl AsRef<str>,
        index: ParameterDefinition,
        getter: impl AsRef<str>,
    ) -> Result<Self, DefinitionError> {
        Ok(Self {
            access,
            return_type: non_blank(return_type.as_ref(), "indexer return type")?,
            index,
            getter: non_blank(getter.as_ref(), "indexer getter")?,
            setter: None,
        })
    }

    /// Add a setter expression. Blank expressions leave the indexer read-only.
    pub fn setter(mut self, expression: impl AsRef<str>) -> Self {
        let trimmed = expression.as_ref().trim();
        self.setter = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    pub fn access(&self) -> Access {
        self.access
    }

    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    pub fn index(&self) -> &ParameterDefinition {
        &self.index
    }

    pub fn getter(&self) -> &str {
        &self.getter
    }

    pub fn setter_expression(&self) -> Option<&str> {
        self.setter.as_deref()
    }
}

fn accessor(keyword: &str, expression: &str) -> CodeFragment {
    let terminator = if expression.ends_with(';') { "" } else { ";" };
    CodeFragment::line(format!("{keyword} => {expression}{terminator}"))
}

impl Renderable for IndexerDefinition {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = vec![accessor("get", &self.getter)];
        if let Some(setter) = &self.setter {
            body.push(accessor("set", setter));
        }

        vec![CodeFragment::block(
            format!(
                "{}{} this[{}]",
                self.access.text(),
                self.return_type,
                self.index
            ),
            body,
        )]
    }
}
