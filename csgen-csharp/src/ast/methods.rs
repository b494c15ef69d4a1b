//! Method declarations.

use csgen_codegen::{CodeFragment, Renderable};
use csgen_core::{Access, IdentifierRules, Keyword, MethodKind};

use super::{
    params::{ParameterDefinition, parameter_list},
    validate::strict,
};
use crate::DefinitionError;

/// Return type used when none is given.
const VOID: &str = "void";

/// A method: `public static void Reset(int value)` followed by its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDefinition {
    access: Access,
    kind: MethodKind,
    return_type: String,
    name: String,
    params: Vec<ParameterDefinition>,
    body: Vec<String>,
}

impl MethodDefinition {
    /// Create a method.
    ///
    /// The name must already be a valid identifier; it is not repaired. A
    /// blank return type becomes `void`.
    pub fn new(
        access: Access,
        kind: MethodKind,
        return_type: impl AsRef<str>,
        name: impl AsRef<str>,
    ) -> Result<Self, DefinitionError> {
        let return_type = return_type.as_ref().trim();
        Ok(Self {
            access,
            kind,
            return_type: if return_type.is_empty() {
                VOID.to_string()
            } else {
                return_type.to_string()
            },
            name: strict(name.as_ref(), "method name", IdentifierRules::PLAIN)?,
            params: Vec::new(),
            body: Vec::new(),
        })
    }

    pub fn param(mut self, param: ParameterDefinition) -> Self {
        self.params.push(param);
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = ParameterDefinition>) -> Self {
        self.params.extend(params);
        self
    }

    /// Add a line to the method body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// Add multiple lines to the method body.
    pub fn body<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn access(&self) -> Access {
        self.access
    }

    pub fn kind(&self) -> MethodKind {
        self.kind
    }

    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[ParameterDefinition] {
        &self.params
    }

    pub fn body_lines(&self) -> &[String] {
        &self.body
    }
}

impl Renderable for MethodDefinition {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            format!(
                "{}{}{} {}({})",
                self.access.text(),
                self.kind.text(),
                self.return_type,
                self.name,
                parameter_list(&self.params)
            ),
            self.body.iter().map(CodeFragment::line).collect(),
        )]
    }
}
