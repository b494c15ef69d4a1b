//! Constructor declarations.
//!
//! A constructor is spelled with its owning type's name, which it does not
//! store. The owner supplies its current name at render time through
//! [`ConstructorDefinition::for_type`], so renaming a type never leaves
//! stale constructor names behind.

use csgen_codegen::{CodeFragment, Renderable};
use csgen_core::{Access, Keyword};

use super::params::{ParameterDefinition, parameter_list};

/// A constructor with optional parameters, base call and body lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConstructorDefinition {
    access: Access,
    params: Vec<ParameterDefinition>,
    base_args: Option<Vec<String>>,
    body: Vec<String>,
}

impl ConstructorDefinition {
    pub fn new(access: Access) -> Self {
        Self {
            access,
            ..Self::default()
        }
    }

    pub fn param(mut self, param: ParameterDefinition) -> Self {
        self.params.push(param);
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = ParameterDefinition>) -> Self {
        self.params.extend(params);
        self
    }

    /// Chain to the base constructor: `: base(args...)`.
    ///
    /// An empty argument list still renders `: base()`.
    pub fn base_call<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.base_args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Add a line to the constructor body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// Add multiple lines to the constructor body.
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

    pub fn parameters(&self) -> &[ParameterDefinition] {
        &self.params
    }

    pub fn base_args(&self) -> Option<&[String]> {
        self.base_args.as_deref()
    }

    pub fn body_lines(&self) -> &[String] {
        &self.body
    }

    /// Bind this constructor to the name of the type that owns it.
    pub fn for_type<'a>(&'a self, type_name: &'a str) -> OwnedConstructor<'a> {
        OwnedConstructor {
            ctor: self,
            type_name,
        }
    }
}

/// A constructor paired with its owning type's name, ready to render.
#[derive(Debug, Clone, Copy)]
pub struct OwnedConstructor<'a> {
    ctor: &'a ConstructorDefinition,
    type_name: &'a str,
}

impl Renderable for OwnedConstructor<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let ctor = self.ctor;
        let base = ctor
            .base_args
            .as_ref()
            .map(|args| format!(" : base({})", args.join(", ")))
            .unwrap_or_default();

        vec![CodeFragment::block(
            format!(
                "{}{}({}){}",
                ctor.access.text(),
                self.type_name,
                parameter_list(&ctor.params),
                base
            ),
            ctor.body.iter().map(CodeFragment::line).collect(),
        )]
    }
}
