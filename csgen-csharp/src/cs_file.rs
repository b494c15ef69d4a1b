//! File-level assembly: usings, the namespace block and its types.

use std::{cell::OnceCell, collections::BTreeSet};

use csgen_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};
use csgen_core::{IdentifierRules, is_valid_identifier};

use crate::{Error, Result, TypeDefinition};

/// One C# source file: a namespace holding one or more types.
///
/// The first [`render`](Self::render) caches its output; adding a type or a
/// using afterwards throws the cache away.
#[derive(Debug, Clone, Default)]
pub struct CsFile {
    namespace: String,
    usings: Vec<String>,
    types: Vec<TypeDefinition>,
    rendered: OnceCell<String>,
}

impl CsFile {
    /// Create an empty file. The namespace is checked when rendering.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Self::default()
        }
    }

    /// Add a using directive.
    pub fn using(mut self, name: impl AsRef<str>) -> Self {
        self.add_using(name);
        self
    }

    /// Add multiple using directives.
    pub fn usings<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.add_using(name);
        }
        self
    }

    /// Add a using directive. Blank names are ignored.
    pub fn add_using(&mut self, name: impl AsRef<str>) -> &mut Self {
        let name = name.as_ref().trim();
        if !name.is_empty() {
            self.usings.push(name.to_string());
            self.invalidate();
        }
        self
    }

    pub fn add_type(&mut self, ty: TypeDefinition) -> &mut Self {
        tracing::debug!(name = ty.identifier(), "adding type");
        self.types.push(ty);
        self.invalidate();
        self
    }

    pub fn add_types(&mut self, types: impl IntoIterator<Item = TypeDefinition>) -> &mut Self {
        for ty in types {
            self.add_type(ty);
        }
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Using directives in insertion order, duplicates included.
    pub fn using_names(&self) -> &[String] {
        &self.usings
    }

    pub fn types(&self) -> &[TypeDefinition] {
        &self.types
    }

    /// Render with tab indentation, reusing the previous output if nothing
    /// changed since.
    pub fn render(&self) -> Result<&str> {
        if let Some(code) = self.rendered.get() {
            tracing::debug!(namespace = %self.namespace, "render cache hit");
            return Ok(code);
        }

        let code = self.render_with(Indent::Tab)?;
        tracing::debug!(namespace = %self.namespace, bytes = code.len(), "rendered file");
        Ok(self.rendered.get_or_init(|| code))
    }

    /// Render with the given indentation. Never touches the cache.
    pub fn render_with(&self, indent: Indent) -> Result<String> {
        let mut builder = CodeBuilder::new(indent);
        for fragment in self.fragments()? {
            builder.apply_fragment(&fragment)?;
        }
        Ok(builder.build())
    }

    fn fragments(&self) -> Result<Vec<CodeFragment>> {
        let namespace = self.namespace.trim();
        if namespace.is_empty() {
            return Err(Error::BlankNamespace);
        }
        if !is_valid_identifier(namespace, IdentifierRules::NAMESPACE) {
            return Err(Error::InvalidNamespace(namespace.to_string()));
        }

        let usings: BTreeSet<&str> = self.usings.iter().map(String::as_str).collect();
        let mut fragments: Vec<CodeFragment> = usings
            .into_iter()
            .map(|name| CodeFragment::line(format!("using {name};")))
            .collect();
        if !fragments.is_empty() {
            fragments.push(CodeFragment::Blank);
        }

        let mut body = Vec::new();
        for (i, ty) in self.types.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::Blank);
            }
            body.extend(ty.to_fragments());
        }
        fragments.push(CodeFragment::block(format!("namespace {namespace}"), body));

        Ok(fragments)
    }

    fn invalidate(&mut self) {
        if self.rendered.take().is_some() {
            tracing::debug!(namespace = %self.namespace, "render cache invalidated");
        }
    }
}

#[cfg(test)]
mod tests {
    use csgen_core::{Access, MethodKind, TypeKind};

    use super::*;
    use crate::{FieldDefinition, MethodDefinition};

    fn bar() -> TypeDefinition {
        let mut bar = TypeDefinition::new(Access::Public, TypeKind::Class, "Bar").unwrap();
        bar.add_field(FieldDefinition::new(Access::Private, "int", "count").unwrap());
        bar.add_method(
            MethodDefinition::new(Access::Public, MethodKind::None, "void", "Reset")
                .unwrap()
                .body_line("count = 0;"),
        );
        bar
    }

    fn foo() -> CsFile {
        let mut file = CsFile::new("Foo");
        file.add_type(bar());
        file
    }

    #[test]
    fn test_render_with_tabs() {
        assert_eq!(
            foo().render().unwrap(),
            "namespace Foo\n{\n\tpublic class Bar\n\t{\n\t\tprivate int count;\n\n\t\tpublic void Reset()\n\t\t{\n\t\t\tcount = 0;\n\t\t}\n\t}\n}\n"
        );
    }

    #[test]
    fn test_render_with_spaces() {
        let tabs = foo().render_with(Indent::Tab).unwrap();
        let spaces = foo().render_with(Indent::SPACES_4).unwrap();
        assert_eq!(spaces, tabs.replace('\t', "    "));
        assert!(spaces.contains("\n        private int count;\n"));
    }

    #[test]
    fn test_usings_sorted_and_deduplicated() {
        let mut file = foo().usings(["UnityEngine", "System", " ", "System.Linq", "System"]);
        file.add_using(" UnityEngine ");

        let code = file.render().unwrap();
        assert!(code.starts_with(
            "using System;\nusing System.Linq;\nusing UnityEngine;\n\nnamespace Foo\n{\n"
        ));
        assert_eq!(file.using_names().len(), 5);
    }

    #[test]
    fn test_types_separated_by_blank_line() {
        let mut file = CsFile::new("Game.Data");
        file.add_types([
            TypeDefinition::new(Access::Public, TypeKind::Struct, "A").unwrap(),
            TypeDefinition::new(Access::Internal, TypeKind::Interface, "IB").unwrap(),
        ]);
        assert_eq!(
            file.render().unwrap(),
            "namespace Game.Data\n{\n\tpublic struct A\n\t{\n\t}\n\n\tinternal interface IB\n\t{\n\t}\n}\n"
        );
    }

    #[test]
    fn test_empty_namespace_block() {
        assert_eq!(CsFile::new("Empty").render().unwrap(), "namespace Empty\n{\n}\n");
    }

    #[test]
    fn test_invalid_namespace() {
        assert_eq!(CsFile::new("  ").render(), Err(Error::BlankNamespace));
        assert_eq!(
            CsFile::new("My Game").render(),
            Err(Error::InvalidNamespace("My Game".to_string()))
        );
        assert!(CsFile::new("class").render().is_err());
    }

    #[test]
    fn test_render_is_cached() {
        let file = foo();
        let first = file.render().unwrap().as_ptr();
        let second = file.render().unwrap().as_ptr();
        assert_eq!(first, second);
    }

    #[test]
    fn test_add_type_invalidates_cache() {
        let mut file = foo();
        let before = file.render().unwrap().to_string();

        file.add_type(TypeDefinition::new(Access::Public, TypeKind::Class, "Baz").unwrap());
        let after = file.render().unwrap();

        assert_ne!(before, after);
        assert!(after.contains("\tpublic class Baz\n"));
    }

    #[test]
    fn test_render_with_bypasses_cache() {
        let file = foo();
        let cached = file.render().unwrap().to_string();
        let spaced = file.render_with(Indent::Spaces(2)).unwrap();

        assert!(spaced.starts_with("namespace Foo\n{\n  public class Bar\n"));
        assert_eq!(file.render().unwrap(), cached);
    }
}
