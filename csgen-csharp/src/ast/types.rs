//! Type declarations and the fixed member ordering inside them.

use csgen_codegen::{CodeFragment, Renderable};
use csgen_core::{Access, IdentifierRules, Keyword, TypeKind};

use super::{
    ConstructorDefinition, FieldDefinition, IndexerDefinition, MethodDefinition,
    PropertyDefinition,
    attrs::{attribute_lines, clean_attributes},
    validate::strict,
};
use crate::DefinitionError;

/// A class, struct or interface and the members it owns.
///
/// Members render grouped by category in a fixed order: fields, properties,
/// constructors, methods, indexers. A blank line separates a category from
/// whatever was rendered before it.
///
/// # Example
///
/// ```
/// use csgen_csharp::{Access, FieldDefinition, Renderable, TypeDefinition, TypeKind, Indent};
///
/// let mut ty = TypeDefinition::new(Access::Public, TypeKind::Struct, "Point")?
///     .interface("IEquatable<Point>")?;
/// ty.add_field(FieldDefinition::new(Access::Public, "int", "x")?);
///
/// assert_eq!(
///     ty.render_at(Indent::Tab, 0)?,
///     "public struct Point : IEquatable<Point>\n{\n\tpublic int x;\n}\n"
/// );
/// # Ok::<(), csgen_csharp::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDefinition {
    access: Access,
    kind: TypeKind,
    identifier: String,
    base_type: Option<String>,
    interfaces: Vec<String>,
    attributes: Vec<String>,
    fields: Vec<FieldDefinition>,
    properties: Vec<PropertyDefinition>,
    constructors: Vec<ConstructorDefinition>,
    methods: Vec<MethodDefinition>,
    indexers: Vec<IndexerDefinition>,
}

impl TypeDefinition {
    /// Create an empty type. Qualified and generic names are allowed.
    pub fn new(
        access: Access,
        kind: TypeKind,
        identifier: impl AsRef<str>,
    ) -> Result<Self, DefinitionError> {
        Ok(Self {
            access,
            kind,
            identifier: type_name(identifier.as_ref(), "type name")?,
            base_type: None,
            interfaces: Vec::new(),
            attributes: Vec::new(),
            fields: Vec::new(),
            properties: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
            indexers: Vec::new(),
        })
    }

    /// Set the base type, always listed first after the colon.
    pub fn base_type(mut self, name: impl AsRef<str>) -> Result<Self, DefinitionError> {
        self.base_type = Some(type_name(name.as_ref(), "base type")?);
        Ok(self)
    }

    /// Add an implemented interface.
    pub fn interface(mut self, name: impl AsRef<str>) -> Result<Self, DefinitionError> {
        self.interfaces
            .push(type_name(name.as_ref(), "interface name")?);
        Ok(self)
    }

    /// Add multiple implemented interfaces.
    pub fn interfaces<I, S>(self, names: I) -> Result<Self, DefinitionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().try_fold(self, |ty, name| ty.interface(name))
    }

    /// Add an attribute, rendered on its own line above the declaration.
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

    /// Rename the type. Attached constructors pick up the new name.
    pub fn rename(&mut self, identifier: impl AsRef<str>) -> Result<(), DefinitionError> {
        self.identifier = type_name(identifier.as_ref(), "type name")?;
        Ok(())
    }

    pub fn add_field(&mut self, field: FieldDefinition) -> &mut Self {
        self.fields.push(field);
        self
    }

    pub fn add_fields(&mut self, fields: impl IntoIterator<Item = FieldDefinition>) -> &mut Self {
        self.fields.extend(fields);
        self
    }

    pub fn add_property(&mut self, property: PropertyDefinition) -> &mut Self {
        self.properties.push(property);
        self
    }

    pub fn add_properties(
        &mut self,
        properties: impl IntoIterator<Item = PropertyDefinition>,
    ) -> &mut Self {
        self.properties.extend(properties);
        self
    }

    pub fn add_constructor(&mut self, constructor: ConstructorDefinition) -> &mut Self {
        self.constructors.push(constructor);
        self
    }

    pub fn add_constructors(
        &mut self,
        constructors: impl IntoIterator<Item = ConstructorDefinition>,
    ) -> &mut Self {
        self.constructors.extend(constructors);
        self
    }

    pub fn add_method(&mut self, method: MethodDefinition) -> &mut Self {
        self.methods.push(method);
        self
    }

    pub fn add_methods(&mut self, methods: impl IntoIterator<Item = MethodDefinition>) -> &mut Self {
        self.methods.extend(methods);
        self
    }

    pub fn add_indexer(&mut self, indexer: IndexerDefinition) -> &mut Self {
        self.indexers.push(indexer);
        self
    }

    pub fn add_indexers(
        &mut self,
        indexers: impl IntoIterator<Item = IndexerDefinition>,
    ) -> &mut Self {
        self.indexers.extend(indexers);
        self
    }

    pub fn access(&self) -> Access {
        self.access
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn base_type_name(&self) -> Option<&str> {
        self.base_type.as_deref()
    }

    pub fn interface_names(&self) -> &[String] {
        &self.interfaces
    }

    pub fn attribute_names(&self) -> &[String] {
        &self.attributes
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn properties(&self) -> &[PropertyDefinition] {
        &self.properties
    }

    pub fn constructors(&self) -> &[ConstructorDefinition] {
        &self.constructors
    }

    pub fn methods(&self) -> &[MethodDefinition] {
        &self.methods
    }

    pub fn indexers(&self) -> &[IndexerDefinition] {
        &self.indexers
    }

    /// Check if the type has no members at all.
    pub fn is_empty(&self) -> bool {
        self.groups().iter().all(MemberGroup::is_empty)
    }

    /// `public sealed class Player : Actor, IDamageable`
    fn declaration(&self) -> String {
        let supertypes: Vec<&str> = self
            .base_type
            .iter()
            .chain(&self.interfaces)
            .map(String::as_str)
            .collect();

        let mut line = format!(
            "{}{}{}",
            self.access.text(),
            self.kind.text(),
            self.identifier
        );
        if !supertypes.is_empty() {
            line.push_str(" : ");
            line.push_str(&supertypes.join(", "));
        }
        line
    }

    fn groups(&self) -> [MemberGroup<'_>; 5] {
        [
            MemberGroup::Fields(&self.fields),
            MemberGroup::Properties(&self.properties),
            MemberGroup::Constructors(&self.identifier, &self.constructors),
            MemberGroup::Methods(&self.methods),
            MemberGroup::Indexers(&self.indexers),
        ]
    }

    fn member_fragments(&self) -> Vec<CodeFragment> {
        let mut body = Vec::new();
        let mut emitted_any = false;

        for group in self.groups() {
            if group.is_empty() {
                continue;
            }
            if emitted_any {
                body.push(CodeFragment::Blank);
            }
            body.extend(group.to_fragments());
            emitted_any = true;
        }

        body
    }
}

impl Renderable for TypeDefinition {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = attribute_lines(&self.attributes).collect();
        fragments.push(CodeFragment::block(
            self.declaration(),
            self.member_fragments(),
        ));
        fragments
    }
}

/// One member category of a type, in render order.
enum MemberGroup<'a> {
    Fields(&'a [FieldDefinition]),
    Properties(&'a [PropertyDefinition]),
    Constructors(&'a str, &'a [ConstructorDefinition]),
    Methods(&'a [MethodDefinition]),
    Indexers(&'a [IndexerDefinition]),
}

impl MemberGroup<'_> {
    fn is_empty(&self) -> bool {
        match self {
            Self::Fields(items) => items.is_empty(),
            Self::Properties(items) => items.is_empty(),
            Self::Constructors(_, items) => items.is_empty(),
            Self::Methods(items) => items.is_empty(),
            Self::Indexers(items) => items.is_empty(),
        }
    }

    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            Self::Fields(items) => packed(items.iter()),
            Self::Properties(items) => packed(items.iter()),
            Self::Constructors(type_name, items) => {
                spaced(items.iter().map(|ctor| ctor.for_type(type_name)))
            }
            Self::Methods(items) => packed(items.iter()),
            Self::Indexers(items) => packed(items.iter()),
        }
    }
}

/// Members one after another, with no blank line between them.
fn packed<R: Renderable>(items: impl Iterator<Item = R>) -> Vec<CodeFragment> {
    items.flat_map(|item| item.to_fragments()).collect()
}

/// Members separated by a blank line. Only constructors are spaced.
fn spaced<R: Renderable>(items: impl Iterator<Item = R>) -> Vec<CodeFragment> {
    let mut fragments = Vec::new();
    for (i, item) in items.enumerate() {
        if i > 0 {
            fragments.push(CodeFragment::Blank);
        }
        fragments.extend(item.to_fragments());
    }
    fragments
}

fn type_name(name: &str, what: &'static str) -> Result<String, DefinitionError> {
    strict(name.trim(), what, IdentifierRules::TYPE_NAME)
}

#[cfg(test)]
mod tests {
    use csgen_codegen::{CodeBuilder, Indent};
    use csgen_core::MethodKind;

    use super::*;
    use crate::ParameterDefinition;

    fn class(name: &str) -> TypeDefinition {
        TypeDefinition::new(Access::Public, TypeKind::Class, name).unwrap()
    }

    fn method(name: &str) -> MethodDefinition {
        MethodDefinition::new(Access::Public, MethodKind::None, "void", name).unwrap()
    }

    fn render(ty: &TypeDefinition) -> String {
        ty.render_at(Indent::Tab, 0).unwrap()
    }

    #[test]
    fn test_empty_type() {
        assert_eq!(render(&class("Empty")), "public class Empty\n{\n}\n");
        assert!(class("Empty").is_empty());
    }

    #[test]
    fn test_declaration_with_base_and_interfaces() {
        let ty = TypeDefinition::new(Access::Internal, TypeKind::SealedPartialClass, "Player")
            .unwrap()
            .interfaces(["IDamageable", "IComparable<Player>"])
            .unwrap()
            .base_type("UnityEngine.MonoBehaviour")
            .unwrap();
        assert_eq!(
            render(&ty).lines().next(),
            Some(
                "internal sealed partial class Player : UnityEngine.MonoBehaviour, IDamageable, IComparable<Player>"
            )
        );
    }

    #[test]
    fn test_interfaces_without_base() {
        let ty = TypeDefinition::new(Access::Public, TypeKind::Interface, "IShape")
            .unwrap()
            .interface("IDisposable")
            .unwrap();
        assert!(render(&ty).starts_with("public interface IShape : IDisposable\n"));
    }

    #[test]
    fn test_attributes_render_above_declaration() {
        let ty = class("Save").attributes(["Serializable", " ", "CreateAssetMenu"]);
        assert_eq!(
            render(&ty),
            "[Serializable]\n[CreateAssetMenu]\npublic class Save\n{\n}\n"
        );
    }

    #[test]
    fn test_invalid_type_names() {
        assert_eq!(
            TypeDefinition::new(Access::Public, TypeKind::Class, " "),
            Err(DefinitionError::Blank { what: "type name" })
        );
        assert!(TypeDefinition::new(Access::Public, TypeKind::Class, "My Type").is_err());
        assert!(class("Foo").base_type("Bar Baz").is_err());
        assert_eq!(
            class("Foo").interface("I-Foo"),
            Err(DefinitionError::InvalidIdentifier {
                what: "interface name",
                name: "I-Foo".to_string()
            })
        );
    }

    #[test]
    fn test_category_order_and_separators() {
        let mut ty = class("Bar");
        ty.add_indexer(
            IndexerDefinition::new(
                Access::Public,
                "int",
                ParameterDefinition::new("int", "i").unwrap(),
                "values[i]",
            )
            .unwrap(),
        );
        ty.add_method(method("Reset"));
        ty.add_property(PropertyDefinition::new(Access::Public, "int", "Count").unwrap());
        ty.add_field(FieldDefinition::new(Access::Private, "int[]", "values").unwrap());
        ty.add_field(FieldDefinition::new(Access::Private, "int", "count").unwrap());

        assert_eq!(
            render(&ty),
            concat!(
                "public class Bar\n",
                "{\n",
                "\tprivate int[] values;\n",
                "\tprivate int count;\n",
                "\n",
                "\tpublic int Count { get; set; }\n",
                "\n",
                "\tpublic void Reset()\n",
                "\t{\n",
                "\t}\n",
                "\n",
                "\tpublic int this[int i]\n",
                "\t{\n",
                "\t\tget => values[i];\n",
                "\t}\n",
                "}\n",
            )
        );
    }

    #[test]
    fn test_constructors_then_methods_separator() {
        let mut ty = class("Bar");
        ty.add_constructor(ConstructorDefinition::new(Access::Public));
        ty.add_methods([method("A"), method("B")]);

        assert_eq!(
            render(&ty),
            concat!(
                "public class Bar\n",
                "{\n",
                "\tpublic Bar()\n",
                "\t{\n",
                "\t}\n",
                "\n",
                "\tpublic void A()\n",
                "\t{\n",
                "\t}\n",
                "\tpublic void B()\n",
                "\t{\n",
                "\t}\n",
                "}\n",
            )
        );
    }

    #[test]
    fn test_only_constructors_are_spaced() {
        let indexer = |ty: &str| {
            IndexerDefinition::new(
                Access::Public,
                "int",
                ParameterDefinition::new(ty, "key").unwrap(),
                "0",
            )
            .unwrap()
        };
        let mut ty = class("Bar");
        ty.add_constructors([
            ConstructorDefinition::new(Access::Public),
            ConstructorDefinition::new(Access::Private),
        ]);
        ty.add_indexers([indexer("int"), indexer("string")]);

        let code = render(&ty);
        assert!(code.contains("\tpublic Bar()\n\t{\n\t}\n\n\tprivate Bar()\n"));
        assert!(code.contains("\t}\n\tpublic int this[string key]\n"));
    }

    #[test]
    fn test_separator_skips_empty_categories() {
        let mut ty = class("Bar");
        ty.add_field(FieldDefinition::new(Access::Private, "int", "x").unwrap());
        ty.add_method(method("Run"));

        let code = render(&ty);
        assert!(code.contains("\tprivate int x;\n\n\tpublic void Run()\n"));
        assert!(!code.contains("\n\n\n"));
    }

    #[test]
    fn test_rename_updates_constructors() {
        let mut ty = class("Old");
        ty.add_constructor(ConstructorDefinition::new(Access::Public));
        ty.rename("New").unwrap();

        assert!(render(&ty).contains("\tpublic New()\n"));
        assert!(ty.rename("not valid").is_err());
        assert_eq!(ty.identifier(), "New");
    }

    #[test]
    fn test_render_keeps_blocks_balanced() {
        let mut ty = class("Bar");
        ty.add_method(method("Run").body_line("Tick();"));

        let mut builder = CodeBuilder::with_depth(Indent::Tab, 2).unwrap();
        builder.emit(&ty).unwrap();
        assert_eq!(builder.current_indent(), 2);
    }

    #[test]
    fn test_render_fails_past_max_depth() {
        let mut ty = class("Bar");
        ty.add_method(method("Run").body_line("Tick();"));
        assert!(ty.render_at(Indent::Tab, 6).is_err());
        assert!(ty.render_at(Indent::Tab, 5).is_ok());
    }

    #[test]
    fn test_empty_method_renders_at_deepest_level() {
        let mut ty = class("Bar");
        ty.add_method(method("Run"));
        assert!(ty.render_at(Indent::Tab, 6).is_ok());
        assert!(method("Run").render_at(Indent::Tab, 7).is_ok());
    }
}
