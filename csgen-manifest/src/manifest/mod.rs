//! Manifest types and parsing for csgen.toml files.

mod parse;
mod validate;

use csgen_core::{Access, MethodKind, TypeKind};
use serde::Deserialize;

pub use parse::parse_manifest;
pub use validate::ParseContext;

/// Spaces per level when `[format]` asks for spaces without a width.
pub const DEFAULT_SPACE_WIDTH: u8 = 4;

/// Widest space indentation the renderer supports.
pub const MAX_SPACE_WIDTH: u8 = 16;

/// Root manifest for csgen.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Namespace wrapping every type in the file
    pub namespace: String,

    /// `using` directives; sorted and de-duplicated when rendered
    #[serde(default)]
    pub usings: Vec<String>,

    #[serde(default)]
    pub format: FormatConfig,

    /// Types in declaration order
    #[serde(default)]
    pub types: Vec<TypeSpec>,
}

/// `[format]` table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatConfig {
    #[serde(default)]
    pub indent: IndentStyle,

    /// Spaces per level; only meaningful with `indent = "spaces"`
    pub width: Option<u8>,
}

impl FormatConfig {
    /// Spaces per indentation level, or `None` for tabs.
    pub fn space_width(&self) -> Option<u8> {
        match self.indent {
            IndentStyle::Tab => None,
            IndentStyle::Spaces => Some(self.width.unwrap_or(DEFAULT_SPACE_WIDTH)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    #[default]
    Tab,
    Spaces,
}

/// `[[types]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeSpec {
    #[serde(default)]
    pub access: Access,

    #[serde(default)]
    pub kind: TypeKind,

    pub name: String,

    /// Base class, listed before the interfaces
    pub base: Option<String>,

    #[serde(default)]
    pub interfaces: Vec<String>,

    /// Attributes without brackets, e.g. `"Serializable"`
    #[serde(default)]
    pub attributes: Vec<String>,

    #[serde(default)]
    pub fields: Vec<FieldSpec>,

    #[serde(default)]
    pub properties: Vec<PropertySpec>,

    #[serde(default)]
    pub constructors: Vec<ConstructorSpec>,

    #[serde(default)]
    pub methods: Vec<MethodSpec>,

    #[serde(default)]
    pub indexers: Vec<IndexerSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSpec {
    #[serde(default)]
    pub access: Access,

    #[serde(rename = "type")]
    pub ty: String,

    pub name: String,

    #[serde(default)]
    pub attributes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertySpec {
    #[serde(default)]
    pub access: Access,

    #[serde(rename = "type")]
    pub ty: String,

    pub name: String,

    pub backing_field: Option<String>,

    #[serde(default)]
    pub read_only: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstructorSpec {
    #[serde(default)]
    pub access: Access,

    #[serde(default)]
    pub params: Vec<ParamSpec>,

    /// Arguments for `: base(...)`; an empty list still chains to `base()`
    pub base: Option<Vec<String>>,

    #[serde(default)]
    pub body: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodSpec {
    #[serde(default)]
    pub access: Access,

    #[serde(default)]
    pub kind: MethodKind,

    /// Return type, `void` when absent
    pub returns: Option<String>,

    pub name: String,

    #[serde(default)]
    pub params: Vec<ParamSpec>,

    #[serde(default)]
    pub body: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndexerSpec {
    #[serde(default)]
    pub access: Access,

    pub returns: String,

    pub index: ParamSpec,

    /// Getter expression, `get => <get>;`
    pub get: String,

    /// Setter expression, `set => <set>;`
    pub set: Option<String>,
}

/// `{ type = "int", name = "amount" }`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamSpec {
    #[serde(rename = "type")]
    pub ty: String,

    pub name: String,
}
