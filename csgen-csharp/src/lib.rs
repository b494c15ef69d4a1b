//! C# source assembler.
//!
//! Build an in-memory model of one C# file (namespace, usings, types and
//! their members) and render it to text with consistent indentation,
//! member ordering and identifier validity.
//!
//! ```
//! use csgen_csharp::{Access, CsFile, FieldDefinition, MethodDefinition, MethodKind, TypeDefinition, TypeKind};
//!
//! let mut bar = TypeDefinition::new(Access::Public, TypeKind::Class, "Bar")?;
//! bar.add_field(FieldDefinition::new(Access::Private, "int", "count")?);
//! bar.add_method(
//!     MethodDefinition::new(Access::Public, MethodKind::None, "void", "Reset")?.body_line("count = 0;"),
//! );
//!
//! let mut file = CsFile::new("Foo");
//! file.add_type(bar);
//! assert!(file.render()?.starts_with("namespace Foo\n{\n\tpublic class Bar\n"));
//! # Ok::<(), csgen_csharp::Error>(())
//! ```

mod cs_file;
mod error;

pub mod ast;

pub use ast::{
    ConstructorDefinition, FieldDefinition, IndexerDefinition, MethodDefinition,
    ParameterDefinition, PropertyDefinition, TypeDefinition,
};
pub use cs_file::CsFile;
pub use csgen_codegen::{Indent, RenderError, Renderable};
pub use csgen_core::{Access, MethodKind, TypeKind};
pub use error::{DefinitionError, Error, Result};
