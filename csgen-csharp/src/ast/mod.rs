//! C# definition builders for generating types and their members.
//!
//! Every definition validates its input when constructed and then renders
//! itself through [`Renderable`](csgen_codegen::Renderable), so a single
//! member can be rendered on its own or as part of a [`TypeDefinition`].

mod attrs;
mod ctors;
mod fields;
mod indexers;
mod methods;
mod params;
mod properties;
mod types;
mod validate;

pub use ctors::{ConstructorDefinition, OwnedConstructor};
pub use fields::FieldDefinition;
pub use indexers::IndexerDefinition;
pub use methods::MethodDefinition;
pub use params::ParameterDefinition;
pub use properties::PropertyDefinition;
pub use types::TypeDefinition;
