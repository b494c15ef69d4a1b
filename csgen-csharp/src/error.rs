use csgen_codegen::RenderError;
use thiserror::Error;

/// Result type for csgen-csharp operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A definition was rejected while being constructed.
///
/// Definitions are never created in a partially valid state; the caller can
/// fix the offending value and construct that one definition again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("{what} must not be blank")]
    Blank { what: &'static str },

    #[error("'{name}' is not a valid C# {what}")]
    InvalidIdentifier { what: &'static str, name: String },
}

/// Any failure while building or rendering a C# file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("namespace must not be blank")]
    BlankNamespace,

    #[error("namespace '{0}' is not a valid C# identifier")]
    InvalidNamespace(String),
}
