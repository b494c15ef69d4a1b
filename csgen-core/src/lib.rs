//! Core utilities and types for the csgen C# source assembler.
//!
//! This crate holds the pieces every other csgen crate leans on: the
//! identifier sanitizer and the keyword tables that map access modifiers,
//! type kinds and method kinds to their C# spelling.

mod identifier;
mod keywords;

// Identifier checks and repair
pub use identifier::{
    CSHARP_KEYWORDS, ESCAPE_PREFIX, IdentifierRules, REPLACEMENT_CHAR, is_reserved_keyword,
    is_valid_identifier, replace_illegal_chars, sanitize_identifier,
};
// Keyword tables
pub use keywords::{Access, Keyword, MethodKind, ParseKeywordError, TypeKind};
