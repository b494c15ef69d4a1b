//! Keyword tables for access modifiers, type kinds and method kinds.
//!
//! Each enum maps every variant to its literal C# spelling, including the
//! trailing space, so renderers can concatenate keywords without caring
//! whether a keyword is empty.

use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

/// Error returned when a keyword name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{name}', expected one of: {expected}")]
pub struct ParseKeywordError {
    pub kind: &'static str,
    pub name: String,
    pub expected: String,
}

/// A closed set of C# keywords with a total mapping to source text.
pub trait Keyword: Copy + Sized + 'static {
    /// Human readable name of the keyword family, used in errors.
    const KIND: &'static str;

    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// The kebab-case name used in manifests (`protected-internal`).
    fn name(self) -> &'static str;

    /// The C# spelling followed by a single space, or `""` for none.
    fn text(self) -> &'static str;

    /// Parse a kebab-case name.
    fn parse_name(name: &str) -> Result<Self, ParseKeywordError> {
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.name() == name)
            .ok_or_else(|| ParseKeywordError {
                kind: Self::KIND,
                name: name.to_string(),
                expected: Self::ALL
                    .iter()
                    .map(|k| k.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Access modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Access {
    #[default]
    Public,
    Private,
    Protected,
    Internal,
    ProtectedInternal,
    PrivateProtected,
}

impl Keyword for Access {
    const KIND: &'static str = "access modifier";

    const ALL: &'static [Self] = &[
        Self::Public,
        Self::Private,
        Self::Protected,
        Self::Internal,
        Self::ProtectedInternal,
        Self::PrivateProtected,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Protected => "protected",
            Self::Internal => "internal",
            Self::ProtectedInternal => "protected-internal",
            Self::PrivateProtected => "private-protected",
        }
    }

    fn text(self) -> &'static str {
        match self {
            Self::Public => "public ",
            Self::Private => "private ",
            Self::Protected => "protected ",
            Self::Internal => "internal ",
            Self::ProtectedInternal => "protected internal ",
            Self::PrivateProtected => "private protected ",
        }
    }
}

/// Keywords placed before a type's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum TypeKind {
    Interface,
    Struct,
    #[default]
    Class,
    AbstractClass,
    SealedClass,
    StaticClass,
    PartialInterface,
    PartialStruct,
    PartialClass,
    AbstractPartialClass,
    SealedPartialClass,
    StaticPartialClass,
}

impl TypeKind {
    /// Whether this kind declares a partial type.
    pub fn is_partial(self) -> bool {
        matches!(
            self,
            Self::PartialInterface
                | Self::PartialStruct
                | Self::PartialClass
                | Self::AbstractPartialClass
                | Self::SealedPartialClass
                | Self::StaticPartialClass
        )
    }
}

impl Keyword for TypeKind {
    const KIND: &'static str = "type kind";

    const ALL: &'static [Self] = &[
        Self::Interface,
        Self::Struct,
        Self::Class,
        Self::AbstractClass,
        Self::SealedClass,
        Self::StaticClass,
        Self::PartialInterface,
        Self::PartialStruct,
        Self::PartialClass,
        Self::AbstractPartialClass,
        Self::SealedPartialClass,
        Self::StaticPartialClass,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Interface => "interface",
            Self::Struct => "struct",
            Self::Class => "class",
            Self::AbstractClass => "abstract-class",
            Self::SealedClass => "sealed-class",
            Self::StaticClass => "static-class",
            Self::PartialInterface => "partial-interface",
            Self::PartialStruct => "partial-struct",
            Self::PartialClass => "partial-class",
            Self::AbstractPartialClass => "abstract-partial-class",
            Self::SealedPartialClass => "sealed-partial-class",
            Self::StaticPartialClass => "static-partial-class",
        }
    }

    fn text(self) -> &'static str {
        match self {
            Self::Interface => "interface ",
            Self::Struct => "struct ",
            Self::Class => "class ",
            Self::AbstractClass => "abstract class ",
            Self::SealedClass => "sealed class ",
            Self::StaticClass => "static class ",
            Self::PartialInterface => "partial interface ",
            Self::PartialStruct => "partial struct ",
            Self::PartialClass => "partial class ",
            Self::AbstractPartialClass => "abstract partial class ",
            Self::SealedPartialClass => "sealed partial class ",
            Self::StaticPartialClass => "static partial class ",
        }
    }
}

/// Keywords placed before a method's return type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum MethodKind {
    #[default]
    None,
    Static,
    Abstract,
    Virtual,
    Override,
}

impl Keyword for MethodKind {
    const KIND: &'static str = "method kind";

    const ALL: &'static [Self] = &[
        Self::None,
        Self::Static,
        Self::Abstract,
        Self::Virtual,
        Self::Override,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Static => "static",
            Self::Abstract => "abstract",
            Self::Virtual => "virtual",
            Self::Override => "override",
        }
    }

    fn text(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Static => "static ",
            Self::Abstract => "abstract ",
            Self::Virtual => "virtual ",
            Self::Override => "override ",
        }
    }
}

macro_rules! impl_keyword_conversions {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromStr for $ty {
                type Err = ParseKeywordError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Self::parse_name(s)
                }
            }

            impl TryFrom<String> for $ty {
                type Error = ParseKeywordError;

                fn try_from(s: String) -> Result<Self, Self::Error> {
                    Self::parse_name(&s)
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.name())
                }
            }
        )*
    };
}

impl_keyword_conversions!(Access, TypeKind, MethodKind);
