//! C# identifier validation and repair.
//!
//! All checks are a single linear pass over the input and only look at ASCII
//! letters, digits and a handful of punctuation characters.

/// Reserved C# keywords that cannot be used as bare identifiers.
pub const CSHARP_KEYWORDS: &[&str] = &[
    "var", "bool", "byte", "sbyte", "short", "ushort", "int", "uint", "long", "ulong", "double",
    "float", "decimal", "string", "char", "void", "object", "typeof", "sizeof", "null", "true",
    "false", "if", "else", "while", "for", "foreach", "do", "switch", "case", "default", "lock",
    "try", "throw", "catch", "finally", "goto", "break", "continue", "return", "public",
    "private", "internal", "protected", "static", "readonly", "sealed", "const", "fixed",
    "stackalloc", "volatile", "new", "override", "abstract", "virtual", "event", "extern", "ref",
    "out", "in", "is", "as", "params", "__arglist", "__makeref", "__reftype", "__refvalue",
    "this", "base", "namespace", "using", "class", "struct", "interface", "enum", "delegate",
    "checked", "unchecked", "unsafe", "operator", "implicit", "explicit",
];

/// Prefix that lets a keyword be used as an identifier (`@class`).
pub const ESCAPE_PREFIX: char = '@';

/// Character substituted for anything that is not legal in an identifier.
pub const REPLACEMENT_CHAR: char = '_';

/// Extra characters an identifier may contain beyond letters, digits and `_`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentifierRules {
    /// Allow `.` for qualified names (`System.Collections`).
    pub allow_dots: bool,
    /// Allow `<` and `>` for generic type names (`List<Item>`).
    pub allow_generics: bool,
}

impl IdentifierRules {
    /// Plain member identifiers: fields, properties, methods, parameters.
    pub const PLAIN: Self = Self {
        allow_dots: false,
        allow_generics: false,
    };

    /// Namespace names.
    pub const NAMESPACE: Self = Self {
        allow_dots: true,
        allow_generics: false,
    };

    /// Type names, base types and interface names.
    pub const TYPE_NAME: Self = Self {
        allow_dots: true,
        allow_generics: true,
    };

    fn allows(&self, c: char) -> bool {
        (self.allow_dots && c == '.') || (self.allow_generics && matches!(c, '<' | '>'))
    }
}

/// Check if a name is one of the reserved C# keywords.
pub fn is_reserved_keyword(name: &str) -> bool {
    CSHARP_KEYWORDS.contains(&name)
}

/// Check that `name` is usable as a C# identifier under the given rules.
///
/// The first character must be a letter, `_` or the `@` escape prefix; the
/// rest must be letters, digits, `_`, or whatever `rules` additionally allows.
/// Reserved keywords are rejected unless escaped.
pub fn is_valid_identifier(name: &str, rules: IdentifierRules) -> bool {
    if name.is_empty() || name == "@" {
        return false;
    }

    let all_legal = name.char_indices().all(|(i, c)| {
        is_identifier_char(c, i == 0) || (i == 0 && c == ESCAPE_PREFIX) || rules.allows(c)
    });

    all_legal && !is_reserved_keyword(name)
}

/// Replace every character that cannot appear in an identifier with
/// `replacement`, then trim `replacement` from both ends.
///
/// A leading digit left over after trimming gets a `replacement` prefix, and a
/// result that collides with a keyword is escaped with `@`.
pub fn replace_illegal_chars(name: &str, replacement: char) -> String {
    let replaced: String = name
        .char_indices()
        .map(|(i, c)| {
            if is_identifier_char(c, i == 0) {
                c
            } else {
                replacement
            }
        })
        .collect();

    let trimmed = replaced.trim_matches(replacement);

    if trimmed.starts_with(|c: char| c.is_ascii_digit()) {
        format!("{replacement}{trimmed}")
    } else if is_reserved_keyword(trimmed) {
        format!("{ESCAPE_PREFIX}{trimmed}")
    } else {
        trimmed.to_string()
    }
}

/// Trim `identifier` and repair it into a legal C# identifier.
///
/// Returns `None` for blank input, or when nothing usable is left after
/// repair. Valid identifiers come back unchanged (apart from trimming).
pub fn sanitize_identifier(identifier: &str) -> Option<String> {
    let trimmed = identifier.trim();
    if trimmed.is_empty() {
        return None;
    }

    if is_valid_identifier(trimmed, IdentifierRules::PLAIN) {
        return Some(trimmed.to_string());
    }

    let sanitized = replace_illegal_chars(trimmed, REPLACEMENT_CHAR);
    if sanitized.is_empty() {
        tracing::warn!(identifier = trimmed, "identifier has no usable characters");
        return None;
    }

    tracing::warn!(
        identifier = trimmed,
        sanitized = %sanitized,
        "not a valid C# identifier, replaced"
    );
    Some(sanitized)
}

fn is_identifier_char(c: char, first: bool) -> bool {
    c == '_' || c.is_ascii_alphabetic() || (!first && c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(is_valid_identifier("count", IdentifierRules::PLAIN));
        assert!(is_valid_identifier("_count", IdentifierRules::PLAIN));
        assert!(is_valid_identifier("count2", IdentifierRules::PLAIN));
        assert!(is_valid_identifier("@class", IdentifierRules::PLAIN));
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(!is_valid_identifier("", IdentifierRules::PLAIN));
        assert!(!is_valid_identifier("@", IdentifierRules::PLAIN));
        assert!(!is_valid_identifier("2count", IdentifierRules::PLAIN));
        assert!(!is_valid_identifier("my count", IdentifierRules::PLAIN));
        assert!(!is_valid_identifier("a@b", IdentifierRules::PLAIN));
        assert!(!is_valid_identifier("class", IdentifierRules::PLAIN));
    }

    #[test]
    fn test_rules_allow_extra_chars() {
        assert!(!is_valid_identifier("Game.Data", IdentifierRules::PLAIN));
        assert!(is_valid_identifier("Game.Data", IdentifierRules::NAMESPACE));
        assert!(!is_valid_identifier("List<Item>", IdentifierRules::NAMESPACE));
        assert!(is_valid_identifier("List<Item>", IdentifierRules::TYPE_NAME));
        assert!(is_valid_identifier(
            "System.Collections.Generic.List<Item>",
            IdentifierRules::TYPE_NAME
        ));
    }

    #[test]
    fn test_replace_illegal_chars() {
        assert_eq!(replace_illegal_chars("my count", '_'), "my_count");
        assert_eq!(replace_illegal_chars("-max hp!", '_'), "max_hp");
        assert_eq!(replace_illegal_chars("1st", '_'), "st");
        assert_eq!(replace_illegal_chars("-1st", '_'), "_1st");
        assert_eq!(replace_illegal_chars("class", '_'), "@class");
        assert_eq!(replace_illegal_chars("!!!", '_'), "");
    }

    #[test]
    fn test_sanitize_identifier() {
        assert_eq!(sanitize_identifier("  count "), Some("count".to_string()));
        assert_eq!(sanitize_identifier("hit points"), Some("hit_points".to_string()));
        assert_eq!(sanitize_identifier("class"), Some("@class".to_string()));
        assert_eq!(sanitize_identifier("@class"), Some("@class".to_string()));
        assert_eq!(sanitize_identifier(""), None);
        assert_eq!(sanitize_identifier("   "), None);
        assert_eq!(sanitize_identifier("$%&"), None);
    }

    fn arb_valid_identifier() -> impl Strategy<Value = String> {
        "[A-Za-z_][A-Za-z0-9_]{0,12}".prop_filter("not a keyword", |s| !is_reserved_keyword(s))
    }

    proptest! {
        #[test]
        fn sanitize_keeps_valid_identifiers(ident in arb_valid_identifier()) {
            prop_assert_eq!(sanitize_identifier(&ident), Some(ident.clone()));
        }

        #[test]
        fn sanitize_output_is_always_legal(raw in "\\PC{0,24}") {
            if let Some(out) = sanitize_identifier(&raw) {
                prop_assert!(is_valid_identifier(&out, IdentifierRules::PLAIN), "{:?} -> {:?}", raw, out);
            }
        }

        #[test]
        fn sanitize_is_idempotent(raw in "[ -~]{0,24}") {
            let once = sanitize_identifier(&raw);
            let twice = once.as_deref().and_then(sanitize_identifier);
            prop_assert_eq!(once, twice);
        }
    }
}
