//! Construction-time checks shared by all definitions.

use csgen_core::{IdentifierRules, is_valid_identifier, sanitize_identifier};

use crate::DefinitionError;

/// Trim `value`, rejecting blank input.
pub(crate) fn non_blank(value: &str, what: &'static str) -> Result<String, DefinitionError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DefinitionError::Blank { what });
    }
    Ok(trimmed.to_string())
}

/// Sanitize `value` into an identifier, rejecting blank input.
pub(crate) fn sanitized(value: &str, what: &'static str) -> Result<String, DefinitionError> {
    let trimmed = non_blank(value, what)?;
    sanitize_identifier(&trimmed).ok_or(DefinitionError::InvalidIdentifier {
        what,
        name: trimmed,
    })
}

/// Require `value` to already be a valid identifier under `rules`.
pub(crate) fn strict(
    value: &str,
    what: &'static str,
    rules: IdentifierRules,
) -> Result<String, DefinitionError> {
    if value.trim().is_empty() {
        return Err(DefinitionError::Blank { what });
    }
    if !is_valid_identifier(value, rules) {
        return Err(DefinitionError::InvalidIdentifier {
            what,
            name: value.to_string(),
        });
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(" int ", "type"), Ok("int".to_string()));
        assert_eq!(
            non_blank(" \t", "type"),
            Err(DefinitionError::Blank { what: "type" })
        );
    }

    #[test]
    fn test_sanitized() {
        assert_eq!(sanitized("hit points", "identifier"), Ok("hit_points".to_string()));
        assert_eq!(
            sanitized("?!", "identifier"),
            Err(DefinitionError::InvalidIdentifier {
                what: "identifier",
                name: "?!".to_string()
            })
        );
    }

    #[test]
    fn test_strict_does_not_repair() {
        assert_eq!(
            strict("Reset", "method name", IdentifierRules::PLAIN),
            Ok("Reset".to_string())
        );
        assert!(strict(" Reset", "method name", IdentifierRules::PLAIN).is_err());
        assert!(strict("void", "method name", IdentifierRules::PLAIN).is_err());
        assert_eq!(
            strict("", "method name", IdentifierRules::PLAIN),
            Err(DefinitionError::Blank {
                what: "method name"
            })
        );
    }
}
