//! Method, constructor and indexer parameters.

use std::fmt;

use super::validate::{non_blank, sanitized};
use crate::DefinitionError;

/// A single parameter, rendered inline as `type identifier`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDefinition {
    ty: String,
    identifier: String,
}

impl ParameterDefinition {
    /// Create a parameter; the identifier is sanitized.
    pub fn new(ty: impl AsRef<str>, identifier: impl AsRef<str>) -> Result<Self, DefinitionError> {
        Ok(Self {
            ty: non_blank(ty.as_ref(), "parameter type")?,
            identifier: sanitized(identifier.as_ref(), "parameter name")?,
        })
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl fmt::Display for ParameterDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.identifier)
    }
}

/// Join parameters into the text between a declaration's parentheses.
pub(crate) fn parameter_list(params: &[ParameterDefinition]) -> String {
    params
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_display() {
        let param = ParameterDefinition::new(" float ", "speed").unwrap();
        assert_eq!(param.to_string(), "float speed");
    }

    #[test]
    fn test_parameter_identifier_is_sanitized() {
        let param = ParameterDefinition::new("string", "out").unwrap();
        assert_eq!(param.identifier(), "@out");
    }

    #[test]
    fn test_parameter_rejects_blank() {
        assert_eq!(
            ParameterDefinition::new("", "x"),
            Err(DefinitionError::Blank {
                what: "parameter type"
            })
        );
        assert_eq!(
            ParameterDefinition::new("int", "  "),
            Err(DefinitionError::Blank {
                what: "parameter name"
            })
        );
    }

    #[test]
    fn test_parameter_list() {
        let params = vec![
            ParameterDefinition::new("int", "x").unwrap(),
            ParameterDefinition::new("List<string>", "names").unwrap(),
        ];
        assert_eq!(parameter_list(&params), "int x, List<string> names");
        assert_eq!(parameter_list(&[]), "");
    }
}
