//! Check operation - manifest validation.

use std::path::Path;

use csgen_core::Keyword;
use csgen_manifest::Manifest;
use eyre::{Context, Result};

use crate::{
    lower::lower,
    reports::{CheckReport, TypeSummary},
};

/// Execute the check operation.
///
/// Lowers and renders the manifest in memory so every error the generate
/// command could hit is reported without writing anything.
pub fn check(manifest: &Manifest, config_path: &Path) -> Result<CheckReport> {
    let file = lower(manifest)?;
    file.render().wrap_err("Failed to render C# source")?;

    let types = file
        .types()
        .iter()
        .map(|ty| TypeSummary {
            declaration: format!("{}{}", ty.kind().text(), ty.identifier()),
            members: ty.fields().len()
                + ty.properties().len()
                + ty.constructors().len()
                + ty.methods().len()
                + ty.indexers().len(),
        })
        .collect();

    let mut warnings = Vec::new();
    if manifest.types.is_empty() {
        warnings.push("no types declared, the namespace block will be empty".to_string());
    }
    // Partial types commonly get their members from another file.
    for ty in file.types() {
        if ty.is_empty() && !ty.kind().is_partial() {
            warnings.push(format!("type '{}' declares no members", ty.identifier()));
        }
    }

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        namespace: manifest.namespace.clone(),
        usings: file.using_names().len(),
        types,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_check_summarizes_types() {
        let manifest = Manifest::from_str(
            r#"
namespace = "Game"
usings = ["System"]

[[types]]
kind = "struct"
name = "Point"

[[types.fields]]
type = "int"
name = "x"

[[types.fields]]
type = "int"
name = "y"
"#,
        )
        .unwrap();

        let report = check(&manifest, Path::new("csgen.toml")).unwrap();
        assert_eq!(report.namespace, "Game");
        assert_eq!(report.usings, 1);
        assert_eq!(report.types.len(), 1);
        assert_eq!(report.types[0].declaration, "struct Point");
        assert_eq!(report.types[0].members, 2);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_check_warns_on_empty_types_unless_partial() {
        let manifest = Manifest::from_str(
            r#"
namespace = "Game"

[[types]]
name = "Marker"

[[types]]
kind = "partial-class"
name = "Player"
"#,
        )
        .unwrap();

        let report = check(&manifest, Path::new("csgen.toml")).unwrap();
        assert_eq!(report.warnings, ["type 'Marker' declares no members"]);
    }

    #[test]
    fn test_check_warns_on_empty_file() {
        let manifest = Manifest::from_str(r#"namespace = "Game""#).unwrap();
        let report = check(&manifest, Path::new("csgen.toml")).unwrap();
        assert_eq!(report.warnings.len(), 1);
    }
}
