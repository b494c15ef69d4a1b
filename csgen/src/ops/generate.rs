//! Generate operation - render the manifest and write the result.

use std::path::{Path, PathBuf};

use csgen_manifest::Manifest;
use eyre::{Context, Result};

use crate::{
    lower::{lower, resolve_indent},
    reports::GenerateReport,
};

/// Options for the generate operation.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Target file; `None` prints to stdout
    pub output: Option<PathBuf>,
    /// Space width overriding the manifest's `[format]`
    pub spaces: Option<u8>,
    /// Render without writing to disk
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(manifest: &Manifest, options: &GenerateOptions) -> Result<GenerateReport> {
    let indent = resolve_indent(options.spaces, &manifest.format);
    let file = lower(manifest)?;
    let code = file
        .render_with(indent)
        .wrap_err("Failed to render C# source")?;

    match &options.output {
        Some(path) if options.dry_run => Ok(GenerateReport::Preview {
            path: path.clone(),
            code,
        }),
        Some(path) => {
            write_file(path, &code)
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            tracing::debug!(path = %path.display(), bytes = code.len(), "wrote file");
            Ok(GenerateReport::Written {
                path: path.clone(),
                types: file.types().len(),
            })
        }
        None => Ok(GenerateReport::Stdout { code }),
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    const SRC: &str = r#"
namespace = "Foo"

[format]
indent = "spaces"
width = 2

[[types]]
name = "Bar"

[[types.fields]]
access = "private"
type = "int"
name = "count"
"#;

    const EXPECTED: &str = "namespace Foo\n{\n  public class Bar\n  {\n    private int count;\n  }\n}\n";

    fn manifest() -> Manifest {
        Manifest::from_str(SRC).unwrap()
    }

    #[test]
    fn test_generate_to_stdout() {
        let report = generate(&manifest(), &GenerateOptions::default()).unwrap();
        match report {
            GenerateReport::Stdout { code } => assert_eq!(code, EXPECTED),
            other => panic!("unexpected report: {other:?}"),
        }
    }

    #[test]
    fn test_generate_writes_nested_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Assets").join("Scripts").join("Bar.cs");

        let options = GenerateOptions {
            output: Some(path.clone()),
            ..GenerateOptions::default()
        };
        let report = generate(&manifest(), &options).unwrap();

        assert!(matches!(report, GenerateReport::Written { types: 1, .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), EXPECTED);
    }

    #[test]
    fn test_dry_run_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Bar.cs");

        let options = GenerateOptions {
            output: Some(path.clone()),
            dry_run: true,
            ..GenerateOptions::default()
        };
        let report = generate(&manifest(), &options).unwrap();

        assert!(matches!(report, GenerateReport::Preview { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_spaces_flag_overrides_format() {
        let options = GenerateOptions {
            spaces: Some(4),
            ..GenerateOptions::default()
        };
        let GenerateReport::Stdout { code } = generate(&manifest(), &options).unwrap() else {
            panic!("expected stdout report");
        };
        assert!(code.contains("\n        private int count;\n"));
    }
}
