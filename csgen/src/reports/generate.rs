//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Outcome of the generate operation.
#[derive(Debug)]
pub enum GenerateReport {
    /// No output path; the code is printed as-is.
    Stdout { code: String },
    /// Dry run with an output path.
    Preview { path: PathBuf, code: String },
    /// The code was written to `path`.
    Written { path: PathBuf, types: usize },
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match self {
            Self::Stdout { code } => out.code(code),
            Self::Preview { path, code } => {
                out.divider(&path.display().to_string());
                out.code(code);
                out.divider("Summary");
                out.status(&format!("{} would be written", path.display()));
            }
            Self::Written { path, types } => {
                let plural = if *types == 1 { "" } else { "s" };
                out.status(&format!("Generated: {} ({} type{})", path.display(), types, plural));
            }
        }
    }
}
