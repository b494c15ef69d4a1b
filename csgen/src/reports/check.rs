//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    pub namespace: String,
    /// Number of using directives, duplicates included.
    pub usings: usize,
    pub types: Vec<TypeSummary>,
    /// Warning messages.
    pub warnings: Vec<String>,
}

/// One declared type, as listed by `csgen check`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSummary {
    /// `sealed class Player`
    pub declaration: String,
    pub members: usize,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        out.section(&format!("✓ {} is valid", self.config_path.display()));
        out.key_value("namespace", &self.namespace);
        out.key_value("usings", &self.usings.to_string());
        out.key_value("types", &self.types.len().to_string());
        for ty in &self.types {
            let plural = if ty.members == 1 { "" } else { "s" };
            out.list_item(&format!("{} ({} member{})", ty.declaration, ty.members, plural));
        }
    }
}
