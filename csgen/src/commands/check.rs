use std::path::PathBuf;

use clap::Args;
use csgen_manifest::Manifest;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to csgen.toml (defaults to ./csgen.toml)
    #[arg(short, long, default_value = "csgen.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();
        let report = ops::check(&manifest, &self.config)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
