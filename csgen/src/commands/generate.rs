use std::path::PathBuf;

use clap::Args;
use csgen_codegen::MAX_INDENT_WIDTH;
use csgen_manifest::Manifest;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to csgen.toml (defaults to ./csgen.toml)
    #[arg(short, long, default_value = "csgen.toml")]
    pub config: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Indent with N spaces instead of the manifest's [format] setting
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=i64::from(MAX_INDENT_WIDTH)))]
    pub spaces: Option<u8>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();

        let options = GenerateOptions {
            output: self.output.clone(),
            spaces: self.spaces,
            dry_run: self.dry_run,
        };
        let report = ops::generate(&manifest, &options)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
