mod check;
mod completions;
mod generate;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for csgen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "csgen")]
#[command(version)]
#[command(about = "Assemble C# source files from TOML definitions")]
pub(crate) struct Cli {
    /// Log debug events to stderr (overridden by CSGEN_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render csgen.toml to C# source
    Generate(GenerateCommand),

    /// Validate csgen.toml without writing anything
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::try_parse_from([
            "csgen", "generate", "-c", "game.toml", "-o", "out/Game.cs", "--spaces", "2", "-v",
        ])
        .unwrap();
        assert!(cli.verbose());
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn test_spaces_out_of_range() {
        assert!(Cli::try_parse_from(["csgen", "generate", "--spaces", "0"]).is_err());
        assert!(Cli::try_parse_from(["csgen", "generate", "--spaces", "17"]).is_err());
    }
}
