use std::io::{self, Write};

use clap::{Args, CommandFactory};
use eyre::Result;

use super::Cli;

#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    shell: clap_complete::Shell,
}

impl CompletionsCommand {
    pub fn run(&self) -> Result<()> {
        self.write_to(&mut io::stdout().lock())
    }

    /// Write the completion script for the configured shell to `out`.
    fn write_to(&self, out: &mut dyn Write) -> Result<()> {
        let mut cmd = Cli::command();
        let bin_name = cmd.get_name().to_string();
        tracing::debug!(shell = %self.shell, "generating completions for {bin_name}");
        clap_complete::generate(self.shell, &mut cmd, bin_name, out);
        out.flush()?;
        Ok(())
    }
}
