//! `braid completions` command - shell completion scripts

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use miette::Result;

#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut cmd = crate::cli::Cli::command();
    generate(args.shell, &mut cmd, "braid", &mut std::io::stdout());
    Ok(())
}
