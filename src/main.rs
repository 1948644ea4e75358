use clap::Parser;
use miette::Result;

use braid::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Init(args) => braid::cli::commands::init::run(args),
        Commands::Item(cmd) => braid::cli::commands::item::run(cmd),
        Commands::Ws(cmd) => braid::cli::commands::ws::run(cmd),
        Commands::Indicators(cmd) => braid::cli::commands::indicators::run(cmd),
        Commands::Report(args) => braid::cli::commands::report::run(args),
        Commands::Validate(args) => braid::cli::commands::validate::run(args),
        Commands::Completions(args) => braid::cli::commands::completions::run(args),
    }
}
