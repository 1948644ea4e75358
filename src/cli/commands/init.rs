//! `braid init` command - initialize a new project

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::core::project::Project;

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Project name (defaults to the directory name)
    #[arg(long)]
    pub name: Option<String>,

    /// Client/customer name shown on reports
    #[arg(long)]
    pub client: Option<String>,
}

pub fn run(args: InitArgs) -> Result<()> {
    let cwd = std::env::current_dir().into_diagnostic()?;
    let name = args.name.unwrap_or_else(|| {
        cwd.file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "project".to_string())
    });

    let project = Project::init(&cwd, name.clone()).map_err(|e| miette::miette!("{}", e))?;

    if let Some(client) = args.client {
        let mut manifest = project.manifest().map_err(|e| miette::miette!("{}", e))?;
        manifest.client_name = Some(client);
        project
            .save_manifest(&manifest)
            .map_err(|e| miette::miette!("{}", e))?;
    }

    println!(
        "{} Initialized braid project '{}'",
        style("✓").green(),
        style(&name).cyan()
    );
    println!();
    println!(
        "Create your first item with: {}",
        style("braid item new --type risk --title \"...\"").yellow()
    );

    Ok(())
}
