//! `braid ws` command - Workstream management

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};
use std::fs;

use crate::cli::helpers::format_short_id;
use crate::core::project::Project;
use crate::core::shortid::ShortIdIndex;
use crate::core::Config;
use crate::entities::workstream::Workstream;
use crate::schema::template::TemplateGenerator;

#[derive(Subcommand, Debug)]
pub enum WsCommands {
    /// Create a new workstream
    New(NewArgs),

    /// List workstreams
    List,
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Workstream name
    #[arg(long, short = 'n')]
    pub name: String,

    /// Display order (defaults to the end of the list)
    #[arg(long)]
    pub sort_order: Option<u32>,
}

pub fn run(cmd: WsCommands) -> Result<()> {
    match cmd {
        WsCommands::New(args) => run_new(args),
        WsCommands::List => run_list(),
    }
}

/// Load all workstreams, warning on files that fail to parse
pub fn load_workstreams(project: &Project) -> Vec<Workstream> {
    let mut streams = Vec::new();
    for path in project.iter_workstream_files() {
        match crate::yaml::parse_yaml_file::<Workstream>(&path) {
            Ok(ws) => streams.push(ws),
            Err(e) => {
                eprintln!(
                    "{} Failed to parse {}: {}",
                    style("!").yellow(),
                    path.display(),
                    e
                );
            }
        }
    }
    streams.sort_by_key(|ws| ws.sort_order);
    streams
}

fn run_new(args: NewArgs) -> Result<()> {
    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;
    let config = Config::load();

    let sort_order = args.sort_order.unwrap_or_else(|| {
        load_workstreams(&project)
            .last()
            .map(|ws| ws.sort_order + 1)
            .unwrap_or(0)
    });

    let ws = Workstream::new(args.name.clone(), sort_order, config.author());

    let generator = TemplateGenerator::new().map_err(|e| miette::miette!("{}", e))?;
    let yaml = generator
        .generate_workstream(&ws)
        .map_err(|e| miette::miette!("{}", e))?;
    let path = project.workstream_dir().join(ws.file_name());
    fs::write(&path, yaml).into_diagnostic()?;

    println!(
        "{} Created workstream {} '{}'",
        style("✓").green(),
        style(format_short_id(&ws.id)).cyan(),
        args.name
    );
    println!("   {}", style(path.display()).dim());

    Ok(())
}

fn run_list() -> Result<()> {
    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;
    let streams = load_workstreams(&project);

    if streams.is_empty() {
        println!("No workstreams found.");
        println!();
        println!(
            "Create one with: {}",
            style("braid ws new --name \"...\"").yellow()
        );
        return Ok(());
    }

    let mut index = ShortIdIndex::load(&project);
    index.rebuild(streams.iter().map(|ws| ws.id.to_string()));
    if let Err(e) = index.save(&project) {
        eprintln!("{} Failed to save short ID index: {}", style("!").yellow(), e);
    }

    println!(
        "{:<16} {:<6} {:<40}",
        style("ID").bold(),
        style("ORDER").bold(),
        style("NAME").bold()
    );
    println!("{}", "-".repeat(64));

    for ws in &streams {
        println!(
            "{:<16} {:<6} {:<40}",
            format_short_id(&ws.id),
            ws.sort_order,
            ws.name
        );
    }

    println!();
    println!("{} workstream(s) found", style(streams.len()).cyan());

    Ok(())
}
