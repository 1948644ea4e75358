//! Top-level CLI definition

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::completions::CompletionsArgs;
use crate::cli::commands::indicators::IndicatorCommands;
use crate::cli::commands::init::InitArgs;
use crate::cli::commands::item::ItemCommands;
use crate::cli::commands::report::ReportArgs;
use crate::cli::commands::validate::ValidateArgs;
use crate::cli::commands::ws::WsCommands;

/// braid - plain-text RAID log toolkit
#[derive(Parser, Debug)]
#[command(name = "braid", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new braid project in the current directory
    Init(InitArgs),

    /// Manage RAID log items
    #[command(subcommand)]
    Item(ItemCommands),

    /// Manage workstreams
    #[command(subcommand)]
    Ws(WsCommands),

    /// Recalculate and inspect status indicators
    #[command(subcommand)]
    Indicators(IndicatorCommands),

    /// Severity-sorted status report
    Report(ReportArgs),

    /// Validate project files
    Validate(ValidateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Output format for list-style commands
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pick a sensible format for the context
    #[default]
    Auto,
    /// Human-readable columns
    Table,
    /// Tab-separated values (pipe-friendly)
    Tsv,
    /// Full YAML
    Yaml,
}
