//! `braid report` command - severity-sorted status report
//!
//! Reports read the stored indicators; run `braid indicators recalc` first
//! to refresh them. Sorting uses the indicator severity ranking, most severe
//! first, so the items needing attention lead the report.

use clap::ValueEnum;
use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::PathBuf;
use tabled::{settings::Style, Table, Tabled};

use crate::cli::commands::item::load_items;
use crate::cli::helpers::indicator_cell;
use crate::core::indicator::indicator_severity;
use crate::core::project::Project;

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Boxed table for the terminal
    #[default]
    Table,
    /// CSV for spreadsheets
    Csv,
}

#[derive(clap::Args, Debug)]
pub struct ReportArgs {
    /// Output format
    #[arg(long, short = 'f', default_value = "table")]
    pub format: ReportFormat,

    /// Limit to client-visible, non-draft items
    #[arg(long)]
    pub client: bool,

    /// Write output to a file instead of stdout
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,
}

#[derive(Tabled, Serialize)]
struct ReportRow {
    #[tabled(rename = "#")]
    #[serde(rename = "num")]
    num: u32,

    #[tabled(rename = "TYPE")]
    #[serde(rename = "type")]
    item_type: String,

    #[tabled(rename = "TITLE")]
    title: String,

    #[tabled(rename = "ASSIGNED")]
    assigned: String,

    #[tabled(rename = "%")]
    #[serde(rename = "percent_complete")]
    percent: i32,

    #[tabled(rename = "INDICATOR")]
    indicator: String,

    #[tabled(rename = "SEV")]
    #[serde(rename = "severity")]
    severity: u8,
}

pub fn run(args: ReportArgs) -> Result<()> {
    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;
    let mut items: Vec<_> = load_items(&project).into_iter().map(|(_, i)| i).collect();

    items.retain(|item| !item.draft);
    if args.client {
        items.retain(|item| item.client_visible);
    }

    // Most severe first; stable tie-break on item number
    items.sort_by(|a, b| {
        indicator_severity(b.indicator)
            .cmp(&indicator_severity(a.indicator))
            .then(a.item_num.cmp(&b.item_num))
    });

    let rows: Vec<ReportRow> = items
        .iter()
        .map(|item| ReportRow {
            num: item.item_num,
            item_type: item.item_type.to_string(),
            title: item.title.clone(),
            assigned: item.assigned_to.clone().unwrap_or_else(|| "-".to_string()),
            percent: item.percent_complete,
            indicator: indicator_cell(item.indicator),
            severity: indicator_severity(item.indicator),
        })
        .collect();

    let output = match args.format {
        ReportFormat::Table => {
            if rows.is_empty() {
                "No items to report.\n".to_string()
            } else {
                let mut table = Table::new(&rows);
                table.with(Style::sharp());
                format!("{}\n", table)
            }
        }
        ReportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for row in &rows {
                writer.serialize(row).into_diagnostic()?;
            }
            let bytes = writer.into_inner().into_diagnostic()?;
            String::from_utf8(bytes).into_diagnostic()?
        }
    };

    match args.out {
        Some(path) => {
            std::fs::write(&path, output).into_diagnostic()?;
            println!(
                "{} Wrote report ({} item(s)) to {}",
                style("✓").green(),
                rows.len(),
                style(path.display()).cyan()
            );
        }
        None => print!("{}", output),
    }

    Ok(())
}
