//! `braid validate` command - check project files for problems
//!
//! Validation covers what the engine deliberately tolerates: out-of-range
//! percentages, inverted date ranges, duplicate item numbers, dangling
//! workstream references, and stored indicators that no longer match a fresh
//! evaluation.

use console::style;
use miette::Result;
use std::collections::{HashMap, HashSet};

use crate::cli::commands::ws::load_workstreams;
use crate::cli::helpers::indicator_cell;
use crate::core::indicator::calculate_indicator;
use crate::core::project::Project;
use crate::entities::item::Item;

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Strict mode - warnings become errors
    #[arg(long)]
    pub strict: bool,

    /// Reference date for staleness checks (YYYY-MM-DD, defaults to today)
    #[arg(long, value_name = "DATE")]
    pub as_of: Option<String>,

    /// Show summary only, don't show individual findings
    #[arg(long)]
    pub summary: bool,
}

/// Validation statistics
#[derive(Default)]
struct ValidationStats {
    files_checked: usize,
    files_failed: usize,
    total_errors: usize,
    total_warnings: usize,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;
    let today = match args.as_of.as_deref() {
        Some(s) => crate::cli::helpers::parse_date(s).map_err(|e| miette::miette!(e))?,
        None => chrono::Local::now().date_naive(),
    };

    let mut stats = ValidationStats::default();

    // Parse everything first; structural failures are errors in themselves
    let mut items: Vec<Item> = Vec::new();
    for path in project.iter_item_files() {
        stats.files_checked += 1;
        match crate::yaml::parse_yaml_file::<Item>(&path) {
            Ok(item) => items.push(item),
            Err(e) => {
                stats.files_failed += 1;
                stats.total_errors += 1;
                if !args.summary {
                    println!("{} {} - {}", style("✗").red(), path.display(), e);
                }
            }
        }
    }

    let workstream_ids: HashSet<String> = load_workstreams(&project)
        .iter()
        .map(|ws| ws.id.to_string())
        .collect();

    let mut num_counts: HashMap<u32, usize> = HashMap::new();
    for item in &items {
        *num_counts.entry(item.item_num).or_insert(0) += 1;
    }

    for item in &items {
        let mut errors: Vec<String> = Vec::new();
        let mut warnings: Vec<String> = Vec::new();

        if !(0..=100).contains(&item.percent_complete) {
            errors.push(format!(
                "percent_complete {} is out of range 0-100",
                item.percent_complete
            ));
        }

        if let (Some(start), Some(finish)) = (item.start_date, item.finish_date) {
            if finish < start {
                errors.push(format!(
                    "finish date {} is before start date {}",
                    finish, start
                ));
            }
        }

        if num_counts.get(&item.item_num).copied().unwrap_or(0) > 1 {
            errors.push(format!("item number #{} is not unique", item.item_num));
        }

        if let Some(ref ws) = item.workstream {
            if !workstream_ids.contains(&ws.to_string()) {
                errors.push(format!("workstream {} does not exist", ws));
            }
        }

        let fresh = calculate_indicator(item, today);
        if fresh != item.indicator {
            warnings.push(format!(
                "stored indicator {} is stale (fresh evaluation: {})",
                indicator_cell(item.indicator),
                indicator_cell(fresh)
            ));
        }

        stats.total_errors += errors.len();
        stats.total_warnings += warnings.len();

        if !args.summary {
            if errors.is_empty() && warnings.is_empty() {
                println!("{} #{} {}", style("✓").green(), item.item_num, item.title);
            } else {
                for error in &errors {
                    println!(
                        "{} #{} {} - {}",
                        style("✗").red(),
                        item.item_num,
                        item.title,
                        error
                    );
                }
                for warning in &warnings {
                    println!(
                        "{} #{} {} - {}",
                        style("!").yellow(),
                        item.item_num,
                        item.title,
                        warning
                    );
                }
            }
        }
    }

    println!();
    if stats.files_failed > 0 {
        println!(
            "{} {} of {} file(s) failed to parse",
            style("✗").red(),
            stats.files_failed,
            stats.files_checked
        );
    }
    println!(
        "{} file(s) checked: {} error(s), {} warning(s)",
        stats.files_checked, stats.total_errors, stats.total_warnings
    );

    let failed = stats.total_errors > 0 || (args.strict && stats.total_warnings > 0);
    if failed {
        return Err(miette::miette!("Validation failed"));
    }

    println!("{} Project is valid", style("✓").green());
    Ok(())
}
