//! `braid indicators` command - recalculate and inspect status indicators
//!
//! `recalc` is the batch path: every item is evaluated against one reference
//! date and only the items whose stored indicator differs are rewritten. The
//! project manifest records when the last full recalculation ran.

use chrono::Utc;
use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::helpers::indicator_cell;
use crate::cli::commands::item::load_items;
use crate::core::indicator::{calculate_indicators_batch, indicator_severity, Indicator};
use crate::core::project::Project;
use crate::schema::template::TemplateGenerator;

#[derive(Subcommand, Debug)]
pub enum IndicatorCommands {
    /// Recalculate all items and persist changed indicators
    Recalc(RecalcArgs),

    /// Show recalculation status and the severity distribution
    Status(StatusArgs),
}

#[derive(clap::Args, Debug)]
pub struct RecalcArgs {
    /// Reference date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_name = "DATE")]
    pub as_of: Option<String>,

    /// Show what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(clap::Args, Debug)]
pub struct StatusArgs {
    /// Reference date for staleness detection (YYYY-MM-DD, defaults to today)
    #[arg(long, value_name = "DATE")]
    pub as_of: Option<String>,
}

pub fn run(cmd: IndicatorCommands) -> Result<()> {
    match cmd {
        IndicatorCommands::Recalc(args) => run_recalc(args),
        IndicatorCommands::Status(args) => run_status(args),
    }
}

fn reference_date(as_of: Option<&str>) -> Result<chrono::NaiveDate> {
    match as_of {
        Some(s) => crate::cli::helpers::parse_date(s).map_err(|e| miette::miette!(e)),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

fn run_recalc(args: RecalcArgs) -> Result<()> {
    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;
    let today = reference_date(args.as_of.as_deref())?;

    // Drafts are included: the engine resolves them to "no indicator",
    // which clears anything stale left from before the item was drafted.
    let (paths, items): (Vec<_>, Vec<_>) = load_items(&project).into_iter().unzip();
    let total = items.len();
    let results = calculate_indicators_batch(&items, today);

    let generator = TemplateGenerator::new().map_err(|e| miette::miette!("{}", e))?;
    let mut updated = 0usize;

    for ((path, mut item), (id, fresh)) in paths.into_iter().zip(items).zip(results) {
        debug_assert_eq!(id, item.id);
        if fresh == item.indicator {
            continue;
        }

        println!(
            "  #{} {}: {} → {}",
            item.item_num,
            item.title,
            indicator_cell(item.indicator),
            style(indicator_cell(fresh)).yellow()
        );

        if !args.dry_run {
            item.indicator = fresh;
            let yaml = generator
                .generate_item(&item)
                .map_err(|e| miette::miette!("{}", e))?;
            std::fs::write(&path, yaml).map_err(|e| miette::miette!("{}", e))?;
        }
        updated += 1;
    }

    if args.dry_run {
        println!(
            "{} Would update {} of {} item(s) (dry run)",
            style("→").blue(),
            updated,
            total
        );
    } else {
        project
            .touch_indicators_updated(Utc::now())
            .map_err(|e| miette::miette!("{}", e))?;
        println!(
            "{} Recalculated {} item(s), {} updated",
            style("✓").green(),
            total,
            updated
        );
    }

    Ok(())
}

fn run_status(args: StatusArgs) -> Result<()> {
    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;
    let today = reference_date(args.as_of.as_deref())?;

    let manifest = project.manifest().map_err(|e| miette::miette!("{}", e))?;
    match manifest.indicators_updated {
        Some(when) => println!(
            "{}: {}",
            style("Last recalculated").bold(),
            when.format("%Y-%m-%d %H:%M UTC")
        ),
        None => println!(
            "{}: {}",
            style("Last recalculated").bold(),
            style("never").yellow()
        ),
    }

    let items: Vec<_> = load_items(&project).into_iter().map(|(_, i)| i).collect();

    // Distribution of stored indicators, most severe first
    let mut buckets: Vec<(Option<Indicator>, usize)> = Indicator::all()
        .iter()
        .rev()
        .map(|i| (Some(*i), 0))
        .chain(std::iter::once((None, 0)))
        .collect();
    for item in &items {
        if let Some(bucket) = buckets.iter_mut().find(|(k, _)| *k == item.indicator) {
            bucket.1 += 1;
        }
    }

    println!();
    for (indicator, count) in &buckets {
        if *count == 0 {
            continue;
        }
        println!(
            "  {:>3}  {:<20} (severity {})",
            style(count).cyan(),
            indicator_cell(*indicator),
            indicator_severity(*indicator)
        );
    }

    // Items whose stored indicator disagrees with a fresh evaluation
    let stale: Vec<_> = items
        .iter()
        .filter(|item| {
            crate::core::indicator::calculate_indicator(item, today) != item.indicator
        })
        .collect();

    println!();
    if stale.is_empty() {
        println!("{} All stored indicators are current", style("✓").green());
    } else {
        for item in &stale {
            println!(
                "{} #{} {} is stale ({})",
                style("!").yellow(),
                item.item_num,
                item.title,
                indicator_cell(item.indicator)
            );
        }
        println!(
            "{} {} item(s) need recalculation; run {}",
            style("!").yellow(),
            stale.len(),
            style("braid indicators recalc").yellow()
        );
    }

    Ok(())
}
