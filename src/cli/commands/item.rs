//! `braid item` command - RAID log item management

use chrono::{NaiveDate, Utc};
use clap::{Subcommand, ValueEnum};
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use miette::{IntoDiagnostic, Result};
use std::fs;
use std::path::PathBuf;

use crate::cli::filters::{DraftFilter, IndicatorFilter, PriorityFilter, TypeFilter};
use crate::cli::helpers::{format_short_id, indicator_cell, parse_date, truncate_str};
use crate::cli::output::effective_format;
use crate::cli::OutputFormat;
use crate::core::entity::Priority;
use crate::core::indicator::{calculate_indicator, indicator_severity};
use crate::core::project::Project;
use crate::core::shortid::ShortIdIndex;
use crate::core::Config;
use crate::entities::item::{Item, ItemType};
use crate::schema::template::TemplateGenerator;

#[derive(Subcommand, Debug)]
pub enum ItemCommands {
    /// List items with filtering
    List(ListArgs),

    /// Create a new item
    New(NewArgs),

    /// Show an item's details
    Show(ShowArgs),

    /// Update fields on an item
    Set(SetArgs),

    /// Mark an item 100% complete
    Done(DoneArgs),

    /// Delete an item
    Rm(RmArgs),
}

/// Sort key for list output
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum ListSort {
    /// Item number
    #[default]
    Num,
    /// Creation time
    Created,
    /// Indicator severity (most severe first)
    Severity,
    /// Finish date (earliest first, undated last)
    Finish,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    // ========== FILTERING OPTIONS ==========

    /// Filter by type
    #[arg(long, short = 't', default_value = "all")]
    pub r#type: TypeFilter,

    /// Filter by draft state
    #[arg(long, short = 'd', default_value = "active")]
    pub draft: DraftFilter,

    /// Filter by stored indicator
    #[arg(long, short = 'i', default_value = "all")]
    pub indicator: IndicatorFilter,

    /// Filter by priority
    #[arg(long, short = 'p', default_value = "all")]
    pub priority: PriorityFilter,

    /// Filter by workstream (name or ID)
    #[arg(long, short = 'w')]
    pub ws: Option<String>,

    /// Filter by assignee (exact match)
    #[arg(long, short = 'a')]
    pub assigned: Option<String>,

    /// Filter by tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Search in title and description (case-insensitive substring)
    #[arg(long)]
    pub search: Option<String>,

    // ========== OUTPUT CONTROL ==========

    /// Output format
    #[arg(long, short = 'f', default_value = "auto")]
    pub format: OutputFormat,

    /// Sort by field
    #[arg(long, default_value = "num")]
    pub sort: ListSort,

    /// Reverse sort order
    #[arg(long, short = 'r')]
    pub reverse: bool,

    /// Limit output to N items
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show count only, not the items
    #[arg(long)]
    pub count: bool,
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Item type (budget/risk/action/issue/decision/deliverable/plan)
    #[arg(long, short = 't', default_value = "action")]
    pub r#type: String,

    /// Title (if not provided, uses placeholder)
    #[arg(long)]
    pub title: Option<String>,

    /// Detailed description
    #[arg(long)]
    pub description: Option<String>,

    /// Workstream (name or ID)
    #[arg(long, short = 'w')]
    pub ws: Option<String>,

    /// Assignee name
    #[arg(long, short = 'a')]
    pub assigned: Option<String>,

    /// Planned start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<String>,

    /// Planned finish date (YYYY-MM-DD)
    #[arg(long)]
    pub finish: Option<String>,

    /// Hard deadline date (YYYY-MM-DD)
    #[arg(long)]
    pub deadline: Option<String>,

    /// Estimated duration in days
    #[arg(long)]
    pub duration: Option<u32>,

    /// Completion percentage (0-100)
    #[arg(long, default_value_t = 0)]
    pub percent: i32,

    /// Priority (low/medium/high/critical)
    #[arg(long, short = 'p')]
    pub priority: Option<String>,

    /// Tags (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Create as a draft (no indicator until published)
    #[arg(long)]
    pub draft: bool,

    /// Hide from client-facing reports
    #[arg(long)]
    pub internal: bool,

    /// Budget amount (Budget items)
    #[arg(long)]
    pub budget: Option<f64>,

    /// Use interactive wizard to fill in fields
    #[arg(long, short = 'i')]
    pub interactive: bool,

    /// Open in editor after creation
    #[arg(long, short = 'e')]
    pub edit: bool,

    /// Don't open in editor after creation
    #[arg(long)]
    pub no_edit: bool,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Item ID, unique ID prefix, short ID (ITEM@1/@1), or #number
    pub id: String,
}

#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Item ID, unique ID prefix, short ID (ITEM@1/@1), or #number
    pub id: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// New workstream (name or ID)
    #[arg(long, short = 'w')]
    pub ws: Option<String>,

    /// New assignee
    #[arg(long, short = 'a')]
    pub assigned: Option<String>,

    /// New start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<String>,

    /// New finish date (YYYY-MM-DD)
    #[arg(long)]
    pub finish: Option<String>,

    /// New deadline date (YYYY-MM-DD)
    #[arg(long)]
    pub deadline: Option<String>,

    /// New duration in days
    #[arg(long)]
    pub duration: Option<u32>,

    /// New completion percentage (0-100)
    #[arg(long)]
    pub percent: Option<i32>,

    /// New priority (low/medium/high/critical)
    #[arg(long, short = 'p')]
    pub priority: Option<String>,

    /// Replace tags (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub tags: Option<Vec<String>>,

    /// Set or clear the draft flag (true/false)
    #[arg(long)]
    pub draft: Option<bool>,

    /// Set client visibility (true/false)
    #[arg(long)]
    pub client_visible: Option<bool>,

    /// New budget amount
    #[arg(long)]
    pub budget: Option<f64>,
}

#[derive(clap::Args, Debug)]
pub struct DoneArgs {
    /// Item ID, unique ID prefix, short ID (ITEM@1/@1), or #number
    pub id: String,
}

#[derive(clap::Args, Debug)]
pub struct RmArgs {
    /// Item ID, unique ID prefix, short ID (ITEM@1/@1), or #number
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

pub fn run(cmd: ItemCommands) -> Result<()> {
    match cmd {
        ItemCommands::List(args) => run_list(args),
        ItemCommands::New(args) => run_new(args),
        ItemCommands::Show(args) => run_show(args),
        ItemCommands::Set(args) => run_set(args),
        ItemCommands::Done(args) => run_done(args),
        ItemCommands::Rm(args) => run_rm(args),
    }
}

// ============================================================================
// Shared helpers
// ============================================================================

/// Load all items with their file paths, warning on parse failures
pub fn load_items(project: &Project) -> Vec<(PathBuf, Item)> {
    let mut items = Vec::new();
    for path in project.iter_item_files() {
        match crate::yaml::parse_yaml_file::<Item>(&path) {
            Ok(item) => items.push((path, item)),
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
    items
}

/// Find a single item by full ID, unique ID prefix, short ID, or #number
fn find_item(project: &Project, reference: &str) -> Result<(PathBuf, Item)> {
    let items = load_items(project);

    // #N matches the item number
    if let Some(num) = reference.strip_prefix('#') {
        let num: u32 = num
            .parse()
            .map_err(|_| miette::miette!("Invalid item number: {}", reference))?;
        return items
            .into_iter()
            .find(|(_, i)| i.item_num == num)
            .ok_or_else(|| miette::miette!("No item with number #{}", num));
    }

    // Short ID aliases (ITEM@1 / @1)
    if reference.contains('@') {
        let index = ShortIdIndex::load(project);
        let full = index
            .resolve(reference)
            .ok_or_else(|| {
                miette::miette!(
                    "Unknown short ID: {} (run 'braid item list' to refresh aliases)",
                    reference
                )
            })?
            .to_string();
        return items
            .into_iter()
            .find(|(_, i)| i.id.to_string() == full)
            .ok_or_else(|| miette::miette!("Short ID {} points at a missing item", reference));
    }

    // Full ID or unique prefix
    let mut matches = items
        .into_iter()
        .filter(|(_, i)| i.id.matches_fragment(reference));
    match (matches.next(), matches.next()) {
        (Some(found), None) => Ok(found),
        (None, _) => Err(miette::miette!("No item matching '{}'", reference)),
        (Some(_), Some(_)) => Err(miette::miette!(
            "'{}' is ambiguous; use more characters of the ID",
            reference
        )),
    }
}

/// Resolve a workstream reference (name or ID fragment) to its entity ID
fn resolve_workstream(project: &Project, reference: &str) -> Result<crate::core::EntityId> {
    let streams = crate::cli::commands::ws::load_workstreams(project);
    let by_name = streams
        .iter()
        .find(|ws| ws.name.eq_ignore_ascii_case(reference));
    let by_id = streams.iter().find(|ws| ws.id.matches_fragment(reference));
    by_name
        .or(by_id)
        .map(|ws| ws.id.clone())
        .ok_or_else(|| miette::miette!("No workstream matching '{}'", reference))
}

/// Render and write an item file, returning its path
fn write_item(project: &Project, item: &Item) -> Result<PathBuf> {
    let generator = TemplateGenerator::new().map_err(|e| miette::miette!("{}", e))?;
    let yaml = generator
        .generate_item(item)
        .map_err(|e| miette::miette!("{}", e))?;
    let path = project.item_path(item);
    fs::write(&path, yaml).into_diagnostic()?;
    Ok(path)
}

/// Upstream validation of user-supplied schedule fields.
///
/// The indicator engine itself tolerates anything; bad values are rejected
/// here at the entry point instead.
fn validate_schedule(
    percent: i32,
    start: Option<NaiveDate>,
    finish: Option<NaiveDate>,
) -> Result<()> {
    if !(0..=100).contains(&percent) {
        return Err(miette::miette!(
            "Percent complete must be between 0 and 100 (got {})",
            percent
        ));
    }
    if let (Some(s), Some(f)) = (start, finish) {
        if f < s {
            return Err(miette::miette!(
                "Finish date {} is before start date {}",
                f,
                s
            ));
        }
    }
    Ok(())
}

fn parse_priority(s: &str) -> Result<Priority> {
    s.parse::<Priority>().map_err(|e| {
        miette::miette!("{}. Use low/medium/high/critical", e)
    })
}

// ============================================================================
// new
// ============================================================================

fn run_new(args: NewArgs) -> Result<()> {
    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;
    let config = Config::load();
    let theme = ColorfulTheme::default();

    let (item_type, title, priority) = if args.interactive {
        // Interactive wizard mode
        let types: Vec<&str> = ItemType::all().iter().map(|t| t.as_str()).collect();
        let type_selection = Select::with_theme(&theme)
            .with_prompt("Item type")
            .items(&types)
            .default(2)
            .interact()
            .into_diagnostic()?;
        let item_type = ItemType::all()[type_selection];

        let title: String = Input::with_theme(&theme)
            .with_prompt("Title")
            .interact_text()
            .into_diagnostic()?;

        let priorities = &["low", "medium", "high", "critical", "(none)"];
        let priority_selection = Select::with_theme(&theme)
            .with_prompt("Priority")
            .items(priorities)
            .default(1)
            .interact()
            .into_diagnostic()?;
        let priority = match priority_selection {
            0 => Some(Priority::Low),
            1 => Some(Priority::Medium),
            2 => Some(Priority::High),
            3 => Some(Priority::Critical),
            _ => None,
        };

        (item_type, title, priority)
    } else {
        let item_type = args
            .r#type
            .parse::<ItemType>()
            .map_err(|e| miette::miette!("{}. Use budget/risk/action/issue/decision/deliverable/plan", e))?;
        let title = args.title.unwrap_or_else(|| "New Item".to_string());
        let priority = match args.priority.as_deref() {
            Some(p) => Some(parse_priority(p)?),
            None => None,
        };
        (item_type, title, priority)
    };

    let start = args.start.as_deref().map(parse_date).transpose().map_err(|e| miette::miette!(e))?;
    let finish = args.finish.as_deref().map(parse_date).transpose().map_err(|e| miette::miette!(e))?;
    let deadline = args.deadline.as_deref().map(parse_date).transpose().map_err(|e| miette::miette!(e))?;

    validate_schedule(args.percent, start, finish)?;

    let workstream = match args.ws.as_deref() {
        Some(reference) => Some(resolve_workstream(&project, reference)?),
        None => None,
    };

    let num = project
        .allocate_item_num()
        .map_err(|e| miette::miette!("{}", e))?;

    let mut item = Item::new(item_type, title, config.author()).with_num(num);
    item.description = args.description;
    item.workstream = workstream;
    item.assigned_to = args.assigned;
    item.start_date = start;
    item.finish_date = finish;
    item.deadline = deadline;
    item.duration_days = args.duration;
    item.percent_complete = args.percent;
    item.priority = priority;
    item.tags = args.tags;
    item.draft = args.draft;
    item.client_visible = !args.internal;
    item.budget_amount = args.budget;

    // Assign the initial indicator before the file is first written
    let today = chrono::Local::now().date_naive();
    item.indicator = calculate_indicator(&item, today);

    let file_path = write_item(&project, &item)?;

    println!(
        "{} Created item #{} {}",
        style("✓").green(),
        style(item.item_num).cyan(),
        style(format_short_id(&item.id)).cyan()
    );
    if let Some(indicator) = item.indicator {
        println!("   Indicator: {}", style(indicator).yellow());
    }
    println!("   {}", style(file_path.display()).dim());

    // Open in editor if requested (or by default unless --no-edit)
    if args.edit || (!args.no_edit && !args.interactive) {
        let editor = config.editor();
        println!();
        println!("Opening in {}...", style(&editor).yellow());

        std::process::Command::new(&editor)
            .arg(&file_path)
            .status()
            .into_diagnostic()?;
    }

    Ok(())
}

// ============================================================================
// list
// ============================================================================

fn run_list(args: ListArgs) -> Result<()> {
    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;
    let mut items: Vec<Item> = load_items(&project).into_iter().map(|(_, i)| i).collect();

    let ws_filter = match args.ws.as_deref() {
        Some(reference) => Some(resolve_workstream(&project, reference)?),
        None => None,
    };

    items.retain(|item| {
        args.r#type.matches(item.item_type)
            && args.draft.matches(item.draft)
            && args.indicator.matches(item.indicator)
            && args.priority.matches(item.priority)
            && ws_filter
                .as_ref()
                .is_none_or(|ws| item.workstream.as_ref() == Some(ws))
            && args
                .assigned
                .as_deref()
                .is_none_or(|a| item.assigned_to.as_deref() == Some(a))
            && args
                .tag
                .as_deref()
                .is_none_or(|t| item.tags.iter().any(|tag| tag == t))
            && args.search.as_deref().is_none_or(|needle| {
                let needle = needle.to_lowercase();
                item.title.to_lowercase().contains(&needle)
                    || item
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            })
    });

    match args.sort {
        ListSort::Num => items.sort_by_key(|i| i.item_num),
        ListSort::Created => items.sort_by_key(|i| i.created),
        ListSort::Severity => {
            items.sort_by(|a, b| {
                indicator_severity(b.indicator)
                    .cmp(&indicator_severity(a.indicator))
                    .then(a.item_num.cmp(&b.item_num))
            });
        }
        ListSort::Finish => {
            items.sort_by(|a, b| match (a.finish_date, b.finish_date) {
                (Some(fa), Some(fb)) => fa.cmp(&fb),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => a.item_num.cmp(&b.item_num),
            });
        }
    }
    if args.reverse {
        items.reverse();
    }
    if let Some(limit) = args.limit {
        items.truncate(limit);
    }

    if args.count {
        println!("{}", items.len());
        return Ok(());
    }

    if items.is_empty() {
        println!("No items found.");
        println!();
        println!(
            "Create one with: {}",
            style("braid item new --type risk --title \"...\"").yellow()
        );
        return Ok(());
    }

    // Refresh short ID aliases to match this listing
    let mut index = ShortIdIndex::load(&project);
    index.rebuild(items.iter().map(|i| i.id.to_string()));
    if let Err(e) = index.save(&project) {
        eprintln!("{} Failed to save short ID index: {}", style("!").yellow(), e);
    }

    match effective_format(args.format, true) {
        OutputFormat::Tsv => {
            for item in &items {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    item.id,
                    item.item_num,
                    item.item_type,
                    item.title,
                    item.percent_complete,
                    indicator_cell(item.indicator)
                );
            }
            return Ok(());
        }
        OutputFormat::Yaml => {
            print!(
                "{}",
                serde_yml::to_string(&items).map_err(|e| miette::miette!("{}", e))?
            );
            return Ok(());
        }
        OutputFormat::Auto | OutputFormat::Table => {}
    }

    // Print header - column widths: ID(16), NUM(5), TYPE(12), TITLE(34), %(5), INDICATOR(18)
    println!(
        "{:<16} {:<5} {:<12} {:<34} {:>4}  {:<18}",
        style("ID").bold(),
        style("NUM").bold(),
        style("TYPE").bold(),
        style("TITLE").bold(),
        style("%").bold(),
        style("INDICATOR").bold()
    );
    println!("{}", "-".repeat(94));

    for item in &items {
        println!(
            "{:<16} {:<5} {:<12} {:<34} {:>4}  {:<18}",
            format_short_id(&item.id),
            format!("#{}", item.item_num),
            item.item_type,
            truncate_str(&item.title, 32),
            item.percent_complete,
            indicator_cell(item.indicator)
        );
    }

    println!();
    println!("{} item(s) found", style(items.len()).cyan());

    Ok(())
}

// ============================================================================
// show
// ============================================================================

fn run_show(args: ShowArgs) -> Result<()> {
    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;
    let (path, item) = find_item(&project, &args.id)?;

    println!("{}", style("─".repeat(60)).dim());
    println!(
        "{}: {}",
        style("ID").bold(),
        style(&item.id.to_string()).cyan()
    );
    println!("{}: #{}", style("Number").bold(), item.item_num);
    println!("{}: {}", style("Type").bold(), item.item_type);
    println!(
        "{}: {}",
        style("Title").bold(),
        style(&item.title).yellow()
    );
    if item.draft {
        println!("{}: {}", style("State").bold(), style("draft").magenta());
    }
    println!(
        "{}: {}%",
        style("Complete").bold(),
        item.percent_complete
    );
    println!(
        "{}: {}",
        style("Indicator").bold(),
        indicator_cell(item.indicator)
    );
    if let Some(priority) = item.priority {
        println!("{}: {}", style("Priority").bold(), priority);
    }
    if let Some(ref assigned) = item.assigned_to {
        println!("{}: {}", style("Assigned").bold(), assigned);
    }
    if let Some(ref ws) = item.workstream {
        println!("{}: {}", style("Workstream").bold(), ws);
    }
    if let Some(start) = item.start_date {
        println!("{}: {}", style("Start").bold(), start);
    }
    if let Some(finish) = item.finish_date {
        println!("{}: {}", style("Finish").bold(), finish);
    }
    if let Some(deadline) = item.deadline {
        println!("{}: {}", style("Deadline").bold(), deadline);
    }
    if let Some(duration) = item.duration_days {
        println!("{}: {} day(s)", style("Duration").bold(), duration);
    }
    if let Some(budget) = item.budget_amount {
        println!("{}: {:.2}", style("Budget").bold(), budget);
    }
    if !item.tags.is_empty() {
        println!("{}: {}", style("Tags").bold(), item.tags.join(", "));
    }
    println!("{}", style("─".repeat(60)).dim());

    if let Some(ref description) = item.description {
        if !description.is_empty() {
            println!();
            println!("{}", description);
            println!();
            println!("{}", style("─".repeat(60)).dim());
        }
    }

    let updated = item
        .updated
        .map(|u| u.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string());
    println!(
        "{}: {} | {}: {} | {}: {}",
        style("Author").dim(),
        item.author,
        style("Created").dim(),
        item.created.format("%Y-%m-%d %H:%M"),
        style("Updated").dim(),
        updated
    );
    println!("{}", style(path.display()).dim());

    Ok(())
}

// ============================================================================
// set / done
// ============================================================================

fn run_set(args: SetArgs) -> Result<()> {
    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;
    // The path is recomputed on write; `set` cannot change the item type,
    // so the file never moves
    let (_path, mut item) = find_item(&project, &args.id)?;

    if let Some(title) = args.title {
        item.title = title;
    }
    if let Some(description) = args.description {
        item.description = Some(description);
    }
    if let Some(reference) = args.ws.as_deref() {
        item.workstream = Some(resolve_workstream(&project, reference)?);
    }
    if let Some(assigned) = args.assigned {
        item.assigned_to = Some(assigned);
    }
    if let Some(s) = args.start.as_deref() {
        item.start_date = Some(parse_date(s).map_err(|e| miette::miette!(e))?);
    }
    if let Some(s) = args.finish.as_deref() {
        item.finish_date = Some(parse_date(s).map_err(|e| miette::miette!(e))?);
    }
    if let Some(s) = args.deadline.as_deref() {
        item.deadline = Some(parse_date(s).map_err(|e| miette::miette!(e))?);
    }
    if let Some(duration) = args.duration {
        item.duration_days = Some(duration);
    }
    if let Some(percent) = args.percent {
        item.percent_complete = percent;
    }
    if let Some(p) = args.priority.as_deref() {
        item.priority = Some(parse_priority(p)?);
    }
    if let Some(tags) = args.tags {
        item.tags = tags;
    }
    if let Some(draft) = args.draft {
        item.draft = draft;
    }
    if let Some(visible) = args.client_visible {
        item.client_visible = visible;
    }
    if let Some(budget) = args.budget {
        item.budget_amount = Some(budget);
    }

    validate_schedule(item.percent_complete, item.start_date, item.finish_date)?;

    item.updated = Some(Utc::now());

    // Recalculate the indicator; persist only a real transition
    let today = chrono::Local::now().date_naive();
    let stored = item.indicator;
    let fresh = calculate_indicator(&item, today);
    let transitioned = fresh != stored;
    if transitioned {
        item.indicator = fresh;
    }

    write_item(&project, &item)?;

    println!(
        "{} Updated item #{} {}",
        style("✓").green(),
        style(item.item_num).cyan(),
        style(format_short_id(&item.id)).cyan()
    );
    if transitioned {
        println!(
            "   Indicator: {} → {}",
            indicator_cell(stored),
            style(indicator_cell(fresh)).yellow()
        );
    }

    Ok(())
}

fn run_done(args: DoneArgs) -> Result<()> {
    run_set(SetArgs {
        id: args.id,
        title: None,
        description: None,
        ws: None,
        assigned: None,
        start: None,
        finish: None,
        deadline: None,
        duration: None,
        percent: Some(100),
        priority: None,
        tags: None,
        draft: None,
        client_visible: None,
        budget: None,
    })
}

// ============================================================================
// rm
// ============================================================================

fn run_rm(args: RmArgs) -> Result<()> {
    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;
    let (path, item) = find_item(&project, &args.id)?;

    if !args.force {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Delete item #{} '{}'?", item.item_num, item.title))
            .default(false)
            .interact()
            .into_diagnostic()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    fs::remove_file(&path).into_diagnostic()?;
    println!(
        "{} Deleted item #{} '{}'",
        style("✓").green(),
        item.item_num,
        item.title
    );

    Ok(())
}
