//! Command implementations for the result portal CLI

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::debug;

use crate::cli::args::{Args, Commands, InspectArgs, LookupArgs, OutputFormat};
use crate::config::PortalConfig;
use crate::demo::demo_lookup;
use crate::marksheet::Marksheet;
use crate::parser::parse_with_stats;
use crate::portal::{LookupOutcome, ResultPortal};
use crate::query::LookupQuery;
use crate::source::source_for;

/// How a command finished, mapped to the process exit code by `main`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    /// Lookup ran but the sheet holds no matching record
    NoResult,
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("result_portal={}", log_level)));

    // try_init: a second initialization (e.g. from tests) is not an error
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Main command runner
pub fn run(args: Args) -> Result<CommandStatus> {
    setup_logging(&args);

    let config = PortalConfig::load_layered(args.config_file.as_deref())
        .context("Failed to load configuration")?;

    match args.command {
        Some(Commands::Lookup(lookup_args)) => run_lookup(&lookup_args, config),
        Some(Commands::Colleges) => run_colleges(&config),
        Some(Commands::Inspect(inspect_args)) => run_inspect(&inspect_args, &config),
        None => Ok(CommandStatus::Success),
    }
}

/// Look up a student and print the marksheet
pub fn run_lookup(args: &LookupArgs, config: PortalConfig) -> Result<CommandStatus> {
    let query = LookupQuery::new(&args.college, &args.standard, &args.roll_number)?;

    let outcome = if args.demo {
        demo_lookup(&config, &query)?
    } else {
        ResultPortal::new(config)
            .check_result(&query)
            .context("Failed to fetch result data. Please check your connection and try again.")?
    };

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&outcome)
                .context("Failed to serialize lookup result")?;
            println!("{}", json);
        }
        OutputFormat::Text => print_outcome(&outcome),
    }

    Ok(if outcome.is_found() {
        CommandStatus::Success
    } else {
        CommandStatus::NoResult
    })
}

fn print_outcome(outcome: &LookupOutcome) {
    match outcome {
        LookupOutcome::Found { .. } => {
            if let Some(marksheet) = outcome.marksheet() {
                print_marksheet(&marksheet);
            }
        }
        LookupOutcome::NotFound { message } => {
            println!("{}", message.bright_red());
        }
    }
}

fn print_marksheet(marksheet: &Marksheet) {
    let text = marksheet.to_string();
    let mut lines = text.lines();

    if let Some(title) = lines.next() {
        println!("{}", title.bright_green().bold());
    }
    for line in lines {
        println!("{}", line);
    }

    let verdict = if marksheet.passed {
        marksheet.status.bright_green().bold()
    } else {
        marksheet.status.bright_red().bold()
    };
    println!();
    println!("Result: {}", verdict);
}

/// List configured colleges
pub fn run_colleges(config: &PortalConfig) -> Result<CommandStatus> {
    println!("{}", "Configured colleges:".bright_green().bold());
    println!();
    for college in &config.colleges {
        println!(
            "  {} {}",
            college.id.bright_yellow().bold(),
            college.name.bright_cyan()
        );
        println!("      {}", college.csv_url.bright_black());
    }
    Ok(CommandStatus::Success)
}

/// Parse a sheet and report what was kept and dropped
pub fn run_inspect(args: &InspectArgs, config: &PortalConfig) -> Result<CommandStatus> {
    let source = source_for(&args.source, config.request_timeout_secs)?;
    let text = source
        .fetch_text()
        .with_context(|| format!("Failed to read {}", args.source))?;
    let result = parse_with_stats(&text);
    let stats = &result.stats;

    println!("{}", format!("Sheet: {}", source.describe()).bright_green().bold());
    println!("  Data rows:      {}", stats.total_rows);
    println!("  Blank lines:    {}", stats.blank_rows);
    println!("  Records kept:   {}", stats.records_parsed);
    println!("  Rows dropped:   {}", stats.rows_dropped);
    println!("  Success rate:   {:.1}%", stats.success_rate());

    if args.show_dropped {
        for reason in &stats.drop_reasons {
            println!("    {}", reason.yellow());
        }
    }

    Ok(CommandStatus::Success)
}
