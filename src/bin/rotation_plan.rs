//! Rotation planner CLI
//!
//! Runs the three-slot rotation engine for one configuration and prints
//! either a compact text summary or the full schedule as JSON.
//!
//! # Usage
//! ```bash
//! ./rotation-plan --work-days 14 --rest-days 7 --induction-days 5 --target-days 30
//! ./rotation-plan --config rotation.toml --format json > schedule.json
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use u_rotation::config::CONFIG_ENV_VAR;
use u_rotation::models::{Configuration, Schedule, ScheduleErrorKind, Slot};
use u_rotation::validation::validate_config;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Summary,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "rotation-plan")]
#[command(about = "Three-slot drilling rotation planner")]
#[command(version)]
struct Args {
    /// TOML configuration file (defaults to the standard search order)
    #[arg(short, long, env = CONFIG_ENV_VAR)]
    config: Option<PathBuf>,

    /// Work days per cycle
    #[arg(long)]
    work_days: Option<usize>,

    /// Rest days per cycle
    #[arg(long)]
    rest_days: Option<usize>,

    /// Induction days on the first cycle
    #[arg(long)]
    induction_days: Option<usize>,

    /// Drilling-day target
    #[arg(long)]
    target_days: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,

    /// Number of days shown in the summary strips
    #[arg(long, default_value = "63")]
    days: usize,
}

impl Args {
    fn configuration(&self) -> Result<Configuration> {
        let mut config = match &self.config {
            Some(path) => Configuration::load_from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => Configuration::load(),
        };

        if let Some(w) = self.work_days {
            config.regime.work_days = w;
        }
        if let Some(r) = self.rest_days {
            config.regime.rest_days = r;
        }
        if let Some(i) = self.induction_days {
            config.induction_days = i;
        }
        if let Some(t) = self.target_days {
            config.total_drilling_days = t;
        }

        Ok(config)
    }
}

// ============================================================================
// Output
// ============================================================================

fn strip(schedule: &Schedule, slot: Slot, days: usize) -> String {
    schedule
        .sequence(slot)
        .iter()
        .take(days)
        .map(|r| r.state.symbol())
        .collect()
}

fn counts_strip(schedule: &Schedule, days: usize) -> String {
    schedule
        .producer_counts
        .iter()
        .take(days)
        .map(|&c| char::from(b'0' + c))
        .collect()
}

fn print_summary(config: &Configuration, schedule: &Schedule, days: usize) {
    let stats = &schedule.stats;
    println!(
        "Regime {}/{}  induction {}  target {}",
        config.regime.work_days,
        config.regime.rest_days,
        config.induction_days,
        config.total_drilling_days
    );
    println!(
        "Horizon {} days, slot 3 enters on day {}",
        schedule.horizon_days, schedule.entry_day
    );
    println!();

    println!("Producer days");
    println!("  zero   {:>6}", stats.zero_producing_days);
    println!("  one    {:>6}", stats.one_producing_days);
    println!("  two    {:>6}", stats.two_producing_days);
    println!("  three  {:>6}", stats.three_producing_days);
    println!(
        "Slot 2: {} cycles, {:.1} average rest days",
        stats.slot_2_cycles, stats.slot_2_average_rest_days
    );
    println!(
        "Drilled days: {} / {} / {}",
        stats.drilled_days[0], stats.drilled_days[1], stats.drilled_days[2]
    );
    println!();

    println!("Defects");
    for kind in ScheduleErrorKind::ALL {
        println!("  {:<16} {:>6}", format!("{kind:?}"), schedule.errors_of_kind(kind).len());
    }
    println!();

    let shown = days.min(schedule.horizon_days);
    println!("First {shown} days (U up, I induction, D drilling, v down, . rest)");
    for slot in Slot::ALL {
        println!("  {slot}  {}", strip(schedule, slot, shown));
    }
    println!("  count   {}", counts_strip(schedule, shown));
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.configuration()?;

    if let Err(errors) = validate_config(&config) {
        for e in &errors {
            eprintln!("  - {e}");
        }
        bail!("invalid configuration ({} errors)", errors.len());
    }

    info!(
        work_days = config.regime.work_days,
        rest_days = config.regime.rest_days,
        induction_days = config.induction_days,
        target = config.total_drilling_days,
        "Planning rotation"
    );

    let schedule = u_rotation::run(&config);

    match args.format {
        OutputFormat::Summary => print_summary(&config, &schedule, args.days),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&schedule).context("serializing schedule")?;
            println!("{json}");
        }
    }

    Ok(())
}
