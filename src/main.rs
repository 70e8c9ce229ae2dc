//! CLI entry point for the college bus tracker.
//!
//! Classifies single arrivals against the target time and builds per-bus
//! rolling summaries from a CSV of daily entries.

use anyhow::Result;
use bus_tracker::analyzers::arrival::{classify_time, describe};
use bus_tracker::clock::ClockTime;
use bus_tracker::config::Settings;
use bus_tracker::ledger::BusLedger;
use bus_tracker::output::{append_record, print_pretty, write_dashboard, write_json};
use bus_tracker::parser::parse_entries_file;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bus_tracker")]
#[command(about = "Track college bus arrivals against a target time", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single arrival time
    Classify {
        /// Arrival time as HH:MM
        #[arg(value_name = "ARRIVAL")]
        arrival: ClockTime,

        /// Target arrival time (defaults to BUS_TARGET_TIME or 08:15)
        #[arg(short, long)]
        target: Option<ClockTime>,
    },
    /// Load daily entries from CSV and show the rolling summary per bus
    Analyze {
        /// CSV file of daily entries, in submission order
        #[arg(value_name = "ENTRIES_CSV")]
        input: String,

        /// Target arrival time (defaults to BUS_TARGET_TIME or 08:15)
        #[arg(short, long)]
        target: Option<ClockTime>,

        /// Only report this bus number
        #[arg(short, long)]
        bus: Option<String>,

        /// Print the report as JSON instead of the dashboard
        #[arg(long, default_value_t = false)]
        json: bool,

        /// CSV file to append classified records to
        #[arg(short, long)]
        export: Option<String>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let settings = Settings::from_env()?;
    let _file_guard = init_logging(&settings.log_file_path);

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { arrival, target } => {
            let target = settings.with_target(target).target_time;
            let analysis = classify_time(arrival, target);
            info!(%arrival, %target, status = %analysis.status, minutes = analysis.minutes, "Arrival classified");
            println!("{}", describe(&analysis));
        }
        Commands::Analyze {
            input,
            target,
            bus,
            json,
            export,
        } => {
            let target = settings.with_target(target).target_time;
            analyze(&input, target, bus.as_deref(), json, export.as_deref())?;
        }
    }

    Ok(())
}

/// Logging setup: colored stderr + JSON rolling log file.
fn init_logging(log_file_path: &Path) -> WorkerGuard {
    let log_dir = log_file_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = log_file_path
        .file_name()
        .unwrap_or(OsStr::new("bus_tracker.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive(
            "info".parse().expect("static directive"),
        ));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive(
            "debug".parse().expect("static directive"),
        ));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    guard
}

/// Submits every valid entry to a fresh ledger in file order and renders the
/// resulting report.
#[tracing::instrument(skip(target, bus, json, export), fields(target = %target))]
fn analyze(
    input: &str,
    target: ClockTime,
    bus: Option<&str>,
    json: bool,
    export: Option<&str>,
) -> Result<()> {
    let entries = parse_entries_file(input)?;
    info!(count = entries.len(), "Entries loaded");

    let mut ledger = BusLedger::new();
    let mut skipped = 0usize;

    for (index, entry) in entries.into_iter().enumerate() {
        if let Err(e) = entry.validate() {
            warn!(row = index + 1, error = %e, "Skipping invalid entry");
            skipped += 1;
            continue;
        }
        ledger.submit(entry, target);
    }

    info!(
        records = ledger.len(),
        buses = ledger.bus_numbers().count(),
        skipped,
        "Ledger built"
    );

    if let Some(path) = export {
        for bus_number in ledger.bus_numbers() {
            for record in ledger.records(bus_number) {
                append_record(path, record)?;
            }
        }
        info!(path, "Classified records exported");
    }

    let mut report = ledger.report(target);
    if let Some(bus) = bus {
        report.buses.retain(|b| b.bus_number == bus);
        if report.buses.is_empty() {
            warn!(bus, "No entries for bus");
        }
    }
    print_pretty(&report);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        write_json(&mut out, &report)?;
    } else {
        write_dashboard(&mut out, &report)?;
    }
    out.flush()?;

    Ok(())
}
