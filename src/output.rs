//! Rendering and export of ledger reports.
//!
//! Supports a plain-text dashboard, JSON serialization, and CSV append of
//! classified records.

use anyhow::Result;
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::analyzers::aggregate::WINDOW_DAYS;
use crate::analyzers::types::{
    ArrivalAnalysis, ArrivalStatus, BusReport, LedgerReport, Summary,
};
use crate::record::DailyRecord;

/// Logs a report using Rust's debug pretty-print format.
pub fn print_pretty(report: &LedgerReport) {
    debug!("{:#?}", report);
}

/// Writes a report as pretty-printed JSON followed by a newline.
pub fn write_json(mut w: impl Write, report: &LedgerReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut w, report)?;
    writeln!(w)?;
    Ok(())
}

/// Writes the per-bus dashboard: recent days followed by the rolling summary.
pub fn write_dashboard(mut w: impl Write, report: &LedgerReport) -> Result<()> {
    writeln!(w, "Target arrival time: {}", report.target_time)?;

    if report.buses.is_empty() {
        writeln!(w, "No entries yet.")?;
        return Ok(());
    }

    for bus in &report.buses {
        writeln!(w)?;
        write_bus(&mut w, bus)?;
    }

    Ok(())
}

fn write_bus(w: &mut impl Write, bus: &BusReport) -> Result<()> {
    writeln!(w, "{} Analysis", bus.bus_number)?;
    writeln!(w)?;
    writeln!(w, "Last {WINDOW_DAYS} Days Data")?;
    writeln!(
        w,
        "{:<10}  {:<16}  {:<9}  {:<7}  {:<18}  {}",
        "Date", "Village", "Departure", "Arrival", "Status", "Students"
    )?;

    for day in &bus.last_days {
        writeln!(
            w,
            "{:<10}  {:<16}  {:<9}  {:<7}  {:<18}  {}",
            day.date.to_string(),
            day.village,
            day.departure_time.to_string(),
            day.arrival_time.to_string(),
            status_text(day),
            day.travelling_students
        )?;
    }

    if let Some(summary) = &bus.summary {
        writeln!(w)?;
        write_summary(w, summary)?;
    }

    Ok(())
}

fn write_summary(w: &mut impl Write, summary: &Summary) -> Result<()> {
    let counts = &summary.status_summary;
    writeln!(w, "{WINDOW_DAYS}-Day Summary")?;
    writeln!(w, "  Avg. Departure:  {}", summary.avg_departure)?;
    writeln!(w, "  Avg. Arrival:    {}", summary.avg_arrival)?;
    writeln!(w, "  Avg. Students:   {}", summary.avg_students)?;
    writeln!(w, "  Avg. Delay:      {} min", summary.avg_delay)?;
    writeln!(
        w,
        "  Arrival Pattern: Early: {} | On-time: {} | Delayed: {}",
        counts.get(ArrivalStatus::Early),
        counts.get(ArrivalStatus::OnTime),
        counts.get(ArrivalStatus::Delayed)
    )?;
    Ok(())
}

/// Status text for a stored record. Records only keep the magnitude of
/// delays, so early days print without minutes.
fn status_text(day: &DailyRecord) -> String {
    match day.arrival_status {
        ArrivalStatus::Early => "Early".to_string(),
        status => ArrivalAnalysis {
            status,
            minutes: day.delayed_time,
        }
        .to_string(),
    }
}

/// Appends a [`DailyRecord`] as a row to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_record(path: &str, record: &DailyRecord) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists)
        .from_writer(file);

    writer.serialize(record)?;
    writer.flush()?;

    Ok(())
}
