//! Per-bus, append-only record history for one session.

use chrono::Utc;
use std::collections::BTreeMap;
use tracing::debug;

use crate::analyzers::aggregate::{summarize, window};
use crate::analyzers::arrival::classify_time;
use crate::analyzers::types::{ArrivalAnalysis, BusReport, LedgerReport, Summary};
use crate::clock::ClockTime;
use crate::record::{BusEntry, DailyRecord};

/// Records grouped by bus number, each sequence in submission order.
///
/// Records are never reordered, edited, or removed. Readers borrow slices;
/// summaries are recomputed on every call.
#[derive(Debug, Default)]
pub struct BusLedger {
    buses: BTreeMap<String, Vec<DailyRecord>>,
}

impl BusLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies `entry` against `target`, stores the resulting record, and
    /// returns the classification.
    pub fn submit(&mut self, entry: BusEntry, target: ClockTime) -> ArrivalAnalysis {
        let analysis = classify_time(entry.arrival_time, target);
        debug!(
            bus_number = %entry.bus_number,
            date = %entry.date,
            arrival = %entry.arrival_time,
            status = %analysis.status,
            minutes = analysis.minutes,
            "Entry classified"
        );

        self.append(DailyRecord::from_entry(entry, analysis));
        analysis
    }

    pub fn append(&mut self, record: DailyRecord) {
        self.buses
            .entry(record.bus_number.clone())
            .or_default()
            .push(record);
    }

    /// All records of `bus_number`, oldest first. Empty for unknown buses.
    pub fn records(&self, bus_number: &str) -> &[DailyRecord] {
        self.buses.get(bus_number).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn summary(&self, bus_number: &str) -> Option<Summary> {
        summarize(self.records(bus_number))
    }

    /// Bus numbers in ascending order.
    pub fn bus_numbers(&self) -> impl Iterator<Item = &str> {
        self.buses.keys().map(String::as_str)
    }

    /// Total number of records across all buses.
    pub fn len(&self) -> usize {
        self.buses.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buses.is_empty()
    }

    pub fn bus_report(&self, bus_number: &str) -> BusReport {
        let records = self.records(bus_number);
        BusReport {
            bus_number: bus_number.to_string(),
            last_days: window(records).to_vec(),
            summary: summarize(records),
        }
    }

    pub fn report(&self, target: ClockTime) -> LedgerReport {
        LedgerReport {
            generated_at: Utc::now(),
            target_time: target,
            buses: self.bus_numbers().map(|bus| self.bus_report(bus)).collect(),
        }
    }
}
