//! Data types produced by classification and aggregation.

use crate::clock::ClockTime;
use crate::record::DailyRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Direction of an arrival relative to the target time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ArrivalStatus {
    Early,
    OnTime,
    Delayed,
}

impl ArrivalStatus {
    pub const ALL: [ArrivalStatus; 3] = [
        ArrivalStatus::Early,
        ArrivalStatus::OnTime,
        ArrivalStatus::Delayed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ArrivalStatus::Early => "early",
            ArrivalStatus::OnTime => "on-time",
            ArrivalStatus::Delayed => "delayed",
        }
    }
}

impl fmt::Display for ArrivalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArrivalStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArrivalStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown arrival status '{s}'"))
    }
}

/// Result of classifying a single arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrivalAnalysis {
    pub status: ArrivalStatus,
    /// Magnitude of the deviation from the target, 0 when on time.
    pub minutes: u32,
}

/// Occurrences of each status within a window.
///
/// Only observed statuses are stored; lookups of anything else yield 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StatusCounts(BTreeMap<ArrivalStatus, usize>);

impl StatusCounts {
    pub fn record(&mut self, status: ArrivalStatus) {
        *self.0.entry(status).or_default() += 1;
    }

    pub fn get(&self, status: ArrivalStatus) -> usize {
        self.0.get(&status).copied().unwrap_or(0)
    }

    /// Number of distinct statuses observed.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ArrivalStatus> for StatusCounts {
    fn from_iter<I: IntoIterator<Item = ArrivalStatus>>(iter: I) -> Self {
        let mut counts = StatusCounts::default();
        for status in iter {
            counts.record(status);
        }
        counts
    }
}

/// Rolling summary over the most recent records of one bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub window_len: usize,
    pub avg_departure: ClockTime,
    pub avg_arrival: ClockTime,
    pub avg_students: u32,
    pub avg_delay: u32,
    pub status_summary: StatusCounts,
}

/// Window records and summary for one bus.
#[derive(Debug, Serialize)]
pub struct BusReport {
    pub bus_number: String,
    pub last_days: Vec<DailyRecord>,
    pub summary: Option<Summary>,
}

/// Report over every bus in a ledger.
#[derive(Debug, Serialize)]
pub struct LedgerReport {
    pub generated_at: DateTime<Utc>,
    pub target_time: ClockTime,
    pub buses: Vec<BusReport>,
}
