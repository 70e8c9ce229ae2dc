//! Daily bus entries as submitted and as stored after classification.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analyzers::types::{ArrivalAnalysis, ArrivalStatus};
use crate::clock::ClockTime;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("bus number must be exactly 4 digits, got '{0}'")]
    BusNumber(String),
    #[error("travelling students ({travelling}) cannot exceed total students ({total})")]
    TravellingExceedsTotal { travelling: u32, total: u32 },
}

/// Raw fields of one bus's day, before classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusEntry {
    pub bus_number: String,
    pub date: NaiveDate,
    pub village: String,
    pub departure_time: ClockTime,
    pub arrival_time: ClockTime,
    pub total_students: u32,
    pub travelling_students: u32,
}

impl BusEntry {
    /// Checks the rules an entry form enforces before submission.
    pub fn validate(&self) -> Result<(), EntryError> {
        let bus = &self.bus_number;
        if bus.len() != 4 || !bus.bytes().all(|b| b.is_ascii_digit()) {
            return Err(EntryError::BusNumber(self.bus_number.clone()));
        }

        if self.travelling_students > self.total_students {
            return Err(EntryError::TravellingExceedsTotal {
                travelling: self.travelling_students,
                total: self.total_students,
            });
        }

        Ok(())
    }
}

/// A classified entry as kept in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub bus_number: String,
    pub date: NaiveDate,
    pub village: String,
    pub departure_time: ClockTime,
    pub arrival_time: ClockTime,
    pub total_students: u32,
    pub travelling_students: u32,
    /// Minutes late; 0 unless `arrival_status` is delayed.
    pub delayed_time: u32,
    pub arrival_status: ArrivalStatus,
}

impl DailyRecord {
    /// Merges the classifier output into an entry. Early magnitudes are not
    /// carried over.
    pub fn from_entry(entry: BusEntry, analysis: ArrivalAnalysis) -> Self {
        let BusEntry {
            bus_number,
            date,
            village,
            departure_time,
            arrival_time,
            total_students,
            travelling_students,
        } = entry;

        let delayed_time = match analysis.status {
            ArrivalStatus::Delayed => analysis.minutes,
            ArrivalStatus::Early | ArrivalStatus::OnTime => 0,
        };

        DailyRecord {
            bus_number,
            date,
            village,
            departure_time,
            arrival_time,
            total_students,
            travelling_students,
            delayed_time,
            arrival_status: analysis.status,
        }
    }
}
