use crate::analyzers::types::{StatusCounts, Summary};
use crate::analyzers::utility::rounded_mean;
use crate::clock::ClockTime;
use crate::record::DailyRecord;

/// Number of most recent records a rolling summary covers.
pub const WINDOW_DAYS: usize = 3;

/// Returns the last `min(WINDOW_DAYS, len)` records in insertion order.
pub fn window(records: &[DailyRecord]) -> &[DailyRecord] {
    &records[records.len().saturating_sub(WINDOW_DAYS)..]
}

/// Averages times as linear minutes since midnight.
///
/// Times on both sides of midnight average incorrectly (`23:59` and `00:01`
/// give `12:00`); bus times all fall within one morning.
pub fn average_time(times: impl IntoIterator<Item = ClockTime>) -> Option<ClockTime> {
    let avg = rounded_mean(times.into_iter().map(ClockTime::minutes))?;
    ClockTime::from_minutes(avg)
}

/// Summarizes the most recent [`WINDOW_DAYS`] records of one bus.
///
/// Returns `None` when there are no records yet. The delay average mixes in
/// the zeros of early and on-time days, so it is the mean delay over the
/// whole window rather than over delayed days only.
pub fn summarize(records: &[DailyRecord]) -> Option<Summary> {
    let days = window(records);
    if days.is_empty() {
        return None;
    }

    Some(Summary {
        window_len: days.len(),
        avg_departure: average_time(days.iter().map(|d| d.departure_time))?,
        avg_arrival: average_time(days.iter().map(|d| d.arrival_time))?,
        avg_students: rounded_mean(days.iter().map(|d| d.travelling_students))?,
        avg_delay: rounded_mean(days.iter().map(|d| d.delayed_time))?,
        status_summary: days.iter().map(|d| d.arrival_status).collect::<StatusCounts>(),
    })
}
