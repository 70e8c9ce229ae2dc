//! Arrival classification and rolling-window aggregation.
//!
//! [`arrival`] classifies a single arrival against the target time, and
//! [`aggregate`] summarizes the most recent records of one bus.

pub mod aggregate;
pub mod arrival;
pub mod types;
pub mod utility;
