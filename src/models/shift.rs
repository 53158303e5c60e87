use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One scheduled shift slot. Hours are whole local hours in [0, 24).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Shift {
    /// Human-readable label, e.g. "10:00 - 12:00".
    pub time: String,
    pub start_hour: u32,
    pub end_hour: u32,
    pub members: Vec<String>,
}

impl Shift {
    /// True while `hour` falls inside the [start_hour, end_hour) window.
    pub fn covers(&self, hour: u32) -> bool {
        self.start_hour <= hour && hour < self.end_hour
    }

    pub fn lists(&self, member: &str) -> bool {
        self.members.iter().any(|m| m == member)
    }
}

/// Static schedule entry for one event day. Read-only configuration,
/// never mutated by the core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShiftDay {
    pub date: NaiveDate,
    pub shifts: Vec<Shift>,
}
