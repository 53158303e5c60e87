//! Aggregated per-member totals for the admin view.

use crate::core::engine;
use crate::models::session::AllMemberWorkStatus;
use crate::models::status::AttendanceStatus;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub name: String,
    pub total_ms: i64,
    pub status: AttendanceStatus,
}

/// One row per roster member, sorted by total worked time descending.
/// Members missing from the state map report zero, absent.
pub fn build_report(
    state: &AllMemberWorkStatus,
    roster: &[String],
    now_ms: i64,
) -> Vec<ReportRow> {
    let mut rows: Vec<ReportRow> = roster
        .iter()
        .map(|name| match state.get(name) {
            Some(record) => ReportRow {
                name: name.clone(),
                total_ms: engine::elapsed_ms(&record.sessions, now_ms),
                status: record.status,
            },
            None => ReportRow {
                name: name.clone(),
                total_ms: 0,
                status: AttendanceStatus::Absent,
            },
        })
        .collect();

    rows.sort_by(|a, b| b.total_ms.cmp(&a.total_ms));
    rows
}

/// How many roster members are currently present. Stale entries outside
/// the roster never count.
pub fn present_count(state: &AllMemberWorkStatus, roster: &[String]) -> usize {
    roster
        .iter()
        .filter(|name| {
            state
                .get(name.as_str())
                .is_some_and(|record| record.status.is_present())
        })
        .count()
}
