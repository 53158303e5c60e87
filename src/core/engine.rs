//! Attendance state machine: pure transitions over the roster state map.
//! Per member the machine is Absent --clock_in--> Present and
//! Present --clock_out--> Absent; nothing else.

use crate::models::session::{AllMemberWorkStatus, WorkSession};
use crate::models::status::AttendanceStatus;

/// Outcome of a transition request. Precondition violations are reported,
/// not raised: the engine never corrupts state when called out of order,
/// so any front end (CLI, tests) is safe to call it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    ClockedIn,
    ClockedOut,
    AlreadyPresent,
    AlreadyAbsent,
}

/// Clock a member in: append an open session and mark them present.
/// No-op if the member is already present.
pub fn clock_in(state: &mut AllMemberWorkStatus, member: &str, now_ms: i64) -> Transition {
    let entry = state.entry(member.to_string()).or_default();

    if entry.status.is_present() {
        return Transition::AlreadyPresent;
    }

    entry.sessions.push(WorkSession::open(now_ms));
    entry.status = AttendanceStatus::Present;
    Transition::ClockedIn
}

/// Clock a member out: close the last open session and mark them absent.
/// Atomic per member. If the status says present but no open session
/// exists, the status is repaired without touching the ledger.
pub fn clock_out(state: &mut AllMemberWorkStatus, member: &str, now_ms: i64) -> Transition {
    let entry = state.entry(member.to_string()).or_default();

    if entry.status.is_absent() {
        return Transition::AlreadyAbsent;
    }

    if let Some(last) = entry.sessions.last_mut()
        && last.is_open()
    {
        last.clock_out = Some(now_ms);
    }

    entry.status = AttendanceStatus::Absent;
    Transition::ClockedOut
}

/// Total worked milliseconds over a session ledger. Open sessions are
/// measured against `reference_ms`, so an advancing reference yields a
/// monotonically non-decreasing total. Negative totals cannot arise from
/// well-formed ledgers; clamping happens at the display boundary.
pub fn elapsed_ms(sessions: &[WorkSession], reference_ms: i64) -> i64 {
    sessions
        .iter()
        .map(|s| s.clock_out.unwrap_or(reference_ms) - s.clock_in)
        .sum()
}
