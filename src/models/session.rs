use super::status::AttendanceStatus;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One clock-in/clock-out pair, timestamps in epoch milliseconds.
/// `clock_out` is absent while the session is still open.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkSession {
    pub clock_in: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock_out: Option<i64>,
}

impl WorkSession {
    pub fn open(clock_in: i64) -> Self {
        Self {
            clock_in,
            clock_out: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }
}

/// Per-member attendance record for one calendar day.
/// Invariant: `status == Present` iff the last session exists and is open.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemberWorkStatus {
    pub status: AttendanceStatus,
    pub sessions: Vec<WorkSession>,
}

impl MemberWorkStatus {
    pub fn last_session_open(&self) -> bool {
        self.sessions.last().is_some_and(WorkSession::is_open)
    }
}

impl Default for MemberWorkStatus {
    fn default() -> Self {
        Self {
            status: AttendanceStatus::Absent,
            sessions: Vec::new(),
        }
    }
}

/// Full roster state, member name -> record. BTreeMap keeps the persisted
/// JSON deterministic; display order always follows the roster instead.
pub type AllMemberWorkStatus = BTreeMap<String, MemberWorkStatus>;
