//! Schedule message wire format

use serde::{Deserialize, Serialize};

/// One lighting schedule: the daily on and off times
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleMessage {
    /// Time the light switches on (e.g. "18:30")
    pub on_time: String,

    /// Time the light switches off
    pub off_time: String,
}

impl ScheduleMessage {
    /// Comma-joined payload republished to the broker
    pub fn broker_payload(&self) -> String {
        format!("{},{}", self.on_time, self.off_time)
    }
}
