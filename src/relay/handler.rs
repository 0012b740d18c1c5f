//! Stateless request/response handling for schedule messages
//!
//! Each request carries one JSON schedule; the handler validates it,
//! republishes the comma-joined payload to the broker topic and returns the
//! plain-text acknowledgment for the client. Every failure mode is an
//! explicit [`RelayError`] variant so the transport layer can render it
//! without inspecting causes.

use log::debug;
use thiserror::Error;

use super::message::ScheduleMessage;
use super::publisher::{Publish, PublishError};

/// Broker topic all schedules are republished to
pub const SCHEDULE_TOPIC: &str = "light/schedule";

/// Acknowledgment returned to the sender on success
pub const SCHEDULE_ACK: &str = "Schedule received and published";

/// Everything that can go wrong while relaying one schedule message
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("invalid JSON format: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
    #[error("{field} must not contain ',' (reserved as the payload separator)")]
    SeparatorInField { field: &'static str },
    #[error(transparent)]
    Publish(#[from] PublishError),
}

/// Parse and validate one raw JSON schedule message
pub fn parse_message(raw: &str) -> Result<ScheduleMessage, RelayError> {
    let message: ScheduleMessage = serde_json::from_str(raw)?;
    validate_field("onTime", &message.on_time)?;
    validate_field("offTime", &message.off_time)?;
    Ok(message)
}

fn validate_field(field: &'static str, value: &str) -> Result<(), RelayError> {
    if value.trim().is_empty() {
        return Err(RelayError::EmptyField { field });
    }
    if value.contains(',') {
        return Err(RelayError::SeparatorInField { field });
    }
    Ok(())
}

/// Relay one raw message: parse, validate, publish, acknowledge.
///
/// Returns the acknowledgment text to send back to the client; any error is
/// returned for the transport to render instead.
pub async fn process_message<P: Publish>(
    raw: &str,
    publisher: &mut P,
) -> Result<&'static str, RelayError> {
    let message = parse_message(raw)?;

    debug!(
        "publishing schedule: on={} off={}",
        message.on_time, message.off_time
    );
    publisher
        .publish(SCHEDULE_TOPIC, &message.broker_payload())
        .await?;

    Ok(SCHEDULE_ACK)
}
