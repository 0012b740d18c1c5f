//! Schedule relay: accepts one JSON schedule and republishes it to a broker
//!
//! The handler is a pure request/response function: one raw message in, one
//! acknowledgment or typed error out. The `schedule_relay` binary provides
//! the TCP front end and handles connections sequentially.

mod handler;
mod message;
mod publisher;

pub use handler::{parse_message, process_message, RelayError, SCHEDULE_ACK, SCHEDULE_TOPIC};
pub use message::ScheduleMessage;
pub use publisher::{LineProtocolPublisher, Publish, PublishError};
