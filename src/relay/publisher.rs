//! Broker publishing seam for the schedule relay
//!
//! The relay only ever performs one-shot topic publishes, so the seam is a
//! single async method. The shipped implementation speaks a line protocol to
//! a broker bridge over TCP; tests substitute an in-memory recorder.

use std::future::Future;
use std::io;
use thiserror::Error;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

/// Failure to hand a payload to the broker
#[derive(Debug, Error)]
#[error("broker publish failed: {0}")]
pub struct PublishError(#[from] io::Error);

/// One-shot publish of a payload to a broker topic
pub trait Publish {
    fn publish(
        &mut self,
        topic: &str,
        payload: &str,
    ) -> impl Future<Output = Result<(), PublishError>> + Send;
}

/// Publishes by writing one `topic payload` line per connection to the
/// broker bridge
#[derive(Debug, Clone)]
pub struct LineProtocolPublisher {
    broker_addr: String,
}

impl LineProtocolPublisher {
    pub fn new(broker_addr: impl Into<String>) -> Self {
        Self {
            broker_addr: broker_addr.into(),
        }
    }

    pub fn broker_addr(&self) -> &str {
        &self.broker_addr
    }
}

impl Publish for LineProtocolPublisher {
    async fn publish(&mut self, topic: &str, payload: &str) -> Result<(), PublishError> {
        let mut stream = TcpStream::connect(&self.broker_addr).await?;
        stream
            .write_all(format!("{} {}\n", topic, payload).as_bytes())
            .await?;
        stream.shutdown().await?;
        Ok(())
    }
}
