//! Schedule relay service
//!
//! Accepts one JSON schedule message per TCP connection, republishes it to
//! the broker on the schedule topic, and answers with a plain-text ack or
//! error line. Connections are handled sequentially: one message per
//! connection, no retry, no backpressure.

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

use feasibility_system::relay::{process_message, LineProtocolPublisher};

#[derive(Parser, Debug)]
#[command(name = "schedule_relay", about = "Relays light schedules to the broker")]
struct Args {
    /// Address to accept schedule submissions on
    #[arg(long, default_value = "127.0.0.1:8765")]
    listen: String,

    /// Broker address to publish schedules to
    #[arg(long, default_value = "127.0.0.1:1883")]
    broker: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let listener = TcpListener::bind(&args.listen)
        .await
        .with_context(|| format!("unable to listen on {}", args.listen))?;
    info!("schedule relay listening on {}", args.listen);

    let mut publisher = LineProtocolPublisher::new(&args.broker);

    loop {
        let (stream, peer) = listener.accept().await?;
        info!("client connected: {}", peer);
        if let Err(e) = handle_connection(stream, &mut publisher).await {
            error!("connection error: {}", e);
        }
    }
}

async fn handle_connection(
    stream: TcpStream,
    publisher: &mut LineProtocolPublisher,
) -> std::io::Result<()> {
    let (read_half, mut write_half) = stream.into_split();
    let mut line = String::new();
    BufReader::new(read_half).read_line(&mut line).await?;

    let response = match process_message(line.trim(), publisher).await {
        Ok(ack) => ack.to_string(),
        Err(e) => format!("Error: {}", e),
    };

    write_half.write_all(response.as_bytes()).await?;
    write_half.shutdown().await
}
