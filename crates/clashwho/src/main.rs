//! ClashWho server binary.
//!
//! # Usage
//!
//! ```bash
//! # Listen on 0.0.0.0:3001
//! clashwho-server
//!
//! # Pick the port through the environment, like most hosts do
//! PORT=8080 clashwho-server
//!
//! # Smaller pools and a quicker return to topic selection
//! clashwho-server --bind 127.0.0.1:4000 --pool-size 16 --reset-delay-ms 1500
//! ```

use std::time::Duration;

use clap::Parser;
use clashwho::prelude::*;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// ClashWho game server
#[derive(Parser, Debug)]
#[command(name = "clashwho-server")]
#[command(about = "Realtime two-player card guessing game server")]
#[command(version)]
struct Args {
    /// Address to bind to (overrides PORT)
    #[arg(short, long)]
    bind: Option<String>,

    /// Port to listen on all interfaces when --bind is absent
    #[arg(long, env = "PORT", default_value = "3001")]
    port: u16,

    /// Cards dealt per topic until the host changes it
    #[arg(long, default_value = "32")]
    pool_size: u32,

    /// Largest pool size the host may request
    #[arg(long, default_value = "256")]
    max_pool_size: u32,

    /// Time a finished game stays on screen before the room resets
    #[arg(long, default_value = "3000")]
    reset_delay_ms: u64,

    /// Seed for room codes and card deals (random if absent)
    #[arg(long)]
    seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    let bind = args
        .bind
        .unwrap_or_else(|| format!("0.0.0.0:{}", args.port));
    let room_config = RoomConfig {
        default_pool_size: args.pool_size,
        max_pool_size: args.max_pool_size,
        reset_delay: Duration::from_millis(args.reset_delay_ms),
        ..RoomConfig::default()
    };
    room_config.validate()?;

    tracing::info!("ClashWho server starting");
    tracing::info!("Binding to {}", bind);

    let mut builder = ClashWhoServer::builder().bind(&bind).room_config(room_config);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    let server = builder.build().await?;

    tracing::info!("Server listening on {}", server.local_addr()?);

    server.run().await?;

    Ok(())
}
