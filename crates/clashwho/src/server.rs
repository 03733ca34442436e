//! `ClashWhoServer` builder and server loop.
//!
//! This is the entry point for running a ClashWho game server. It ties
//! together all the layers: transport → protocol → gateway → room.

use std::net::SocketAddr;
use std::time::Duration;

use clashwho_protocol::{Codec, JsonCodec};
use clashwho_room::{RoomConfig, RoomStore};
use clashwho_transport::{Transport, WebSocketTransport};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::ClashWhoError;
use crate::gateway::{DEFAULT_QUEUE_SIZE, GatewayHandle, spawn_gateway};
use crate::handler::handle_connection;

/// How long a peer gets to finish the WebSocket upgrade.
pub const DEFAULT_HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(10);

/// Builder for configuring and starting a ClashWho server.
///
/// # Example
///
/// ```rust,no_run
/// use clashwho::prelude::*;
///
/// # async fn start() -> Result<(), ClashWhoError> {
/// let server = ClashWhoServer::builder()
///     .bind("0.0.0.0:3001")
///     .build()
///     .await?;
/// server.run().await
/// # }
/// ```
pub struct ClashWhoServerBuilder {
    bind_addr: String,
    room_config: RoomConfig,
    seed: Option<u64>,
    handshake_timeout: Duration,
}

impl ClashWhoServerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            bind_addr: "127.0.0.1:3001".to_string(),
            room_config: RoomConfig::default(),
            seed: None,
            handshake_timeout: DEFAULT_HANDSHAKE_TIMEOUT,
        }
    }

    /// Sets the address to bind the server to.
    pub fn bind(mut self, addr: &str) -> Self {
        self.bind_addr = addr.to_string();
        self
    }

    /// Sets pool size, reset delay, and room code limits.
    pub fn room_config(mut self, config: RoomConfig) -> Self {
        self.room_config = config;
        self
    }

    /// Seeds room codes and card deals, for reproducible runs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets how long an accepted socket may take to finish the upgrade
    /// before it is dropped.
    pub fn handshake_timeout(mut self, timeout: Duration) -> Self {
        self.handshake_timeout = timeout;
        self
    }

    /// Validates the room config, binds the listener and starts the
    /// gateway.
    ///
    /// Uses `JsonCodec` and `WebSocketTransport`.
    pub async fn build(self) -> Result<ClashWhoServer<JsonCodec>, ClashWhoError> {
        self.room_config.validate()?;
        let transport = WebSocketTransport::bind(&self.bind_addr).await?;

        let (store_rng, deal_rng) = match self.seed {
            Some(seed) => (
                StdRng::seed_from_u64(seed),
                StdRng::seed_from_u64(seed.wrapping_add(1)),
            ),
            None => (StdRng::from_os_rng(), StdRng::from_os_rng()),
        };
        let store = RoomStore::with_rng(self.room_config, store_rng);
        let gateway = spawn_gateway(store, deal_rng, DEFAULT_QUEUE_SIZE);

        Ok(ClashWhoServer {
            transport,
            gateway,
            codec: JsonCodec,
            handshake_timeout: self.handshake_timeout,
        })
    }
}

impl Default for ClashWhoServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A bound ClashWho game server.
///
/// Call [`run()`](Self::run) to start accepting connections.
pub struct ClashWhoServer<C: Codec> {
    transport: WebSocketTransport,
    gateway: GatewayHandle,
    codec: C,
    handshake_timeout: Duration,
}

impl ClashWhoServer<JsonCodec> {
    /// Creates a new builder.
    pub fn builder() -> ClashWhoServerBuilder {
        ClashWhoServerBuilder::new()
    }
}

impl<C> ClashWhoServer<C>
where
    C: Codec + Clone,
{
    /// Returns the local address the server is bound to.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.transport.local_addr()
    }

    /// Returns a handle to the gateway, for inspecting rooms.
    pub fn gateway(&self) -> GatewayHandle {
        self.gateway.clone()
    }

    /// Runs the server accept loop.
    ///
    /// Spawns a handler task for each accepted socket; the WebSocket
    /// upgrade happens inside that task, so a stalled peer never holds up
    /// the loop. A failed accept is logged and the loop keeps going. Runs
    /// until the process is terminated.
    pub async fn run(mut self) -> Result<(), ClashWhoError> {
        tracing::info!(addr = ?self.local_addr().ok(), "ClashWho server running");

        loop {
            match self.transport.accept().await {
                Ok(handshake) => {
                    let gateway = self.gateway.clone();
                    let codec = self.codec.clone();
                    let timeout = self.handshake_timeout;
                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(handshake, timeout, gateway, codec).await {
                            tracing::debug!(error = %e, "connection ended with error");
                        }
                    });
                }
                Err(e) => {
                    tracing::error!(error = %e, "accept failed");
                }
            }
        }
    }
}
