//! Per-connection handler: registration, inbound decoding, outbound writing.
//!
//! Each accepted connection gets its own Tokio task running this handler.
//! The flow is:
//!   1. Complete the WebSocket upgrade within the handshake timeout
//!   2. Register with the gateway, which greets the client with `connected`
//!   3. Spawn a writer task draining the client's outbound channel
//!   4. Loop: receive frames → decode a command → queue it at the gateway
//!
//! A frame that fails to decode ends this connection only.

use std::sync::Arc;
use std::time::Duration;

use clashwho_protocol::{ClientId, Codec, Command, Event};
use clashwho_transport::{Connection, Handshake, WebSocketConnection, WebSocketHandshake};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::ClashWhoError;
use crate::gateway::GatewayHandle;

/// Drop guard that unregisters the client when the handler exits.
///
/// Covers early returns and panics alike. `Drop` is synchronous, so the
/// disconnect is sent from a fire-and-forget task.
struct DisconnectGuard {
    client: ClientId,
    gateway: GatewayHandle,
}

impl Drop for DisconnectGuard {
    fn drop(&mut self) {
        let client = self.client;
        let gateway = self.gateway.clone();
        tokio::spawn(async move {
            let _ = gateway.disconnect(client).await;
        });
    }
}

/// Handles a single connection from accept to close.
pub(crate) async fn handle_connection<C>(
    handshake: WebSocketHandshake,
    handshake_timeout: Duration,
    gateway: GatewayHandle,
    codec: C,
) -> Result<(), ClashWhoError>
where
    C: Codec + Clone,
{
    let peer = handshake.peer_addr();
    let conn = tokio::time::timeout(handshake_timeout, handshake.complete())
        .await
        .map_err(|_| ClashWhoError::HandshakeTimedOut(handshake_timeout))??;
    tracing::trace!(%peer, "handshake complete");

    let conn = Arc::new(conn);
    let client = ClientId(conn.id().into_inner());
    tracing::debug!(conn_id = %conn.id(), %client, "handling new connection");

    let (sender, outbound) = mpsc::unbounded_channel();
    gateway.connect(client, sender).await?;
    let guard = DisconnectGuard {
        client,
        gateway: gateway.clone(),
    };

    let writer = spawn_writer(Arc::clone(&conn), client, codec.clone(), outbound);
    let result = read_loop(&conn, &gateway, &codec, client).await;

    // Unregistering drops the gateway's sender, which ends the writer once
    // everything already queued has been written.
    drop(guard);
    let _ = writer.await;
    let _ = conn.close().await;

    if let Err(e) = &result {
        tracing::info!(%client, error = %e, "connection dropped");
    }
    result
}

async fn read_loop<C: Codec>(
    conn: &WebSocketConnection,
    gateway: &GatewayHandle,
    codec: &C,
    client: ClientId,
) -> Result<(), ClashWhoError> {
    loop {
        let data = match conn.recv().await? {
            Some(data) => data,
            None => {
                tracing::info!(%client, "connection closed cleanly");
                return Ok(());
            }
        };

        let command: Command = codec.decode(&data)?;
        gateway.submit(client, command).await?;
    }
}

fn spawn_writer<C: Codec>(
    conn: Arc<WebSocketConnection>,
    client: ClientId,
    codec: C,
    mut outbound: mpsc::UnboundedReceiver<Event>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = outbound.recv().await {
            let text = match codec.encode(&event) {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(%client, event = event.name(), error = %e, "failed to encode event");
                    continue;
                }
            };
            if let Err(e) = conn.send(&text).await {
                tracing::debug!(%client, error = %e, "send failed, stopping writer");
                break;
            }
        }
    })
}
