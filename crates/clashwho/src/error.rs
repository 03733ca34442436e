//! Top-level error type for the ClashWho server.

use clashwho_protocol::ProtocolError;
use clashwho_room::ConfigError;
use clashwho_transport::TransportError;

/// Errors that end a connection or stop the server.
///
/// Rejected game commands are not errors at this level: the gateway logs
/// them and moves on.
#[derive(Debug, thiserror::Error)]
pub enum ClashWhoError {
    /// Socket-level failure.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// A frame could not be encoded or decoded.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The room settings were rejected before binding.
    #[error("invalid room config: {0}")]
    Config(#[from] ConfigError),

    /// The peer did not finish the WebSocket upgrade in time.
    #[error("handshake timed out after {0:?}")]
    HandshakeTimedOut(std::time::Duration),

    /// The gateway task has stopped and no longer accepts commands.
    #[error("gateway is not running")]
    GatewayClosed,
}
