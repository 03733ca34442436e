//! Error types for the protocol layer.

/// Errors that can occur while turning frames into events and back.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serializing an outbound event failed.
    #[error("encode failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// The inbound frame is not valid JSON, names an unknown event, or
    /// carries a payload of the wrong shape.
    #[error("decode failed: {0}")]
    Decode(#[source] serde_json::Error),
}
