//! Codec trait and the JSON implementation.
//!
//! A codec converts between Rust types and the frames that travel over the
//! connection. The gateway is written against [`Codec`], so the concrete
//! format can change without touching room or game code.

use serde::{Serialize, de::DeserializeOwned};

use crate::ProtocolError;

/// Encodes outbound values to text frames and decodes inbound frames.
///
/// Outbound frames are text because browser clients read them as strings;
/// inbound frames are accepted as raw bytes so binary frames carrying the
/// same JSON work too.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into a text frame.
    ///
    /// # Errors
    /// Returns `ProtocolError::Encode` if serialization fails.
    fn encode<T: Serialize>(&self, value: &T) -> Result<String, ProtocolError>;

    /// Deserializes a frame back into a value.
    ///
    /// # Errors
    /// Returns `ProtocolError::Decode` if the bytes are malformed or don't
    /// match the expected type.
    fn decode<T: DeserializeOwned>(
        &self,
        data: &[u8],
    ) -> Result<T, ProtocolError>;
}

/// A [`Codec`] that uses JSON (via `serde_json`).
///
/// ## Example
///
/// ```rust
/// use clashwho_protocol::{Codec, Command, JsonCodec, RoomCode};
///
/// let codec = JsonCodec;
/// let frame = br#"{"event":"end-turn","data":{"roomCode":"AB12C"}}"#;
/// let cmd: Command = codec.decode(frame).unwrap();
/// assert_eq!(cmd, Command::EndTurn { room_code: RoomCode::from("AB12C") });
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<String, ProtocolError> {
        serde_json::to_string(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(
        &self,
        data: &[u8],
    ) -> Result<T, ProtocolError> {
        serde_json::from_slice(data).map_err(ProtocolError::Decode)
    }
}
