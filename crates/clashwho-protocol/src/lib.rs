//! Wire protocol for ClashWho.
//!
//! This crate defines what clients and the server say to each other:
//!
//! - **Types** ([`Command`], [`Event`], [`Card`], [`RoomStatus`], etc.):
//!   the structures that travel on the wire.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]): how those structures are
//!   turned into frames and back.
//! - **Errors** ([`ProtocolError`]): what can go wrong doing so.
//!
//! It knows nothing about sockets or rooms.
//!
//! ```text
//! Transport (frames) → Protocol (Command / Event) → Room (game rules)
//! ```

mod codec;
mod error;
mod types;

pub use codec::{Codec, JsonCodec};
pub use error::ProtocolError;
pub use types::{
    Card, CardType, ClientId, Command, EndReason, Event, PlayerNames,
    RoomCode, RoomStatus, Slot,
};
