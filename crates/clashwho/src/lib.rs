//! # ClashWho
//!
//! Realtime server for a two-player "guess the opponent's secret card"
//! game.
//!
//! Two players share a room code. The host picks a topic, the server deals
//! both of them the same pool of cards, each secretly picks one, and they
//! take turns guessing the other's pick. A right guess wins; two wrong
//! guesses end in a draw. A few seconds later the room returns to topic
//! selection for another round.
//!
//! The layers:
//!
//! - [`clashwho_transport`]: WebSocket frames
//! - [`clashwho_protocol`]: the JSON events on those frames
//! - [`gateway`]: one task that owns every room and routes events
//! - [`clashwho_room`]: the per-room state machine
//! - [`clashwho_cards`]: topic catalogs and balanced pools
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clashwho::prelude::*;
//!
//! # async fn start() -> Result<(), ClashWhoError> {
//! let server = ClashWhoServer::builder()
//!     .bind("0.0.0.0:3001")
//!     .build()
//!     .await?;
//! server.run().await
//! # }
//! ```

mod error;
pub mod gateway;
mod handler;
mod reset;
mod server;

pub use error::ClashWhoError;
pub use server::{ClashWhoServer, ClashWhoServerBuilder, DEFAULT_HANDSHAKE_TIMEOUT};

/// Everything needed to run or embed a server.
pub mod prelude {
    pub use crate::gateway::{GatewayHandle, RoomInfo};
    pub use crate::{ClashWhoError, ClashWhoServer, ClashWhoServerBuilder};

    pub use clashwho_cards::{Topic, build_pool, list_cards};
    pub use clashwho_protocol::{
        Card, CardType, ClientId, Command, EndReason, Event, PlayerNames, RoomCode, RoomStatus,
        Slot,
    };
    pub use clashwho_room::{ConfigError, RejectionKind, RoomConfig, RoomError};
}
