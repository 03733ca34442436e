//! Rooms and the game state machine for ClashWho.
//!
//! Nothing in this crate knows about sockets or timers. The gateway feeds
//! it commands and gets back [`Outcome`]s: events to broadcast and whether
//! a reset should be scheduled.
//!
//! # Key types
//!
//! - [`RoomStore`]: creates rooms under fresh codes, looks them up
//! - [`Room`]: one two-player session; its methods are the state machine
//! - [`resolve_role`]: maps a client to its seat (`p1`/`p2`) in a room
//! - [`RoomError`]: why a command was ignored
//! - [`RoomConfig`]: pool size, reset delay, code length; checked by
//!   [`RoomConfig::validate`]

mod code;
mod config;
mod error;
mod machine;
mod room;
mod store;

pub use code::{ROOM_CODE_ALPHABET, generate_room_code, is_valid_room_code};
pub use config::{ConfigError, RoomConfig};
pub use error::{RejectionKind, RoomError};
pub use room::{Outcome, Player, Room, resolve_role};
pub use store::{MAX_CODE_ATTEMPTS, RoomStore};
