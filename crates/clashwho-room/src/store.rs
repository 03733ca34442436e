//! Room store: creates rooms under fresh codes and looks them up.

use std::collections::HashMap;

use clashwho_protocol::{ClientId, RoomCode};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::code::generate_room_code;
use crate::{Room, RoomConfig, RoomError};

/// Redraws allowed before `create` gives up on finding a free code.
pub const MAX_CODE_ATTEMPTS: u32 = 1_000;

/// Owns every room in the process, keyed by code.
///
/// Not thread-safe by itself: the gateway owns one store inside a single
/// task and feeds it commands one at a time. Rooms are never evicted.
pub struct RoomStore {
    rooms: HashMap<RoomCode, Room>,
    config: RoomConfig,
    rng: StdRng,
}

impl RoomStore {
    /// Creates an empty store seeded from the OS.
    pub fn new(config: RoomConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Creates an empty store with a caller-supplied RNG for room codes.
    pub fn with_rng(config: RoomConfig, rng: StdRng) -> Self {
        Self {
            rooms: HashMap::new(),
            config,
            rng,
        }
    }

    pub fn config(&self) -> &RoomConfig {
        &self.config
    }

    /// Creates a room in `waiting` with `host` seated as `p1`.
    ///
    /// The code is redrawn on collision, at most [`MAX_CODE_ATTEMPTS`]
    /// times. Once the code space is (nearly) full this fails instead of
    /// spinning.
    pub fn create(&mut self, host: ClientId, player_name: String) -> Result<&Room, RoomError> {
        let code = self.free_code().ok_or_else(|| {
            tracing::warn!(
                rooms = self.rooms.len(),
                code_length = self.config.code_length,
                "room code space exhausted"
            );
            RoomError::CodeSpaceExhausted {
                attempts: MAX_CODE_ATTEMPTS,
            }
        })?;

        let room = Room::new(
            code.clone(),
            host,
            player_name,
            self.config.default_pool_size,
        );
        tracing::info!(room = %code, %host, "room created");
        Ok(self.rooms.entry(code).or_insert(room))
    }

    fn free_code(&mut self) -> Option<RoomCode> {
        for _ in 0..MAX_CODE_ATTEMPTS {
            let candidate = generate_room_code(&mut self.rng, self.config.code_length);
            if !self.rooms.contains_key(&candidate) {
                return Some(candidate);
            }
            tracing::debug!(code = %candidate, "room code collision, redrawing");
        }
        None
    }

    /// Looks up a room. Absence is a normal outcome.
    pub fn get(&self, code: &RoomCode) -> Option<&Room> {
        self.rooms.get(code)
    }

    pub fn get_mut(&mut self, code: &RoomCode) -> Option<&mut Room> {
        self.rooms.get_mut(code)
    }

    /// Returns the number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}

impl Default for RoomStore {
    fn default() -> Self {
        Self::new(RoomConfig::default())
    }
}
