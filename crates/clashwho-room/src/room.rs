//! The room entity and what operations on it produce.

use clashwho_protocol::{Card, ClientId, Event, RoomCode, RoomStatus, Slot};

/// Result of an applied command: events to broadcast to the room's group,
/// in order, and whether the room should be reset after the configured
/// delay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub events: Vec<Event>,
    pub schedule_reset: bool,
}

impl Outcome {
    /// An applied command that emits nothing.
    pub fn silent() -> Self {
        Self::default()
    }

    /// One event to the whole room.
    pub fn broadcast(event: Event) -> Self {
        Self {
            events: vec![event],
            schedule_reset: false,
        }
    }
}

/// One seated player.
///
/// Not `Serialize`: the secret must never end up in a frame.
#[derive(Debug, Clone)]
pub struct Player {
    pub(crate) id: ClientId,
    pub(crate) name: String,
    pub(crate) secret: Option<String>,
}

impl Player {
    pub(crate) fn new(id: ClientId, name: String) -> Self {
        Self { id, name, secret: None }
    }

    pub fn id(&self) -> ClientId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The card this player wants the opponent to guess.
    pub fn secret(&self) -> Option<&str> {
        self.secret.as_deref()
    }
}

/// An isolated two-player game session.
#[derive(Debug, Clone)]
pub struct Room {
    pub(crate) code: RoomCode,
    pub(crate) status: RoomStatus,
    pub(crate) host: ClientId,
    pub(crate) topic: Option<String>,
    pub(crate) pool_size: u32,
    pub(crate) characters: Vec<Card>,
    pub(crate) p1: Player,
    pub(crate) p2: Option<Player>,
    pub(crate) current_turn: Option<Slot>,
    /// Wrong-guess flags for the current game, indexed by [`slot_index`].
    pub(crate) guessed_wrong: [bool; 2],
}

pub(crate) fn slot_index(slot: Slot) -> usize {
    match slot {
        Slot::P1 => 0,
        Slot::P2 => 1,
    }
}

impl Room {
    /// Creates a room in `waiting` with the creator in `p1` as host.
    pub fn new(code: RoomCode, host: ClientId, host_name: String, pool_size: u32) -> Self {
        Self {
            code,
            status: RoomStatus::Waiting,
            host,
            topic: None,
            pool_size,
            characters: Vec::new(),
            p1: Player::new(host, host_name),
            p2: None,
            current_turn: None,
            guessed_wrong: [false; 2],
        }
    }

    pub fn code(&self) -> &RoomCode {
        &self.code
    }

    pub fn status(&self) -> RoomStatus {
        self.status
    }

    pub fn host(&self) -> ClientId {
        self.host
    }

    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    pub fn pool_size(&self) -> u32 {
        self.pool_size
    }

    /// The public pool currently in play.
    pub fn characters(&self) -> &[Card] {
        &self.characters
    }

    pub fn current_turn(&self) -> Option<Slot> {
        self.current_turn
    }

    /// Whether `slot` has guessed wrong in the current game.
    pub fn guessed_wrong(&self, slot: Slot) -> bool {
        self.guessed_wrong[slot_index(slot)]
    }

    /// The player in `slot`, if seated.
    pub fn player(&self, slot: Slot) -> Option<&Player> {
        match slot {
            Slot::P1 => Some(&self.p1),
            Slot::P2 => self.p2.as_ref(),
        }
    }

    pub(crate) fn player_mut(&mut self, slot: Slot) -> Option<&mut Player> {
        match slot {
            Slot::P1 => Some(&mut self.p1),
            Slot::P2 => self.p2.as_mut(),
        }
    }
}

/// Which seat `client` holds in `room`, if any.
pub fn resolve_role(room: &Room, client: ClientId) -> Option<Slot> {
    if room.p1.id == client {
        Some(Slot::P1)
    } else if room.p2.as_ref().is_some_and(|p| p.id == client) {
        Some(Slot::P2)
    } else {
        None
    }
}
