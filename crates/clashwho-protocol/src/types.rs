//! Core protocol types for ClashWho's wire format.
//!
//! Every type here is something that gets serialized into a frame and read
//! by the browser client, or read out of a frame the client sent. Field
//! names follow the client's camelCase convention and event names are
//! kebab-case, so a frame looks like:
//!
//! ```text
//! {"event": "join-room", "data": {"roomCode": "AB12C", "playerName": "Ana"}}
//! ```

use serde::{Deserialize, Serialize};

use std::fmt;

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// Identity of one connected client as seen by the game core.
///
/// The gateway derives it from the transport's connection id; rooms compare
/// it against the ids stored in each player slot to decide who is acting.
/// Serialized as a bare number, so `hostId` in `player-joined` can be
/// compared directly with the `clientId` the client got in `connected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(pub u64);

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C-{}", self.0)
    }
}

/// The short code players type in to join a room.
///
/// Codes are compared exactly; the client upper-cases what the user types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomCode(String);

impl RoomCode {
    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoomCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for RoomCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One of the two player seats in a room.
///
/// `P1` is always the room creator (and host); `P2` is whoever joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    P1,
    P2,
}

impl Slot {
    /// Returns the opposing seat.
    pub fn other(self) -> Self {
        match self {
            Self::P1 => Self::P2,
            Self::P2 => Self::P1,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::P1 => f.write_str("p1"),
            Self::P2 => f.write_str("p2"),
        }
    }
}

// ---------------------------------------------------------------------------
// Room status
// ---------------------------------------------------------------------------

/// Lifecycle status of a room, as the client sees it.
///
/// ```text
/// Waiting → TopicSelection → Selecting → Playing → Finished
///                 ↑                                    │
///                 └────────── (timed reset) ───────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoomStatus {
    /// Only the creator is in the room.
    Waiting,
    /// Both players present; the host picks a topic.
    TopicSelection,
    /// Pool is dealt; each player picks a secret card.
    Selecting,
    /// Both secrets set; players alternate turns.
    Playing,
    /// Someone guessed right or both guessed wrong; reset pending.
    Finished,
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Waiting => "waiting",
            Self::TopicSelection => "topic-selection",
            Self::Selecting => "selecting",
            Self::Playing => "playing",
            Self::Finished => "finished",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Cards
// ---------------------------------------------------------------------------

/// Category of a card in a categorized topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    #[default]
    Troop,
    Spell,
    Building,
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Troop => "troop",
            Self::Spell => "spell",
            Self::Building => "building",
        };
        f.write_str(s)
    }
}

/// A selectable card. The pool a room deals is public, so this type is
/// sent to both players as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique within its topic.
    pub id: String,
    pub name: String,
    /// Path of the card art, relative to the client's public root.
    pub image: String,
    /// Category, for topics that have one.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<CardType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elixir: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    #[serde(default)]
    pub evo: bool,
}

// ---------------------------------------------------------------------------
// Inbound commands
// ---------------------------------------------------------------------------

/// A command sent by a client.
///
/// Adjacently tagged: the event name goes in `"event"`, the payload in
/// `"data"`. An unknown event name or a payload missing a field fails to
/// decode, which the gateway treats as fatal for that connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum Command {
    #[serde(rename_all = "camelCase")]
    CreateRoom { player_name: String },

    #[serde(rename_all = "camelCase")]
    JoinRoom {
        room_code: RoomCode,
        player_name: String,
    },

    /// Host-only: pool size for the next topic choice.
    #[serde(rename_all = "camelCase")]
    UpdateSettings { room_code: RoomCode, pool_size: u32 },

    /// Host-only. `topic` is free text; unknown topics deal an empty pool.
    #[serde(rename_all = "camelCase")]
    ChooseTopic { room_code: RoomCode, topic: String },

    #[serde(rename_all = "camelCase")]
    SelectCharacter {
        room_code: RoomCode,
        character_id: String,
    },

    #[serde(rename_all = "camelCase")]
    MakeGuess {
        room_code: RoomCode,
        character_id: String,
    },

    #[serde(rename_all = "camelCase")]
    EndTurn { room_code: RoomCode },
}

impl Command {
    /// Returns the wire name of this command, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateRoom { .. } => "create-room",
            Self::JoinRoom { .. } => "join-room",
            Self::UpdateSettings { .. } => "update-settings",
            Self::ChooseTopic { .. } => "choose-topic",
            Self::SelectCharacter { .. } => "select-character",
            Self::MakeGuess { .. } => "make-guess",
            Self::EndTurn { .. } => "end-turn",
        }
    }

    /// Returns the room the command targets, if any.
    pub fn room_code(&self) -> Option<&RoomCode> {
        match self {
            Self::CreateRoom { .. } => None,
            Self::JoinRoom { room_code, .. }
            | Self::UpdateSettings { room_code, .. }
            | Self::ChooseTopic { room_code, .. }
            | Self::SelectCharacter { room_code, .. }
            | Self::MakeGuess { room_code, .. }
            | Self::EndTurn { room_code } => Some(room_code),
        }
    }
}

// ---------------------------------------------------------------------------
// Outbound events
// ---------------------------------------------------------------------------

/// Display names of both seats, sent with `player-joined`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerNames {
    pub p1: String,
    pub p2: String,
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EndReason {
    /// The turn-holder named the opponent's secret.
    Correct,
    /// Both players guessed wrong in the same cycle.
    BothWrong,
}

/// An event sent by the server.
///
/// No variant carries a player's secret; the only card data that goes out
/// is the public pool in `TopicChosen`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum Event {
    /// Sent to a single connection right after it is accepted.
    #[serde(rename_all = "camelCase")]
    Connected { client_id: ClientId },

    /// Sent only to the creator.
    #[serde(rename_all = "camelCase")]
    RoomCreated { room_code: RoomCode },

    #[serde(rename_all = "camelCase")]
    PlayerJoined {
        status: RoomStatus,
        host_id: ClientId,
        players: PlayerNames,
    },

    #[serde(rename_all = "camelCase")]
    SettingsUpdated { pool_size: u32 },

    #[serde(rename_all = "camelCase")]
    TopicChosen {
        topic: String,
        characters: Vec<Card>,
        status: RoomStatus,
    },

    #[serde(rename_all = "camelCase")]
    StartGame { current_turn: Slot },

    #[serde(rename_all = "camelCase")]
    TurnChanged { current_turn: Slot },

    /// `winner` is the winner's display name, `None` on a draw.
    #[serde(rename_all = "camelCase")]
    GameEnded {
        winner: Option<String>,
        reason: EndReason,
    },

    /// No payload: the client clears its board and shows topic selection.
    ResetToTopic,
}

impl Event {
    /// Returns the wire name of this event, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Connected { .. } => "connected",
            Self::RoomCreated { .. } => "room-created",
            Self::PlayerJoined { .. } => "player-joined",
            Self::SettingsUpdated { .. } => "settings-updated",
            Self::TopicChosen { .. } => "topic-chosen",
            Self::StartGame { .. } => "start-game",
            Self::TurnChanged { .. } => "turn-changed",
            Self::GameEnded { .. } => "game-ended",
            Self::ResetToTopic => "reset-to-topic",
        }
    }
}
