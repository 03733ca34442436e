//! Why a command was not applied.

use clashwho_protocol::{ClientId, RoomCode, RoomStatus};

/// A command that failed its precondition.
///
/// None of these ever reach the client: the gateway logs them and drops the
/// command. They exist so the reason is visible in logs and tests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoomError {
    /// The room code does not exist.
    #[error("room {0} not found")]
    NotFound(RoomCode),

    /// Both seats are taken.
    #[error("room {0} is full")]
    RoomFull(RoomCode),

    /// The creator tried to join their own room.
    #[error("client {0} already seated in room {1}")]
    AlreadyInRoom(ClientId, RoomCode),

    /// The client holds neither seat.
    #[error("client {0} not in room {1}")]
    NotInRoom(ClientId, RoomCode),

    /// A host-only command from someone else.
    #[error("client {0} is not the host of room {1}")]
    NotHost(ClientId, RoomCode),

    /// A turn-bound command from the player who isn't on turn.
    #[error("client {0} does not hold the turn in room {1}")]
    NotYourTurn(ClientId, RoomCode),

    /// The room is in the wrong status for this command.
    #[error("{command} not allowed while room is {status}")]
    InvalidState {
        command: &'static str,
        status: RoomStatus,
    },

    /// The player already picked a secret this game.
    #[error("client {0} already selected a card")]
    AlreadySelected(ClientId),

    /// The picked card is not in the dealt pool.
    #[error("card {0:?} is not in the pool")]
    UnknownCard(String),

    /// Pool size outside `1..=max`.
    #[error("pool size {requested} outside 1..={max}")]
    InvalidPoolSize { requested: u32, max: u32 },

    /// No free room code turned up within the redraw limit.
    #[error("no free room code after {attempts} attempts")]
    CodeSpaceExhausted { attempts: u32 },
}

/// Coarse classification of a [`RoomError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionKind {
    /// The referenced room does not exist.
    NotFound,
    /// The sender may not issue this command.
    Unauthorized,
    /// The room or payload doesn't allow it right now.
    InvalidState,
}

impl RoomError {
    pub fn kind(&self) -> RejectionKind {
        match self {
            Self::NotFound(_) => RejectionKind::NotFound,
            Self::NotInRoom(..) | Self::NotHost(..) | Self::NotYourTurn(..) => {
                RejectionKind::Unauthorized
            }
            Self::RoomFull(_)
            | Self::AlreadyInRoom(..)
            | Self::InvalidState { .. }
            | Self::AlreadySelected(_)
            | Self::UnknownCard(_)
            | Self::InvalidPoolSize { .. }
            | Self::CodeSpaceExhausted { .. } => RejectionKind::InvalidState,
        }
    }
}
