//! The turn-based game state machine.
//!
//! Every operation checks its precondition first and returns a
//! [`RoomError`] without touching the room if it fails. On success the
//! room is mutated and the [`Outcome`] lists what to broadcast.
//!
//! ```text
//! join ─→ choose_topic ─→ select_character ×2 ─→ make_guess / end_turn ...
//!              ↑                                          │
//!              └──────────────── reset ←── (game ended) ──┘
//! ```

use clashwho_cards::build_pool;
use clashwho_protocol::{ClientId, EndReason, Event, PlayerNames, RoomStatus, Slot};
use rand::Rng;

use crate::room::{Player, resolve_role, slot_index};
use crate::{Outcome, Room, RoomError};

impl Room {
    fn require_status(
        &self,
        command: &'static str,
        allowed: &[RoomStatus],
    ) -> Result<(), RoomError> {
        if allowed.contains(&self.status) {
            Ok(())
        } else {
            Err(RoomError::InvalidState {
                command,
                status: self.status,
            })
        }
    }

    fn require_host(&self, client: ClientId) -> Result<(), RoomError> {
        if client == self.host {
            Ok(())
        } else {
            Err(RoomError::NotHost(client, self.code.clone()))
        }
    }

    /// Returns the turn-holder's seat if `client` holds the turn.
    fn require_turn(&self, command: &'static str, client: ClientId) -> Result<Slot, RoomError> {
        self.require_status(command, &[RoomStatus::Playing])?;
        match self.current_turn {
            Some(slot) if resolve_role(self, client) == Some(slot) => Ok(slot),
            _ => Err(RoomError::NotYourTurn(client, self.code.clone())),
        }
    }

    fn player_names(&self) -> PlayerNames {
        PlayerNames {
            p1: self.p1.name.clone(),
            p2: self.p2.as_ref().map(|p| p.name.clone()).unwrap_or_default(),
        }
    }

    fn clear_secrets(&mut self) {
        self.p1.secret = None;
        if let Some(p2) = &mut self.p2 {
            p2.secret = None;
        }
    }

    /// Seats `client` as `p2` and moves the room to topic selection.
    pub fn join(&mut self, client: ClientId, name: String) -> Result<Outcome, RoomError> {
        if self.p2.is_some() {
            return Err(RoomError::RoomFull(self.code.clone()));
        }
        if client == self.p1.id {
            return Err(RoomError::AlreadyInRoom(client, self.code.clone()));
        }
        self.require_status("join-room", &[RoomStatus::Waiting])?;

        self.p2 = Some(Player::new(client, name));
        self.status = RoomStatus::TopicSelection;
        tracing::info!(room = %self.code, %client, "player joined");

        Ok(Outcome::broadcast(Event::PlayerJoined {
            status: self.status,
            host_id: self.host,
            players: self.player_names(),
        }))
    }

    /// Host-only: sets the pool size used by the next topic choice.
    pub fn update_settings(
        &mut self,
        client: ClientId,
        pool_size: u32,
        max_pool_size: u32,
    ) -> Result<Outcome, RoomError> {
        self.require_host(client)?;
        if pool_size == 0 || pool_size > max_pool_size {
            return Err(RoomError::InvalidPoolSize {
                requested: pool_size,
                max: max_pool_size,
            });
        }

        self.pool_size = pool_size;
        Ok(Outcome::broadcast(Event::SettingsUpdated { pool_size }))
    }

    /// Host-only: picks the topic and deals the pool.
    ///
    /// Allowed again while players are still selecting; the new pool
    /// invalidates any secret already picked.
    pub fn choose_topic<R: Rng + ?Sized>(
        &mut self,
        client: ClientId,
        topic: String,
        rng: &mut R,
    ) -> Result<Outcome, RoomError> {
        self.require_host(client)?;
        self.require_status(
            "choose-topic",
            &[RoomStatus::TopicSelection, RoomStatus::Selecting],
        )?;

        self.characters = build_pool(&topic, self.pool_size as usize, rng);
        self.topic = Some(topic.clone());
        self.clear_secrets();
        self.status = RoomStatus::Selecting;
        tracing::info!(
            room = %self.code,
            %topic,
            cards = self.characters.len(),
            "topic chosen"
        );

        Ok(Outcome::broadcast(Event::TopicChosen {
            topic,
            characters: self.characters.clone(),
            status: self.status,
        }))
    }

    /// Records the sender's secret. Once both are in, the game starts with
    /// `p1` on turn.
    ///
    /// A lone selection emits nothing, so the opponent can't tell it
    /// happened.
    pub fn select_character(
        &mut self,
        client: ClientId,
        character_id: String,
    ) -> Result<Outcome, RoomError> {
        let slot = resolve_role(self, client)
            .ok_or_else(|| RoomError::NotInRoom(client, self.code.clone()))?;
        self.require_status("select-character", &[RoomStatus::Selecting])?;
        if self.player(slot).is_some_and(|p| p.secret.is_some()) {
            return Err(RoomError::AlreadySelected(client));
        }
        if !self.characters.iter().any(|c| c.id == character_id) {
            return Err(RoomError::UnknownCard(character_id));
        }

        if let Some(player) = self.player_mut(slot) {
            player.secret = Some(character_id);
        }
        tracing::debug!(room = %self.code, %slot, "secret selected");

        let both_set = self.p1.secret.is_some()
            && self.p2.as_ref().is_some_and(|p| p.secret.is_some());
        if !both_set {
            return Ok(Outcome::silent());
        }

        self.status = RoomStatus::Playing;
        self.current_turn = Some(Slot::P1);
        self.guessed_wrong = [false; 2];
        tracing::info!(room = %self.code, "game started");

        Ok(Outcome::broadcast(Event::StartGame {
            current_turn: Slot::P1,
        }))
    }

    /// The turn-holder names a card as the opponent's secret.
    ///
    /// A right guess wins. A wrong guess passes the turn, unless the
    /// opponent already guessed wrong this game, in which case it's a draw.
    pub fn make_guess(
        &mut self,
        client: ClientId,
        character_id: String,
    ) -> Result<Outcome, RoomError> {
        let current = self.require_turn("make-guess", client)?;
        let opponent = current.other();

        self.guessed_wrong[slot_index(current)] = true;

        let opponent_secret = self.player(opponent).and_then(Player::secret);
        if opponent_secret == Some(character_id.as_str()) {
            let winner = self.player(current).map(|p| p.name.clone());
            return Ok(self.finish(winner, EndReason::Correct));
        }

        if self.guessed_wrong[slot_index(opponent)] {
            return Ok(self.finish(None, EndReason::BothWrong));
        }

        self.current_turn = Some(opponent);
        Ok(Outcome::broadcast(Event::TurnChanged {
            current_turn: opponent,
        }))
    }

    /// The turn-holder passes the turn without guessing.
    pub fn end_turn(&mut self, client: ClientId) -> Result<Outcome, RoomError> {
        let current = self.require_turn("end-turn", client)?;
        let next = current.other();
        self.current_turn = Some(next);
        Ok(Outcome::broadcast(Event::TurnChanged { current_turn: next }))
    }

    fn finish(&mut self, winner: Option<String>, reason: EndReason) -> Outcome {
        self.status = RoomStatus::Finished;
        self.current_turn = None;
        tracing::info!(room = %self.code, ?winner, ?reason, "game ended");

        Outcome {
            events: vec![Event::GameEnded { winner, reason }],
            schedule_reset: true,
        }
    }

    /// Clears the finished game and returns to topic selection.
    pub fn reset(&mut self) -> Result<Outcome, RoomError> {
        self.require_status("reset", &[RoomStatus::Finished])?;

        self.status = RoomStatus::TopicSelection;
        self.topic = None;
        self.characters.clear();
        self.clear_secrets();
        self.current_turn = None;
        self.guessed_wrong = [false; 2];
        tracing::info!(room = %self.code, "room reset to topic selection");

        Ok(Outcome::broadcast(Event::ResetToTopic))
    }
}
