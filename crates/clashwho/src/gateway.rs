//! The gateway actor: the single owner of all game state.
//!
//! Every connection handler talks to one gateway task through an mpsc
//! channel. The gateway applies commands one at a time, in arrival order,
//! so room transitions never interleave. It owns:
//!
//! - the [`RoomStore`] with every room,
//! - the broadcast groups (which connections joined which room code),
//! - one outbound channel per connected client,
//! - the reset scheduler for finished games.
//!
//! Rejected commands are logged and dropped; the sender hears nothing.

use std::collections::HashMap;

use clashwho_protocol::{ClientId, Command, Event, RoomCode, RoomStatus, Slot};
use clashwho_room::{Outcome, Room, RoomError, RoomStore, resolve_role};
use rand::rngs::StdRng;
use tokio::sync::{mpsc, oneshot};

use crate::ClashWhoError;
use crate::reset::ResetScheduler;

/// Default command queue size for the gateway.
pub const DEFAULT_QUEUE_SIZE: usize = 256;

/// Channel the gateway pushes a client's outbound events into.
///
/// The connection handler drains it into the socket.
pub type ClientSender = mpsc::UnboundedSender<Event>;

/// Commands sent to the gateway through its queue.
pub enum GatewayCommand {
    /// A connection was accepted. The gateway greets it with `connected`.
    Connect {
        client: ClientId,
        sender: ClientSender,
    },

    /// A connection went away. Rooms are left untouched.
    Disconnect { client: ClientId },

    /// A decoded command from a client.
    Inbound { client: ClientId, command: Command },

    /// A reset timer fired.
    ResetDue { code: RoomCode, ticket: u64 },

    /// Request a snapshot of one room.
    GetRoom {
        code: RoomCode,
        reply: oneshot::Sender<Option<RoomInfo>>,
    },

    /// Stop the gateway.
    Shutdown,
}

/// A snapshot of a room's public state, plus which seats have a secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomInfo {
    pub code: RoomCode,
    pub status: RoomStatus,
    pub host: ClientId,
    pub topic: Option<String>,
    pub pool_size: u32,
    pub card_count: usize,
    pub current_turn: Option<Slot>,
    /// `[p1, p2]`: whether each seat has picked a secret.
    pub secrets_chosen: [bool; 2],
    /// Connections currently in the room's broadcast group.
    pub listeners: usize,
}

/// Handle to the running gateway. Cheap to clone.
#[derive(Clone)]
pub struct GatewayHandle {
    sender: mpsc::Sender<GatewayCommand>,
}

impl GatewayHandle {
    async fn send(&self, command: GatewayCommand) -> Result<(), ClashWhoError> {
        self.sender
            .send(command)
            .await
            .map_err(|_| ClashWhoError::GatewayClosed)
    }

    /// Registers a client and the channel its events go to.
    pub async fn connect(&self, client: ClientId, sender: ClientSender) -> Result<(), ClashWhoError> {
        self.send(GatewayCommand::Connect { client, sender }).await
    }

    /// Unregisters a client. Its outbound channel is dropped.
    pub async fn disconnect(&self, client: ClientId) -> Result<(), ClashWhoError> {
        self.send(GatewayCommand::Disconnect { client }).await
    }

    /// Queues a client command (fire-and-forget).
    pub async fn submit(&self, client: ClientId, command: Command) -> Result<(), ClashWhoError> {
        self.send(GatewayCommand::Inbound { client, command }).await
    }

    /// Returns a snapshot of `code`, or `None` if no such room exists.
    ///
    /// Answered after every command queued before it.
    pub async fn room_info(&self, code: &RoomCode) -> Result<Option<RoomInfo>, ClashWhoError> {
        let (reply, response) = oneshot::channel();
        self.send(GatewayCommand::GetRoom {
            code: code.clone(),
            reply,
        })
        .await?;
        response.await.map_err(|_| ClashWhoError::GatewayClosed)
    }

    /// Tells the gateway to stop.
    pub async fn shutdown(&self) -> Result<(), ClashWhoError> {
        self.send(GatewayCommand::Shutdown).await
    }
}

/// Spawns the gateway task and returns a handle to it.
///
/// `rng` deals card pools; the store carries its own RNG for room codes.
pub fn spawn_gateway(store: RoomStore, rng: StdRng, queue_size: usize) -> GatewayHandle {
    let (sender, receiver) = mpsc::channel(queue_size);
    let gateway = Gateway {
        store,
        rng,
        clients: HashMap::new(),
        groups: HashMap::new(),
        resets: ResetScheduler::default(),
        queue: sender.downgrade(),
        receiver,
    };
    tokio::spawn(gateway.run());
    GatewayHandle { sender }
}

struct Gateway {
    store: RoomStore,
    rng: StdRng,
    clients: HashMap<ClientId, ClientSender>,
    /// Room code to the connections that created or joined it.
    groups: HashMap<RoomCode, Vec<ClientId>>,
    resets: ResetScheduler,
    /// Weak so that the loop ends once every handle is gone.
    queue: mpsc::WeakSender<GatewayCommand>,
    receiver: mpsc::Receiver<GatewayCommand>,
}

impl Gateway {
    async fn run(mut self) {
        tracing::info!("gateway started");

        while let Some(cmd) = self.receiver.recv().await {
            match cmd {
                GatewayCommand::Connect { client, sender } => {
                    self.handle_connect(client, sender);
                }
                GatewayCommand::Disconnect { client } => {
                    self.handle_disconnect(client);
                }
                GatewayCommand::Inbound { client, command } => {
                    self.handle_inbound(client, command);
                }
                GatewayCommand::ResetDue { code, ticket } => {
                    self.handle_reset_due(code, ticket);
                }
                GatewayCommand::GetRoom { code, reply } => {
                    let _ = reply.send(self.room_info(&code));
                }
                GatewayCommand::Shutdown => {
                    tracing::info!("gateway shutting down");
                    break;
                }
            }
        }

        tracing::info!(rooms = self.store.room_count(), "gateway stopped");
    }

    fn handle_connect(&mut self, client: ClientId, sender: ClientSender) {
        self.clients.insert(client, sender);
        tracing::info!(%client, "client connected");
        self.send_to(client, Event::Connected { client_id: client });
    }

    fn handle_disconnect(&mut self, client: ClientId) {
        self.clients.remove(&client);
        self.groups.retain(|_, members| {
            members.retain(|member| *member != client);
            !members.is_empty()
        });
        tracing::info!(%client, "client disconnected");
    }

    fn handle_inbound(&mut self, client: ClientId, command: Command) {
        let name = command.name();
        tracing::trace!(%client, command = name, "command received");

        if let Err(e) = self.apply(client, command) {
            tracing::debug!(
                %client,
                command = name,
                kind = ?e.kind(),
                reason = %e,
                "command ignored"
            );
        }
    }

    fn apply(&mut self, client: ClientId, command: Command) -> Result<(), RoomError> {
        let (code, outcome) = match command {
            Command::CreateRoom { player_name } => {
                let code = self.store.create(client, player_name)?.code().clone();
                self.join_group(&code, client);
                self.send_to(client, Event::RoomCreated { room_code: code });
                return Ok(());
            }
            Command::JoinRoom {
                room_code,
                player_name,
            } => {
                let outcome = find_room(&mut self.store, &room_code)?.join(client, player_name)?;
                self.join_group(&room_code, client);
                (room_code, outcome)
            }
            Command::UpdateSettings {
                room_code,
                pool_size,
            } => {
                let max = self.store.config().max_pool_size;
                let outcome = seated_room(&mut self.store, &room_code, client)?
                    .update_settings(client, pool_size, max)?;
                (room_code, outcome)
            }
            Command::ChooseTopic { room_code, topic } => {
                let outcome = seated_room(&mut self.store, &room_code, client)?
                    .choose_topic(client, topic, &mut self.rng)?;
                (room_code, outcome)
            }
            Command::SelectCharacter {
                room_code,
                character_id,
            } => {
                let outcome = seated_room(&mut self.store, &room_code, client)?
                    .select_character(client, character_id)?;
                (room_code, outcome)
            }
            Command::MakeGuess {
                room_code,
                character_id,
            } => {
                let outcome = seated_room(&mut self.store, &room_code, client)?
                    .make_guess(client, character_id)?;
                (room_code, outcome)
            }
            Command::EndTurn { room_code } => {
                let outcome = seated_room(&mut self.store, &room_code, client)?.end_turn(client)?;
                (room_code, outcome)
            }
        };

        self.deliver(&code, outcome);
        Ok(())
    }

    fn handle_reset_due(&mut self, code: RoomCode, ticket: u64) {
        if !self.resets.complete(&code, ticket) {
            tracing::debug!(room = %code, ticket, "stale reset ignored");
            return;
        }

        match find_room(&mut self.store, &code).and_then(Room::reset) {
            Ok(outcome) => self.deliver(&code, outcome),
            Err(e) => tracing::debug!(room = %code, reason = %e, "reset skipped"),
        }
    }

    fn join_group(&mut self, code: &RoomCode, client: ClientId) {
        let members = self.groups.entry(code.clone()).or_default();
        if !members.contains(&client) {
            members.push(client);
        }
    }

    /// Broadcasts an outcome's events and arms the reset timer if asked to.
    fn deliver(&mut self, code: &RoomCode, outcome: Outcome) {
        for event in &outcome.events {
            self.broadcast(code, event);
        }

        if outcome.schedule_reset {
            match self.queue.upgrade() {
                Some(queue) => {
                    let delay = self.store.config().reset_delay;
                    self.resets.schedule(code.clone(), delay, queue);
                }
                None => tracing::warn!(room = %code, "gateway queue closed, reset dropped"),
            }
        }
    }

    fn broadcast(&self, code: &RoomCode, event: &Event) {
        let Some(members) = self.groups.get(code) else {
            return;
        };
        tracing::debug!(room = %code, event = event.name(), listeners = members.len(), "broadcast");
        for client in members {
            self.send_to(*client, event.clone());
        }
    }

    fn send_to(&self, client: ClientId, event: Event) {
        if let Some(sender) = self.clients.get(&client) {
            if sender.send(event).is_err() {
                tracing::trace!(%client, "outbound channel closed");
            }
        }
    }

    fn room_info(&self, code: &RoomCode) -> Option<RoomInfo> {
        let room = self.store.get(code)?;
        let has_secret = |slot| room.player(slot).is_some_and(|p| p.secret().is_some());
        Some(RoomInfo {
            code: code.clone(),
            status: room.status(),
            host: room.host(),
            topic: room.topic().map(str::to_owned),
            pool_size: room.pool_size(),
            card_count: room.characters().len(),
            current_turn: room.current_turn(),
            secrets_chosen: [has_secret(Slot::P1), has_secret(Slot::P2)],
            listeners: self.groups.get(code).map_or(0, Vec::len),
        })
    }
}

fn find_room<'a>(store: &'a mut RoomStore, code: &RoomCode) -> Result<&'a mut Room, RoomError> {
    store
        .get_mut(code)
        .ok_or_else(|| RoomError::NotFound(code.clone()))
}

/// Like [`find_room`], but also requires `client` to hold a seat.
fn seated_room<'a>(
    store: &'a mut RoomStore,
    code: &RoomCode,
    client: ClientId,
) -> Result<&'a mut Room, RoomError> {
    let room = find_room(store, code)?;
    if resolve_role(room, client).is_none() {
        return Err(RoomError::NotInRoom(client, code.clone()));
    }
    Ok(room)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clashwho_protocol::{Card, EndReason};
    use clashwho_room::{RoomConfig, is_valid_room_code};
    use rand::SeedableRng;

    use super::*;

    const ANA: ClientId = ClientId(1);
    const BEN: ClientId = ClientId(2);
    const CAL: ClientId = ClientId(3);

    struct TestClient {
        id: ClientId,
        rx: mpsc::UnboundedReceiver<Event>,
    }

    impl TestClient {
        async fn connect(gateway: &GatewayHandle, id: ClientId) -> Self {
            let (tx, rx) = mpsc::unbounded_channel();
            gateway.connect(id, tx).await.unwrap();
            let mut client = Self { id, rx };
            assert_eq!(client.next().await, Event::Connected { client_id: id });
            client
        }

        async fn next(&mut self) -> Event {
            self.rx.recv().await.expect("gateway dropped the channel")
        }

        fn assert_quiet(&mut self) {
            if let Ok(event) = self.rx.try_recv() {
                panic!("{} got unexpected {event:?}", self.id);
            }
        }
    }

    fn gateway() -> GatewayHandle {
        let store = RoomStore::with_rng(RoomConfig::default(), StdRng::seed_from_u64(7));
        spawn_gateway(store, StdRng::seed_from_u64(8), DEFAULT_QUEUE_SIZE)
    }

    async fn info(gateway: &GatewayHandle, code: &RoomCode) -> RoomInfo {
        gateway.room_info(code).await.unwrap().expect("room exists")
    }

    /// Ana creates, Ben joins. Both have consumed `player-joined`.
    async fn two_player_room() -> (GatewayHandle, RoomCode, TestClient, TestClient) {
        let gateway = gateway();
        let mut ana = TestClient::connect(&gateway, ANA).await;
        let mut ben = TestClient::connect(&gateway, BEN).await;

        gateway
            .submit(ANA, Command::CreateRoom { player_name: "Ana".into() })
            .await
            .unwrap();
        let Event::RoomCreated { room_code } = ana.next().await else {
            panic!("expected room-created");
        };

        gateway
            .submit(BEN, Command::JoinRoom {
                room_code: room_code.clone(),
                player_name: "Ben".into(),
            })
            .await
            .unwrap();
        ana.next().await;
        ben.next().await;
        (gateway, room_code, ana, ben)
    }

    /// Continues from [`two_player_room`] through a topic choice; returns the pool.
    async fn dealt_room(
        topic: &str,
    ) -> (GatewayHandle, RoomCode, TestClient, TestClient, Vec<Card>) {
        let (gateway, code, mut ana, mut ben) = two_player_room().await;
        gateway
            .submit(ANA, Command::ChooseTopic {
                room_code: code.clone(),
                topic: topic.into(),
            })
            .await
            .unwrap();
        let Event::TopicChosen { characters, .. } = ana.next().await else {
            panic!("expected topic-chosen");
        };
        ben.next().await;
        (gateway, code, ana, ben, characters)
    }

    async fn select(gateway: &GatewayHandle, client: ClientId, code: &RoomCode, id: &str) {
        gateway
            .submit(client, Command::SelectCharacter {
                room_code: code.clone(),
                character_id: id.into(),
            })
            .await
            .unwrap();
    }

    async fn guess(gateway: &GatewayHandle, client: ClientId, code: &RoomCode, id: &str) {
        gateway
            .submit(client, Command::MakeGuess {
                room_code: code.clone(),
                character_id: id.into(),
            })
            .await
            .unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_room_replies_to_creator_only() {
        let gateway = gateway();
        let mut ana = TestClient::connect(&gateway, ANA).await;
        let mut ben = TestClient::connect(&gateway, BEN).await;

        gateway
            .submit(ANA, Command::CreateRoom { player_name: "Ana".into() })
            .await
            .unwrap();
        let Event::RoomCreated { room_code } = ana.next().await else {
            panic!("expected room-created");
        };
        assert!(is_valid_room_code(room_code.as_str(), 5));

        let info = info(&gateway, &room_code).await;
        assert_eq!(info.status, RoomStatus::Waiting);
        assert_eq!(info.host, ANA);
        assert_eq!(info.listeners, 1);
        ben.assert_quiet();
    }

    #[tokio::test(start_paused = true)]
    async fn test_join_broadcasts_to_both() {
        let gateway = gateway();
        let mut ana = TestClient::connect(&gateway, ANA).await;
        let mut ben = TestClient::connect(&gateway, BEN).await;
        gateway
            .submit(ANA, Command::CreateRoom { player_name: "Ana".into() })
            .await
            .unwrap();
        let Event::RoomCreated { room_code } = ana.next().await else {
            panic!("expected room-created");
        };

        gateway
            .submit(BEN, Command::JoinRoom {
                room_code: room_code.clone(),
                player_name: "Ben".into(),
            })
            .await
            .unwrap();

        for client in [&mut ana, &mut ben] {
            match client.next().await {
                Event::PlayerJoined { status, host_id, players } => {
                    assert_eq!(status, RoomStatus::TopicSelection);
                    assert_eq!(host_id, ANA);
                    assert_eq!(players.p1, "Ana");
                    assert_eq!(players.p2, "Ben");
                }
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_settings_and_topic_reach_both() {
        let (gateway, code, mut ana, mut ben) = two_player_room().await;

        gateway
            .submit(ANA, Command::UpdateSettings {
                room_code: code.clone(),
                pool_size: 8,
            })
            .await
            .unwrap();
        assert_eq!(ana.next().await, Event::SettingsUpdated { pool_size: 8 });
        assert_eq!(ben.next().await, Event::SettingsUpdated { pool_size: 8 });

        gateway
            .submit(ANA, Command::ChooseTopic {
                room_code: code.clone(),
                topic: "clash-royale".into(),
            })
            .await
            .unwrap();
        let first = ana.next().await;
        assert_eq!(ben.next().await, first);
        match first {
            Event::TopicChosen { topic, characters, status } => {
                assert_eq!(topic, "clash-royale");
                assert_eq!(characters.len(), 8);
                assert_eq!(status, RoomStatus::Selecting);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_correct_guess_ends_game_then_resets() {
        let (gateway, code, mut ana, mut ben, pool) = dealt_room("celebrities").await;
        let (a, b) = (pool[0].id.clone(), pool[1].id.clone());

        select(&gateway, ANA, &code, &a).await;
        // A lone selection is invisible to both players.
        info(&gateway, &code).await;
        ana.assert_quiet();
        ben.assert_quiet();

        select(&gateway, BEN, &code, &b).await;
        assert_eq!(ana.next().await, Event::StartGame { current_turn: Slot::P1 });
        assert_eq!(ben.next().await, Event::StartGame { current_turn: Slot::P1 });

        guess(&gateway, ANA, &code, &b).await;
        let ended = Event::GameEnded {
            winner: Some("Ana".into()),
            reason: EndReason::Correct,
        };
        assert_eq!(ana.next().await, ended);
        assert_eq!(ben.next().await, ended);
        assert_eq!(info(&gateway, &code).await.status, RoomStatus::Finished);

        tokio::time::sleep(Duration::from_millis(2_900)).await;
        ana.assert_quiet();

        assert_eq!(ana.next().await, Event::ResetToTopic);
        assert_eq!(ben.next().await, Event::ResetToTopic);
        let info = info(&gateway, &code).await;
        assert_eq!(info.status, RoomStatus::TopicSelection);
        assert_eq!(info.secrets_chosen, [false, false]);
        assert_eq!(info.current_turn, None);
        assert_eq!(info.card_count, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_both_wrong_is_a_draw() {
        let (gateway, code, mut ana, mut ben, pool) = dealt_room("celebrities").await;
        let (a, b, c) = (pool[0].id.clone(), pool[1].id.clone(), pool[2].id.clone());
        select(&gateway, ANA, &code, &a).await;
        select(&gateway, BEN, &code, &b).await;
        ana.next().await;
        ben.next().await;

        guess(&gateway, ANA, &code, &c).await;
        assert_eq!(ana.next().await, Event::TurnChanged { current_turn: Slot::P2 });
        assert_eq!(ben.next().await, Event::TurnChanged { current_turn: Slot::P2 });

        guess(&gateway, BEN, &code, &c).await;
        let draw = Event::GameEnded {
            winner: None,
            reason: EndReason::BothWrong,
        };
        assert_eq!(ana.next().await, draw);
        assert_eq!(ben.next().await, draw);

        assert_eq!(ana.next().await, Event::ResetToTopic);
        assert_eq!(ben.next().await, Event::ResetToTopic);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejected_commands_emit_nothing() {
        let (gateway, code, mut ana, mut ben, pool) = dealt_room("celebrities").await;
        let mut cal = TestClient::connect(&gateway, CAL).await;

        // Unknown room.
        gateway
            .submit(CAL, Command::JoinRoom {
                room_code: RoomCode::from("ZZZZZ"),
                player_name: "Cal".into(),
            })
            .await
            .unwrap();
        // Full room.
        gateway
            .submit(CAL, Command::JoinRoom {
                room_code: code.clone(),
                player_name: "Cal".into(),
            })
            .await
            .unwrap();
        // Non-host settings.
        gateway
            .submit(BEN, Command::UpdateSettings {
                room_code: code.clone(),
                pool_size: 4,
            })
            .await
            .unwrap();
        // Outsider picks a card.
        select(&gateway, CAL, &code, &pool[0].id).await;
        // Guess before the game started.
        guess(&gateway, ANA, &code, &pool[0].id).await;

        let info = info(&gateway, &code).await;
        assert_eq!(info.status, RoomStatus::Selecting);
        assert_eq!(info.pool_size, 32);
        assert_eq!(info.secrets_chosen, [false, false]);
        assert_eq!(info.listeners, 2);
        ana.assert_quiet();
        ben.assert_quiet();
        cal.assert_quiet();
    }

    #[tokio::test(start_paused = true)]
    async fn test_out_of_turn_and_finished_guesses_ignored() {
        let (gateway, code, mut ana, mut ben, pool) = dealt_room("celebrities").await;
        let (a, b) = (pool[0].id.clone(), pool[1].id.clone());
        select(&gateway, ANA, &code, &a).await;
        select(&gateway, BEN, &code, &b).await;
        ana.next().await;
        ben.next().await;

        guess(&gateway, BEN, &code, &a).await;
        gateway
            .submit(BEN, Command::EndTurn { room_code: code.clone() })
            .await
            .unwrap();
        assert_eq!(info(&gateway, &code).await.current_turn, Some(Slot::P1));
        ana.assert_quiet();

        guess(&gateway, ANA, &code, &b).await;
        ana.next().await;
        ben.next().await;

        // Room is finished until the reset fires.
        guess(&gateway, BEN, &code, &a).await;
        info(&gateway, &code).await;
        ana.assert_quiet();
        ben.assert_quiet();
    }

    #[tokio::test(start_paused = true)]
    async fn test_disconnect_leaves_room_intact() {
        let (gateway, code, mut ana, _ben) = two_player_room().await;
        gateway.disconnect(BEN).await.unwrap();

        let info = info(&gateway, &code).await;
        assert_eq!(info.status, RoomStatus::TopicSelection);
        assert_eq!(info.listeners, 1);

        gateway
            .submit(ANA, Command::UpdateSettings {
                room_code: code.clone(),
                pool_size: 12,
            })
            .await
            .unwrap();
        assert_eq!(ana.next().await, Event::SettingsUpdated { pool_size: 12 });
    }

    #[tokio::test(start_paused = true)]
    async fn test_creator_cannot_join_own_room() {
        let gateway = gateway();
        let mut ana = TestClient::connect(&gateway, ANA).await;
        gateway
            .submit(ANA, Command::CreateRoom { player_name: "Ana".into() })
            .await
            .unwrap();
        let Event::RoomCreated { room_code } = ana.next().await else {
            panic!("expected room-created");
        };

        gateway
            .submit(ANA, Command::JoinRoom {
                room_code: room_code.clone(),
                player_name: "Ana again".into(),
            })
            .await
            .unwrap();
        assert_eq!(info(&gateway, &room_code).await.status, RoomStatus::Waiting);
        ana.assert_quiet();
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_room_ignored_once_codes_run_out() {
        let config = RoomConfig { code_length: 1, ..RoomConfig::default() };
        let store = RoomStore::with_rng(config, StdRng::seed_from_u64(7));
        let gateway = spawn_gateway(store, StdRng::seed_from_u64(8), DEFAULT_QUEUE_SIZE);
        let mut ana = TestClient::connect(&gateway, ANA).await;

        let mut codes = Vec::new();
        for _ in 0..36 {
            gateway
                .submit(ANA, Command::CreateRoom { player_name: "Ana".into() })
                .await
                .unwrap();
            let Event::RoomCreated { room_code } = ana.next().await else {
                panic!("expected room-created");
            };
            codes.push(room_code);
        }

        gateway
            .submit(ANA, Command::CreateRoom { player_name: "Ana".into() })
            .await
            .unwrap();
        // The gateway is still serving: the round trip completes.
        assert_eq!(info(&gateway, &codes[0]).await.status, RoomStatus::Waiting);
        ana.assert_quiet();

        let mut ben = TestClient::connect(&gateway, BEN).await;
        gateway
            .submit(BEN, Command::JoinRoom {
                room_code: codes[35].clone(),
                player_name: "Ben".into(),
            })
            .await
            .unwrap();
        assert!(matches!(ben.next().await, Event::PlayerJoined { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_room_info_for_missing_room() {
        let gateway = gateway();
        assert_eq!(gateway.room_info(&RoomCode::from("NOPE1")).await.unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_closes_handle() {
        let gateway = gateway();
        gateway.shutdown().await.unwrap();
        tokio::task::yield_now().await;
        let err = gateway.room_info(&RoomCode::from("ABCDE")).await.unwrap_err();
        assert!(matches!(err, ClashWhoError::GatewayClosed));
    }
}
