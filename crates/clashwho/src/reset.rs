//! Delayed room resets.
//!
//! When a game ends the room stays `finished` for a short while so both
//! players can see the result, then returns to topic selection. Each
//! scheduled reset is a sleeping task that posts [`GatewayCommand::ResetDue`]
//! back into the gateway queue; the gateway applies it only if its ticket is
//! still the latest one for that room.

use std::collections::HashMap;
use std::time::Duration;

use clashwho_protocol::RoomCode;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::gateway::GatewayCommand;

struct PendingReset {
    ticket: u64,
    task: JoinHandle<()>,
}

/// At most one pending reset per room.
#[derive(Default)]
pub(crate) struct ResetScheduler {
    pending: HashMap<RoomCode, PendingReset>,
    next_ticket: u64,
}

impl ResetScheduler {
    /// Schedules a reset of `code` after `delay`, replacing any reset
    /// already pending for that room.
    pub(crate) fn schedule(
        &mut self,
        code: RoomCode,
        delay: Duration,
        queue: mpsc::Sender<GatewayCommand>,
    ) {
        self.next_ticket += 1;
        let ticket = self.next_ticket;

        let due = code.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = queue
                .send(GatewayCommand::ResetDue { code: due, ticket })
                .await;
        });

        if let Some(previous) = self.pending.insert(code.clone(), PendingReset { ticket, task }) {
            previous.task.abort();
            tracing::debug!(room = %code, "pending reset replaced");
        }
        tracing::debug!(room = %code, ticket, ?delay, "reset scheduled");
    }

    /// Consumes the pending reset for `code` if `ticket` is the current
    /// one. Returns `false` for stale or unknown tickets.
    pub(crate) fn complete(&mut self, code: &RoomCode, ticket: u64) -> bool {
        match self.pending.get(code) {
            Some(pending) if pending.ticket == ticket => {
                self.pending.remove(code);
                true
            }
            _ => false,
        }
    }

    /// Number of rooms with a reset still pending.
    #[cfg(test)]
    pub(crate) fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl Drop for ResetScheduler {
    fn drop(&mut self) {
        for pending in self.pending.values() {
            pending.task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code() -> RoomCode {
        RoomCode::from("ABCDE")
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut scheduler = ResetScheduler::default();
        scheduler.schedule(code(), Duration::from_secs(3), tx);

        tokio::time::sleep(Duration::from_millis(2_900)).await;
        assert!(rx.try_recv().is_err());

        match rx.recv().await {
            Some(GatewayCommand::ResetDue { code: due, ticket }) => {
                assert_eq!(due, code());
                assert!(scheduler.complete(&due, ticket));
            }
            _ => panic!("expected ResetDue"),
        }
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_cancels_previous() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut scheduler = ResetScheduler::default();
        scheduler.schedule(code(), Duration::from_secs(3), tx.clone());
        tokio::time::sleep(Duration::from_secs(1)).await;
        scheduler.schedule(code(), Duration::from_secs(3), tx);
        assert_eq!(scheduler.pending_count(), 1);

        // Only the second timer survives, due 4s after the start.
        let Some(GatewayCommand::ResetDue { ticket, .. }) = rx.recv().await else {
            panic!("expected ResetDue");
        };
        assert_eq!(ticket, 2);
        assert!(scheduler.complete(&code(), ticket));

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_stale_ticket_is_refused() {
        let mut scheduler = ResetScheduler::default();
        assert!(!scheduler.complete(&code(), 1));
    }
}
