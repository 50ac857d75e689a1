use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};
use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::cards::PlayingCard;
use crate::game::GameState;
use crate::hand::Hand;
use crate::player::{GameOutcome, PlayerId};

// Snapshots queued per subscriber before new ones are dropped for it.
const SNAPSHOT_CHANNEL_BUFFER: usize = 256;

/// Everything a host may observe about the table, captured after a
/// transition has fully settled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub round_number: u64,
    pub game_state: GameState,
    pub dealer_hand: Hand,
    pub player_hands: HashMap<PlayerId, Hand>,
    pub player_bets: HashMap<PlayerId, u32>,
    pub player_outcomes: HashMap<PlayerId, GameOutcome>,
    /// Undealt cards, front first
    pub deck: Vec<PlayingCard>,
    pub active_player_ids: Vec<PlayerId>,
    /// Joined mid-round, seated when the next round opens
    #[serde(default)]
    pub waiting_player_ids: Vec<PlayerId>,
    pub players_ready_after_betting: HashSet<PlayerId>,
    pub all_players_have_bet: bool,
}

/// Receiving end handed to a host. Dropping it unsubscribes.
pub struct SnapshotSubscription {
    bus: SnapshotBus,
    subscriber_id: usize,
    receiver: Receiver<RoundSnapshot>,
}

impl SnapshotSubscription {
    pub fn receiver(&self) -> &Receiver<RoundSnapshot> {
        &self.receiver
    }

    /// Every snapshot published since the last call, oldest first.
    pub fn drain(&self) -> Vec<RoundSnapshot> {
        self.receiver.try_iter().collect()
    }
}

impl Drop for SnapshotSubscription {
    fn drop(&mut self) {
        self.bus.unsubscribe(self.subscriber_id);
    }
}

/// Fan-out of [`RoundSnapshot`]s to any number of observers.
#[derive(Debug, Clone, Default)]
pub struct SnapshotBus {
    inner: Arc<SnapshotBusInner>,
}

#[derive(Debug, Default)]
struct SnapshotBusInner {
    subscribers: RwLock<Vec<(usize, SyncSender<RoundSnapshot>)>>,
    next_id: AtomicUsize,
}

impl SnapshotBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> SnapshotSubscription {
        let (tx, rx) = mpsc::sync_channel(SNAPSHOT_CHANNEL_BUFFER);
        let id = self.inner.next_id.fetch_add(1, Ordering::AcqRel);
        self.inner
            .subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, tx));

        tracing::debug!(subscriber_id = id, "snapshot subscriber added");

        SnapshotSubscription {
            bus: self.clone(),
            subscriber_id: id,
            receiver: rx,
        }
    }

    pub fn has_subscribers(&self) -> bool {
        !self
            .inner
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn publish(&self, snapshot: &RoundSnapshot) {
        let subscribers = self
            .inner
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        let mut disconnected = Vec::new();
        for (id, sender) in subscribers {
            match sender.try_send(snapshot.clone()) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    tracing::warn!(
                        subscriber_id = id,
                        state = %snapshot.game_state,
                        "snapshot dropped for slow subscriber"
                    );
                }
                Err(TrySendError::Disconnected(_)) => disconnected.push(id),
            }
        }

        if !disconnected.is_empty() {
            self.inner
                .subscribers
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .retain(|(id, _)| !disconnected.contains(id));
        }
    }

    fn unsubscribe(&self, subscriber_id: usize) {
        self.inner
            .subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|(id, _)| *id != subscriber_id);
        tracing::debug!(subscriber_id, "snapshot subscriber removed");
    }
}
