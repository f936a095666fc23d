//! Real-time event fan-out for the change feed.
//!
//! Every mutating server function publishes a [`VaultEvent`] here. Connected
//! clients receive them through the long-poll in `feed.rs`. A short replay
//! buffer bridges the gap between a client's polls so an event fired while
//! no poll was parked is still delivered on the next one.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{LazyLock, Mutex};
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use vault_core::VaultEvent;

use crate::EventEnvelope;

/// How many recent events are kept for poll catch-up.
const REPLAY_CAPACITY: usize = 64;

/// Global event broadcaster.
static EVENT_TX: LazyLock<broadcast::Sender<EventEnvelope>> = LazyLock::new(|| {
    let (tx, _) = broadcast::channel(1024);
    tx
});

/// Monotone sequence counter; 0 means "nothing published yet".
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Recent events, oldest first.
static REPLAY: LazyLock<Mutex<VecDeque<EventEnvelope>>> =
    LazyLock::new(|| Mutex::new(VecDeque::with_capacity(REPLAY_CAPACITY)));

/// Publish an event to all subscribers. Returns its sequence number.
pub fn publish_event(event: VaultEvent) -> u64 {
    let seq = EVENT_SEQ.fetch_add(1, Ordering::SeqCst) + 1;
    let envelope = EventEnvelope { seq, event };

    tracing::debug!("event {}: {}", seq, envelope.event.description());

    if let Ok(mut replay) = REPLAY.lock() {
        if replay.len() == REPLAY_CAPACITY {
            replay.pop_front();
        }
        replay.push_back(envelope.clone());
    }

    // A send error only means no subscriber is currently parked.
    let _ = EVENT_TX.send(envelope);
    seq
}

/// Subscribe to the live event stream.
pub fn subscribe_events() -> broadcast::Receiver<EventEnvelope> {
    EVENT_TX.subscribe()
}

/// The sequence number of the most recently published event.
pub fn latest_seq() -> u64 {
    EVENT_SEQ.load(Ordering::SeqCst)
}

/// The oldest buffered event with sequence greater than `after_seq`, if any.
pub fn replay_after(after_seq: u64) -> Option<EventEnvelope> {
    REPLAY
        .lock()
        .ok()
        .and_then(|replay| replay.iter().find(|e| e.seq > after_seq).cloned())
}

/// Wait up to `timeout` for an event with sequence greater than `after_seq`.
///
/// The subscription is opened before the replay buffer is consulted. An
/// event published in between therefore lands on the already-open receiver
/// even when it missed the buffer check, so no publish can fall into the
/// gap and park the caller for the full timeout.
pub async fn await_next(after_seq: u64, timeout: Duration) -> Option<EventEnvelope> {
    let mut rx = subscribe_events();

    if let Some(envelope) = replay_after(after_seq) {
        return Some(envelope);
    }

    let wait = tokio::time::timeout(timeout, async move {
        loop {
            match rx.recv().await {
                Ok(envelope) if envelope.seq > after_seq => break Some(envelope),
                Ok(_) => continue,
                // Dropped messages are still in the replay buffer.
                Err(RecvError::Lagged(_)) => match replay_after(after_seq) {
                    Some(envelope) => break Some(envelope),
                    None => continue,
                },
                Err(RecvError::Closed) => break None,
            }
        }
    })
    .await;

    wait.unwrap_or(None)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use super::*;
    use vault_core::{Broadcast, Priority};

    fn event(title: &str) -> VaultEvent {
        VaultEvent::BroadcastSent {
            broadcast: Broadcast::new(title, "body", Priority::Normal),
            timestamp: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn publish_delivers_to_live_subscriber() {
        let mut rx = subscribe_events();
        let seq = publish_event(event("live"));

        let received = rx.recv().await.unwrap();
        assert_eq!(received.seq, seq);
        assert!(latest_seq() >= seq);
    }

    #[tokio::test]
    async fn replay_catches_up_between_polls() {
        // No subscriber parked while the event fires.
        let seq = publish_event(event("missed"));

        let caught_up = replay_after(seq - 1).unwrap();
        assert_eq!(caught_up.seq, seq);
        assert!(replay_after(seq).map(|e| e.seq > seq).unwrap_or(true));
    }

    #[tokio::test]
    async fn sequence_numbers_are_monotone() {
        let first = publish_event(event("a"));
        let second = publish_event(event("b"));
        assert!(second > first);
    }

    #[tokio::test]
    async fn wait_sees_event_published_while_parked() {
        // The event fires after the wait has started, i.e. after the replay
        // buffer came up empty. The receiver opened before that check must
        // still deliver it instead of letting the wait run out.
        let start = latest_seq();
        let waiter = tokio::spawn(await_next(start, Duration::from_secs(5)));
        tokio::task::yield_now().await;

        publish_event(event("published mid-wait"));

        let received = waiter.await.unwrap().unwrap();
        assert!(received.seq > start);
    }

    #[tokio::test]
    async fn wait_returns_buffered_event_immediately() {
        let seq = publish_event(event("already buffered"));

        let received = await_next(seq - 1, Duration::from_millis(10)).await.unwrap();
        assert!(received.seq >= seq);
    }

    #[tokio::test]
    async fn wait_times_out_on_quiet_feed() {
        // No event can ever exceed u64::MAX, so this wait must expire empty.
        let result = await_next(u64::MAX, Duration::from_millis(20)).await;
        assert!(result.is_none());
    }
}
