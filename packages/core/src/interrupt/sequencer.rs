//! Timed two-phase reveal state machine for broadcasts.

use crate::Broadcast;

use super::{DedupStore, KvStore};

/// Duration of the attention banner phase, in milliseconds.
pub const ALERT_DURATION_MS: u64 = 2_000;

/// Duration of the message body phase, in milliseconds.
pub const MESSAGE_DURATION_MS: u64 = 5_000;

/// Current phase of the reveal state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum RevealPhase {
    /// Nothing is being revealed.
    Idle,
    /// Large priority-colored attention banner, no message body.
    Alert(Broadcast),
    /// Title and full message body with a depleting progress indicator.
    Message(Broadcast),
}

impl RevealPhase {
    /// The broadcast currently on screen, if any.
    pub fn broadcast(&self) -> Option<&Broadcast> {
        match self {
            RevealPhase::Idle => None,
            RevealPhase::Alert(b) | RevealPhase::Message(b) => Some(b),
        }
    }
}

/// Finite state machine driving a broadcast reveal:
/// `Idle -> Alert -> Message -> Idle`.
///
/// The machine owns no timer. Each transition that needs one returns the
/// phase duration in milliseconds; the caller schedules a single timer and
/// calls [`advance`](Self::advance) when it fires. Replacing the timer on
/// every transition keeps unmount-cancellation a single operation and rules
/// out leaked nested timeouts.
///
/// Only one reveal runs at a time. A newer broadcast arriving mid-sequence
/// is parked and promoted once the current reveal completes.
#[derive(Debug)]
pub struct RevealSequencer<K: KvStore> {
    dedup: DedupStore<K>,
    phase: RevealPhase,
    pending: Option<Broadcast>,
}

impl<K: KvStore> RevealSequencer<K> {
    pub fn new(dedup: DedupStore<K>) -> Self {
        Self {
            dedup,
            phase: RevealPhase::Idle,
            pending: None,
        }
    }

    /// Current phase, for rendering.
    pub fn phase(&self) -> &RevealPhase {
        &self.phase
    }

    /// Offer a freshly fetched broadcast to the machine.
    ///
    /// Already-shown ids are ignored, so duplicate event deliveries and
    /// re-fetches are harmless. Returns the duration of the newly entered
    /// phase when a timer must be (re)scheduled.
    pub fn offer(&mut self, broadcast: Broadcast) -> Option<u64> {
        if !self.dedup.should_show(broadcast.id) {
            return None;
        }

        if self.phase == RevealPhase::Idle {
            Some(self.start(broadcast))
        } else {
            // Mid-sequence: finish the current reveal first. Only the newest
            // arrival is kept; the fetch is latest-wins anyway.
            self.pending = Some(broadcast);
            None
        }
    }

    /// Advance on timer expiry. Returns the next phase duration, or `None`
    /// once the machine is idle and the caller's timer should stop.
    ///
    /// Timer expiry is the only way out of a phase; neither phase offers a
    /// skip control. Manual dismissal belongs to the inline banner, which
    /// keeps its own ledger and never touches this machine.
    pub fn advance(&mut self) -> Option<u64> {
        match std::mem::replace(&mut self.phase, RevealPhase::Idle) {
            RevealPhase::Idle => None,
            RevealPhase::Alert(broadcast) => {
                self.phase = RevealPhase::Message(broadcast);
                Some(MESSAGE_DURATION_MS)
            }
            RevealPhase::Message(_) => self.promote_pending(),
        }
    }

    fn start(&mut self, broadcast: Broadcast) -> u64 {
        // Mark on entry: a reveal interrupted by navigation is accepted as
        // shown rather than risking a repeat on the next load.
        self.dedup.mark_shown(broadcast.id);
        self.phase = RevealPhase::Alert(broadcast);
        ALERT_DURATION_MS
    }

    fn promote_pending(&mut self) -> Option<u64> {
        match self.pending.take() {
            Some(next) if self.dedup.should_show(next.id) => Some(self.start(next)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Priority;
    use crate::interrupt::MemoryKv;

    fn sequencer() -> RevealSequencer<MemoryKv> {
        RevealSequencer::new(DedupStore::new(MemoryKv::new()))
    }

    fn broadcast(title: &str) -> Broadcast {
        Broadcast::new(title, "body", Priority::Normal)
    }

    #[test]
    fn full_reveal_cycle_with_exact_durations() {
        let mut seq = sequencer();
        let b = broadcast("Maintenance Tonight");

        let alert = seq.offer(b.clone());
        assert_eq!(alert, Some(ALERT_DURATION_MS));
        assert_eq!(seq.phase(), &RevealPhase::Alert(b.clone()));

        let message = seq.advance();
        assert_eq!(message, Some(MESSAGE_DURATION_MS));
        assert_eq!(seq.phase(), &RevealPhase::Message(b));

        assert_eq!(seq.advance(), None);
        assert_eq!(seq.phase(), &RevealPhase::Idle);
    }

    #[test]
    fn duplicate_delivery_reveals_at_most_once() {
        let mut seq = sequencer();
        let b = broadcast("once");

        assert!(seq.offer(b.clone()).is_some());
        // Same id re-fetched mid-sequence and after dismissal.
        assert_eq!(seq.offer(b.clone()), None);
        seq.advance();
        seq.advance();
        assert_eq!(seq.offer(b), None);
        assert_eq!(seq.phase(), &RevealPhase::Idle);
    }

    #[test]
    fn reload_with_recorded_id_shows_nothing() {
        let store = MemoryKv::new();
        let b = broadcast("b1");

        {
            let mut seq = RevealSequencer::new(DedupStore::new(&store));
            seq.offer(b.clone());
        }

        // Fresh mount over the same persisted store.
        let mut seq = RevealSequencer::new(DedupStore::new(&store));
        assert_eq!(seq.offer(b), None);
        assert_eq!(seq.phase(), &RevealPhase::Idle);
    }

    #[test]
    fn newer_broadcast_queues_behind_in_flight_reveal() {
        let mut seq = sequencer();
        let first = broadcast("first");
        let second = broadcast("second");

        seq.offer(first.clone());
        assert_eq!(seq.offer(second.clone()), None);
        // First reveal runs to completion untouched.
        assert_eq!(seq.advance(), Some(MESSAGE_DURATION_MS));
        assert_eq!(seq.phase(), &RevealPhase::Message(first));

        // Message expiry promotes the parked broadcast into a fresh alert phase.
        assert_eq!(seq.advance(), Some(ALERT_DURATION_MS));
        assert_eq!(seq.phase(), &RevealPhase::Alert(second.clone()));
        assert_eq!(seq.advance(), Some(MESSAGE_DURATION_MS));
        assert_eq!(seq.phase(), &RevealPhase::Message(second));
        assert_eq!(seq.advance(), None);
    }

    #[test]
    fn timing_is_priority_independent() {
        for priority in [Priority::Low, Priority::Normal, Priority::Critical] {
            let mut seq = sequencer();
            let b = Broadcast::new("t", "m", priority);
            assert_eq!(seq.offer(b), Some(ALERT_DURATION_MS));
            assert_eq!(seq.advance(), Some(MESSAGE_DURATION_MS));
        }
    }
}
