//! Interrupt broadcasting core.
//!
//! The mechanism by which an admin action preempts every connected client's
//! screen: a change-feed event arrives, the client re-fetches the latest
//! authoritative row, a client-local dedup ledger decides whether to reveal,
//! and a timed two-phase state machine drives the full-screen takeover.
//!
//! Everything here is pure state-machine logic with injected dependencies;
//! transports and timers belong to the hosting UI.

mod dedup;
mod gate;
mod sequencer;

pub use dedup::{BANNER_DISMISSED_KEY, DedupStore, KvStore, LAST_BROADCAST_KEY, MemoryKv};
pub use gate::MaintenanceGate;
pub use sequencer::{ALERT_DURATION_MS, MESSAGE_DURATION_MS, RevealPhase, RevealSequencer};
