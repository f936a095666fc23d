//! Full-screen broadcast reveal overlay.

use dioxus::prelude::*;
use vault_core::interrupt::{DedupStore, RevealPhase, RevealSequencer};
use vault_core::{Broadcast, VaultEvent};

use crate::storage::{ClientKv, client_store};
use crate::timers::{POLL_RETRY_MS, sleep_ms};

type Sequencer = RevealSequencer<ClientKv>;

/// Mounts above the router and takes over the screen whenever an unseen
/// active broadcast arrives: a priority-colored attention banner, then the
/// message body with a depleting progress bar.
///
/// The takeover has no dismiss control; both phases run out their timers.
/// The sequencer owns the phase logic, and this component owns the single
/// timer task driving it.
#[component]
pub fn FullScreenBroadcast() -> Element {
    let sequencer = use_signal(|| Sequencer::new(DedupStore::new(client_store())));
    let phase = use_signal(|| RevealPhase::Idle);

    let _feed = use_coroutine(move |_rx: UnboundedReceiver<()>| async move {
        // A broadcast sent while this client was offline is still due a
        // reveal; the dedup ledger decides, not the event stream.
        match api::latest_broadcast().await {
            Ok(Some(b)) => offer(sequencer, phase, b),
            Ok(None) => {}
            Err(e) => tracing::warn!("Failed to fetch latest broadcast: {}", e),
        }

        let mut after_seq = 0u64;
        loop {
            match api::next_event(after_seq).await {
                Ok(Some(envelope)) => {
                    after_seq = envelope.seq;
                    if let VaultEvent::BroadcastSent { .. } = envelope.event {
                        // Re-fetch rather than trusting the event payload:
                        // the latest active row is authoritative.
                        match api::latest_broadcast().await {
                            Ok(Some(b)) => offer(sequencer, phase, b),
                            Ok(None) => {}
                            Err(e) => {
                                tracing::warn!("Failed to fetch latest broadcast: {}", e)
                            }
                        }
                    }
                }
                Ok(None) => {} // quiet poll window, re-poll immediately
                Err(e) => {
                    tracing::warn!("Event poll failed: {}", e);
                    sleep_ms(POLL_RETRY_MS).await;
                }
            }
        }
    });

    match phase() {
        RevealPhase::Idle => rsx! {},
        RevealPhase::Alert(b) => {
            let style = b.priority.style();
            rsx! {
                div { class: "broadcast-overlay {style.css_class}",
                    div { class: "broadcast-alert",
                        span { class: "broadcast-alert-icon", "{style.icon}" }
                        h1 { class: "broadcast-alert-label", "{style.label}" }
                    }
                }
            }
        }
        RevealPhase::Message(b) => {
            let style = b.priority.style();
            rsx! {
                div { class: "broadcast-overlay {style.css_class}",
                    div { class: "broadcast-card",
                        div { class: "broadcast-card-header",
                            span { class: "broadcast-alert-icon", "{style.icon}" }
                            h2 { class: "broadcast-title", "{b.title}" }
                        }
                        p { class: "broadcast-message", "{b.message}" }
                        div { class: "broadcast-progress-track",
                            div { class: "broadcast-progress-fill" }
                        }
                    }
                }
            }
        }
    }
}

/// Feed a freshly fetched broadcast into the sequencer, starting the timer
/// task when a reveal begins.
fn offer(mut sequencer: Signal<Sequencer>, phase: Signal<RevealPhase>, broadcast: Broadcast) {
    let delay = sequencer.write().offer(broadcast);
    sync_phase(sequencer, phase);
    if let Some(ms) = delay {
        schedule(sequencer, phase, ms);
    }
}

/// Single timer task: sleeps out each phase and advances the sequencer
/// until it goes idle. At most one task runs, because `offer` only returns
/// a delay when the machine leaves `Idle`.
fn schedule(mut sequencer: Signal<Sequencer>, phase: Signal<RevealPhase>, first_delay_ms: u64) {
    spawn(async move {
        let mut delay = first_delay_ms;
        loop {
            sleep_ms(delay).await;
            let next = sequencer.write().advance();
            sync_phase(sequencer, phase);
            match next {
                Some(ms) => delay = ms,
                None => return,
            }
        }
    });
}

fn sync_phase(sequencer: Signal<Sequencer>, mut phase: Signal<RevealPhase>) {
    phase.set(sequencer.peek().phase().clone());
}
