//! Inline dismissable broadcast banner.

use dioxus::prelude::*;
use vault_core::interrupt::{BANNER_DISMISSED_KEY, DedupStore};
use vault_core::{Broadcast, VaultEvent};

use crate::storage::{ClientKv, client_store};
use crate::timers::{POLL_RETRY_MS, sleep_ms};

/// Persistent strip under the navbar showing the latest active broadcast.
///
/// Unlike the full-screen takeover, the banner stays up until the viewer
/// dismisses it. The dismissal is recorded per broadcast id in its own
/// client-side ledger, so a dismissed banner stays gone across reloads
/// while a newer broadcast brings it back.
#[component]
pub fn BroadcastBanner() -> Element {
    let mut latest = use_signal(|| None::<Broadcast>);
    let mut refresh = use_signal(|| 0u32);

    let _feed = use_coroutine(move |_rx: UnboundedReceiver<()>| async move {
        match api::latest_broadcast().await {
            Ok(b) => latest.set(b),
            Err(e) => tracing::warn!("Failed to fetch latest broadcast: {}", e),
        }

        let mut after_seq = 0u64;
        loop {
            match api::next_event(after_seq).await {
                Ok(Some(envelope)) => {
                    after_seq = envelope.seq;
                    if let VaultEvent::BroadcastSent { .. } = envelope.event {
                        match api::latest_broadcast().await {
                            Ok(b) => latest.set(b),
                            Err(e) => {
                                tracing::warn!("Failed to fetch latest broadcast: {}", e)
                            }
                        }
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!("Event poll failed: {}", e);
                    sleep_ms(POLL_RETRY_MS).await;
                }
            }
        }
    });

    // The refresh counter re-runs this check after a dismissal.
    let _ = refresh();
    let Some(b) = latest() else {
        return rsx! {};
    };
    if !dismissal_ledger().should_show(b.id) {
        return rsx! {};
    }

    let id = b.id;
    let dismiss = move |_| {
        dismissal_ledger().mark_shown(id);
        refresh += 1;
    };

    let style = b.priority.style();
    rsx! {
        div { class: "broadcast-banner {style.css_class}",
            span { class: "broadcast-banner-icon", "{style.icon}" }
            div { class: "broadcast-banner-text",
                strong { "{b.title}" }
                span { " — {b.message}" }
            }
            button {
                class: "broadcast-banner-dismiss",
                onclick: dismiss,
                "✕"
            }
        }
    }
}

fn dismissal_ledger() -> DedupStore<ClientKv> {
    DedupStore::with_key(client_store(), BANNER_DISMISSED_KEY)
}
