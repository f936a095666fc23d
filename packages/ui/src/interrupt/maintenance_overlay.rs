//! Blocking maintenance overlay.

use dioxus::prelude::*;
use vault_core::interrupt::MaintenanceGate;
use vault_core::{MaintenanceStatus, VaultEvent};

use crate::session::use_session;
use crate::timers::{POLL_RETRY_MS, sleep_ms};

/// Covers the whole app for non-admin viewers while maintenance is active.
///
/// The component holds only the latest fetched row; blocking is decided by
/// [`MaintenanceGate`] at render time, so a viewer change (sign-in as
/// admin) lifts the block without another fetch. Fetch failures keep the
/// previous row, and the next event or retry corrects it.
#[component]
pub fn MaintenanceOverlay() -> Element {
    let session = use_session();
    let mut status = use_signal(|| None::<MaintenanceStatus>);

    let _feed = use_coroutine(move |_rx: UnboundedReceiver<()>| async move {
        match api::maintenance_status().await {
            Ok(s) => status.set(Some(s)),
            Err(e) => tracing::warn!("Failed to fetch maintenance status: {}", e),
        }

        let mut after_seq = 0u64;
        loop {
            match api::next_event(after_seq).await {
                Ok(Some(envelope)) => {
                    after_seq = envelope.seq;
                    if let VaultEvent::MaintenanceChanged { .. } = envelope.event {
                        // The event only says "changed"; re-fetch so the
                        // latest read wins regardless of delivery order.
                        match api::maintenance_status().await {
                            Ok(s) => status.set(Some(s)),
                            Err(e) => {
                                tracing::warn!("Failed to fetch maintenance status: {}", e)
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

    let mut gate = MaintenanceGate::new();
    gate.set_status(status());
    gate.set_viewer(session.viewer.read().clone());

    if !gate.is_blocking() {
        return rsx! {};
    }

    let current = gate.status().cloned().unwrap_or_default();
    rsx! {
        div { class: "maintenance-overlay",
            div { class: "maintenance-card",
                span { class: "maintenance-icon", "🔧" }
                h1 { class: "maintenance-title", "{current.message}" }
                p { class: "maintenance-detail",
                    "We'll be back shortly. Expected downtime: {current.expected_downtime}"
                }
            }
        }
    }
}
