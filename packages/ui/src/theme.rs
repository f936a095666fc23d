//! Site theme subscription.

use dioxus::prelude::*;
use vault_core::{Theme, VaultEvent};

use crate::timers::{POLL_RETRY_MS, sleep_ms};

/// Subscribe to the site-wide theme.
///
/// Fetches the active theme on mount and follows change events, so an admin
/// switch restyles this client without a reload. Starts on the default theme
/// until the first fetch lands.
pub fn use_site_theme() -> Signal<Theme> {
    let mut theme = use_signal(Theme::default);

    use_coroutine(move |_rx: UnboundedReceiver<()>| async move {
        match api::site_theme().await {
            Ok(t) => theme.set(t),
            Err(e) => tracing::warn!("Failed to load theme: {}", e),
        }

        let mut after_seq = 0u64;
        loop {
            match api::next_event(after_seq).await {
                Ok(Some(envelope)) => {
                    after_seq = envelope.seq;
                    if let VaultEvent::ThemeChanged { theme: switched, .. } = envelope.event {
                        theme.set(switched);
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

    theme
}
