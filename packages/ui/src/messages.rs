//! Dashboard messages page.

use dioxus::prelude::*;
use vault_core::interrupt::KvStore;
use vault_core::{Message, MessageId, VaultEvent};

use crate::storage::client_store;
use crate::timers::{POLL_RETRY_MS, sleep_ms};

/// Storage key for the newest message id the viewer has read.
const LAST_READ_KEY: &str = "vaultfut.messages_last_read";

/// Message list with per-client "New" badges.
///
/// Messages are global; read state is not. Each client remembers the newest
/// id it has read, and anything above that marker shows a badge until the
/// viewer marks the list read.
#[component]
pub fn MessagesPanel() -> Element {
    let mut messages = use_signal(Vec::<Message>::new);
    let mut refresh = use_signal(|| 0u32);

    let _feed = use_coroutine(move |_rx: UnboundedReceiver<()>| async move {
        match api::list_messages(Some(20)).await {
            Ok(list) => messages.set(list),
            Err(e) => tracing::warn!("Failed to load messages: {}", e),
        }

        let mut after_seq = 0u64;
        loop {
            match api::next_event(after_seq).await {
                Ok(Some(envelope)) => {
                    after_seq = envelope.seq;
                    if let VaultEvent::MessagePosted { .. } = envelope.event {
                        match api::list_messages(Some(20)).await {
                            Ok(list) => messages.set(list),
                            Err(e) => tracing::warn!("Failed to load messages: {}", e),
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

    // The refresh counter re-renders the badges after marking read.
    let _ = refresh();
    let marker = last_read();
    let unread = messages()
        .iter()
        .filter(|m| marker.is_none_or(|last| m.id > last))
        .count();

    let mark_all_read = move |_| {
        if let Some(newest) = messages.peek().iter().map(|m| m.id).max() {
            client_store().set(LAST_READ_KEY, &newest.to_string());
            refresh += 1;
        }
    };

    rsx! {
        div { class: "card messages-card",
            div { class: "card-header",
                h2 { class: "card-title", "Messages" }
                if unread > 0 {
                    button {
                        class: "btn btn-secondary btn-small",
                        onclick: mark_all_read,
                        "Mark all read ({unread})"
                    }
                }
            }
            div { class: "card-body",
                if messages().is_empty() {
                    p { class: "muted", "No messages yet." }
                }

                ul { class: "message-list",
                    for m in messages() {
                        {
                            let is_new = marker.is_none_or(|last| m.id > last);
                            let posted = m.created_at.format("%Y-%m-%d %H:%M UTC").to_string();
                            let kind_class = m.kind.css_class();
                            let icon = m.kind.icon();
                            rsx! {
                                li { key: "{m.id}", class: "message-item {kind_class}",
                                    span { class: "message-icon", "{icon}" }
                                    div { class: "message-text",
                                        div { class: "message-title",
                                            strong { "{m.title}" }
                                            if is_new {
                                                span { class: "message-new-badge", "New" }
                                            }
                                        }
                                        p { "{m.body}" }
                                        span { class: "muted tabular-nums", "{posted}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn last_read() -> Option<MessageId> {
    let raw = client_store().get(LAST_READ_KEY)?;
    MessageId::parse(&raw).ok()
}
