//! Broadcast composer and recent-broadcast list.

use dioxus::prelude::*;
use vault_core::Broadcast;

/// Form for sending a broadcast to every connected client, with the most
/// recent sends listed underneath.
#[component]
pub fn BroadcastForm() -> Element {
    let mut title = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut priority = use_signal(|| "normal".to_string());
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);
    let mut refresh = use_signal(|| 0u32);

    let mut recent = use_signal(Vec::<Broadcast>::new);
    let _loader = use_resource(move || async move {
        let _ = refresh();
        match api::list_broadcasts(Some(10)).await {
            Ok(list) => recent.set(list),
            Err(e) => tracing::warn!("Failed to list broadcasts: {}", e),
        }
    });

    let submit = move |_| {
        let title_val = title();
        let message_val = message();
        let priority_val = priority();

        spawn(async move {
            submitting.set(true);
            error.set(None);

            match api::send_broadcast(title_val, message_val, priority_val).await {
                Ok(_) => {
                    title.set(String::new());
                    message.set(String::new());
                    refresh += 1;
                }
                Err(e) => error.set(Some(format!("Failed to send broadcast: {}", e))),
            }

            submitting.set(false);
        });
    };

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "Send Broadcast" }
            }
            div { class: "card-body",
                if let Some(err) = error() {
                    div { class: "error-message", "{err}" }
                }

                div { class: "form-group",
                    label { "Title" }
                    input {
                        value: "{title}",
                        oninput: move |e| title.set(e.value()),
                    }
                }

                div { class: "form-group",
                    label { "Message" }
                    textarea {
                        rows: 4,
                        value: "{message}",
                        oninput: move |e| message.set(e.value()),
                    }
                }

                div { class: "form-group",
                    label { "Priority" }
                    select {
                        value: "{priority}",
                        onchange: move |e| priority.set(e.value()),

                        option { value: "low", "Low" }
                        option { value: "normal", "Normal" }
                        option { value: "critical", "Critical" }
                    }
                }

                div { class: "form-actions",
                    button {
                        class: "btn btn-primary",
                        disabled: submitting(),
                        onclick: submit,
                        if submitting() { "Sending..." } else { "Send to All Users" }
                    }
                }

                if !recent().is_empty() {
                    h3 { class: "card-subtitle", "Recent Broadcasts" }
                    ul { class: "broadcast-history",
                        for b in recent() {
                            {
                                let tag_class = b.priority.style().css_class;
                                let sent = b.created_at.format("%Y-%m-%d %H:%M UTC").to_string();
                                rsx! {
                                    li { key: "{b.id}",
                                        span { class: "priority-tag {tag_class}", "{b.priority}" }
                                        strong { "{b.title}" }
                                        span { class: "muted tabular-nums", " · {sent}" }
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
