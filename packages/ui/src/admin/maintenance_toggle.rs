//! Maintenance kill-switch.

use dioxus::prelude::*;
use vault_core::MaintenanceStatus;

/// Toggle maintenance mode for every connected client. The admin stays
/// exempt from the block, so the switch can always be flipped back.
#[component]
pub fn MaintenanceToggle() -> Element {
    let mut status = use_signal(|| None::<MaintenanceStatus>);
    let mut message = use_signal(|| "UNDER MAINTENANCE".to_string());
    let mut downtime = use_signal(|| "30 minutes".to_string());
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let _loader = use_resource(move || async move {
        match api::maintenance_status().await {
            Ok(s) => {
                message.set(s.message.clone());
                downtime.set(s.expected_downtime.clone());
                status.set(Some(s));
            }
            Err(e) => tracing::warn!("Failed to fetch maintenance status: {}", e),
        }
    });

    let active = status().is_some_and(|s| s.is_active);

    let toggle = move |_| {
        let message_val = message();
        let downtime_val = downtime();
        spawn(async move {
            busy.set(true);
            error.set(None);
            match api::set_maintenance(!active, message_val, downtime_val).await {
                Ok(s) => status.set(Some(s)),
                Err(e) => error.set(Some(format!("Failed to toggle maintenance: {}", e))),
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "Maintenance Mode" }
                span {
                    class: if active { "status-badge status-declined" } else { "status-badge status-approved" },
                    if active { "ACTIVE" } else { "OFF" }
                }
            }
            div { class: "card-body",
                if let Some(err) = error() {
                    div { class: "error-message", "{err}" }
                }

                div { class: "form-group",
                    label { "Overlay Message" }
                    input {
                        value: "{message}",
                        oninput: move |e| message.set(e.value()),
                    }
                }

                div { class: "form-group",
                    label { "Expected Downtime" }
                    input {
                        value: "{downtime}",
                        oninput: move |e| downtime.set(e.value()),
                    }
                }

                div { class: "form-actions",
                    button {
                        class: if active { "btn btn-approve" } else { "btn btn-decline" },
                        disabled: busy() || status().is_none(),
                        onclick: toggle,
                        if active { "Disable Maintenance" } else { "Enable Maintenance" }
                    }
                }
            }
        }
    }
}
