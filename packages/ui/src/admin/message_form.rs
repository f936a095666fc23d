//! Dashboard message composer.

use dioxus::prelude::*;

/// Form for posting a dashboard message to every user.
#[component]
pub fn MessageForm() -> Element {
    let mut kind = use_signal(|| "system".to_string());
    let mut title = use_signal(String::new);
    let mut body = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let submit = move |_| {
        let kind_val = kind();
        let title_val = title();
        let body_val = body();

        spawn(async move {
            submitting.set(true);
            error.set(None);

            match api::post_message(kind_val, title_val, body_val).await {
                Ok(_) => {
                    title.set(String::new());
                    body.set(String::new());
                }
                Err(e) => error.set(Some(format!("Failed to post message: {}", e))),
            }

            submitting.set(false);
        });
    };

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "Post Message" }
            }
            div { class: "card-body",
                if let Some(err) = error() {
                    div { class: "error-message", "{err}" }
                }

                div { class: "form-group",
                    label { "Type" }
                    select {
                        value: "{kind}",
                        onchange: move |e| kind.set(e.value()),

                        option { value: "event", "🎁 Event" }
                        option { value: "system", "🔔 System" }
                        option { value: "broadcast", "📣 Broadcast" }
                        option { value: "warning", "⚠️ Warning" }
                    }
                }

                div { class: "form-group",
                    label { "Title" }
                    input {
                        value: "{title}",
                        oninput: move |e| title.set(e.value()),
                    }
                }

                div { class: "form-group",
                    label { "Body" }
                    textarea {
                        rows: 3,
                        value: "{body}",
                        oninput: move |e| body.set(e.value()),
                    }
                }

                div { class: "form-actions",
                    button {
                        class: "btn btn-primary",
                        disabled: submitting(),
                        onclick: submit,
                        if submitting() { "Posting..." } else { "Post to Dashboard" }
                    }
                }
            }
        }
    }
}
