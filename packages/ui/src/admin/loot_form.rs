//! Loot drop composer.

use dioxus::prelude::*;

/// Form for dropping a loot box to one user or to everyone.
#[component]
pub fn LootForm() -> Element {
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut rarity = use_signal(|| "common".to_string());
    let mut coins = use_signal(|| "100".to_string());
    let mut contents = use_signal(String::new);
    let mut recipient = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut sent = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let submit = move |_| {
        let name_val = name();
        let description_val = description();
        let rarity_val = rarity();
        let contents_val = contents();
        let recipient_val = recipient();

        let Ok(coins_val) = coins().trim().parse::<i64>() else {
            error.set(Some("Coin amount must be a number".to_string()));
            return;
        };

        spawn(async move {
            submitting.set(true);
            error.set(None);
            sent.set(None);

            let target = if recipient_val.trim().is_empty() {
                None
            } else {
                Some(recipient_val)
            };

            match api::create_loot_box(
                name_val,
                description_val,
                rarity_val,
                coins_val,
                contents_val,
                target,
            )
            .await
            {
                Ok(lootbox) => {
                    let to = lootbox.recipient.clone().unwrap_or_else(|| "all users".to_string());
                    sent.set(Some(format!("{} sent to {}", lootbox.name, to)));
                    name.set(String::new());
                    description.set(String::new());
                    contents.set(String::new());
                    recipient.set(String::new());
                }
                Err(e) => error.set(Some(format!("Failed to send loot box: {}", e))),
            }

            submitting.set(false);
        });
    };

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "Drop Loot Box" }
            }
            div { class: "card-body",
                if let Some(err) = error() {
                    div { class: "error-message", "{err}" }
                }
                if let Some(msg) = sent() {
                    div { class: "success-message", "{msg}" }
                }

                div { class: "form-group",
                    label { "Name" }
                    input {
                        value: "{name}",
                        placeholder: "Weekend Bonus Crate",
                        oninput: move |e| name.set(e.value()),
                    }
                }

                div { class: "form-group",
                    label { "Description" }
                    textarea {
                        rows: 2,
                        value: "{description}",
                        oninput: move |e| description.set(e.value()),
                    }
                }

                div { class: "form-group",
                    label { "Rarity" }
                    select {
                        value: "{rarity}",
                        onchange: move |e| rarity.set(e.value()),

                        option { value: "common", "📦 Common" }
                        option { value: "rare", "💎 Rare" }
                        option { value: "epic", "⭐ Epic" }
                        option { value: "legendary", "👑 Legendary" }
                    }
                }

                div { class: "form-group",
                    label { "Coins" }
                    input {
                        r#type: "number",
                        min: 1,
                        value: "{coins}",
                        oninput: move |e| coins.set(e.value()),
                    }
                }

                div { class: "form-group",
                    label { "Contents (comma separated)" }
                    input {
                        value: "{contents}",
                        placeholder: "500 coins, Mystery badge",
                        oninput: move |e| contents.set(e.value()),
                    }
                }

                div { class: "form-group",
                    label { "Recipient (empty sends to everyone)" }
                    input {
                        value: "{recipient}",
                        placeholder: "user@example.com",
                        oninput: move |e| recipient.set(e.value()),
                    }
                }

                div { class: "form-actions",
                    button {
                        class: "btn btn-primary",
                        disabled: submitting(),
                        onclick: submit,
                        if submitting() { "Sending..." } else { "Drop It" }
                    }
                }
            }
        }
    }
}
