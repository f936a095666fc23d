//! Manual coin grant form.

use dioxus::prelude::*;

/// Credit coins to any user's wallet by email.
#[component]
pub fn GrantForm() -> Element {
    let mut email = use_signal(String::new);
    let mut amount = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut confirmation = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let submit = move |_| {
        let email_val = email();
        let amount_val = match amount().trim().parse::<i64>() {
            Ok(a) if a > 0 => a,
            _ => {
                error.set(Some("Amount must be a positive number".to_string()));
                return;
            }
        };

        spawn(async move {
            busy.set(true);
            error.set(None);
            confirmation.set(None);

            match api::grant_coins(email_val, amount_val).await {
                Ok(wallet) => {
                    confirmation.set(Some(format!(
                        "Granted {} coins to {}. New balance: {}",
                        amount_val, wallet.email, wallet.coins
                    )));
                    amount.set(String::new());
                }
                Err(e) => error.set(Some(format!("Failed to grant coins: {}", e))),
            }

            busy.set(false);
        });
    };

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "Grant Coins" }
            }
            div { class: "card-body",
                if let Some(err) = error() {
                    div { class: "error-message", "{err}" }
                }
                if let Some(msg) = confirmation() {
                    div { class: "success-message", "{msg}" }
                }

                div { class: "form-row",
                    div { class: "form-group",
                        label { "User Email" }
                        input {
                            r#type: "email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { "Amount" }
                        input {
                            r#type: "number",
                            min: "1",
                            value: "{amount}",
                            oninput: move |e| amount.set(e.value()),
                        }
                    }
                }

                div { class: "form-actions",
                    button {
                        class: "btn btn-primary",
                        disabled: busy(),
                        onclick: submit,
                        if busy() { "Granting..." } else { "Grant" }
                    }
                }
            }
        }
    }
}
