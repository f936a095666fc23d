//! Prize wheel page.

use dioxus::prelude::*;

use crate::session::use_session;
use crate::timers::sleep_ms;

/// Milliseconds the wheel "spins" before the result is revealed.
const SPIN_SUSPENSE_MS: u64 = 1_200;

/// Spin-the-wheel page. The prize is drawn server-side and credited before
/// the animation finishes; the suspense delay is purely cosmetic.
#[component]
pub fn WheelPage() -> Element {
    let session = use_session();
    let viewer = session.viewer;

    let mut spinning = use_signal(|| false);
    let mut result = use_signal(|| None::<api::SpinResult>);
    let mut error = use_signal(|| None::<String>);

    let spin = move |_| {
        let Some(email) = viewer.peek().as_ref().map(|v| v.email.clone()) else {
            error.set(Some("Sign in to spin the wheel".to_string()));
            return;
        };
        spawn(async move {
            spinning.set(true);
            result.set(None);
            error.set(None);

            match api::spin_wheel(email).await {
                Ok(outcome) => {
                    sleep_ms(SPIN_SUSPENSE_MS).await;
                    result.set(Some(outcome));
                }
                Err(e) => error.set(Some(format!("Spin failed: {}", e))),
            }

            spinning.set(false);
        });
    };

    rsx! {
        div { class: "card wheel-card",
            div { class: "card-header",
                h2 { class: "card-title", "Prize Wheel" }
            }
            div { class: "card-body",
                if let Some(err) = error() {
                    div { class: "error-message", "{err}" }
                }

                div { class: if spinning() { "wheel spinning" } else { "wheel" }, "🎡" }

                if let Some(outcome) = result() {
                    div { class: "success-message wheel-result",
                        "You won {outcome.prize} coins! New balance: {outcome.wallet.coins}"
                    }
                }

                div { class: "form-actions",
                    button {
                        class: "btn btn-primary",
                        disabled: spinning(),
                        onclick: spin,
                        if spinning() { "Spinning..." } else { "Spin" }
                    }
                }
            }
        }
    }
}
