//! Coin vault page: balance plus pending loot boxes.

use dioxus::prelude::*;

use crate::session::use_session;
use crate::timers::sleep_ms;

/// Milliseconds the crate "shakes" before its contents are revealed.
const OPEN_SUSPENSE_MS: u64 = 1_500;

/// The user's vault: coin balance and every loot box waiting to be opened.
///
/// Coins are credited server-side before the animation finishes; the
/// suspense delay is purely cosmetic.
#[component]
pub fn VaultPage() -> Element {
    let session = use_session();
    let viewer = session.viewer;

    let mut wallet = use_signal(|| None::<api::Wallet>);
    let mut pending = use_signal(Vec::<api::LootBox>::new);
    let mut opening = use_signal(|| None::<api::LootBoxId>);
    let mut opened = use_signal(|| None::<api::OpenLootResult>);
    let mut error = use_signal(|| None::<String>);
    let mut refresh = use_signal(|| 0u32);

    let _loader = use_resource(move || async move {
        let _ = refresh();
        let Some(email) = viewer.read().as_ref().map(|v| v.email.clone()) else {
            wallet.set(None);
            pending.set(Vec::new());
            return;
        };
        match api::get_wallet(email.clone()).await {
            Ok(w) => wallet.set(Some(w)),
            Err(e) => tracing::warn!("Failed to load wallet: {}", e),
        }
        match api::pending_loot(email).await {
            Ok(boxes) => pending.set(boxes),
            Err(e) => tracing::warn!("Failed to load loot boxes: {}", e),
        }
    });

    rsx! {
        div { class: "vault-page",
            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Coin Vault" }
                    if let Some(w) = wallet() {
                        span { class: "coin-balance", "🪙 {w.coins}" }
                    }
                }
                div { class: "card-body",
                    if let Some(err) = error() {
                        div { class: "error-message", "{err}" }
                    }

                    if let Some(result) = opened() {
                        {
                            let icon = result.loot_box.rarity.icon();
                            rsx! {
                                div { class: "success-message loot-result",
                                    "{icon} {result.loot_box.name} opened! "
                                    "+{result.loot_box.coins} coins · balance {result.wallet.coins}"
                                }
                            }
                        }
                    }

                    if pending().is_empty() {
                        p { class: "muted", "No loot boxes waiting. Check back later!" }
                    }

                    div { class: "loot-grid",
                        for lootbox in pending() {
                            {
                                let id = lootbox.id;
                                let is_opening = opening() == Some(id);
                                let rarity_class = lootbox.rarity.css_class();
                                let rarity_icon = lootbox.rarity.icon();
                                let open = move |_| {
                                    let Some(email) =
                                        viewer.peek().as_ref().map(|v| v.email.clone())
                                    else {
                                        return;
                                    };
                                    spawn(async move {
                                        opening.set(Some(id));
                                        opened.set(None);
                                        error.set(None);

                                        match api::open_loot_box(email, id.to_string()).await {
                                            Ok(result) => {
                                                sleep_ms(OPEN_SUSPENSE_MS).await;
                                                wallet.set(Some(result.wallet.clone()));
                                                opened.set(Some(result));
                                                refresh += 1;
                                            }
                                            Err(e) => {
                                                error.set(Some(format!("{}", e)));
                                            }
                                        }

                                        opening.set(None);
                                    });
                                };
                                rsx! {
                                    div {
                                        key: "{id}",
                                        class: if is_opening {
                                            "loot-card {rarity_class} opening"
                                        } else {
                                            "loot-card {rarity_class}"
                                        },
                                        span { class: "loot-icon", "{rarity_icon}" }
                                        h3 { "{lootbox.name}" }
                                        p { class: "muted", "{lootbox.description}" }
                                        if !lootbox.contents.is_empty() {
                                            ul { class: "loot-contents",
                                                for item in lootbox.contents.iter() {
                                                    li { "{item}" }
                                                }
                                            }
                                        }
                                        button {
                                            class: "btn btn-primary",
                                            disabled: opening().is_some(),
                                            onclick: open,
                                            if is_opening { "Opening..." } else { "Open" }
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
}
