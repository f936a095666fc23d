//! Wallet balance and free reward actions.

use chrono::Utc;
use dioxus::prelude::*;
use vault_core::{AD_REWARD_COINS, DAILY_REWARD_COINS, Wallet};

use crate::session::use_session;

/// Home page panel: current balance, the daily claim, and the ad reward.
#[component]
pub fn RewardsPanel() -> Element {
    let session = use_session();
    let mut wallet = use_signal(|| None::<Wallet>);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let viewer = session.viewer;
    let _loader = use_resource(move || async move {
        let email = match viewer.read().as_ref() {
            Some(v) => v.email.clone(),
            None => {
                wallet.set(None);
                return;
            }
        };
        match api::get_wallet(email).await {
            Ok(w) => wallet.set(Some(w)),
            Err(e) => tracing::warn!("Failed to load wallet: {}", e),
        }
    });

    let claim_daily = move |_| {
        let Some(email) = viewer.peek().as_ref().map(|v| v.email.clone()) else {
            return;
        };
        spawn(async move {
            busy.set(true);
            error.set(None);
            match api::claim_daily(email).await {
                Ok(w) => wallet.set(Some(w)),
                Err(e) => error.set(Some(format!("{}", e))),
            }
            busy.set(false);
        });
    };

    let watch_ad = move |_| {
        let Some(email) = viewer.peek().as_ref().map(|v| v.email.clone()) else {
            return;
        };
        spawn(async move {
            busy.set(true);
            error.set(None);
            match api::watch_ad(email).await {
                Ok(w) => wallet.set(Some(w)),
                Err(e) => error.set(Some(format!("{}", e))),
            }
            busy.set(false);
        });
    };

    let Some(w) = wallet() else {
        return rsx! {
            div { class: "card",
                div { class: "card-body loading", "Loading wallet..." }
            }
        };
    };

    let daily_ready = w.can_claim_daily(Utc::now());
    let ads_today = w.ads_today(Utc::now());

    rsx! {
        div { class: "card rewards-card",
            div { class: "card-header",
                h2 { class: "card-title", "Your Vault" }
                span { class: "coin-balance", "🪙 {w.coins}" }
            }
            div { class: "card-body",
                if let Some(err) = error() {
                    div { class: "error-message", "{err}" }
                }

                div { class: "reward-row",
                    div { class: "reward-info",
                        h3 { "Daily Reward" }
                        p { class: "muted", "{DAILY_REWARD_COINS} coins, once per day" }
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: busy() || !daily_ready,
                        onclick: claim_daily,
                        if daily_ready { "Claim" } else { "Claimed today" }
                    }
                }

                div { class: "reward-row",
                    div { class: "reward-info",
                        h3 { "Watch an Ad" }
                        p { class: "muted",
                            "{AD_REWARD_COINS} coins per ad · {ads_today} watched today"
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: busy(),
                        onclick: watch_ad,
                        "Watch"
                    }
                }
            }
        }
    }
}
