//! Achievement badges page.

use dioxus::prelude::*;

use crate::session::use_session;

/// Badge grid with progress bars and reward-claim buttons.
///
/// Progress is computed server-side from the wallet's lifetime counters;
/// this panel only renders it and fires the one-time claim.
#[component]
pub fn AchievementsPanel() -> Element {
    let session = use_session();
    let viewer = session.viewer;

    let mut statuses = use_signal(Vec::<api::AchievementStatus>::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);
    let mut refresh = use_signal(|| 0u32);

    let _loader = use_resource(move || async move {
        let _ = refresh();
        let Some(email) = viewer.read().as_ref().map(|v| v.email.clone()) else {
            statuses.set(Vec::new());
            return;
        };
        match api::list_achievements(email).await {
            Ok(list) => statuses.set(list),
            Err(e) => tracing::warn!("Failed to load achievements: {}", e),
        }
    });

    let unlocked = statuses().iter().filter(|s| s.achievement.completed).count();
    let total = statuses().len();

    rsx! {
        div { class: "card achievements-card",
            div { class: "card-header",
                h2 { class: "card-title", "Achievements" }
                span { class: "muted", "{unlocked} / {total} unlocked" }
            }
            div { class: "card-body",
                if let Some(err) = error() {
                    div { class: "error-message", "{err}" }
                }

                div { class: "achievement-grid",
                    for status in statuses() {
                        {
                            let a = &status.achievement;
                            let kind = a.kind;
                            let rarity_class = a.rarity.css_class();
                            let icon = kind.icon();
                            let name = kind.name();
                            let blurb = kind.description();
                            let key = kind.as_str();
                            let ready = a.completed && !status.claimed;
                            let claim = move |_| {
                                let Some(email) =
                                    viewer.peek().as_ref().map(|v| v.email.clone())
                                else {
                                    return;
                                };
                                spawn(async move {
                                    busy.set(true);
                                    error.set(None);
                                    match api::claim_achievement(
                                        email,
                                        kind.as_str().to_string(),
                                    )
                                    .await
                                    {
                                        Ok(_) => refresh += 1,
                                        Err(e) => error.set(Some(format!("{}", e))),
                                    }
                                    busy.set(false);
                                });
                            };
                            rsx! {
                                div {
                                    key: "{key}",
                                    class: if a.completed {
                                        "achievement-card {rarity_class} completed"
                                    } else {
                                        "achievement-card {rarity_class}"
                                    },
                                    span { class: "achievement-icon", "{icon}" }
                                    h3 { "{name}" }
                                    p { class: "muted", "{blurb}" }
                                    div { class: "achievement-progress",
                                        progress { max: "{a.goal}", value: "{a.progress}" }
                                        span { class: "tabular-nums", "{a.progress} / {a.goal}" }
                                    }
                                    if status.claimed {
                                        span { class: "achievement-claimed", "Reward claimed" }
                                    } else {
                                        button {
                                            class: "btn btn-primary btn-small",
                                            disabled: busy() || !ready,
                                            onclick: claim,
                                            "Claim {a.reward} 🪙"
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
