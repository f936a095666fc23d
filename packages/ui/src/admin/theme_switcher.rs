//! Site theme switcher.

use dioxus::prelude::*;
use vault_core::Theme;

/// Grid of the seasonal themes with the active one highlighted. Switching
/// publishes a change event, so every connected client restyles at once.
#[component]
pub fn ThemeSwitcher() -> Element {
    let mut active = use_signal(|| None::<Theme>);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let _loader = use_resource(move || async move {
        match api::site_theme().await {
            Ok(theme) => active.set(Some(theme)),
            Err(e) => tracing::warn!("Failed to load theme: {}", e),
        }
    });

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "Site Theme" }
            }
            div { class: "card-body",
                if let Some(err) = error() {
                    div { class: "error-message", "{err}" }
                }

                div { class: "theme-grid",
                    for theme in Theme::ALL {
                        {
                            let is_active = active() == Some(theme);
                            let key = theme.as_str();
                            let icon = theme.icon();
                            let name = theme.name();
                            let blurb = theme.description();
                            let switch = move |_| {
                                spawn(async move {
                                    busy.set(true);
                                    error.set(None);
                                    match api::set_theme(theme.as_str().to_string()).await {
                                        Ok(applied) => active.set(Some(applied)),
                                        Err(e) => {
                                            error.set(Some(format!(
                                                "Failed to switch theme: {}",
                                                e
                                            )))
                                        }
                                    }
                                    busy.set(false);
                                });
                            };
                            rsx! {
                                button {
                                    key: "{key}",
                                    class: if is_active {
                                        "theme-option active"
                                    } else {
                                        "theme-option"
                                    },
                                    disabled: busy() || is_active,
                                    onclick: switch,
                                    span { class: "theme-icon", "{icon}" }
                                    strong { "{name}" }
                                    p { class: "muted", "{blurb}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
