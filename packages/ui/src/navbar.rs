//! Shared top navigation bar.

use dioxus::prelude::*;

use crate::session::use_session;

/// Navigation bar with the site brand, caller-supplied links, and the
/// current session.
#[component]
pub fn Navbar(children: Element) -> Element {
    let mut session = use_session();
    let viewer = session.viewer.read().clone();

    rsx! {
        header { class: "navbar",
            div { class: "navbar-brand", "VaultFUT" }
            nav { class: "navbar-links", {children} }
            div { class: "navbar-session",
                if let Some(v) = viewer {
                    if v.is_admin {
                        span { class: "navbar-admin-badge", "ADMIN" }
                    }
                    span { class: "navbar-email", "{v.email}" }
                    button {
                        class: "btn btn-secondary btn-small",
                        onclick: move |_| session.sign_out(),
                        "Sign Out"
                    }
                } else {
                    span { class: "navbar-email muted", "Not signed in" }
                }
            }
        }
    }
}
