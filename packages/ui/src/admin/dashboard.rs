//! Admin dashboard page.

use dioxus::prelude::*;

use crate::admin::{
    BroadcastForm, GrantForm, LootForm, MaintenanceToggle, MessageForm, OrderList, ThemeSwitcher,
};
use crate::session::use_session;

/// The whole admin control surface. Non-admin viewers get a notice instead;
/// every action here is also validated server-side.
#[component]
pub fn AdminDashboardPage() -> Element {
    let session = use_session();
    let is_admin = session.viewer.read().as_ref().is_some_and(|v| v.is_admin);

    if !is_admin {
        return rsx! {
            div { class: "card",
                div { class: "card-body",
                    p { class: "muted", "Admin access required." }
                }
            }
        };
    }

    rsx! {
        div { class: "admin-grid",
            BroadcastForm {}
            MaintenanceToggle {}
            GrantForm {}
            LootForm {}
            MessageForm {}
            ThemeSwitcher {}
            OrderList {}
        }
    }
}
