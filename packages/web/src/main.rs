// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

use dioxus::prelude::*;

use ui::admin::AdminDashboardPage;
use ui::{
    AchievementsPanel, BroadcastBanner, FullScreenBroadcast, MaintenanceOverlay, MessagesPanel,
    Navbar, SessionProvider, ShopPage, VaultPage, WheelPage, use_site_theme,
};
use views::Home;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/vault")]
        Vault {},
        #[route("/shop")]
        Shop {},
        #[route("/wheel")]
        Wheel {},
        #[route("/achievements")]
        Achievements {},
        #[route("/messages")]
        Messages {},
        #[route("/admin")]
        Admin {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Shared page shell: the interrupt overlays mount above every route, so a
/// broadcast reveal or the maintenance block covers whatever page is open.
/// The active theme class on the shell root restyles every page at once.
#[component]
fn Shell() -> Element {
    let theme = use_site_theme();
    let theme_class = theme().css_class();

    rsx! {
        div { class: "app-shell {theme_class}",
            FullScreenBroadcast {}
            MaintenanceOverlay {}

            Navbar {
                Link { to: Route::Home {}, "Home" }
                Link { to: Route::Vault {}, "Vault" }
                Link { to: Route::Shop {}, "Shop" }
                Link { to: Route::Wheel {}, "Wheel" }
                Link { to: Route::Achievements {}, "Achievements" }
                Link { to: Route::Messages {}, "Messages" }
                Link { to: Route::Admin {}, "Admin" }
            }

            BroadcastBanner {}

            main { class: "page-container",
                Outlet::<Route> {}
            }
        }
    }
}

/// Coin vault route.
#[component]
fn Vault() -> Element {
    rsx! {
        VaultPage {}
    }
}

/// Shop route.
#[component]
fn Shop() -> Element {
    rsx! {
        ShopPage {}
    }
}

/// Prize wheel route.
#[component]
fn Wheel() -> Element {
    rsx! {
        WheelPage {}
    }
}

/// Achievements route.
#[component]
fn Achievements() -> Element {
    rsx! {
        AchievementsPanel {}
    }
}

/// Messages route.
#[component]
fn Messages() -> Element {
    rsx! {
        MessagesPanel {}
    }
}

/// Admin dashboard route.
#[component]
fn Admin() -> Element {
    rsx! {
        AdminDashboardPage {}
    }
}
