//! Home view: sign-in for new visitors, rewards for signed-in users.

use dioxus::prelude::*;

use ui::{RewardsPanel, SignInForm, use_session};

#[component]
pub fn Home() -> Element {
    let session = use_session();
    let signed_in = session.viewer.read().is_some();

    rsx! {
        div { class: "home-page",
            if signed_in {
                RewardsPanel {}
            } else {
                SignInForm {}
            }
        }
    }
}
