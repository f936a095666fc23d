//! Viewer session: identity state shared across the component tree.

use dioxus::prelude::*;
use vault_core::Viewer;
use vault_core::interrupt::KvStore;

use crate::storage::client_store;

/// Storage key for the remembered sign-in email.
const SESSION_EMAIL_KEY: &str = "vaultfut.session_email";

/// Shared session state, provided by [`SessionProvider`].
#[derive(Clone, Copy)]
pub struct SessionState {
    /// The resolved viewer, `None` while signed out or still restoring.
    pub viewer: Signal<Option<Viewer>>,
}

impl SessionState {
    /// Record a successful sign-in and remember the email for reloads.
    pub fn signed_in(&mut self, viewer: Viewer) {
        client_store().set(SESSION_EMAIL_KEY, &viewer.email);
        self.viewer.set(Some(viewer));
    }

    /// Forget the stored identity.
    pub fn sign_out(&mut self) {
        client_store().set(SESSION_EMAIL_KEY, "");
        self.viewer.set(None);
    }
}

/// Access the session provided by the nearest [`SessionProvider`].
pub fn use_session() -> SessionState {
    use_context()
}

/// Provides [`SessionState`] to its children and restores a remembered
/// sign-in on mount.
///
/// The admin flag is never trusted from storage: only the email is kept,
/// and identity is re-resolved server-side on every restore.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut viewer = use_signal(|| None::<Viewer>);
    use_context_provider(|| SessionState { viewer });

    let _restore = use_coroutine(move |_rx: UnboundedReceiver<()>| async move {
        let stored = client_store()
            .get(SESSION_EMAIL_KEY)
            .filter(|email| !email.is_empty());
        if let Some(email) = stored {
            match api::current_viewer(email).await {
                Ok(v) => viewer.set(Some(v)),
                Err(e) => tracing::warn!("Failed to restore session: {}", e),
            }
        }
    });

    rsx! {
        {children}
    }
}

/// Email sign-in form shown to signed-out viewers.
#[component]
pub fn SignInForm() -> Element {
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let submit = move |_| {
        let value = email();
        spawn(async move {
            submitting.set(true);
            error.set(None);

            match api::sign_in(value).await {
                Ok(viewer) => session.signed_in(viewer),
                Err(e) => error.set(Some(format!("Sign-in failed: {}", e))),
            }

            submitting.set(false);
        });
    };

    rsx! {
        div { class: "card signin-card",
            div { class: "card-header",
                h2 { class: "card-title", "Sign In" }
            }
            div { class: "card-body",
                p { class: "muted", "Enter your email to access rewards and the shop." }

                if let Some(err) = error() {
                    div { class: "error-message", "{err}" }
                }

                div { class: "form-group",
                    label { "Email" }
                    input {
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                }

                div { class: "form-actions",
                    button {
                        class: "btn btn-primary",
                        disabled: submitting(),
                        onclick: submit,
                        if submitting() { "Signing in..." } else { "Sign In" }
                    }
                }
            }
        }
    }
}
