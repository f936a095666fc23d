//! Coin shop: package selection, order submission, and order history.

use dioxus::prelude::*;
use vault_core::Order;

use crate::session::use_session;

/// Available coin packages as (in-game coins, display label).
const PACKAGES: [(i64, &str); 4] = [
    (100_000, "100K Coins"),
    (250_000, "250K Coins"),
    (500_000, "500K Coins"),
    (1_000_000, "1M Coins"),
];

/// Shop page: pick a package, describe the transfer listing, submit for
/// admin approval. Delivery happens out of band via the listed card.
#[component]
pub fn ShopPage() -> Element {
    let session = use_session();
    let viewer = session.viewer;

    let mut package_coins = use_signal(|| PACKAGES[0].0);
    let mut player_name = use_signal(String::new);
    let mut rating = use_signal(|| "75".to_string());
    let mut buy_now_price = use_signal(String::new);
    let mut instructions = use_signal(String::new);

    let mut error = use_signal(|| None::<String>);
    let mut confirmation = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);
    let mut refresh = use_signal(|| 0u32);

    let mut orders = use_signal(Vec::<Order>::new);
    let _loader = use_resource(move || async move {
        let _ = refresh();
        let email = match viewer.read().as_ref() {
            Some(v) => v.email.clone(),
            None => {
                orders.set(Vec::new());
                return;
            }
        };
        match api::list_my_orders(email).await {
            Ok(list) => orders.set(list),
            Err(e) => tracing::warn!("Failed to load orders: {}", e),
        }
    });

    let submit = move |_| {
        let Some(email) = viewer.peek().as_ref().map(|v| v.email.clone()) else {
            error.set(Some("Sign in to place an order".to_string()));
            return;
        };

        let rating_val = match rating().trim().parse::<u32>() {
            Ok(r) if (1..=99).contains(&r) => r,
            _ => {
                error.set(Some("Rating must be between 1 and 99".to_string()));
                return;
            }
        };
        let price_val = match buy_now_price().trim().parse::<i64>() {
            Ok(p) if p > 0 => p,
            _ => {
                error.set(Some("Buy-now price must be a positive number".to_string()));
                return;
            }
        };

        let request = api::SubmitOrderRequest {
            email,
            package_coins: package_coins(),
            player_name: player_name(),
            rating: rating_val,
            buy_now_price: price_val,
            instructions: Some(instructions()).filter(|s| !s.trim().is_empty()),
        };

        spawn(async move {
            submitting.set(true);
            error.set(None);
            confirmation.set(None);

            match api::submit_order(request).await {
                Ok(order) => {
                    confirmation.set(Some(format!(
                        "Order placed! {} coins pending admin approval.",
                        order.package_coins
                    )));
                    player_name.set(String::new());
                    buy_now_price.set(String::new());
                    instructions.set(String::new());
                    refresh += 1;
                }
                Err(e) => error.set(Some(format!("Failed to place order: {}", e))),
            }

            submitting.set(false);
        });
    };

    rsx! {
        div { class: "shop-page",
            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Coin Shop" }
                }
                div { class: "card-body",
                    if let Some(err) = error() {
                        div { class: "error-message", "{err}" }
                    }
                    if let Some(msg) = confirmation() {
                        div { class: "success-message", "{msg}" }
                    }

                    div { class: "package-grid",
                        for (coins, label) in PACKAGES {
                            button {
                                class: if package_coins() == coins {
                                    "package-card selected"
                                } else {
                                    "package-card"
                                },
                                onclick: move |_| package_coins.set(coins),
                                "{label}"
                            }
                        }
                    }

                    div { class: "form-group",
                        label { "Player Name" }
                        input {
                            placeholder: "Card you listed on the transfer market",
                            value: "{player_name}",
                            oninput: move |e| player_name.set(e.value()),
                        }
                    }

                    div { class: "form-row",
                        div { class: "form-group",
                            label { "Rating" }
                            input {
                                r#type: "number",
                                min: "1",
                                max: "99",
                                value: "{rating}",
                                oninput: move |e| rating.set(e.value()),
                            }
                        }
                        div { class: "form-group",
                            label { "Buy-Now Price" }
                            input {
                                r#type: "number",
                                placeholder: "e.g. 150000",
                                value: "{buy_now_price}",
                                oninput: move |e| buy_now_price.set(e.value()),
                            }
                        }
                    }

                    div { class: "form-group",
                        label { "Delivery Instructions (optional)" }
                        textarea {
                            rows: 3,
                            value: "{instructions}",
                            oninput: move |e| instructions.set(e.value()),
                        }
                    }

                    div { class: "form-actions",
                        button {
                            class: "btn btn-primary",
                            disabled: submitting(),
                            onclick: submit,
                            if submitting() { "Placing order..." } else { "Place Order" }
                        }
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| refresh += 1,
                            "Refresh Orders"
                        }
                    }
                }
            }

            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Your Orders" }
                }
                div { class: "card-body",
                    if orders().is_empty() {
                        p { class: "muted", "No orders yet." }
                    } else {
                        table { class: "order-table",
                            thead {
                                tr {
                                    th { "Package" }
                                    th { "Player" }
                                    th { "Submitted" }
                                    th { "Status" }
                                }
                            }
                            tbody {
                                for order in orders() {
                                    tr { key: "{order.id}",
                                        td { "{order.package_coins} coins" }
                                        td { "{order.player_name} ({order.rating})" }
                                        td { class: "tabular-nums",
                                            {order.created_at.format("%Y-%m-%d %H:%M UTC").to_string()}
                                        }
                                        td {
                                            span { class: "status-badge status-{order.status}",
                                                "{order.status}"
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
}
