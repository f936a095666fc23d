//! Admin order review list.

use dioxus::prelude::*;
use vault_core::{Order, OrderStatus};

/// All submitted orders, newest first, with approve/decline controls on
/// pending rows.
#[component]
pub fn OrderList() -> Element {
    let mut orders = use_signal(Vec::<Order>::new);
    let mut error = use_signal(|| None::<String>);
    let mut refresh = use_signal(|| 0u32);

    let _loader = use_resource(move || async move {
        let _ = refresh();
        match api::list_orders().await {
            Ok(list) => orders.set(list),
            Err(e) => tracing::warn!("Failed to list orders: {}", e),
        }
    });

    let resolve = move |id: String, approve: bool| {
        spawn(async move {
            error.set(None);
            match api::resolve_order(id, approve).await {
                Ok(_) => refresh += 1,
                Err(e) => error.set(Some(format!("Failed to resolve order: {}", e))),
            }
        });
    };

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "Orders" }
                button {
                    class: "btn btn-secondary btn-small",
                    onclick: move |_| refresh += 1,
                    "Refresh"
                }
            }
            div { class: "card-body",
                if let Some(err) = error() {
                    div { class: "error-message", "{err}" }
                }

                if orders().is_empty() {
                    p { class: "muted", "No orders submitted yet." }
                } else {
                    table { class: "order-table",
                        thead {
                            tr {
                                th { "Buyer" }
                                th { "Package" }
                                th { "Listing" }
                                th { "Status" }
                                th { "" }
                            }
                        }
                        tbody {
                            for order in orders() {
                                OrderRow {
                                    key: "{order.id}",
                                    order: order.clone(),
                                    on_resolve: move |(id, approve)| resolve(id, approve),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Props for a single order row.
#[derive(Props, Clone, PartialEq)]
struct OrderRowProps {
    order: Order,
    on_resolve: EventHandler<(String, bool)>,
}

#[component]
fn OrderRow(props: OrderRowProps) -> Element {
    let order = props.order;
    let id = order.id.to_string();
    let pending = order.status == OrderStatus::Pending;
    let instructions = order.instructions.clone().unwrap_or_default();

    let approve_id = id.clone();
    let decline_id = id.clone();

    rsx! {
        tr {
            td {
                div { "{order.email}" }
                if !instructions.is_empty() {
                    div { class: "muted order-instructions", "{instructions}" }
                }
            }
            td { "{order.package_coins} coins" }
            td { "{order.player_name} ({order.rating}) @ {order.buy_now_price}" }
            td {
                span { class: "status-badge status-{order.status}", "{order.status}" }
            }
            td {
                if pending {
                    div { class: "row-actions",
                        button {
                            class: "btn btn-approve btn-small",
                            onclick: move |_| props.on_resolve.call((approve_id.clone(), true)),
                            "Approve"
                        }
                        button {
                            class: "btn btn-decline btn-small",
                            onclick: move |_| props.on_resolve.call((decline_id.clone(), false)),
                            "Decline"
                        }
                    }
                }
            }
        }
    }
}
