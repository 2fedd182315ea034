use super::use_page_actions;
use crate::shared::date_utils::format_created_at;
use crate::shared::modal::Modal;
use contracts::domain::orders::Order;
use leptos::prelude::*;

const NOT_SPECIFIED: &str = "Not specified";

fn or_not_specified(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

/// Details of the order last opened from the table, if any
#[component]
pub fn OrderDetailsModal() -> impl IntoView {
    let state = *use_page_actions().state();
    let close = Callback::new(move |_: ()| state.update(|s| s.close_details()));

    move || {
        state.with(|s| s.details.clone()).map(|order| {
            view! {
                <Modal title=format!("Order #{}", order.id) on_close=close>
                    <OrderDetailsBody order=order />
                    <div class="modal-footer">
                        <button type="button" class="btn btn-secondary" on:click=move |_| close.run(())>
                            "Close"
                        </button>
                    </div>
                </Modal>
            }
        })
    }
}

#[component]
fn OrderDetailsBody(order: Order) -> impl IntoView {
    let notes = order.notes.clone().map(|notes| {
        view! {
            <div class="order-notes mt-3">
                <h6>"Notes"</h6>
                <p>{notes}</p>
            </div>
        }
    });

    view! {
        <div class="row">
            <div class="col-md-6">
                <h6>"Customer"</h6>
                <p><strong>"Name: "</strong>{order.name.clone()}</p>
                <p><strong>"Phone: "</strong>{or_not_specified(&order.phone)}</p>
                <p><strong>"Email: "</strong>{or_not_specified(&order.email)}</p>
                <p><strong>"Address: "</strong>{or_not_specified(&order.address)}</p>
            </div>
            <div class="col-md-6">
                <h6>"Order"</h6>
                <p><strong>"Product: "</strong>{order.product.clone()}</p>
                <p><strong>"Category: "</strong>{or_not_specified(&order.category)}</p>
                <p><strong>"Size: "</strong>{or_not_specified(&order.size)}</p>
                <p><strong>"Quantity: "</strong>{order.quantity.clone()}</p>
                <p><strong>"Price: "</strong>{or_not_specified(&order.price)}</p>
                <p>
                    <strong>"Status: "</strong>
                    <span class=format!("badge {}", order.status.badge_class())>
                        {order.status.label()}
                    </span>
                </p>
                <p><strong>"Date: "</strong>{format_created_at(&order.created_at)}</p>
            </div>
        </div>
        {notes}
    }
}
