use super::use_page_actions;
use crate::domain::orders::state::{OrdersPageState, Trigger, TriggerAction};
use crate::shared::components::TableCheckbox;
use crate::shared::date_utils::format_created_at;
use crate::shared::icons::icon;
use contracts::domain::common::AggregateId;
use contracts::domain::orders::{Order, OrderId};
use contracts::enums::OrderStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Text of one cell of a row, empty once the row is gone
fn cell(
    state: RwSignal<OrdersPageState>,
    id: OrderId,
    read: fn(&Order) -> String,
) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || state.with(|s| s.row(id).map(read).unwrap_or_default())
}

/// Class list of the status badge inside a row
fn status_badge_class(status: OrderStatus) -> String {
    format!("badge order-status {}", status.badge_class())
}

/// A row button is disabled only while its own request is pending
fn trigger_disabled(state: &OrdersPageState, trigger: &Trigger) -> bool {
    state.is_busy(trigger)
}

#[component]
pub fn OrdersTable() -> impl IntoView {
    let state = *use_page_actions().state();
    let ids = move || state.with(|s| s.rows.iter().map(|o| o.id).collect::<Vec<_>>());
    let empty = move || state.with(|s| s.rows.is_empty());

    view! {
        <div class="table-responsive">
            <table class="table table-hover orders-table">
                <thead>
                    <tr>
                        <th class="table__header-cell--checkbox"></th>
                        <th>"#"</th>
                        <th>"Customer"</th>
                        <th>"Phone"</th>
                        <th>"Product"</th>
                        <th>"Quantity"</th>
                        <th>"Price"</th>
                        <th>"Status"</th>
                        <th>"Date"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For each=ids key=|id| *id children=move |id| view! { <OrderRow id=id /> } />
                </tbody>
            </table>
            <Show when=empty>
                <p class="text-muted text-center">"No orders yet"</p>
            </Show>
        </div>
    }
}

#[component]
fn OrderRow(id: OrderId) -> impl IntoView {
    let page = use_page_actions();
    let state = *page.state();
    let actions = StoredValue::new(page);

    let visible = move || state.with(|s| s.is_row_visible(id));
    let fading = move || state.with(|s| s.is_fading(id));
    let status = move || {
        state
            .with(|s| s.status_of(id))
            .unwrap_or(OrderStatus::Unknown)
    };

    let show_details = move |_| {
        let actions = actions.get_value();
        spawn_local(async move {
            actions.show_order_details(id).await;
        });
    };

    view! {
        <tr
            class="order-row"
            data-order-id=id.as_string()
            style:display=move || if visible() { "" } else { "none" }
            style:opacity=move || if fading() { "0" } else { "1" }
            style:transition="opacity 0.3s"
        >
            <TableCheckbox
                checked=Signal::derive(move || state.with(|s| s.is_selected(id)))
                on_change=Callback::new(move |checked| {
                    state.update(|s| s.toggle_selection(id, checked))
                })
            />
            <td>{id.to_string()}</td>
            <td>{cell(state, id, |o| o.name.clone())}</td>
            <td>{cell(state, id, |o| o.phone.clone().unwrap_or_default())}</td>
            <td>{cell(state, id, |o| o.product.clone())}</td>
            <td>{cell(state, id, |o| o.quantity.clone())}</td>
            <td>{cell(state, id, |o| o.price.clone().unwrap_or_default())}</td>
            <td>
                <span class=move || status_badge_class(status())>
                    {move || status().label()}
                </span>
            </td>
            <td>{cell(state, id, |o| format_created_at(&o.created_at))}</td>
            <td class="order-actions">
                <div class="btn-group btn-group-sm">
                    {OrderStatus::all()
                        .into_iter()
                        .map(|target| view! { <TriggerButton trigger=Trigger::status(id, target) /> })
                        .collect_view()}
                    <button
                        type="button"
                        class="btn btn-sm btn-outline-secondary details-btn"
                        title="Details"
                        on:click=show_details
                    >
                        {icon("eye")}
                    </button>
                    <TriggerButton trigger=Trigger::delete(id) />
                </div>
            </td>
        </tr>
    }
}

/// Button that issues one mutation and shows the busy glyph until it resolves
#[component]
fn TriggerButton(trigger: Trigger) -> impl IntoView {
    let page = use_page_actions();
    let state = *page.state();
    let actions = StoredValue::new(page);

    let (title, icon_name, class) = match trigger.action {
        TriggerAction::Status(status) => (
            status.label(),
            match status {
                OrderStatus::New => "bell",
                OrderStatus::Processing => "refresh",
                OrderStatus::Completed => "check-circle",
                OrderStatus::Cancelled => "x-circle",
                OrderStatus::Unknown => "help-circle",
            },
            "btn-outline-primary status-btn",
        ),
        TriggerAction::Delete => ("Delete", "trash", "btn-outline-danger delete-btn"),
    };

    let busy = move || state.with(|s| trigger_disabled(s, &trigger));

    let on_click = move |_| {
        let actions = actions.get_value();
        let id = trigger.order_id;
        spawn_local(async move {
            match trigger.action {
                TriggerAction::Status(status) => {
                    actions.update_order_status(id, status, Some(trigger)).await
                }
                TriggerAction::Delete => actions.delete_order(id, Some(trigger)).await,
            }
        });
    };

    view! {
        <button
            type="button"
            class=format!("btn btn-sm {}", class)
            title=title
            data-order-id=trigger.order_id.as_string()
            data-status=trigger.data_status()
            prop:disabled=busy
            on:click=on_click
        >
            {move || if busy() { icon("hourglass") } else { icon(icon_name) }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::orders::test_support::order;

    #[test]
    fn test_current_status_button_stays_enabled() {
        let mut state = OrdersPageState::new(vec![order(1, "Ahmed Ali", "Abaya", OrderStatus::New)]);
        let same = Trigger::status(OrderId(1), OrderStatus::New);
        let other = Trigger::status(OrderId(1), OrderStatus::Completed);
        assert!(!trigger_disabled(&state, &same));
        assert!(!trigger_disabled(&state, &other));

        assert!(state.try_begin_mutation(OrderId(1), Some(same)));
        assert!(trigger_disabled(&state, &same));
        assert!(!trigger_disabled(&state, &other));

        state.end_mutation(OrderId(1), Some(same));
        assert!(!trigger_disabled(&state, &same));
    }

    #[test]
    fn test_status_badge_class() {
        assert_eq!(
            status_badge_class(OrderStatus::Completed),
            "badge order-status bg-success"
        );
        assert_eq!(
            status_badge_class(OrderStatus::Unknown),
            "badge order-status bg-secondary"
        );
    }
}
