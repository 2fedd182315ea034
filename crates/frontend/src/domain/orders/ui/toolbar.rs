use super::use_page_actions;
use crate::shared::icons::icon;
use contracts::enums::OrderStatus;
use leptos::prelude::*;
use thaw::*;

/// Search box and quick-select buttons above the table
#[component]
pub fn OrdersToolbar() -> impl IntoView {
    let page = use_page_actions();
    let state = *page.state();
    let actions = StoredValue::new(page);

    let bulk = move |status: OrderStatus| {
        actions.with_value(|a| {
            a.bulk_update_status(status);
        });
    };

    view! {
        <div class="orders-toolbar">
            <div class="orders-toolbar__search">
                <input
                    type="search"
                    id="searchInput"
                    class="form-control"
                    placeholder="Search orders..."
                    prop:value=move || state.with(|s| s.search_query.clone())
                    on:input=move |ev| {
                        let query = event_target_value(&ev);
                        state.update(|s| s.filter_orders(&query));
                    }
                />
            </div>
            <div class="orders-toolbar__actions quick-select">
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| state.update(|s| s.select_all_orders())
                >
                    {icon("check-all")}
                    " Select all"
                </Button>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| state.update(|s| s.deselect_all_orders())
                >
                    {icon("x")}
                    " Deselect all"
                </Button>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| bulk(OrderStatus::Completed)
                >
                    {icon("check-circle")}
                    " Mark completed"
                </Button>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| bulk(OrderStatus::Cancelled)
                >
                    {icon("x-circle")}
                    " Mark cancelled"
                </Button>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| {
                        actions.with_value(|a| {
                            a.export_selected_orders();
                        });
                    }
                >
                    {icon("download")}
                    " Export"
                </Button>
            </div>
        </div>
    }
}
