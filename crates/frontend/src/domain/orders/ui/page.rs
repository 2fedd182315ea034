use super::details::OrderDetailsModal;
use super::stats_cards::StatsCards;
use super::table::OrdersTable;
use super::toolbar::OrdersToolbar;
use super::PageActions;
use crate::domain::orders::actions::OrderActions;
use crate::domain::orders::api::HttpOrdersApi;
use crate::domain::orders::bootstrap::read_bootstrap_orders;
use crate::domain::orders::polling::NewOrdersPoller;
use crate::domain::orders::state::OrdersPageState;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::host::WebHost;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Orders dashboard: counters, toolbar, table and the details modal
#[component]
pub fn OrdersPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let config = ctx.config.get_value();

    let state = RwSignal::new(OrdersPageState::new(read_bootstrap_orders()));
    let host = WebHost::new(ctx.notifications);
    let api = HttpOrdersApi::new(config.api.base_url.clone());
    let actions: PageActions = OrderActions::new(api.clone(), host, state, config.animation);
    provide_context(actions.clone());

    spawn_local(async move {
        actions.load_stats().await;
    });

    // Owned by the page; dropping it with the page stops the timer
    let _poller = StoredValue::new_local(NewOrdersPoller::start(
        api,
        host,
        ctx.new_orders,
        config.polling.new_orders_interval_ms,
    ));

    view! {
        <div class="orders-page">
            <StatsCards frame_ms=config.animation.counter_frame_ms />
            <div class="card">
                <div class="card-header">
                    <h5 class="card-title">"Recent orders"</h5>
                </div>
                <div class="card-body">
                    <OrdersToolbar />
                    <OrdersTable />
                </div>
            </div>
            <OrderDetailsModal />
        </div>
    }
}
