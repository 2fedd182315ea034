use crate::domain::orders::ui::OrdersPage;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::config::load_config;
use crate::shared::host::{is_online, warn_if_offline, WebHost};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    log::debug!("Config: {:?}", config);

    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new(config);
    provide_context(ctx);
    provide_context(ctx.notifications);

    warn_if_offline(&WebHost::new(ctx.notifications), is_online());

    view! {
        <Shell>
            <OrdersPage />
        </Shell>
    }
}
