pub mod details;
pub mod page;
pub mod stats_cards;
pub mod table;
pub mod toolbar;

use super::actions::OrderActions;
use super::api::HttpOrdersApi;
use super::state::OrdersPageState;
use crate::shared::host::WebHost;
use leptos::prelude::*;

pub use page::OrdersPage;

/// Controller the page provides to its children through context
pub type PageActions = OrderActions<HttpOrdersApi, WebHost, RwSignal<OrdersPageState>>;

pub(crate) fn use_page_actions() -> PageActions {
    use_context::<PageActions>().expect("PageActions context not found")
}
