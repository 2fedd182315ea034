pub mod global_context;
pub mod left;
pub mod notifications;
pub mod sidebar_state;
pub mod top_header;

use global_context::AppGlobalContext;
use leptos::ev;
use leptos::prelude::*;
use notifications::Toaster;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |           |          TopHeader           |
/// |  Sidebar  +------------------------------+
/// |  (Left)   |           Content            |
/// +-----------+------------------------------+
/// ```
///
/// On mobile viewports the sidebar collapses and the content widens
/// (`sidebar-collapsed`).
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    ctx.handle_mobile_view();
    let resize = window_event_listener(ev::resize, move |_| ctx.handle_mobile_view());
    on_cleanup(move || resize.remove());

    let collapsed = move || ctx.sidebar.with(|s| s.content_collapsed());

    view! {
        <div class="app-layout">
            <left::Left>
                <left::Sidebar />
            </left::Left>
            <main id="content" class="app-main content" class:sidebar-collapsed=collapsed>
                <TopHeader />
                {children()}
            </main>
            <Toaster />
        </div>
    }
}
