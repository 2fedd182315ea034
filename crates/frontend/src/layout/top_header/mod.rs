//! Top bar: mobile sidebar toggle, title and the new-orders badge.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let show_toggle = move || ctx.sidebar.with(|s| s.show_toggle());
    let toggle_icon = move || ctx.sidebar.with(|s| s.toggle_icon());
    let badge_visible = move || ctx.new_orders.with(|w| w.badge_visible());
    let badge_text = move || ctx.new_orders.with(|w| w.badge_text());
    let last_count = move || ctx.new_orders.with(|w| w.last_count().to_string());

    view! {
        <div class="top-header">
            <Show when=show_toggle>
                <button
                    id="sidebarToggle"
                    class="btn btn-primary mobile-toggle"
                    on:click=move |_| ctx.toggle_sidebar()
                >
                    {move || icon(toggle_icon())}
                </button>
            </Show>

            <div class="top-header__brand">
                <span class="top-header__title">"Orders dashboard"</span>
            </div>

            <div class="top-header__actions">
                <span class="top-header__icon-btn" title="New orders">
                    {icon("bell")}
                    <span
                        id="newOrdersBadge"
                        class="badge bg-danger new-orders-badge"
                        data-last-count=last_count
                        style:display=move || if badge_visible() { "inline-block" } else { "none" }
                    >
                        {badge_text}
                    </span>
                </span>
            </div>
        </div>
    }
}
