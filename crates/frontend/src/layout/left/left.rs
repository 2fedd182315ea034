use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let is_open = move || ctx.sidebar.with(|s| s.is_open());

    view! {
        <nav id="sidebar" data-zone="left" class="sidebar" class:active=is_open>
            {children()}
        </nav>
    }
}
