//! Navigation links of the admin panel

use crate::shared::icons::icon;
use leptos::prelude::*;

/// (href, label, icon)
const MENU: [(&str, &str, &str); 1] = [("/", "Orders", "orders")];

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <div class="sidebar__header">
            {icon("dashboard")}
            <span class="sidebar__title">"Orders admin"</span>
        </div>
        <ul class="sidebar__menu nav flex-column">
            {MENU
                .iter()
                .map(|(href, label, icon_name)| {
                    view! {
                        <li class="nav-item">
                            <a class="nav-link active" href=*href>
                                {icon(icon_name)}
                                <span>{*label}</span>
                            </a>
                        </li>
                    }
                })
                .collect_view()}
            <li class="nav-item">
                <a class="nav-link" href="/logout">
                    {icon("log-out")}
                    <span>"Log out"</span>
                </a>
            </li>
        </ul>
    }
}
