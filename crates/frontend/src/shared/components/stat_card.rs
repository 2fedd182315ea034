use crate::shared::icons::icon;
use leptos::prelude::*;

/// Dashboard card with one integer counter
#[component]
pub fn StatCard(
    /// Label displayed under the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Extra class identifying the counter
    counter_class: &'static str,
    #[prop(into)] value: Signal<i64>,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card {}", counter_class)>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__value stat-number">{move || value.get()}</div>
                <div class="stat-card__label">{label}</div>
            </div>
        </div>
    }
}
