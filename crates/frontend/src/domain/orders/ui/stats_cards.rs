use super::use_page_actions;
use crate::domain::orders::stats::StatCounter;
use crate::shared::components::StatCard;
use gloo_timers::callback::Interval;
use leptos::prelude::*;

/// The four counters; runs a frame timer only while an animation is active
#[component]
pub fn StatsCards(frame_ms: u32) -> impl IntoView {
    let state = *use_page_actions().state();

    let animating = Memo::new(move |_| state.with(|s| s.stats.is_animating()));
    let ticker = StoredValue::new_local(None::<Interval>);

    Effect::new(move |_| {
        if !animating.get() {
            ticker.set_value(None);
            return;
        }
        if ticker.with_value(Option::is_none) {
            let interval = Interval::new(frame_ms, move || {
                state.try_update(|s| s.stats.tick());
            });
            ticker.set_value(Some(interval));
        }
    });

    view! {
        <div class="stats-grid">
            {StatCounter::all()
                .into_iter()
                .map(|counter| {
                    view! {
                        <StatCard
                            label=counter.label()
                            icon_name=counter.icon_name()
                            counter_class=counter.css_class()
                            value=Signal::derive(move || state.with(|s| s.stats.value(counter)))
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}
