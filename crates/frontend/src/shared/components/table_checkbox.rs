use leptos::prelude::*;

/// Row selection checkbox rendered as its own `<td>`
///
/// Clicks do not reach the row (`stop_propagation`).
///
/// # Example
/// ```rust,ignore
/// <TableCheckbox
///     checked=Signal::derive(move || state.with(|s| s.is_selected(id)))
///     on_change=Callback::new(move |checked| state.update(|s| s.toggle_selection(id, checked)))
/// />
/// ```
#[component]
pub fn TableCheckbox(
    checked: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    view! {
        <td
            class="table__cell table__cell--checkbox"
            on:click=|e| e.stop_propagation()
        >
            <input
                type="checkbox"
                class="form-check-input order-checkbox"
                prop:checked=checked
                prop:disabled=disabled
                on:change=move |ev| {
                    on_change.run(event_target_checked(&ev));
                }
            />
        </td>
    }
}
