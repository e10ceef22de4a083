//! Pagination Component
//!
//! Previous/next controls with a "Page X of Y" label.

use leptos::prelude::*;

/// Pager; buttons are disabled at the bounds instead of wrapping
#[component]
pub fn Pagination(
    label: Signal<String>,
    can_prev: Signal<bool>,
    can_next: Signal<bool>,
    #[prop(into)] on_prev: Callback<()>,
    #[prop(into)] on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination">
            <button
                class="btn outline"
                prop:disabled=move || !can_prev.get()
                on:click=move |_| on_prev.run(())
            >
                "Previous"
            </button>
            <span class="page-label">{move || label.get()}</span>
            <button
                class="btn outline"
                prop:disabled=move || !can_next.get()
                on:click=move |_| on_next.run(())
            >
                "Next"
            </button>
        </div>
    }
}
