//! Loading spinner component.

use leptos::prelude::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading" role="status" aria-label="Loading">
            <div class="spinner"></div>
        </div>
    }
}
