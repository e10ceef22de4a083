//! Navigation Bar Component
//!
//! Top bar linking the list, create and dashboard routes.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <A href="/" attr:class="nav-brand">"Lead Desk"</A>
            <div class="nav-links">
                <A href="/">"Leads"</A>
                <A href="/dashboard">"Lead Dashboard"</A>
                <A href="/add">"Add Lead"</A>
            </div>
        </nav>
    }
}
