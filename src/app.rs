//! Lead Desk Frontend App
//!
//! Root component: context, router and the toast overlay.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::{NavBar, ToastHost};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{AddLeadPage, DashboardPage, EditLeadPage, LeadListPage, NotFoundPage};
use crate::store::ToastState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let toasts = Store::new(ToastState::default());

    // Provide context to all children
    provide_context(toasts);
    provide_context(AppContext::new(ApiClient::from_config(&config), toasts));

    view! {
        <Router>
            <div class="app-layout">
                <NavBar />
                <main class="main-content">
                    <Routes fallback=|| view! { <NotFoundPage /> }>
                        <Route path=path!("/") view=LeadListPage />
                        <Route path=path!("/add") view=AddLeadPage />
                        <Route path=path!("/dashboard") view=DashboardPage />
                        <Route path=path!("/edit/:id") view=EditLeadPage />
                    </Routes>
                </main>
                <ToastHost />
            </div>
        </Router>
    }
}
