//! Dashboard Page
//!
//! Total lead count plus one card per status that occurs.

use lead_core::{aggregate, Lead, LeadApi};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Loading, StatCard};
use crate::context::use_app_context;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();

    let (leads, set_leads) = signal(Vec::<Lead>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            match ctx.api().list().await {
                Ok(loaded) => {
                    log::info!("[Dashboard] Loaded {} leads", loaded.len());
                    set_leads.set(loaded);
                }
                Err(e) => {
                    log::error!("[Dashboard] Error fetching leads: {}", e);
                    ctx.notify_error("Error", "Failed to fetch leads.");
                }
            }
            set_loading.set(false);
        });
    });

    let summary = Memo::new(move |_| leads.with(|l| aggregate(l)));

    view! {
        <section class="dashboard">
            <h1>"Leads Dashboard"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <div class="stats-grid">
                    {move || summary.with(|s| {
                        let per_status = s
                            .per_status
                            .iter()
                            .map(|(status, count)| view! {
                                <StatCard label=status.as_str() value=*count share=s.share(*status) />
                            })
                            .collect_view();
                        view! {
                            <StatCard label="Total Leads" value=s.total />
                            {per_status}
                        }
                    })}
                </div>
            </Show>
        </section>
    }
}
