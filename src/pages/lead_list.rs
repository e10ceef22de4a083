//! Lead List Page
//!
//! Filterable, paginated table of leads with inline status change and delete.

use lead_core::{change_status, delete_lead, Lead, LeadApi, LeadId, LeadListing, LeadStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::components::{DeleteConfirmButton, Loading, Pagination, StatusSelect};
use crate::context::use_app_context;

/// One table row
#[component]
fn LeadRow(
    lead: Lead,
    listing: RwSignal<LeadListing>,
    on_status_change: Callback<(LeadId, LeadStatus)>,
    on_delete: Callback<LeadId>,
) -> impl IntoView {
    let id = lead.id.clone();
    let edit_href = format!("/edit/{}", lead.id);
    // Follows the confirmed listing, not the last value picked
    let status_id = id.clone();
    let status = Signal::derive(move || listing.with(|l| l.status_of(&status_id)));

    let change_id = id.clone();
    let on_change = move |value: String| {
        if let Some(status) = LeadStatus::parse(&value) {
            on_status_change.run((change_id.clone(), status));
        }
    };

    view! {
        <tr>
            <td>{lead.name}</td>
            <td>{lead.email}</td>
            <td>{lead.phone}</td>
            <td>
                <StatusSelect
                    selected=status
                    class="status-select small"
                    on_change=on_change
                />
            </td>
            <td class="actions">
                <A href=edit_href attr:class="btn warning small">"Edit"</A>
                <DeleteConfirmButton on_confirm=move |_| on_delete.run(id.clone()) />
            </td>
        </tr>
    }
}

#[component]
pub fn LeadListPage() -> impl IntoView {
    let ctx = use_app_context();

    let listing = RwSignal::new(LeadListing::default());
    let (loading, set_loading) = signal(true);

    // Load leads on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match ctx.api().list().await {
                Ok(leads) => {
                    log::info!("[LeadList] Loaded {} leads", leads.len());
                    listing.update(|l| l.replace_all(leads));
                }
                Err(e) => {
                    log::error!("[LeadList] Error fetching leads: {}", e);
                    ctx.notify_error("Error", "Failed to fetch leads.");
                }
            }
            set_loading.set(false);
        });
    });

    let on_delete = Callback::new(move |id: LeadId| {
        spawn_local(async move {
            match delete_lead(&ctx.api(), id.clone()).await {
                Ok(mutation) => {
                    listing.update(|l| {
                        l.apply(&mutation);
                    });
                    ctx.notify_success("Lead Deleted", "The lead has been successfully deleted.");
                }
                Err(e) => {
                    log::error!("[LeadList] Error deleting lead {}: {}", id, e);
                    ctx.notify_error("Error", "Failed to delete lead.");
                }
            }
        });
    });

    let on_status_change = Callback::new(move |(id, status): (LeadId, LeadStatus)| {
        spawn_local(async move {
            match change_status(&ctx.api(), id.clone(), status).await {
                Ok(mutation) => {
                    listing.update(|l| {
                        l.apply(&mutation);
                    });
                    ctx.notify_success("Status Updated", "The lead status has been updated.");
                }
                Err(e) => {
                    log::error!("[LeadList] Error updating status of {}: {}", id, e);
                    ctx.notify_error("Error", "Failed to update lead status.");
                }
            }
        });
    });

    let filter = Signal::derive(move || listing.with(|l| l.filter()));
    let on_filter_change = move |value: String| {
        let status = LeadStatus::parse(&value);
        log::debug!("[LeadList] Filter set to {:?}", status);
        listing.update(|l| l.set_filter(status));
    };

    let on_prev = move |_| {
        listing.update(|l| {
            if let Err(e) = l.prev_page() {
                log::debug!("[LeadList] {}", e);
            }
        });
    };
    let on_next = move |_| {
        listing.update(|l| {
            if let Err(e) = l.next_page() {
                log::debug!("[LeadList] {}", e);
            }
        });
    };

    view! {
        <section class="lead-list">
            <div class="page-header">
                <h1>"Leads List"</h1>
            </div>

            <StatusSelect
                selected=filter
                placeholder=Some("Filter by Status")
                class="status-filter"
                on_change=on_filter_change
            />

            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <div class="table-wrapper">
                    <table class="lead-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Phone"</th>
                                <th>"Status"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || listing.with(|l| l.visible())
                                key=|lead| lead.id.clone()
                                children=move |lead| view! {
                                    <LeadRow
                                        lead=lead
                                        listing=listing
                                        on_status_change=on_status_change
                                        on_delete=on_delete
                                    />
                                }
                            />
                        </tbody>
                    </table>
                    {move || listing.with(|l| l.filtered_count() == 0).then(|| view! {
                        <p class="empty-message">"No leads found."</p>
                    })}
                </div>

                <Pagination
                    label=Signal::derive(move || listing.with(|l| l.page_label()))
                    can_prev=Signal::derive(move || listing.with(|l| l.can_prev()))
                    can_next=Signal::derive(move || listing.with(|l| l.can_next()))
                    on_prev=on_prev
                    on_next=on_next
                />
            </Show>
        </section>
    }
}
