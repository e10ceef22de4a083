//! Add Lead Page
//!
//! Blank form (status New); navigates back to the list once the backend
//! accepts the new lead.

use lead_core::{FormController, FormPhase, LeadApi, SubmitError};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::components::LeadFormFields;
use crate::context::use_app_context;

#[component]
pub fn AddLeadPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let controller = RwSignal::new(FormController::add());

    // Leave the page once the submission succeeded
    Effect::new(move |_| {
        if controller.with(|c| c.phase() == FormPhase::Succeeded) {
            navigate("/", Default::default());
        }
    });

    let on_submit = move |_| {
        let draft = match controller.try_update(|c| c.begin_submit()) {
            Some(Ok(draft)) => draft,
            Some(Err(SubmitError::Invalid(errors))) => {
                log::debug!("[AddLead] {} field(s) invalid", errors.len());
                return;
            }
            Some(Err(SubmitError::InFlight)) | None => return,
        };

        spawn_local(async move {
            match ctx.api().create(&draft).await {
                Ok(lead) => {
                    log::info!("[AddLead] Created lead {}", lead.id);
                    ctx.notify_success("Lead Added", "New lead has been successfully added.");
                    controller.update(|c| c.finish_submit(true));
                }
                Err(e) => {
                    log::error!("[AddLead] Error adding lead: {}", e);
                    ctx.notify_error("Error", "Failed to add lead. Try again.");
                    controller.update(|c| c.finish_submit(false));
                }
            }
        });
    };

    view! {
        <section class="form-page">
            <div class="card form-card">
                <h1>"Add New Lead"</h1>
                <LeadFormFields controller=controller submit_label="Add Lead" on_submit=on_submit />
            </div>
        </section>
    }
}
