//! Edit Lead Page
//!
//! Pre-populates from `GET /api/lead/:id` (best-effort) and sends a full
//! update on submit.

use lead_core::{FormController, FormPhase, LeadApi, LeadId, SubmitError};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::LeadFormFields;
use crate::context::use_app_context;

#[component]
pub fn EditLeadPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let params = use_params_map();
    let controller = RwSignal::new(FormController::edit());

    let lead_id = move || LeadId::new(params.read().get("id").unwrap_or_default());

    // Fetch the lead whenever the route id changes
    Effect::new(move |_| {
        let id = lead_id();
        spawn_local(async move {
            match ctx.api().get(&id).await {
                Ok(lead) => {
                    log::debug!("[EditLead] Loaded lead {}", id);
                    controller.update(|c| c.load(&lead));
                }
                Err(e) => {
                    log::error!("[EditLead] Error fetching lead {}: {}", id, e);
                    ctx.notify_error("Error", "Failed to load lead.");
                }
            }
        });
    });

    Effect::new(move |_| {
        if controller.with(|c| c.phase() == FormPhase::Succeeded) {
            navigate("/", Default::default());
        }
    });

    let on_submit = move |_| {
        let draft = match controller.try_update(|c| c.begin_submit()) {
            Some(Ok(draft)) => draft,
            Some(Err(SubmitError::Invalid(errors))) => {
                log::debug!("[EditLead] {} field(s) invalid", errors.len());
                return;
            }
            Some(Err(SubmitError::InFlight)) | None => return,
        };
        let id = untrack(lead_id);

        spawn_local(async move {
            match ctx.api().update(&id, &draft).await {
                Ok(_) => {
                    log::info!("[EditLead] Updated lead {}", id);
                    ctx.notify_success(
                        "Lead Updated",
                        "Lead details have been successfully updated.",
                    );
                    controller.update(|c| c.finish_submit(true));
                }
                Err(e) => {
                    log::error!("[EditLead] Error updating lead {}: {}", id, e);
                    ctx.notify_error("Error", "Failed to update lead. Try again.");
                    controller.update(|c| c.finish_submit(false));
                }
            }
        });
    };

    view! {
        <section class="form-page">
            <div class="card form-card">
                <h1>"Edit Lead"</h1>
                <p class="form-subtitle">"Update the lead details below."</p>
                <LeadFormFields controller=controller submit_label="Update Lead" on_submit=on_submit />
            </div>
        </section>
    }
}
