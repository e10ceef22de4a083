//! Lead Form Component
//!
//! Field layout shared by the add and edit pages. The page owns the
//! `FormController` and decides what a submit does.

use lead_core::{Field, FormController, FormKind};
use leptos::prelude::*;

use super::StatusSelect;

/// One text input bound to a controller field, with its error message
#[component]
fn TextField(
    controller: RwSignal<FormController>,
    field: Field,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let error = move || controller.with(|c| c.errors().get(field));

    view! {
        <div class=move || if error().is_some() { "form-control invalid" } else { "form-control" }>
            <label for=field.as_str()>{label}</label>
            <input
                id=field.as_str()
                name=field.as_str()
                type=input_type
                placeholder=placeholder
                prop:value=move || controller.with(|c| c.form().value(field))
                on:input=move |ev| controller.update(|c| c.set_field(field, event_target_value(&ev)))
            />
            {move || error().map(|msg| view! { <span class="field-error">{msg}</span> })}
        </div>
    }
}

/// Name/email/phone/status form
#[component]
pub fn LeadFormFields(
    controller: RwSignal<FormController>,
    submit_label: &'static str,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let kind = controller.with_untracked(|c| c.kind());
    let status = Signal::derive(move || controller.with(|c| c.form().status));
    let status_error = move || controller.with(|c| c.errors().get(Field::Status));
    let submitting = move || controller.with(|c| c.is_submitting());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form class="lead-form" on:submit=submit>
            <TextField controller=controller field=Field::Name label="Name" input_type="text" placeholder="Enter name" />
            <TextField controller=controller field=Field::Email label="Email" input_type="email" placeholder="Enter email" />
            <TextField controller=controller field=Field::Phone label="Phone" input_type="tel" placeholder="Enter phone number" />

            <div class=move || if status_error().is_some() { "form-control invalid" } else { "form-control" }>
                <label for="status">"Status"</label>
                <StatusSelect
                    selected=status
                    placeholder=if kind == FormKind::Edit { Some("Select Status") } else { None }
                    name="status"
                    on_change=move |value: String| controller.update(|c| c.set_field(Field::Status, value))
                />
                {move || status_error().map(|msg| view! { <span class="field-error">{msg}</span> })}
            </div>

            <button type="submit" class="btn primary full" prop:disabled=submitting>
                {move || if submitting() { "Saving..." } else { submit_label }}
            </button>
        </form>
    }
}
