//! Status Select Component
//!
//! Reusable `<select>` over the five lead statuses.

use lead_core::LeadStatus;
use leptos::prelude::*;

/// Option value for a selection; the placeholder option has the empty value
fn option_value(selected: Option<LeadStatus>) -> &'static str {
    selected.map_or("", |status| status.as_str())
}

/// Status dropdown
///
/// `placeholder` adds a leading empty option (used for "no filter" and for
/// the edit form's unselected state). `on_change` receives the raw value,
/// empty for the placeholder.
///
/// Controlled: after `on_change` runs, the element shows whatever `selected`
/// holds. A change the owner does not apply (yet) is not left on screen.
#[component]
pub fn StatusSelect(
    selected: Signal<Option<LeadStatus>>,
    #[prop(default = None)] placeholder: Option<&'static str>,
    #[prop(optional)] name: Option<&'static str>,
    #[prop(default = "status-select")] class: &'static str,
    on_change: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <select
            class=class
            name=name
            on:change=move |ev| {
                let select = event_target::<web_sys::HtmlSelectElement>(&ev);
                on_change(select.value());
                select.set_value(option_value(selected.get_untracked()));
            }
        >
            {placeholder.map(|text| view! {
                <option value="" prop:selected=move || selected.get().is_none()>{text}</option>
            })}
            {LeadStatus::ALL.iter().map(|status| {
                let status = *status;
                view! {
                    <option
                        value=status.as_str()
                        prop:selected=move || selected.get() == Some(status)
                    >
                        {status.as_str()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
