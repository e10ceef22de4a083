//! Toast Host Component
//!
//! Renders the notification store; each toast can also be closed by hand.

use leptos::prelude::*;

use crate::store::{store_dismiss_toast, use_toast_store, ToastStateStoreFields};

#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_toast_store();

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() role="status">
                            <div class="toast-body">
                                <div class="toast-title">{toast.title}</div>
                                <div class="toast-description">{toast.description}</div>
                            </div>
                            <button
                                class="toast-close"
                                title="Close"
                                on:click=move |_| store_dismiss_toast(&store, id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
