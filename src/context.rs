//! Application Context
//!
//! Shared handles provided via Leptos Context API.
//! Page state stays in each page; only the API client and toasts are shared.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::api::ApiClient;
use crate::store::{
    store_dismiss_toast, store_push_toast, ToastKind, ToastStore, TOAST_DURATION_MS,
};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// REST client for the lead resource
    api: StoredValue<ApiClient>,
    /// Toast notifications
    toasts: ToastStore,
}

impl AppContext {
    pub fn new(api: ApiClient, toasts: ToastStore) -> Self {
        Self {
            api: StoredValue::new(api),
            toasts,
        }
    }

    /// Clone of the API client, for use inside a spawned task
    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn notify_success(&self, title: &str, description: &str) {
        self.notify(ToastKind::Success, title, description);
    }

    pub fn notify_error(&self, title: &str, description: &str) {
        self.notify(ToastKind::Error, title, description);
    }

    /// Show a toast and dismiss it after `TOAST_DURATION_MS`
    fn notify(&self, kind: ToastKind, title: &str, description: &str) {
        let toasts = self.toasts;
        let id = store_push_toast(&toasts, kind, title, description);
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            store_dismiss_toast(&toasts, id);
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
