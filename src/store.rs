//! Notification Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the toast list.

use leptos::prelude::*;
use reactive_stores::Store;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast success",
            ToastKind::Error => "toast error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

/// Transient notifications with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ToastState {
    /// Toasts currently shown, oldest first
    pub toasts: Vec<Toast>,
    /// Last id handed out
    pub last_id: u32,
}

/// Type alias for the store
pub type ToastStore = Store<ToastState>;

/// Get the toast store from context
pub fn use_toast_store() -> ToastStore {
    expect_context::<ToastStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a toast and return its id
pub fn store_push_toast(
    store: &ToastStore,
    kind: ToastKind,
    title: &str,
    description: &str,
) -> u32 {
    let last_id = store.last_id();
    let id = {
        let mut guard = last_id.write();
        *guard += 1;
        *guard
    };
    store.toasts().write().push(Toast {
        id,
        kind,
        title: title.to_string(),
        description: description.to_string(),
    });
    id
}

/// Remove a toast by id (no-op if already gone)
pub fn store_dismiss_toast(store: &ToastStore, id: u32) {
    store.toasts().write().retain(|toast| toast.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(store: &ToastStore) -> Vec<u32> {
        store.toasts().with(|toasts| toasts.iter().map(|t| t.id).collect())
    }

    #[test]
    fn test_push_assigns_increasing_ids() {
        Owner::new().with(|| {
            let store = Store::new(ToastState::default());
            let first = store_push_toast(&store, ToastKind::Success, "Saved", "Lead saved.");
            let second = store_push_toast(&store, ToastKind::Error, "Error", "Failed.");

            assert_eq!((first, second), (1, 2));
            assert_eq!(store.last_id().get(), 2);
            let toasts = store.toasts().get();
            assert_eq!(toasts[0].title, "Saved");
            assert_eq!(toasts[1].kind, ToastKind::Error);
        });
    }

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        Owner::new().with(|| {
            let store = Store::new(ToastState::default());
            let first = store_push_toast(&store, ToastKind::Success, "One", "");
            let second = store_push_toast(&store, ToastKind::Success, "Two", "");

            store_dismiss_toast(&store, first);
            assert_eq!(ids(&store), vec![second]);

            // Already gone
            store_dismiss_toast(&store, first);
            assert_eq!(ids(&store), vec![second]);

            // Ids are not reused after a dismiss
            let third = store_push_toast(&store, ToastKind::Error, "Three", "");
            assert_eq!(third, 3);
        });
    }
}
