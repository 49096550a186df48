//! Toast notification slot.

use leptos::prelude::*;

/// Holds the most recent toast message, if any.
///
/// A new message replaces the current one; nothing is queued. Dismiss
/// timing belongs to the view.
#[derive(Debug, Clone, Copy)]
pub struct Toast {
    message: RwSignal<Option<String>>,
}

impl Toast {
    /// Create an empty toast slot.
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
        }
    }

    /// Show `message`, replacing whatever is showing.
    pub fn show_toast(&self, message: impl Into<String>) {
        self.message.set(Some(message.into()));
    }

    /// Clear the slot.
    pub fn hide_toast(&self) {
        self.message.set(None);
    }

    /// Reactive read of the current message.
    pub fn message(&self) -> Option<String> {
        self.message.get()
    }

    /// Read the current message without subscribing.
    pub fn message_untracked(&self) -> Option<String> {
        self.message.get_untracked()
    }

    /// Whether a message is showing (reactive).
    pub fn is_visible(&self) -> bool {
        self.message.with(Option::is_some)
    }
}

impl Default for Toast {
    fn default() -> Self {
        Self::new()
    }
}

/// Install an empty toast slot in the current reactive owner.
pub fn provide_toast() -> Toast {
    let toast = Toast::new();
    provide_context(toast);
    toast
}

/// Get the toast slot provided by an ancestor.
///
/// # Panics
///
/// Panics when no [`ToastProvider`] (or [`provide_toast`]) is above the caller.
#[track_caller]
pub fn use_toast() -> Toast {
    match use_context::<Toast>() {
        Some(toast) => toast,
        None => panic!("use_toast must be used within a ToastProvider"),
    }
}

/// Provides a [`Toast`] slot to its children.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    provide_toast();
    children()
}
