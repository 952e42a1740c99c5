//! Shopper-facing notifications and confirmation prompts.

use std::sync::Mutex;

use tracing::{info, warn};

/// Notification texts.
pub mod messages {
    pub const ADDED: &str = "Added to wishlist";
    pub const REMOVED: &str = "Removed from wishlist";
    pub const CLEARED: &str = "Wishlist cleared";
    pub const ADDED_TO_CART: &str = "Added to cart!";
    pub const CART_FAILED: &str = "Could not add to cart";
    pub const CONFIRM_CLEAR: &str = "Are you sure you want to clear your entire wishlist?";

    /// "<title> removed from wishlist"
    #[must_use]
    pub fn removed_named(title: &str) -> String {
        format!("{title} removed from wishlist")
    }
}

/// Visual style of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    /// CSS modifier class (`wishlist-toast success`).
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A transient message shown to the shopper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
        }
    }
}

/// Displays toasts.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Asks the shopper to confirm a destructive action.
pub trait Confirmer {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Writes toasts to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, toast: Toast) {
        match toast.kind {
            ToastKind::Error => warn!(kind = toast.kind.class(), "{}", toast.message),
            ToastKind::Success => info!(kind = toast.kind.class(), "{}", toast.message),
        }
    }
}

/// Keeps every toast, for tests and for surfaces that render a toast log.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every toast shown so far, oldest first.
    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        crate::storage::lock(&self.toasts).clone()
    }

    /// The most recent toast.
    #[must_use]
    pub fn last(&self) -> Option<Toast> {
        crate::storage::lock(&self.toasts).last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        crate::storage::lock(&self.toasts).push(toast);
    }
}

/// Answers every prompt the same way.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl Confirmer for AutoConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_constructors_pick_kind() {
        let added = Toast::success(messages::ADDED);
        assert_eq!(added.kind, ToastKind::Success);
        assert_eq!(added.kind.class(), "success");

        let failed = Toast::error(messages::CART_FAILED);
        assert_eq!(failed.kind, ToastKind::Error);
        assert_eq!(failed.kind.class(), "error");
    }

    #[test]
    fn test_recording_notifier_keeps_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify(Toast::success(messages::ADDED));
        notifier.notify(Toast::success(messages::removed_named("Mug")));

        let texts: Vec<_> = notifier.toasts().into_iter().map(|t| t.message).collect();
        assert_eq!(texts, ["Added to wishlist", "Mug removed from wishlist"]);
        assert_eq!(notifier.last().unwrap().message, "Mug removed from wishlist");
    }
}
