//! User-facing notifications.
//!
//! Flows push [`Toast`]s into a [`Toaster`]; whatever renders them owns the
//! receiving end of the channel.

use serde::Serialize;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

/// Sending half of the toast channel. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Toaster {
    tx: mpsc::UnboundedSender<Toast>,
}

impl Toaster {
    /// Create a toaster and the receiver the UI drains.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Toast>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        if self.tx.send(Toast { kind, message }).is_err() {
            tracing::debug!(?kind, "Toast dropped: no receiver");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_arrive_in_order() {
        let (toaster, mut rx) = Toaster::channel();
        toaster.success("Saved");
        toaster.error("Failed to save event");
        assert_eq!(rx.try_recv().unwrap().kind, ToastKind::Success);
        let second = rx.try_recv().unwrap();
        assert_eq!(second.kind, ToastKind::Error);
        assert_eq!(second.message, "Failed to save event");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn dropped_receiver_does_not_panic() {
        let (toaster, rx) = Toaster::channel();
        drop(rx);
        toaster.success("nobody listening");
    }
}
