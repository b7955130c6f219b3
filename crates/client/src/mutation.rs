//! Mutation state: the only concurrency discipline the client applies.
//!
//! A [`Mutation`] is pending from the moment an attempt starts until its
//! future settles. While pending, further attempts are rejected with
//! [`ClientError::AlreadyPending`] and never reach the API. Each settled
//! attempt emits exactly one toast.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{ClientError, ClientResult};
use crate::toast::Toaster;

pub struct Mutation {
    name: String,
    success_message: String,
    failure_message: String,
    pending: AtomicBool,
    toaster: Toaster,
}

/// Clears the pending flag even if the attempt's future is dropped early.
struct PendingGuard<'a>(&'a AtomicBool);

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Mutation {
    pub fn new(
        name: impl Into<String>,
        success_message: impl Into<String>,
        failure_message: impl Into<String>,
        toaster: Toaster,
    ) -> Self {
        Self {
            name: name.into(),
            success_message: success_message.into(),
            failure_message: failure_message.into(),
            pending: AtomicBool::new(false),
            toaster,
        }
    }

    /// "`<Entity>` saved" / "Failed to save `<entity>`".
    pub fn save(entity: &str, toaster: Toaster) -> Self {
        let mut label = entity.to_string();
        if let Some(first) = label.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        Self::new(
            format!("save_{}", entity.replace(' ', "_")),
            format!("{label} saved"),
            format!("Failed to save {entity}"),
            toaster,
        )
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Run one attempt.
    ///
    /// `call` is not polled when another attempt is in flight, so the API
    /// is never reached for a rejected attempt.
    pub async fn run<T, F>(&self, call: F) -> ClientResult<T>
    where
        F: Future<Output = ClientResult<T>>,
    {
        if self.pending.swap(true, Ordering::AcqRel) {
            tracing::debug!(mutation = %self.name, "Mutation already pending; ignoring attempt");
            return Err(ClientError::AlreadyPending);
        }
        let guard = PendingGuard(&self.pending);
        let result = call.await;
        drop(guard);

        match &result {
            Ok(_) => {
                tracing::info!(mutation = %self.name, "Mutation succeeded");
                self.toaster.success(self.success_message.clone());
            }
            Err(e) => {
                tracing::warn!(mutation = %self.name, error = %e, "Mutation failed");
                self.toaster.error(self.failure_message.clone());
            }
        }
        result
    }
}
