//! Query state: `{ data, is_loading, error }` for one fetched resource.
//!
//! Derived computations read through [`QueryState::items`] or
//! [`QueryState::data_or_default`], so data that has not arrived (or failed
//! to arrive) is treated as the empty case instead of panicking.

use std::future::Future;

use crate::error::ClientResult;

#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            is_loading: false,
            error: None,
        }
    }
}

impl<T> QueryState<T> {
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    /// Mark a (re)fetch as started. Previously loaded data is kept.
    pub fn begin(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// Record the outcome of a fetch. A failure keeps any stale data but
    /// sets `error`; there is no retry.
    pub fn settle(&mut self, name: &str, result: ClientResult<T>) {
        self.is_loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(query = name, error = %e, "Query failed");
                self.error = Some(e.to_string());
            }
        }
    }

    /// Run a fetch to completion and return the settled state.
    pub async fn fetch<F>(name: &str, call: F) -> Self
    where
        F: Future<Output = ClientResult<T>>,
    {
        let mut state = Self::loading();
        state.settle(name, call.await);
        state
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn is_ready(&self) -> bool {
        self.data.is_some() && !self.is_loading
    }
}

impl<T: Default + Clone> QueryState<T> {
    pub fn data_or_default(&self) -> T {
        self.data.clone().unwrap_or_default()
    }
}

impl<U> QueryState<Vec<U>> {
    /// Loaded items, or an empty slice.
    pub fn items(&self) -> &[U] {
        self.data.as_deref().unwrap_or(&[])
    }
}
