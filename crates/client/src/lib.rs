//! `camp-client` library crate.
//!
//! The boundary between camp pages and the remote camp API: a typed API
//! trait and its HTTP implementation, query and mutation state, toasts,
//! and the multi-step flows (uploads, bulk scheduling, reprocessing).
//! The `camp-report` binary lives in `main.rs`.

pub mod api;
pub mod bulk;
pub mod config;
pub mod digest;
pub mod error;
pub mod http;
pub mod mutation;
pub mod query;
pub mod toast;
pub mod upload;
