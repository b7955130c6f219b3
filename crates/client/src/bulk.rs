//! Multi-step mutation flows.
//!
//! Bulk flows run one request at a time, count successes and failures, and
//! report both counts in a single summary toast. There is no retry; a
//! failed item is simply counted.

use serde::Serialize;

use camp_core::messages::WeekPlanner;
use camp_core::types::DbId;

use crate::api::CampApi;
use crate::error::ClientResult;
use crate::toast::Toaster;

/// Counts from a bulk flow. `success_count + error_count` always equals the
/// number of items attempted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BulkOutcome {
    pub success_count: usize,
    pub error_count: usize,
}

impl BulkOutcome {
    pub fn record<T, E>(&mut self, result: &Result<T, E>) {
        if result.is_ok() {
            self.success_count += 1;
        } else {
            self.error_count += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.success_count + self.error_count
    }

    pub fn is_clean(&self) -> bool {
        self.error_count == 0
    }

    /// e.g. `"Scheduled 5 messages"` or `"Scheduled 3 messages, 2 failed"`.
    pub fn summary(&self, verb: &str, noun: &str) -> String {
        let plural = if self.success_count == 1 { "" } else { "s" };
        if self.is_clean() {
            format!("{verb} {} {noun}{plural}", self.success_count)
        } else {
            format!(
                "{verb} {} {noun}{plural}, {} failed",
                self.success_count, self.error_count
            )
        }
    }

    fn toast(&self, toaster: &Toaster, verb: &str, noun: &str) {
        if self.total() == 0 {
            return;
        }
        let message = self.summary(verb, noun);
        if self.is_clean() {
            toaster.success(message);
        } else {
            toaster.error(message);
        }
    }
}

/// Schedule every draft in `planner`, one request per day.
///
/// Successfully scheduled days are removed from the planner so a retry
/// only resubmits the failures; a fully successful run leaves it empty.
/// Invalid drafts fail validation before any request is sent.
pub async fn schedule_week_messages<A>(
    api: &A,
    planner: &mut WeekPlanner,
    toaster: &Toaster,
) -> ClientResult<BulkOutcome>
where
    A: CampApi + ?Sized,
{
    let pending = planner.pending()?;
    let mut outcome = BulkOutcome::default();

    for message in &pending {
        let result = api.schedule_message(message).await;
        match &result {
            Ok(()) => planner.remove_draft(message.send_on),
            Err(e) => {
                tracing::warn!(send_on = %message.send_on, error = %e, "Failed to schedule message");
            }
        }
        outcome.record(&result);
    }

    tracing::info!(
        camper_id = planner.camper_id(),
        scheduled = outcome.success_count,
        failed = outcome.error_count,
        "Weekly messages submitted",
    );
    outcome.toast(toaster, "Scheduled", "message");
    Ok(outcome)
}

/// Re-run face processing for each photo id in order.
pub async fn reprocess_photos<A>(api: &A, photo_ids: &[DbId], toaster: &Toaster) -> BulkOutcome
where
    A: CampApi + ?Sized,
{
    let mut outcome = BulkOutcome::default();

    for &id in photo_ids {
        let result = api.reprocess_photo(id).await;
        if let Err(e) = &result {
            tracing::warn!(photo_id = id, error = %e, "Failed to queue photo reprocessing");
        }
        outcome.record(&result);
    }

    tracing::info!(
        queued = outcome.success_count,
        failed = outcome.error_count,
        "Photo reprocessing submitted",
    );
    outcome.toast(toaster, "Queued", "photo");
    outcome
}
