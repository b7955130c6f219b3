//! Sequential photo upload with progress reporting.
//!
//! Files are uploaded one at a time. After each file settles, success or
//! failure, progress is reported as `completed / total * 100`. A failed
//! file is recorded and the batch moves on.

use camp_core::photos::Photo;
use camp_core::rates::{bar_width, rate};

use crate::api::{CampApi, UploadFile};
use crate::toast::Toaster;

/// A file that could not be uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedUpload {
    pub file_name: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct UploadReport {
    pub uploaded: Vec<Photo>,
    pub failed: Vec<FailedUpload>,
}

impl UploadReport {
    pub fn total(&self) -> usize {
        self.uploaded.len() + self.failed.len()
    }

    pub fn summary(&self) -> String {
        let count = self.uploaded.len();
        let plural = if count == 1 { "" } else { "s" };
        if self.failed.is_empty() {
            format!("Uploaded {count} photo{plural}")
        } else {
            format!("Uploaded {count} photo{plural}, {} failed", self.failed.len())
        }
    }
}

/// Upload progress as a whole percentage in `[0, 100]`.
pub fn progress_percent(completed: usize, total: usize) -> u8 {
    bar_width(rate(completed as i64, total as i64))
}

/// Upload `files` in order, calling `on_progress` after each one settles.
pub async fn upload_sequential<A, P>(api: &A, files: &[UploadFile], mut on_progress: P) -> UploadReport
where
    A: CampApi + ?Sized,
    P: FnMut(u8),
{
    let total = files.len();
    let mut report = UploadReport::default();

    for (index, file) in files.iter().enumerate() {
        match api.upload_photo(file).await {
            Ok(photo) => {
                tracing::debug!(file_name = %file.file_name, photo_id = photo.id, "Photo uploaded");
                report.uploaded.push(photo);
            }
            Err(e) => {
                tracing::warn!(file_name = %file.file_name, error = %e, "Photo upload failed");
                report.failed.push(FailedUpload {
                    file_name: file.file_name.clone(),
                    error: e.to_string(),
                });
            }
        }
        on_progress(progress_percent(index + 1, total));
    }

    tracing::info!(
        uploaded = report.uploaded.len(),
        failed = report.failed.len(),
        "Photo upload batch finished",
    );
    report
}

/// Run an upload batch and emit one summary toast.
pub async fn upload_with_toast<A, P>(
    api: &A,
    files: &[UploadFile],
    toaster: &Toaster,
    on_progress: P,
) -> UploadReport
where
    A: CampApi + ?Sized,
    P: FnMut(u8),
{
    let report = upload_sequential(api, files, on_progress).await;
    if report.total() == 0 {
        return report;
    }
    if report.failed.is_empty() {
        toaster.success(report.summary());
    } else {
        toaster.error(report.summary());
    }
    report
}
