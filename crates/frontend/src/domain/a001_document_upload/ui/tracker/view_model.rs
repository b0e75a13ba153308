//! Document Upload - View Model

use super::model::upload_document;
use crate::shared::http::{ApiError, RequestHandle};
use crate::shared::in_flight::InFlight;
use chrono::Utc;
use contracts::domain::a001_document_upload::aggregate::{
    is_pdf_file, UploadEvent, UploadId, UploadTracker,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

#[derive(Clone, Copy)]
pub struct UploadTrackerVm {
    pub tracker: RwSignal<UploadTracker>,
    in_flight: StoredValue<InFlight<UploadId, RequestHandle>, LocalStorage>,
}

impl UploadTrackerVm {
    pub fn new() -> Self {
        Self {
            tracker: RwSignal::new(UploadTracker::new()),
            in_flight: StoredValue::new_local(InFlight::new()),
        }
    }

    fn dispatch(&self, event: UploadEvent) {
        // The pane may be gone by the time a request settles.
        let _ = self
            .tracker
            .try_update(|tracker| *tracker = tracker.apply(&event));
    }

    /// Track `file` and start its upload. Non-PDF files are skipped.
    pub fn submit(&self, file: File) {
        let file_name = file.name();
        if !is_pdf_file(&file_name, &file.type_()) {
            log::warn!("skipping '{}': not a PDF ({})", file_name, file.type_());
            return;
        }

        let id = UploadId::new_v4();
        self.dispatch(UploadEvent::Selected {
            id,
            file_name: file_name.clone(),
            started_at: Utc::now(),
        });

        let handle = match RequestHandle::new() {
            Ok(handle) => handle,
            Err(e) => {
                log::error!("upload of '{}' not started: {}", file_name, e);
                self.dispatch(UploadEvent::Settled {
                    id,
                    succeeded: false,
                });
                return;
            }
        };
        self.in_flight
            .update_value(|in_flight| in_flight.track(id, handle.clone()));

        let vm = *self;
        spawn_local(async move {
            let result = upload_document(file, &handle).await;
            let _ = vm.in_flight.try_update_value(|in_flight| in_flight.settle(&id));

            match &result {
                Ok(()) => log::info!("uploaded '{}'", file_name),
                Err(ApiError::Cancelled) => log::info!("upload of '{}' cancelled", file_name),
                Err(e) => log::warn!("upload of '{}' failed: {}", file_name, e),
            }
            // A dismissed record is gone from the tracker, so this is dropped.
            vm.dispatch(UploadEvent::Settled {
                id,
                succeeded: result.is_ok(),
            });
        });
    }

    /// Dismiss a record, aborting its request if still running
    pub fn remove(&self, id: UploadId) {
        self.in_flight.update_value(|in_flight| {
            in_flight.abort(&id);
        });
        self.dispatch(UploadEvent::Dismissed { id });
    }

    /// Clear a failed record so the file can be picked again.
    ///
    /// Returns false, leaving the tracker as is, unless the record had failed.
    pub fn retry(&self, id: UploadId) -> bool {
        let failed = self.tracker.with_untracked(|tracker| tracker.can_retry(id));
        self.dispatch(UploadEvent::RetryRequested { id });
        failed
    }

    /// Abort every running upload
    pub fn cancel_all(&self) {
        self.in_flight.update_value(|in_flight| in_flight.abort_all());
    }
}
