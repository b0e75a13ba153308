use crate::domain::common::AggregateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// MIME type accepted by the upload picker
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Multipart field name the backend expects the document under
pub const UPLOAD_FIELD_NAME: &str = "files";

/// Id of a tracked upload, assigned when the file is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UploadId(pub Uuid);

impl UploadId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for UploadId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(UploadId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Upload lifecycle of a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UploadStatus {
    Uploading,
    Succeeded,
    Failed,
}

impl UploadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadStatus::Uploading => "uploading",
            UploadStatus::Succeeded => "succeeded",
            UploadStatus::Failed => "failed",
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, UploadStatus::Uploading)
    }
}

/// One tracked file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadRecord {
    pub id: UploadId,
    pub file_name: String,
    pub upload_started_at: DateTime<Utc>,
    pub status: UploadStatus,
}

impl UploadRecord {
    pub fn uploading(id: UploadId, file_name: impl Into<String>, started_at: DateTime<Utc>) -> Self {
        Self {
            id,
            file_name: file_name.into(),
            upload_started_at: started_at,
            status: UploadStatus::Uploading,
        }
    }
}

/// Events that drive the upload tracker
#[derive(Debug, Clone, PartialEq)]
pub enum UploadEvent {
    /// A file was picked; its request is about to be issued
    Selected {
        id: UploadId,
        file_name: String,
        started_at: DateTime<Utc>,
    },
    /// The request for `id` resolved (`succeeded`) or rejected
    Settled { id: UploadId, succeeded: bool },
    /// The user dismissed the record
    Dismissed { id: UploadId },
    /// The user asked to retry a failed record
    RetryRequested { id: UploadId },
}

/// State of the upload pane.
///
/// Every transition returns a new tracker; the previous value is never
/// mutated, so a view holding the old collection stays consistent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadTracker {
    records: Vec<UploadRecord>,
}

impl UploadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[UploadRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: UploadId) -> Option<&UploadRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn count(&self, status: UploadStatus) -> usize {
        self.records.iter().filter(|r| r.status == status).count()
    }

    /// Only failed records can be retried
    pub fn can_retry(&self, id: UploadId) -> bool {
        self.get(id)
            .map_or(false, |r| r.status == UploadStatus::Failed)
    }

    /// Apply one event and return the resulting tracker.
    ///
    /// A settle for an unknown id (dismissed while in flight) is dropped, and
    /// a record leaves `Uploading` at most once.
    pub fn apply(&self, event: &UploadEvent) -> Self {
        match event {
            UploadEvent::Selected {
                id,
                file_name,
                started_at,
            } => {
                if self.get(*id).is_some() {
                    return self.clone();
                }
                let mut records = self.records.clone();
                records.push(UploadRecord::uploading(*id, file_name.clone(), *started_at));
                Self { records }
            }
            UploadEvent::Settled { id, succeeded } => {
                let status = if *succeeded {
                    UploadStatus::Succeeded
                } else {
                    UploadStatus::Failed
                };
                let records = self
                    .records
                    .iter()
                    .map(|r| {
                        if r.id == *id && r.status == UploadStatus::Uploading {
                            UploadRecord {
                                status,
                                ..r.clone()
                            }
                        } else {
                            r.clone()
                        }
                    })
                    .collect();
                Self { records }
            }
            UploadEvent::Dismissed { id } => Self {
                records: self
                    .records
                    .iter()
                    .filter(|r| r.id != *id)
                    .cloned()
                    .collect(),
            },
            UploadEvent::RetryRequested { id } => Self {
                records: self
                    .records
                    .iter()
                    .filter(|r| !(r.id == *id && r.status == UploadStatus::Failed))
                    .cloned()
                    .collect(),
            },
        }
    }
}

/// Whether a picked file may be uploaded.
///
/// The picker's `accept` attribute is only a hint, so the MIME type or the
/// extension is checked again before a record is created.
pub fn is_pdf_file(file_name: &str, mime_type: &str) -> bool {
    if mime_type.eq_ignore_ascii_case(PDF_MIME_TYPE) {
        return true;
    }
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}
