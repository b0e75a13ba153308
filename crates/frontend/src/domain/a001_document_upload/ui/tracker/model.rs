//! Document Upload - Model (API functions)

use crate::shared::config::config;
use crate::shared::http::{post_form, ApiError, RequestHandle};
use contracts::domain::a001_document_upload::aggregate::UPLOAD_FIELD_NAME;
use web_sys::{File, FormData};

/// Upload one PDF to the backend's ingestion endpoint.
///
/// Any 2xx with a JSON body counts as accepted; the body itself is only logged.
pub async fn upload_document(file: File, handle: &RequestHandle) -> Result<(), ApiError> {
    let form_data = FormData::new().map_err(|e| ApiError::Request(format!("{e:?}")))?;
    form_data
        .append_with_blob_and_filename(UPLOAD_FIELD_NAME, &file, &file.name())
        .map_err(|e| ApiError::Request(format!("{e:?}")))?;

    let body = post_form("/upload/", form_data, handle, config().upload_timeout_ms).await?;
    log::debug!("upload response for '{}': {}", file.name(), body);

    Ok(())
}
