//! Document Chat - Model (API functions)

use crate::shared::config::config;
use crate::shared::http::{post_form, ApiError, RequestHandle};
use contracts::domain::a002_document_chat::answer::{
    chat_answer_from_value, ChatAnswer, QUESTION_FIELD_NAME,
};
use web_sys::FormData;

/// Ask the backend a question about the uploaded documents
pub async fn ask_question(question: &str, handle: &RequestHandle) -> Result<ChatAnswer, ApiError> {
    let form_data = FormData::new().map_err(|e| ApiError::Request(format!("{e:?}")))?;
    form_data
        .append_with_str(QUESTION_FIELD_NAME, question)
        .map_err(|e| ApiError::Request(format!("{e:?}")))?;

    let body = post_form("/chat/", form_data, handle, config().chat_timeout_ms).await?;
    chat_answer_from_value(&body).map_err(|e| ApiError::Parse(e.to_string()))
}
