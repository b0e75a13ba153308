//! Backend transport
//!
//! Every request goes through a [`RequestHandle`] so it can be aborted by the
//! owner (record dismissed, view unmounted) and by its own timeout.

use super::api_utils::api_url;
use super::in_flight::Abort;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde_json::Value;
use std::cell::Cell;
use std::rc::Rc;
use thiserror::Error;
use web_sys::{AbortController, FormData};

/// Why a backend call did not produce a usable body.
///
/// The UI only distinguishes success from failure; the variant is logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("failed to build request: {0}")]
    Request(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("failed to parse response: {0}")]
    Parse(String),

    #[error("request timed out")]
    Timeout,

    #[error("request cancelled")]
    Cancelled,
}

/// Abort handle of one in-flight request
#[derive(Clone)]
pub struct RequestHandle {
    controller: AbortController,
}

impl RequestHandle {
    pub fn new() -> Result<Self, ApiError> {
        let controller =
            AbortController::new().map_err(|e| ApiError::Request(format!("{e:?}")))?;
        Ok(Self { controller })
    }

    /// Abort the request; a no-op once it has settled
    pub fn cancel(&self) {
        self.controller.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.controller.signal().aborted()
    }
}

impl Abort for RequestHandle {
    fn abort(&self) {
        self.cancel();
    }
}

/// POST a multipart form and decode the JSON body.
///
/// Non-2xx statuses, unreadable bodies and non-JSON bodies are errors. The
/// request is aborted when `timeout_ms` elapses.
pub async fn post_form(
    path: &str,
    form: FormData,
    handle: &RequestHandle,
    timeout_ms: u32,
) -> Result<Value, ApiError> {
    let url = api_url(path);
    let timed_out = Rc::new(Cell::new(false));
    let _timer = {
        let controller = handle.controller.clone();
        let timed_out = timed_out.clone();
        Timeout::new(timeout_ms, move || {
            timed_out.set(true);
            controller.abort();
        })
    };

    let signal = handle.controller.signal();
    let result = async {
        let response = Request::post(&url)
            .abort_signal(Some(&signal))
            .body(form)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        serde_json::from_str::<Value>(&text).map_err(|e| ApiError::Parse(e.to_string()))
    }
    .await;

    result.map_err(|err| classify(err, timed_out.get(), handle.is_cancelled()))
}

/// An aborted fetch surfaces as a network error; report why it was aborted.
fn classify(err: ApiError, timed_out: bool, aborted: bool) -> ApiError {
    match err {
        ApiError::Network(_) | ApiError::Request(_) if timed_out => ApiError::Timeout,
        ApiError::Network(_) | ApiError::Request(_) if aborted => ApiError::Cancelled,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abort_by_timer_is_a_timeout() {
        let err = classify(ApiError::Network("AbortError".into()), true, true);
        assert_eq!(err, ApiError::Timeout);
    }

    #[test]
    fn test_abort_by_owner_is_a_cancellation() {
        let err = classify(ApiError::Network("AbortError".into()), false, true);
        assert_eq!(err, ApiError::Cancelled);
    }

    #[test]
    fn test_other_errors_pass_through() {
        assert_eq!(classify(ApiError::Status(500), true, true), ApiError::Status(500));
        assert_eq!(
            classify(ApiError::Network("offline".into()), false, false),
            ApiError::Network("offline".into())
        );
        assert_eq!(
            classify(ApiError::Parse("eof".into()), false, false),
            ApiError::Parse("eof".into())
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ApiError::Status(502).to_string(), "HTTP 502");
        assert_eq!(ApiError::Timeout.to_string(), "request timed out");
    }
}
