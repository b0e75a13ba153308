//! Document Chat - View Model

use super::model::ask_question;
use crate::shared::date_utils::now_clock_time;
use crate::shared::http::{ApiError, RequestHandle};
use contracts::domain::a002_document_chat::aggregate::{
    ChatEvent, ChatSession as ChatSessionState,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Enter sends; Shift+Enter is a newline and Enter during IME composition
/// confirms the candidate.
pub fn is_send_key(key: &str, shift: bool, composing: bool) -> bool {
    key == "Enter" && !shift && !composing
}

#[derive(Clone, Copy)]
pub struct ChatSessionVm {
    pub session: RwSignal<ChatSessionState>,
    pub draft: RwSignal<String>,
    in_flight: StoredValue<Option<RequestHandle>, LocalStorage>,
}

impl ChatSessionVm {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(ChatSessionState::new()),
            draft: RwSignal::new(String::new()),
            in_flight: StoredValue::new_local(None),
        }
    }

    pub fn is_sending(&self) -> bool {
        self.session.with(|session| session.is_sending())
    }

    pub fn can_send(&self) -> bool {
        let draft = self.draft.get();
        self.session.with(|session| session.accepts(&draft).is_some())
    }

    fn dispatch(&self, event: ChatEvent) {
        let _ = self
            .session
            .try_update(|session| *session = session.apply(event));
    }

    /// Send the current draft. Blank drafts and sends while a question is
    /// outstanding are ignored.
    pub fn send(&self) {
        let text = self.draft.get_untracked();
        let Some(question) = self
            .session
            .with_untracked(|session| session.accepts(&text))
        else {
            return;
        };

        self.draft.set(String::new());
        self.dispatch(ChatEvent::Submitted {
            text: question.clone(),
            timestamp: now_clock_time(),
        });

        let handle = match RequestHandle::new() {
            Ok(handle) => handle,
            Err(e) => {
                log::error!("chat request not started: {}", e);
                self.dispatch(ChatEvent::Failed {
                    timestamp: now_clock_time(),
                });
                return;
            }
        };
        self.in_flight.set_value(Some(handle.clone()));

        let vm = *self;
        spawn_local(async move {
            let result = ask_question(&question, &handle).await;
            let _ = vm.in_flight.try_set_value(None);

            let event = match result {
                Ok(answer) => {
                    log::info!("answer received with {} source(s)", answer.sources.len());
                    ChatEvent::Answered {
                        answer,
                        timestamp: now_clock_time(),
                    }
                }
                Err(ApiError::Cancelled) => {
                    log::info!("chat request cancelled");
                    ChatEvent::Failed {
                        timestamp: now_clock_time(),
                    }
                }
                Err(e) => {
                    log::warn!("chat request failed: {}", e);
                    ChatEvent::Failed {
                        timestamp: now_clock_time(),
                    }
                }
            };
            vm.dispatch(event);
        });
    }

    /// Abort the outstanding question, if any
    pub fn cancel(&self) {
        if let Some(Some(handle)) = self.in_flight.try_get_value() {
            handle.cancel();
        }
    }
}
