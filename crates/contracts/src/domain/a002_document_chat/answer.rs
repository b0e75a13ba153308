//! Compatibility shim for the backend's `/chat/` response.
//!
//! Backend revisions disagree on field names, so every logical value is read
//! through an ordered list of accepted keys; the first key that is present
//! with a usable value wins.
//!
//! | value     | accepted keys, in order            |
//! |-----------|------------------------------------|
//! | answer    | `answer`, `response`, `content`    |
//! | citations | `sources`, `documents`, `refs`     |
//!
//! Citation entries are either plain strings or objects carrying
//! `title` / `source` and an optional `page`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Keys the answer text may arrive under
pub const ANSWER_FIELDS: [&str; 3] = ["answer", "response", "content"];

/// Keys the citation list may arrive under
pub const CITATION_FIELDS: [&str; 3] = ["sources", "documents", "refs"];

/// Multipart field name carrying the question
pub const QUESTION_FIELD_NAME: &str = "question";

/// Display text for a citation with neither title nor source
pub const UNKNOWN_SOURCE: &str = "Unknown source";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnswerError {
    #[error("response body is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("response body is not a JSON object")]
    NotAnObject,

    #[error("response carries none of the answer fields {0:?}")]
    MissingAnswer(&'static [&'static str]),
}

/// Page reference; backends send numbers or labels
#[derive(Debug, Clone, PartialEq)]
pub enum PageRef {
    Number(i64),
    Float(f64),
    Label(String),
}

impl PageRef {
    /// Read a page value; anything but a finite number or a string is absent
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => match n.as_i64() {
                Some(i) => Some(PageRef::Number(i)),
                None => n.as_f64().filter(|f| f.is_finite()).map(PageRef::Float),
            },
            Value::String(s) => Some(PageRef::Label(s.clone())),
            _ => None,
        }
    }

    fn display(&self) -> Option<String> {
        match self {
            PageRef::Number(n) => Some(n.to_string()),
            PageRef::Float(f) if f.fract() == 0.0 => Some(format!("{:.0}", f)),
            PageRef::Float(f) => Some(f.to_string()),
            PageRef::Label(s) => {
                let s = s.trim();
                (!s.is_empty()).then(|| s.to_string())
            }
        }
    }
}

/// Structured citation object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CitationRef {
    pub title: Option<String>,
    pub source: Option<String>,
    pub page: Option<PageRef>,
}

/// One entry of the citation list as sent by the backend
#[derive(Debug, Clone, PartialEq)]
pub enum CitationEntry {
    Plain(String),
    Structured(CitationRef),
}

impl CitationEntry {
    /// Read one entry field by field, so a mistyped field only loses itself.
    ///
    /// Returns `None` for entries that are neither a string nor an object.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(CitationEntry::Plain(text.clone())),
            Value::Object(object) => {
                let text = |key: &str| object.get(key).and_then(Value::as_str).map(str::to_string);
                Some(CitationEntry::Structured(CitationRef {
                    title: text("title"),
                    source: text("source"),
                    page: object.get("page").and_then(PageRef::from_value),
                }))
            }
            _ => None,
        }
    }

    /// Render the entry as a single display string
    pub fn display(&self) -> String {
        match self {
            CitationEntry::Plain(text) => text.clone(),
            CitationEntry::Structured(citation) => {
                let title = [&citation.title, &citation.source]
                    .into_iter()
                    .flatten()
                    .map(|s| s.trim())
                    .find(|s| !s.is_empty())
                    .unwrap_or(UNKNOWN_SOURCE);
                match citation.page.as_ref().and_then(PageRef::display) {
                    Some(page) => format!("{} (Page {})", title, page),
                    None => title.to_string(),
                }
            }
        }
    }
}

/// Answer mapped into the client model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatAnswer {
    pub answer: String,
    pub sources: Vec<String>,
}

/// Map a raw response body into a [`ChatAnswer`]
pub fn parse_chat_response(body: &str) -> Result<ChatAnswer, AnswerError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| AnswerError::InvalidJson(e.to_string()))?;
    chat_answer_from_value(&value)
}

/// Map an already-decoded response into a [`ChatAnswer`]
pub fn chat_answer_from_value(value: &Value) -> Result<ChatAnswer, AnswerError> {
    let object = value.as_object().ok_or(AnswerError::NotAnObject)?;

    let answer = ANSWER_FIELDS
        .iter()
        .find_map(|key| object.get(*key).and_then(Value::as_str))
        .ok_or(AnswerError::MissingAnswer(&ANSWER_FIELDS))?
        .to_string();

    let sources = CITATION_FIELDS
        .iter()
        .find_map(|key| object.get(*key).and_then(Value::as_array))
        .map(|entries| normalize_citations(entries))
        .unwrap_or_default();

    Ok(ChatAnswer { answer, sources })
}

/// Render every well-formed entry; entries that are neither a string nor an
/// object are skipped.
pub fn normalize_citations(entries: &[Value]) -> Vec<String> {
    entries
        .iter()
        .filter_map(CitationEntry::from_value)
        .map(|entry| entry.display())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn display(value: Value) -> String {
        CitationEntry::from_value(&value).unwrap().display()
    }

    #[test]
    fn test_citation_with_title_and_page() {
        assert_eq!(display(json!({"title": "Doc A", "page": 3})), "Doc A (Page 3)");
    }

    #[test]
    fn test_citation_with_source_only() {
        assert_eq!(display(json!({"source": "Doc B"})), "Doc B");
    }

    #[test]
    fn test_empty_citation_object() {
        assert_eq!(display(json!({})), "Unknown source");
    }

    #[test]
    fn test_plain_citation_unchanged() {
        assert_eq!(display(json!("raw string")), "raw string");
    }

    #[test]
    fn test_citation_title_wins_over_source() {
        assert_eq!(
            display(json!({"title": "Handbook", "source": "handbook.pdf", "page": "iv"})),
            "Handbook (Page iv)"
        );
    }

    #[test]
    fn test_citation_blank_title_falls_back_to_source() {
        assert_eq!(display(json!({"title": " ", "source": "b.pdf"})), "b.pdf");
    }

    #[test]
    fn test_citation_page_variants() {
        assert_eq!(display(json!({"title": "A", "page": 2.0})), "A (Page 2)");
        assert_eq!(display(json!({"title": "A", "page": null})), "A");
        assert_eq!(display(json!({"title": "A", "page": ""})), "A");
        assert_eq!(display(json!({"page": 7})), "Unknown source (Page 7)");
    }

    #[test]
    fn test_mistyped_page_only_drops_the_page() {
        assert_eq!(display(json!({"title": "policy.pdf", "page": true})), "policy.pdf");
        assert_eq!(display(json!({"title": "policy.pdf", "page": {"n": 2}})), "policy.pdf");
        assert_eq!(display(json!({"title": "policy.pdf", "page": [2]})), "policy.pdf");
    }

    #[test]
    fn test_mistyped_title_falls_back() {
        assert_eq!(display(json!({"title": 42, "source": "a.pdf", "page": 1})), "a.pdf (Page 1)");
        assert_eq!(display(json!({"title": 42, "page": 1})), "Unknown source (Page 1)");
    }

    #[test]
    fn test_large_whole_page_is_not_clamped() {
        assert_eq!(
            display(json!({"title": "big.pdf", "page": 1e20})),
            "big.pdf (Page 100000000000000000000)"
        );
    }

    #[test]
    fn test_mixed_citations_keep_every_object() {
        let answer = chat_answer_from_value(&json!({
            "answer": "x",
            "sources": [
                {"title": "policy.pdf", "page": true},
                {"title": 42, "page": 1},
                {"title": "big.pdf", "page": 3}
            ]
        }))
        .unwrap();
        assert_eq!(
            answer.sources,
            vec![
                "policy.pdf".to_string(),
                "Unknown source (Page 1)".to_string(),
                "big.pdf (Page 3)".to_string()
            ]
        );
    }

    #[test]
    fn test_parse_answer_with_sources() {
        let body = r#"{"answer": "Refunds within 30 days.", "sources": [{"title":"policy.pdf","page":2}]}"#;
        let answer = parse_chat_response(body).unwrap();
        assert_eq!(answer.answer, "Refunds within 30 days.");
        assert_eq!(answer.sources, vec!["policy.pdf (Page 2)".to_string()]);
    }

    #[test]
    fn test_answer_field_precedence() {
        let answer =
            chat_answer_from_value(&json!({"content": "c", "response": "r", "answer": "a"})).unwrap();
        assert_eq!(answer.answer, "a");

        let answer = chat_answer_from_value(&json!({"content": "c", "response": "r"})).unwrap();
        assert_eq!(answer.answer, "r");

        let answer = chat_answer_from_value(&json!({"answer": null, "content": "c"})).unwrap();
        assert_eq!(answer.answer, "c");
    }

    #[test]
    fn test_citation_field_fallbacks() {
        let answer =
            chat_answer_from_value(&json!({"response": "x", "documents": ["a", {"source": "b"}]}))
                .unwrap();
        assert_eq!(answer.sources, vec!["a".to_string(), "b".to_string()]);

        let answer = chat_answer_from_value(&json!({"answer": "x", "refs": [{"title": "r"}]})).unwrap();
        assert_eq!(answer.sources, vec!["r".to_string()]);
    }

    #[test]
    fn test_unusable_citation_entries_are_skipped() {
        let answer = chat_answer_from_value(&json!({"answer": "x", "sources": [1, "ok", null]})).unwrap();
        assert_eq!(answer.sources, vec!["ok".to_string()]);
    }

    #[test]
    fn test_missing_answer_is_an_error() {
        let err = chat_answer_from_value(&json!({"sources": []})).unwrap_err();
        assert_eq!(err, AnswerError::MissingAnswer(&ANSWER_FIELDS));
    }

    #[test]
    fn test_malformed_bodies() {
        assert!(matches!(
            parse_chat_response("<html>502</html>"),
            Err(AnswerError::InvalidJson(_))
        ));
        assert_eq!(parse_chat_response("[1,2]"), Err(AnswerError::NotAnObject));
    }
}
