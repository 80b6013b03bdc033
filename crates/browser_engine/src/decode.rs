use serde::Deserialize;

use crate::{Question, QuestionPage};

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("response body is not a valid question page: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct WirePage {
    #[serde(default)]
    questions: Option<Vec<Question>>,
    total: u64,
}

/// Decode a `{ "questions": [...], "total": n }` body.
///
/// A missing or `null` `questions` field is an empty page, not an error.
pub fn decode_page(bytes: &[u8]) -> Result<QuestionPage, DecodeError> {
    let wire: WirePage = serde_json::from_slice(bytes)?;
    Ok(QuestionPage {
        questions: wire.questions.unwrap_or_default(),
        total: wire.total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_questions_and_total() {
        let body = br#"{"questions":[{"title":"Banana Bread","type":"MCQ"}],"total":12}"#;
        let page = decode_page(body).expect("valid body");
        assert_eq!(page.total, 12);
        assert_eq!(
            page.questions,
            vec![Question {
                title: "Banana Bread".to_string(),
                kind: "MCQ".to_string(),
            }]
        );
    }

    #[test]
    fn missing_questions_is_empty() {
        let page = decode_page(br#"{ "total": 12 }"#).expect("valid body");
        assert!(page.questions.is_empty());
        assert_eq!(page.total, 12);

        let page = decode_page(br#"{ "questions": null, "total": 0 }"#).expect("valid body");
        assert!(page.questions.is_empty());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let body = br#"{"questions":[{"title":"t","type":"ANAGRAM","id":"x1"}],"total":1,"page":1}"#;
        assert_eq!(decode_page(body).expect("valid body").questions.len(), 1);
    }

    #[test]
    fn rejects_missing_total_and_garbage() {
        assert!(decode_page(br#"{"questions":[]}"#).is_err());
        assert!(decode_page(br#"{"questions":[],"total":-1}"#).is_err());
        assert!(decode_page(b"<html>busy</html>").is_err());
        assert!(decode_page(b"").is_err());
    }
}
