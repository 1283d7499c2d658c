use serde::Deserialize;
use serde_json::Value;

use crate::domain::error::ChatError;

/// Minimal subset of the `generateContent` response we care about:
/// `{"candidates":[{"content":{"parts":[{"text": ...}]}}]}`.
#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: String,
}

/// Pull the reply text out of a decoded provider response.
///
/// Attempts a typed decode of the expected shape and returns the first
/// candidate's first part verbatim — no trimming, no re-encoding. Any
/// missing key, wrong type, or empty list yields a [`ChatError::Schema`]
/// carrying the full raw body, so the end user can always inspect what the
/// provider actually sent.
///
/// Pure function: no I/O, no logging, independently testable.
pub fn extract_reply(raw: &Value) -> Result<String, ChatError> {
    let schema_err = || ChatError::schema(raw.to_string());

    let response: GenerateResponse =
        serde_json::from_value(raw.clone()).map_err(|_| schema_err())?;

    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().next())
        .map(|part| part.text)
        .ok_or_else(schema_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::SCHEMA_ERROR_PREFIX;
    use serde_json::json;

    #[test]
    fn well_formed_response_extracts_text_verbatim() {
        let raw = json!({"candidates":[{"content":{"parts":[{"text":"hello"}]}}]});
        assert_eq!(extract_reply(&raw).expect("reply"), "hello");
    }

    #[test]
    fn text_is_not_trimmed() {
        let raw = json!({"candidates":[{"content":{"parts":[{"text":"  hi \n"}]}}]});
        assert_eq!(extract_reply(&raw).expect("reply"), "  hi \n");
    }

    #[test]
    fn first_part_of_first_candidate_wins() {
        let raw = json!({"candidates":[
            {"content":{"parts":[{"text":"first"},{"text":"second"}]}},
            {"content":{"parts":[{"text":"other candidate"}]}}
        ]});
        assert_eq!(extract_reply(&raw).expect("reply"), "first");
    }

    #[test]
    fn empty_candidates_yield_schema_error_with_raw_body() {
        let raw = json!({"candidates": []});
        let err = extract_reply(&raw).expect_err("schema error");
        assert!(err.is_schema());

        let text = err.to_string();
        assert!(text.contains(SCHEMA_ERROR_PREFIX));
        assert!(text.contains(r#"{"candidates":[]}"#));
    }

    #[test]
    fn empty_parts_yield_schema_error() {
        let raw = json!({"candidates":[{"content":{"parts":[]}}]});
        assert!(extract_reply(&raw).expect_err("schema error").is_schema());
    }

    #[test]
    fn missing_content_yields_schema_error() {
        let raw = json!({"candidates":[{"finishReason":"SAFETY"}]});
        assert!(extract_reply(&raw).expect_err("schema error").is_schema());
    }

    #[test]
    fn non_object_body_yields_schema_error_with_raw_body() {
        let raw = json!("not even an object");
        let err = extract_reply(&raw).expect_err("schema error");
        assert!(err.to_string().contains("not even an object"));
    }

    #[test]
    fn wrong_part_type_yields_schema_error() {
        let raw = json!({"candidates":[{"content":{"parts":[{"text": 42}]}}]});
        assert!(extract_reply(&raw).expect_err("schema error").is_schema());
    }
}
