//! Payload validation
//!
//! Turns the text returned by the generator into trusted [`Event`]s. The
//! payload must decode as `{"rows": [...]}`; anything else is rejected,
//! while individual rows degrade gracefully to defaults.

use tracing::{debug, warn};

use crate::error::ValidationError;
use crate::models::{Event, RawPayload};

/// Parse and validate a generated payload.
pub fn validate(raw: &str) -> Result<Vec<Event>, ValidationError> {
    let body = strip_code_fence(raw.trim());

    let value: serde_json::Value = serde_json::from_str(body).map_err(malformed)?;
    if !value.is_object() {
        return Err(malformed("expected a JSON object at the top level"));
    }
    let payload: RawPayload = serde_json::from_value(value).map_err(malformed)?;

    let rows = match payload.rows {
        Some(rows) if !rows.is_empty() => rows,
        _ => return Err(ValidationError::EmptyResult),
    };

    let events: Vec<Event> = rows.into_iter().map(Event::from).collect();
    let unnamed = events.iter().filter(|e| e.is_unnamed()).count();
    if unnamed > 0 {
        warn!(unnamed, "rows without a name were defaulted");
    }
    debug!(count = events.len(), "validated payload");

    Ok(events)
}

fn malformed(reason: impl std::fmt::Display) -> ValidationError {
    warn!(%reason, "generated payload is not a valid rows object");
    ValidationError::MalformedPayload(reason.to_string())
}

/// Removes one surrounding Markdown fence (```` ``` ```` or ```` ```json ````).
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let Some(inner) = rest.strip_suffix("```") else {
        return text;
    };
    // Drop the info string (e.g. "json") on the opening line.
    match inner.split_once('\n') {
        Some((info, body)) if !info.trim().contains(['{', '[']) => body.trim(),
        _ => inner.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UNNAMED_EVENT;

    #[test]
    fn test_empty_rows_is_empty_result() {
        assert_eq!(validate(r#"{"rows": []}"#), Err(ValidationError::EmptyResult));
    }

    #[test]
    fn test_missing_or_null_rows_is_empty_result() {
        assert_eq!(validate("{}"), Err(ValidationError::EmptyResult));
        assert_eq!(validate(r#"{"rows": null}"#), Err(ValidationError::EmptyResult));
    }

    #[test]
    fn test_unparseable_text_is_malformed() {
        let err = validate("Sure! Here are some events:").unwrap_err();
        assert!(matches!(err, ValidationError::MalformedPayload(_)));
    }

    #[test]
    fn test_wrong_shapes_are_malformed() {
        for raw in [r#"[]"#, r#"{"rows": "none"}"#, r#"{"rows": [42]}"#, r#"{"rows":[{"labels":"x"}]}"#] {
            assert!(
                matches!(validate(raw), Err(ValidationError::MalformedPayload(_))),
                "expected malformed for {raw}"
            );
        }
    }

    #[test]
    fn test_missing_name_defaults_to_unnamed() {
        let events = validate(r#"{"rows":[{"labels":["x"]}]}"#).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name(), UNNAMED_EVENT);
        assert_eq!(events[0].labels(), ["x".to_string()]);
    }

    #[test]
    fn test_rows_keep_input_order_and_hint() {
        let raw = r#"{
            "rows": [
                {"name": "High Press Trigger", "labels": ["Left Zone", "Pass Forced"], "colour": "Red"},
                {"name": "Cutback Opportunity"}
            ]
        }"#;
        let events = validate(raw).unwrap();
        assert_eq!(events[0].name(), "High Press Trigger");
        assert_eq!(events[0].colour_hint(), Some("Red"));
        assert_eq!(events[1].name(), "Cutback Opportunity");
        assert!(events[1].labels().is_empty());
    }

    #[test]
    fn test_fenced_payload_is_accepted() {
        let raw = "```json\n{\"rows\":[{\"name\":\"Shot\"}]}\n```";
        assert_eq!(validate(raw).unwrap()[0].name(), "Shot");

        let bare = "```{\"rows\":[{\"name\":\"Goal\"}]}```";
        assert_eq!(validate(bare).unwrap()[0].name(), "Goal");
    }

    #[test]
    fn test_unclosed_fence_is_malformed() {
        let raw = "```json\n{\"rows\":[{\"name\":\"Shot\"}]}";
        assert!(matches!(validate(raw), Err(ValidationError::MalformedPayload(_))));
    }
}
