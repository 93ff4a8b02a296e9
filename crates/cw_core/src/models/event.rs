//! Event records: the trusted internal model and the untrusted wire shape it is built from.

use serde::{Deserialize, Serialize};

/// Name given to rows that arrive without one.
pub const UNNAMED_EVENT: &str = "Unnamed";

/// One taggable tactical action.
///
/// Built by the validator; fields are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    name: String,
    labels: Vec<String>,
    /// Advisory colour from the generator. Never used for colour resolution.
    #[serde(skip_serializing_if = "Option::is_none")]
    colour_hint: Option<String>,
}

impl Event {
    pub fn new(name: impl Into<String>, labels: Vec<String>) -> Self {
        let name = name.into();
        let name = match name.trim() {
            "" => UNNAMED_EVENT.to_string(),
            trimmed => trimmed.to_string(),
        };
        Self { name, labels, colour_hint: None }
    }

    pub fn with_colour_hint(mut self, hint: impl Into<String>) -> Self {
        self.colour_hint = Some(hint.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn colour_hint(&self) -> Option<&str> {
        self.colour_hint.as_deref()
    }

    pub fn is_unnamed(&self) -> bool {
        self.name == UNNAMED_EVENT
    }
}

/// Top-level object expected from the text generator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPayload {
    #[serde(default)]
    pub rows: Option<Vec<RawRow>>,
}

/// One loosely-typed row as produced by the generator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRow {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    #[serde(default, alias = "color")]
    pub colour: Option<String>,
}

impl From<RawRow> for Event {
    fn from(row: RawRow) -> Self {
        let event = Event::new(row.name.unwrap_or_default(), row.labels.unwrap_or_default());
        match row.colour {
            Some(hint) => event.with_colour_hint(hint),
            None => event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_becomes_unnamed() {
        assert_eq!(Event::new("   ", vec![]).name(), UNNAMED_EVENT);
        assert!(Event::new("", vec![]).is_unnamed());
    }

    #[test]
    fn test_name_is_trimmed() {
        assert_eq!(Event::new("  High Press  ", vec![]).name(), "High Press");
    }

    #[test]
    fn test_raw_row_defaults() {
        let row: RawRow = serde_json::from_str(r#"{"labels":["x"]}"#).unwrap();
        let event = Event::from(row);
        assert_eq!(event.name(), UNNAMED_EVENT);
        assert_eq!(event.labels(), ["x".to_string()]);
        assert_eq!(event.colour_hint(), None);
    }

    #[test]
    fn test_color_alias_kept_as_hint() {
        let row: RawRow = serde_json::from_str(r#"{"name":"Shot","color":"Red"}"#).unwrap();
        let event = Event::from(row);
        assert_eq!(event.colour_hint(), Some("Red"));
        assert!(event.labels().is_empty());
    }
}
