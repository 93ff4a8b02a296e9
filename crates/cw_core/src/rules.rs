//! Ordered keyword rule tables
//!
//! A table is a list of (predicate, outcome) pairs evaluated top to bottom
//! against the lowercased event name. The first matching rule wins; when
//! nothing matches the table's explicit default is returned. Keywords are
//! stored lowercase.

use serde::Serialize;

/// Version of the built-in rule tables. Bump when any keyword or order changes.
pub const RULESET_VERSION: u32 = 1;

/// Substring predicate over a lowercased name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "match", content = "keywords", rename_all = "snake_case")]
pub enum KeywordMatch {
    /// At least one keyword occurs
    Any(&'static [&'static str]),
    /// Every keyword occurs
    All(&'static [&'static str]),
}

impl KeywordMatch {
    pub fn matches(&self, lowered: &str) -> bool {
        match self {
            KeywordMatch::Any(keywords) => keywords.iter().any(|k| lowered.contains(k)),
            KeywordMatch::All(keywords) => keywords.iter().all(|k| lowered.contains(k)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeywordRule<T> {
    pub when: KeywordMatch,
    pub then: T,
}

impl<T> KeywordRule<T> {
    pub const fn any(keywords: &'static [&'static str], then: T) -> Self {
        Self { when: KeywordMatch::Any(keywords), then }
    }

    pub const fn all(keywords: &'static [&'static str], then: T) -> Self {
        Self { when: KeywordMatch::All(keywords), then }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RuleTable<T: 'static> {
    pub rules: &'static [KeywordRule<T>],
    pub default: T,
}

impl<T: Copy + 'static> RuleTable<T> {
    pub const fn new(rules: &'static [KeywordRule<T>], default: T) -> Self {
        Self { rules, default }
    }

    /// Outcome of the first matching rule, or the default.
    pub fn resolve(&self, name: &str) -> T {
        let lowered = name.to_lowercase();
        self.resolve_lowered(&lowered)
    }

    /// Same as [`resolve`](Self::resolve) for a name that is already lowercase.
    pub fn resolve_lowered(&self, lowered: &str) -> T {
        self.rules
            .iter()
            .find(|rule| rule.when.matches(lowered))
            .map_or(self.default, |rule| rule.then)
    }

    /// Index of the rule that fires for `name`, `None` when the default applies.
    pub fn matching_rule(&self, name: &str) -> Option<usize> {
        let lowered = name.to_lowercase();
        self.rules.iter().position(|rule| rule.when.matches(&lowered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static RULES: [KeywordRule<u8>; 3] = [
        KeywordRule::any(&["goal kick"], 1),
        KeywordRule::any(&["goal"], 2),
        KeywordRule::all(&["corner", "left"], 3),
    ];
    static TABLE: RuleTable<u8> = RuleTable::new(&RULES, 0);

    #[test]
    fn test_first_match_wins() {
        assert_eq!(TABLE.resolve("Goal Kick"), 1);
        assert_eq!(TABLE.resolve("GOAL"), 2);
    }

    #[test]
    fn test_all_requires_every_keyword() {
        assert_eq!(TABLE.resolve("left corner"), 3);
        assert_eq!(TABLE.resolve("corner"), 0);
    }

    #[test]
    fn test_matching_rule_index() {
        assert_eq!(TABLE.matching_rule("goal kick"), Some(0));
        assert_eq!(TABLE.matching_rule("throw-in"), None);
    }

    #[test]
    fn test_table_serializes_in_order() {
        let json = serde_json::to_value(TABLE).unwrap();
        assert_eq!(json["rules"][0]["when"]["match"], "any");
        assert_eq!(json["rules"][0]["when"]["keywords"][0], "goal kick");
        assert_eq!(json["rules"][2]["when"]["match"], "all");
        assert_eq!(json["rules"][2]["then"], 3);
        assert_eq!(json["default"], 0);
    }
}
