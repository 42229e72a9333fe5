// SPDX-License-Identifier: MPL-2.0

//! User-configured keyword filters.
//!
//! A rule hides a post when its phrase shows up in the post, but only in the
//! contexts the rule lists. Whole-word rules compare against normalized
//! words; the rest are plain substring checks.

mod engine;
mod normalize;

pub use engine::evaluate;
pub use normalize::normalize;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One keyword filter as configured by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRule {
    #[serde(default)]
    pub id: String,
    pub phrase: String,
    /// Contexts the rule applies in (`home`, `notifications`, ...)
    #[serde(rename = "context")]
    pub contexts: Vec<String>,
    #[serde(default)]
    pub whole_word: bool,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    /// Server-side drop instead of a client-side hide
    #[serde(default)]
    pub irreversible: bool,
}

impl FilterRule {
    pub fn new<I, S>(phrase: impl Into<String>, contexts: I, whole_word: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrase: phrase.into(),
            contexts: contexts.into_iter().map(Into::into).collect(),
            whole_word,
            ..Default::default()
        }
    }

    pub fn applies_in(&self, context: &str) -> bool {
        self.contexts.iter().any(|c| c == context)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// Rules that have not expired as of `now`, in their original order.
pub fn active_rules(rules: &[FilterRule], now: DateTime<Utc>) -> Vec<FilterRule> {
    rules
        .iter()
        .filter(|r| !r.is_expired(now))
        .cloned()
        .collect()
}

/// Whether a post is hidden, and by which phrase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterResult {
    pub matched: bool,
    /// Empty unless `matched`
    pub matched_phrase: String,
}

impl FilterResult {
    pub fn matched(phrase: &str) -> Self {
        Self {
            matched: true,
            matched_phrase: phrase.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_rule_deserializes_api_shape() {
        let json = r#"{
            "id": "12",
            "phrase": "spoilers",
            "context": ["home", "public"],
            "whole_word": true,
            "expires_at": "2030-01-01T00:00:00Z",
            "irreversible": false
        }"#;
        let rule: FilterRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.phrase, "spoilers");
        assert!(rule.applies_in("public"));
        assert!(!rule.applies_in("notifications"));
        assert!(rule.whole_word);
        assert!(rule.expires_at.is_some());
    }

    #[test]
    fn test_minimal_rule_defaults() {
        let rule: FilterRule =
            serde_json::from_str(r#"{"phrase": "x", "context": ["home"]}"#).unwrap();
        assert!(!rule.whole_word);
        assert!(rule.expires_at.is_none());
        assert_eq!(rule, FilterRule::new("x", ["home"], false));
    }

    #[test]
    fn test_active_rules_drops_expired_only() {
        let now = Utc::now();
        let mut expired = FilterRule::new("old", ["home"], true);
        expired.expires_at = Some(now - Duration::hours(1));
        let mut later = FilterRule::new("later", ["home"], true);
        later.expires_at = Some(now + Duration::hours(1));
        let forever = FilterRule::new("forever", ["home"], false);

        let active = active_rules(&[expired, later, forever], now);
        let phrases: Vec<_> = active.iter().map(|r| r.phrase.as_str()).collect();
        assert_eq!(phrases, vec!["later", "forever"]);
    }

    #[test]
    fn test_unmatched_result_has_empty_phrase() {
        let result = FilterResult::default();
        assert!(!result.matched);
        assert!(result.matched_phrase.is_empty());
    }
}
