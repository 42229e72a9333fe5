// SPDX-License-Identifier: MPL-2.0

use super::normalize::normalize;
use super::{FilterResult, FilterRule};

/// Decide whether a post is hidden by any of `rules` in `context`.
///
/// `content` is the post body and `spoiler_text` its content warning. When
/// `sensitive` is set the warning is searched as well in whole-word mode.
/// Rules are tried in order and the first match wins.
///
/// Substring rules lowercase only the phrase and search the body and the
/// warning as given, so a capitalised body can slip past a rule that
/// whole-word mode would catch.
pub fn evaluate(
    content: &str,
    spoiler_text: &str,
    sensitive: bool,
    rules: &[FilterRule],
    context: &str,
) -> FilterResult {
    let mut searchable = content.to_string();
    if sensitive {
        searchable.push('\n');
        searchable.push_str(spoiler_text);
    }
    let searchable = searchable.to_lowercase();
    // Tokenized lazily: only whole-word rules need it
    let mut tokens: Option<Vec<&str>> = None;

    for rule in rules.iter().filter(|r| r.applies_in(context)) {
        let phrase = rule.phrase.to_lowercase();

        let matched = if rule.whole_word {
            let tokens = tokens.get_or_insert_with(|| normalize(&searchable));
            contains_phrase(tokens, &phrase)
        } else {
            content.contains(&phrase) || spoiler_text.contains(&phrase)
        };

        if matched {
            return FilterResult::matched(&rule.phrase);
        }
    }

    FilterResult::default()
}

/// Slide a window the length of the phrase over the tokens and compare the
/// space-joined window against the phrase.
fn contains_phrase(tokens: &[&str], phrase: &str) -> bool {
    let width = phrase.split(' ').count();
    tokens.windows(width).any(|window| window.join(" ") == phrase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::context;

    fn rule(phrase: &str, contexts: &[&str], whole_word: bool) -> FilterRule {
        FilterRule::new(phrase, contexts.iter().copied(), whole_word)
    }

    #[test]
    fn test_whole_word_matches_word() {
        let rules = [rule("cats", &[context::HOME], true)];
        let result = evaluate("I love cats and dogs", "", false, &rules, context::HOME);
        assert!(result.matched);
        assert_eq!(result.matched_phrase, "cats");
    }

    #[test]
    fn test_whole_word_ignores_substring() {
        let rules = [rule("cats", &[context::HOME], true)];
        let result = evaluate("I love concatenation", "", false, &rules, context::HOME);
        assert!(!result.matched);
        assert_eq!(result.matched_phrase, "");
    }

    #[test]
    fn test_whole_word_multi_word_phrase() {
        let rules = [rule("you later", &[context::HOME], true)];
        let result = evaluate("see you later alligator", "", false, &rules, context::HOME);
        assert!(result.matched);
        assert_eq!(result.matched_phrase, "you later");
    }

    #[test]
    fn test_whole_word_phrase_does_not_span_out_of_order() {
        let rules = [rule("later you", &[context::HOME], true)];
        let result = evaluate("see you later alligator", "", false, &rules, context::HOME);
        assert!(!result.matched);
    }

    #[test]
    fn test_whole_word_is_case_insensitive_and_strips_punctuation() {
        let rules = [rule("Spoilers", &[context::PUBLIC], true)];
        let result = evaluate("No SPOILERS!", "", false, &rules, context::PUBLIC);
        assert!(result.matched);
        // The phrase is reported as configured
        assert_eq!(result.matched_phrase, "Spoilers");
    }

    #[test]
    fn test_whole_word_phrase_across_lines() {
        let rules = [rule("new year", &[context::HOME], true)];
        let result = evaluate("happy new\nyear", "", false, &rules, context::HOME);
        assert!(result.matched);
    }

    #[test]
    fn test_whole_word_searches_spoiler_only_when_sensitive() {
        let rules = [rule("election", &[context::HOME], true)];
        let hidden = evaluate("nothing here", "Election news", true, &rules, context::HOME);
        assert!(hidden.matched);
        let shown = evaluate("nothing here", "Election news", false, &rules, context::HOME);
        assert!(!shown.matched);
    }

    #[test]
    fn test_context_gating() {
        let rules = [
            rule("cats", &[context::HOME], true),
            rule("cats", &[context::HOME], false),
        ];
        let result = evaluate("cats cats cats", "cats", true, &rules, context::NOTIFICATIONS);
        assert!(!result.matched);
    }

    #[test]
    fn test_substring_matches_mid_word() {
        let rules = [rule("cat", &[context::HOME], false)];
        let result = evaluate("let us concatenate", "", false, &rules, context::HOME);
        assert!(result.matched);
        assert_eq!(result.matched_phrase, "cat");
    }

    #[test]
    fn test_substring_lowercases_phrase_only() {
        let rules = [rule("CAT", &[context::HOME], false)];
        assert!(evaluate("a cat", "", false, &rules, context::HOME).matched);
        // Body case is not folded in substring mode
        assert!(!evaluate("a CAT", "", false, &rules, context::HOME).matched);
    }

    #[test]
    fn test_substring_checks_spoiler_even_when_not_sensitive() {
        let rules = [rule("gore", &[context::THREAD], false)];
        let result = evaluate("body", "mild gore", false, &rules, context::THREAD);
        assert!(result.matched);
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let rules = [
            rule("dogs", &[context::HOME], true),
            rule("cats", &[context::HOME], true),
            rule("cat", &[context::HOME], false),
        ];
        let result = evaluate("cats and dogs", "", false, &rules, context::HOME);
        assert_eq!(result.matched_phrase, "dogs");
    }

    #[test]
    fn test_skipped_rule_does_not_block_later_rule() {
        let rules = [
            rule("cats", &[context::ACCOUNT], true),
            rule("dogs", &[context::HOME, context::PUBLIC], true),
        ];
        let result = evaluate("cats and dogs", "", false, &rules, context::PUBLIC);
        assert_eq!(result, FilterResult::matched("dogs"));
    }

    #[test]
    fn test_no_rules() {
        assert_eq!(
            evaluate("anything", "", false, &[], context::HOME),
            FilterResult::default()
        );
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let rules = [
            rule("later", &[context::HOME], true),
            rule("al", &[context::HOME], false),
        ];
        let first = evaluate("see you later", "cw", true, &rules, context::HOME);
        let second = evaluate("see you later", "cw", true, &rules, context::HOME);
        assert_eq!(first, second);
    }

    #[test]
    fn test_contains_phrase_window_at_end() {
        assert!(contains_phrase(&["a", "b", "c"], "b c"));
        assert!(!contains_phrase(&["a", "b"], "a b c"));
    }
}
