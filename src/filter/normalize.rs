// SPDX-License-Identifier: MPL-2.0

/// Split text into words for whole-word matching.
///
/// Lines first, then single spaces, so token order follows reading order.
/// Each candidate is trimmed, then loses any leading or trailing characters
/// that are neither letters nor digits ("cats," → "cats", "don't" stays).
/// Empty candidates (from doubled spaces or blank lines) are kept as empty
/// tokens. Case is left alone; callers lowercase beforehand.
///
/// "Letter" means the Unicode `Alphabetic` property, which includes the
/// combining vowel signs of Indic scripts, so "नदी" keeps its final sign.
pub fn normalize(text: &str) -> Vec<&str> {
    text.split('\n')
        .flat_map(|line| line.split(' '))
        .map(|word| word.trim().trim_matches(|c: char| !c.is_alphanumeric()))
        .collect()
}
