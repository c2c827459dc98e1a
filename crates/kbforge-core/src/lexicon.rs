//! Denylists shared by the pre-aggregation validity check and the filter rules.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Objects that carry no information on their own: prepositions, pronouns,
/// demonstratives, numerals and ordinals, vague nouns, bare verbs.
pub const IGNORED_OBJECTS: &[&str] = &[
    "in", "on", "at", "of", "from", "by",
    "mine", "yours", "ours", "its", "theirs",
    "etc", "for etc", "of course", "other", "the one", "same", "the same", "the fact",
    "most cases",
    "likely", "ready", "present", "alive", "dead", "needed", "presented", "represented",
    "due", "on top", "the top", "top",
    "this", "that", "these", "those",
    "what", "which", "where", "when", "who", "whom", "how", "why",
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "the first", "the second", "the third", "the fourth", "the fifth",
    "the sixth", "the seventh", "the eighth", "the ninth", "the tenth",
    "the best", "best", "better", "the worst", "worst", "worse",
    "all", "more", "less", "much", "many",
    "n/a",
    "be", "do", "have", "live", "die", "go", "make", "come", "help", "eat",
    "find", "see", "say", "know", "get", "let", "become", "allow", "ask",
    "the ability", "the right",
    "gone", "done", "born", "taken", "found", "known", "located",
    "seen", "used", "listed", "intended",
    "me", "myself", "us", "ourselves", "you", "yourself", "yourselves",
    "them", "themselves", "her", "herself", "him", "himself", "it", "itself",
    "make sure", "make history",
    "this case", "this situation", "the time", "this time",
    "today", "this year", "last year", "this month", "this week",
    "any way", "several",
    "damn", "other words", "the here", "the now", "the present", "the moment",
    "now", "here", "there",
    "the", "take place", "come to end", "such", "non", "on the left", "on the right",
    "play role",
];

/// Modal, auxiliary and otherwise noisy predicates.
pub const IGNORED_PREDICATES: &[&str] = &[
    "will",
    "would",
    "shall",
    "should",
    "may",
    "might",
    "must",
    "be like",
    "be defined in",
    "be defined by",
    // "include" statements are mostly list fragments.
    "include",
    "star",
    "be directed by",
];

/// Idiomatic (predicate, object) pairs that are not facts about the subject.
pub const IGNORED_PREDICATE_OBJECT_PAIRS: &[(&str, &str)] = &[
    ("be", "seen"),
    ("be", "used"),
    ("be", "the fact"),
    ("be taken", "care"),
    ("make", "sense"),
    ("make", "sure"),
    ("make", "use"),
    ("pay", "attention"),
    ("be", "capable"),
    ("be", "able"),
    ("come in", "size"),
    ("play", "an important role"),
    ("play", "important role"),
    ("make", "difference"),
    ("do", "thing"),
    ("do", "the same"),
    ("take", "part"),
    ("give", "way"),
    ("give", "a way"),
];

static IGNORED_OBJECT_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| IGNORED_OBJECTS.iter().copied().collect());

static IGNORED_PREDICATE_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| IGNORED_PREDICATES.iter().copied().collect());

pub fn is_ignored_object(object: &str) -> bool {
    IGNORED_OBJECT_SET.contains(object)
}

pub fn is_ignored_predicate(predicate: &str) -> bool {
    IGNORED_PREDICATE_SET.contains(predicate)
}

pub fn is_ignored_pair(predicate: &str, object: &str) -> bool {
    IGNORED_PREDICATE_OBJECT_PAIRS
        .iter()
        .any(|&(p, o)| p == predicate && o == object)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_only() {
        assert!(is_ignored_object("alive"));
        assert!(!is_ignored_object("alive and well"));
        assert!(is_ignored_predicate("might"));
        assert!(!is_ignored_predicate("eat"));
    }

    #[test]
    fn pairs_match_both_sides() {
        assert!(is_ignored_pair("make", "sense"));
        assert!(!is_ignored_pair("make", "noise"));
        assert!(!is_ignored_pair("have", "sense"));
    }
}
