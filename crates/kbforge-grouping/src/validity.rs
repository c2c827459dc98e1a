//! Cheap structural checks an assertion must pass before it is aggregated.

use kbforge_core::lexicon;
use kbforge_core::models::Assertion;

/// Whether an extraction looks like a usable fact.
pub fn is_likely_valid(assertion: &Assertion, max_object_tokens: usize) -> bool {
    let subject = assertion.subject.as_str();
    let predicate = assertion.predicate.as_str();
    let object = assertion.object.as_str();

    if subject.is_empty() || predicate.is_empty() || object.is_empty() {
        return false;
    }

    let object_tokens: Vec<&str> = object.split_whitespace().collect();
    match object_tokens.last() {
        Some(last) if *last == subject => return false,
        None => return false,
        _ => {}
    }

    if lexicon::is_ignored_object(object)
        || lexicon::is_ignored_predicate(predicate)
        || lexicon::is_ignored_pair(predicate, object)
    {
        return false;
    }

    if predicate.chars().count() <= 1 || object.chars().count() <= 1 {
        return false;
    }

    if object_tokens.len() > max_object_tokens {
        return false;
    }

    // Appositions carry no predicate span.
    !assertion.provenance.positions.pred_positions.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kbforge_core::models::{AssertionId, Positions, Provenance, TokenSpan};

    fn assertion(subject: &str, predicate: &str, object: &str) -> Assertion {
        Assertion {
            id: AssertionId::new(0, 0, 0),
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            provenance: Provenance {
                positions: Positions {
                    pred_positions: vec![TokenSpan { start: 1, end: 2 }],
                    ..Positions::default()
                },
                ..Provenance::default()
            },
            sentiment: None,
        }
    }

    #[test]
    fn accepts_ordinary_fact() {
        assert!(is_likely_valid(&assertion("elephant", "have", "a long trunk"), 5));
    }

    #[test]
    fn rejects_empty_fields() {
        assert!(!is_likely_valid(&assertion("", "have", "trunk"), 5));
        assert!(!is_likely_valid(&assertion("elephant", "have", ""), 5));
    }

    #[test]
    fn rejects_object_ending_in_subject() {
        assert!(!is_likely_valid(&assertion("elephant", "be", "an african elephant"), 5));
    }

    #[test]
    fn rejects_denylisted_object_and_predicate() {
        assert!(!is_likely_valid(&assertion("elephant", "have", "it"), 5));
        assert!(!is_likely_valid(&assertion("elephant", "will", "swim well"), 5));
    }

    #[test]
    fn rejects_single_character_parts() {
        assert!(!is_likely_valid(&assertion("elephant", "x", "trunk"), 5));
        assert!(!is_likely_valid(&assertion("elephant", "have", "t"), 5));
    }

    #[test]
    fn rejects_long_objects() {
        let a = assertion("elephant", "live", "in the hot dry african savanna grassland");
        assert!(!is_likely_valid(&a, 5));
        assert!(is_likely_valid(&a, 10));
    }

    #[test]
    fn rejects_appositions() {
        let mut a = assertion("elephant", "have", "tusks");
        a.provenance.positions.pred_positions.clear();
        assert!(!is_likely_valid(&a, 5));
    }
}
