//! Relation labelling: batched classifier calls, deterministic label
//! overrides, and predicted-object post-processing.

use tracing::debug;

use kbforge_core::errors::{KbResult, ScoringError};
use kbforge_core::models::relation::{
    CAPABLE_OF, DESIRES, HAS_A, HAS_PREREQUISITE, HAS_PROPERTY, IS_A, PART_OF, RECEIVES_ACTION,
    RELATED_TO, SYMBOL_OF, USED_FOR,
};
use kbforge_core::models::Assertion;
use kbforge_core::text::strip_nul;
use kbforge_core::traits::{IRelationClassifier, RelationQuery};

const ADJECTIVE_TAGS: &[&str] = &["JJ", "JJR", "JJS"];
const PASSIVE_VERB_TAGS: &[&str] = &["VBN"];
const NOUN_TAGS: &[&str] = &["NN", "NNS"];

const SYMBOL_PREFIXES: &[&str] = &["a symbol of ", "the symbol of ", "symbol of "];
const EMBLEM_PREFIXES: &[&str] = &["an emblem of ", "the emblem of ", "emblem of "];
const PART_PREFIXES: &[&str] = &["a part of ", "part of ", "the part of "];

/// Relations whose object reads as a property of the subject.
const COPULAR: &[&str] = &[HAS_PROPERTY, IS_A, RECEIVES_ACTION];

const CAPABILITY_PREDICATES: &[&str] = &["be capable of", "can", "be able to"];

/// Label every query, calling the classifier in chunks of `batch_size`.
pub fn predict_relations(
    classifier: &dyn IRelationClassifier,
    queries: &[RelationQuery],
    batch_size: usize,
) -> KbResult<Vec<String>> {
    let mut labels = Vec::with_capacity(queries.len());
    for (i, chunk) in queries.chunks(batch_size.max(1)).enumerate() {
        let out = classifier.predict(chunk)?;
        if out.len() != chunk.len() {
            return Err(ScoringError::BatchSizeMismatch {
                model: classifier.name().to_string(),
                expected: chunk.len(),
                actual: out.len(),
            }
            .into());
        }
        debug!(batch = i, size = chunk.len(), model = classifier.name(), "relation batch classified");
        labels.extend(out);
    }
    Ok(labels)
}

/// Whether at least half of the assertions extracted with exactly `object`
/// carry one of `tags` inside their object span. No such assertion: `false`.
fn tag_majority(object: &str, assertions: &[Assertion], tags: &[&str]) -> bool {
    let matching: Vec<&Assertion> = assertions
        .iter()
        .filter(|a| strip_nul(&a.object) == object)
        .collect();
    if matching.is_empty() {
        return false;
    }
    let hits = matching
        .iter()
        .filter(|a| {
            a.provenance
                .object_tags()
                .iter()
                .any(|t| tags.contains(&t.as_str()))
        })
        .count();
    hits * 2 >= matching.len()
}

/// Correct the classifier's label with lexical rules. Later rules win.
///
/// Every condition is checked against the classifier's own label, so an
/// `IsA` rewritten to `HasProperty` is not rewritten again.
pub fn apply_overrides(label: &str, predicate: &str, object: &str, assertions: &[Assertion]) -> String {
    let mut out = label;

    if label == IS_A && !tag_majority(object, assertions, NOUN_TAGS) {
        if tag_majority(object, assertions, ADJECTIVE_TAGS) {
            out = HAS_PROPERTY;
        } else if tag_majority(object, assertions, PASSIVE_VERB_TAGS) {
            out = RECEIVES_ACTION;
        }
    }

    if label == HAS_PROPERTY && predicate != "be" {
        out = RECEIVES_ACTION;
    }

    if predicate == "symbolize"
        || SYMBOL_PREFIXES
            .iter()
            .chain(EMBLEM_PREFIXES)
            .any(|p| object.starts_with(p))
    {
        out = SYMBOL_OF;
    }

    match predicate {
        "need" | "require" => out = HAS_PREREQUISITE,
        "contain" | "include" => out = HAS_A,
        "be related to" | "relate to" => out = RELATED_TO,
        _ => {}
    }

    out.to_string()
}

fn should_concat(relation: &str, predicate: &str) -> bool {
    if relation == CAPABLE_OF {
        return !CAPABILITY_PREDICATES.contains(&predicate);
    }
    COPULAR.contains(&relation) && predicate != "be"
}

fn strip_any<'a>(object: &'a str, prefixes: &[&str]) -> Option<&'a str> {
    prefixes.iter().find_map(|p| object.strip_prefix(p))
}

/// Tokens after the first "to" of the predicate, if any follow it.
fn infinitive_complement(predicate: &str) -> Option<String> {
    let tokens: Vec<&str> = predicate.split_whitespace().collect();
    let idx = tokens.iter().position(|&t| t == "to")?;
    (idx + 1 < tokens.len()).then(|| tokens[idx + 1..].join(" "))
}

/// Rewrite the raw object into the object of `relation`.
///
/// ```text
/// chase      + cats              CapableOf    -> chase cats
/// be made of + wood              HasProperty  -> made of wood
/// be         + a part of the car PartOf       -> the car
/// want to eat + fish             Desires      -> eat fish
/// ```
pub fn postprocess_object(predicate: &str, object: &str, relation: &str) -> String {
    let mut out = if should_concat(relation, predicate) {
        format!("{predicate} {object}")
    } else {
        object.to_string()
    };

    if COPULAR.contains(&relation) {
        if let Some(rest) = predicate.strip_prefix("be ") {
            out = format!("{rest} {object}");
        }
    } else if relation == PART_OF {
        if let Some(rest) = strip_any(object, PART_PREFIXES) {
            out = rest.to_string();
        }
    } else if relation == SYMBOL_OF {
        if let Some(rest) = strip_any(object, SYMBOL_PREFIXES).or_else(|| strip_any(object, EMBLEM_PREFIXES)) {
            out = rest.to_string();
        }
    } else if relation == USED_FOR || relation == DESIRES {
        if let Some(complement) = infinitive_complement(predicate) {
            out = format!("{complement} {object}");
        }
    }

    out.replace("n\u{e2}\u{20ac}\u{2122}t", "not")
        .replace("n\u{2019}t", "not")
        .replace("n't", "not")
}
