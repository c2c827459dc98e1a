//! Modifier polarity from frequency-adverb facets and subject quantifiers.

use kbforge_core::models::{Assertion, ModifierPolarity};

/// Frequency adverbs attached without a connector.
pub const FACET_SCORES: &[(&str, f64)] = &[
    ("always", 1.0),
    ("typically", 0.9),
    ("mostly", 0.9),
    ("mainly", 0.9),
    ("usually", 0.8),
    ("normally", 0.8),
    ("regularly", 0.8),
    ("frequently", 0.8),
    ("commonly", 0.8),
    ("often", 0.6),
    ("sometimes", 0.4),
    ("occasionally", 0.3),
    ("hardly", 0.1),
    ("rarely", 0.1),
];

/// Quantifier lemmas inside the subject span.
pub const QUANTIFIER_SCORES: &[(&str, f64)] = &[
    ("all", 1.0),
    ("every", 1.0),
    ("most", 0.9),
    ("many", 0.7),
    ("some", 0.5),
    ("few", 0.3),
    ("no", 0.0),
    ("none", 0.0),
];

fn lookup(table: &[(&str, f64)], word: &str) -> Option<f64> {
    table.iter().find(|(w, _)| *w == word).map(|&(_, s)| s)
}

/// Average every facet and quantifier signal across `assertions`.
///
/// With no signal at all the polarity is `default_polarity` and `num_mod` is 0.
pub fn modifier_polarity(assertions: &[Assertion], default_polarity: f64) -> ModifierPolarity {
    let mut facets = Vec::new();
    let mut scores = Vec::new();

    for a in assertions {
        for f in a.provenance.facets.iter().filter(|f| f.connector.is_none()) {
            let statement = f.statement.to_lowercase();
            if let Some(s) = lookup(FACET_SCORES, &statement) {
                scores.push(s);
                facets.push(statement);
            }
        }
    }
    for a in assertions {
        for lemma in a.provenance.subject_lemmas() {
            if let Some(s) = lookup(QUANTIFIER_SCORES, &lemma.to_lowercase()) {
                scores.push(s);
            }
        }
    }

    let mod_pol = if scores.is_empty() {
        default_polarity
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    };
    ModifierPolarity {
        mod_pol,
        num_mod: scores.len(),
        facets,
    }
}
