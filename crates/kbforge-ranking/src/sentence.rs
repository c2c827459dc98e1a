//! Canonical sentence: the most frequent surface rendering of a cluster's
//! exact (predicate, object) among its raw assertions.

use kbforge_core::models::{Assertion, Cluster};
use kbforge_core::text::strip_nul;

/// Subject, predicate and object as written in a source sentence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SurfaceTriple {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

impl SurfaceTriple {
    fn of(a: &Assertion) -> Self {
        Self {
            subject: a.provenance.subject_surface(),
            predicate: a.provenance.predicate_surface(),
            object: a.provenance.object_surface(),
        }
    }

    fn is_gerund_led(&self) -> bool {
        self.predicate
            .split_whitespace()
            .next()
            .is_some_and(|t| t.to_lowercase().ends_with("ing"))
    }
}

/// Surface triples of matching assertions with their frequency, most
/// frequent first; equal counts keep first-seen order.
pub fn surface_counts(cluster: &Cluster, assertions: &[Assertion]) -> Vec<(SurfaceTriple, usize)> {
    let mut counts: Vec<(SurfaceTriple, usize)> = Vec::new();
    for a in assertions
        .iter()
        .filter(|a| a.has_predicate_object(cluster.predicate(), cluster.object()))
    {
        let s = SurfaceTriple::of(a);
        match counts.iter_mut().find(|(seen, _)| *seen == s) {
            Some((_, n)) => *n += 1,
            None => counts.push((s, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Join, capitalise an all-lowercase first word, and end with a period.
pub fn render_sentence(s: &SurfaceTriple) -> String {
    let raw = format!("{} {} {}.", s.subject, s.predicate, s.object);
    let raw = strip_nul(&raw);
    let mut tokens: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
    if let Some(first) = tokens.first_mut() {
        let lowercase = first.chars().any(char::is_lowercase) && !first.chars().any(char::is_uppercase);
        if lowercase {
            let mut chars = first.chars();
            if let Some(c) = chars.next() {
                *first = c.to_uppercase().chain(chars).collect();
            }
        }
    }
    tokens.join(" ")
}

/// The cluster's canonical sentence, or `None` when no assertion states the
/// cluster's exact (predicate, object).
///
/// Among the renderings tied at the top count, the first whose predicate
/// does not start with an "-ing" word wins; if all do, the first one.
pub fn canonical_sentence(cluster: &Cluster, assertions: &[Assertion]) -> Option<String> {
    let counts = surface_counts(cluster, assertions);
    let top = counts.first()?.1;
    let chosen = counts
        .iter()
        .take_while(|(_, n)| *n == top)
        .find(|(s, _)| !s.is_gerund_led())
        .or_else(|| counts.first())?;
    Some(render_sentence(&chosen.0))
}
