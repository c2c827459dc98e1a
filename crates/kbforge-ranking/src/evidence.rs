//! Re-derive the raw assertions behind each cluster: cluster → triples → assertions.

use std::collections::{HashMap, HashSet};

use kbforge_core::errors::{KbResult, ScoringError};
use kbforge_core::models::{Assertion, AssertionId, Cluster, Triple, TripleId};
use kbforge_core::traits::{IAssertionStore, ITripleStore};

/// Assertions of every cluster's member triples, one list per cluster in
/// member order.
///
/// A member triple missing from the store is fatal, and so is any
/// assertion id the triples reference but the assertion store lacks.
pub fn load_evidence(
    clusters: &[Cluster],
    triples: &dyn ITripleStore,
    assertions: &dyn IAssertionStore,
) -> KbResult<Vec<Vec<Assertion>>> {
    let mut seen = HashSet::new();
    let triple_ids: Vec<TripleId> = clusters
        .iter()
        .flat_map(|c| c.triples.iter())
        .filter(|id| seen.insert(*id))
        .cloned()
        .collect();
    let by_id: HashMap<TripleId, Triple> = triples
        .get_bulk(&triple_ids)?
        .into_iter()
        .filter_map(|t| t.id.clone().map(|id| (id, t)))
        .collect();

    let mut members: Vec<Vec<&Triple>> = Vec::with_capacity(clusters.len());
    for c in clusters {
        let mut ts = Vec::with_capacity(c.triples.len());
        for id in &c.triples {
            let t = by_id.get(id).ok_or_else(|| ScoringError::MissingTriple {
                cluster_id: c.id.to_string(),
                triple_id: id.to_string(),
            })?;
            ts.push(t);
        }
        members.push(ts);
    }

    let mut seen = HashSet::new();
    let assertion_ids: Vec<AssertionId> = members
        .iter()
        .flatten()
        .flat_map(|t| t.assertion_ids.iter().copied())
        .filter(|id| seen.insert(*id))
        .collect();
    let by_id: HashMap<AssertionId, Assertion> = assertions
        .get_exact(&assertion_ids)?
        .into_iter()
        .map(|a| (a.id, a))
        .collect();

    Ok(members
        .iter()
        .map(|ts| {
            ts.iter()
                .flat_map(|t| t.assertion_ids.iter())
                .filter_map(|id| by_id.get(id).cloned())
                .collect()
        })
        .collect())
}
