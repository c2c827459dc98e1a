use kbforge_core::models::Triple;

/// Keep triples supported by at least `min_freq` assertions. Order is preserved.
pub fn filter_by_frequency(triples: Vec<Triple>, min_freq: u64) -> Vec<Triple> {
    triples.into_iter().filter(|t| t.count >= min_freq).collect()
}
