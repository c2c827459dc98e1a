//! Deterministic stand-ins for the injected embedding, classification and
//! perplexity models.

use std::collections::HashMap;

use kbforge_core::errors::{ClusteringError, KbResult};
use kbforge_core::models::relation;
use kbforge_core::models::Sentiment;
use kbforge_core::traits::{
    IEmbeddingProvider, IPerplexityScorer, IRelationClassifier, ISentimentClassifier,
    RelationQuery,
};

/// Embeds text as a pseudo-random unit-scale vector derived from its blake3 hash.
///
/// Identical texts get identical vectors; different texts are nearly orthogonal
/// for large dimensions.
pub struct HashEmbedder {
    dims: usize,
}

impl HashEmbedder {
    pub fn new(dims: usize) -> Self {
        Self { dims }
    }
}

pub(crate) fn hash_vector(text: &str, dims: usize) -> Vec<f32> {
    let mut reader = blake3::Hasher::new().update(text.as_bytes()).finalize_xof();
    let mut bytes = vec![0u8; dims * 4];
    reader.fill(&mut bytes);
    bytes
        .chunks_exact(4)
        .map(|c| {
            let v = u32::from_le_bytes([c[0], c[1], c[2], c[3]]);
            (v as f64 / u32::MAX as f64 * 2.0 - 1.0) as f32
        })
        .collect()
}

impl IEmbeddingProvider for HashEmbedder {
    fn embed(&self, text: &str) -> KbResult<Vec<f32>> {
        Ok(hash_vector(text, self.dims))
    }

    fn embed_batch(&self, texts: &[String]) -> KbResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| hash_vector(t, self.dims)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dims
    }

    fn name(&self) -> &str {
        "hash-embedder"
    }
}

/// Returns fixed vectors for known texts and hash vectors for everything else.
pub struct TableEmbedder {
    dims: usize,
    table: HashMap<String, Vec<f32>>,
}

impl TableEmbedder {
    pub fn new(dims: usize) -> Self {
        Self {
            dims,
            table: HashMap::new(),
        }
    }

    pub fn with(mut self, text: &str, vector: Vec<f32>) -> Self {
        assert_eq!(vector.len(), self.dims, "fixture vector has wrong dimension");
        self.table.insert(text.to_string(), vector);
        self
    }
}

impl IEmbeddingProvider for TableEmbedder {
    fn embed(&self, text: &str) -> KbResult<Vec<f32>> {
        Ok(self
            .table
            .get(text)
            .cloned()
            .unwrap_or_else(|| hash_vector(text, self.dims)))
    }

    fn embed_batch(&self, texts: &[String]) -> KbResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    fn dimensions(&self) -> usize {
        self.dims
    }

    fn name(&self) -> &str {
        "table-embedder"
    }
}

/// Always fails; drives error-path tests.
pub struct FailingEmbedder;

impl IEmbeddingProvider for FailingEmbedder {
    fn embed(&self, _text: &str) -> KbResult<Vec<f32>> {
        Err(ClusteringError::EmbeddingFailed {
            reason: "model unavailable".into(),
        }
        .into())
    }

    fn embed_batch(&self, _texts: &[String]) -> KbResult<Vec<Vec<f32>>> {
        self.embed("").map(|v| vec![v])
    }

    fn dimensions(&self) -> usize {
        0
    }

    fn name(&self) -> &str {
        "failing-embedder"
    }
}

/// Labels triples by their predicate, falling back to RelatedTo.
pub struct KeywordRelationClassifier {
    rules: Vec<(String, String)>,
}

impl Default for KeywordRelationClassifier {
    fn default() -> Self {
        let rules = [
            ("be", relation::IS_A),
            ("have", relation::HAS_A),
            ("can", relation::CAPABLE_OF),
            ("use for", relation::USED_FOR),
            ("be used to", relation::USED_FOR),
            ("live in", relation::AT_LOCATION),
            ("be found in", relation::AT_LOCATION),
            ("want to", relation::DESIRES),
            ("be part of", relation::PART_OF),
            ("hate", relation::ANTONYM),
        ];
        Self {
            rules: rules
                .iter()
                .map(|(p, r)| (p.to_string(), r.to_string()))
                .collect(),
        }
    }
}

impl KeywordRelationClassifier {
    pub fn with_rule(mut self, predicate: &str, label: &str) -> Self {
        self.rules.insert(0, (predicate.to_string(), label.to_string()));
        self
    }
}

impl IRelationClassifier for KeywordRelationClassifier {
    fn predict(&self, queries: &[RelationQuery]) -> KbResult<Vec<String>> {
        Ok(queries
            .iter()
            .map(|q| {
                self.rules
                    .iter()
                    .find(|(p, _)| *p == q.predicate)
                    .map(|(_, r)| r.clone())
                    .unwrap_or_else(|| relation::RELATED_TO.to_string())
            })
            .collect())
    }

    fn name(&self) -> &str {
        "keyword-relation"
    }
}

/// Positive for sentences containing "love" or "good", negative for "hate" or
/// "bad", neutral otherwise.
pub struct KeywordSentiment;

impl ISentimentClassifier for KeywordSentiment {
    fn classify(&self, sentences: &[String]) -> KbResult<Vec<Sentiment>> {
        Ok(sentences
            .iter()
            .map(|s| {
                let lower = s.to_lowercase();
                if lower.contains("love") || lower.contains("good") {
                    Sentiment::new(0.0, 0.2, 0.8)
                } else if lower.contains("hate") || lower.contains("bad") {
                    Sentiment::new(0.8, 0.2, 0.0)
                } else {
                    Sentiment::new(0.1, 0.8, 0.1)
                }
            })
            .collect())
    }

    fn name(&self) -> &str {
        "keyword-sentiment"
    }
}

/// Scores every sentence with one value, with per-sentence overrides.
pub struct FixedPerplexity {
    default: f64,
    overrides: HashMap<String, f64>,
}

impl FixedPerplexity {
    pub fn new(default: f64) -> Self {
        Self {
            default,
            overrides: HashMap::new(),
        }
    }

    pub fn with(mut self, sentence: &str, perplexity: f64) -> Self {
        self.overrides.insert(sentence.to_string(), perplexity);
        self
    }
}

impl IPerplexityScorer for FixedPerplexity {
    fn perplexity(&self, sentence: &str) -> KbResult<f64> {
        Ok(self.overrides.get(sentence).copied().unwrap_or(self.default))
    }

    fn name(&self) -> &str {
        "fixed-perplexity"
    }
}
