use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Sentiment;
use crate::errors::KbError;
use crate::text;

/// Sortable composite id of a raw extraction: (input shard, part file, sequence).
///
/// Renders as `SSSSS-PPP-NNNNNNN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssertionId {
    pub shard: u32,
    pub part: u32,
    pub seq: u64,
}

impl AssertionId {
    pub fn new(shard: u32, part: u32, seq: u64) -> Self {
        Self { shard, part, seq }
    }
}

impl fmt::Display for AssertionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:05}-{:03}-{:07}", self.shard, self.part, self.seq)
    }
}

impl FromStr for AssertionId {
    type Err = KbError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| KbError::InvalidAssertionId {
            raw: raw.to_string(),
            reason: reason.to_string(),
        };
        let parts: Vec<&str> = raw.split('-').collect();
        let [shard, part, seq] = parts.as_slice() else {
            return Err(invalid("expected three '-' separated fields"));
        };
        if shard.len() != 5 || part.len() != 3 || seq.len() != 7 {
            return Err(invalid("fields must be 5, 3 and 7 digits wide"));
        }
        Ok(Self {
            shard: shard.parse().map_err(|_| invalid("shard is not a number"))?,
            part: part.parse().map_err(|_| invalid("part is not a number"))?,
            seq: seq.parse().map_err(|_| invalid("sequence is not a number"))?,
        })
    }
}

impl TryFrom<String> for AssertionId {
    type Error = KbError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AssertionId> for String {
    fn from(id: AssertionId) -> Self {
        id.to_string()
    }
}

/// Half-open token span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenSpan {
    pub start: usize,
    pub end: usize,
}

/// Token and character offsets of the extracted arguments inside the sentence.
///
/// Character offsets count Unicode scalar values, not bytes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Positions {
    pub subj_start: usize,
    pub subj_end: usize,
    pub subj_start_char: usize,
    pub subj_end_char: usize,
    pub obj_start: usize,
    pub obj_end: usize,
    pub obj_start_char: usize,
    pub obj_end_char: usize,
    pub pred_positions: Vec<TokenSpan>,
}

/// Adverbial modifier attached to an assertion ("usually", "in winter", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
    pub statement: String,
    /// Preposition or conjunction introducing the facet, if any.
    pub connector: Option<String>,
}

/// Where an assertion came from. Produced by the extractor and otherwise opaque.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Provenance {
    pub sentence: String,
    /// Source document (URL) of the sentence.
    pub document: Option<String>,
    pub tokens: Vec<String>,
    pub lemmas: Vec<String>,
    /// Fine-grained POS tags, parallel to `tokens`.
    pub tags: Vec<String>,
    pub positions: Positions,
    pub facets: Vec<Facet>,
}

impl Provenance {
    /// Lemmas of the subject span.
    pub fn subject_lemmas(&self) -> &[String] {
        text::span(&self.lemmas, self.positions.subj_start, self.positions.subj_end)
    }

    /// POS tags of the object span.
    pub fn object_tags(&self) -> &[String] {
        text::span(&self.tags, self.positions.obj_start, self.positions.obj_end)
    }

    /// Subject as written in the sentence.
    pub fn subject_surface(&self) -> String {
        text::char_slice(
            &self.sentence,
            self.positions.subj_start_char,
            self.positions.subj_end_char,
        )
    }

    /// Object as written in the sentence.
    pub fn object_surface(&self) -> String {
        text::char_slice(
            &self.sentence,
            self.positions.obj_start_char,
            self.positions.obj_end_char,
        )
    }

    /// Predicate tokens from every predicate span, space-joined.
    pub fn predicate_surface(&self) -> String {
        self.positions
            .pred_positions
            .iter()
            .map(|p| text::span(&self.tokens, p.start, p.end).join(" "))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One raw (subject, predicate, object) extraction. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assertion {
    pub id: AssertionId,
    pub subject: String,
    pub predicate: String,
    pub object: String,
    #[serde(default)]
    pub provenance: Provenance,
    #[serde(default)]
    pub sentiment: Option<Sentiment>,
}

impl Assertion {
    /// Whether this assertion's own (predicate, object) equals the given pair,
    /// ignoring NULs left by the extractor.
    pub fn has_predicate_object(&self, predicate: &str, object: &str) -> bool {
        text::strip_nul(&self.predicate) == predicate && text::strip_nul(&self.object) == object
    }
}
