//! Record builders with a consistent provenance layout: the sentence is
//! `"{subject} {predicate} {object}"` and every span points at those words.

use kbforge_core::models::{
    Assertion, AssertionId, Cluster, ClusterId, ClusterScores, ClusterVariant, Facet, Positions,
    Provenance, Sentiment, SubjectKey, Triple, TripleId, TripleKey,
};

pub struct AssertionBuilder {
    assertion: Assertion,
}

/// Start an assertion with id `00000-000-{seq}` for a primary subject.
pub fn assertion(seq: u64, subject: &str, predicate: &str, object: &str) -> AssertionBuilder {
    AssertionBuilder::new(AssertionId::new(0, 0, seq), subject, predicate, object)
}

impl AssertionBuilder {
    pub fn new(id: AssertionId, subject: &str, predicate: &str, object: &str) -> Self {
        Self {
            assertion: Assertion {
                id,
                subject: subject.to_string(),
                predicate: predicate.to_string(),
                object: object.to_string(),
                provenance: provenance(subject, predicate, object),
                sentiment: None,
            },
        }
    }

    pub fn id(mut self, id: AssertionId) -> Self {
        self.assertion.id = id;
        self
    }

    pub fn document(mut self, url: &str) -> Self {
        self.assertion.provenance.document = Some(url.to_string());
        self
    }

    /// Render the sentence from different surface words than the lemmatised triple.
    pub fn surface(mut self, subject: &str, predicate: &str, object: &str) -> Self {
        let document = self.assertion.provenance.document.take();
        let facets = std::mem::take(&mut self.assertion.provenance.facets);
        self.assertion.provenance = provenance(subject, predicate, object);
        self.assertion.provenance.document = document;
        self.assertion.provenance.facets = facets;
        self
    }

    pub fn facet(mut self, statement: &str, connector: Option<&str>) -> Self {
        self.assertion.provenance.facets.push(Facet {
            statement: statement.to_string(),
            connector: connector.map(str::to_string),
        });
        self
    }

    /// Replace the lemmas of the subject span.
    pub fn subject_lemmas(mut self, lemmas: &[&str]) -> Self {
        let p = &mut self.assertion.provenance;
        let (start, end) = (p.positions.subj_start, p.positions.subj_end);
        for (slot, lemma) in p.lemmas[start..end].iter_mut().zip(lemmas) {
            *slot = lemma.to_string();
        }
        self
    }

    /// Replace the POS tags of the object span.
    pub fn object_tags(mut self, tags: &[&str]) -> Self {
        let p = &mut self.assertion.provenance;
        let (start, end) = (p.positions.obj_start, p.positions.obj_end);
        for (slot, tag) in p.tags[start..end].iter_mut().zip(tags) {
            *slot = tag.to_string();
        }
        self
    }

    pub fn without_predicate_span(mut self) -> Self {
        self.assertion.provenance.positions.pred_positions.clear();
        self
    }

    pub fn sentiment(mut self, negative: f64, neutral: f64, positive: f64) -> Self {
        self.assertion.sentiment = Some(Sentiment::new(negative, neutral, positive));
        self
    }

    pub fn build(self) -> Assertion {
        self.assertion
    }
}

fn provenance(subject: &str, predicate: &str, object: &str) -> Provenance {
    let subj: Vec<&str> = subject.split_whitespace().collect();
    let pred: Vec<&str> = predicate.split_whitespace().collect();
    let obj: Vec<&str> = object.split_whitespace().collect();

    let tokens: Vec<String> = subj
        .iter()
        .chain(&pred)
        .chain(&obj)
        .map(|t| t.to_string())
        .collect();
    let tags: Vec<String> = std::iter::repeat("NN").take(subj.len())
        .chain(std::iter::repeat("VB").take(pred.len()))
        .chain(std::iter::repeat("NN").take(obj.len()))
        .map(str::to_string)
        .collect();
    let lemmas = tokens.iter().map(|t| t.to_lowercase()).collect();

    let subj_chars = subject.chars().count();
    let pred_chars = predicate.chars().count();
    let obj_start_char = subj_chars + 1 + pred_chars + 1;

    Provenance {
        sentence: format!("{subject} {predicate} {object}"),
        document: None,
        tokens,
        lemmas,
        tags,
        positions: Positions {
            subj_start: 0,
            subj_end: subj.len(),
            subj_start_char: 0,
            subj_end_char: subj_chars,
            obj_start: subj.len() + pred.len(),
            obj_end: subj.len() + pred.len() + obj.len(),
            obj_start_char,
            obj_end_char: obj_start_char + object.chars().count(),
            pred_positions: vec![kbforge_core::models::TokenSpan {
                start: subj.len(),
                end: subj.len() + pred.len(),
            }],
        },
        facets: Vec::new(),
    }
}

/// A triple of a primary subject backed by `count` fresh assertion ids starting at `first_seq`.
pub fn triple(subject: &str, predicate: &str, object: &str, count: u64, first_seq: u64) -> Triple {
    let ids = (first_seq..first_seq + count)
        .map(|seq| AssertionId::new(0, 0, seq))
        .collect();
    Triple::new(
        TripleKey::new(subject, predicate, object, "primary", subject),
        ids,
    )
}

pub struct ClusterBuilder {
    cluster: Cluster,
    rank: usize,
}

/// Start a cluster of a primary subject.
pub fn cluster(subject: &str, predicate: &str, object: &str, count: u64) -> ClusterBuilder {
    let key = TripleKey::new(subject, predicate, object, "primary", subject);
    let subject_key = SubjectKey::new(subject, "primary", subject);
    ClusterBuilder {
        cluster: Cluster {
            id: ClusterId::for_subject(&subject_key, 0),
            key,
            count,
            triples: Vec::new(),
            variants: Vec::new(),
            scores: ClusterScores::default(),
        },
        rank: 0,
    }
}

impl ClusterBuilder {
    /// Rank within the subject; determines the cluster id.
    pub fn rank(mut self, rank: usize) -> Self {
        self.rank = rank;
        self.cluster.id = ClusterId::for_subject(&self.cluster.key.subject_key(), rank);
        self
    }

    pub fn subject_type(mut self, subject_type: &str, super_subject: &str) -> Self {
        self.cluster.key.subject_type = subject_type.into();
        self.cluster.key.super_subject = super_subject.to_string();
        self.cluster.id = ClusterId::for_subject(&self.cluster.key.subject_key(), self.rank);
        self
    }

    pub fn relation(mut self, relation: &str, predicted_object: &str) -> Self {
        self.cluster.scores.predicted_relation = Some(relation.to_string());
        self.cluster.scores.predicted_object = Some(predicted_object.to_string());
        self
    }

    pub fn perplexity(mut self, perplexity: f64) -> Self {
        self.cluster.scores.perplexity = Some(perplexity);
        self
    }

    pub fn log_freq(mut self, log_freq: f64) -> Self {
        self.cluster.scores.log_freq = Some(log_freq);
        self
    }

    pub fn sentence(mut self, sentence: &str) -> Self {
        self.cluster.scores.triple_sentence = Some(sentence.to_string());
        self
    }

    /// Add a member triple; members must be added in descending count order.
    pub fn member(mut self, triple_id: &str, predicate: &str, object: &str, count: u64) -> Self {
        let id = TripleId(triple_id.to_string());
        self.cluster.triples.push(id.clone());
        self.cluster.variants.push(ClusterVariant {
            triple_id: id,
            predicate: predicate.to_string(),
            object: object.to_string(),
            count,
        });
        self
    }

    pub fn build(self) -> Cluster {
        self.cluster
    }
}
