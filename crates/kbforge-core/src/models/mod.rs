mod assertion;
mod cluster;
pub mod relation;
mod sentiment;
mod subject;
mod triple;

pub use assertion::{Assertion, AssertionId, Facet, Positions, Provenance, TokenSpan};
pub use cluster::{
    Cluster, ClusterId, ClusterScores, ClusterVariant, ModifierPolarity, ScoreField, ScorePatch,
};
pub use sentiment::Sentiment;
pub use subject::{SubjectKey, SubjectType};
pub use triple::{KeyedAssertion, Triple, TripleId, TripleKey};
