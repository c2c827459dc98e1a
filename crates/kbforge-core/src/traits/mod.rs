mod classifier;
mod embedding;
mod perplexity;
mod storage;

pub use classifier::{IRelationClassifier, ISentimentClassifier, RelationQuery};
pub use embedding::IEmbeddingProvider;
pub use perplexity::IPerplexityScorer;
pub use storage::{
    ensure_complete, BulkWriteReport, ClusterUpdate, IAssertionStore, IClusterStore,
    ITripleStore, TripleUpdate, WriteFailure,
};
