// Single source of truth for all default values.

// --- Grouping ---
pub const DEFAULT_MIN_FREQ: u64 = 3;
pub const DEFAULT_NUM_BATCHES: usize = 64;
pub const DEFAULT_URL_SIMILARITY_THRESHOLD: f64 = 0.6;
pub const DEFAULT_MAX_OBJECT_TOKENS: usize = 5;

// --- Clustering ---
pub const DEFAULT_DISTANCE_THRESHOLD: f64 = 0.5;
pub const DEFAULT_MAX_TRIPLES_PER_SUBJECT: usize = 50_000;
pub const DEFAULT_LINKAGE: &str = "ward";
pub const DEFAULT_EMBEDDING_BATCH_SIZE: usize = 64;

// --- Filtering ---
pub const DEFAULT_PERPLEXITY_THRESHOLD: f64 = 500.0;
pub const DEFAULT_RELATION_NAMESPACE: &str = "/r/";

// --- Ranking ---
pub const DEFAULT_POLARITY: f64 = 0.5;
pub const DEFAULT_SENTIMENT_BATCH_SIZE: usize = 64;
pub const DEFAULT_RELATION_BATCH_SIZE: usize = 64;
pub const DEFAULT_PERPLEXITY_STRIDE: usize = 512;
pub const DEFAULT_PERPLEXITY_MAX_LENGTH: usize = 1024;

// --- Selection ---
pub const DEFAULT_TOP_N: usize = 1000;
pub const DEFAULT_KEEP_NAMESPACE: bool = false;
pub const DEFAULT_ASPECTS: bool = false;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
