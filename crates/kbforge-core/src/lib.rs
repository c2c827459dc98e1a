//! # kbforge-core
//!
//! Foundation crate for the kbforge knowledge-base builder.
//! Defines the assertion/triple/cluster model, errors, config, capability
//! traits for the external models and stores, and the shared denylists.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod lexicon;
pub mod models;
pub mod partition;
pub mod text;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::KbConfig;
pub use errors::{KbError, KbResult};
pub use models::{
    Assertion, AssertionId, Cluster, ClusterId, SubjectKey, SubjectType, Triple, TripleId,
    TripleKey,
};
pub use partition::BatchPartition;
