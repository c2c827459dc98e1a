//! The capability every filter rule implements.

use kbforge_core::models::{Cluster, ScoreField};

/// One accept/reject predicate over a cluster.
///
/// Rules are side-effect free and carry only their construction-time
/// configuration, so any evaluation order yields the same decisions.
pub trait FilterRule: Send + Sync {
    /// Stable human-readable name, used in audit logs.
    fn name(&self) -> String;

    /// Score fields this rule reads. The pipeline refuses to evaluate a
    /// cluster missing any of them, unless the field's prerequisite is
    /// missing too; `validate` must then reject.
    fn requires(&self) -> &[ScoreField] {
        &[]
    }

    /// `true` keeps the cluster.
    fn validate(&self, cluster: &Cluster) -> bool;
}
