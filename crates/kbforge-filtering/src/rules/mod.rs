//! The rule catalog.

pub mod denylist;
pub mod hyponym;
pub mod lexical;
pub mod pattern;
pub mod score;

use kbforge_core::config::defaults::DEFAULT_RELATION_NAMESPACE;
use kbforge_core::models::relation::strip_namespace;

pub use denylist::{IgnoreObjectRule, IgnorePredicateObjectRule, IgnorePredicateRule, IgnoreRelationRule};
pub use hyponym::{HyponymRecord, HyponymRule, HyponymTable};
pub use lexical::{NegationRule, ObjectContainsWordRule, RelationObjectWordRule};
pub use pattern::RegexRule;
pub use score::PerplexityRule;

/// Move a built-in relation label into `namespace`: `/r/IsA` becomes `{namespace}IsA`.
pub fn rebase(label: &str, namespace: &str) -> String {
    format!("{namespace}{}", strip_namespace(label, DEFAULT_RELATION_NAMESPACE))
}
