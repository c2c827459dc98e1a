//! Relation labels of the commonsense taxonomy.

pub const IS_A: &str = "/r/IsA";
pub const HAS_PROPERTY: &str = "/r/HasProperty";
pub const RECEIVES_ACTION: &str = "/r/ReceivesAction";
pub const CAPABLE_OF: &str = "/r/CapableOf";
pub const PART_OF: &str = "/r/PartOf";
pub const SYMBOL_OF: &str = "/r/SymbolOf";
pub const USED_FOR: &str = "/r/UsedFor";
pub const DESIRES: &str = "/r/Desires";
pub const HAS_PREREQUISITE: &str = "/r/HasPrerequisite";
pub const HAS_A: &str = "/r/HasA";
pub const RELATED_TO: &str = "/r/RelatedTo";
pub const AT_LOCATION: &str = "/r/AtLocation";
pub const SIMILAR_TO: &str = "/r/SimilarTo";
pub const ANTONYM: &str = "/r/Antonym";
pub const SYNONYM: &str = "/r/Synonym";
pub const MANNER_OF: &str = "/r/MannerOf";
pub const LOCATED_NEAR: &str = "/r/LocatedNear";
pub const DISTINCT_FROM: &str = "/r/DistinctFrom";

/// Drop the namespace prefix: `/r/IsA` becomes `IsA`.
///
/// Labels without the prefix are returned unchanged.
pub fn strip_namespace<'a>(label: &'a str, namespace: &str) -> &'a str {
    match label.strip_prefix(namespace) {
        Some(rest) => rest.rsplit('/').next().unwrap_or(rest),
        None => label,
    }
}
