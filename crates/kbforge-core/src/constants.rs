/// kbforge version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Relation of the synthetic subject-to-aspect edges in aspects output.
pub const ASPECT_RELATION: &str = "has";
