//! Clustering algorithms: vector normalisation, distances, linkage updates, agglomeration.

pub mod agglomerative;
pub mod distance;
pub mod linkage;
pub mod normalize;
