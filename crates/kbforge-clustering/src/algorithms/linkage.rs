//! Lance–Williams distance updates for the supported linkage criteria.
//!
//! All four are reducible, so nearest-neighbour chains find the same dendrogram
//! as naive agglomeration and merge heights never decrease.

use kbforge_core::config::Linkage;

/// Distance from the union of clusters `i` and `j` to cluster `k`.
///
/// `d_ik`, `d_jk`, `d_ij` are the current inter-cluster distances and
/// `n_i`, `n_j`, `n_k` the cluster sizes.
pub fn updated_distance(
    linkage: Linkage,
    d_ik: f64,
    d_jk: f64,
    d_ij: f64,
    n_i: usize,
    n_j: usize,
    n_k: usize,
) -> f64 {
    let (ni, nj, nk) = (n_i as f64, n_j as f64, n_k as f64);
    match linkage {
        Linkage::Single => d_ik.min(d_jk),
        Linkage::Complete => d_ik.max(d_jk),
        Linkage::Average => (ni * d_ik + nj * d_jk) / (ni + nj),
        Linkage::Ward => {
            let sq = ((ni + nk) * d_ik * d_ik + (nj + nk) * d_jk * d_jk - nk * d_ij * d_ij)
                / (ni + nj + nk);
            sq.max(0.0).sqrt()
        }
    }
}
