//! Threshold agglomerative clustering via nearest-neighbour chains.
//!
//! Produces a flat clustering equivalent to building the full dendrogram and
//! cutting it at `threshold`: two clusters are merged only if their linkage
//! distance is strictly below the threshold. The number of clusters is not
//! fixed in advance.

use serde::{Deserialize, Serialize};

use kbforge_core::config::Linkage;
use kbforge_core::errors::{ClusteringError, KbResult};

use super::distance::euclidean;
use super::linkage::updated_distance;

/// Work done by one clustering call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusteringStats {
    pub points: usize,
    /// Merges applied below the threshold.
    pub merges: usize,
    /// Pairwise vector distances computed.
    pub distance_evaluations: usize,
}

/// Flat cluster label per input point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgglomerativeOutcome {
    /// `labels[i]` is the cluster of point `i`. Labels are numbered by the
    /// lowest point index they contain.
    pub labels: Vec<usize>,
    pub num_clusters: usize,
    pub stats: ClusteringStats,
}

impl AgglomerativeOutcome {
    /// Point indices per label, each ascending.
    pub fn groups(&self) -> Vec<Vec<usize>> {
        let mut groups = vec![Vec::new(); self.num_clusters];
        for (point, &label) in self.labels.iter().enumerate() {
            groups[label].push(point);
        }
        groups
    }
}

/// Upper-triangular pairwise distance storage.
struct CondensedMatrix {
    n: usize,
    data: Vec<f64>,
}

impl CondensedMatrix {
    fn from_points(points: &[Vec<f32>]) -> Self {
        let n = points.len();
        let mut data = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                data.push(euclidean(&points[i], &points[j]));
            }
        }
        Self { n, data }
    }

    fn index(&self, i: usize, j: usize) -> usize {
        let (i, j) = if i < j { (i, j) } else { (j, i) };
        self.n * i - i * (i + 1) / 2 + (j - i - 1)
    }

    fn get(&self, i: usize, j: usize) -> f64 {
        self.data[self.index(i, j)]
    }

    fn set(&mut self, i: usize, j: usize, value: f64) {
        let idx = self.index(i, j);
        self.data[idx] = value;
    }
}

struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra != rb {
            self.parent[ra.max(rb)] = ra.min(rb);
        }
    }
}

/// Cluster `points` so that no merge at or above `threshold` happens.
///
/// Points are expected to be unit vectors of one dimension. Zero or one point
/// never computes a distance.
pub fn cluster_by_threshold(
    points: &[Vec<f32>],
    threshold: f64,
    linkage: Linkage,
) -> KbResult<AgglomerativeOutcome> {
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(ClusteringError::InvalidThreshold { threshold }.into());
    }
    let n = points.len();
    if n <= 1 {
        return Ok(AgglomerativeOutcome {
            labels: vec![0; n],
            num_clusters: n,
            stats: ClusteringStats {
                points: n,
                ..ClusteringStats::default()
            },
        });
    }
    let dims = points[0].len();
    if let Some(bad) = points.iter().find(|p| p.len() != dims) {
        return Err(ClusteringError::DimensionMismatch {
            expected: dims,
            actual: bad.len(),
        }
        .into());
    }

    let mut dist = CondensedMatrix::from_points(points);
    let distance_evaluations = dist.data.len();
    let mut size = vec![1usize; n];
    let mut active = vec![true; n];
    let mut chain: Vec<usize> = Vec::with_capacity(n);
    let mut uf = UnionFind::new(n);
    let mut merges = 0;

    for _ in 0..(n - 1) {
        if chain.is_empty() {
            if let Some(first) = active.iter().position(|&a| a) {
                chain.push(first);
            }
        }

        // Grow the chain until its last two elements are reciprocal nearest neighbours.
        let (a, b, d_ab) = loop {
            let a = chain[chain.len() - 1];
            let prev = chain.len().checked_sub(2).map(|i| chain[i]);
            let mut best = prev;
            let mut best_d = prev.map_or(f64::INFINITY, |p| dist.get(a, p));
            for x in 0..n {
                if x == a || !active[x] {
                    continue;
                }
                let d = dist.get(a, x);
                if d < best_d {
                    best = Some(x);
                    best_d = d;
                }
            }
            if best == prev {
                chain.truncate(chain.len().saturating_sub(2));
                break (a, best, best_d);
            }
            if let Some(b) = best {
                chain.push(b);
            }
        };
        let Some(b) = b else {
            break;
        };

        if d_ab < threshold {
            uf.union(a, b);
            merges += 1;
        }

        // Merged cluster lives in slot `keep`.
        let (keep, gone) = (a.min(b), a.max(b));
        for k in 0..n {
            if !active[k] || k == a || k == b {
                continue;
            }
            let d = updated_distance(
                linkage,
                dist.get(keep, k),
                dist.get(gone, k),
                d_ab,
                size[keep],
                size[gone],
                size[k],
            );
            dist.set(keep, k, d);
        }
        size[keep] += size[gone];
        active[gone] = false;
    }

    let mut labels = vec![usize::MAX; n];
    let mut root_label = vec![usize::MAX; n];
    let mut num_clusters = 0;
    for (i, label) in labels.iter_mut().enumerate() {
        let root = uf.find(i);
        if root_label[root] == usize::MAX {
            root_label[root] = num_clusters;
            num_clusters += 1;
        }
        *label = root_label[root];
    }

    Ok(AgglomerativeOutcome {
        labels,
        num_clusters,
        stats: ClusteringStats {
            points: n,
            merges,
            distance_evaluations,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(xs: &[f32]) -> Vec<Vec<f32>> {
        xs.iter().map(|x| vec![*x]).collect()
    }

    #[test]
    fn empty_and_single_compute_nothing() {
        let out = cluster_by_threshold(&[], 0.5, Linkage::Ward).unwrap();
        assert_eq!(out.num_clusters, 0);
        let out = cluster_by_threshold(&line(&[1.0]), 0.5, Linkage::Ward).unwrap();
        assert_eq!(out.labels, vec![0]);
        assert_eq!(out.stats.distance_evaluations, 0);
    }

    #[test]
    fn two_tight_groups_split() {
        let pts = line(&[0.0, 0.1, 0.2, 5.0, 5.1]);
        for linkage in [Linkage::Ward, Linkage::Average, Linkage::Complete, Linkage::Single] {
            let out = cluster_by_threshold(&pts, 1.0, linkage).unwrap();
            assert_eq!(out.labels, vec![0, 0, 0, 1, 1], "{linkage:?}");
            assert_eq!(out.stats.merges, 3);
            assert_eq!(out.stats.distance_evaluations, 10);
        }
    }

    #[test]
    fn merge_at_threshold_is_not_applied() {
        let pts = line(&[0.0, 0.5]);
        let out = cluster_by_threshold(&pts, 0.5, Linkage::Single).unwrap();
        assert_eq!(out.num_clusters, 2);
        let out = cluster_by_threshold(&pts, 0.5001, Linkage::Single).unwrap();
        assert_eq!(out.num_clusters, 1);
    }

    #[test]
    fn single_linkage_chains_but_complete_does_not() {
        let pts = line(&[0.0, 0.4, 0.8, 1.2]);
        let single = cluster_by_threshold(&pts, 0.5, Linkage::Single).unwrap();
        assert_eq!(single.num_clusters, 1);
        let complete = cluster_by_threshold(&pts, 0.5, Linkage::Complete).unwrap();
        assert_eq!(complete.num_clusters, 2);
    }

    #[test]
    fn labels_follow_lowest_member() {
        let pts = line(&[9.0, 0.0, 9.1, 0.1]);
        let out = cluster_by_threshold(&pts, 1.0, Linkage::Average).unwrap();
        assert_eq!(out.labels, vec![0, 1, 0, 1]);
        assert_eq!(out.groups(), vec![vec![0, 2], vec![1, 3]]);
    }

    #[test]
    fn rejects_bad_threshold_and_ragged_input() {
        assert!(cluster_by_threshold(&line(&[0.0, 1.0]), 0.0, Linkage::Ward).is_err());
        assert!(cluster_by_threshold(&line(&[0.0, 1.0]), f64::NAN, Linkage::Ward).is_err());
        let ragged = vec![vec![0.0, 1.0], vec![1.0]];
        assert!(cluster_by_threshold(&ragged, 0.5, Linkage::Ward).is_err());
    }
}
