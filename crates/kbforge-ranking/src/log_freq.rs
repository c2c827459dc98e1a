//! Per-subject min-max normalised log-frequency.

use std::collections::HashMap;

use kbforge_core::models::{Cluster, ScorePatch, SubjectKey};
use kbforge_core::traits::ClusterUpdate;

/// `ln(count)` min-max scaled into [0, 1]. All-equal inputs all map to 1.0.
pub fn normalized_log_freq(counts: &[u64]) -> Vec<f64> {
    let logs: Vec<f64> = counts.iter().map(|&c| (c.max(1) as f64).ln()).collect();
    let Some(max) = logs.iter().copied().reduce(f64::max) else {
        return Vec::new();
    };
    let min = logs.iter().copied().fold(max, f64::min);
    if max == min {
        return vec![1.0; logs.len()];
    }
    logs.iter().map(|l| (l - min) / (max - min)).collect()
}

/// One `LogFreq` update per cluster, normalised among clusters of the same
/// subject sense. Pass every cluster of a subject together.
pub fn log_freq_updates(clusters: &[Cluster]) -> Vec<ClusterUpdate> {
    let mut groups: Vec<Vec<&Cluster>> = Vec::new();
    let mut index: HashMap<SubjectKey, usize> = HashMap::new();
    for c in clusters {
        let i = *index.entry(c.subject_key()).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[i].push(c);
    }

    groups
        .into_iter()
        .flat_map(|group| {
            let counts: Vec<u64> = group.iter().map(|c| c.count).collect();
            group
                .into_iter()
                .zip(normalized_log_freq(&counts))
                .map(|(c, v)| ClusterUpdate {
                    cluster_id: c.id.clone(),
                    patch: ScorePatch::LogFreq(v),
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremes_map_to_unit_interval() {
        let v = normalized_log_freq(&[3, 9, 27]);
        assert_eq!(v[0], 0.0);
        assert!((v[1] - 0.5).abs() < 1e-12);
        assert_eq!(v[2], 1.0);
    }

    #[test]
    fn ties_are_all_one() {
        assert_eq!(normalized_log_freq(&[4, 4]), vec![1.0, 1.0]);
        assert_eq!(normalized_log_freq(&[7]), vec![1.0]);
        assert!(normalized_log_freq(&[]).is_empty());
    }
}
