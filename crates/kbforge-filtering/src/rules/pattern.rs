//! Noise regexes over the predicted object.

use std::collections::HashMap;

use regex::Regex;

use kbforge_core::errors::{FilteringError, KbResult};
use kbforge_core::models::{relation, Cluster, ScoreField};

use crate::rule::FilterRule;

/// Ages, founding dates, list fillers, URLs and bare numbers.
pub const NOISE_PATTERNS: &[&str] = &[
    r"(day|week|month|year)s*[- ]old",
    r"of the family",
    r"founded in \d+",
    r"established in \d+",
    r"introduced in \d+",
    r"placed in \d+",
    r"open in \d+",
    r"rebuilt in \d+",
    r"built in \d+",
    r"completed in \d+",
    r"a \d+$",
    r"for instance",
    r"for example",
    r"ranked in ",
    r"ranked among ",
    r"begin at \d+",
    r"start at \d+",
    r"originate in \d+",
    r"run to \d+",
    r"introduced to ",
    r"contacted at ",
    r"closed at \d+",
    r"open at \d+",
    r"www\.",
    r"https*//:\.",
    r"^[\d\.,]+$",
];

/// Extra patterns checked only under one predicted relation.
pub const RELATION_PATTERNS: &[(&str, &[&str])] = &[
    (
        relation::AT_LOCATION,
        &[
            r" use$", r" season$", r" risk$", r" vicinity$", r" proximity$", r" distance$",
            r" choices*$", r"^\d+$", r"^need of ", r" capacity$", r" time$", r" heat$",
            r" size$", r"mid-\d+",
        ],
    ),
    (relation::USED_FOR, &[r" purposes*$"]),
];

fn compile(pattern: &str) -> KbResult<Regex> {
    Regex::new(pattern).map_err(|e| {
        FilteringError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Rejects predicted objects matching a global or relation-specific pattern.
#[derive(Debug, Clone)]
pub struct RegexRule {
    global: Vec<Regex>,
    per_relation: HashMap<String, Vec<Regex>>,
}

impl RegexRule {
    /// Compile the given patterns; an invalid pattern is an error.
    pub fn new<'a>(
        global: impl IntoIterator<Item = &'a str>,
        per_relation: impl IntoIterator<Item = (String, Vec<&'a str>)>,
    ) -> KbResult<Self> {
        let global = global.into_iter().map(compile).collect::<KbResult<Vec<_>>>()?;
        let mut map: HashMap<String, Vec<Regex>> = HashMap::new();
        for (rel, patterns) in per_relation {
            let compiled = patterns.into_iter().map(compile).collect::<KbResult<Vec<_>>>()?;
            map.entry(rel).or_default().extend(compiled);
        }
        Ok(Self {
            global,
            per_relation: map,
        })
    }

    /// The built-in pattern sets, relation labels moved into `namespace`.
    pub fn standard(namespace: &str) -> KbResult<Self> {
        Self::new(
            NOISE_PATTERNS.iter().copied(),
            RELATION_PATTERNS
                .iter()
                .map(|&(rel, ps)| (super::rebase(rel, namespace), ps.to_vec())),
        )
    }

    fn pattern_count(&self) -> usize {
        self.global.len() + self.per_relation.values().map(Vec::len).sum::<usize>()
    }
}

impl FilterRule for RegexRule {
    fn name(&self) -> String {
        format!("RegexRule - {} patterns", self.pattern_count())
    }

    fn requires(&self) -> &[ScoreField] {
        &[ScoreField::PredictedRelation, ScoreField::PredictedObject]
    }

    fn validate(&self, cluster: &Cluster) -> bool {
        let object = cluster.predicted_object();
        let specific = self
            .per_relation
            .get(cluster.predicted_relation())
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        !self.global.iter().chain(specific).any(|re| re.is_match(object))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_pattern_is_rejected_at_construction() {
        let err = RegexRule::new(["(unclosed"], Vec::new()).unwrap_err();
        assert!(err.to_string().contains("(unclosed"));
    }

    #[test]
    fn standard_patterns_compile() {
        let rule = RegexRule::standard("/r/").unwrap();
        assert_eq!(rule.pattern_count(), NOISE_PATTERNS.len() + 15);
    }
}
