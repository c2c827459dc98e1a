use serde::{Deserialize, Serialize};

/// Three-way sentiment distribution; components sum to 1 for a single assertion.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sentiment {
    pub negative: f64,
    pub neutral: f64,
    pub positive: f64,
}

impl Sentiment {
    pub fn new(negative: f64, neutral: f64, positive: f64) -> Self {
        Self {
            negative,
            neutral,
            positive,
        }
    }

    /// Component-wise mean. `None` for an empty input.
    pub fn mean<'a>(items: impl IntoIterator<Item = &'a Sentiment>) -> Option<Sentiment> {
        let mut sum = Sentiment::default();
        let mut n = 0usize;
        for s in items {
            sum.negative += s.negative;
            sum.neutral += s.neutral;
            sum.positive += s.positive;
            n += 1;
        }
        if n == 0 {
            return None;
        }
        let n = n as f64;
        Some(Sentiment::new(sum.negative / n, sum.neutral / n, sum.positive / n))
    }
}
