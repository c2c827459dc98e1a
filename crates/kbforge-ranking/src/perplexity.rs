//! Sliding-window perplexity shared by language-model scorer implementations.
//!
//! A sentence of `n` tokens is scored in windows that advance by `stride`
//! and see at most `max_length` tokens of context. Each window contributes
//! the mean negative log-likelihood of its last `target_len` tokens.

use kbforge_core::errors::{KbResult, ScoringError};

/// Half-open token window `[begin, end)` whose last `target_len` tokens are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub begin: usize,
    pub end: usize,
    pub target_len: usize,
}

/// Windows covering `n_tokens` tokens. Every token is a target exactly once.
pub fn sliding_windows(n_tokens: usize, max_length: usize, stride: usize) -> KbResult<Vec<Window>> {
    if stride == 0 || max_length == 0 || stride > max_length {
        return Err(ScoringError::InvalidWindow { max_length, stride }.into());
    }
    Ok((0..n_tokens)
        .step_by(stride)
        .map(|i| {
            let end = (i + stride).min(n_tokens);
            Window {
                begin: (i + stride).saturating_sub(max_length),
                end,
                target_len: end - i,
            }
        })
        .collect())
}

/// `exp(Σ nll_i · target_len_i / n_tokens)` where `nll_i` is the mean
/// negative log-likelihood reported for window `i`. `None` for zero tokens.
pub fn perplexity_from_windows(mean_nlls: &[f64], windows: &[Window]) -> Option<f64> {
    let n_tokens = windows.last()?.end;
    if n_tokens == 0 {
        return None;
    }
    let total: f64 = mean_nlls
        .iter()
        .zip(windows)
        .map(|(nll, w)| nll * w.target_len as f64)
        .sum();
    Some((total / n_tokens as f64).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_is_one_window() {
        let w = sliding_windows(10, 1024, 512).unwrap();
        assert_eq!(w, vec![Window { begin: 0, end: 10, target_len: 10 }]);
    }

    #[test]
    fn long_input_slides_with_context() {
        let w = sliding_windows(1300, 1024, 512).unwrap();
        assert_eq!(w.len(), 3);
        assert_eq!(w[1], Window { begin: 0, end: 1024, target_len: 512 });
        assert_eq!(w[2], Window { begin: 512, end: 1300, target_len: 276 });
        assert_eq!(w.iter().map(|w| w.target_len).sum::<usize>(), 1300);

        let w = sliding_windows(3000, 1024, 512).unwrap();
        assert_eq!(w[3], Window { begin: 1024, end: 2048, target_len: 512 });
    }

    #[test]
    fn rejects_degenerate_windows() {
        assert!(sliding_windows(10, 0, 0).is_err());
        assert!(sliding_windows(10, 256, 512).is_err());
    }

    #[test]
    fn constant_nll_gives_its_exponent() {
        let w = sliding_windows(1300, 1024, 512).unwrap();
        let ppl = perplexity_from_windows(&[2.0, 2.0, 2.0], &w).unwrap();
        assert!((ppl - 2.0f64.exp()).abs() < 1e-9);
        assert!(perplexity_from_windows(&[], &[]).is_none());
    }
}
