/// Weights of the composite score, in tenths.
#[derive(Debug, Clone, Copy)]
pub struct CompositeWeights {
    pub keyword_tenths: u32,
    pub readability_tenths: u32,
}

impl Default for CompositeWeights {
    fn default() -> Self {
        Self {
            keyword_tenths: 7,
            readability_tenths: 3,
        }
    }
}

/// `floor(0.7·keyword_score + 0.3·readability)`, computed in integer tenths so
/// the truncation is exact.
pub fn overall_score(keyword_score: u32, readability: u32) -> u32 {
    weighted_score(keyword_score, readability, &CompositeWeights::default())
}

/// Saturates instead of overflowing on out-of-range inputs.
pub fn weighted_score(keyword_score: u32, readability: u32, weights: &CompositeWeights) -> u32 {
    weights
        .keyword_tenths
        .saturating_mul(keyword_score)
        .saturating_add(weights.readability_tenths.saturating_mul(readability))
        / 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_score_max_inputs() {
        // 70 + 28.5 = 98.5 → 98
        assert_eq!(overall_score(100, 95), 98);
    }

    #[test]
    fn test_overall_score_truncates() {
        // 35 + 24.3 = 59.3 → 59
        assert_eq!(overall_score(50, 81), 59);
        // 0 + 3 = 3
        assert_eq!(overall_score(0, 10), 3);
    }

    #[test]
    fn test_overall_score_exact_multiples() {
        // 21 + 3 = 24 exactly; no float drift
        assert_eq!(overall_score(30, 10), 24);
        assert_eq!(overall_score(10, 10), 10);
    }

    #[test]
    fn test_overall_score_bounded() {
        for k in [0, 33, 66, 100] {
            for r in [10, 50, 95] {
                assert!(overall_score(k, r) <= 100);
            }
        }
    }

    #[test]
    fn test_custom_weights() {
        let w = CompositeWeights {
            keyword_tenths: 10,
            readability_tenths: 0,
        };
        assert_eq!(weighted_score(42, 95, &w), 42);
    }

    #[test]
    fn test_weighted_score_saturates_on_huge_inputs() {
        assert_eq!(overall_score(u32::MAX, u32::MAX), u32::MAX / 10);
        let w = CompositeWeights {
            keyword_tenths: u32::MAX,
            readability_tenths: 1,
        };
        assert_eq!(weighted_score(2, 0, &w), u32::MAX / 10);
    }
}
