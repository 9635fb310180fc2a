//! Weak-verb lexicon shared by the action-word advisor and the resume rewriter.

/// Weak verb → stronger replacement phrase. Order is the application order
/// used by the rewriter and must stay stable.
pub const WEAK_TO_STRONG: &[(&str, &str)] = &[
    ("helped", "collaborated with/assisted in"),
    ("did", "executed/implemented"),
    ("worked", "contributed/implemented"),
    ("managed", "led/supervised"),
    ("responsible", "owned/oversaw"),
    ("handled", "coordinated/managed"),
    ("used", "utilized/leveraged"),
    ("made", "developed/engineered"),
    ("improved", "optimized/enhanced"),
];

/// Returns the replacement phrase for a lowercase weak verb.
pub fn strong_alternative(word: &str) -> Option<&'static str> {
    WEAK_TO_STRONG
        .iter()
        .find(|(weak, _)| *weak == word)
        .map(|(_, strong)| *strong)
}
