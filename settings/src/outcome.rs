use crate::classify::ErrorCategory;

/// What the model selector should currently display.
///
/// Exactly one variant is active at a time; the sync manager is the only
/// writer. `Idle` doubles as the initial state and the "fill in both
/// fields" prompt shown until a base URL and credential are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchOutcome {
    #[default]
    Idle,
    Loading,
    /// Deduplicated model identifiers in first-seen upstream order.
    Success(Vec<String>),
    Failure {
        category: ErrorCategory,
        message: String,
    },
}
