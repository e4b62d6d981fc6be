use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors from validating a cascade specification.
///
/// Each variant names the offending field and carries the underlying
/// [`ConstraintError`] as its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CascadeError {
    /// The separation factor must be a strictly positive, finite ratio.
    #[error("invalid separation factor: {0}")]
    SeparationFactor(#[source] ConstraintError),

    /// The feed purity must lie strictly inside (0, 1).
    #[error("invalid feed purity: {0}")]
    FeedPurity(#[source] ConstraintError),

    /// The target purity must lie strictly inside (0, 1).
    #[error("invalid target purity: {0}")]
    TargetPurity(#[source] ConstraintError),
}
