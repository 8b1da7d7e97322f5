//! Validation errors for location drafts.

/// Reasons a draft field or a draft submission is rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DraftError {
    #[error("title is required")]
    MissingTitle,
    #[error("description is required")]
    MissingDescription,
    #[error("direction must be between 0 and 360 degrees, got {0}")]
    DirectionOutOfRange(f64),
}
