use thiserror::Error;

/// Failures of the Delta computation itself.
///
/// Pipeline stages surface these through `anyhow`; callers that need the kind
/// can recover it with `anyhow::Error::downcast_ref::<DeltaError>()`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeltaError {
    #[error("token sequence for '{entity}' is empty; relative frequency is undefined")]
    InsufficientData { entity: String },

    #[error("at least 2 candidate authors are required, got {found}")]
    InsufficientCandidates { found: usize },

    #[error("feature '{feature}' has zero standard deviation across candidates")]
    DegenerateFeature { feature: String },

    #[error("no token sequence for author '{label}'")]
    UnknownAuthor { label: String },

    #[error("candidate '{label}' listed more than once")]
    DuplicateCandidate { label: String },

    #[error("candidate label '{label}' is reserved for the unknown sample")]
    ReservedLabel { label: String },

    #[error("vector length mismatch: expected {expected}, got {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("non-finite value in {stage}: {detail}")]
    NonFinite { stage: &'static str, detail: String },
}
