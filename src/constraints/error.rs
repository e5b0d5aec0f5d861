use thiserror::Error;

/// Errors found while validating a threshold constraint tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("Threshold requires {required} candidate(s) but only {candidates} are listed")]
    ThresholdExceedsCandidates { required: usize, candidates: usize },
}
