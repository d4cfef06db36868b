use thiserror::Error;

/// Error type for record-set access failures and aborted pipeline runs.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A logical column key was requested that the schema does not declare.
    #[error("column '{column}' is not part of the source schema")]
    UnknownColumn {
        /// Logical key or physical header that failed to resolve.
        column: String,
    },
    /// A price cell could not be coerced to a numeric value.
    #[error("value '{value}' in column '{column}' is not numeric")]
    NonNumericValue {
        /// Physical header of the offending column.
        column: String,
        /// Raw cell text that failed to parse.
        value: String,
    },
    /// A stage raised internally; the run is aborted and the working copy
    /// must be discarded by the caller.
    #[error("stage '{stage}' failed: {reason}")]
    StageFailure {
        /// Name of the stage that failed.
        stage: &'static str,
        /// Underlying failure description.
        reason: String,
    },
    /// The pipeline completed but produced zero records. Distinct from
    /// [`PipelineError::StageFailure`] so callers can prompt for different
    /// criteria instead of reporting a generic failure.
    #[error("pipeline produced an empty collection")]
    EmptyResult,
    /// The supplied criteria are not a valid combination.
    #[error("invalid criteria: {0}")]
    Criteria(String),
}
