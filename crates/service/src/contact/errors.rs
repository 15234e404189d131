use thiserror::Error;

use super::domain::FieldErrors;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("invalid submission: {}", .0.keys().cloned().collect::<Vec<_>>().join(", "))]
    Invalid(FieldErrors),
    #[error("repository error: {0}")]
    Repository(String),
}
