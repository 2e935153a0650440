//! Settings errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access preferences file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse preferences: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SettingsResult<T> = Result<T, SettingsError>;
