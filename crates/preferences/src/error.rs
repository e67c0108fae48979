use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("Failed to access preference file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Preference file is not a valid JSON object: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Preference store lock was poisoned")]
    Poisoned,
}
