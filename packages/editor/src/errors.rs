//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed project payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<gridstudio_common::CommonError> for EditorError {
    fn from(e: gridstudio_common::CommonError) -> Self {
        use gridstudio_common::CommonError;
        match e {
            CommonError::Io(io) => EditorError::Io(io),
            CommonError::Json(json) => EditorError::Json(json),
            CommonError::Generic(msg) => EditorError::Storage(msg),
        }
    }
}
