use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{what} with id {id} not found")]
    NotFound { what: &'static str, id: u64 },

    #[error("No ids left to assign")]
    IdsExhausted,

    #[error("Cannot determine install location: {0}")]
    InstallLocation(String),
}
