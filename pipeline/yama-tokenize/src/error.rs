use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenizeError {
    #[error("malformed analyzer output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown tagset `{0}` (expected `ipadic` or `unidic`)")]
    UnknownTagset(String),
}
