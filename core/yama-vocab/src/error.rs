use thiserror::Error;

#[derive(Debug, Error)]
pub enum VocabError {
    #[error("invalid word book JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid word book archive: {0}")]
    Archive(String),

    #[error("unsupported word book version {found} (this build reads up to {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
}
