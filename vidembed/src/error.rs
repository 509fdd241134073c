use thiserror::Error;

/// Errors raised by the video component.
#[derive(Debug, Error)]
pub enum Error {
    // ── Metadata fetch ────────────────────────────────────────────────
    #[error("Brightcove responded with a {status} ({status_text}) for id {id}")]
    Status {
        id: String,
        status: u16,
        status_text: String,
    },
    #[error("metadata request failed: {0}")]
    Http(#[from] reqwest::Error),

    // ── Metadata projection ───────────────────────────────────────────
    #[error("video data has not been loaded for id {id}")]
    NotLoaded { id: String },
    #[error("invalid published date {0:?}")]
    InvalidDate(Option<String>),

    // ── Browser binding ───────────────────────────────────────────────
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
