use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed RLE pattern; `pos` is the byte offset where parsing stopped.
    #[error("malformed RLE at byte {pos}: {reason}")]
    Rle { pos: usize, reason: &'static str },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("gui error: {0}")]
    Gui(String),
}
