use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractorError {
    #[error("Request to the emote API failed: {0}")]
    ConnectionError(#[from] reqwest::Error),

    #[error("Failed to parse JSON: {0}")]
    InvalidServerResponse(#[from] serde_json::Error),
}
