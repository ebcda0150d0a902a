use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to open file for writing: {source}")]
    FileIOError {
        #[from]
        source: io::Error,
    },

    #[error("Failed to serialize package document: {source}")]
    SerializeError {
        #[from]
        source: serde_json::Error,
    },
}
