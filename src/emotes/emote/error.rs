use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmoteError {
    #[error("Failed to open file: {}", path.display())]
    FileOpenFail {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write file: {source}")]
    FileIOError {
        #[from]
        source: io::Error,
    },

    #[error("Download failed: {source}")]
    ConnectionFail {
        #[from]
        source: reqwest::Error,
    },

    #[error("Error while fetching chunk: {message}")]
    ChunkDownloadFail { message: String },
}
