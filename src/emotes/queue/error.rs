use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueueError {
    #[error("Failed to create destination directory {}: {source}", path.display())]
    DirCreationError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
